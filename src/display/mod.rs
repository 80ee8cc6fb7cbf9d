//! Terminal display helpers
//!
//! Row types and table builders for list output.

use tabled::{Table, Tabled};

use crate::models::{
    Advice, Badge, Budget, Challenge, Expense, MonthlyIncome, SavingsGoal, Tip,
};

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Description")]
    description: String,
}

/// Render expenses as a table
pub fn expense_table(expenses: &[Expense]) -> String {
    let rows: Vec<ExpenseRow> = expenses
        .iter()
        .map(|e| ExpenseRow {
            id: e.id.to_string(),
            date: e.date.to_string(),
            category: e.category.to_string(),
            amount: e.amount.to_string(),
            description: e.description.clone(),
        })
        .collect();
    Table::new(rows).to_string()
}

#[derive(Tabled)]
struct GoalRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Saved")]
    saved: String,
    #[tabled(rename = "Target")]
    target: String,
    #[tabled(rename = "Progress")]
    progress: String,
    #[tabled(rename = "Deadline")]
    deadline: String,
}

/// Render savings goals as a table
pub fn goal_table(goals: &[SavingsGoal]) -> String {
    let rows: Vec<GoalRow> = goals
        .iter()
        .map(|g| GoalRow {
            id: g.id.to_string(),
            name: g.name.clone(),
            saved: g.current_amount.to_string(),
            target: g.target_amount.to_string(),
            progress: format!("{:.0}%", g.progress_percent()),
            deadline: g.deadline.to_string(),
        })
        .collect();
    Table::new(rows).to_string()
}

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Limit")]
    limit: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
}

/// Render budgets as a table
pub fn budget_table(budgets: &[Budget]) -> String {
    let rows: Vec<BudgetRow> = budgets
        .iter()
        .map(|b| BudgetRow {
            id: b.id.to_string(),
            month: b.month.to_string(),
            category: b.category.to_string(),
            spent: b.current_spent.to_string(),
            limit: b.monthly_limit.to_string(),
            remaining: b.remaining().to_string(),
        })
        .collect();
    Table::new(rows).to_string()
}

#[derive(Tabled)]
struct IncomeRow {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Source")]
    source: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Recurring")]
    recurring: String,
}

/// Render income entries as a table
pub fn income_table(income: &[MonthlyIncome]) -> String {
    let rows: Vec<IncomeRow> = income
        .iter()
        .map(|i| IncomeRow {
            month: i.month.to_string(),
            source: i.source.clone(),
            amount: i.amount.to_string(),
            recurring: if i.is_recurring { "yes" } else { "no" }.to_string(),
        })
        .collect();
    Table::new(rows).to_string()
}

#[derive(Tabled)]
struct ChallengeRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Window")]
    window: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Progress")]
    progress: String,
}

/// Render challenges as a table
pub fn challenge_table(challenges: &[Challenge]) -> String {
    let rows: Vec<ChallengeRow> = challenges
        .iter()
        .map(|c| ChallengeRow {
            id: c.id.to_string(),
            name: c.name.clone(),
            kind: c.kind.label().to_string(),
            window: format!("{}..{}", c.start_date, c.end_date),
            status: c.status.to_string(),
            progress: format!("{:.0}%", c.progress),
        })
        .collect();
    Table::new(rows).to_string()
}

/// Render tips as a numbered list
pub fn tip_list(tips: &[Tip]) -> String {
    if tips.is_empty() {
        return "No tips right now - keep logging expenses and income.".to_string();
    }
    tips.iter()
        .enumerate()
        .map(|(i, t)| {
            format!(
                "{}. {} (confidence {:.0}%, ~{}/year)",
                i + 1,
                t.text,
                t.confidence * 100.0,
                t.impact_yearly
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render advice as priority-tagged blocks
pub fn advice_report(advice: &[Advice]) -> String {
    if advice.is_empty() {
        return "No advice right now - add income and expense data first.".to_string();
    }
    advice
        .iter()
        .map(|a| {
            let mut block = format!("[{}] {}\n    {}", a.priority, a.title, a.message);
            for item in &a.action_items {
                block.push_str(&format!("\n    - {}", item));
            }
            block
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Render earned badges as a short list
pub fn badge_list(badges: &[Badge]) -> String {
    if badges.is_empty() {
        return "No badges earned yet.".to_string();
    }
    badges
        .iter()
        .map(|b| format!("{} {} - {}", b.icon, b.name, b.description))
        .collect::<Vec<_>>()
        .join("\n")
}
