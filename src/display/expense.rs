//! Expense display formatting
//!
//! Formats the numbered expense list and the category summary for terminal output.

use crate::models::{Money, DATE_FORMAT};
use crate::services::{CategorySummary, NumberedExpense};

/// Shown in place of an empty category label
const UNCATEGORIZED: &str = "(none)";

fn category_label(name: &str) -> &str {
    if name.is_empty() {
        UNCATEGORIZED
    } else {
        name
    }
}

/// Format expenses as a numbered table
pub fn format_expense_list(expenses: &[NumberedExpense], currency_symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let category_width = expenses
        .iter()
        .map(|e| category_label(e.expense.category().as_str()).chars().count())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:>4}  {:10}  {:<width$}  {:>12}\n",
        "#",
        "Date",
        "Category",
        "Amount",
        width = category_width
    ));
    output.push_str(&"-".repeat(4 + 2 + 10 + 2 + category_width + 2 + 12));
    output.push('\n');

    for numbered in expenses {
        let expense = &numbered.expense;
        output.push_str(&format!(
            "{:>4}  {:10}  {:<width$}  {:>12}\n",
            numbered.number,
            expense.date().format(DATE_FORMAT).to_string(),
            category_label(expense.category().as_str()),
            expense.amount().format_with_symbol(currency_symbol),
            width = category_width
        ));
    }

    output
}

/// Format per-category totals followed by a grand total
pub fn format_category_summary(summary: &CategorySummary, currency_symbol: &str) -> String {
    if summary.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let name_width = summary
        .keys()
        .map(|name| category_label(name).chars().count())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str("Category Summary:\n");

    for (name, total) in summary {
        output.push_str(&format!(
            "  {:<width$}  {:>12}\n",
            category_label(name),
            total.format_with_symbol(currency_symbol),
            width = name_width
        ));
    }

    let grand_total: Money = summary.values().copied().sum();
    output.push_str(&format!(
        "  {:<width$}  {:>12}\n",
        "Total",
        grand_total.format_with_symbol(currency_symbol),
        width = name_width
    ));

    output
}
