//! Budget arithmetic over already-loaded records.
//!
//! Everything here is a pure function over slices: sums, averages,
//! percentages and a sort. The services load the records and hand them in,
//! which keeps these reductions trivially testable.

use chrono::NaiveDate;
use shared::{BudgetSummary, CategoryTotal, SpendingBreakdown, TransactionStats};
use std::collections::HashMap;

use super::models::{DebitOrder, Transaction, TransactionType, UpcomingDebitOrder, YearMonth};

const UNCATEGORIZED: &str = "Uncategorized";

pub fn total_debit_orders(debit_orders: &[DebitOrder]) -> f64 {
    debit_orders.iter().map(|debit| debit.amount).sum()
}

/// Income transactions minus expense transactions
pub fn transaction_balance(transactions: &[Transaction]) -> f64 {
    transactions.iter().map(Transaction::signed_amount).sum()
}

/// monthly income − Σ debit orders + Σ income transactions − Σ expense transactions
pub fn balance(monthly_income: f64, debit_orders: &[DebitOrder], transactions: &[Transaction]) -> f64 {
    monthly_income - total_debit_orders(debit_orders) + transaction_balance(transactions)
}

/// (income − spent) / income × 100, or 0 when there is no income
pub fn savings_percentage(income: f64, spent: f64) -> f64 {
    if income == 0.0 {
        return 0.0;
    }
    (income - spent) / income * 100.0
}

pub fn filter_by_month(transactions: Vec<Transaction>, month: Option<YearMonth>) -> Vec<Transaction> {
    match month {
        Some(month) => transactions
            .into_iter()
            .filter(|t| month.contains(&t.timestamp))
            .collect(),
        None => transactions,
    }
}

pub fn transaction_stats(transactions: &[Transaction], month: Option<YearMonth>) -> TransactionStats {
    let mut total_income = 0.0;
    let mut total_expenses = 0.0;
    let mut income_count = 0;
    let mut expense_count = 0;

    for transaction in transactions {
        match transaction.transaction_type {
            TransactionType::Income => {
                total_income += transaction.amount;
                income_count += 1;
            }
            TransactionType::Expense => {
                total_expenses += transaction.amount;
                expense_count += 1;
            }
        }
    }

    TransactionStats {
        month: month.map(|m| m.to_string()),
        total_income,
        total_expenses,
        income_count,
        expense_count,
        average_income: average(total_income, income_count),
        average_expense: average(total_expenses, expense_count),
    }
}

fn average(total: f64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        total / count as f64
    }
}

/// Group expense transactions by category.
///
/// Transactions are keyed by category id, falling back to the category name
/// for records stored without one. `total_spent` is summed from the category
/// totals themselves so the breakdown always partitions it exactly.
pub fn spending_breakdown(transactions: &[Transaction], month: Option<YearMonth>) -> SpendingBreakdown {
    let mut groups: HashMap<String, CategoryTotal> = HashMap::new();

    for transaction in transactions.iter().filter(|t| t.is_expense()) {
        let category_id = transaction
            .category_id
            .as_ref()
            .filter(|id| !id.is_empty())
            .cloned();
        let category_name = if transaction.category_name.trim().is_empty() {
            UNCATEGORIZED.to_string()
        } else {
            transaction.category_name.clone()
        };
        let key = category_id
            .clone()
            .unwrap_or_else(|| format!("name:{}", category_name));

        let entry = groups.entry(key).or_insert_with(|| CategoryTotal {
            category_id,
            category_name,
            total: 0.0,
            transaction_count: 0,
            percentage: 0.0,
        });
        entry.total += transaction.amount;
        entry.transaction_count += 1;
    }

    let mut categories: Vec<CategoryTotal> = groups.into_values().collect();
    categories.sort_by(|a, b| {
        b.total
            .total_cmp(&a.total)
            .then_with(|| a.category_name.cmp(&b.category_name))
    });

    let total_spent: f64 = categories.iter().map(|c| c.total).sum();
    for category in &mut categories {
        category.percentage = if total_spent == 0.0 {
            0.0
        } else {
            category.total / total_spent * 100.0
        };
    }

    SpendingBreakdown {
        month: month.map(|m| m.to_string()),
        total_spent,
        categories,
    }
}

/// Dashboard headline numbers.
///
/// Savings compare everything that came in (main income plus income
/// transactions) against expense transactions.
pub fn budget_summary(
    monthly_income: f64,
    debit_orders: &[DebitOrder],
    transactions: &[Transaction],
    month: Option<YearMonth>,
) -> BudgetSummary {
    let stats = transaction_stats(transactions, month);
    let total_debit_orders = total_debit_orders(debit_orders);
    let transaction_balance = transaction_balance(transactions);

    BudgetSummary {
        month: stats.month.clone(),
        monthly_income,
        total_debit_orders,
        total_income: stats.total_income,
        total_expenses: stats.total_expenses,
        transaction_balance,
        balance: monthly_income - total_debit_orders + transaction_balance,
        savings_percentage: savings_percentage(monthly_income + stats.total_income, stats.total_expenses),
        transaction_count: transactions.len(),
    }
}

/// The next date on or after `today` whose day-of-month is `due_day`.
///
/// Months shorter than `due_day` use their last day instead, so an order due
/// on the 31st goes off on the 28th/29th in February.
pub fn next_due_date(due_day: u32, today: NaiveDate) -> Option<NaiveDate> {
    if !(1..=31).contains(&due_day) {
        return None;
    }
    let this_month = YearMonth::of(today);
    let candidate = clamped_day(this_month, due_day)?;
    if candidate >= today {
        Some(candidate)
    } else {
        clamped_day(this_month.next(), due_day)
    }
}

fn clamped_day(month: YearMonth, due_day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(month.year, month.month, due_day.min(month.days_in_month()))
}

/// Next occurrence of every debit order, soonest first
pub fn upcoming_debit_orders(debit_orders: &[DebitOrder], today: NaiveDate) -> Vec<UpcomingDebitOrder> {
    let mut upcoming: Vec<UpcomingDebitOrder> = debit_orders
        .iter()
        .filter_map(|debit| {
            next_due_date(debit.due_date, today).map(|next_due_date| UpcomingDebitOrder {
                debit_order: debit.clone(),
                next_due_date,
                days_until_due: (next_due_date - today).num_days(),
            })
        })
        .collect();

    upcoming.sort_by(|a, b| {
        a.next_due_date
            .cmp(&b.next_due_date)
            .then_with(|| a.debit_order.name.cmp(&b.debit_order.name))
    });
    upcoming
}
