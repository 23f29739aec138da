use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a transaction or category adds money or spends it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    #[default]
    Expense,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionType::Income => write!(f, "income"),
            TransactionType::Expense => write!(f, "expense"),
        }
    }
}

/// Categories classify transactions with the same income/expense split
pub type CategoryType = TransactionType;

/// A recorded income or expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    /// What the money was for (max 256 characters)
    pub description: String,
    /// Always positive; the sign comes from `transaction_type`
    pub amount: f64,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub category_id: Option<String>,
    /// Name of the category at the time the transaction was recorded
    pub category_name: String,
    /// When the transaction happened (RFC 3339)
    pub timestamp: String,
    /// When the record was stored (RFC 3339)
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub category_type: CategoryType,
}

/// A recurring monthly deduction, independent of recorded transactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebitOrder {
    pub id: String,
    pub name: String,
    pub amount: f64,
    /// Day of the month the order goes off (1-31)
    pub due_date: u32,
}

/// The singleton main monthly income setting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MainIncome {
    pub amount: f64,
    /// None when the income has never been set
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionRequest {
    pub description: String,
    pub amount: f64,
    #[serde(rename = "type", default)]
    pub transaction_type: TransactionType,
    pub category_id: String,
    /// Optional date override (RFC 3339 or YYYY-MM-DD) - uses current time if not provided
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionListResponse {
    pub transactions: Vec<Transaction>,
    pub pagination: PaginationInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInfo {
    pub has_more: bool,
    pub next_cursor: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryRequest {
    pub name: String,
    #[serde(rename = "type", default)]
    pub category_type: CategoryType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDebitOrderRequest {
    pub name: String,
    pub amount: f64,
    #[serde(default = "default_due_date")]
    pub due_date: u32,
}

fn default_due_date() -> u32 {
    1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMainIncomeRequest {
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub deleted_id: String,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Headline numbers shown on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSummary {
    /// Month the transaction figures cover (YYYY-MM), None for all time
    pub month: Option<String>,
    pub monthly_income: f64,
    pub total_debit_orders: f64,
    /// Sum of income transactions
    pub total_income: f64,
    /// Sum of expense transactions
    pub total_expenses: f64,
    /// Income transactions minus expense transactions
    pub transaction_balance: f64,
    /// Monthly income minus debit orders plus the transaction balance
    pub balance: f64,
    pub savings_percentage: f64,
    pub transaction_count: usize,
}

/// Spending for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotal {
    pub category_id: Option<String>,
    pub category_name: String,
    pub total: f64,
    pub transaction_count: usize,
    /// Share of total spent, 0-100
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpendingBreakdown {
    pub month: Option<String>,
    /// Sum of the category totals below
    pub total_spent: f64,
    pub categories: Vec<CategoryTotal>,
}

/// Per-type totals and averages over the recorded transactions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionStats {
    pub month: Option<String>,
    pub total_income: f64,
    pub total_expenses: f64,
    pub income_count: usize,
    pub expense_count: usize,
    pub average_income: f64,
    pub average_expense: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingDebitOrder {
    pub debit_order: DebitOrder,
    /// Next date the order goes off (YYYY-MM-DD)
    pub next_due_date: String,
    pub days_until_due: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingDebitOrdersResponse {
    /// The date the schedule was computed from (YYYY-MM-DD)
    pub from_date: String,
    pub upcoming: Vec<UpcomingDebitOrder>,
    pub total_amount: f64,
}

/// Everything a dashboard needs in one read, tagged with the store revision
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub revision: u64,
    pub transactions: Vec<Transaction>,
    pub categories: Vec<Category>,
    pub debit_orders: Vec<DebitOrder>,
    pub main_income: MainIncome,
    pub summary: BudgetSummary,
}

/// Which collection a change touched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Collection {
    Transactions,
    Categories,
    DebitOrders,
    BudgetSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChangeKind {
    Added,
    Modified,
    Removed,
}

/// Result of waiting on the change feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeNotification {
    pub revision: u64,
    /// False when the wait timed out without a newer revision
    pub changed: bool,
    pub collection: Option<Collection>,
    pub kind: Option<ChangeKind>,
    pub document_id: Option<String>,
}
