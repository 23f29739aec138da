use super::{CategoryMapper, DebitOrderMapper, TransactionMapper};
use crate::domain::models::MainIncome as DomainMainIncome;
use crate::domain::Dashboard;
use crate::storage::ChangeNotice;
use shared::{ChangeNotification, DashboardSnapshot, MainIncome as SharedMainIncome};

pub struct BudgetMapper;

impl BudgetMapper {
    /// An unset main income is reported as zero with no update time
    pub fn to_main_income_dto(domain: Option<DomainMainIncome>) -> SharedMainIncome {
        match domain {
            Some(income) => SharedMainIncome {
                amount: income.amount,
                updated_at: Some(income.updated_at.to_rfc3339()),
            },
            None => SharedMainIncome {
                amount: 0.0,
                updated_at: None,
            },
        }
    }

    pub fn to_dashboard_dto(dashboard: Dashboard) -> DashboardSnapshot {
        DashboardSnapshot {
            revision: dashboard.revision,
            transactions: dashboard.transactions.into_iter().map(TransactionMapper::to_dto).collect(),
            categories: dashboard.categories.into_iter().map(CategoryMapper::to_dto).collect(),
            debit_orders: dashboard.debit_orders.into_iter().map(DebitOrderMapper::to_dto).collect(),
            main_income: Self::to_main_income_dto(dashboard.main_income),
            summary: dashboard.summary,
        }
    }

    pub fn to_change_notification(notice: Option<ChangeNotice>, current_revision: u64) -> ChangeNotification {
        match notice {
            Some(notice) => ChangeNotification {
                revision: notice.revision,
                changed: true,
                collection: notice.collection,
                kind: notice.kind,
                document_id: notice.document_id,
            },
            None => ChangeNotification {
                revision: current_revision,
                changed: false,
                collection: None,
                kind: None,
                document_id: None,
            },
        }
    }
}
