use crate::domain::commands::debit_orders::CreateDebitOrderCommand;
use crate::domain::models::{
    DebitOrder as DomainDebitOrder, UpcomingDebitOrder as DomainUpcomingDebitOrder,
};
use chrono::NaiveDate;
use shared::{
    CreateDebitOrderRequest, DebitOrder as SharedDebitOrder,
    UpcomingDebitOrder as SharedUpcomingDebitOrder, UpcomingDebitOrdersResponse,
};

const DATE_FORMAT: &str = "%Y-%m-%d";

pub struct DebitOrderMapper;

impl DebitOrderMapper {
    pub fn to_dto(domain: DomainDebitOrder) -> SharedDebitOrder {
        SharedDebitOrder {
            id: domain.id,
            name: domain.name,
            amount: domain.amount,
            due_date: domain.due_date,
        }
    }

    pub fn to_create_command(request: CreateDebitOrderRequest) -> CreateDebitOrderCommand {
        CreateDebitOrderCommand {
            name: request.name,
            amount: request.amount,
            due_date: request.due_date,
        }
    }

    pub fn to_upcoming_response(
        from_date: NaiveDate,
        upcoming: Vec<DomainUpcomingDebitOrder>,
    ) -> UpcomingDebitOrdersResponse {
        let total_amount = upcoming.iter().map(|u| u.debit_order.amount).sum();
        UpcomingDebitOrdersResponse {
            from_date: from_date.format(DATE_FORMAT).to_string(),
            upcoming: upcoming
                .into_iter()
                .map(|u| SharedUpcomingDebitOrder {
                    debit_order: Self::to_dto(u.debit_order),
                    next_due_date: u.next_due_date.format(DATE_FORMAT).to_string(),
                    days_until_due: u.days_until_due,
                })
                .collect(),
            total_amount,
        }
    }
}
