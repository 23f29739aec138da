use crate::domain::commands::transactions::{
    CreateTransactionCommand, TransactionListQuery, TransactionListResult,
};
use crate::domain::models::{
    Transaction as DomainTransaction, TransactionType as DomainTransactionType, YearMonth,
};
use shared::{
    CreateTransactionRequest, PaginationInfo, Transaction as SharedTransaction,
    TransactionListResponse, TransactionType as SharedTransactionType,
};

pub struct TransactionMapper;

impl TransactionMapper {
    pub fn to_dto(domain: DomainTransaction) -> SharedTransaction {
        SharedTransaction {
            id: domain.id,
            description: domain.description,
            amount: domain.amount,
            transaction_type: Self::to_dto_type(domain.transaction_type),
            category_id: domain.category_id,
            category_name: domain.category_name,
            timestamp: domain.timestamp.to_rfc3339(),
            created_at: domain.created_at.to_rfc3339(),
        }
    }

    pub fn to_create_command(request: CreateTransactionRequest) -> CreateTransactionCommand {
        CreateTransactionCommand {
            description: request.description,
            amount: request.amount,
            transaction_type: Self::to_domain_type(request.transaction_type),
            category_id: request.category_id,
            timestamp: request.timestamp,
        }
    }

    pub fn to_list_query(
        month: Option<YearMonth>,
        transaction_type: Option<DomainTransactionType>,
        after: Option<String>,
        limit: Option<u32>,
    ) -> TransactionListQuery {
        TransactionListQuery {
            month,
            transaction_type,
            after,
            limit,
        }
    }

    pub fn to_list_response(result: TransactionListResult) -> TransactionListResponse {
        TransactionListResponse {
            transactions: result.transactions.into_iter().map(Self::to_dto).collect(),
            pagination: PaginationInfo {
                has_more: result.pagination.has_more,
                next_cursor: result.pagination.next_cursor,
            },
        }
    }

    pub fn to_domain_type(dto_type: SharedTransactionType) -> DomainTransactionType {
        match dto_type {
            SharedTransactionType::Income => DomainTransactionType::Income,
            SharedTransactionType::Expense => DomainTransactionType::Expense,
        }
    }

    pub fn to_dto_type(domain_type: DomainTransactionType) -> SharedTransactionType {
        match domain_type {
            DomainTransactionType::Income => SharedTransactionType::Income,
            DomainTransactionType::Expense => SharedTransactionType::Expense,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::period::parse_timestamp;

    #[test]
    fn test_to_dto_formats_timestamps() {
        let timestamp = parse_timestamp("2025-03-01T10:00:00Z").unwrap();
        let dto = TransactionMapper::to_dto(DomainTransaction {
            id: "in-1-abcd".to_string(),
            description: "Salary".to_string(),
            amount: 100.0,
            transaction_type: DomainTransactionType::Income,
            category_id: Some("cat-1".to_string()),
            category_name: "Work".to_string(),
            timestamp,
            created_at: timestamp,
        });

        assert_eq!(dto.transaction_type, SharedTransactionType::Income);
        assert_eq!(dto.timestamp, "2025-03-01T10:00:00+00:00");
        assert_eq!(dto.category_name, "Work");
    }
}
