use super::TransactionMapper;
use crate::domain::commands::categories::CreateCategoryCommand;
use crate::domain::models::Category as DomainCategory;
use shared::{Category as SharedCategory, CreateCategoryRequest};

pub struct CategoryMapper;

impl CategoryMapper {
    pub fn to_dto(domain: DomainCategory) -> SharedCategory {
        SharedCategory {
            id: domain.id,
            name: domain.name,
            category_type: TransactionMapper::to_dto_type(domain.category_type),
        }
    }

    pub fn to_create_command(request: CreateCategoryRequest) -> CreateCategoryCommand {
        CreateCategoryCommand {
            name: request.name,
            category_type: TransactionMapper::to_domain_type(request.category_type),
        }
    }
}
