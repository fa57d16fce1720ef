use sqlx::MySqlPool;

use crate::core::{require, AppError, Result};
use crate::modules::financials::repositories::FinancialRepository;
use crate::modules::monetary_types::models::MonetaryType;
use crate::modules::monetary_types::repositories::MonetaryTypeRepository;

/// Business logic for monetary types
pub struct MonetaryTypeService {
    repository: MonetaryTypeRepository,
    financials: FinancialRepository,
}

impl MonetaryTypeService {
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            repository: MonetaryTypeRepository::new(pool.clone()),
            financials: FinancialRepository::new(pool),
        }
    }

    pub async fn get_monetary_type(&self, id: &str) -> Result<MonetaryType> {
        require(self.repository.find_by_id(id).await?, "Monetary Type", &id)
    }

    pub async fn list_monetary_types(&self, limit: i64, offset: i64) -> Result<Vec<MonetaryType>> {
        self.repository.list(limit, offset).await
    }

    pub async fn search_by_name(
        &self,
        name: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<MonetaryType>> {
        self.repository.search_by_name(name, limit, offset).await
    }

    pub async fn create_monetary_type(&self, name: String) -> Result<MonetaryType> {
        let monetary_type = MonetaryType::new(name);
        self.repository.insert(&monetary_type).await?;
        Ok(monetary_type)
    }

    pub async fn delete_monetary_type(&self, id: &str) -> Result<()> {
        self.get_monetary_type(id).await?;

        if self.financials.exists_by_monetary_type(id).await? {
            return Err(AppError::business(
                "Cannot delete this monetary type because it is being used by financial",
            ));
        }

        self.repository.delete(id).await
    }
}
