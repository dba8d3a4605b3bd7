use crate::database::{model::package::PackageRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{id::PackageId, package::Package};
use kernel::repository::package::PackageRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct PackageRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl PackageRepository for PackageRepositoryImpl {
    async fn find_by_id(&self, package_id: PackageId) -> AppResult<Option<Package>> {
        let row: Option<PackageRow> = sqlx::query_as(
            r#"
                SELECT
                    package_id,
                    name,
                    description,
                    price,
                    deposit_amount,
                    duration,
                    max_people,
                    preferred_rooms,
                    is_active
                FROM packages
                WHERE package_id = $1
            "#,
        )
        .bind(package_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Package::from))
    }
}
