use crate::model::{id::PackageId, package::Package};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait PackageRepository: Send + Sync {
    async fn find_by_id(&self, package_id: PackageId) -> AppResult<Option<Package>>;
}
