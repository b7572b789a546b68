use crate::domain::model::{Fact, Instance};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn count(&self) -> usize;
    fn domain_size(&self) -> i64;
    fn predicate(&self) -> &str;
    fn max_tag(&self) -> u32;
    fn file_name(&self) -> &str;
}

/// 三階段產生流程：抽樣 -> 組裝 -> 輸出
#[async_trait]
pub trait Generator: Send + Sync {
    async fn sample(&self) -> Result<Vec<Fact>>;
    async fn assemble(&self, facts: Vec<Fact>) -> Result<Instance>;
    async fn emit(&self, instance: Instance) -> Result<String>;
}
