use async_trait::async_trait;

use crate::error::FetchFailure;
use crate::semrush::Query;
use crate::table::Table;

#[async_trait]
pub trait AnalyticsClient: Send + Sync {
    /// クエリを1回実行し、成功時は出所列付きの表を返す
    async fn call(&self, query: &Query) -> Result<Table, FetchFailure>;
}
