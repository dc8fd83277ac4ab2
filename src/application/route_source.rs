// Route data source trait
use crate::domain::route::RouteData;
use async_trait::async_trait;

#[async_trait]
pub trait RouteDataSource: Send + Sync {
    /// Load the full route snapshot. Called once, before any widget is set up.
    async fn load(&self) -> anyhow::Result<RouteData>;

    /// Where the data comes from, for logs and error messages
    fn location(&self) -> String;
}
