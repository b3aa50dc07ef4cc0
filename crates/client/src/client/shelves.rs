//! Shelf API methods for [`NimbleClient`].

use crate::client::NimbleClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{Collection, ShelfDetail, ShelfSummary};

impl NimbleClient {
    /// List shelves with their row bounds.
    pub async fn list_shelves(&mut self) -> Result<Collection<ShelfSummary>> {
        let token = self.get_auth_token().await?;
        endpoints::list_shelves(&self.http, &self.base_url, &token).await
    }

    /// Get hardware status records for all shelves.
    pub async fn get_shelf_details(&mut self) -> Result<Vec<ShelfDetail>> {
        let token = self.get_auth_token().await?;
        endpoints::get_shelf_details(&self.http, &self.base_url, &token).await
    }
}
