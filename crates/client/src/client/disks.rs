//! Disk API methods for [`NimbleClient`].

use crate::client::NimbleClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{Collection, Disk};

impl NimbleClient {
    /// Get status records for every disk slot.
    pub async fn get_disk_details(&mut self) -> Result<Collection<Disk>> {
        let token = self.get_auth_token().await?;
        endpoints::get_disk_details(&self.http, &self.base_url, &token).await
    }
}
