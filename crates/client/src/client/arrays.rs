//! Array information API methods for [`NimbleClient`].

use crate::client::NimbleClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::ArrayInfo;

impl NimbleClient {
    /// Get the array's name, serial number and software version.
    pub async fn get_array_info(&mut self) -> Result<ArrayInfo> {
        let token = self.get_auth_token().await?;
        endpoints::get_array_info(&self.http, &self.base_url, &token).await
    }
}
