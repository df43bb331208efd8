use fmcauto_api::ServerVersion;

use crate::error::CoreError;
use crate::session::Session;

impl Session {
    /// Controller software versions.
    pub async fn server_version(&self) -> Result<ServerVersion, CoreError> {
        Ok(self.client().server_version().await?)
    }
}
