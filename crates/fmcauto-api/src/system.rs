// Platform info endpoints

use crate::client::FmcClient;
use crate::error::Error;
use crate::models::{Page, ServerVersion};

impl FmcClient {
    /// Controller software versions.
    ///
    /// `GET /api/fmc_platform/v1/info/serverversion`
    pub async fn server_version(&self) -> Result<ServerVersion, Error> {
        let url = self.platform_url("info/serverversion")?;
        let page: Page<ServerVersion> = self.get(url, &[]).await?;
        page.items.into_iter().next().ok_or_else(|| Error::Api {
            status: 200,
            message: "server version listing was empty".into(),
        })
    }
}
