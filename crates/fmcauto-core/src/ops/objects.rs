// Address object creation.

use tracing::info;

use fmcauto_api::ApiResponse;

use crate::error::CoreError;
use crate::model::{AddressObject, AddressObjectDraft};
use crate::session::Session;

impl Session {
    /// Create a host, FQDN, network or range object.
    ///
    /// The object type is checked before anything goes on the wire.
    pub async fn create_address_object(
        &self,
        draft: AddressObjectDraft,
    ) -> Result<ApiResponse, CoreError> {
        let object = AddressObject::try_from(draft)?;

        info!(
            name = %object.name,
            kind = %object.kind,
            value = object.value.as_deref().unwrap_or_default(),
            "creating address object"
        );
        let resp = self
            .client()
            .create_object(object.kind.as_ref(), &object.payload())
            .await?;
        info!(status = resp.status, "address object request complete");
        Ok(resp)
    }
}
