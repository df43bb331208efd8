// NAT policy and auto-NAT rule endpoints
//
// Policies live at `.../policy/ftdnatpolicies`; their auto-NAT rules are a
// sub-resource keyed by policy id. Both listings accept `expanded=true` for
// denormalized records.

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::client::FmcClient;
use crate::error::Error;
use crate::models::{ApiResponse, ObjectSummary, Page};

const NAT_POLICIES: &str = "policy/ftdnatpolicies";

fn expanded_params(expanded: bool) -> Vec<(&'static str, String)> {
    if expanded {
        vec![("expanded", "true".to_owned())]
    } else {
        Vec::new()
    }
}

impl FmcClient {
    /// List NAT policies as raw records.
    ///
    /// `GET .../policy/ftdnatpolicies[?expanded=true]`
    pub async fn list_nat_policies(&self, expanded: bool) -> Result<Vec<Value>, Error> {
        let url = self.config_url(NAT_POLICIES)?;
        debug!(expanded, "listing NAT policies");
        let page: Page<Value> = self.get(url, &expanded_params(expanded)).await?;
        Ok(page.items)
    }

    /// List NAT policies as `{id, name, type}` summaries (never expanded).
    pub async fn list_nat_policy_summaries(&self) -> Result<Vec<ObjectSummary>, Error> {
        let url = self.config_url(NAT_POLICIES)?;
        let page: Page<ObjectSummary> = self.get(url, &[]).await?;
        Ok(page.items)
    }

    /// `POST .../policy/ftdnatpolicies`
    pub async fn create_nat_policy(
        &self,
        body: &(impl Serialize + Sync),
    ) -> Result<ApiResponse, Error> {
        let url = self.config_url(NAT_POLICIES)?;
        self.post(url, body).await
    }

    /// List the auto-NAT rules of one policy.
    ///
    /// `GET .../policy/ftdnatpolicies/{policy_id}/autonatrules[?expanded=true]`
    pub async fn list_auto_nat_rules(
        &self,
        policy_id: &str,
        expanded: bool,
    ) -> Result<Vec<Value>, Error> {
        let url = self.config_url(&format!("{NAT_POLICIES}/{policy_id}/autonatrules"))?;
        debug!(policy_id, expanded, "listing auto NAT rules");
        let page: Page<Value> = self.get(url, &expanded_params(expanded)).await?;
        Ok(page.items)
    }

    /// `POST .../policy/ftdnatpolicies/{policy_id}/autonatrules`
    pub async fn create_auto_nat_rule(
        &self,
        policy_id: &str,
        body: &(impl Serialize + Sync),
    ) -> Result<ApiResponse, Error> {
        let url = self.config_url(&format!("{NAT_POLICIES}/{policy_id}/autonatrules"))?;
        self.post(url, body).await
    }
}
