// NAT policies and auto-NAT rules.

use serde_json::{Value, json};
use tracing::{debug, info, warn};

use fmcauto_api::ApiResponse;

use crate::error::CoreError;
use crate::model::{AutoNatRule, CollectionType, NatRuleDraft, ObjectRef};
use crate::session::Session;

impl Session {
    /// All NAT policies; `expanded` asks the controller for full records.
    pub async fn list_nat_policies(&self, expanded: bool) -> Result<Vec<Value>, CoreError> {
        Ok(self.client().list_nat_policies(expanded).await?)
    }

    /// Auto-NAT rules of the policy named `policy_name`.
    pub async fn list_nat_rules(
        &self,
        policy_name: &str,
        expanded: bool,
    ) -> Result<Vec<Value>, CoreError> {
        let policy_id = self.policy_id(policy_name).await?;
        Ok(self
            .client()
            .list_auto_nat_rules(&policy_id, expanded)
            .await?)
    }

    pub async fn create_nat_policy(
        &self,
        name: &str,
        description: &str,
    ) -> Result<ApiResponse, CoreError> {
        info!(name, "creating FTD NAT policy");
        let body = json!({
            "type": "FTDNatPolicy",
            "name": name,
            "description": description,
        });
        Ok(self.client().create_nat_policy(&body).await?)
    }

    /// Resolve every name in `draft` and submit the rule.
    ///
    /// The target policy must exist. A host or security zone that can't be
    /// resolved is reported as a 404 response instead, and nothing is
    /// posted. References resolve in a fixed order: original network,
    /// translated network, source interface, destination interface.
    pub async fn create_nat_rule(&mut self, draft: NatRuleDraft) -> Result<ApiResponse, CoreError> {
        let NatRuleDraft {
            target_nat_policy,
            original_network,
            translated_network,
            source_interface,
            destination_interface,
            extra,
        } = draft;

        let policy_id = self.policy_id(&target_nat_policy).await?;
        debug!(policy = %target_nat_policy, %policy_id, "target policy resolved");

        let Some(original) = self
            .rule_reference(CollectionType::Hosts, &original_network)
            .await?
        else {
            return Ok(missing(&original_network));
        };
        let Some(translated) = self
            .rule_reference(CollectionType::Hosts, &translated_network)
            .await?
        else {
            return Ok(missing(&translated_network));
        };
        let Some(source) = self
            .rule_reference(CollectionType::InterfaceObjects, &source_interface)
            .await?
        else {
            return Ok(missing(&source_interface));
        };
        let Some(destination) = self
            .rule_reference(CollectionType::InterfaceObjects, &destination_interface)
            .await?
        else {
            return Ok(missing(&destination_interface));
        };

        let rule = AutoNatRule {
            original_network: ObjectRef::host(original),
            translated_network: ObjectRef::host(translated),
            source_interface: ObjectRef::security_zone(source),
            destination_interface: ObjectRef::security_zone(destination),
            extra,
        };

        info!(policy = %target_nat_policy, "creating auto NAT rule");
        Ok(self
            .client()
            .create_auto_nat_rule(&policy_id, &rule)
            .await?)
    }

    /// Like [`Session::object_id`], but an unresolvable name is `None`.
    async fn rule_reference(
        &mut self,
        collection: CollectionType,
        name: &str,
    ) -> Result<Option<String>, CoreError> {
        match self.object_id(collection, name).await {
            Ok(id) => Ok(Some(id)),
            Err(err) if err.is_resolution() => {
                warn!(%collection, name, error = %err, "rule reference not resolved");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }
}

fn missing(name: &str) -> ApiResponse {
    ApiResponse::new(404, format!("UUID of {name} not found."))
}
