// ── Address objects ──
//
// Hosts, FQDNs, networks and ranges. A draft carries the object type as
// free text; it only becomes an `AddressObject` once the type is one of
// the supported collections.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use crate::error::CoreError;

/// Address object collections that can be created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ObjectType {
    Hosts,
    Fqdns,
    Networks,
    Ranges,
}

impl ObjectType {
    pub const ALL: [Self; 4] = [Self::Fqdns, Self::Hosts, Self::Networks, Self::Ranges];

    /// Parse a user-supplied type, rejecting anything outside [`Self::ALL`].
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        Self::from_str(value.trim()).map_err(|_| CoreError::UnsupportedObjectType {
            value: value.to_owned(),
            allowed: Self::ALL
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .join(", "),
        })
    }
}

/// How an FQDN object resolves its name.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
pub enum DnsResolution {
    #[default]
    #[serde(rename = "IPV4_ONLY")]
    #[strum(serialize = "IPV4_ONLY")]
    Ipv4Only,
    #[serde(rename = "IPV6_ONLY")]
    #[strum(serialize = "IPV6_ONLY")]
    Ipv6Only,
    #[serde(rename = "IPV4_AND_IPV6")]
    #[strum(serialize = "IPV4_AND_IPV6")]
    Ipv4AndIpv6,
}

/// Unvalidated address object as collected from the command line.
#[derive(Debug, Clone, Default)]
pub struct AddressObjectDraft {
    pub name: String,
    pub object_type: String,
    pub value: Option<String>,
    pub description: String,
    pub dns_resolution: DnsResolution,
}

/// A validated address object, ready to be posted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressObject {
    pub name: String,
    pub kind: ObjectType,
    pub value: Option<String>,
    pub description: String,
    /// Only sent for FQDN objects.
    pub dns_resolution: DnsResolution,
    /// Only sent for network objects. Overrides need the overridden
    /// object's id, which the CLI has no way to take yet.
    pub overridable: bool,
}

impl TryFrom<AddressObjectDraft> for AddressObject {
    type Error = CoreError;

    fn try_from(draft: AddressObjectDraft) -> Result<Self, Self::Error> {
        let kind = ObjectType::parse(&draft.object_type)?;
        Ok(Self {
            name: draft.name,
            kind,
            value: draft.value,
            description: draft.description,
            dns_resolution: draft.dns_resolution,
            overridable: false,
        })
    }
}

/// Request body. Per-type fields are skipped when they don't apply.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AddressObjectBody<'a> {
    name: &'a str,
    #[serde(rename = "type")]
    kind: &'a str,
    value: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dns_resolution: Option<DnsResolution>,
    #[serde(skip_serializing_if = "Option::is_none")]
    overridable: Option<bool>,
    description: &'a str,
}

impl AddressObject {
    /// The JSON body for `POST .../object/{type}`.
    pub fn payload(&self) -> serde_json::Value {
        let body = AddressObjectBody {
            name: &self.name,
            kind: self.kind.as_ref(),
            value: self.value.as_deref(),
            dns_resolution: (self.kind == ObjectType::Fqdns).then_some(self.dns_resolution),
            overridable: (self.kind == ObjectType::Networks).then_some(self.overridable),
            description: &self.description,
        };
        serde_json::to_value(body).unwrap_or_default()
    }
}
