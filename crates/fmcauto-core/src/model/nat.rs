// ── NAT rule drafts ──
//
// A draft names its networks and interfaces; the controller wants
// `{type, id}` references. Fields the draft doesn't name (natType,
// ports, flags...) pass through untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

/// Auto-NAT rule as written by a user, everything referenced by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NatRuleDraft {
    /// Name of the NAT policy the rule goes into.
    pub target_nat_policy: String,
    /// Host object name.
    pub original_network: String,
    /// Host object name.
    pub translated_network: String,
    /// Security zone name.
    pub source_interface: String,
    /// Security zone name.
    pub destination_interface: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NatRuleDraft {
    /// A complete static auto-NAT draft with placeholder names.
    pub fn example() -> Self {
        let extra = json!({
            "serviceProtocol": "TCP",
            "originalPort": 123,
            "translatedPort": 234,
            "type": "FTDAutoNatRule",
            "natType": "STATIC",
            "interfaceIpv6": false,
            "fallThrough": false,
            "dns": false,
            "routeLookup": false,
            "noProxyArp": false,
            "netToNet": false
        });
        Self {
            target_nat_policy: "<name-of-target-NatPolicy>".into(),
            original_network: "<name-of-original-network>".into(),
            translated_network: "<name-of-target-network>".into(),
            source_interface: "<name-of-SecurityZone>".into(),
            destination_interface: "<name-of-SecurityZone>".into(),
            extra: match extra {
                Value::Object(map) => map,
                _ => Map::new(),
            },
        }
    }
}

/// Typed reference to another FMC object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectRef {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
}

impl ObjectRef {
    pub fn host(id: impl Into<String>) -> Self {
        Self {
            kind: "Host".into(),
            id: id.into(),
        }
    }

    pub fn security_zone(id: impl Into<String>) -> Self {
        Self {
            kind: "SecurityZone".into(),
            id: id.into(),
        }
    }
}

/// Auto-NAT rule body with every reference resolved.
///
/// The policy is addressed through the URL, so no `targetNatPolicy`
/// field survives into the body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoNatRule {
    pub original_network: ObjectRef,
    pub translated_network: ObjectRef,
    pub source_interface: ObjectRef,
    pub destination_interface: ObjectRef,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
