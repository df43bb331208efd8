// ── Domain model ──
//
// Address objects, NAT rule drafts and the collections names resolve
// against. Wire shapes live here; request plumbing lives in `fmcauto-api`.

pub mod address;
pub mod collection;
pub mod nat;

pub use address::{AddressObject, AddressObjectDraft, DnsResolution, ObjectType};
pub use collection::{CollectionType, NameIndex};
pub use nat::{AutoNatRule, NatRuleDraft, ObjectRef};
