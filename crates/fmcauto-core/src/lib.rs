//! Session and name-resolution layer between `fmcauto-api` and the CLI.
//!
//! - **[`Session`]** — authenticates once via
//!   [`establish()`](Session::establish), then owns the HTTP client and a
//!   per-session [`ObjectCache`] of name→id indexes.
//!
//! - **[`resolver`]** — stateless lookups: full-collection fetches indexed
//!   by name, and NAT policy lookup by name.
//!
//! - **Resource operations** — inherent methods on [`Session`]:
//!   address objects, NAT policies, auto-NAT rules, server version.
//!
//! - **Domain model** ([`model`]) — address objects, NAT rule drafts and
//!   their resolved form.

pub mod config;
pub mod error;
pub mod model;
mod ops;
pub mod resolver;
pub mod session;
pub mod store;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{SessionConfig, TlsVerification};
pub use error::CoreError;
pub use session::Session;
pub use store::ObjectCache;

pub use model::{
    AddressObject, AddressObjectDraft, AutoNatRule, CollectionType, DnsResolution, NameIndex,
    NatRuleDraft, ObjectRef, ObjectType,
};

pub use fmcauto_api::{ApiResponse, Domain, ServerVersion};
