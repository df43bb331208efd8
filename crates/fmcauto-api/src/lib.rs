// fmcauto-api: Async Rust client for the Firepower Management Center REST API

pub mod auth;
pub mod client;
pub mod error;
pub mod models;
mod nat;
mod objects;
mod system;
pub mod transport;

pub use auth::{DOMAINS_HEADER, Domain, TOKEN_HEADER, TokenGrant, select_domain};
pub use client::{FmcClient, normalize_base_url};
pub use error::Error;
pub use models::{ApiResponse, ObjectSummary, Page, Paging, ServerVersion};
pub use transport::{TlsMode, TransportConfig};
