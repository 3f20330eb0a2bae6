// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::needless_pass_by_value)]

//! # Supercell API
//!
//! An async client library for the Supercell game APIs: Clash of Clans
//! and Clash Royale.
//!
//! Responses are decoded into open records: every entity declares the
//! fields the vendor documents, and anything the vendor sends beyond
//! that is preserved and reachable through the same accessors. List
//! endpoints come back as [`Page`](response::Page)s carrying the
//! vendor's opaque pagination cursors.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use supercell_api::clash_of_clans::ClashOfClansApi;
//! use supercell_api::{PageRequest, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let api = ClashOfClansApi::new("my-api-token")?;
//!
//!     let clan = api.get_clan("#2PP0VVLL").await?;
//!     println!("{clan}");
//!
//!     let mut members = api.get_clan_members("#2PP0VVLL", PageRequest::new().limit(10)).await?;
//!     while let Some(cursor) = members.cursor_after().map(str::to_owned) {
//!         members = api
//!             .get_clan_members("#2PP0VVLL", PageRequest::new().limit(10).after(cursor))
//!             .await?;
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

/// Error types for the library
pub mod error;

/// Response model: open records, shape-driven decoding, pagination
pub mod response;

/// HTTP transport with retry and backoff
pub mod http;

/// Shared API client plumbing
pub mod api;

/// Clash of Clans client and entity types
pub mod clash_of_clans;

/// Clash Royale client and entity types
pub mod clash_royale;

pub use api::{ApiClient, PageRequest, Query};
pub use error::{Error, ErrorResult, Result};
pub use response::{Entity, FieldValue, Page, ResponseObject};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
