//! # FreeScout Datasource
//!
//! A datasource adapter that lets a low-code platform's data layer perform
//! CRUD-style operations against the [FreeScout](https://freescout.net)
//! helpdesk REST API.
//!
//! The adapter translates four generic operations (create, read, update,
//! delete) into HTTP requests, attaches API-key authentication, and
//! normalizes responses (JSON vs. text) and conversation-list pagination.
//!
//! ## Architecture
//!
//! Two layers:
//!
//! - **Transport**: [`FreeScoutClient`](freescout_client::FreeScoutClient)'s
//!   internal `request` issues a single outbound HTTP call with the
//!   `X-FreeScout-API-Key` header injected, classifies success by status
//!   code, and decodes the body as JSON or plain text.
//! - **Operations**: `create`/`read`/`update`/`delete` build the URL, method,
//!   headers, and body for each verb; `read` drives a pagination loop over
//!   the transport for conversation lists.
//!
//! Modules:
//!
//! - [`config`] - Connection configuration supplied by the host platform
//! - [`error`] - Error types with API-key sanitization
//! - [`freescout_client`] - The HTTP client and the four operations
//! - [`models`] - Response envelope and decoded body types
//! - [`queries`] - Operation parameter structs passed in by the host
//!
//! ## Example
//!
//! ```ignore
//! use freescout_datasource::config::Config;
//! use freescout_datasource::freescout_client::FreeScoutClient;
//! use freescout_datasource::queries::ReadQuery;
//!
//! async fn example() -> Result<(), freescout_datasource::error::FreeScoutError> {
//!     let config = Config::new("https://support.example.com", "api-key")?;
//!     let client = FreeScoutClient::new(&config)?;
//!
//!     // Fetch every conversation in mailbox 3, at most 5 pages
//!     let query = ReadQuery::new().with_mailbox_id("3").with_page_limit(5);
//!     let conversations = client.read(query).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Security
//!
//! The API key is stored only in memory, never logged, and sanitized from
//! error messages before they leave the crate.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod freescout_client;
pub mod models;
pub mod queries;

pub use config::Config;
pub use error::FreeScoutError;
pub use freescout_client::FreeScoutClient;
