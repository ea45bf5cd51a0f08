//! # freshdesk
//!
//! An async client for the Freshdesk v2 REST API.
//!
//! ## Features
//!
//! - **Tickets**: list, create, view, search, reply and read conversations
//! - **Companies and contacts**: list, create, update and search
//! - **Groups and agents**: list, plus the agent behind the API key
//! - **Pagination**: `Link`-header cursors and total-based search paging
//! - **Filtering**: drop tickets by tag, type or group after fetching
//! - **Security**: the API key is never logged and is scrubbed from errors
//!
//! ## Architecture
//!
//! - [`cli`] - Argument definitions for the `freshdesk` binary
//! - [`config`] - Configuration from environment variables
//! - [`error`] - Error type with message sanitization
//! - [`endpoints`] - URL path templates for every resource
//! - [`client`] - Authenticated HTTP transport
//! - [`managers`] - One handle per resource family
//! - [`pagination`] - The [`Results`] cursor and page-following helpers
//! - [`filter`] - Exclusion filters on ticket pages
//! - [`query`] - Builder for search query expressions
//! - [`models`] - Request and response records
//!
//! ## Configuration
//!
//! - `FRESHDESK_DOMAIN`: helpdesk subdomain (`acme`) or full base URL
//! - `FRESHDESK_API_KEY`: API key of an agent
//! - `FRESHDESK_TIMEOUT_SECS`: request timeout, defaults to 30
//!
//! ## Example
//!
//! ```ignore
//! use freshdesk::{ApiClient, Config, Query};
//!
//! async fn example() -> Result<(), freshdesk::FreshdeskError> {
//!     let client = ApiClient::new(&Config::from_env()?)?;
//!
//!     let mut open = client.tickets().search(&Query::field("status", 2)).await?;
//!     open.filter_tags(&["spam"]);
//!     for ticket in &open {
//!         println!("#{}: {}", ticket.id, ticket.display_subject());
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(rustdoc::missing_crate_level_docs)]

pub mod cli;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod filter;
pub mod managers;
pub mod models;
pub mod pagination;
pub mod query;

pub use client::ApiClient;
pub use config::Config;
pub use endpoints::Endpoints;
pub use error::FreshdeskError;
pub use pagination::Results;
pub use query::Query;
