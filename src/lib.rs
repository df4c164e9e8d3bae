//! stringlens - HTTP service for string property analysis
//!
//! This crate analyzes submitted strings (length, palindrome check, word
//! count, unique characters, character-frequency histogram, SHA-256 content
//! hash), persists each analysis once per distinct content, and answers
//! filter queries over the stored records. Filters arrive either as
//! structured query parameters or as a free-text natural-language query;
//! both translate into the same [`StringFilter`] predicate.
//!
//! # Layout
//!
//! - [`analyzer`]: the pure analysis function, [`analyze`]
//! - [`query`]: the filter model and both query-translation surfaces
//! - [`store`]: the repository trait and the in-memory backend
//! - [`routes`], [`server`]: the HTTP surface (axum)
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use stringlens::ServiceConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServiceConfig::load()?;
//!     stringlens::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! - `GET /` - Service information
//! - `GET /health` - Liveness probe
//! - `GET /ready` - Readiness probe
//! - `POST /strings` - Analyze and store a string (409 on duplicate content)
//! - `GET /strings` - List analyses, filtered by query parameters
//! - `GET /strings/search?query=...` - Natural-language filtering
//! - `GET /strings/{value}` - Fetch one analysis by value
//! - `DELETE /strings/{value}` - Delete one analysis by value

pub mod analyzer;
pub mod config;
pub mod error;
pub mod middleware;
pub mod query;
pub mod routes;
pub mod server;
pub mod state;
pub mod store;

pub use analyzer::{analyze, AnalysisResult};
pub use config::ServiceConfig;
pub use error::{ApiError, ApiResult};
pub use query::natural::parse_natural_language;
pub use query::params::{build_filter, FilterParams};
pub use query::{QueryError, StringFilter};
pub use server::{build_router, start_server};
pub use state::AppState;
pub use store::memory::MemoryStore;
pub use store::{AnalysisStore, StoreError, StringRecord};
