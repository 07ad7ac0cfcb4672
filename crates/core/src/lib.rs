//! uichat: drive chat web UIs that have no API.
//!
//! Some chat services are reachable only through their web page. This crate
//! automates one round trip against such a page: open it, type a prompt,
//! submit, wait for the response region to render, and hand back the raw
//! text. Which page, which elements, and how long to wait come from a
//! [`ServiceDescriptor`] rather than per-service code, so adding a service
//! is a config edit, not a code change.
//!
//! # Example
//!
//! ```ignore
//! use uichat::{AutomationSession, ServiceCatalog};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), uichat::Error> {
//!     let catalog = ServiceCatalog::load("conf/config.toml".as_ref())?;
//!     let descriptor = catalog.resolve("")?; // default or first-declared
//!     let response = AutomationSession::run(descriptor, "hello").await?;
//!     println!("{}", response.raw_text);
//!     Ok(())
//! }
//! ```

mod config;
mod descriptor;
mod error;
mod session;

pub use config::ServiceCatalog;
pub use descriptor::{DEFAULT_TIMEOUT_MS, DescriptorError, ServiceDescriptor};
pub use error::{Error, Result};
pub use session::{AutomationSession, ChatResponse, Step};
