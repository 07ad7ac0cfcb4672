//! Service catalog: the declarative side of the client.
//!
//! The catalog is loaded once per command invocation from a TOML file and
//! never mutated. Declaration order matters (an unset `default_service`
//! falls back to the first-declared entry), so services deserialize into an
//! `IndexMap` rather than an ordering-destroying `BTreeMap`.

use std::fs;
use std::io;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::descriptor::{DEFAULT_TIMEOUT_MS, ServiceDescriptor};
use crate::error::{Error, Result};

/// On-disk shape of one `[services.<name>]` table.
#[derive(Debug, Deserialize)]
struct ServiceEntry {
    ui_url: String,
    input_selector: String,
    submit_selector: String,
    response_selector: String,
    #[serde(default = "default_headless")]
    headless: bool,
    /// Milliseconds, applied to navigation and each wait step.
    #[serde(default = "default_timeout")]
    timeout: u64,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    default_service: String,
    #[serde(default)]
    services: IndexMap<String, ServiceEntry>,
}

fn default_headless() -> bool {
    true
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_MS
}

/// Validated, ordered set of service descriptors plus the configured default.
#[derive(Debug)]
pub struct ServiceCatalog {
    default_service: String,
    services: IndexMap<String, ServiceDescriptor>,
}

impl ServiceCatalog {
    /// Parse and validate a TOML config file.
    ///
    /// `ConfigNotFound` if the file does not exist; `ConfigInvalid` for
    /// malformed TOML, a descriptor that fails validation, or a
    /// `default_service` naming no declared service.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => Error::ConfigNotFound {
                path: path.to_path_buf(),
            },
            _ => Error::ConfigInvalid {
                path: path.to_path_buf(),
                reason: err.to_string(),
            },
        })?;

        let file: CatalogFile = toml::from_str(&raw).map_err(|err| Error::ConfigInvalid {
            path: path.to_path_buf(),
            // toml's Display is multi-line with a span marker; the first
            // line alone names the problem.
            reason: err.message().to_string(),
        })?;

        let mut services = IndexMap::with_capacity(file.services.len());
        for (name, entry) in file.services {
            let descriptor = ServiceDescriptor::new(
                name.clone(),
                entry.ui_url,
                entry.input_selector,
                entry.submit_selector,
                entry.response_selector,
                entry.headless,
                entry.timeout,
            )
            .map_err(|err| Error::ConfigInvalid {
                path: path.to_path_buf(),
                reason: format!("service '{name}': {err}"),
            })?;
            services.insert(name, descriptor);
        }

        if !file.default_service.is_empty() && !services.contains_key(&file.default_service) {
            return Err(Error::ConfigInvalid {
                path: path.to_path_buf(),
                reason: format!(
                    "default_service '{}' is not declared under [services]",
                    file.default_service
                ),
            });
        }

        Ok(Self {
            default_service: file.default_service,
            services,
        })
    }

    /// Resolve a requested service name to its descriptor.
    ///
    /// An empty request substitutes the configured default; if that is also
    /// unset, the first-declared service wins. Total over a non-empty
    /// catalog; any name that does not land on a declared service is
    /// `ServiceNotFound`.
    pub fn resolve(&self, requested: &str) -> Result<&ServiceDescriptor> {
        let name = if !requested.is_empty() {
            requested
        } else if !self.default_service.is_empty() {
            &self.default_service
        } else if let Some(first) = self.services.keys().next() {
            first
        } else {
            requested
        };

        self.services.get(name).ok_or_else(|| Error::ServiceNotFound {
            name: name.to_string(),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Service names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.services.keys().map(String::as_str)
    }

    /// The default the resolver would pick for an empty request: the
    /// configured `default_service`, else the first-declared service.
    pub fn effective_default(&self) -> Option<&str> {
        if !self.default_service.is_empty() {
            Some(&self.default_service)
        } else {
            self.services.keys().next().map(String::as_str)
        }
    }
}
