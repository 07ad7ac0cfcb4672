use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Timeout applied to navigation and each wait step when the config does not
/// set one (milliseconds).
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Validated parameter set describing how to automate one chat web UI.
///
/// Immutable once constructed; the only way in is [`ServiceDescriptor::new`],
/// which rejects selectorless or schemeless descriptions up front so the
/// automation session never has to re-check them.
#[derive(Debug, Clone)]
pub struct ServiceDescriptor {
    name: String,
    url: String,
    input_selector: String,
    submit_selector: String,
    response_selector: String,
    headless: bool,
    timeout: Duration,
}

#[derive(Debug, Error)]
pub enum DescriptorError {
    #[error("invalid url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("{field} must not be empty")]
    EmptySelector { field: &'static str },

    #[error("timeout must be a positive number of milliseconds")]
    ZeroTimeout,
}

impl ServiceDescriptor {
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        input_selector: impl Into<String>,
        submit_selector: impl Into<String>,
        response_selector: impl Into<String>,
        headless: bool,
        timeout_ms: u64,
    ) -> Result<Self, DescriptorError> {
        let url = url.into();
        // Url::parse demands an explicit scheme; a bare host is rejected as
        // relative, which is exactly the invariant we want.
        Url::parse(&url).map_err(|err| DescriptorError::InvalidUrl {
            url: url.clone(),
            reason: err.to_string(),
        })?;

        let input_selector = non_empty(input_selector.into(), "input_selector")?;
        let submit_selector = non_empty(submit_selector.into(), "submit_selector")?;
        let response_selector = non_empty(response_selector.into(), "response_selector")?;

        if timeout_ms == 0 {
            return Err(DescriptorError::ZeroTimeout);
        }

        Ok(Self {
            name: name.into(),
            url,
            input_selector,
            submit_selector,
            response_selector,
            headless,
            timeout: Duration::from_millis(timeout_ms),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn input_selector(&self) -> &str {
        &self.input_selector
    }

    pub fn submit_selector(&self) -> &str {
        &self.submit_selector
    }

    pub fn response_selector(&self) -> &str {
        &self.response_selector
    }

    pub fn headless(&self) -> bool {
        self.headless
    }

    /// Uniform bound for navigation and each wait step.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

fn non_empty(value: String, field: &'static str) -> Result<String, DescriptorError> {
    if value.is_empty() {
        Err(DescriptorError::EmptySelector { field })
    } else {
        Ok(value)
    }
}
