//! One-shot browser session implementing the submit/await protocol.
//!
//! A session drives a freshly launched browser through five steps:
//! launch, navigate, fill, submit, await-response. Each step either advances
//! or short-circuits the whole session into a single
//! [`Error::Automation`](crate::Error::Automation) carrying the step it died
//! in and the underlying cause. The browser is torn down on every exit path;
//! nothing is reused between sessions and nothing is retried.

use std::fmt;
use std::future::Future;
use std::time::Duration;

use anyhow::anyhow;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::error::CdpError;
use chromiumoxide::{Element, Page};
use futures::StreamExt;
use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep, timeout};
use tracing::{debug, info};

use crate::descriptor::ServiceDescriptor;
use crate::error::{Error, Result};

/// How often the await-response step re-queries the page for the response
/// selector.
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Protocol step a session is executing, recorded in every automation
/// failure. Steps run strictly in declaration order; there is no branching
/// and no way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Launch,
    Navigate,
    Fill,
    Submit,
    AwaitResponse,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::Launch => "launch",
            Step::Navigate => "navigate",
            Step::Fill => "fill",
            Step::Submit => "submit",
            Step::AwaitResponse => "await-response",
        };
        f.write_str(name)
    }
}

/// Raw text extracted from the response region of a chat UI. Exactly what
/// the page rendered; an empty string is a legitimate outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatResponse {
    pub raw_text: String,
}

/// A live browser plus the one page the protocol runs in.
///
/// Only [`AutomationSession::run`] hands these out, and it never lets one
/// escape: the session is closed before `run` returns, success or not.
pub struct AutomationSession {
    browser: Browser,
    page: Page,
    handler_task: JoinHandle<()>,
}

impl AutomationSession {
    /// Execute the full protocol for a single prompt.
    ///
    /// Atomic from the caller's point of view: either a [`ChatResponse`]
    /// comes back or one classified failure does, and in both cases the
    /// browser that was launched for this call is gone again.
    pub async fn run(descriptor: &ServiceDescriptor, prompt: &str) -> Result<ChatResponse> {
        let session = Self::launch(descriptor).await?;
        let result = session.drive(descriptor, prompt).await;
        session.close().await;
        result
    }

    /// Step 1: start an isolated browser and open a blank page.
    async fn launch(descriptor: &ServiceDescriptor) -> Result<Self> {
        info!(
            service = %descriptor.name(),
            headless = descriptor.headless(),
            "launching browser"
        );

        let mut builder = BrowserConfig::builder().request_timeout(descriptor.timeout());
        if !descriptor.headless() {
            builder = builder.with_head();
        }
        let config = builder
            .build()
            .map_err(|reason| Error::automation(Step::Launch, anyhow!(reason)))?;

        let (browser, mut handler) = Browser::launch(config)
            .await
            .map_err(|err| Error::automation(Step::Launch, err))?;

        // The CDP event stream must be drained for the connection to make
        // progress; it ends on its own once the browser goes away.
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(err) = event {
                    debug!(error = %err, "browser event handler error");
                }
            }
        });

        let page = match browser.new_page("about:blank").await {
            Ok(page) => page,
            Err(err) => {
                Self::teardown(browser, handler_task).await;
                return Err(Error::automation(Step::Launch, err));
            }
        };

        Ok(Self {
            browser,
            page,
            handler_task,
        })
    }

    /// Steps 2-5 against the already-launched page.
    async fn drive(&self, descriptor: &ServiceDescriptor, prompt: &str) -> Result<ChatResponse> {
        let limit = descriptor.timeout();

        info!(url = %descriptor.url(), "navigate");
        bounded(Step::Navigate, limit, async {
            self.page.goto(descriptor.url()).await?;
            Ok(())
        })
        .await?;

        debug!(selector = %descriptor.input_selector(), "fill prompt");
        bounded(Step::Fill, limit, async {
            let input = self.page.find_element(descriptor.input_selector()).await?;
            input.click().await?;
            input.type_str(prompt).await?;
            Ok(())
        })
        .await?;

        debug!(selector = %descriptor.submit_selector(), "submit");
        bounded(Step::Submit, limit, async {
            self.page
                .find_element(descriptor.submit_selector())
                .await?
                .click()
                .await?;
            Ok(())
        })
        .await?;

        info!(selector = %descriptor.response_selector(), "awaiting response");
        let element = self
            .wait_for(descriptor.response_selector(), limit)
            .await?;
        let raw_text = element
            .inner_text()
            .await
            .map_err(|err| Error::automation(Step::AwaitResponse, err))?
            .unwrap_or_default();

        debug!(chars = raw_text.len(), "response extracted");
        Ok(ChatResponse { raw_text })
    }

    /// Poll until `selector` appears or the deadline passes.
    async fn wait_for(&self, selector: &str, limit: Duration) -> Result<Element> {
        let deadline = Instant::now() + limit;
        loop {
            if let Ok(element) = self.page.find_element(selector).await {
                return Ok(element);
            }
            if Instant::now() >= deadline {
                return Err(Error::automation(
                    Step::AwaitResponse,
                    anyhow!(
                        "timed out after {}ms waiting for '{selector}'",
                        limit.as_millis()
                    ),
                ));
            }
            sleep(POLL_INTERVAL).await;
        }
    }

    async fn close(self) {
        Self::teardown(self.browser, self.handler_task).await;
    }

    /// Best-effort shutdown; runs on both the success and failure exits.
    async fn teardown(mut browser: Browser, handler_task: JoinHandle<()>) {
        debug!("closing browser");
        let _ = browser.close().await;
        let _ = browser.wait().await;
        handler_task.abort();
    }
}

/// Run one protocol step under the descriptor's timeout, collapsing both
/// engine errors and elapsed deadlines into an automation failure tagged
/// with `step`.
async fn bounded<T>(
    step: Step,
    limit: Duration,
    fut: impl Future<Output = std::result::Result<T, CdpError>>,
) -> Result<T> {
    match timeout(limit, fut).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(err)) => Err(Error::automation(step, err)),
        Err(_) => Err(Error::automation(
            step,
            anyhow!("timed out after {}ms", limit.as_millis()),
        )),
    }
}
