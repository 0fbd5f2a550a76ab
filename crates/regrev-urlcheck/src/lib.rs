//! Sequential URL health checking.
//!
//! Probes every URL of the exported policy sources one at a time with a
//! fixed delay between requests. The delay is a politeness throttle
//! against the probed sites, not a performance knob. A failed probe is
//! recorded on its row and never aborts the run.

use std::time::Duration;

use reqwest::blocking::Client;
use thiserror::Error;
use tracing::{debug, warn};

use regrev_model::{PolicySourceRecord, UrlCheckRecord, UrlKind};

/// HTTP request timeout applied to every probe.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Pause between consecutive probes.
const DEFAULT_DELAY: Duration = Duration::from_millis(100);

#[derive(Debug, Error)]
pub enum UrlCheckError {
    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),
}

/// Probe timing configuration.
#[derive(Debug, Clone, Copy)]
pub struct UrlCheckerConfig {
    pub timeout: Duration,
    pub delay: Duration,
}

impl Default for UrlCheckerConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            delay: DEFAULT_DELAY,
        }
    }
}

/// Result of probing one URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOutcome {
    /// HTTP status when a response was received.
    pub status: Option<u16>,
    /// URL after following redirects; the original URL when the request
    /// never completed.
    pub final_url: String,
    /// Error description, empty on success.
    pub error: String,
}

pub struct UrlChecker {
    client: Client,
    delay: Duration,
}

impl UrlChecker {
    pub fn new(config: UrlCheckerConfig) -> Result<Self, UrlCheckError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(UrlCheckError::Client)?;
        Ok(Self {
            client,
            delay: config.delay,
        })
    }

    /// Probe one URL: HEAD first, falling back to GET when HEAD fails or
    /// is rejected. Never returns an error; failures are described in the
    /// outcome.
    pub fn probe(&self, url: &str) -> ProbeOutcome {
        if url.is_empty() {
            return ProbeOutcome {
                status: None,
                final_url: String::new(),
                error: "EMPTY".to_string(),
            };
        }

        if let Ok(response) = self.client.head(url).send()
            && response.status().is_success()
        {
            return ProbeOutcome {
                status: Some(response.status().as_u16()),
                final_url: response.url().to_string(),
                error: String::new(),
            };
        }

        match self.client.get(url).send() {
            Ok(response) => {
                let status = response.status();
                let final_url = response.url().to_string();
                let error = if status.is_success() {
                    String::new()
                } else {
                    format!("HTTPError {}", status.as_u16())
                };
                ProbeOutcome {
                    status: Some(status.as_u16()),
                    final_url,
                    error,
                }
            }
            Err(error) => ProbeOutcome {
                status: None,
                final_url: url.to_string(),
                error: format!("ERROR {}", classify(&error)),
            },
        }
    }

    /// Probe both URL columns of every row, strictly sequentially with the
    /// configured delay between probes.
    pub fn check_records(&self, rows: &[PolicySourceRecord]) -> Vec<UrlCheckRecord> {
        let mut report = Vec::with_capacity(rows.len() * 2);
        for row in rows {
            for kind in [UrlKind::DocumentUrl, UrlKind::LandingPageUrl] {
                let url = match kind {
                    UrlKind::DocumentUrl => row.document_url.as_str(),
                    UrlKind::LandingPageUrl => row.landing_page_url.as_str(),
                };
                let outcome = self.probe(url);
                if outcome.error.is_empty() {
                    debug!(source_id = %row.source_id, url, status = ?outcome.status, "url ok");
                } else {
                    warn!(source_id = %row.source_id, url, error = %outcome.error, "url check failed");
                }
                report.push(UrlCheckRecord {
                    source_id: row.source_id.clone(),
                    url_type: kind.as_str().to_string(),
                    url: url.to_string(),
                    status: outcome.status.map(|s| s.to_string()).unwrap_or_default(),
                    final_url: outcome.final_url,
                    error: outcome.error,
                });
                std::thread::sleep(self.delay);
            }
        }
        report
    }
}

fn classify(error: &reqwest::Error) -> &'static str {
    if error.is_timeout() {
        "Timeout"
    } else if error.is_connect() {
        "Connect"
    } else if error.is_redirect() {
        "Redirect"
    } else if error.is_builder() {
        "InvalidUrl"
    } else {
        "Request"
    }
}
