pub mod beatmap;
pub mod config;
pub mod events;
pub mod replay;
pub mod score;
pub mod user;

use log::warn;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::api::{ApiResult, OsuClient};
use crate::cli::args::AuthArgs;
use crate::config::Config;
use crate::error::Result;
use crate::metrics::RequestStats;
use crate::output;

/// A configured client plus the state shared by one CLI invocation.
pub struct Session {
    client: OsuClient,
    stats: Arc<RequestStats>,
    cancel: CancellationToken,
}

impl Session {
    /// Build a client from the configuration file, with credentials given on
    /// the command line or in the environment taking precedence.
    pub fn connect(auth: &AuthArgs) -> Result<Self> {
        let mut config = Config::load()?;
        if let Some(client_id) = &auth.client_id {
            config.auth.client_id = Some(client_id.clone());
        }
        if let Some(client_secret) = &auth.client_secret {
            config.auth.client_secret = Some(client_secret.clone());
        }
        if let Some(access_token) = &auth.access_token {
            config.auth.access_token = Some(access_token.clone());
        }

        let stats = Arc::new(RequestStats::new());
        let client = OsuClient::builder()
            .config(config.client_config())
            .shared_token_provider(config.token_provider()?)
            .recorder(stats.clone())
            .build()?;

        let cancel = CancellationToken::new();
        let on_interrupt = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("Interrupted, cancelling pending requests");
                on_interrupt.cancel();
            }
        });

        Ok(Self { client, stats, cancel })
    }

    pub fn client(&self) -> &OsuClient {
        &self.client
    }

    pub fn stats(&self) -> &RequestStats {
        &self.stats
    }

    pub fn cancel(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Request statistics of this invocation, printed with `--verbose`.
    pub fn stats_report(&self) -> String {
        self.stats.snapshot().format()
    }
}

/// Print the value of a successful result with `render`, or the failure.
pub(crate) fn print_result<T>(
    result: ApiResult<T>,
    what: &str,
    render: impl FnOnce(T) -> Result<String>,
) -> Result<()> {
    match result {
        ApiResult::Success(Some(value)) => println!("{}", render(value)?),
        ApiResult::Success(None) => println!("No {} returned", what),
        ApiResult::Failure(error) => eprintln!("{}", output::format_failure(&error)),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{RequestRecord, RequestRecorder};
    use std::time::Duration;

    #[test]
    fn test_stats_report_lists_recorded_requests() {
        let session = Session {
            client: OsuClient::with_token("t").unwrap(),
            stats: Arc::new(RequestStats::new()),
            cancel: CancellationToken::new(),
        };
        session.stats().record(&RequestRecord {
            url: "https://osu.ppy.sh/api/v2/scores/1".to_string(),
            duration: Duration::from_millis(12),
            status: Some(200),
        });

        let report = session.stats_report();
        assert!(report.contains("Total Requests: 1"));
        assert!(report.contains("scores/{id}: 1 req, 1 ok, 12ms avg"));
    }
}
