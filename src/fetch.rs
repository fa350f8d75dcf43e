use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::StatusCode;
use tracing::{info, warn};

use crate::settings::Settings;

/// Read a page saved to disk instead of fetching it.
pub fn read_local(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// GET the page, retrying rate limits and server errors with exponential backoff.
pub async fn fetch_html(url: &str, settings: &Settings) -> Result<String> {
    let client = reqwest::Client::builder()
        .user_agent(&settings.user_agent)
        .build()
        .context("Failed to build HTTP client")?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg} [{elapsed}]")?);
    pb.set_message(format!("Fetching {}", url));
    pb.enable_steady_tick(Duration::from_millis(120));

    let result = fetch_with_retry(&client, url, settings.max_retries, settings.backoff_ms).await;
    pb.finish_and_clear();
    result
}

async fn fetch_with_retry(
    client: &reqwest::Client,
    url: &str,
    max_retries: u32,
    backoff_ms: u64,
) -> Result<String> {
    for attempt in 0..=max_retries {
        let start = Instant::now();
        let response = client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?;
        let status = response.status();

        if status.is_success() {
            let body = response.text().await.context("Failed to read response body")?;
            info!(
                "Fetched {} ({} bytes in {}ms)",
                url,
                body.len(),
                start.elapsed().as_millis()
            );
            return Ok(body);
        }

        if !should_retry(status) || attempt == max_retries {
            bail!("GET {} returned {}", url, status);
        }

        let backoff = backoff_delay(backoff_ms, attempt);
        warn!(
            "{} on {} (attempt {}/{}), backing off {:.1}s",
            status,
            url,
            attempt + 1,
            max_retries,
            backoff.as_secs_f64()
        );
        tokio::time::sleep(backoff).await;
    }

    bail!("GET {} gave up after {} retries", url, max_retries)
}

fn should_retry(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
}

fn backoff_delay(base_ms: u64, attempt: u32) -> Duration {
    Duration::from_millis(base_ms.saturating_mul(2u64.saturating_pow(attempt)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retries_rate_limits_and_server_errors_only() {
        assert!(should_retry(StatusCode::TOO_MANY_REQUESTS));
        assert!(should_retry(StatusCode::BAD_GATEWAY));
        assert!(should_retry(StatusCode::SERVICE_UNAVAILABLE));
        assert!(!should_retry(StatusCode::NOT_FOUND));
        assert!(!should_retry(StatusCode::FORBIDDEN));
    }

    #[test]
    fn backoff_doubles() {
        assert_eq!(backoff_delay(2000, 0), Duration::from_millis(2000));
        assert_eq!(backoff_delay(2000, 1), Duration::from_millis(4000));
        assert_eq!(backoff_delay(2000, 3), Duration::from_millis(16000));
        assert_eq!(backoff_delay(u64::MAX, 5), Duration::from_millis(u64::MAX));
    }

    #[test]
    fn local_file_read() {
        let html = read_local(Path::new("tests/fixtures/fable.html")).unwrap();
        assert!(html.contains("<title>The Fox and the Grapes</title>"));
        assert!(read_local(Path::new("tests/fixtures/nope.html")).is_err());
    }
}
