use log::info;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

/// One finished request as seen by the request pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestRecord {
    /// Request URL including the query string.
    pub url: String,
    pub duration: Duration,
    /// `None` when no response was received (transport error or cancellation).
    pub status: Option<u16>,
}

impl RequestRecord {
    /// Endpoint path without base URL and query string, used to group stats.
    /// Numeric segments become `{id}` and `@name` segments `@{username}`, so
    /// `users/2` and `users/3` are counted together.
    pub fn endpoint(&self) -> String {
        let without_query = self.url.split('?').next().unwrap_or(&self.url);
        let path = match without_query.find("/api/v2/") {
            Some(index) => &without_query[index + "/api/v2/".len()..],
            None => without_query,
        };

        path.split('/')
            .map(|segment| {
                if !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit()) {
                    "{id}"
                } else if segment.starts_with('@') {
                    "@{username}"
                } else {
                    segment
                }
            })
            .collect::<Vec<_>>()
            .join("/")
    }
}

/// Sink for request records. Implementations must not block.
pub trait RequestRecorder: Send + Sync {
    fn record(&self, record: &RequestRecord);
}

/// In-memory request statistics
#[derive(Debug, Default)]
pub struct RequestStats {
    total_requests: AtomicU64,
    successful_requests: AtomicU64,
    api_error_responses: AtomicU64,
    failed_requests: AtomicU64,

    // Timing (milliseconds)
    total_request_time_ms: AtomicU64,
    min_request_time_ms: AtomicU64,
    max_request_time_ms: AtomicU64,

    endpoint_stats: RwLock<HashMap<String, EndpointStats>>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EndpointStats {
    pub requests: u64,
    pub successes: u64,
    pub total_time_ms: u64,
}

impl RequestStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current statistics
    pub fn snapshot(&self) -> StatsSnapshot {
        let total_requests = self.total_requests.load(Ordering::Relaxed);
        let successful_requests = self.successful_requests.load(Ordering::Relaxed);
        let total_time_ms = self.total_request_time_ms.load(Ordering::Relaxed);

        let avg_response_time_ms = if total_requests > 0 {
            total_time_ms / total_requests
        } else {
            0
        };

        let success_rate = if total_requests > 0 {
            (successful_requests as f64 / total_requests as f64) * 100.0
        } else {
            0.0
        };

        let endpoint_stats = self
            .endpoint_stats
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone();

        StatsSnapshot {
            total_requests,
            successful_requests,
            api_error_responses: self.api_error_responses.load(Ordering::Relaxed),
            failed_requests: self.failed_requests.load(Ordering::Relaxed),
            avg_response_time_ms,
            min_response_time_ms: self.min_request_time_ms.load(Ordering::Relaxed),
            max_response_time_ms: self.max_request_time_ms.load(Ordering::Relaxed),
            success_rate,
            endpoint_stats,
        }
    }

    pub fn reset(&self) {
        self.total_requests.store(0, Ordering::Relaxed);
        self.successful_requests.store(0, Ordering::Relaxed);
        self.api_error_responses.store(0, Ordering::Relaxed);
        self.failed_requests.store(0, Ordering::Relaxed);
        self.total_request_time_ms.store(0, Ordering::Relaxed);
        self.min_request_time_ms.store(0, Ordering::Relaxed);
        self.max_request_time_ms.store(0, Ordering::Relaxed);
        self.endpoint_stats
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clear();
    }

    fn update_min_time(&self, duration_ms: u64) {
        let current = self.min_request_time_ms.load(Ordering::Relaxed);
        if current == 0 || duration_ms < current {
            self.min_request_time_ms.store(duration_ms, Ordering::Relaxed);
        }
    }

    fn update_max_time(&self, duration_ms: u64) {
        self.max_request_time_ms.fetch_max(duration_ms, Ordering::Relaxed);
    }
}

impl RequestRecorder for RequestStats {
    fn record(&self, record: &RequestRecord) {
        let duration_ms = record.duration.as_millis() as u64;
        let succeeded = record.status == Some(200);

        self.total_requests.fetch_add(1, Ordering::Relaxed);
        match record.status {
            Some(200) => self.successful_requests.fetch_add(1, Ordering::Relaxed),
            Some(403 | 404 | 422) => self.api_error_responses.fetch_add(1, Ordering::Relaxed),
            _ => self.failed_requests.fetch_add(1, Ordering::Relaxed),
        };
        self.total_request_time_ms.fetch_add(duration_ms, Ordering::Relaxed);
        self.update_min_time(duration_ms);
        self.update_max_time(duration_ms);

        let mut endpoints = self
            .endpoint_stats
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let stats = endpoints.entry(record.endpoint()).or_default();
        stats.requests += 1;
        stats.total_time_ms += duration_ms;
        if succeeded {
            stats.successes += 1;
        }
    }
}

/// Snapshot of [`RequestStats`]
#[derive(Debug, Clone)]
pub struct StatsSnapshot {
    pub total_requests: u64,
    pub successful_requests: u64,
    /// Responses carrying an API error (403, 404, 422).
    pub api_error_responses: u64,
    pub failed_requests: u64,
    pub avg_response_time_ms: u64,
    pub min_response_time_ms: u64,
    pub max_response_time_ms: u64,
    pub success_rate: f64,
    pub endpoint_stats: HashMap<String, EndpointStats>,
}

impl StatsSnapshot {
    /// Format the statistics as a human-readable string
    pub fn format(&self) -> String {
        let mut output = String::new();

        output.push_str("=== Request Statistics ===\n");
        output.push_str(&format!("Total Requests: {}\n", self.total_requests));
        output.push_str(&format!("Success Rate: {:.1}%\n", self.success_rate));
        output.push_str(&format!("API Errors: {}\n", self.api_error_responses));
        output.push_str(&format!("Failed: {}\n", self.failed_requests));
        output.push_str("\nTiming:\n");
        output.push_str(&format!("  Average: {}ms\n", self.avg_response_time_ms));
        output.push_str(&format!("  Min: {}ms\n", self.min_response_time_ms));
        output.push_str(&format!("  Max: {}ms\n", self.max_response_time_ms));

        if !self.endpoint_stats.is_empty() {
            let mut endpoints: Vec<_> = self.endpoint_stats.iter().collect();
            endpoints.sort_by(|a, b| a.0.cmp(b.0));

            output.push_str("\nPer-Endpoint Stats:\n");
            for (endpoint, stats) in endpoints {
                let avg_time = if stats.requests > 0 {
                    stats.total_time_ms / stats.requests
                } else {
                    0
                };
                output.push_str(&format!(
                    "  {}: {} req, {} ok, {}ms avg\n",
                    endpoint, stats.requests, stats.successes, avg_time
                ));
            }
        }

        output
    }
}

/// Times one request. Dropping the timer logs the request and hands it to the
/// recorder, whether the request completed, failed or was cancelled.
pub(crate) struct RequestTimer {
    start: Instant,
    url: String,
    status: Option<u16>,
    recorder: Option<Arc<dyn RequestRecorder>>,
}

impl RequestTimer {
    pub(crate) fn start(url: String, recorder: Option<Arc<dyn RequestRecorder>>) -> Self {
        Self {
            start: Instant::now(),
            url,
            status: None,
            recorder,
        }
    }

    pub(crate) fn set_status(&mut self, status: u16) {
        self.status = Some(status);
    }
}

impl Drop for RequestTimer {
    fn drop(&mut self) {
        let duration = self.start.elapsed();
        let status = self
            .status
            .map(|status| status.to_string())
            .unwrap_or_else(|| "Error".to_string());

        info!(
            "URL: {} Duration: {}ms Status: {}",
            self.url,
            duration.as_millis(),
            status
        );

        if let Some(recorder) = &self.recorder {
            recorder.record(&RequestRecord {
                url: std::mem::take(&mut self.url),
                duration,
                status: self.status,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn record(url: &str, millis: u64, status: Option<u16>) -> RequestRecord {
        RequestRecord {
            url: url.to_string(),
            duration: Duration::from_millis(millis),
            status,
        }
    }

    #[test]
    fn test_stats_recording() {
        let stats = RequestStats::new();

        stats.record(&record("https://osu.ppy.sh/api/v2/users/2", 100, Some(200)));
        stats.record(&record("https://osu.ppy.sh/api/v2/users/3", 300, Some(404)));
        stats.record(&record("https://osu.ppy.sh/api/v2/events?sort=id_asc", 200, None));
        stats.record(&record("https://osu.ppy.sh/api/v2/events", 400, Some(500)));

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.total_requests, 4);
        assert_eq!(snapshot.successful_requests, 1);
        assert_eq!(snapshot.api_error_responses, 1);
        assert_eq!(snapshot.failed_requests, 2);
        assert_eq!(snapshot.success_rate, 25.0);
        assert_eq!(snapshot.avg_response_time_ms, 250);
        assert_eq!(snapshot.min_response_time_ms, 100);
        assert_eq!(snapshot.max_response_time_ms, 400);
        assert_eq!(snapshot.endpoint_stats["events"].requests, 2);
        assert_eq!(snapshot.endpoint_stats["users/{id}"].requests, 2);
        assert_eq!(snapshot.endpoint_stats["users/{id}"].successes, 1);
        assert_eq!(snapshot.endpoint_stats.len(), 2);

        stats.reset();
        assert_eq!(stats.snapshot().total_requests, 0);
        assert!(stats.snapshot().endpoint_stats.is_empty());
    }

    #[test]
    fn test_format() {
        let stats = RequestStats::new();
        stats.record(&record("https://osu.ppy.sh/api/v2/beatmaps/1", 10, Some(200)));

        let text = stats.snapshot().format();
        assert!(text.contains("Total Requests: 1"));
        assert!(text.contains("beatmaps/{id}: 1 req, 1 ok, 10ms avg"));
    }

    #[test]
    fn test_endpoint_groups_ids_and_usernames() {
        let endpoint = |url: &str| record(url, 1, Some(200)).endpoint();

        assert_eq!(endpoint("https://osu.ppy.sh/api/v2/users/2/scores/best?limit=5"), "users/{id}/scores/best");
        assert_eq!(endpoint("https://osu.ppy.sh/api/v2/users/@peppy/fruits"), "users/@{username}/fruits");
        assert_eq!(endpoint("https://osu.ppy.sh/api/v2/beatmaps/lookup?id=3"), "beatmaps/lookup");
        assert_eq!(endpoint("https://osu.ppy.sh/api/v2/rankings/osu/charts"), "rankings/osu/charts");
    }

    #[derive(Default)]
    struct Collect(Mutex<Vec<RequestRecord>>);

    impl RequestRecorder for Collect {
        fn record(&self, record: &RequestRecord) {
            self.0.lock().unwrap().push(record.clone());
        }
    }

    #[test]
    fn test_timer_records_on_drop() {
        let collect = Arc::new(Collect::default());
        let sink: Arc<dyn RequestRecorder> = collect.clone();

        let mut timer = RequestTimer::start("https://osu.ppy.sh/api/v2/news".to_string(), Some(sink.clone()));
        timer.set_status(200);
        drop(timer);

        drop(RequestTimer::start("https://osu.ppy.sh/api/v2/wiki".to_string(), Some(sink.clone())));

        let records = collect.0.lock().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].status, Some(200));
        assert_eq!(records[0].endpoint(), "news");
        assert_eq!(records[1].status, None);
    }
}
