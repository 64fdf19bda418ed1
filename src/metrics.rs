use lazy_static::lazy_static;
use prometheus::{Counter, Encoder, Gauge, Histogram, TextEncoder, register_counter, register_gauge, register_histogram};


lazy_static! {
    pub static ref REQUEST_TOTAL: Counter =
        register_counter!("nexus_generate_requests_total", "Total number of generate requests").unwrap();
    pub static ref REQUEST_FAILURES: Counter =
        register_counter!("nexus_generate_failures_total", "Generate requests answered with an error").unwrap();
    pub static ref CACHE_HITS: Counter =
        register_counter!("nexus_relay_cache_hits_total", "Total relay cache hits").unwrap();
    pub static ref CACHE_MISSES: Counter =
        register_counter!("nexus_relay_cache_misses_total", "Total relay cache misses").unwrap();
    pub static ref REQUEST_LATENCY: Histogram = register_histogram!(
        "nexus_generate_latency_seconds",
        "Generate request latency in seconds"
    )
    .unwrap();
    pub static ref CACHE_SIZE: Gauge =
        register_gauge!("nexus_relay_cache_size", "Current number of items in the relay cache").unwrap();
}

// Render every registered metric in the text exposition format
pub fn render() -> Result<String, String> {
    // touch the statics so they show up before the first request
    lazy_static::initialize(&REQUEST_TOTAL);
    lazy_static::initialize(&REQUEST_FAILURES);
    lazy_static::initialize(&CACHE_HITS);
    lazy_static::initialize(&CACHE_MISSES);
    lazy_static::initialize(&REQUEST_LATENCY);
    lazy_static::initialize(&CACHE_SIZE);

    let encoder = TextEncoder::new();
    let mut buffer = Vec::new();
    encoder
        .encode(&prometheus::gather(), &mut buffer)
        .map_err(|e| format!("Failed to encode metrics: {}", e))?;
    String::from_utf8(buffer).map_err(|e| format!("Metrics are not utf-8: {}", e))
}
