// src/utils.rs - Small cross-target helpers

use chrono::{DateTime, Utc};

/// Sleeps for `ms` milliseconds on either target.
pub async fn sleep_ms(ms: u32) {
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_millis(ms as u64)).await;
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

/// Formats a price in minor-unit-free decimal form with a currency code,
/// e.g. `42.50 USD`.
pub fn format_money(amount: f64, currency: &str) -> String {
    format!("{:.2} {}", amount, currency)
}

/// Short human date for table cells.
pub fn format_date(ts: &DateTime<Utc>) -> String {
    ts.format("%b %e, %Y").to_string()
}

/// Truncates long text for card/table display, appending an ellipsis.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{}…", cut.trim_end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(42.5, "USD"), "42.50 USD");
        assert_eq!(format_money(0.0, "EUR"), "0.00 EUR");
    }

    #[test]
    fn test_format_date() {
        let ts = Utc.with_ymd_and_hms(2026, 3, 7, 12, 0, 0).unwrap();
        assert_eq!(format_date(&ts), "Mar  7, 2026");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer description", 8), "a longer…");
    }
}
