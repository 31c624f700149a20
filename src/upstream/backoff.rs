//! Retry delays for transient upstream failures.

use std::time::Duration;

use crate::error::ProxyError;

/// Delay before the first retry.
const BASE_DELAY_MS: u64 = 200;

/// Upper bound on any single delay, before jitter.
const MAX_DELAY_MS: u64 = 2_000;

/// Exponential backoff with up to 10% jitter.
///
/// `attempt` is 1 for the first retry; 0 yields no delay.
pub fn backoff_delay(attempt: u32) -> Duration {
    if attempt == 0 {
        return Duration::ZERO;
    }

    let exponential = 2u64.saturating_pow(attempt - 1);
    let capped = BASE_DELAY_MS.saturating_mul(exponential).min(MAX_DELAY_MS);

    let jitter_range = capped / 10;
    let jitter = if jitter_range > 0 {
        fastrand::u64(0..jitter_range)
    } else {
        0
    };

    Duration::from_millis(capped + jitter)
}

/// Server-side and transport failures may succeed on a second try;
/// client errors from upstream will not.
pub fn is_retryable(err: &ProxyError) -> bool {
    match err {
        ProxyError::Upstream { status } => *status >= 500,
        ProxyError::Network(_) => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_delay_for_first_attempt() {
        assert_eq!(backoff_delay(0), Duration::ZERO);
    }

    #[test]
    fn test_delay_grows_and_caps() {
        let first = backoff_delay(1).as_millis() as u64;
        assert!((200..220).contains(&first));

        let second = backoff_delay(2).as_millis() as u64;
        assert!((400..440).contains(&second));

        let late = backoff_delay(30).as_millis() as u64;
        assert!((2_000..2_200).contains(&late));
    }

    #[test]
    fn test_retryable_errors() {
        assert!(is_retryable(&ProxyError::Upstream { status: 503 }));
        assert!(is_retryable(&ProxyError::Network("reset".to_string())));
        assert!(!is_retryable(&ProxyError::Upstream { status: 404 }));
        assert!(!is_retryable(&ProxyError::Normalization("bad".to_string())));
        assert!(!is_retryable(&ProxyError::MissingApiKey));
    }
}
