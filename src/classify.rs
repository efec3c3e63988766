//! Upstream error classification.
//!
//! Maps raw error strings from upstream services onto a coarse kind by
//! substring matching, so the UI can show a readable notice instead of the
//! raw message.

/// Coarse classification of an upstream error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    QuotaExceeded,
    InvalidApiKey,
    Network,
    Unknown,
}

impl ApiErrorKind {
    /// User-friendly message for display.
    pub fn notice(&self) -> &'static str {
        match self {
            ApiErrorKind::QuotaExceeded => "API quota exceeded. Try again later.",
            ApiErrorKind::InvalidApiKey => "API key is missing or invalid.",
            ApiErrorKind::Network => "Network error. Check your connection.",
            ApiErrorKind::Unknown => "Something went wrong. Please try again.",
        }
    }
}

/// Classifies an error message, case-insensitively.
///
/// Rules are checked in order: `quota` wins over an `api` + `key` pair,
/// which wins over `network`/`fetch`.
pub fn classify_error(message: &str) -> ApiErrorKind {
    let message = message.to_lowercase();

    if message.contains("quota") {
        ApiErrorKind::QuotaExceeded
    } else if message.contains("api") && message.contains("key") {
        ApiErrorKind::InvalidApiKey
    } else if message.contains("network") || message.contains("fetch") {
        ApiErrorKind::Network
    } else {
        ApiErrorKind::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quota_messages_are_classified() {
        assert_eq!(
            classify_error("Daily quota exceeded for search requests"),
            ApiErrorKind::QuotaExceeded
        );
    }

    #[test]
    fn api_key_requires_both_words() {
        assert_eq!(
            classify_error("Invalid API key supplied"),
            ApiErrorKind::InvalidApiKey
        );
        // "api" alone is not enough
        assert_eq!(classify_error("api rate limited"), ApiErrorKind::Unknown);
        // neither is "key" alone
        assert_eq!(classify_error("unknown key"), ApiErrorKind::Unknown);
    }

    #[test]
    fn network_and_fetch_both_match() {
        assert_eq!(
            classify_error("Network unreachable"),
            ApiErrorKind::Network
        );
        assert_eq!(classify_error("fetch failed"), ApiErrorKind::Network);
    }

    #[test]
    fn classification_is_case_insensitive() {
        assert_eq!(
            classify_error("QUOTA limit hit"),
            ApiErrorKind::QuotaExceeded
        );
        assert_eq!(classify_error("NETWORK down"), ApiErrorKind::Network);
    }

    #[test]
    fn quota_wins_over_later_rules() {
        // A message matching several rules takes the first.
        assert_eq!(
            classify_error("quota exceeded while fetching with api key"),
            ApiErrorKind::QuotaExceeded
        );
    }

    #[test]
    fn unmatched_messages_fall_through() {
        assert_eq!(
            classify_error("Internal server error (500)"),
            ApiErrorKind::Unknown
        );
    }

    #[test]
    fn every_kind_has_a_notice() {
        for kind in [
            ApiErrorKind::QuotaExceeded,
            ApiErrorKind::InvalidApiKey,
            ApiErrorKind::Network,
            ApiErrorKind::Unknown,
        ] {
            assert!(!kind.notice().is_empty());
        }
    }
}
