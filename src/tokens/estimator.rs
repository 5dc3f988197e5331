//! Token estimator implementations.

/// Maps request text to an estimated token cost.
///
/// Implementations must be pure and deterministic: the same text always
/// yields the same estimate, with no side effects.
pub trait TokenEstimator: Send + Sync {
    fn estimate(&self, text: &str) -> u64;
}

/// Character-count estimator: `len(text) / chars_per_token`, truncating.
///
/// Truncating division is part of the contract — `"abc"` estimates to 0
/// at the default ratio, and tests depend on that exact behavior.
#[derive(Debug, Clone)]
pub struct CharacterEstimator {
    chars_per_token: u64,
}

impl CharacterEstimator {
    /// Default ratio: 4 characters per token.
    pub fn new() -> Self {
        Self::with_ratio(4)
    }

    pub fn with_ratio(chars_per_token: u64) -> Self {
        assert!(chars_per_token > 0, "chars_per_token must be positive");
        Self { chars_per_token }
    }
}

impl Default for CharacterEstimator {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenEstimator for CharacterEstimator {
    fn estimate(&self, text: &str) -> u64 {
        // Characters, not bytes: multi-byte text must not inflate the estimate.
        text.chars().count() as u64 / self.chars_per_token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_truncates() {
        let estimator = CharacterEstimator::new();
        assert_eq!(estimator.estimate("abcdefgh"), 2);
        assert_eq!(estimator.estimate("abc"), 0);
        assert_eq!(estimator.estimate("abcd"), 1);
        assert_eq!(estimator.estimate("abcdefg"), 1);
    }

    #[test]
    fn test_estimate_counts_chars_not_bytes() {
        let estimator = CharacterEstimator::new();
        // Four characters, eight UTF-8 bytes.
        assert_eq!(estimator.estimate("éééé"), 1);
        assert_eq!(estimator.estimate("café"), 1);
        assert_eq!(estimator.estimate("日本語"), 0);
    }

    #[test]
    fn test_estimate_empty() {
        let estimator = CharacterEstimator::new();
        assert_eq!(estimator.estimate(""), 0);
    }

    #[test]
    fn test_estimate_custom_ratio() {
        let estimator = CharacterEstimator::with_ratio(2);
        assert_eq!(estimator.estimate("abcdefgh"), 4);
        assert_eq!(estimator.estimate("a"), 0);
    }

    #[test]
    fn test_estimate_deterministic() {
        let estimator = CharacterEstimator::new();
        let text = "My printer is on fire and the office smells of toner";
        assert_eq!(estimator.estimate(text), estimator.estimate(text));
    }

    #[test]
    #[should_panic(expected = "chars_per_token must be positive")]
    fn test_zero_ratio_panics() {
        CharacterEstimator::with_ratio(0);
    }
}
