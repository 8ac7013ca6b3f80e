//! Shared test utilities for domain testing
//!
//! Provides a deterministic test-data builder so tests that need unique
//! usernames or emails stay reproducible across runs.
//!
//! # Usage
//!
//! ```
//! use test_utils::TestDataBuilder;
//!
//! let builder = TestDataBuilder::from_test_name("my_test");
//!
//! let username = builder.username();
//! let email = builder.email();
//! let name = builder.name("booking", "main");
//! ```

/// Builder for test data with deterministic randomization
///
/// The seed is derived from the test name, so the same test always sees the
/// same data while different tests never collide.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    /// Create a new builder with an explicit seed
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from a test name (generates the seed from its hash)
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Generate a unique username for testing
    pub fn username(&self) -> String {
        format!("user-{}", self.seed)
    }

    /// Generate a unique email for testing
    pub fn email(&self) -> String {
        format!("user-{}@example.com", self.seed)
    }

    /// Generate a unique name with a resource prefix and suffix
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::new(42);
    /// assert_eq!(builder.name("booking", "main"), "test-booking-42-main");
    /// ```
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }
}

/// Test assertion helpers
pub mod assertions {
    /// Assert that an optional value is Some, returning the inner value
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_is_deterministic() {
        let a = TestDataBuilder::from_test_name("my_test");
        let b = TestDataBuilder::from_test_name("my_test");

        assert_eq!(a.username(), b.username());
        assert_eq!(a.email(), b.email());
        assert_eq!(a.name("booking", "x"), b.name("booking", "x"));
    }

    #[test]
    fn test_different_test_names_differ() {
        let a = TestDataBuilder::from_test_name("test1");
        let b = TestDataBuilder::from_test_name("test2");

        assert_ne!(a.username(), b.username());
    }

    #[test]
    fn test_assert_some_returns_inner() {
        let value = assertions::assert_some(Some(5), "five");
        assert_eq!(value, 5);
    }
}
