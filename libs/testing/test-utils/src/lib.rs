//! Shared test utilities for domain testing
//!
//! - `TestMongo`: MongoDB container with automatic cleanup (feature: "mongodb")
//! - `TestDataBuilder`: Deterministic test data generation (always available)
//! - `assertions`: Custom assertion helpers (always available)
//!
//! # Usage
//!
//! ```rust,no_run
//! use test_utils::{TestDataBuilder, TestMongo};
//!
//! #[tokio::test]
//! async fn my_mongo_test() {
//!     let mongo = TestMongo::new().await;
//!     let builder = TestDataBuilder::from_test_name("my_test");
//!
//!     let db = mongo.database(&builder.database_name());
//!     let cnpj = builder.cnpj(1);
//! }
//! ```

#[cfg(feature = "mongodb")]
mod mongo;

#[cfg(feature = "mongodb")]
pub use mongo::TestMongo;

/// Builder for test data with deterministic randomization
///
/// Tests are reproducible because every value derives from a seed.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (seed is the hash of the name)
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_company");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Generate a unique name for testing
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::new(7);
    /// assert_eq!(builder.name("company", "main"), "test-company-7-main");
    /// ```
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }

    /// A 14-digit CNPJ-shaped string, distinct per `n`.
    pub fn cnpj(&self, n: u64) -> String {
        let value = self.seed.wrapping_add(n.wrapping_mul(7_919)) % 100_000_000_000_000;
        format!("{:014}", value)
    }

    pub fn email(&self, local: &str) -> String {
        format!("{}-{}@example.test", local, self.seed)
    }

    /// Product/offer code such as `SKU-1234-2`.
    pub fn code(&self, n: u64) -> String {
        format!("SKU-{}-{}", self.seed % 10_000, n)
    }

    /// Database name unique to this builder's seed.
    pub fn database_name(&self) -> String {
        format!("test_{}", self.seed)
    }
}

/// Test assertion helpers
pub mod assertions {
    /// Assert that an optional value is Some
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }

    /// Assert that `id` is a 24-character lowercase hex identifier
    pub fn assert_object_id(id: &str, context: &str) {
        assert!(
            id.len() == 24 && id.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')),
            "{}: expected 24-hex identifier, got {:?}",
            context,
            id
        );
    }
}
