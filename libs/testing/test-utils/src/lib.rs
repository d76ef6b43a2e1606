//! Shared test utilities for the catalog crates
//!
//! - `TestDatabase`: PostgreSQL container with the catalog schema applied (feature: "postgres")
//! - `seed`: fixture rows for product types, colors and products (feature: "postgres")
//! - `TestDataBuilder`: deterministic, collision-free codes and names
//!
//! ```rust,no_run
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! #[tokio::test]
//! async fn my_postgres_test() {
//!     let db = TestDatabase::new().await;
//!     let builder = TestDataBuilder::from_test_name("my_test");
//!
//!     let type_id = db.create_product_type(builder.code(0), Some("Storage")).await;
//!     let name = builder.name("product", "main");
//! }
//! ```

#[cfg(feature = "postgres")]
mod postgres;

#[cfg(feature = "postgres")]
pub mod seed;

#[cfg(feature = "postgres")]
pub use postgres::TestDatabase;

/// Deterministic test data derived from a seed.
///
/// Two builders created from the same test name produce the same values,
/// different names produce disjoint code ranges.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seeds from a hash of the test name.
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_product");
    /// assert_eq!(builder.code(3), TestDataBuilder::from_test_name("test_create_product").code(3));
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// A positive code unique to this builder for `offset` in `0..1000`.
    pub fn code(&self, offset: i32) -> i32 {
        let base = (self.seed % 1_000_000) as i32 * 1000 + 10_000;
        base + offset
    }

    /// A unique name such as `test-product-12345-main`.
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_builder_deterministic() {
        let a = TestDataBuilder::new(42);
        let b = TestDataBuilder::new(42);

        assert_eq!(a.code(1), b.code(1));
        assert_eq!(a.name("product", "x"), b.name("product", "x"));
    }

    #[test]
    fn test_codes_are_positive_and_distinct() {
        let builder = TestDataBuilder::from_test_name("codes");
        assert!(builder.code(0) > 0);
        assert_ne!(builder.code(0), builder.code(1));
    }

    #[test]
    fn test_data_builder_different_names() {
        let a = TestDataBuilder::from_test_name("test1");
        let b = TestDataBuilder::from_test_name("test2");
        assert_ne!(a.name("product", "main"), b.name("product", "main"));
    }
}
