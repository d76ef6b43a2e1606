use async_trait::async_trait;
use sea_orm::DbErr;

use crate::error::WriteError;
use crate::models::{Color, NewProduct, Product, ProductType};

/// Storage seam of the catalog.
///
/// Errors are returned raw; classifying them is the service's job.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Create a product and attach its colors atomically
    async fn create_product(&self, input: NewProduct) -> Result<Product, WriteError>;

    /// One page of products, newest first, plus the total product count
    async fn list_products(&self, page: u64, page_size: u64)
    -> Result<(Vec<Product>, u64), DbErr>;

    /// All product types, newest first
    async fn list_product_types(&self) -> Result<Vec<ProductType>, DbErr>;

    /// All colors, newest first
    async fn list_colors(&self) -> Result<Vec<Color>, DbErr>;
}
