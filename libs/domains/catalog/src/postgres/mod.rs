//! PostgreSQL implementation of [`CatalogRepository`].
//!
//! - `validator`: referential checks run inside the write transaction
//! - `writer`: the product-creation transaction
//! - `reader`: paginated listing with aggregated colors
//! - `lookups`: product types and colors

mod lookups;
mod reader;
mod validator;
mod writer;

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr};

use crate::error::WriteError;
use crate::models::{Color, NewProduct, Product, ProductType};
use crate::repository::CatalogRepository;

pub use validator::{missing_color_ids, product_type_exists};

#[derive(Clone)]
pub struct PgCatalogRepository {
    db: DatabaseConnection,
}

impl PgCatalogRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CatalogRepository for PgCatalogRepository {
    async fn create_product(&self, input: NewProduct) -> Result<Product, WriteError> {
        writer::create_product(&self.db, input).await
    }

    async fn list_products(
        &self,
        page: u64,
        page_size: u64,
    ) -> Result<(Vec<Product>, u64), DbErr> {
        reader::list_products(&self.db, page, page_size).await
    }

    async fn list_product_types(&self) -> Result<Vec<ProductType>, DbErr> {
        lookups::list_product_types(&self.db).await
    }

    async fn list_colors(&self) -> Result<Vec<Color>, DbErr> {
        lookups::list_colors(&self.db).await
    }
}
