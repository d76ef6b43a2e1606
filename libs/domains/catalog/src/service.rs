use std::sync::Arc;

use sea_orm::DbErr;
use validator::Validate;

use crate::classifier;
use crate::error::{CatalogError, CatalogResult};
use crate::models::{
    Color, CreateProduct, NewProduct, PageMeta, Product, ProductListQuery, ProductPage, ProductType,
};
use crate::repository::CatalogRepository;

/// Entry point for the catalog operations
#[derive(Clone)]
pub struct CatalogService<R: CatalogRepository> {
    repository: Arc<R>,
}

impl<R: CatalogRepository> CatalogService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a product together with its colors.
    ///
    /// Input is validated before any transaction is opened.
    pub async fn create_product(&self, input: CreateProduct) -> CatalogResult<Product> {
        input.validate()?;

        self.repository
            .create_product(NewProduct::from(input))
            .await
            .map_err(classifier::classify)
    }

    pub async fn list_products(&self, query: ProductListQuery) -> CatalogResult<ProductPage> {
        query.validate()?;

        let (data, total) = self
            .repository
            .list_products(query.page, query.page_size)
            .await
            .map_err(read_failure)?;

        Ok(ProductPage {
            data,
            meta: PageMeta {
                total,
                page: query.page,
                page_size: query.page_size,
            },
        })
    }

    pub async fn list_product_types(&self) -> CatalogResult<Vec<ProductType>> {
        self.repository
            .list_product_types()
            .await
            .map_err(read_failure)
    }

    pub async fn list_colors(&self) -> CatalogResult<Vec<Color>> {
        self.repository.list_colors().await.map_err(read_failure)
    }
}

fn read_failure(err: DbErr) -> CatalogError {
    CatalogError::Internal(err.to_string())
}
