//! Catalog Domain
//!
//! Products, product types and colors. Products are created together with their
//! color associations in a single transaction and listed page by page with the
//! colors aggregated per product.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, request shape validation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, normalisation, error classification
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Trait + PostgreSQL implementation
//! └──────┬──────┘     (validator → writer, reader, lookups)
//!        │
//! ┌──────▼──────┐
//! │   Entity    │  ← sea-orm table mappings
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_catalog::{handlers, CatalogService, PgCatalogRepository};
//! # async fn build(db: sea_orm::DatabaseConnection) {
//! let service = CatalogService::new(PgCatalogRepository::new(db));
//! let router = handlers::router(service);
//! # }
//! ```

pub mod classifier;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{CatalogError, CatalogResult, WriteError};
pub use handlers::ApiDoc;
pub use models::{
    Color, CreateProduct, DataResponse, NewProduct, PageMeta, Product, ProductListQuery,
    ProductPage, ProductType,
};
pub use postgres::PgCatalogRepository;
pub use repository::CatalogRepository;
pub use service::CatalogService;
