use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PAGE_SIZE: u64 = 20;
pub const MAX_PAGE_SIZE: u64 = 100;

/// Classification category referenced by products
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductType {
    pub id: i32,
    pub code: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Selectable color attachable to products
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Color {
    pub id: i32,
    pub code: i32,
    pub name: String,
    /// Hex notation as stored, e.g. `#FFFFFF`
    pub hex: String,
    pub created_at: DateTime<Utc>,
}

/// Catalog product with its type and colors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: i32,
    /// Positive, unique across all products
    pub code: i32,
    /// Unique across all products
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub product_type: ProductType,
    /// Ordered by color name; empty when the product has no colors
    pub colors: Vec<Color>,
    pub created_at: DateTime<Utc>,
}

/// Request body for creating a product
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(range(min = 1))]
    pub code: i32,
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[validate(range(min = 1))]
    pub product_type_id: i32,
    /// Distinct, positive color ids; may be empty
    #[validate(custom(function = "validate_color_ids"))]
    pub color_ids: Vec<i32>,
}

fn validate_color_ids(ids: &[i32]) -> Result<(), ValidationError> {
    if ids.iter().any(|id| *id < 1) {
        return Err(ValidationError::new("color_id_positive")
            .with_message("every color id must be greater than 0".into()));
    }

    let mut seen = HashSet::with_capacity(ids.len());
    if !ids.iter().all(|id| seen.insert(*id)) {
        return Err(ValidationError::new("color_ids_unique")
            .with_message("color ids must be unique".into()));
    }

    Ok(())
}

/// Validated, normalised input handed to the repository
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub code: i32,
    pub name: String,
    pub description: Option<String>,
    pub product_type_id: i32,
    pub color_ids: Vec<i32>,
}

impl From<CreateProduct> for NewProduct {
    fn from(input: CreateProduct) -> Self {
        Self {
            code: input.code,
            name: input.name,
            description: input.description.map(|d| d.trim().to_string()),
            product_type_id: input.product_type_id,
            color_ids: input.color_ids,
        }
    }
}

/// Pagination parameters for the product listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductListQuery {
    /// 1-based page number
    #[serde(default = "default_page")]
    #[validate(range(min = 1))]
    #[param(default = 1, minimum = 1)]
    pub page: u64,
    #[serde(default = "default_page_size")]
    #[validate(range(min = 1, max = 100))]
    #[param(default = 20, minimum = 1, maximum = 100)]
    pub page_size: u64,
}

fn default_page() -> u64 {
    DEFAULT_PAGE
}

fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

impl Default for ProductListQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ProductListQuery {
    pub fn new(page: u64, page_size: u64) -> Self {
        Self { page, page_size }
    }

    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.page_size)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PageMeta {
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
}

/// One page of products plus pagination metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductPage {
    pub data: Vec<Product>,
    pub meta: PageMeta,
}

/// `{"data": [...]}` envelope used by the lookup endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DataResponse<T> {
    pub data: T,
}
