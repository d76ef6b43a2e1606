//! sea-orm mappings for the catalog tables.

pub mod colors;
pub mod product_types;
pub mod products;
pub mod products_colors;
