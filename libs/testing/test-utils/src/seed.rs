//! The standard catalog fixture: 4 product types, 8 colors, 10 products.
//!
//! Products are inserted one statement at a time, so `created_at` increases in
//! insertion order and the newest product is `Sectional Sofa` (code 110).

use crate::TestDatabase;

pub const PRODUCT_TYPES: [(i32, &str); 4] = [
    (1, "Furniture"),
    (2, "Storage"),
    (3, "Seating"),
    (4, "Tables"),
];

pub const COLORS: [(i32, &str, &str); 8] = [
    (1, "White", "#FFFFFF"),
    (2, "Black", "#000000"),
    (3, "Brown", "#8B4513"),
    (4, "Oak", "#D2B48C"),
    (5, "Pine", "#FDF5E6"),
    (6, "Birch", "#F5F5DC"),
    (7, "Gray", "#808080"),
    (8, "Blue", "#0000FF"),
];

/// (code, name, description, product type code, color codes)
pub const PRODUCTS: [(i32, &str, Option<&str>, i32, &[i32]); 10] = [
    (
        101,
        "Bookcase",
        Some("Perfect for organizing books and displaying decorative items"),
        2,
        &[1, 3],
    ),
    (102, "Bed Frame High Oak", None, 1, &[4]),
    (
        103,
        "Daybed Frame",
        Some("Versatile seating and sleeping solution for small spaces"),
        3,
        &[1, 7],
    ),
    (104, "Shelf Unit", None, 2, &[1, 2]),
    (
        105,
        "Storage Unit",
        Some("Ideal for organizing household items and keeping spaces tidy"),
        2,
        &[1, 7],
    ),
    (
        106,
        "Shelving Unit Pine",
        Some("Natural pine wood construction with multiple storage compartments"),
        2,
        &[5],
    ),
    (107, "Coffee Table", None, 4, &[3, 2]),
    (
        108,
        "Sleeper Sectional",
        Some("Comfortable seating that converts to a bed for guests"),
        3,
        &[7, 8],
    ),
    (
        109,
        "Armchair Birch",
        Some("Elegant single seat chair with birch wood frame"),
        3,
        &[6],
    ),
    (110, "Sectional Sofa", None, 3, &[7, 2]),
];

/// Ids assigned to the fixture rows, indexed like the constants above.
#[derive(Debug, Clone, Default)]
pub struct SeededCatalog {
    pub product_type_ids: Vec<i32>,
    pub color_ids: Vec<i32>,
    pub product_ids: Vec<i32>,
}

impl SeededCatalog {
    pub fn product_type_id(&self, code: i32) -> i32 {
        let idx = PRODUCT_TYPES
            .iter()
            .position(|(c, _)| *c == code)
            .unwrap_or_else(|| panic!("no fixture product type with code {}", code));
        self.product_type_ids[idx]
    }

    pub fn color_id(&self, code: i32) -> i32 {
        let idx = COLORS
            .iter()
            .position(|(c, _, _)| *c == code)
            .unwrap_or_else(|| panic!("no fixture color with code {}", code));
        self.color_ids[idx]
    }
}

pub async fn seed_catalog(db: &TestDatabase) -> SeededCatalog {
    let mut seeded = SeededCatalog::default();

    for (code, name) in PRODUCT_TYPES {
        seeded
            .product_type_ids
            .push(db.create_product_type(code, Some(name)).await);
    }

    for (code, name, hex) in COLORS {
        seeded.color_ids.push(db.create_color(code, name, hex).await);
    }

    for (code, name, description, type_code, color_codes) in PRODUCTS {
        let product_id = db
            .create_product_row(code, name, description, seeded.product_type_id(type_code))
            .await;
        for color_code in color_codes {
            db.attach_color(product_id, seeded.color_id(*color_code)).await;
        }
        seeded.product_ids.push(product_id);
    }

    tracing::debug!(products = seeded.product_ids.len(), "Catalog fixture seeded");
    seeded
}
