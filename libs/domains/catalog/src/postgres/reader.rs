use chrono::{DateTime, Utc};
use sea_orm::{
    ConnectionTrait, DbBackend, DbErr, EntityTrait, FromQueryResult, PaginatorTrait, Statement,
};

use crate::entity::products;
use crate::models::{Color, Product, ProductType};

// Shared select list: product, its type, and its colors as a JSON array ordered
// by name. Expects `p` (products or a products-shaped CTE) and `pt` in scope.
macro_rules! product_select {
    () => {
        r#"
        SELECT
            p.id,
            p.code,
            p.name,
            p.description,
            p.created_at,
            pt.id         AS product_type_id,
            pt.code       AS product_type_code,
            pt.name       AS product_type_name,
            pt.created_at AS product_type_created_at,
            COALESCE(
                (
                    SELECT jsonb_agg(
                        jsonb_build_object(
                            'id',         c.id,
                            'code',       c.code,
                            'name',       c.name,
                            'hex',        c.hex,
                            'created_at', c.created_at
                        )
                        ORDER BY c.name, c.id
                    )
                    FROM products_colors pc
                    JOIN colors c ON c.id = pc.color_id
                    WHERE pc.product_id = p.id
                ),
                '[]'::jsonb
            ) AS colors
        "#
    };
}

const PAGE_SQL: &str = concat!(
    r#"
    WITH paged AS (
        SELECT id, code, name, description, product_type_id, created_at
        FROM products
        ORDER BY created_at DESC, id ASC
        LIMIT $1 OFFSET $2
    )
    "#,
    product_select!(),
    r#"
    FROM paged p
    JOIN product_types pt ON pt.id = p.product_type_id
    ORDER BY p.created_at DESC, p.id ASC
    "#
);

const ONE_SQL: &str = concat!(
    product_select!(),
    r#"
    FROM products p
    JOIN product_types pt ON pt.id = p.product_type_id
    WHERE p.id = $1
    "#
);

#[derive(Debug, FromQueryResult)]
struct ProductRow {
    id: i32,
    code: i32,
    name: String,
    description: Option<String>,
    created_at: DateTime<Utc>,
    product_type_id: i32,
    product_type_code: i32,
    product_type_name: Option<String>,
    product_type_created_at: DateTime<Utc>,
    colors: serde_json::Value,
}

impl TryFrom<ProductRow> for Product {
    type Error = DbErr;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        let colors: Vec<Color> =
            serde_json::from_value(row.colors).map_err(|e| DbErr::Json(e.to_string()))?;

        Ok(Product {
            id: row.id,
            code: row.code,
            name: row.name,
            description: row.description,
            product_type: ProductType {
                id: row.product_type_id,
                code: row.product_type_code,
                name: row.product_type_name,
                created_at: row.product_type_created_at,
            },
            colors,
            created_at: row.created_at,
        })
    }
}

/// One page of products plus the total count.
///
/// The count and the page are independent queries run concurrently. Both are
/// awaited before either result is looked at; a failed count is reported first.
pub(super) async fn list_products<C>(
    db: &C,
    page: u64,
    page_size: u64,
) -> Result<(Vec<Product>, u64), DbErr>
where
    C: ConnectionTrait,
{
    let offset = page.saturating_sub(1).saturating_mul(page_size);

    let (total, rows) = tokio::join!(
        products::Entity::find().count(db),
        fetch_page(db, page_size, offset)
    );

    let total = total?;
    let items = rows?;

    Ok((items, total))
}

async fn fetch_page<C>(db: &C, limit: u64, offset: u64) -> Result<Vec<Product>, DbErr>
where
    C: ConnectionTrait,
{
    let stmt = Statement::from_sql_and_values(
        DbBackend::Postgres,
        PAGE_SQL,
        [clamp_i64(limit).into(), clamp_i64(offset).into()],
    );

    ProductRow::find_by_statement(stmt)
        .all(db)
        .await?
        .into_iter()
        .map(Product::try_from)
        .collect()
}

/// A single product with its type and colors.
pub(super) async fn find_product<C>(db: &C, id: i32) -> Result<Option<Product>, DbErr>
where
    C: ConnectionTrait,
{
    let stmt = Statement::from_sql_and_values(DbBackend::Postgres, ONE_SQL, [id.into()]);

    ProductRow::find_by_statement(stmt)
        .one(db)
        .await?
        .map(Product::try_from)
        .transpose()
}

// Postgres takes BIGINT for LIMIT/OFFSET; anything larger is past the end anyway.
fn clamp_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
