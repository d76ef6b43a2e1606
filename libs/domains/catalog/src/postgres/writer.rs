use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction, DbBackend, DbErr,
    IsolationLevel, Statement, TransactionTrait,
};

use super::{reader, validator};
use crate::entity::products;
use crate::error::WriteError;
use crate::models::{NewProduct, Product};

// Duplicate pairs are skipped rather than rejected
const ATTACH_COLORS_SQL: &str = r#"
    INSERT INTO products_colors (product_id, color_id)
    SELECT $1, color_id FROM unnest($2::int[]) AS t(color_id)
    ON CONFLICT (product_id, color_id) DO NOTHING
"#;

/// Create a product and its color associations in one transaction.
///
/// Commits only on success. Every failure rolls the transaction back, so a
/// product is never observable without all of its colors.
pub(super) async fn create_product(
    db: &DatabaseConnection,
    input: NewProduct,
) -> Result<Product, WriteError> {
    let txn = db
        .begin_with_config(Some(IsolationLevel::ReadCommitted), None)
        .await?;

    match write(&txn, &input).await {
        Ok(product) => {
            txn.commit().await?;
            tracing::info!(product_id = product.id, code = product.code, "Created product");
            Ok(product)
        }
        Err(err) => {
            if let Err(rollback_err) = txn.rollback().await {
                tracing::warn!(error = %rollback_err, "Rollback of product creation failed");
            }
            Err(err)
        }
    }
}

async fn write(txn: &DatabaseTransaction, input: &NewProduct) -> Result<Product, WriteError> {
    if !validator::product_type_exists(txn, input.product_type_id).await? {
        return Err(WriteError::ProductTypeNotFound(input.product_type_id));
    }

    if !input.color_ids.is_empty() {
        let missing = validator::missing_color_ids(txn, &input.color_ids).await?;
        if !missing.is_empty() {
            return Err(WriteError::ColorsNotFound(missing));
        }
    }

    let product = products::ActiveModel::from(input).insert(txn).await?;

    if !input.color_ids.is_empty() {
        attach_colors(txn, product.id, &input.color_ids).await?;
    }

    reader::find_product(txn, product.id)
        .await?
        .ok_or_else(|| WriteError::Store(DbErr::RecordNotFound(format!("product {}", product.id))))
}

async fn attach_colors<C>(db: &C, product_id: i32, color_ids: &[i32]) -> Result<u64, DbErr>
where
    C: ConnectionTrait,
{
    let stmt = Statement::from_sql_and_values(
        DbBackend::Postgres,
        ATTACH_COLORS_SQL,
        [product_id.into(), color_ids.to_vec().into()],
    );

    let result = db.execute_raw(stmt).await?;
    Ok(result.rows_affected())
}
