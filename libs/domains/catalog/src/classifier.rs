//! Maps product-creation failures onto [`CatalogError`].
//!
//! This is the only place that looks at storage error text. Nothing storage
//! specific leaves this module.

use sea_orm::{DbErr, SqlErr};

use crate::error::{CatalogError, WriteError};

pub const FIELD_PRODUCT_TYPE_ID: &str = "product_type_id";
pub const FIELD_COLOR_IDS: &str = "color_ids";
pub const FIELD_PRODUCTS_CODE: &str = "products_code";
pub const FIELD_PRODUCTS_NAME: &str = "products_name";
pub const FIELD_UNIQUE: &str = "unique";

const PRODUCT_TYPE_MISSING: &str = "product type does not exist";
const COLORS_MISSING: &str = "colors do not exist";

const CODE_CONSTRAINTS: [&str; 3] = [
    "products_code_key",
    "products_code_unique",
    "unique_products_code",
];
const NAME_CONSTRAINTS: [&str; 3] = [
    "products_name_key",
    "products_name_unique",
    "products_name_unique_ci",
];

/// Classify an error returned by the product writer.
pub fn classify(err: WriteError) -> CatalogError {
    match err {
        WriteError::ProductTypeNotFound(_) => {
            CatalogError::invalid_reference(FIELD_PRODUCT_TYPE_ID, PRODUCT_TYPE_MISSING)
        }
        WriteError::ColorsNotFound(_) => {
            CatalogError::invalid_reference(FIELD_COLOR_IDS, COLORS_MISSING)
        }
        WriteError::Store(db_err) => classify_store(db_err),
    }
}

fn classify_store(err: DbErr) -> CatalogError {
    match err.sql_err() {
        Some(sql_err) => classify_sql_err(sql_err).unwrap_or_else(|| internal(&err)),
        None => internal(&err),
    }
}

/// Constraint violations this core knows how to report to a client.
///
/// Returns `None` for violations that must be treated as internal errors.
pub fn classify_sql_err(err: SqlErr) -> Option<CatalogError> {
    match err {
        SqlErr::UniqueConstraintViolation(message) => Some(unique_conflict(&message)),
        // A referenced row removed by a concurrent transaction after validation
        SqlErr::ForeignKeyConstraintViolation(message) => {
            let constraint = constraint_name(&message)?;
            if constraint.contains("product_type_id") {
                Some(CatalogError::invalid_reference(
                    FIELD_PRODUCT_TYPE_ID,
                    PRODUCT_TYPE_MISSING,
                ))
            } else if constraint.contains("color_id") {
                Some(CatalogError::invalid_reference(FIELD_COLOR_IDS, COLORS_MISSING))
            } else {
                None
            }
        }
        _ => None,
    }
}

fn unique_conflict(message: &str) -> CatalogError {
    match constraint_name(message) {
        Some(name) if CODE_CONSTRAINTS.contains(&name) => {
            CatalogError::conflict(FIELD_PRODUCTS_CODE, "products code already exists")
        }
        Some(name) if NAME_CONSTRAINTS.contains(&name) => {
            CatalogError::conflict(FIELD_PRODUCTS_NAME, "products name already exists")
        }
        _ => CatalogError::conflict(FIELD_UNIQUE, "duplicate value"),
    }
}

/// Extracts `<name>` from `... constraint "<name>"`.
pub fn constraint_name(message: &str) -> Option<&str> {
    let (_, rest) = message.split_once("constraint \"")?;
    let (name, _) = rest.split_once('"')?;
    Some(name)
}

// Logged once, when the response is rendered.
fn internal(err: &DbErr) -> CatalogError {
    CatalogError::Internal(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_of(err: &CatalogError) -> &str {
        match err {
            CatalogError::Conflict { field, .. } => field,
            CatalogError::InvalidReference { field, .. } => field,
            other => panic!("unexpected classification: {other:?}"),
        }
    }

    #[test]
    fn test_constraint_name() {
        assert_eq!(
            constraint_name(r#"duplicate key value violates unique constraint "products_code_key""#),
            Some("products_code_key")
        );
        assert_eq!(constraint_name("connection refused"), None);
        assert_eq!(constraint_name(r#"constraint "unterminated"#), None);
    }

    #[test]
    fn test_reference_errors() {
        let err = classify(WriteError::ProductTypeNotFound(999));
        assert_eq!(field_of(&err), FIELD_PRODUCT_TYPE_ID);

        let err = classify(WriteError::ColorsNotFound(vec![5]));
        match err {
            CatalogError::InvalidReference { field, message } => {
                assert_eq!(field, FIELD_COLOR_IDS);
                assert_eq!(message, "colors do not exist");
            }
            other => panic!("unexpected classification: {other:?}"),
        }
    }

    #[test]
    fn test_unique_violations_by_constraint() {
        let cases = [
            ("products_code_key", FIELD_PRODUCTS_CODE),
            ("unique_products_code", FIELD_PRODUCTS_CODE),
            ("products_code_unique", FIELD_PRODUCTS_CODE),
            ("products_name_key", FIELD_PRODUCTS_NAME),
            ("products_name_unique_ci", FIELD_PRODUCTS_NAME),
            ("colors_code_key", FIELD_UNIQUE),
        ];

        for (constraint, expected) in cases {
            let message = format!("duplicate key value violates unique constraint \"{constraint}\"");
            let err = classify_sql_err(SqlErr::UniqueConstraintViolation(message)).unwrap();
            assert_eq!(field_of(&err), expected, "constraint {constraint}");
        }

        let err = classify_sql_err(SqlErr::UniqueConstraintViolation("duplicate".into())).unwrap();
        match err {
            CatalogError::Conflict { field, reason } => {
                assert_eq!(field, FIELD_UNIQUE);
                assert_eq!(reason, "duplicate value");
            }
            other => panic!("unexpected classification: {other:?}"),
        }
    }

    #[test]
    fn test_foreign_key_violations() {
        let fk = |name: &str| {
            SqlErr::ForeignKeyConstraintViolation(format!(
                "insert or update on table \"products\" violates foreign key constraint \"{name}\""
            ))
        };

        let err = classify_sql_err(fk("products_product_type_id_fkey")).unwrap();
        assert_eq!(field_of(&err), FIELD_PRODUCT_TYPE_ID);

        let err = classify_sql_err(fk("products_colors_color_id_fkey")).unwrap();
        assert_eq!(field_of(&err), FIELD_COLOR_IDS);

        assert!(classify_sql_err(fk("products_colors_product_id_fkey")).is_none());
    }

    #[test]
    fn test_non_constraint_errors_are_internal() {
        let err = classify(WriteError::Store(DbErr::Custom("connection reset".to_string())));
        assert!(matches!(err, CatalogError::Internal(_)));

        let err = classify(WriteError::Store(DbErr::RecordNotInserted));
        assert!(matches!(err, CatalogError::Internal(_)));
    }
}
