use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::entity::{colors, product_types};
use crate::models::{Color, ProductType};

pub(super) async fn list_product_types<C>(db: &C) -> Result<Vec<ProductType>, DbErr>
where
    C: ConnectionTrait,
{
    let models = product_types::Entity::find()
        .order_by_desc(product_types::Column::CreatedAt)
        .order_by_asc(product_types::Column::Id)
        .all(db)
        .await?;

    Ok(models.into_iter().map(Into::into).collect())
}

pub(super) async fn list_colors<C>(db: &C) -> Result<Vec<Color>, DbErr>
where
    C: ConnectionTrait,
{
    let models = colors::Entity::find()
        .order_by_desc(colors::Column::CreatedAt)
        .order_by_asc(colors::Column::Id)
        .all(db)
        .await?;

    Ok(models.into_iter().map(Into::into).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn test_list_colors_maps_models() {
        let created_at = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 1, 1, 10, 0, 0)
            .unwrap();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![colors::Model {
                id: 3,
                code: 1,
                name: "White".to_string(),
                hex: "#FFFFFF".to_string(),
                created_at,
            }]])
            .into_connection();

        let colors = list_colors(&db).await.unwrap();
        assert_eq!(colors.len(), 1);
        assert_eq!(colors[0].name, "White");
        assert_eq!(colors[0].created_at, created_at.to_utc());
    }

    #[tokio::test]
    async fn test_list_product_types_propagates_errors() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("gone".to_string())])
            .into_connection();

        assert!(list_product_types(&db).await.is_err());
    }
}
