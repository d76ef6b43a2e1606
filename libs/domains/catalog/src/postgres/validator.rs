use std::collections::HashSet;

use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, QuerySelect,
};

use crate::entity::{colors, product_types};

/// Whether a product type with this id exists.
pub async fn product_type_exists<C>(db: &C, id: i32) -> Result<bool, sea_orm::DbErr>
where
    C: ConnectionTrait,
{
    let count = product_types::Entity::find_by_id(id).count(db).await?;
    Ok(count > 0)
}

/// Requested color ids without a matching row.
///
/// Each missing id is reported once, in the order it first appears in `ids`.
pub async fn missing_color_ids<C>(db: &C, ids: &[i32]) -> Result<Vec<i32>, sea_orm::DbErr>
where
    C: ConnectionTrait,
{
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let existing: HashSet<i32> = colors::Entity::find()
        .select_only()
        .column(colors::Column::Id)
        .filter(colors::Column::Id.is_in(ids.iter().copied()))
        .into_tuple::<i32>()
        .all(db)
        .await?
        .into_iter()
        .collect();

    let mut reported = HashSet::new();
    Ok(ids
        .iter()
        .copied()
        .filter(|id| !existing.contains(id) && reported.insert(*id))
        .collect())
}
