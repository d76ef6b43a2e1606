use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub code: i32,
    #[sea_orm(column_type = "Text", unique)]
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub product_type_id: i32,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// id and created_at are left to the column defaults
impl From<&crate::models::NewProduct> for ActiveModel {
    fn from(input: &crate::models::NewProduct) -> Self {
        ActiveModel {
            code: Set(input.code),
            name: Set(input.name.clone()),
            description: Set(input.description.clone()),
            product_type_id: Set(input.product_type_id),
            ..Default::default()
        }
    }
}
