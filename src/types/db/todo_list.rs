use sea_orm::entity::prelude::*;

/// Row shape for the `todo_list` table
///
/// The table is a key/document store rather than a normalized schema: the
/// `document` column carries the full serialized list, nested items included,
/// and every write replaces it wholesale.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "todo_list")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub list_id: String,
    pub document: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
