use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create todo_list table
        //
        // One row per list, keyed by list_id. The document column holds the
        // full serialized list including its nested item collection.
        manager
            .create_table(
                Table::create()
                    .table(TodoList::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TodoList::ListId)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TodoList::Document)
                            .json()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TodoList::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum TodoList {
    Table,
    ListId,
    Document,
}
