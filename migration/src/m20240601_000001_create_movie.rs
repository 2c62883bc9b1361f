use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Movie::Table)
                    .if_not_exists()
                    .col(pk_auto(Movie::MovieId))
                    .col(string(Movie::Name))
                    .col(ColumnDef::new(Movie::Format).string().not_null().default("hd"))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MovieEdition::Table)
                    .if_not_exists()
                    .col(pk_auto(MovieEdition::MovieEditionId))
                    .col(integer(MovieEdition::MovieId))
                    .col(string(MovieEdition::Edition))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movie_edition_movie")
                            .from(MovieEdition::Table, MovieEdition::MovieId)
                            .to(Movie::Table, Movie::MovieId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_movie_edition_movie_id")
                    .table(MovieEdition::Table)
                    .col(MovieEdition::MovieId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(MovieEdition::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Movie::Table).to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Movie {
    Table,
    MovieId,
    Name,
    Format,
}

#[derive(DeriveIden)]
enum MovieEdition {
    Table,
    MovieEditionId,
    MovieId,
    Edition,
}
