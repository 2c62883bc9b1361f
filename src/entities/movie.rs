use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "movie")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub movie_id: i32,
    pub name: String,
    pub format: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::movie_edition::Entity")]
    Editions,
}

impl Related<super::movie_edition::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Editions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
