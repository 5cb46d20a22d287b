use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "customers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::reservation::Entity")]
    Reservations,
}

impl Related<super::reservation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reservations.def()
    }
}

// Many-to-many view onto locations through reservations
impl Related<super::location::Entity> for Entity {
    fn to() -> RelationDef {
        super::reservation::Relation::Location.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::reservation::Relation::Customer.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
