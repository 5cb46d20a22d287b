use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "locations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub max_party_size: i32,
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

// Many-to-many view onto customers through reservations
impl Related<super::customer::Entity> for Entity {
    fn to() -> RelationDef {
        super::reservation::Relation::Customer.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::reservation::Relation::Location.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
