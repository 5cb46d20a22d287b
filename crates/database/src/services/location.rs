use crate::entities::{customers, locations, reservations};
use crate::error::{DataError, classify};
use models::NewLocation;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    ModelTrait, QueryFilter, TransactionTrait,
};
use std::collections::HashMap;

pub struct LocationService;

impl LocationService {
    /// Inserts a location. There is no HTTP endpoint for this; it backs
    /// fixtures and operational seeding.
    pub async fn create(
        db: &DatabaseConnection,
        input: &NewLocation,
    ) -> Result<locations::Model, DataError> {
        let txn = db.begin().await?;

        let location = locations::ActiveModel {
            name: Set(input.name.clone()),
            max_party_size: Set(input.max_party_size),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(classify)?;

        txn.commit().await?;
        Ok(location)
    }

    /// Lists every location with its reservations, each reservation carrying
    /// its customer. Customers are fetched once and stitched in memory.
    pub async fn list_with_reservations(
        db: &DatabaseConnection,
    ) -> Result<
        Vec<(
            locations::Model,
            Vec<(reservations::Model, customers::Model)>,
        )>,
        DataError,
    > {
        let locations = locations::Entity::find()
            .find_with_related(reservations::Entity)
            .all(db)
            .await?;

        let customer_ids: Vec<i32> = locations
            .iter()
            .flat_map(|(_, reservations)| reservations.iter().map(|r| r.customer_id))
            .collect();

        let customers_by_id: HashMap<i32, customers::Model> = customers::Entity::find()
            .filter(customers::Column::Id.is_in(customer_ids))
            .all(db)
            .await?
            .into_iter()
            .map(|customer| (customer.id, customer))
            .collect();

        let rows = locations
            .into_iter()
            .map(|(location, reservations)| {
                let expanded = reservations
                    .into_iter()
                    .filter_map(|reservation| {
                        let customer = customers_by_id.get(&reservation.customer_id)?.clone();
                        Some((reservation, customer))
                    })
                    .collect();
                (location, expanded)
            })
            .collect();

        Ok(rows)
    }

    pub async fn get_by_id(
        db: &DatabaseConnection,
        id: i32,
    ) -> Result<Option<locations::Model>, DataError> {
        Ok(locations::Entity::find_by_id(id).one(db).await?)
    }

    /// Derived view: the distinct customers holding reservations at a
    /// location. Computed from the reservations table, never stored.
    pub async fn customers_for(
        db: &DatabaseConnection,
        location: &locations::Model,
    ) -> Result<Vec<customers::Model>, DataError> {
        Ok(location.find_related(customers::Entity).all(db).await?)
    }
}
