use crate::entities::{customers, locations, reservations};
use crate::error::{DataError, classify};
use chrono::NaiveDate;
use models::NewReservation;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    ModelTrait, QueryFilter, TransactionTrait,
};
use std::collections::HashMap;

pub struct ReservationService;

impl ReservationService {
    /// Inserts a reservation inside a transaction. A duplicate
    /// (location, customer, date) triple or a dangling foreign key is
    /// rejected at commit and rolled back as `DataError::Conflict`.
    pub async fn create(
        db: &DatabaseConnection,
        reservation_date: NaiveDate,
        input: &NewReservation,
    ) -> Result<reservations::Model, DataError> {
        let txn = db.begin().await?;

        let reservation = reservations::ActiveModel {
            party_name: Set(input.party_name.clone()),
            party_size: Set(input.party_size),
            reservation_date: Set(reservation_date),
            location_id: Set(input.location_id),
            customer_id: Set(input.customer_id),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(classify)?;

        txn.commit().await?;
        Ok(reservation)
    }

    /// Lists every reservation with its customer and location expanded.
    pub async fn list(
        db: &DatabaseConnection,
    ) -> Result<Vec<(reservations::Model, customers::Model, locations::Model)>, DataError> {
        let reservations = reservations::Entity::find().all(db).await?;

        let customer_ids: Vec<i32> = reservations.iter().map(|r| r.customer_id).collect();
        let location_ids: Vec<i32> = reservations.iter().map(|r| r.location_id).collect();

        let customers_by_id: HashMap<i32, customers::Model> = customers::Entity::find()
            .filter(customers::Column::Id.is_in(customer_ids))
            .all(db)
            .await?
            .into_iter()
            .map(|customer| (customer.id, customer))
            .collect();

        let locations_by_id: HashMap<i32, locations::Model> = locations::Entity::find()
            .filter(locations::Column::Id.is_in(location_ids))
            .all(db)
            .await?
            .into_iter()
            .map(|location| (location.id, location))
            .collect();

        let rows = reservations
            .into_iter()
            .filter_map(|reservation| {
                let customer = customers_by_id.get(&reservation.customer_id)?.clone();
                let location = locations_by_id.get(&reservation.location_id)?.clone();
                Some((reservation, customer, location))
            })
            .collect();

        Ok(rows)
    }

    /// Fetches one reservation with its customer and location. Returns
    /// `None` when the id matches no row.
    pub async fn get_by_id(
        db: &DatabaseConnection,
        id: i32,
    ) -> Result<Option<(reservations::Model, customers::Model, locations::Model)>, DataError>
    {
        let Some(reservation) = reservations::Entity::find_by_id(id).one(db).await? else {
            return Ok(None);
        };

        let customer = reservation.find_related(customers::Entity).one(db).await?;
        let location = reservation.find_related(locations::Entity).one(db).await?;

        // Both FKs are non-nullable, so a missing side means the row is gone
        let (Some(customer), Some(location)) = (customer, location) else {
            return Ok(None);
        };

        Ok(Some((reservation, customer, location)))
    }

    /// Deletes a reservation by id. Reports whether a row was found; a clean
    /// miss is not an error.
    pub async fn delete_by_id(db: &DatabaseConnection, id: i32) -> Result<bool, DataError> {
        let txn = db.begin().await?;

        let Some(reservation) = reservations::Entity::find_by_id(id).one(&txn).await? else {
            txn.rollback().await?;
            return Ok(false);
        };

        reservation.delete(&txn).await?;
        txn.commit().await?;
        Ok(true)
    }
}
