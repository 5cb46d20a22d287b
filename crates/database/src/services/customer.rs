use crate::entities::{customers, locations, reservations};
use crate::error::{DataError, classify};
use models::NewCustomer;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    ModelTrait, QueryFilter, TransactionTrait,
};

pub struct CustomerService;

impl CustomerService {
    /// Inserts a customer inside a transaction. A duplicate email is rejected
    /// by the unique constraint and rolled back as `DataError::Conflict`.
    pub async fn create(
        db: &DatabaseConnection,
        input: &NewCustomer,
    ) -> Result<customers::Model, DataError> {
        let txn = db.begin().await?;

        let customer = customers::ActiveModel {
            name: Set(input.name.clone()),
            email: Set(input.email.clone()),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(classify)?;

        txn.commit().await?;
        Ok(customer)
    }

    pub async fn list(db: &DatabaseConnection) -> Result<Vec<customers::Model>, DataError> {
        Ok(customers::Entity::find().all(db).await?)
    }

    /// Fetches one customer together with their reservations, each carrying
    /// its location. Returns `None` when the id matches no row.
    pub async fn get_with_reservations(
        db: &DatabaseConnection,
        id: i32,
    ) -> Result<
        Option<(
            customers::Model,
            Vec<(reservations::Model, locations::Model)>,
        )>,
        DataError,
    > {
        let Some(customer) = customers::Entity::find_by_id(id).one(db).await? else {
            return Ok(None);
        };

        let reservations = reservations::Entity::find()
            .filter(reservations::Column::CustomerId.eq(id))
            .find_also_related(locations::Entity)
            .all(db)
            .await?
            .into_iter()
            // The location FK is non-nullable, so the join always matches
            .filter_map(|(reservation, location)| location.map(|l| (reservation, l)))
            .collect();

        Ok(Some((customer, reservations)))
    }

    /// Derived view: the distinct locations a customer has reservations at.
    /// Computed from the reservations table, never stored.
    pub async fn locations_for(
        db: &DatabaseConnection,
        customer: &customers::Model,
    ) -> Result<Vec<locations::Model>, DataError> {
        Ok(customer.find_related(locations::Entity).all(db).await?)
    }
}
