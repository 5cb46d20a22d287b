pub mod customer;
pub mod location;
pub mod reservation;
pub mod validate;

pub use self::customer::NewCustomer;
pub use self::location::NewLocation;
pub use self::reservation::NewReservation;
pub use self::validate::ValidationError;
