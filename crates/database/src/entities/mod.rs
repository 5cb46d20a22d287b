pub mod customer;
pub mod location;
pub mod reservation;

pub use self::customer as customers;
pub use self::location as locations;
pub use self::reservation as reservations;
