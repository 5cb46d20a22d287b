pub mod customer;
pub mod location;
pub mod reservation;
