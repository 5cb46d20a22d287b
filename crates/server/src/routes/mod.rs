pub mod customer;
pub mod health;
pub mod location;
pub mod reservation;
pub mod root;
