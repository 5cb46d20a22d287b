pub mod customer;
pub mod location;
pub mod reservation;

pub use customer::CustomerService;
pub use location::LocationService;
pub use reservation::ReservationService;
