pub mod location_service;
pub use location_service::{LocationError, LocationService};

pub mod location_service_impl;
pub use location_service_impl::SeaOrmLocationService;
