pub mod location;
pub mod resources;

pub use location::{Coordinates, Location};
pub use resources::{Food, Meetup, Movie, Trail, Weather};
