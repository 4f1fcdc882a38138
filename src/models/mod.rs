//! Modelos de datos
//!
//! Vehículos, estaciones, repostajes y las estadísticas derivadas.

pub mod refuel;
pub mod station;
pub mod stats;
pub mod vehicle;

pub use refuel::{EnrichedRefuelEvent, NewRefuel, RefuelEvent};
pub use station::FuelStation;
pub use stats::{StationAverage, VehicleStats};
pub use vehicle::Vehicle;
