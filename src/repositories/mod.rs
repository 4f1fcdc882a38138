//! Repositorios
//!
//! Acceso a datos de vehículos, estaciones y repostajes sobre el
//! almacenamiento en memoria compartido.

pub mod memory_store;
pub mod refuel_repository;
pub mod station_repository;
pub mod vehicle_repository;

pub use memory_store::MemoryStore;
pub use refuel_repository::RefuelRepository;
pub use station_repository::StationRepository;
pub use vehicle_repository::{VehicleChanges, VehicleRepository};
