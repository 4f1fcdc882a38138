pub mod refuel_controller;
pub mod station_controller;
pub mod vehicle_controller;
