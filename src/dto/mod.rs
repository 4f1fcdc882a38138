pub mod common_dto;
pub mod refuel_dto;
pub mod station_dto;
pub mod vehicle_dto;
