//! Modelos de estadísticas
//!
//! Resumen por vehículo para el dashboard y ranking por estación.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::refuel::EnrichedRefuelEvent;

/// Resumen de consumo de un vehículo
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct VehicleStats {
    pub total_refuels: usize,
    /// Falso con menos de dos repostajes; el rendimiento general queda en 0
    pub has_enough_data: bool,
    pub total_distance: i64,
    pub total_fuel: f64,
    pub overall_economy: f64,
    pub station_averages: Vec<StationAverage>,
    pub most_recent_refuel: Option<EnrichedRefuelEvent>,
}

/// Rendimiento medio de los intervalos atribuidos a una estación
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StationAverage {
    pub station_id: Uuid,
    pub station_name: String,
    pub average: f64,
    pub refuel_count: usize,
    pub total_distance: i64,
    pub total_fuel: f64,
}
