//! Modelo de Refuel
//!
//! Este módulo contiene el repostaje tal y como se almacena (`RefuelEvent`)
//! y su versión enriquecida con distancia y rendimiento (`EnrichedRefuelEvent`).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::station::FuelStation;

/// Repostaje almacenado
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RefuelEvent {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub owner_id: Uuid,
    pub date: DateTime<Utc>,
    pub current_odometer: i64,
    pub liters: f64,
    pub price_per_liter: Option<Decimal>,
    pub total_value: Decimal,
    pub station_id: Uuid,
    /// Copia desnormalizada del nombre de la estación
    pub station_name: String,
}

/// Datos para crear un repostaje; la estación se indica por nombre y se
/// resuelve al insertarlo
#[derive(Debug, Clone)]
pub struct NewRefuel {
    pub vehicle_id: Uuid,
    pub owner_id: Uuid,
    pub date: DateTime<Utc>,
    pub current_odometer: i64,
    pub liters: f64,
    pub price_per_liter: Option<Decimal>,
    pub total_value: Decimal,
    pub station_name: String,
}

impl RefuelEvent {
    pub fn new(new: NewRefuel, station: &FuelStation) -> Self {
        Self {
            id: Uuid::new_v4(),
            vehicle_id: new.vehicle_id,
            owner_id: new.owner_id,
            date: new.date,
            current_odometer: new.current_odometer,
            liters: new.liters,
            price_per_liter: new.price_per_liter,
            total_value: new.total_value,
            station_id: station.id,
            station_name: station.name.clone(),
        }
    }
}

/// Repostaje con los campos derivados del intervalo desde el repostaje anterior
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnrichedRefuelEvent {
    #[serde(flatten)]
    pub refuel: RefuelEvent,
    pub distance_since_last: i64,
    /// km/L del intervalo, 0 cuando el intervalo no es válido
    pub economy: f64,
}
