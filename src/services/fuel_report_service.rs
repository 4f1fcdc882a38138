//! Punto de entrada para recalcular el informe de un vehículo
//!
//! Cada vez que cambia el conjunto de repostajes de un vehículo el llamador
//! invoca `build_report` con el conjunto completo; no hay estado entre
//! llamadas, así que el mismo conjunto produce siempre el mismo informe.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{consumption_service, stats_service};
use crate::models::{EnrichedRefuelEvent, RefuelEvent, VehicleStats};

/// Repostajes enriquecidos (por odómetro ascendente) y su resumen
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VehicleReport {
    pub refuels: Vec<EnrichedRefuelEvent>,
    pub stats: VehicleStats,
}

/// Orden de presentación del historial
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RefuelOrder {
    #[default]
    Odometer,
    Date,
}

pub fn build_report(raw: Vec<RefuelEvent>, initial_odometer: i64) -> VehicleReport {
    let refuels = consumption_service::derive_consumption(raw, initial_odometer);
    let stats = stats_service::aggregate(&refuels, initial_odometer);

    debug!(
        "📊 Informe recalculado: {} repostajes, {} km, {:.2} km/L",
        stats.total_refuels, stats.total_distance, stats.overall_economy
    );

    VehicleReport { refuels, stats }
}

/// Reordena el historial enriquecido para su presentación
pub fn ordered(mut refuels: Vec<EnrichedRefuelEvent>, order: RefuelOrder) -> Vec<EnrichedRefuelEvent> {
    if order == RefuelOrder::Date {
        // más reciente primero, como en el historial
        refuels.sort_by(|a, b| b.refuel.date.cmp(&a.refuel.date));
    }
    refuels
}

/// Odómetro que el siguiente repostaje debe superar: el del último repostaje
/// por fecha, o el inicial del vehículo si aún no hay ninguno.
pub fn minimum_next_odometer<'a>(
    existing: impl IntoIterator<Item = &'a RefuelEvent>,
    initial_odometer: i64,
) -> i64 {
    existing
        .into_iter()
        .max_by_key(|r| r.date)
        .map(|r| r.current_odometer)
        .unwrap_or(initial_odometer)
}
