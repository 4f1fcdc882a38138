//! Agregación de estadísticas por vehículo
//!
//! A partir de los repostajes enriquecidos calcula totales, rendimiento
//! general, el último repostaje (por fecha) y el ranking de estaciones.

use std::collections::HashMap;

use uuid::Uuid;

use super::consumption_service::round2;
use crate::models::{EnrichedRefuelEvent, StationAverage, VehicleStats};

/// Con menos repostajes no existe ningún intervalo completo
pub const MIN_REFUELS_FOR_AVERAGE: usize = 2;

/// Calcula el resumen de un vehículo. Nunca falla.
pub fn aggregate(enriched: &[EnrichedRefuelEvent], initial_odometer: i64) -> VehicleStats {
    let Some(most_recent) = most_recent_refuel(enriched) else {
        return VehicleStats::default();
    };

    // Se toma el odómetro del último repostaje por fecha, no la suma de intervalos
    let total_distance = most_recent
        .refuel
        .current_odometer
        .saturating_sub(initial_odometer);
    let total_fuel: f64 = enriched.iter().map(|r| r.refuel.liters).sum();
    let has_enough_data = enriched.len() >= MIN_REFUELS_FOR_AVERAGE;
    let overall_economy = if has_enough_data {
        ratio(total_distance, total_fuel)
    } else {
        0.0
    };

    VehicleStats {
        total_refuels: enriched.len(),
        has_enough_data,
        total_distance,
        total_fuel,
        overall_economy,
        station_averages: station_averages(enriched),
        most_recent_refuel: Some(most_recent.clone()),
    }
}

/// Repostaje con la fecha más reciente; en empate gana el último de la entrada
pub fn most_recent_refuel(enriched: &[EnrichedRefuelEvent]) -> Option<&EnrichedRefuelEvent> {
    enriched.iter().max_by_key(|r| r.refuel.date)
}

/// Ranking de estaciones por rendimiento medio, de mayor a menor.
///
/// Solo cuentan los intervalos con rendimiento positivo. Los empates
/// conservan el orden de primera aparición.
pub fn station_averages(enriched: &[EnrichedRefuelEvent]) -> Vec<StationAverage> {
    let mut index: HashMap<Uuid, usize> = HashMap::new();
    let mut groups: Vec<StationAverage> = Vec::new();

    for record in enriched.iter().filter(|r| r.economy > 0.0) {
        let slot = *index.entry(record.refuel.station_id).or_insert_with(|| {
            groups.push(StationAverage {
                station_id: record.refuel.station_id,
                station_name: record.refuel.station_name.clone(),
                average: 0.0,
                refuel_count: 0,
                total_distance: 0,
                total_fuel: 0.0,
            });
            groups.len() - 1
        });

        let group = &mut groups[slot];
        group.total_distance += record.distance_since_last;
        group.total_fuel += record.refuel.liters;
        group.refuel_count += 1;
    }

    for group in &mut groups {
        group.average = ratio(group.total_distance, group.total_fuel);
    }

    groups.sort_by(|a, b| b.average.total_cmp(&a.average));
    groups
}

fn ratio(distance: i64, fuel: f64) -> f64 {
    if fuel > 0.0 {
        round2(distance as f64 / fuel)
    } else {
        0.0
    }
}
