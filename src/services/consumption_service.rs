//! Cálculo de consumo por repostaje
//!
//! Ordena los repostajes de un vehículo por odómetro ascendente y calcula,
//! para cada uno, la distancia recorrida desde el repostaje anterior y el
//! rendimiento (km/L) de ese intervalo. Nunca falla: los intervalos
//! degenerados producen rendimiento 0.

use crate::models::{EnrichedRefuelEvent, RefuelEvent};

/// Redondea a 2 decimales, mitades alejándose de cero
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Rendimiento de un intervalo, 0 si la distancia o los litros no son positivos
pub fn interval_economy(distance: i64, liters: f64) -> f64 {
    if distance > 0 && liters > 0.0 {
        round2(distance as f64 / liters)
    } else {
        0.0
    }
}

/// Enriquece los repostajes de un vehículo con distancia y rendimiento.
///
/// El orden de salida es por odómetro ascendente; los empates conservan el
/// orden de entrada. El primer repostaje siempre tiene rendimiento 0, aunque
/// su distancia desde `initial_odometer` sea positiva.
pub fn derive_consumption(
    mut raw: Vec<RefuelEvent>,
    initial_odometer: i64,
) -> Vec<EnrichedRefuelEvent> {
    // sort_by_key es estable
    raw.sort_by_key(|refuel| refuel.current_odometer);

    let mut previous_odometer: Option<i64> = None;

    raw.into_iter()
        .map(|refuel| {
            let (distance_since_last, economy) = match previous_odometer {
                None => (refuel.current_odometer.saturating_sub(initial_odometer), 0.0),
                Some(previous) => {
                    let distance = refuel.current_odometer.saturating_sub(previous);
                    (distance, interval_economy(distance, refuel.liters))
                }
            };
            previous_odometer = Some(refuel.current_odometer);

            EnrichedRefuelEvent {
                refuel,
                distance_since_last,
                economy,
            }
        })
        .collect()
}

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use rust_decimal::Decimal;
    use uuid::Uuid;

    use crate::models::RefuelEvent;

    pub fn day(n: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap() + Duration::days(n)
    }

    pub fn refuel(odometer: i64, liters: f64, station: Uuid, date: DateTime<Utc>) -> RefuelEvent {
        RefuelEvent {
            id: Uuid::new_v4(),
            vehicle_id: Uuid::nil(),
            owner_id: Uuid::nil(),
            date,
            current_odometer: odometer,
            liters,
            price_per_liter: None,
            total_value: Decimal::new(20000, 2),
            station_id: station,
            station_name: format!("Posto {}", &station.to_string()[..4]),
        }
    }
}
