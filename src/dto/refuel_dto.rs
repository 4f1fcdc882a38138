use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

use crate::services::RefuelOrder;

// Request para registrar un repostaje.
// Si faltan los litros se calculan como total_value / price_per_liter.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRefuelRequest {
    pub date: Option<DateTime<Utc>>,

    #[validate(range(min = 0))]
    pub current_odometer: i64,

    pub liters: Option<f64>,

    pub price_per_liter: Option<Decimal>,

    pub total_value: Decimal,

    #[validate(length(min = 1, max = 100))]
    pub station_name: String,
}

// Query del historial
#[derive(Debug, Default, Deserialize)]
pub struct RefuelListQuery {
    pub order: Option<RefuelOrder>,
}
