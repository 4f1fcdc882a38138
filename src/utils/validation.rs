//! Utilidades de validación
//!
//! Normalización de los textos introducidos por el usuario y reglas
//! numéricas de los repostajes.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use validator::ValidationError;

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Nombre de estación tal y como se almacena y se compara: recortado
pub fn normalize_station_name(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Matrícula recortada y en mayúsculas
pub fn normalize_plate(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_uppercase())
}

/// Validar que un importe sea estrictamente positivo
pub fn validate_positive_amount(value: Decimal) -> Result<(), ValidationError> {
    if value <= Decimal::ZERO {
        let mut error = ValidationError::new("positive");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Litros del repostaje: los indicados, o `total_value / price_per_liter`.
///
/// Devuelve `None` si no hay forma de obtenerlos o el resultado no es un
/// número positivo y finito.
pub fn resolve_liters(
    liters: Option<f64>,
    total_value: Decimal,
    price_per_liter: Option<Decimal>,
) -> Option<f64> {
    let liters = match (liters, price_per_liter) {
        (Some(liters), _) => liters,
        (None, Some(price)) if price > Decimal::ZERO => total_value.checked_div(price)?.to_f64()?,
        _ => return None,
    };

    (liters.is_finite() && liters > 0.0).then_some(liters)
}
