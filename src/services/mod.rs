//! Services module
//!
//! Este módulo contiene la lógica de negocio: el cálculo de consumo por
//! repostaje y la agregación de estadísticas. Son funciones puras, sin I/O.

pub mod consumption_service;
pub mod fuel_report_service;
pub mod stats_service;

pub use consumption_service::{derive_consumption, round2};
pub use fuel_report_service::{build_report, RefuelOrder, VehicleReport};
pub use stats_service::aggregate;
