//! Fuel Tracker
//!
//! Backend para el seguimiento de consumo de combustible: vehículos,
//! repostajes, estaciones y estadísticas de rendimiento (km/L).

pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
