//! Middleware del sistema
//!
//! CORS y extracción del usuario propietario de la request.

pub mod cors;
pub mod owner;

pub use cors::*;
pub use owner::*;
