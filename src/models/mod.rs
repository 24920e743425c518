//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que mapean exactamente
//! al JSON que expone el backend de inventario.

pub mod referencia;
pub mod usuario;

pub use referencia::Referencia;
pub use usuario::{Rol, Usuario};
