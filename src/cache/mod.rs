//! Cache
//!
//! Este módulo contiene el estado local de listas que se sincroniza con
//! el backend tras cada operación CRUD.

pub mod referencia_cache;

pub use referencia_cache::{FiltroEstado, ReferenciaCache};
