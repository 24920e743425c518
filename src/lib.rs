//! Cliente de inventario
//!
//! Librería del cliente del sistema de inventario: sesión persistida,
//! cliente REST del backend, controllers con guardas de rol y cache local
//! de referencias. El binario `inventario` monta las pantallas de terminal
//! sobre estos módulos.

pub mod cache;
pub mod client;
pub mod config;
pub mod controllers;
pub mod dto;
pub mod models;
pub mod session;
pub mod utils;
