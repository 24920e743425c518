//! Configuración
//!
//! Este módulo contiene la configuración de entorno de la aplicación.

pub mod environment;

pub use environment::EnvironmentConfig;
