//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno: URL del backend,
//! timeout HTTP y ubicación del archivo de sesión.

use std::env;
use std::path::PathBuf;

/// Timeout del cliente HTTP (la app original usaba 5000 ms en axios)
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 5;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    /// URL base del backend de inventario
    pub api_base_url: String,
    pub http_timeout_secs: u64,
    /// Archivo donde se persiste la sesión (clave `usuario`)
    pub session_file: PathBuf,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            api_base_url: env::var("INVENTARIO_API_URL")
                .unwrap_or_else(|_| "http://192.168.1.10:8080".to_string()),
            http_timeout_secs: env::var("INVENTARIO_HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|valor| valor.parse().ok())
                .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS),
            session_file: env::var("INVENTARIO_SESSION_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_session_file()),
        }
    }
}

impl EnvironmentConfig {
    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

/// Ruta por defecto del archivo de sesión en el directorio de datos
/// de la plataforma
fn default_session_file() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("inventario")
        .join("usuario.json")
}
