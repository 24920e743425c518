//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del cliente y su
//! clasificación según la respuesta HTTP del backend.

use thiserror::Error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Error de red: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("{mensaje}")]
    Api { status: u16, mensaje: String },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    /// Mensaje tal como debería mostrarse en pantalla
    pub fn mensaje_usuario(&self) -> String {
        match self {
            AppError::Http(_) => "No se pudo contactar al servidor.".to_string(),
            AppError::Validation(e) => resumen_validacion(e),
            otro => otro.to_string(),
        }
    }

    /// La sesión guardada ya no sirve y hay que volver al login
    pub fn es_sesion_expirada(&self) -> bool {
        matches!(self, AppError::Unauthorized(_))
    }
}

/// Aplana los errores del derive de `validator` a un solo mensaje legible
fn resumen_validacion(errores: &validator::ValidationErrors) -> String {
    let mut partes: Vec<String> = Vec::new();
    for (campo, lista) in errores.field_errors() {
        for error in lista {
            let detalle = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| error.code.to_string());
            partes.push(format!("{}: {}", campo, detalle));
        }
    }
    partes.sort();
    partes.join("; ")
}

/// Result type alias para la aplicación
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_muestra_el_mensaje_del_backend() {
        let error = AppError::Api {
            status: 400,
            mensaje: "El código ya está registrado.".to_string(),
        };
        assert_eq!(error.mensaje_usuario(), "El código ya está registrado.");
    }

    #[test]
    fn unauthorized_cuenta_como_sesion_expirada() {
        assert!(AppError::Unauthorized("Cédula no encontrada".into()).es_sesion_expirada());
        assert!(!AppError::NotFound("Referencia no encontrada.".into()).es_sesion_expirada());
    }
}
