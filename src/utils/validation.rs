//! Utilidades de validación
//!
//! Este módulo contiene las reglas de validación que la app aplica antes
//! de enviar cualquier request al backend. Son las mismas reglas que el
//! backend vuelve a verificar del lado del servidor.

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    /// Cédula: entre 6 y 10 dígitos numéricos
    pub static ref REGEX_CEDULA: Regex = Regex::new(r"^\d{6,10}$").unwrap();

    /// Correo electrónico
    pub static ref REGEX_CORREO: Regex = Regex::new(r"^[\w.-]+@[\w-]+\.[a-zA-Z]{2,}$").unwrap();

    /// Código de referencia: 'RF' seguido únicamente de números
    pub static ref REGEX_CODIGO_REFERENCIA: Regex = Regex::new(r"^RF\d+$").unwrap();
}

/// Validar que un string no esté vacío después de trim
pub fn validar_no_vacio(valor: &str) -> Result<(), ValidationError> {
    if valor.trim().is_empty() {
        let mut error = ValidationError::new("no_vacio");
        error.message = Some("no puede estar vacío".into());
        return Err(error);
    }
    Ok(())
}

/// Validar formato de cédula
pub fn validar_cedula(valor: &str) -> Result<(), ValidationError> {
    if !REGEX_CEDULA.is_match(valor.trim()) {
        let mut error = ValidationError::new("cedula");
        error.message = Some("La cédula debe contener entre 6 y 10 dígitos numéricos.".into());
        return Err(error);
    }
    Ok(())
}

/// Validar formato de correo electrónico
pub fn validar_correo(valor: &str) -> Result<(), ValidationError> {
    if !REGEX_CORREO.is_match(valor.trim()) {
        let mut error = ValidationError::new("correo");
        error.message = Some("El correo electrónico no es válido.".into());
        return Err(error);
    }
    Ok(())
}

/// Validar longitud mínima de contraseña
pub fn validar_contrasena(valor: &str) -> Result<(), ValidationError> {
    if valor.len() < 6 {
        let mut error = ValidationError::new("contrasena");
        error.message = Some("La contraseña debe tener al menos 6 caracteres.".into());
        return Err(error);
    }
    Ok(())
}

/// Validar que el rol sea uno de los permitidos
pub fn validar_rol(valor: &str) -> Result<(), ValidationError> {
    let rol = valor.trim().to_uppercase();
    if rol != "ADMIN" && rol != "TECNICO" {
        let mut error = ValidationError::new("rol");
        error.message = Some("El rol debe ser ADMIN o TECNICO.".into());
        return Err(error);
    }
    Ok(())
}

/// Validar código de referencia ya normalizado
pub fn validar_codigo_referencia(valor: &str) -> Result<(), ValidationError> {
    if !REGEX_CODIGO_REFERENCIA.is_match(valor) {
        let mut error = ValidationError::new("codigo");
        error.message = Some(
            "El código debe iniciar con 'RF' seguido únicamente de números. \
             Ejemplos válidos: RF1, RF05, RF100."
                .into(),
        );
        return Err(error);
    }
    Ok(())
}

/// Normalizar un código de referencia antes de validar o enviar
pub fn normalizar_codigo(valor: &str) -> String {
    valor.trim().to_uppercase()
}
