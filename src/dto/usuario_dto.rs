//! DTOs de usuario
//!
//! Requests que la app envía a los endpoints de administración de usuarios.
//! Las reglas de validación son las mismas que aplica el backend.

use serde::Serialize;
use validator::Validate;

/// Request para registrar un nuevo usuario (solo ADMIN)
#[derive(Debug, Clone, Serialize, Validate)]
pub struct RegistrarUsuarioRequest {
    #[validate(custom = "crate::utils::validation::validar_no_vacio")]
    pub nombre: String,

    #[validate(custom = "crate::utils::validation::validar_cedula")]
    pub cedula: String,

    #[validate(custom = "crate::utils::validation::validar_correo")]
    pub correo: String,

    #[validate(custom = "crate::utils::validation::validar_contrasena")]
    pub contrasena: String,

    #[validate(custom = "crate::utils::validation::validar_rol")]
    pub rol: String,
}

/// Request para actualizar un usuario existente
///
/// La cédula no es editable y por eso no viaja en el request. La contraseña
/// solo se envía cuando el admin escribió una nueva.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct ActualizarUsuarioRequest {
    #[validate(custom = "crate::utils::validation::validar_no_vacio")]
    pub nombre: String,

    #[validate(custom = "crate::utils::validation::validar_correo")]
    pub correo: String,

    #[validate(custom = "crate::utils::validation::validar_rol")]
    pub rol: String,

    #[validate(custom = "crate::utils::validation::validar_contrasena")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contrasena: Option<String>,
}

impl ActualizarUsuarioRequest {
    /// Construye el request normalizando el rol y descartando contraseñas
    /// en blanco (campo opcional en la pantalla de edición)
    pub fn nuevo(nombre: &str, correo: &str, rol: &str, contrasena: &str) -> Self {
        let contrasena = contrasena.trim();
        Self {
            nombre: nombre.trim().to_string(),
            correo: correo.trim().to_string(),
            rol: rol.trim().to_uppercase(),
            contrasena: if contrasena.is_empty() {
                None
            } else {
                Some(contrasena.to_string())
            },
        }
    }
}
