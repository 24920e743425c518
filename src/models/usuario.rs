//! Modelo de Usuario
//!
//! Este módulo contiene el struct Usuario tal como lo serializa el backend
//! de inventario, junto con el enum de roles.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rol de un usuario dentro de la aplicación
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rol {
    #[serde(rename = "ADMIN")]
    Admin,
    #[serde(rename = "TECNICO")]
    Tecnico,
}

impl Rol {
    pub fn es_admin(&self) -> bool {
        matches!(self, Rol::Admin)
    }
}

impl fmt::Display for Rol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rol::Admin => write!(f, "ADMIN"),
            Rol::Tecnico => write!(f, "TECNICO"),
        }
    }
}

impl FromStr for Rol {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ADMIN" => Ok(Rol::Admin),
            "TECNICO" => Ok(Rol::Tecnico),
            otro => Err(format!("Rol desconocido: {}", otro)),
        }
    }
}

/// Usuario - mapea exactamente el JSON camelCase del backend
///
/// `contrasena` llega en null en las respuestas (el backend la borra antes
/// de responder al login).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Usuario {
    pub id_usuario: i64,
    pub nombre: String,
    pub cedula: String,
    pub correo: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contrasena: Option<String>,
    pub rol: Rol,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializa_usuario_camel_case() {
        let json = r#"{
            "idUsuario": 7,
            "nombre": "Laura Pérez",
            "cedula": "1023456789",
            "correo": "laura@inventario.com",
            "contrasena": null,
            "rol": "ADMIN"
        }"#;

        let usuario: Usuario = serde_json::from_str(json).unwrap();
        assert_eq!(usuario.id_usuario, 7);
        assert_eq!(usuario.cedula, "1023456789");
        assert!(usuario.contrasena.is_none());
        assert!(usuario.rol.es_admin());
    }

    #[test]
    fn rol_desde_string_ignora_mayusculas() {
        assert_eq!("tecnico".parse::<Rol>().unwrap(), Rol::Tecnico);
        assert_eq!(" admin ".parse::<Rol>().unwrap(), Rol::Admin);
        assert!("gerente".parse::<Rol>().is_err());
    }
}
