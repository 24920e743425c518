//! DTOs de referencia
//!
//! Payload que viaja en el registro y la actualización de referencias.
//! El backend espera siempre el objeto completo (codigo, nombre, activo).

use serde::Serialize;
use validator::Validate;

use crate::models::Referencia;
use crate::utils::validation::normalizar_codigo;

#[derive(Debug, Clone, Serialize, Validate)]
pub struct ReferenciaPayload {
    #[validate(custom = "crate::utils::validation::validar_codigo_referencia")]
    pub codigo: String,

    #[validate(custom = "crate::utils::validation::validar_no_vacio")]
    pub nombre: String,

    pub activo: bool,
}

impl ReferenciaPayload {
    /// Payload de registro: una referencia nueva nace siempre activa
    pub fn nueva(codigo: &str, nombre: &str) -> Self {
        Self {
            codigo: normalizar_codigo(codigo),
            nombre: nombre.trim().to_string(),
            activo: true,
        }
    }

    /// Payload de edición con los tres campos normalizados
    pub fn edicion(codigo: &str, nombre: &str, activo: bool) -> Self {
        Self {
            codigo: normalizar_codigo(codigo),
            nombre: nombre.trim().to_string(),
            activo,
        }
    }

    /// Payload completo de una referencia existente con el flag invertido
    /// (botón Activar/Desactivar de la lista)
    pub fn alternando_estado(referencia: &Referencia) -> Self {
        Self {
            codigo: referencia.codigo.clone(),
            nombre: referencia.nombre.clone(),
            activo: !referencia.activo,
        }
    }
}
