//! Modelo de Referencia
//!
//! Una referencia es un ítem de catálogo con código y nombre únicos y un
//! flag `activo` que hace de borrado lógico.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Referencia {
    pub id_referencia: i64,
    pub codigo: String,
    pub nombre: String,
    pub activo: bool,
}

impl Referencia {
    /// Estado legible para pantallas y logs
    pub fn estado(&self) -> &'static str {
        if self.activo {
            "Activa"
        } else {
            "Inactiva"
        }
    }
}
