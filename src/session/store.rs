//! Almacenamiento persistente de la sesión
//!
//! Este módulo guarda el usuario logueado en disco bajo una única clave,
//! igual que la app móvil guardaba el objeto `usuario` en AsyncStorage.
//! La sesión sobrevive reinicios del proceso y no tiene expiración.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::models::Usuario;
use crate::utils::errors::AppResult;

/// Contenido del archivo de sesión
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SesionGuardada {
    usuario: Usuario,
    guardado_en: DateTime<Utc>,
}

/// Store de sesión respaldado por un archivo JSON
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persistir el usuario logueado
    pub fn guardar(&self, usuario: &Usuario) -> AppResult<()> {
        if let Some(padre) = self.path.parent() {
            fs::create_dir_all(padre)?;
        }

        let sesion = SesionGuardada {
            usuario: usuario.clone(),
            guardado_en: Utc::now(),
        };

        let contenido = serde_json::to_string_pretty(&sesion)?;
        fs::write(&self.path, contenido)?;

        debug!("💾 Sesión guardada para cédula {}", usuario.cedula);
        Ok(())
    }

    /// Cargar la sesión guardada, si existe
    ///
    /// Un archivo corrupto o ilegible se trata como "no hay sesión": la app
    /// vuelve al login en lugar de quedarse colgada en un estado inválido.
    pub fn cargar(&self) -> AppResult<Option<Usuario>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contenido = match fs::read_to_string(&self.path) {
            Ok(contenido) => contenido,
            Err(e) => {
                warn!("⚠️ No se pudo leer el archivo de sesión: {}", e);
                return Ok(None);
            }
        };

        match serde_json::from_str::<SesionGuardada>(&contenido) {
            Ok(sesion) => {
                debug!(
                    "✅ Sesión cargada (guardada en {})",
                    sesion.guardado_en.to_rfc3339()
                );
                Ok(Some(sesion.usuario))
            }
            Err(e) => {
                warn!("⚠️ Archivo de sesión corrupto, se ignora: {}", e);
                Ok(None)
            }
        }
    }

    /// Borrar la sesión (cerrar sesión). Idempotente.
    pub fn limpiar(&self) -> AppResult<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
            debug!("🗑️ Sesión eliminada");
        }
        Ok(())
    }

    pub fn existe(&self) -> bool {
        self.path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Rol;
    use tempfile::tempdir;

    fn usuario_de_prueba() -> Usuario {
        Usuario {
            id_usuario: 1,
            nombre: "Laura Pérez".to_string(),
            cedula: "1023456789".to_string(),
            correo: "laura@inventario.com".to_string(),
            contrasena: None,
            rol: Rol::Admin,
        }
    }

    #[test]
    fn guardar_y_cargar_devuelve_el_mismo_usuario() {
        let dir = tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("usuario.json"));

        store.guardar(&usuario_de_prueba()).unwrap();

        let cargado = store.cargar().unwrap().unwrap();
        assert_eq!(cargado.id_usuario, 1);
        assert_eq!(cargado.cedula, "1023456789");
        assert_eq!(cargado.rol, Rol::Admin);
    }

    #[test]
    fn cargar_sin_archivo_devuelve_none() {
        let dir = tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("usuario.json"));
        assert!(store.cargar().unwrap().is_none());
        assert!(!store.existe());
    }

    #[test]
    fn archivo_corrupto_se_trata_como_sin_sesion() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("usuario.json");
        std::fs::write(&path, "esto no es json {{{").unwrap();

        let store = SessionStore::new(&path);
        assert!(store.cargar().unwrap().is_none());
    }

    #[test]
    fn limpiar_es_idempotente() {
        let dir = tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("usuario.json"));

        store.guardar(&usuario_de_prueba()).unwrap();
        store.limpiar().unwrap();
        assert!(!store.existe());

        // Segunda vez sin archivo presente
        store.limpiar().unwrap();
    }

    #[test]
    fn guardar_crea_directorios_intermedios() {
        let dir = tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("anidado").join("usuario.json"));
        store.guardar(&usuario_de_prueba()).unwrap();
        assert!(store.existe());
    }
}
