//! Guardas de sesión y rol
//!
//! Equivalente a los chequeos que cada pantalla hacía al montarse:
//! sin sesión se vuelve al login, sin rol ADMIN se vuelve al home.

use tracing::warn;

use crate::models::Usuario;
use crate::session::SessionStore;
use crate::utils::errors::{AppError, AppResult};

/// Cargar la sesión guardada o fallar como "sesión expirada"
pub fn exigir_sesion(store: &SessionStore) -> AppResult<Usuario> {
    match store.cargar()? {
        Some(usuario) => Ok(usuario),
        None => {
            warn!("⚠️ No hay sesión guardada, se requiere login");
            Err(AppError::Unauthorized(
                "Sesión expirada. Debes iniciar sesión nuevamente.".to_string(),
            ))
        }
    }
}

/// Verificar que el usuario de la sesión sea ADMIN
pub fn exigir_admin(usuario: &Usuario) -> AppResult<()> {
    if !usuario.rol.es_admin() {
        warn!(
            "🚫 Acceso denegado para cédula {} con rol {}",
            usuario.cedula, usuario.rol
        );
        return Err(AppError::Forbidden(
            "Acceso denegado. Solo los administradores pueden realizar esta acción.".to_string(),
        ));
    }
    Ok(())
}

/// Sesión válida + rol ADMIN en un solo paso
pub fn exigir_admin_con_sesion(store: &SessionStore) -> AppResult<Usuario> {
    let usuario = exigir_sesion(store)?;
    exigir_admin(&usuario)?;
    Ok(usuario)
}
