//! Controller de autenticación
//!
//! Maneja la pantalla de login: valida credenciales mínimas, llama al
//! backend y persiste el usuario devuelto. El logout borra la sesión.

use tracing::info;

use crate::client::InventarioApiClient;
use crate::dto::LoginRequest;
use crate::models::Usuario;
use crate::session::SessionStore;
use crate::utils::errors::{AppError, AppResult};

pub struct AuthController {
    client: InventarioApiClient,
    store: SessionStore,
}

impl AuthController {
    pub fn new(client: InventarioApiClient, store: SessionStore) -> Self {
        Self { client, store }
    }

    /// Iniciar sesión y persistir el usuario devuelto por el backend
    pub async fn login(&self, cedula: &str, contrasena: &str) -> AppResult<Usuario> {
        let cedula = cedula.trim();
        let contrasena = contrasena.trim();

        if cedula.is_empty() || contrasena.is_empty() {
            return Err(AppError::BadRequest(
                "Por favor ingresa cédula y contraseña.".to_string(),
            ));
        }

        let request = LoginRequest {
            cedula: cedula.to_string(),
            contrasena: contrasena.to_string(),
        };

        let usuario = self.client.login(&request).await?;
        self.store.guardar(&usuario)?;

        info!("✅ Sesión iniciada: {} ({})", usuario.nombre, usuario.rol);
        Ok(usuario)
    }

    /// Cerrar sesión. Idempotente.
    pub fn logout(&self) -> AppResult<()> {
        self.store.limpiar()?;
        info!("👋 Sesión cerrada");
        Ok(())
    }

    /// Usuario guardado, si hay sesión activa
    pub fn sesion_actual(&self) -> AppResult<Option<Usuario>> {
        self.store.cargar()
    }
}
