//! Controller de administración de usuarios
//!
//! Todas las operaciones sobre otros usuarios exigen sesión con rol ADMIN
//! (las pantallas de lista/registro/edición eran exclusivas del admin).
//! La edición del propio perfil solo exige sesión.

use tracing::info;
use validator::Validate;

use crate::client::InventarioApiClient;
use crate::dto::{ActualizarUsuarioRequest, RegistrarUsuarioRequest};
use crate::models::Usuario;
use crate::session::gate::{exigir_admin_con_sesion, exigir_sesion};
use crate::session::SessionStore;
use crate::utils::errors::AppResult;

pub struct UsuarioController {
    client: InventarioApiClient,
    store: SessionStore,
}

impl UsuarioController {
    pub fn new(client: InventarioApiClient, store: SessionStore) -> Self {
        Self { client, store }
    }

    /// Lista de usuarios (solo ADMIN)
    pub async fn listar(&self) -> AppResult<Vec<Usuario>> {
        exigir_admin_con_sesion(&self.store)?;
        self.client.obtener_usuarios().await
    }

    /// Detalle de un usuario (solo ADMIN)
    pub async fn obtener(&self, id: i64) -> AppResult<Usuario> {
        exigir_admin_con_sesion(&self.store)?;
        self.client.obtener_usuario_por_id(id).await
    }

    /// Registrar un usuario nuevo (solo ADMIN)
    pub async fn registrar(&self, request: RegistrarUsuarioRequest) -> AppResult<Usuario> {
        exigir_admin_con_sesion(&self.store)?;

        let request = RegistrarUsuarioRequest {
            nombre: request.nombre.trim().to_string(),
            cedula: request.cedula.trim().to_string(),
            correo: request.correo.trim().to_string(),
            rol: request.rol.trim().to_uppercase(),
            ..request
        };
        request.validate()?;

        let creado = self.client.registrar_usuario(&request).await?;
        info!("✅ Usuario registrado: {} ({})", creado.nombre, creado.rol);
        Ok(creado)
    }

    /// Actualizar un usuario (solo ADMIN)
    ///
    /// La cédula nunca viaja en el request. Si el admin se editó a sí mismo,
    /// la sesión guardada se refresca con los datos nuevos.
    pub async fn actualizar(
        &self,
        id: i64,
        request: ActualizarUsuarioRequest,
    ) -> AppResult<Usuario> {
        let sesion = exigir_admin_con_sesion(&self.store)?;

        request.validate()?;
        let actualizado = self.client.actualizar_usuario(id, &request).await?;

        if actualizado.id_usuario == sesion.id_usuario {
            self.store.guardar(&actualizado)?;
        }

        info!("✅ Usuario {} actualizado", actualizado.id_usuario);
        Ok(actualizado)
    }

    /// Editar el propio perfil (cualquier usuario con sesión)
    ///
    /// Siempre opera sobre el id de la sesión y la refresca al terminar.
    pub async fn actualizar_perfil(
        &self,
        request: ActualizarUsuarioRequest,
    ) -> AppResult<Usuario> {
        let sesion = exigir_sesion(&self.store)?;

        request.validate()?;
        let actualizado = self
            .client
            .actualizar_usuario(sesion.id_usuario, &request)
            .await?;
        self.store.guardar(&actualizado)?;

        info!("✅ Perfil actualizado para cédula {}", actualizado.cedula);
        Ok(actualizado)
    }
}
