//! Controller de referencias
//!
//! Implementa las pantallas de lista, registro y edición de referencias:
//! todas exclusivas del rol ADMIN. Mantiene la cache local sincronizada
//! con el backend tras cada operación.

use tracing::info;
use validator::Validate;

use crate::cache::{FiltroEstado, ReferenciaCache};
use crate::client::InventarioApiClient;
use crate::dto::ReferenciaPayload;
use crate::models::Referencia;
use crate::session::gate::exigir_admin_con_sesion;
use crate::session::SessionStore;
use crate::utils::errors::AppResult;

pub struct ReferenciaController {
    client: InventarioApiClient,
    store: SessionStore,
    cache: ReferenciaCache,
}

impl ReferenciaController {
    pub fn new(client: InventarioApiClient, store: SessionStore) -> Self {
        Self {
            client,
            store,
            cache: ReferenciaCache::new(),
        }
    }

    pub fn filtro(&self) -> FiltroEstado {
        self.cache.filtro()
    }

    /// Lista cacheada tal como debe mostrarse
    pub fn lista(&self) -> &[Referencia] {
        self.cache.items()
    }

    /// Búsqueda local por código sobre la lista cacheada
    pub fn buscar(&self, texto: &str) -> Vec<&Referencia> {
        self.cache.buscar_por_codigo(texto)
    }

    /// Recargar la lista desde el backend según el filtro actual
    pub async fn cargar_lista(&mut self) -> AppResult<&[Referencia]> {
        exigir_admin_con_sesion(&self.store)?;

        let lista = match self.cache.filtro() {
            FiltroEstado::Activas => self.client.obtener_referencias_activas().await?,
            FiltroEstado::Inactivas => self.client.obtener_referencias_inactivas().await?,
        };

        info!(
            "📋 {} referencias {} cargadas",
            lista.len(),
            self.cache.filtro().etiqueta()
        );
        self.cache.cargar(lista);
        Ok(self.cache.items())
    }

    /// Alternar entre activas e inactivas y recargar
    pub async fn alternar_filtro(&mut self) -> AppResult<&[Referencia]> {
        self.cache.alternar_filtro();
        self.cargar_lista().await
    }

    /// Detalle de una referencia (para la pantalla de edición)
    pub async fn obtener(&self, id: i64) -> AppResult<Referencia> {
        exigir_admin_con_sesion(&self.store)?;
        self.client.obtener_referencia_por_id(id).await
    }

    /// Registrar una referencia nueva (siempre nace activa)
    pub async fn registrar(&mut self, codigo: &str, nombre: &str) -> AppResult<Referencia> {
        exigir_admin_con_sesion(&self.store)?;

        let payload = ReferenciaPayload::nueva(codigo, nombre);
        payload.validate()?;

        let creada = self.client.registrar_referencia(&payload).await?;
        info!("✅ Referencia {} creada", creada.codigo);

        self.cache.aplicar_creada(creada.clone());
        Ok(creada)
    }

    /// Guardar cambios de la pantalla de edición
    pub async fn actualizar(
        &mut self,
        id: i64,
        codigo: &str,
        nombre: &str,
        activo: bool,
    ) -> AppResult<Referencia> {
        exigir_admin_con_sesion(&self.store)?;

        let payload = ReferenciaPayload::edicion(codigo, nombre, activo);
        payload.validate()?;

        let actualizada = self.client.actualizar_referencia(id, &payload).await?;
        info!("✅ Referencia {} actualizada", actualizada.codigo);

        self.cache.aplicar_actualizada(actualizada.clone());
        Ok(actualizada)
    }

    /// Botón Activar/Desactivar de la lista
    ///
    /// Igual que la pantalla original: se relee la referencia por id para
    /// no pisar datos ajenos y se envía el objeto completo con el flag
    /// invertido.
    pub async fn alternar_estado(&mut self, id: i64) -> AppResult<Referencia> {
        exigir_admin_con_sesion(&self.store)?;

        let actual = self.client.obtener_referencia_por_id(id).await?;
        let payload = ReferenciaPayload::alternando_estado(&actual);

        let actualizada = self.client.actualizar_referencia(id, &payload).await?;
        info!(
            "🔄 Referencia {} ahora está {}",
            actualizada.codigo,
            actualizada.estado()
        );

        self.cache.aplicar_actualizada(actualizada.clone());
        Ok(actualizada)
    }

    /// Borrado lógico vía DELETE (falla si ya estaba inactiva)
    pub async fn eliminar(&mut self, id: i64) -> AppResult<String> {
        exigir_admin_con_sesion(&self.store)?;

        let mensaje = self.client.eliminar_referencia(id).await?;

        // El backend dejó la referencia inactiva; reflejarlo en la cache
        let actualizada = self.client.obtener_referencia_por_id(id).await?;
        self.cache.aplicar_actualizada(actualizada);

        info!("🗑️ Referencia {} eliminada lógicamente", id);
        Ok(mensaje)
    }
}
