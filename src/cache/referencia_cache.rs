//! Cache local de la lista de referencias
//!
//! Este módulo mantiene en memoria el subconjunto de referencias que la
//! pantalla de lista está mostrando (activas o inactivas), ordenado por
//! nombre. Tras cada create/update/toggle la lista se corrige localmente
//! para que nunca muestre una copia desactualizada del backend.

use crate::models::Referencia;

/// Filtro de la lista: el botón "Mostrando ACTIVAS / INACTIVAS"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FiltroEstado {
    Activas,
    Inactivas,
}

impl FiltroEstado {
    pub fn alternado(&self) -> Self {
        match self {
            FiltroEstado::Activas => FiltroEstado::Inactivas,
            FiltroEstado::Inactivas => FiltroEstado::Activas,
        }
    }

    pub fn activo(&self) -> bool {
        matches!(self, FiltroEstado::Activas)
    }

    pub fn etiqueta(&self) -> &'static str {
        match self {
            FiltroEstado::Activas => "ACTIVAS",
            FiltroEstado::Inactivas => "INACTIVAS",
        }
    }
}

/// Lista de referencias en memoria, espejo del filtro seleccionado
#[derive(Debug, Clone)]
pub struct ReferenciaCache {
    items: Vec<Referencia>,
    filtro: FiltroEstado,
}

impl Default for ReferenciaCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ReferenciaCache {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            filtro: FiltroEstado::Activas,
        }
    }

    pub fn filtro(&self) -> FiltroEstado {
        self.filtro
    }

    pub fn items(&self) -> &[Referencia] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Cambiar el filtro descarta la lista actual: el caller debe recargar
    /// desde el backend antes de volver a mostrarla.
    pub fn alternar_filtro(&mut self) -> FiltroEstado {
        self.filtro = self.filtro.alternado();
        self.items.clear();
        self.filtro
    }

    /// ¿Esta referencia pertenece a la lista filtrada actual?
    pub fn visible(&self, referencia: &Referencia) -> bool {
        referencia.activo == self.filtro.activo()
    }

    /// Reemplazar el contenido con la respuesta del backend
    ///
    /// Se descartan ítems que no correspondan al filtro y se ordena por
    /// nombre sin distinguir mayúsculas (como el localeCompare original).
    pub fn cargar(&mut self, lista: Vec<Referencia>) {
        self.items = lista;
        let filtro_activo = self.filtro.activo();
        self.items.retain(|r| r.activo == filtro_activo);
        self.items.sort_by_key(|r| r.nombre.to_lowercase());
    }

    /// Sincronizar la lista tras un registro exitoso
    ///
    /// Una referencia nueva nace activa, así que solo entra a la lista
    /// cuando se están mostrando las activas.
    pub fn aplicar_creada(&mut self, referencia: Referencia) {
        if self.visible(&referencia) {
            self.insertar_ordenada(referencia);
        }
    }

    /// Sincronizar la lista tras una actualización o cambio de estado
    ///
    /// Si el flag `activo` sacó la referencia del filtro actual, desaparece
    /// de la lista; si sigue visible se reemplaza en su posición ordenada.
    pub fn aplicar_actualizada(&mut self, referencia: Referencia) {
        self.items.retain(|r| r.id_referencia != referencia.id_referencia);
        if self.visible(&referencia) {
            self.insertar_ordenada(referencia);
        }
    }

    /// Búsqueda local por código (la caja de búsqueda de la lista);
    /// no toca la red.
    pub fn buscar_por_codigo(&self, texto: &str) -> Vec<&Referencia> {
        let buscado = texto.trim().to_lowercase();
        if buscado.is_empty() {
            return self.items.iter().collect();
        }
        self.items
            .iter()
            .filter(|r| r.codigo.to_lowercase().contains(&buscado))
            .collect()
    }

    pub fn obtener_por_id(&self, id: i64) -> Option<&Referencia> {
        self.items.iter().find(|r| r.id_referencia == id)
    }

    fn insertar_ordenada(&mut self, referencia: Referencia) {
        let clave = referencia.nombre.to_lowercase();
        let posicion = self
            .items
            .partition_point(|r| r.nombre.to_lowercase() < clave);
        self.items.insert(posicion, referencia);
    }
}
