//! Cliente HTTP del backend de inventario
//!
//! Este módulo contiene el wrapper fino sobre reqwest que expone un método
//! por endpoint REST del backend. No guarda estado de sesión: de eso se
//! encargan el store y los controllers.

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use crate::config::EnvironmentConfig;
use crate::dto::{
    ActualizarUsuarioRequest, LoginRequest, MensajeResponse, ReferenciaPayload,
    RegistrarUsuarioRequest,
};
use crate::models::{Referencia, Usuario};
use crate::utils::errors::{AppError, AppResult};

/// Cliente HTTP para el backend de inventario
#[derive(Debug, Clone)]
pub struct InventarioApiClient {
    client: Client,
    base_url: String,
}

impl InventarioApiClient {
    pub fn new(config: &EnvironmentConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // ----------------------------------------------------
    // Auth
    // ----------------------------------------------------

    /// POST /auth/login
    ///
    /// El backend responde 401 con `{"mensaje": ...}` cuando la cédula no
    /// existe o la contraseña no coincide.
    pub async fn login(&self, request: &LoginRequest) -> AppResult<Usuario> {
        debug!("📤 POST /auth/login para cédula {}", request.cedula);
        let response = self
            .client
            .post(self.url("/auth/login"))
            .json(request)
            .send()
            .await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            let mensaje = response
                .json::<MensajeResponse>()
                .await
                .map(|cuerpo| cuerpo.mensaje)
                .unwrap_or_else(|_| "Credenciales inválidas.".to_string());
            return Err(AppError::Unauthorized(mensaje));
        }

        Self::json_ok(response).await
    }

    // ----------------------------------------------------
    // Usuarios
    // ----------------------------------------------------

    /// GET /api/usuarios
    pub async fn obtener_usuarios(&self) -> AppResult<Vec<Usuario>> {
        let response = self.client.get(self.url("/api/usuarios")).send().await?;
        Self::json_ok(response).await
    }

    /// GET /api/usuarios/{id}
    pub async fn obtener_usuario_por_id(&self, id: i64) -> AppResult<Usuario> {
        let response = self
            .client
            .get(self.url(&format!("/api/usuarios/{}", id)))
            .send()
            .await?;
        Self::json_ok(response).await
    }

    /// POST /api/usuarios/registrar
    pub async fn registrar_usuario(&self, request: &RegistrarUsuarioRequest) -> AppResult<Usuario> {
        debug!("📤 Registrando usuario con cédula {}", request.cedula);
        let response = self
            .client
            .post(self.url("/api/usuarios/registrar"))
            .json(request)
            .send()
            .await?;
        Self::json_ok(response).await
    }

    /// PUT /api/usuarios/{id}
    pub async fn actualizar_usuario(
        &self,
        id: i64,
        request: &ActualizarUsuarioRequest,
    ) -> AppResult<Usuario> {
        let response = self
            .client
            .put(self.url(&format!("/api/usuarios/{}", id)))
            .json(request)
            .send()
            .await?;
        Self::json_ok(response).await
    }

    // ----------------------------------------------------
    // Referencias (R01-R09 del backend)
    // ----------------------------------------------------

    /// POST /api/referencias/registrar
    pub async fn registrar_referencia(&self, payload: &ReferenciaPayload) -> AppResult<Referencia> {
        debug!("📤 Registrando referencia {}", payload.codigo);
        let response = self
            .client
            .post(self.url("/api/referencias/registrar"))
            .json(payload)
            .send()
            .await?;
        Self::json_ok(response).await
    }

    /// GET /api/referencias (activas + inactivas)
    pub async fn obtener_referencias(&self) -> AppResult<Vec<Referencia>> {
        let response = self.client.get(self.url("/api/referencias")).send().await?;
        Self::json_ok(response).await
    }

    /// GET /api/referencias/activas
    pub async fn obtener_referencias_activas(&self) -> AppResult<Vec<Referencia>> {
        let response = self
            .client
            .get(self.url("/api/referencias/activas"))
            .send()
            .await?;
        Self::json_ok(response).await
    }

    /// GET /api/referencias/inactivas
    pub async fn obtener_referencias_inactivas(&self) -> AppResult<Vec<Referencia>> {
        let response = self
            .client
            .get(self.url("/api/referencias/inactivas"))
            .send()
            .await?;
        Self::json_ok(response).await
    }

    /// GET /api/referencias/estado/{activo}
    pub async fn obtener_referencias_por_estado(&self, activo: bool) -> AppResult<Vec<Referencia>> {
        let response = self
            .client
            .get(self.url(&format!("/api/referencias/estado/{}", activo)))
            .send()
            .await?;
        Self::json_ok(response).await
    }

    /// GET /api/referencias/{id}
    pub async fn obtener_referencia_por_id(&self, id: i64) -> AppResult<Referencia> {
        let response = self
            .client
            .get(self.url(&format!("/api/referencias/{}", id)))
            .send()
            .await?;
        Self::json_ok(response).await
    }

    /// GET /api/referencias/codigo/{codigo}
    pub async fn obtener_referencia_por_codigo(&self, codigo: &str) -> AppResult<Referencia> {
        let response = self
            .client
            .get(self.url(&format!("/api/referencias/codigo/{}", codigo)))
            .send()
            .await?;
        Self::json_ok(response).await
    }

    /// PUT /api/referencias/{id}
    pub async fn actualizar_referencia(
        &self,
        id: i64,
        payload: &ReferenciaPayload,
    ) -> AppResult<Referencia> {
        debug!("📤 Actualizando referencia {} -> {:?}", id, payload);
        let response = self
            .client
            .put(self.url(&format!("/api/referencias/{}", id)))
            .json(payload)
            .send()
            .await?;
        Self::json_ok(response).await
    }

    /// DELETE /api/referencias/eliminar/{id} (borrado lógico)
    ///
    /// Devuelve el mensaje de confirmación del backend.
    pub async fn eliminar_referencia(&self, id: i64) -> AppResult<String> {
        let response = self
            .client
            .delete(self.url(&format!("/api/referencias/eliminar/{}", id)))
            .send()
            .await?;

        if response.status().is_success() {
            Ok(response.text().await?)
        } else {
            Err(Self::error_de_respuesta(response).await)
        }
    }

    // ----------------------------------------------------
    // Helpers
    // ----------------------------------------------------

    /// Deserializa el cuerpo en caso de éxito o clasifica el error
    async fn json_ok<T: DeserializeOwned>(response: Response) -> AppResult<T> {
        if response.status().is_success() {
            Ok(response.json::<T>().await?)
        } else {
            Err(Self::error_de_respuesta(response).await)
        }
    }

    /// Los errores de negocio del backend llegan como texto plano
    /// (400 del GlobalExceptionHandler, 404 de los lookups)
    async fn error_de_respuesta(response: Response) -> AppError {
        let status = response.status();
        let cuerpo = response.text().await.unwrap_or_default();

        match status {
            StatusCode::NOT_FOUND => AppError::NotFound(if cuerpo.is_empty() {
                "Recurso no encontrado.".to_string()
            } else {
                cuerpo
            }),
            StatusCode::UNAUTHORIZED => AppError::Unauthorized(if cuerpo.is_empty() {
                "Sesión inválida.".to_string()
            } else {
                cuerpo
            }),
            otro => AppError::Api {
                status: otro.as_u16(),
                mensaje: if cuerpo.is_empty() {
                    format!("El servidor respondió {}", otro)
                } else {
                    cuerpo
                },
            },
        }
    }
}
