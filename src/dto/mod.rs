//! DTOs de la API
//!
//! Requests y responses auxiliares que viajan entre la app y el backend.

pub mod auth_dto;
pub mod referencia_dto;
pub mod usuario_dto;

pub use auth_dto::{LoginRequest, MensajeResponse};
pub use referencia_dto::ReferenciaPayload;
pub use usuario_dto::{ActualizarUsuarioRequest, RegistrarUsuarioRequest};
