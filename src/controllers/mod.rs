//! Controllers de pantalla
//!
//! Cada controller replica la lógica de una familia de pantallas de la app:
//! verifica la sesión y el rol, llama al cliente REST y mantiene el estado
//! local consistente.

pub mod auth_controller;
pub mod referencia_controller;
pub mod usuario_controller;

pub use auth_controller::AuthController;
pub use referencia_controller::ReferenciaController;
pub use usuario_controller::UsuarioController;
