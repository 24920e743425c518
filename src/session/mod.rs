//! Sesión persistida
//!
//! Este módulo contiene el store de sesión en disco y las guardas de
//! sesión/rol que usan los controllers.

pub mod gate;
pub mod store;

pub use store::SessionStore;
