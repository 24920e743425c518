use serde::{Deserialize, Serialize};

// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub cedula: String,
    pub contrasena: String,
}

// Cuerpo JSON que devuelve el backend en los 401 del login
#[derive(Debug, Deserialize)]
pub struct MensajeResponse {
    pub mensaje: String,
}
