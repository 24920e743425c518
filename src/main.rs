//! Pantallas de terminal del cliente de inventario
//!
//! Menús interactivos equivalentes a las pantallas de la app: login, home
//! con opciones según el rol, administración de usuarios y referencias.

use anyhow::Result;
use colored::*;
use dotenvy::dotenv;
use std::io::{self, Write};
use tracing::error;

use inventario_client::client::InventarioApiClient;
use inventario_client::config::EnvironmentConfig;
use inventario_client::controllers::{AuthController, ReferenciaController, UsuarioController};
use inventario_client::dto::{ActualizarUsuarioRequest, RegistrarUsuarioRequest};
use inventario_client::models::Usuario;
use inventario_client::session::SessionStore;
use inventario_client::utils::errors::AppError;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let config = EnvironmentConfig::default();

    tracing_subscriber::fmt()
        .with_max_level(if config.is_development() {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    println!("{}", "📦 Inventario - Cliente de catálogo".bright_blue().bold());
    println!("{}", "=====================================".bright_blue());
    println!("Backend: {}", config.api_base_url);
    println!();

    let store = SessionStore::new(config.session_file.clone());
    let client = InventarioApiClient::new(&config)?;

    let auth = AuthController::new(client.clone(), store.clone());
    let usuarios = UsuarioController::new(client.clone(), store.clone());
    let mut referencias = ReferenciaController::new(client, store);

    loop {
        // Una sesión persistida se salta la pantalla de login
        let usuario = match auth.sesion_actual()? {
            Some(usuario) => usuario,
            None => match pantalla_login(&auth).await? {
                Some(usuario) => usuario,
                None => break,
            },
        };

        if !pantalla_home(&usuario, &auth, &usuarios, &mut referencias).await? {
            break;
        }
    }

    println!("{}", "👋 ¡Hasta luego!".bright_green());
    Ok(())
}

/// Pantalla de login. Devuelve None si el usuario decide salir.
async fn pantalla_login(auth: &AuthController) -> Result<Option<Usuario>> {
    loop {
        println!();
        println!("{}", "🔐 INICIAR SESIÓN".bright_cyan().bold());
        println!("{}", "==================".bright_cyan());
        println!("(deja la cédula vacía para salir)");

        let cedula = leer_linea("Cédula: ")?;
        if cedula.is_empty() {
            return Ok(None);
        }
        let contrasena = leer_linea("Contraseña: ")?;

        match auth.login(&cedula, &contrasena).await {
            Ok(usuario) => {
                println!(
                    "{}",
                    format!("✅ Bienvenido, {} ({})", usuario.nombre, usuario.rol).bright_green()
                );
                return Ok(Some(usuario));
            }
            Err(e) => mostrar_error(&e),
        }
    }
}

/// Pantalla home. Devuelve false cuando el usuario quiere salir del programa.
async fn pantalla_home(
    usuario: &Usuario,
    auth: &AuthController,
    usuarios: &UsuarioController,
    referencias: &mut ReferenciaController,
) -> Result<bool> {
    loop {
        println!();
        println!("{}", format!("👋 Bienvenido, {}", usuario.nombre).bright_green().bold());
        println!("   Cédula: {}", usuario.cedula);
        println!("   Correo: {}", usuario.correo);
        println!("   Rol:    {}", usuario.rol);
        println!();
        println!("{}", "📋 MENÚ PRINCIPAL".bright_green().bold());
        println!("{}", "==================".bright_green());

        if usuario.rol.es_admin() {
            println!("1. 👥 Lista de usuarios");
            println!("2. ➕ Registrar usuario");
            println!("3. ✏️ Editar usuario");
            println!("4. 📦 Referencias");
            println!("5. 🙍 Editar mi perfil");
            println!("6. 🚪 Cerrar sesión");
            println!("7. ❌ Salir");
        } else {
            println!("{}", "No tienes permisos de administración.".yellow());
            println!("1. 🙍 Editar mi perfil");
            println!("2. 🚪 Cerrar sesión");
            println!("3. ❌ Salir");
        }

        let opcion = leer_linea("Selecciona una opción: ")?;
        let resultado = if usuario.rol.es_admin() {
            match opcion.as_str() {
                "1" => pantalla_lista_usuarios(usuarios).await,
                "2" => pantalla_registrar_usuario(usuarios).await,
                "3" => pantalla_editar_usuario(usuarios).await,
                "4" => pantalla_referencias(referencias).await,
                "5" => pantalla_editar_perfil(usuario, usuarios).await,
                "6" => {
                    auth.logout()?;
                    println!("{}", "✅ Has cerrado sesión correctamente.".bright_green());
                    return Ok(true);
                }
                "7" => return Ok(false),
                _ => {
                    println!("{}", "❌ Opción inválida. Intenta de nuevo.".bright_red());
                    continue;
                }
            }
        } else {
            match opcion.as_str() {
                "1" => pantalla_editar_perfil(usuario, usuarios).await,
                "2" => {
                    auth.logout()?;
                    println!("{}", "✅ Has cerrado sesión correctamente.".bright_green());
                    return Ok(true);
                }
                "3" => return Ok(false),
                _ => {
                    println!("{}", "❌ Opción inválida. Intenta de nuevo.".bright_red());
                    continue;
                }
            }
        };

        if let Err(e) = resultado {
            mostrar_error(&e);
            if e.es_sesion_expirada() {
                // Volver al login
                auth.logout()?;
                return Ok(true);
            }
        }
    }
}

async fn pantalla_lista_usuarios(usuarios: &UsuarioController) -> Result<(), AppError> {
    println!();
    println!("{}", "👥 LISTA DE USUARIOS".bright_cyan().bold());
    println!("{}", "=====================".bright_cyan());

    let lista = usuarios.listar().await?;
    if lista.is_empty() {
        println!("No hay usuarios registrados.");
        return Ok(());
    }

    for u in &lista {
        println!(
            "[{}] {} | cédula {} | {} | {}",
            u.id_usuario, u.nombre, u.cedula, u.correo, u.rol
        );
    }
    Ok(())
}

async fn pantalla_registrar_usuario(usuarios: &UsuarioController) -> Result<(), AppError> {
    println!();
    println!("{}", "➕ REGISTRAR USUARIO".bright_cyan().bold());
    println!("{}", "=====================".bright_cyan());

    let request = RegistrarUsuarioRequest {
        nombre: leer_linea("Nombre: ")?,
        cedula: leer_linea("Cédula (6 a 10 dígitos): ")?,
        correo: leer_linea("Correo: ")?,
        contrasena: leer_linea("Contraseña (mínimo 6 caracteres): ")?,
        rol: leer_linea("Rol (ADMIN o TECNICO): ")?,
    };

    let creado = usuarios.registrar(request).await?;
    println!(
        "{}",
        format!("✅ Usuario {} creado correctamente.", creado.nombre).bright_green()
    );
    Ok(())
}

async fn pantalla_editar_usuario(usuarios: &UsuarioController) -> Result<(), AppError> {
    println!();
    println!("{}", "✏️ EDITAR USUARIO".bright_cyan().bold());
    println!("{}", "==================".bright_cyan());

    let id = match leer_id("ID del usuario: ")? {
        Some(id) => id,
        None => return Ok(()),
    };

    let actual = usuarios.obtener(id).await?;
    println!(
        "Editando a {} (cédula {}, no editable)",
        actual.nombre, actual.cedula
    );
    println!("(deja un campo vacío para conservar el valor actual)");

    let nombre = leer_con_defecto("Nombre", &actual.nombre)?;
    let correo = leer_con_defecto("Correo", &actual.correo)?;
    let rol = leer_con_defecto("Rol (ADMIN o TECNICO)", &actual.rol.to_string())?;
    let contrasena = leer_linea("Nueva contraseña (opcional): ")?;

    let request = ActualizarUsuarioRequest::nuevo(&nombre, &correo, &rol, &contrasena);
    let actualizado = usuarios.actualizar(id, request).await?;
    println!(
        "{}",
        format!("✅ Usuario {} actualizado correctamente.", actualizado.nombre).bright_green()
    );
    Ok(())
}

async fn pantalla_editar_perfil(
    usuario: &Usuario,
    usuarios: &UsuarioController,
) -> Result<(), AppError> {
    println!();
    println!("{}", "🙍 EDITAR MI PERFIL".bright_cyan().bold());
    println!("{}", "====================".bright_cyan());
    println!("(deja un campo vacío para conservar el valor actual)");

    let nombre = leer_con_defecto("Nombre", &usuario.nombre)?;
    let correo = leer_con_defecto("Correo", &usuario.correo)?;
    let contrasena = leer_linea("Nueva contraseña (opcional): ")?;

    let request =
        ActualizarUsuarioRequest::nuevo(&nombre, &correo, &usuario.rol.to_string(), &contrasena);
    usuarios.actualizar_perfil(request).await?;
    println!("{}", "✅ Perfil actualizado correctamente.".bright_green());
    Ok(())
}

async fn pantalla_referencias(referencias: &mut ReferenciaController) -> Result<(), AppError> {
    referencias.cargar_lista().await?;

    loop {
        println!();
        println!("{}", "📦 LISTA DE REFERENCIAS".bright_cyan().bold());
        println!("{}", "========================".bright_cyan());
        println!(
            "Mostrando: {}",
            referencias.filtro().etiqueta().bright_yellow()
        );

        if referencias.lista().is_empty() {
            println!(
                "No hay referencias {}.",
                referencias.filtro().etiqueta().to_lowercase()
            );
        } else {
            for r in referencias.lista() {
                println!(
                    "[{}] {} | Código: {} | Estado: {}",
                    r.id_referencia, r.nombre, r.codigo, r.estado()
                );
            }
        }

        println!();
        println!("1. 🔄 Ver {}", referencias.filtro().alternado().etiqueta());
        println!("2. 🔍 Buscar por código");
        println!("3. ➕ Registrar referencia");
        println!("4. ✏️ Editar referencia");
        println!("5. 🟢 Activar / 🔴 Desactivar");
        println!("6. ⬅️ Volver");

        match leer_linea("Selecciona una opción: ")?.as_str() {
            "1" => {
                referencias.alternar_filtro().await?;
            }
            "2" => {
                let texto = leer_linea("Buscar por código: ")?;
                let resultado = referencias.buscar(&texto);
                if resultado.is_empty() {
                    println!("Sin coincidencias para '{}'.", texto);
                }
                for r in resultado {
                    println!(
                        "[{}] {} | Código: {} | Estado: {}",
                        r.id_referencia, r.nombre, r.codigo, r.estado()
                    );
                }
            }
            "3" => {
                let codigo = leer_linea("Código (ej: RF01): ")?;
                let nombre = leer_linea("Nombre de la referencia: ")?;
                let creada = referencias.registrar(&codigo, &nombre).await?;
                println!(
                    "{}",
                    format!("✅ Referencia {} creada correctamente.", creada.codigo).bright_green()
                );
            }
            "4" => {
                if let Some(id) = leer_id("ID de la referencia: ")? {
                    let actual = referencias.obtener(id).await?;
                    println!("(deja un campo vacío para conservar el valor actual)");
                    let codigo = leer_con_defecto("Código", &actual.codigo)?;
                    let nombre = leer_con_defecto("Nombre", &actual.nombre)?;
                    let activo = leer_si_no(&format!(
                        "¿Activa? (actualmente {}) [s/n]: ",
                        actual.estado()
                    ))?
                    .unwrap_or(actual.activo);

                    referencias.actualizar(id, &codigo, &nombre, activo).await?;
                    println!("{}", "✅ Referencia actualizada correctamente.".bright_green());
                }
            }
            "5" => {
                if let Some(id) = leer_id("ID de la referencia: ")? {
                    let actualizada = referencias.alternar_estado(id).await?;
                    println!(
                        "{}",
                        format!(
                            "✅ Referencia {} correctamente.",
                            if actualizada.activo {
                                "activada"
                            } else {
                                "desactivada"
                            }
                        )
                        .bright_green()
                    );
                }
            }
            "6" => return Ok(()),
            _ => println!("{}", "❌ Opción inválida. Intenta de nuevo.".bright_red()),
        }
    }
}

// ----------------------------------------------------
// Helpers de entrada
// ----------------------------------------------------

fn leer_linea(prompt: &str) -> Result<String, AppError> {
    print!("{}", prompt.bright_yellow());
    io::stdout().flush()?;
    let mut linea = String::new();
    io::stdin().read_line(&mut linea)?;
    Ok(linea.trim().to_string())
}

/// Lee un valor mostrando el actual; vacío conserva el valor actual
fn leer_con_defecto(etiqueta: &str, actual: &str) -> Result<String, AppError> {
    let valor = leer_linea(&format!("{} [{}]: ", etiqueta, actual))?;
    Ok(if valor.is_empty() {
        actual.to_string()
    } else {
        valor
    })
}

fn leer_id(prompt: &str) -> Result<Option<i64>, AppError> {
    let texto = leer_linea(prompt)?;
    match texto.parse::<i64>() {
        Ok(id) => Ok(Some(id)),
        Err(_) => {
            println!("{}", "❌ ID inválido.".bright_red());
            Ok(None)
        }
    }
}

fn leer_si_no(prompt: &str) -> Result<Option<bool>, AppError> {
    match leer_linea(prompt)?.to_lowercase().as_str() {
        "s" | "si" | "sí" => Ok(Some(true)),
        "n" | "no" => Ok(Some(false)),
        _ => Ok(None),
    }
}

fn mostrar_error(e: &AppError) {
    error!("{}", e);
    println!("{}", format!("❌ {}", e.mensaje_usuario()).bright_red());
}
