//! Tests de los controllers: guardas de sesión/rol y sincronización de la
//! cache de referencias tras cada operación CRUD.

use serde_json::json;
use tempfile::TempDir;

use inventario_client::client::InventarioApiClient;
use inventario_client::config::EnvironmentConfig;
use inventario_client::controllers::{AuthController, ReferenciaController, UsuarioController};
use inventario_client::dto::ActualizarUsuarioRequest;
use inventario_client::models::{Rol, Usuario};
use inventario_client::session::SessionStore;
use inventario_client::utils::errors::AppError;

struct Entorno {
    server: mockito::ServerGuard,
    store: SessionStore,
    client: InventarioApiClient,
    // Mantiene vivo el directorio temporal del archivo de sesión
    _dir: TempDir,
}

async fn entorno() -> Entorno {
    let server = mockito::Server::new_async().await;
    let dir = tempfile::tempdir().unwrap();

    let config = EnvironmentConfig {
        environment: "test".to_string(),
        api_base_url: server.url(),
        http_timeout_secs: 5,
        session_file: dir.path().join("usuario.json"),
    };

    let store = SessionStore::new(config.session_file.clone());
    let client = InventarioApiClient::new(&config).unwrap();

    Entorno {
        server,
        store,
        client,
        _dir: dir,
    }
}

fn usuario(rol: Rol) -> Usuario {
    Usuario {
        id_usuario: 7,
        nombre: "Laura Pérez".to_string(),
        cedula: "1023456789".to_string(),
        correo: "laura@inventario.com".to_string(),
        contrasena: None,
        rol,
    }
}

fn referencia_json(id: i64, codigo: &str, nombre: &str, activo: bool) -> serde_json::Value {
    json!({"idReferencia": id, "codigo": codigo, "nombre": nombre, "activo": activo})
}

// ----------------------------------------------------
// Login / sesión
// ----------------------------------------------------

#[tokio::test]
async fn login_persiste_la_sesion_y_logout_la_borra() {
    let mut entorno = entorno().await;
    entorno
        .server
        .mock("POST", "/auth/login")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "idUsuario": 7,
                "nombre": "Laura Pérez",
                "cedula": "1023456789",
                "correo": "laura@inventario.com",
                "contrasena": null,
                "rol": "ADMIN"
            })
            .to_string(),
        )
        .create_async()
        .await;

    let auth = AuthController::new(entorno.client.clone(), entorno.store.clone());

    assert!(auth.sesion_actual().unwrap().is_none());

    let logueado = auth.login("1023456789", "secreta1").await.unwrap();
    assert!(logueado.rol.es_admin());

    // La sesión sobrevive a un "reinicio" (nuevo store sobre el mismo archivo)
    let releido = SessionStore::new(entorno.store.path().to_path_buf())
        .cargar()
        .unwrap()
        .unwrap();
    assert_eq!(releido.id_usuario, 7);

    auth.logout().unwrap();
    assert!(auth.sesion_actual().unwrap().is_none());
}

#[tokio::test]
async fn login_con_campos_vacios_no_llama_al_backend() {
    let entorno = entorno().await;
    let auth = AuthController::new(entorno.client.clone(), entorno.store.clone());

    let error = auth.login("  ", "secreta1").await.unwrap_err();
    assert!(matches!(error, AppError::BadRequest(_)));
    assert!(auth.sesion_actual().unwrap().is_none());
}

// ----------------------------------------------------
// Guardas de rol
// ----------------------------------------------------

#[tokio::test]
async fn tecnico_no_puede_listar_usuarios() {
    let entorno = entorno().await;
    entorno.store.guardar(&usuario(Rol::Tecnico)).unwrap();

    let usuarios = UsuarioController::new(entorno.client.clone(), entorno.store.clone());
    let error = usuarios.listar().await.unwrap_err();

    assert!(matches!(error, AppError::Forbidden(_)));
}

#[tokio::test]
async fn sin_sesion_las_referencias_piden_login() {
    let entorno = entorno().await;
    let mut referencias =
        ReferenciaController::new(entorno.client.clone(), entorno.store.clone());

    let error = referencias.cargar_lista().await.unwrap_err();
    assert!(error.es_sesion_expirada());
}

#[tokio::test]
async fn tecnico_no_puede_registrar_referencias() {
    let entorno = entorno().await;
    entorno.store.guardar(&usuario(Rol::Tecnico)).unwrap();

    let mut referencias =
        ReferenciaController::new(entorno.client.clone(), entorno.store.clone());
    let error = referencias.registrar("RF09", "Correa").await.unwrap_err();

    assert!(matches!(error, AppError::Forbidden(_)));
}

#[tokio::test]
async fn admin_puede_listar_y_registrar_usuarios() {
    let mut entorno = entorno().await;
    entorno.store.guardar(&usuario(Rol::Admin)).unwrap();

    entorno
        .server
        .mock("GET", "/api/usuarios")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!([{
                "idUsuario": 7,
                "nombre": "Laura Pérez",
                "cedula": "1023456789",
                "correo": "laura@inventario.com",
                "contrasena": null,
                "rol": "ADMIN"
            }])
            .to_string(),
        )
        .create_async()
        .await;

    entorno
        .server
        .mock("POST", "/api/usuarios/registrar")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "idUsuario": 12,
                "nombre": "Carlos Ruiz",
                "cedula": "987654321",
                "correo": "carlos@inventario.com",
                "contrasena": null,
                "rol": "TECNICO"
            })
            .to_string(),
        )
        .create_async()
        .await;

    let usuarios = UsuarioController::new(entorno.client.clone(), entorno.store.clone());

    let lista = usuarios.listar().await.unwrap();
    assert_eq!(lista.len(), 1);

    let request = inventario_client::dto::RegistrarUsuarioRequest {
        nombre: "Carlos Ruiz".to_string(),
        cedula: "987654321".to_string(),
        correo: "carlos@inventario.com".to_string(),
        contrasena: "secreta1".to_string(),
        rol: "tecnico".to_string(),
    };
    let creado = usuarios.registrar(request).await.unwrap();
    assert_eq!(creado.rol, Rol::Tecnico);
}

// ----------------------------------------------------
// Sincronización de la cache de referencias
// ----------------------------------------------------

#[tokio::test]
async fn registrar_inserta_la_referencia_ordenada_en_la_lista() {
    let mut entorno = entorno().await;
    entorno.store.guardar(&usuario(Rol::Admin)).unwrap();

    entorno
        .server
        .mock("GET", "/api/referencias/activas")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!([
                referencia_json(1, "RF01", "Aceite", true),
                referencia_json(2, "RF02", "Tornillo", true)
            ])
            .to_string(),
        )
        .create_async()
        .await;

    entorno
        .server
        .mock("POST", "/api/referencias/registrar")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(referencia_json(3, "RF03", "Filtro", true).to_string())
        .create_async()
        .await;

    let mut referencias =
        ReferenciaController::new(entorno.client.clone(), entorno.store.clone());

    referencias.cargar_lista().await.unwrap();
    assert_eq!(referencias.lista().len(), 2);

    let creada = referencias.registrar("rf03", "Filtro").await.unwrap();
    assert!(creada.activo);

    let nombres: Vec<&str> = referencias
        .lista()
        .iter()
        .map(|r| r.nombre.as_str())
        .collect();
    assert_eq!(nombres, vec!["Aceite", "Filtro", "Tornillo"]);
}

#[tokio::test]
async fn desactivar_saca_la_referencia_de_la_lista_de_activas() {
    let mut entorno = entorno().await;
    entorno.store.guardar(&usuario(Rol::Admin)).unwrap();

    entorno
        .server
        .mock("GET", "/api/referencias/activas")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!([
                referencia_json(1, "RF01", "Aceite", true),
                referencia_json(2, "RF02", "Bujía", true)
            ])
            .to_string(),
        )
        .create_async()
        .await;

    // El toggle relee la referencia antes de enviarla con el flag invertido
    entorno
        .server
        .mock("GET", "/api/referencias/1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(referencia_json(1, "RF01", "Aceite", true).to_string())
        .create_async()
        .await;

    let put = entorno
        .server
        .mock("PUT", "/api/referencias/1")
        .match_body(mockito::Matcher::Json(json!({
            "codigo": "RF01",
            "nombre": "Aceite",
            "activo": false
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(referencia_json(1, "RF01", "Aceite", false).to_string())
        .create_async()
        .await;

    let mut referencias =
        ReferenciaController::new(entorno.client.clone(), entorno.store.clone());

    referencias.cargar_lista().await.unwrap();
    let actualizada = referencias.alternar_estado(1).await.unwrap();

    assert!(!actualizada.activo);
    assert_eq!(referencias.lista().len(), 1);
    assert_eq!(referencias.lista()[0].codigo, "RF02");
    put.assert_async().await;
}

#[tokio::test]
async fn eliminar_logico_quita_la_referencia_de_las_activas() {
    let mut entorno = entorno().await;
    entorno.store.guardar(&usuario(Rol::Admin)).unwrap();

    entorno
        .server
        .mock("GET", "/api/referencias/activas")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!([referencia_json(4, "RF04", "Zapata", true)]).to_string())
        .create_async()
        .await;

    entorno
        .server
        .mock("DELETE", "/api/referencias/eliminar/4")
        .with_status(200)
        .with_body("Referencia eliminada correctamente.")
        .create_async()
        .await;

    entorno
        .server
        .mock("GET", "/api/referencias/4")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(referencia_json(4, "RF04", "Zapata", false).to_string())
        .create_async()
        .await;

    let mut referencias =
        ReferenciaController::new(entorno.client.clone(), entorno.store.clone());

    referencias.cargar_lista().await.unwrap();
    assert_eq!(referencias.lista().len(), 1);

    let mensaje = referencias.eliminar(4).await.unwrap();
    assert_eq!(mensaje, "Referencia eliminada correctamente.");
    assert!(referencias.lista().is_empty());
}

#[tokio::test]
async fn alternar_filtro_recarga_desde_el_endpoint_de_inactivas() {
    let mut entorno = entorno().await;
    entorno.store.guardar(&usuario(Rol::Admin)).unwrap();

    entorno
        .server
        .mock("GET", "/api/referencias/activas")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!([referencia_json(1, "RF01", "Aceite", true)]).to_string())
        .create_async()
        .await;

    let inactivas = entorno
        .server
        .mock("GET", "/api/referencias/inactivas")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!([
                referencia_json(2, "RF02", "Bujía", false),
                referencia_json(3, "RF03", "Correa", false)
            ])
            .to_string(),
        )
        .create_async()
        .await;

    let mut referencias =
        ReferenciaController::new(entorno.client.clone(), entorno.store.clone());

    referencias.cargar_lista().await.unwrap();
    assert_eq!(referencias.lista().len(), 1);

    referencias.alternar_filtro().await.unwrap();
    assert_eq!(referencias.lista().len(), 2);
    assert!(referencias.lista().iter().all(|r| !r.activo));
    inactivas.assert_async().await;
}

#[tokio::test]
async fn codigo_invalido_se_rechaza_sin_llamar_al_backend() {
    let mut entorno = entorno().await;
    entorno.store.guardar(&usuario(Rol::Admin)).unwrap();

    // Cualquier request al backend haría fallar el test
    let post = entorno
        .server
        .mock("POST", "/api/referencias/registrar")
        .expect(0)
        .create_async()
        .await;

    let mut referencias =
        ReferenciaController::new(entorno.client.clone(), entorno.store.clone());
    let error = referencias.registrar("X01", "Filtro").await.unwrap_err();

    assert!(matches!(error, AppError::Validation(_)));
    post.assert_async().await;
}

// ----------------------------------------------------
// Perfil propio
// ----------------------------------------------------

#[tokio::test]
async fn actualizar_perfil_refresca_la_sesion_guardada() {
    let mut entorno = entorno().await;
    entorno.store.guardar(&usuario(Rol::Tecnico)).unwrap();

    entorno
        .server
        .mock("PUT", "/api/usuarios/7")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "idUsuario": 7,
                "nombre": "Laura Pérez",
                "cedula": "1023456789",
                "correo": "nuevo@inventario.com",
                "contrasena": null,
                "rol": "TECNICO"
            })
            .to_string(),
        )
        .create_async()
        .await;

    let usuarios = UsuarioController::new(entorno.client.clone(), entorno.store.clone());
    let request = ActualizarUsuarioRequest::nuevo(
        "Laura Pérez",
        "nuevo@inventario.com",
        "TECNICO",
        "",
    );

    usuarios.actualizar_perfil(request).await.unwrap();

    let sesion = entorno.store.cargar().unwrap().unwrap();
    assert_eq!(sesion.correo, "nuevo@inventario.com");
}

#[tokio::test]
async fn actualizar_usuario_ajeno_no_toca_la_sesion_del_admin() {
    let mut entorno = entorno().await;
    entorno.store.guardar(&usuario(Rol::Admin)).unwrap();

    entorno
        .server
        .mock("PUT", "/api/usuarios/12")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "idUsuario": 12,
                "nombre": "Carlos Ruiz",
                "cedula": "987654321",
                "correo": "carlos@inventario.com",
                "contrasena": null,
                "rol": "TECNICO"
            })
            .to_string(),
        )
        .create_async()
        .await;

    let usuarios = UsuarioController::new(entorno.client.clone(), entorno.store.clone());
    let request = ActualizarUsuarioRequest::nuevo(
        "Carlos Ruiz",
        "carlos@inventario.com",
        "TECNICO",
        "",
    );

    usuarios.actualizar(12, request).await.unwrap();

    // La sesión sigue siendo la del admin original
    let sesion = entorno.store.cargar().unwrap().unwrap();
    assert_eq!(sesion.id_usuario, 7);
    assert!(sesion.rol.es_admin());
}
