use domos::api::{ApiError, HttpModuleSource, ModuleRecord, ModuleSource};
use domos::core::action::{Action, Effect, update};
use domos::core::route::RouteTable;
use domos::core::state::App;
use domos::core::view::{self, LoadState, View};
use serde_json::json;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

// ============================================================================
// Helper Functions
// ============================================================================

fn source_for(server: &MockServer) -> HttpModuleSource {
    HttpModuleSource::new(&server.uri(), None).unwrap()
}

async fn mount_json(server: &MockServer, route: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

/// Feeds the effect's read back through `update`, as the TUI loop would.
async fn settle(app: &mut App, effect: Effect, source: &dyn ModuleSource) {
    if let Effect::Fetch(request) = effect {
        let action = request.perform(source).await;
        update(app, action);
    }
}

// ============================================================================
// HttpModuleSource
// ============================================================================

#[tokio::test]
async fn test_list_modules_returns_records_verbatim() {
    let server = MockServer::start().await;
    let body = json!([
        {"id": 1, "name": "time", "descr": "Clock", "queue": "time", "Active": true},
        {"id": 2, "name": "buienradar", "descr": "Rain", "queue": "rain", "Active": false},
    ]);
    mount_json(&server, "/api/getmodules", body.clone()).await;

    let modules = source_for(&server).list_modules().await.unwrap();

    assert_eq!(modules.len(), 2);
    assert_eq!(modules[0].as_value(), &body[0]);
    assert_eq!(modules[1].name(), Some("buienradar"));
    assert_eq!(modules[1].active(), Some(false));
}

#[tokio::test]
async fn test_list_modules_empty_array() {
    let server = MockServer::start().await;
    mount_json(&server, "/api/getmodules", json!([])).await;

    let modules = source_for(&server).list_modules().await.unwrap();
    assert!(modules.is_empty());
}

#[tokio::test]
async fn test_get_module_hits_id_path() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/api/getmodule/42",
        json!({"id": 42, "name": "X"}),
    )
    .await;

    let module = source_for(&server).get_module("42").await.unwrap();
    assert_eq!(module, ModuleRecord::new(json!({"id": 42, "name": "X"})));
}

#[tokio::test]
async fn test_server_error_maps_to_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/getmodules"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let err = source_for(&server).list_modules().await.unwrap_err();
    assert_eq!(
        err,
        ApiError::Api {
            status: 500,
            message: "Internal Server Error".to_string(),
        }
    );
}

#[tokio::test]
async fn test_invalid_json_maps_to_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/getmodule/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = source_for(&server).get_module("1").await.unwrap_err();
    assert!(matches!(err, ApiError::Parse(_)));
}

#[tokio::test]
async fn test_list_with_non_array_body_is_parse_error() {
    let server = MockServer::start().await;
    mount_json(&server, "/api/getmodules", json!({"modules": []})).await;

    let err = source_for(&server).list_modules().await.unwrap_err();
    assert!(matches!(err, ApiError::Parse(_)));
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    // Grab a free port, then close it so the connection is refused.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let source = HttpModuleSource::new(&format!("http://127.0.0.1:{port}"), None).unwrap();

    let err = source.list_modules().await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)), "got {err:?}");
}

#[tokio::test]
async fn test_get_module_escapes_reserved_characters_in_id() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/api/getmodule/a%2Fb%3Fc%23d",
        json!({"id": "a/b?c#d"}),
    )
    .await;

    let module = source_for(&server).get_module("a/b?c#d").await.unwrap();
    assert_eq!(module.id().as_deref(), Some("a/b?c#d"));
}

// ============================================================================
// Controllers over HTTP
// ============================================================================

#[tokio::test]
async fn test_modules_view_then_openmodule_loads_detail() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/api/getmodules",
        json!([{"id": 42, "name": "X"}]),
    )
    .await;
    mount_json(
        &server,
        "/api/getmodule/42",
        json!({"id": 42, "name": "X", "Active": true}),
    )
    .await;
    let source = source_for(&server);

    let mut app = App::new();
    let effect = update(&mut app, Action::Navigate("/modules".into()));
    settle(&mut app, effect, &source).await;

    let View::Modules(controller) = &app.view else {
        panic!("expected modules view");
    };
    let listed = controller.modules.loaded().unwrap()[0].clone();
    assert_eq!(app.status_message, "Loaded 1 modules");

    let effect = update(&mut app, Action::OpenModule(listed));
    assert_eq!(app.path, "/module/42");
    settle(&mut app, effect, &source).await;

    let View::Module(controller) = &app.view else {
        panic!("expected module view");
    };
    assert_eq!(controller.id, "42");
    assert_eq!(
        controller.module,
        LoadState::Loaded(ModuleRecord::new(json!({"id": 42, "name": "X", "Active": true})))
    );
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_openmodule_with_slash_in_id_loads_that_module() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/api/getmodule/lights%2Fkitchen",
        json!({"id": "lights/kitchen"}),
    )
    .await;
    let source = source_for(&server);

    let mut app = App::new();
    update(&mut app, Action::Navigate("/modules".into()));
    let record = ModuleRecord::new(json!({"id": "lights/kitchen"}));
    let effect = update(&mut app, Action::OpenModule(record.clone()));
    assert_eq!(app.path, "/module/lights%2Fkitchen");
    settle(&mut app, effect, &source).await;

    let View::Module(controller) = &app.view else {
        panic!("expected module view");
    };
    assert_eq!(controller.id, "lights/kitchen");
    assert_eq!(controller.module, LoadState::Loaded(record));
}

#[tokio::test]
async fn test_failed_load_is_visible_in_view_and_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/getmodule/9"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such module"))
        .mount(&server)
        .await;
    let source = source_for(&server);

    let mut app = App::new();
    let effect = update(&mut app, Action::Navigate("/module/9".into()));
    settle(&mut app, effect, &source).await;

    assert!(matches!(app.view.error(), Some(ApiError::Api { status: 404, .. })));
    assert!(app.status_message.starts_with("Loading module 9 failed"));
}

#[tokio::test]
async fn test_load_path_dumps_module_list() {
    let server = MockServer::start().await;
    mount_json(&server, "/api/getmodules", json!([{"id": 1}])).await;

    let data = view::load_path(&RouteTable::new(), &source_for(&server), "#/modules")
        .await
        .unwrap();
    assert_eq!(data, json!([{"id": 1}]));
}
