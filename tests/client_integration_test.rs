//! Integration tests for the CamCloud SDK client

use camera_cloud_sdk::{
    Auth, CameraParams, ClientBuilder, ClientCredentials, Error, ModelFilter, SnapshotRange,
    UserParams, VendorFilter,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::{
    matchers::{body_partial_json, header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

/// Create a mock server and a fully credentialed test client
async fn setup() -> (MockServer, camera_cloud_sdk::Client) {
    let server = MockServer::start().await;

    let client = ClientBuilder::new(server.uri())
        .auth(Auth::oauth2("test-token"))
        .client_credentials(ClientCredentials::new("test-id", "test-secret"))
        .timeout_ms(5000)
        .build()
        .expect("Failed to build client");

    (server, client)
}

/// Create a mock server and an anonymous client without client credentials
async fn setup_anonymous() -> (MockServer, camera_cloud_sdk::Client) {
    let server = MockServer::start().await;

    let client = ClientBuilder::new(server.uri())
        .timeout_ms(5000)
        .build()
        .expect("Failed to build client");

    (server, client)
}

#[tokio::test]
async fn test_list_vendors_anonymous() {
    let (server, client) = setup_anonymous().await;

    Mock::given(method("GET"))
        .and(path("/vendors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "vendors": [
                {"id": "hikvision", "name": "Hikvision", "known_macs": ["00:0C:43"]},
                {"id": "axis", "name": "Axis Communications"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let vendors = client
        .list_vendors(VendorFilter::default())
        .await
        .expect("Failed to list vendors");

    assert_eq!(vendors.len(), 2);
    assert_eq!(vendors[0].id, "hikvision");
    assert_eq!(vendors[0].known_macs, vec!["00:0C:43".to_string()]);
    assert!(vendors[1].known_macs.is_empty());
}

#[tokio::test]
async fn test_unmatched_vendor_filter_yields_empty_list() {
    let (server, client) = setup_anonymous().await;

    Mock::given(method("GET"))
        .and(path("/vendors"))
        .and(query_param("mac", "FF:FF:FF"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "vendors": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let vendors = client
        .list_vendors(VendorFilter::default().with_mac("FF:FF:FF"))
        .await
        .expect("Unmatched filter must not be an error");

    assert!(vendors.is_empty());
}

#[tokio::test]
async fn test_empty_filter_values_are_omitted() {
    let (server, client) = setup_anonymous().await;

    // The mock requires the name parameter to be entirely absent.
    Mock::given(method("GET"))
        .and(path("/vendors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "vendors": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let filter = VendorFilter {
        name: Some(String::new()),
        mac: None,
    };
    let _ = client.list_vendors(filter).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(!requests[0].url.query().unwrap_or("").contains("name"));
}

#[tokio::test]
async fn test_get_vendor_takes_first() {
    let (server, client) = setup_anonymous().await;

    Mock::given(method("GET"))
        .and(path("/vendors/axis"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "vendors": [{"id": "axis", "name": "Axis Communications"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let vendor = client.get_vendor("axis").await.unwrap();
    assert_eq!(vendor.unwrap().name, "Axis Communications");
}

#[tokio::test]
async fn test_list_models_clamps_pagination() {
    let (server, client) = setup_anonymous().await;

    Mock::given(method("GET"))
        .and(path("/models"))
        .and(query_param("limit", "10"))
        .and(query_param("page", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "models": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let models = client
        .list_models(ModelFilter::default().with_limit(-5).with_page(-1))
        .await
        .unwrap();
    assert!(models.is_empty());
}

#[tokio::test]
async fn test_list_models_preserves_valid_pagination() {
    let (server, client) = setup_anonymous().await;

    Mock::given(method("GET"))
        .and(path("/models"))
        .and(query_param("vendor_id", "axis"))
        .and(query_param("limit", "25"))
        .and(query_param("page", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "models": [{"id": "m1054", "name": "M1054", "vendor_id": "axis"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let models = client
        .list_models(
            ModelFilter::default()
                .with_vendor("axis")
                .with_limit(25)
                .with_page(0),
        )
        .await
        .unwrap();
    assert_eq!(models[0].vendor_id, "axis");
}

#[tokio::test]
async fn test_bearer_header_attached() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/cameras"))
        .and(header("Authorization", "bearer test-token"))
        .and(query_param("api_id", "test-id"))
        .and(query_param("api_key", "test-secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "cameras": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let cameras = client.list_cameras(&[]).await.unwrap();
    assert!(cameras.is_empty());
}

#[tokio::test]
async fn test_basic_header_attached() {
    let server = MockServer::start().await;
    let client = ClientBuilder::new(server.uri())
        .auth(Auth::basic("joe", "pa55w0rd"))
        .client_credentials(ClientCredentials::new("test-id", "test-secret"))
        .build()
        .unwrap();

    // base64("joe:pa55w0rd")
    Mock::given(method("GET"))
        .and(path("/cameras/gate"))
        .and(header("Authorization", "Basic am9lOnBhNTV3MHJk"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "cameras": [{"id": "gate", "name": "Gate Camera"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let camera = client.get_camera("gate").await.unwrap();
    assert_eq!(camera.unwrap().id, "gate");
}

#[tokio::test]
async fn test_get_camera_not_found_is_none() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/cameras/no-such-camera"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "cameras": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let camera = client.get_camera("no-such-camera").await.unwrap();
    assert!(camera.is_none());
}

#[tokio::test]
async fn test_status_outside_whitelist_is_api_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/cameras/gate"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "Camera not found",
            "code": "camera_not_found"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let err = client.get_camera("gate").await.unwrap_err();
    match err {
        Error::Api {
            status,
            message,
            code,
            ..
        } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Camera not found");
            assert_eq!(code.as_deref(), Some("camera_not_found"));
        }
        other => panic!("Expected Api error, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_unparseable_error_body_falls_back_to_raw_text() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/cameras/gate"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client.get_camera("gate").await.unwrap_err();
    match err {
        Error::Api {
            status, message, ..
        } => {
            assert_eq!(status, 502);
            assert_eq!(message, "Bad Gateway");
        }
        other => panic!("Expected Api error, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_error_context_is_preserved() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/cameras/gate/shares"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "message": "Invalid rights",
            "code": "invalid_rights",
            "context": ["edit", "delete"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let err = client
        .create_share("gate", "joe@example.com", "edit,delete")
        .await
        .unwrap_err();
    match err {
        Error::Api { context, .. } => {
            assert_eq!(context, Some(json!(["edit", "delete"])));
        }
        other => panic!("Expected Api error, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_missing_client_credentials_makes_no_request() {
    let (server, client) = setup_anonymous().await;

    // Any request reaching the server would fail this expectation.
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = client.list_cameras(&[]).await.unwrap_err();
    assert!(matches!(err, Error::MissingCredentials(_)));
}

#[tokio::test]
async fn test_create_then_get_camera_round_trip() {
    let (server, client) = setup().await;

    let camera_body = json!({
        "id": "gate",
        "name": "Gate Camera",
        "owned": true,
        "vendor_id": "hikvision",
        "is_public": false
    });

    Mock::given(method("POST"))
        .and(path("/cameras"))
        .and(body_partial_json(json!({"id": "gate", "name": "Gate Camera"})))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({ "cameras": [camera_body.clone()] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/cameras/gate"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "cameras": [camera_body] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let created = client
        .create_camera(
            CameraParams::create("gate", "Gate Camera")
                .with_vendor("hikvision")
                .with_is_public(false),
        )
        .await
        .unwrap();

    let fetched = client.get_camera(&created.id).await.unwrap().unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.vendor_id.as_deref(), Some("hikvision"));
}

#[tokio::test]
async fn test_update_camera_uses_patch() {
    let (server, client) = setup().await;

    Mock::given(method("PATCH"))
        .and(path("/cameras/gate"))
        .and(body_partial_json(json!({"name": "Side Gate"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "cameras": [{"id": "gate", "name": "Side Gate"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let camera = client
        .update_camera("gate", CameraParams::default().with_name("Side Gate"))
        .await
        .unwrap();
    assert_eq!(camera.name, "Side Gate");
}

#[tokio::test]
async fn test_delete_camera_accepts_204() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/cameras/gate"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client.delete_camera("gate").await.unwrap();
}

#[tokio::test]
async fn test_delete_rejects_status_outside_whitelist() {
    let (server, client) = setup().await;

    // 202 is acceptable for updates but not for deletes.
    Mock::given(method("DELETE"))
        .and(path("/cameras/gate"))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({
            "message": "Queued"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let err = client.delete_camera("gate").await.unwrap_err();
    assert_eq!(err.status_code(), Some(202));
}

#[tokio::test]
async fn test_live_snapshot_returns_bytes() {
    let (server, client) = setup().await;

    let jpeg = vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];
    Mock::given(method("GET"))
        .and(path("/cameras/gate/live/snapshot"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(jpeg.clone())
                .insert_header("Content-Type", "image/jpeg"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let bytes = client.live_snapshot("gate").await.unwrap();
    assert_eq!(bytes, jpeg);
}

#[tokio::test]
async fn test_list_snapshots_range_params() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/cameras/gate/recordings/snapshots"))
        .and(query_param("from", "1463140000"))
        .and(query_param("to", "1463150000"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "snapshots": [
                {"created_at": 1463145447, "notes": "motion detected"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let snapshots = client
        .list_snapshots(
            "gate",
            SnapshotRange::default()
                .with_from(1463140000)
                .with_to(1463150000)
                .with_limit(0),
        )
        .await
        .unwrap();

    assert_eq!(snapshots.len(), 1);
    assert_eq!(snapshots[0].created_at, 1463145447);
    assert_eq!(snapshots[0].notes.as_deref(), Some("motion detected"));
}

#[tokio::test]
async fn test_get_snapshot_boolean_token() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/cameras/gate/recordings/snapshots/1463145447"))
        .and(query_param("with_data", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "snapshots": [{"created_at": 1463145447, "data": "/9j/4AAQ"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let snapshot = client
        .get_snapshot("gate", 1463145447, true)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(snapshot.data.as_deref(), Some("/9j/4AAQ"));
}

#[tokio::test]
async fn test_get_snapshot_absent_instant_is_none() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/cameras/gate/recordings/snapshots/42"))
        .and(query_param("with_data", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "snapshots": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let snapshot = client.get_snapshot("gate", 42, false).await.unwrap();
    assert!(snapshot.is_none());
}

#[tokio::test]
async fn test_whitelisted_204_is_empty_list() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/cameras/gate/recordings/snapshots"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let snapshots = client
        .list_snapshots("gate", SnapshotRange::default())
        .await
        .unwrap();
    assert!(snapshots.is_empty());
}

#[tokio::test]
async fn test_missing_envelope_field_is_transport_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/cameras"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let err = client.list_cameras(&[]).await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
}

#[tokio::test]
async fn test_user_lifecycle() {
    let (server, client) = setup().await;

    let user_body = json!({
        "id": "joe",
        "firstname": "Joe",
        "lastname": "Bloggs",
        "email": "joe@example.com",
        "country": "ie",
        "created_at": 1463145447
    });

    Mock::given(method("POST"))
        .and(path("/users"))
        .and(body_partial_json(json!({"username": "joe", "email": "joe@example.com"})))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({ "users": [user_body.clone()] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PATCH"))
        .and(path("/users/joe"))
        .and(body_partial_json(json!({"country": "us"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "users": [user_body] })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/users/joe"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let created = client
        .create_user(UserParams::create("joe", "joe@example.com", "pa55w0rd"))
        .await
        .unwrap();
    assert_eq!(created.id, "joe");

    let updated = client
        .update_user("joe", UserParams::default().with_country("us"))
        .await
        .unwrap();
    assert_eq!(updated.email.as_deref(), Some("joe@example.com"));

    client.delete_user("joe").await.unwrap();
}

#[tokio::test]
async fn test_create_user_validates_locally() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let err = client
        .create_user(UserParams::default().with_firstname("Joe"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}
