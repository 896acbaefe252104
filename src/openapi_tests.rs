use crate::schemas::ApiDoc;
use utoipa::OpenApi;

#[test]
fn test_openapi_schema_generation() {
    let openapi = ApiDoc::openapi();

    assert!(openapi.components.is_some());
    let components = openapi.components.as_ref().unwrap();

    assert!(components.schemas.contains_key("HealthResponse"));
    assert!(components.schemas.contains_key("FrontendSettings"));

    let json_result = serde_json::to_string(&openapi);
    assert!(json_result.is_ok());
}

#[test]
fn test_health_response_schema_structure() {
    let openapi = ApiDoc::openapi();
    let components = openapi.components.as_ref().unwrap();
    let health_response_schema = components.schemas.get("HealthResponse").unwrap();

    if let utoipa::openapi::RefOr::T(utoipa::openapi::schema::Schema::Object(obj)) =
        health_response_schema
    {
        let properties = &obj.properties;
        assert!(properties.contains_key("status"));
        assert!(properties.contains_key("version"));
        assert!(properties.contains_key("frontend"));
    } else {
        panic!("HealthResponse should be an object schema");
    }
}

#[test]
fn test_openapi_paths() {
    let openapi = ApiDoc::openapi();

    for path in ["/health", "/settings.json"] {
        let item = openapi.paths.paths.get(path).unwrap_or_else(|| panic!("{} missing", path));
        let get = item.operations.get(&utoipa::openapi::PathItemType::Get);
        assert!(get.is_some(), "{} should have a GET operation", path);
        assert!(get.unwrap().responses.responses.contains_key("200"));
    }
}
