#[cfg(test)]
mod tests {
    use crate::schemas::ApiDoc;
    use utoipa::openapi::{schema::Schema, PathItemType, RefOr};
    use utoipa::OpenApi;

    fn object_properties(name: &str) -> Vec<String> {
        let openapi = ApiDoc::openapi();
        let components = openapi.components.expect("components should be generated");
        match components.schemas.get(name) {
            Some(RefOr::T(Schema::Object(obj))) => obj.properties.keys().cloned().collect(),
            _ => panic!("{} should be an object schema", name),
        }
    }

    #[test]
    fn test_openapi_schema_generation() {
        let openapi = ApiDoc::openapi();

        let components = openapi.components.as_ref().unwrap();
        for name in [
            "ErrorResponse",
            "HealthResponse",
            "MessageResponse",
            "PlanetResponse",
            "CharacterResponse",
            "VehicleResponse",
            "FavoriteResponse",
            "UserResponse",
            "Terrain",
            "Manufacturer",
        ] {
            assert!(components.schemas.contains_key(name), "missing schema {}", name);
        }

        assert!(serde_json::to_string(&openapi).is_ok());
    }

    #[test]
    fn test_error_response_schema_structure() {
        let properties = object_properties("ErrorResponse");
        for key in ["error", "code", "success"] {
            assert!(properties.iter().any(|p| p == key));
        }
    }

    #[test]
    fn test_views_do_not_document_hidden_columns() {
        assert!(!object_properties("PlanetResponse").iter().any(|p| p == "image_url"));
        assert!(!object_properties("CharacterResponse").iter().any(|p| p == "image_url"));
        assert!(!object_properties("VehicleResponse").iter().any(|p| p == "image_url"));
        assert!(!object_properties("UserResponse").iter().any(|p| p == "password"));
    }

    #[test]
    fn test_crud_paths_are_documented() {
        let openapi = ApiDoc::openapi();
        let paths = &openapi.paths.paths;

        let planet = paths.get("/planets/{planet_id}").unwrap();
        for method in [PathItemType::Get, PathItemType::Put, PathItemType::Delete] {
            assert!(planet.operations.contains_key(&method));
        }

        let create = paths
            .get("/characters")
            .and_then(|item| item.operations.get(&PathItemType::Post))
            .unwrap();
        assert!(create.responses.responses.contains_key("200"));
        assert!(create.responses.responses.contains_key("400"));
        assert!(create.responses.responses.contains_key("409"));

        assert!(paths.contains_key("/favorites/users/{user_id}/characters/{character_id}"));
    }

    #[test]
    fn test_error_responses_reference_plain_schema_name() {
        let openapi_json = serde_json::to_string(&ApiDoc::openapi()).unwrap();
        assert!(!openapi_json.contains("crate.schemas.ErrorResponse"));
        assert!(openapi_json.contains("#/components/schemas/ErrorResponse"));
    }

    #[test]
    fn test_health_documents_only_success() {
        let openapi = ApiDoc::openapi();
        let health = openapi
            .paths
            .paths
            .get("/health")
            .and_then(|item| item.operations.get(&PathItemType::Get))
            .unwrap();

        assert!(health.responses.responses.contains_key("200"));
        assert_eq!(health.responses.responses.len(), 1);
    }

    #[test]
    fn test_update_requests_document_nullable_image_url() {
        for name in ["UpdatePlanetRequest", "UpdateCharacterRequest", "UpdateVehicleRequest"] {
            assert!(object_properties(name).iter().any(|p| p == "image_url"));
        }
    }
}
