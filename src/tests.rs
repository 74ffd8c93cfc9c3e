#[cfg(test)]
mod integration_tests {
    use crate::handlers::characters::CharacterResponse;
    use crate::handlers::favorites::FavoriteResponse;
    use crate::handlers::planets::PlanetResponse;
    use crate::handlers::users::UserResponse;
    use crate::handlers::vehicles::VehicleResponse;
    use crate::router::create_router;
    use crate::schemas::{ApiResponse, AppState, ErrorResponse, SitemapResponse};
    use crate::test_utils::test_utils::{setup_test_app, setup_test_app_state};
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use model::entities::character::{EyeColor, Gender, HairColor};
    use model::entities::planet::{Climate, Terrain};
    use model::entities::prelude::{Character, Planet, Vehicle};
    use model::entities::vehicle::{Manufacturer, VehicleClass};
    use sea_orm::EntityTrait;
    use serde_json::{json, Value};

    async fn test_server() -> TestServer {
        let app = setup_test_app().await;
        TestServer::new(app).unwrap()
    }

    /// Server plus a handle on the same database, for checking stored columns
    async fn test_server_with_state() -> (TestServer, AppState) {
        let state = setup_test_app_state().await;
        let server = TestServer::new(create_router(state.clone())).unwrap();
        (server, state)
    }

    fn tatooine() -> Value {
        json!({
            "id": 1,
            "name": "Tatooine",
            "terrain": "desert",
            "climate": "arid",
            "population": 200000,
            "orbital_period": 304,
            "rotation_period": 23,
            "diameter": 10465,
            "image_url": "https://example.test/tatooine.png"
        })
    }

    fn luke() -> Value {
        json!({
            "id": 1,
            "name": "Luke Skywalker",
            "gender": "male",
            "birth_year": "19BBY",
            "height": 172,
            "hair_color": "blond",
            "eye_color": "blue",
            "image_url": "https://example.test/luke.png",
            "planet_id": 1
        })
    }

    fn x_wing() -> Value {
        json!({
            "id": 12,
            "name": "X-wing",
            "model": "T-65 X-wing",
            "vehicle_class": "starfighter",
            "manufacturer": "Incom Corporation",
            "length": 12,
            "passengers": 0,
            "image_url": "https://example.test/x-wing.png",
            "pilot_id": 1
        })
    }

    #[tokio::test]
    async fn test_health_check() {
        let server = test_server().await;

        let response = server.get("/health").await;

        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["database"], "connected");
    }

    #[tokio::test]
    async fn test_sitemap_lists_routes() {
        let server = test_server().await;

        let response = server.get("/").await;

        response.assert_status(StatusCode::OK);
        let body: SitemapResponse = response.json();
        assert!(body
            .routes
            .iter()
            .any(|r| r.method == "POST" && r.path == "/planets"));
        assert!(body
            .routes
            .iter()
            .any(|r| r.method == "GET" && r.path == "/users/{user_id}/favorites"));
    }

    #[tokio::test]
    async fn test_get_users_hides_password() {
        let server = test_server().await;

        let response = server.get("/users").await;

        response.assert_status(StatusCode::OK);
        let raw: Vec<Value> = response.json();
        assert_eq!(raw.len(), 2);
        assert!(raw.iter().all(|u| u.get("password").is_none()));

        let users: Vec<UserResponse> = response.json();
        assert_eq!(users[0].email, "luke@tatooine.net");
        assert_eq!(users[1].email, "leia@alderaan.gov");
    }

    #[tokio::test]
    async fn test_planet_round_trip() {
        let server = test_server().await;

        let created = server.post("/planets").json(&tatooine()).await;
        created.assert_status(StatusCode::OK);
        let created_raw: Value = created.json();
        assert!(created_raw.get("image_url").is_none());

        let response = server.get("/planets/1").await;
        response.assert_status(StatusCode::OK);
        let planet: PlanetResponse = response.json();
        assert_eq!(
            planet,
            PlanetResponse {
                id: 1,
                name: "Tatooine".to_string(),
                terrain: Terrain::Desert,
                climate: Climate::Arid,
                population: 200000,
                orbital_period: 304,
                rotation_period: 23,
                diameter: 10465,
            }
        );

        let listed: Vec<PlanetResponse> = server.get("/planets").await.json();
        assert_eq!(listed, vec![planet]);
    }

    #[tokio::test]
    async fn test_empty_collections() {
        let server = test_server().await;

        for path in ["/planets", "/characters", "/vehicles"] {
            let response = server.get(path).await;
            response.assert_status(StatusCode::OK);
            let items: Vec<Value> = response.json();
            assert!(items.is_empty(), "{} should start empty", path);
        }
    }

    #[tokio::test]
    async fn test_missing_rows_return_not_found() {
        let server = test_server().await;

        for path in ["/planets/99", "/characters/99", "/vehicles/99"] {
            let response = server.get(path).await;
            response.assert_status(StatusCode::NOT_FOUND);
            let body: ErrorResponse = response.json();
            assert!(!body.success);
            assert_eq!(body.code, "NOT_FOUND");
        }

        for path in ["/planets/99", "/characters/99", "/vehicles/99"] {
            server.delete(path).await.assert_status(StatusCode::NOT_FOUND);
        }

        let mut update = tatooine();
        update.as_object_mut().unwrap().remove("id");
        server
            .put("/planets/99")
            .json(&update)
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_duplicate_planet_is_conflict() {
        let server = test_server().await;

        server
            .post("/planets")
            .json(&tatooine())
            .await
            .assert_status(StatusCode::OK);

        // Same name, new id
        let mut same_name = tatooine();
        same_name["id"] = json!(2);
        let response = server.post("/planets").json(&same_name).await;
        response.assert_status(StatusCode::CONFLICT);
        let body: ErrorResponse = response.json();
        assert_eq!(body.code, "ALREADY_EXISTS");

        // Same id, new name
        let mut same_id = tatooine();
        same_id["name"] = json!("Alderaan");
        server
            .post("/planets")
            .json(&same_id)
            .await
            .assert_status(StatusCode::CONFLICT);

        let listed: Vec<PlanetResponse> = server.get("/planets").await.json();
        assert_eq!(listed.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_field_is_bad_request() {
        let server = test_server().await;

        let mut incomplete = tatooine();
        incomplete.as_object_mut().unwrap().remove("diameter");

        let response = server.post("/planets").json(&incomplete).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorResponse = response.json();
        assert_eq!(body.code, "BAD_REQUEST");

        let listed: Vec<Value> = server.get("/planets").await.json();
        assert!(listed.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_enum_value_is_bad_request() {
        let server = test_server().await;

        let mut planet = tatooine();
        planet["climate"] = json!("volcanic");
        server
            .post("/planets")
            .json(&planet)
            .await
            .assert_status(StatusCode::BAD_REQUEST);

        let mut character = luke();
        character["eye_color"] = json!("purple");
        server
            .post("/characters")
            .json(&character)
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let server = test_server().await;

        let response = server
            .post("/vehicles")
            .text("{\"id\": 12, \"name\": ")
            .content_type("application/json")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_planet_keeps_image_url_when_absent() {
        let (server, state) = test_server_with_state().await;
        server.post("/planets").json(&tatooine()).await.assert_status(StatusCode::OK);

        let update = json!({
            "name": "Tatooine",
            "terrain": "desert",
            "climate": "arid",
            "population": 250000,
            "orbital_period": 304,
            "rotation_period": 23,
            "diameter": 10465
        });
        let response = server.put("/planets/1").json(&update).await;
        response.assert_status(StatusCode::OK);
        let planet: PlanetResponse = response.json();
        assert_eq!(planet.population, 250000);
        let raw: Value = response.json();
        assert!(raw.get("image_url").is_none());

        let stored = Planet::find_by_id(1).one(&state.db).await.unwrap().unwrap();
        assert_eq!(
            stored.image_url.as_deref(),
            Some("https://example.test/tatooine.png")
        );
    }

    #[tokio::test]
    async fn test_image_url_is_stored_but_never_returned() {
        let (server, state) = test_server_with_state().await;

        let character = server.post("/characters").json(&luke()).await;
        character.assert_status(StatusCode::OK);
        let raw: Value = character.json();
        assert!(raw.get("image_url").is_none());

        let vehicle = server.post("/vehicles").json(&x_wing()).await;
        vehicle.assert_status(StatusCode::OK);
        let raw: Value = vehicle.json();
        assert!(raw.get("image_url").is_none());

        for path in ["/characters/1", "/vehicles/12"] {
            let raw: Value = server.get(path).await.json();
            assert!(raw.get("image_url").is_none(), "{} leaks image_url", path);
        }

        let stored_character = Character::find_by_id(1).one(&state.db).await.unwrap().unwrap();
        assert_eq!(
            stored_character.image_url.as_deref(),
            Some("https://example.test/luke.png")
        );
        let stored_vehicle = Vehicle::find_by_id(12).one(&state.db).await.unwrap().unwrap();
        assert_eq!(
            stored_vehicle.image_url.as_deref(),
            Some("https://example.test/x-wing.png")
        );

        // Omitting image_url on update keeps the stored value
        let mut update = luke();
        let fields = update.as_object_mut().unwrap();
        fields.remove("id");
        fields.remove("image_url");
        fields.insert("height".to_string(), json!(173));
        server
            .put("/characters/1")
            .json(&update)
            .await
            .assert_status(StatusCode::OK);

        let stored_character = Character::find_by_id(1).one(&state.db).await.unwrap().unwrap();
        assert_eq!(stored_character.height, 173);
        assert_eq!(
            stored_character.image_url.as_deref(),
            Some("https://example.test/luke.png")
        );
    }

    #[tokio::test]
    async fn test_explicit_null_clears_pilot_and_image() {
        let (server, state) = test_server_with_state().await;
        server.post("/vehicles").json(&x_wing()).await.assert_status(StatusCode::OK);

        let update = json!({
            "name": "X-wing",
            "model": "T-65 X-wing",
            "vehicle_class": "starfighter",
            "manufacturer": "Incom Corporation",
            "length": 12,
            "passengers": 0,
            "image_url": null,
            "pilot_id": null
        });
        let response = server.put("/vehicles/12").json(&update).await;
        response.assert_status(StatusCode::OK);
        let vehicle: VehicleResponse = response.json();
        assert_eq!(vehicle.pilot_id, None);

        let stored = Vehicle::find_by_id(12).one(&state.db).await.unwrap().unwrap();
        assert_eq!(stored.pilot_id, None);
        assert_eq!(stored.image_url, None);

        // A new value replaces a cleared one
        let mut reassign = update.clone();
        reassign["pilot_id"] = json!(4);
        let vehicle: VehicleResponse = server.put("/vehicles/12").json(&reassign).await.json();
        assert_eq!(vehicle.pilot_id, Some(4));

        // Planets and characters clear image_url the same way
        server.post("/planets").json(&tatooine()).await.assert_status(StatusCode::OK);
        let mut planet = tatooine();
        planet.as_object_mut().unwrap().remove("id");
        planet["image_url"] = Value::Null;
        server.put("/planets/1").json(&planet).await.assert_status(StatusCode::OK);
        let stored = Planet::find_by_id(1).one(&state.db).await.unwrap().unwrap();
        assert_eq!(stored.image_url, None);

        server.post("/characters").json(&luke()).await.assert_status(StatusCode::OK);
        let mut character = luke();
        character.as_object_mut().unwrap().remove("id");
        character["image_url"] = Value::Null;
        server
            .put("/characters/1")
            .json(&character)
            .await
            .assert_status(StatusCode::OK);
        let stored = Character::find_by_id(1).one(&state.db).await.unwrap().unwrap();
        assert_eq!(stored.image_url, None);
        assert_eq!(stored.planet_id, Some(1));
    }

    #[tokio::test]
    async fn test_invalid_path_id_is_json_bad_request() {
        let server = test_server().await;

        for path in ["/planets/abc", "/characters/1.5", "/vehicles/99999999999"] {
            let response = server.get(path).await;
            response.assert_status(StatusCode::BAD_REQUEST);
            let body: ErrorResponse = response.json();
            assert!(!body.success);
            assert_eq!(body.code, "BAD_REQUEST");
        }

        let response = server.delete("/favorites/users/1/planets/tatooine").await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorResponse = response.json();
        assert_eq!(body.code, "BAD_REQUEST");

        server
            .get("/users/me/favorites")
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_delete_planet() {
        let server = test_server().await;
        server.post("/planets").json(&tatooine()).await.assert_status(StatusCode::OK);

        let response = server.delete("/planets/1").await;
        response.assert_status(StatusCode::OK);
        let body: ApiResponse<String> = response.json();
        assert!(body.success);

        server.get("/planets/1").await.assert_status(StatusCode::NOT_FOUND);
        server.delete("/planets/1").await.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_character_crud() {
        let server = test_server().await;

        let created = server.post("/characters").json(&luke()).await;
        created.assert_status(StatusCode::OK);
        let character: CharacterResponse = created.json();
        assert_eq!(
            character,
            CharacterResponse {
                id: 1,
                name: "Luke Skywalker".to_string(),
                gender: Gender::Male,
                birth_year: "19BBY".to_string(),
                height: 172,
                hair_color: HairColor::Blond,
                eye_color: EyeColor::Blue,
                planet_id: Some(1),
            }
        );

        let update = json!({
            "name": "Luke Skywalker",
            "gender": "male",
            "birth_year": 19,
            "height": 175,
            "hair_color": "blond",
            "eye_color": "blue"
        });
        let response = server.put("/characters/1").json(&update).await;
        response.assert_status(StatusCode::OK);
        let updated: CharacterResponse = response.json();
        assert_eq!(updated.height, 175);
        assert_eq!(updated.birth_year, "19");
        assert_eq!(updated.planet_id, None);

        server.delete("/characters/1").await.assert_status(StatusCode::OK);
        server.get("/characters/1").await.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_character_update_missing_field_leaves_row_unchanged() {
        let server = test_server().await;
        server.post("/characters").json(&luke()).await.assert_status(StatusCode::OK);

        let update = json!({
            "name": "Darth Vader",
            "gender": "male",
            "birth_year": "41.9BBY",
            "hair_color": "n/a",
            "eye_color": "gold"
        });
        server
            .put("/characters/1")
            .json(&update)
            .await
            .assert_status(StatusCode::BAD_REQUEST);

        let character: CharacterResponse = server.get("/characters/1").await.json();
        assert_eq!(character.name, "Luke Skywalker");
        assert_eq!(character.height, 172);
    }

    #[tokio::test]
    async fn test_deleting_planet_keeps_character_reference() {
        let server = test_server().await;
        server.post("/planets").json(&tatooine()).await.assert_status(StatusCode::OK);
        server.post("/characters").json(&luke()).await.assert_status(StatusCode::OK);

        server.delete("/planets/1").await.assert_status(StatusCode::OK);

        let character: CharacterResponse = server.get("/characters/1").await.json();
        assert_eq!(character.planet_id, Some(1));
    }

    #[tokio::test]
    async fn test_vehicle_crud() {
        let server = test_server().await;

        let created = server.post("/vehicles").json(&x_wing()).await;
        created.assert_status(StatusCode::OK);
        let vehicle: VehicleResponse = created.json();
        assert_eq!(
            vehicle,
            VehicleResponse {
                id: 12,
                name: "X-wing".to_string(),
                model: "T-65 X-wing".to_string(),
                vehicle_class: VehicleClass::Starfighter,
                manufacturer: Manufacturer::IncomCorporation,
                length: 12,
                passengers: 0,
                pilot_id: Some(1),
            }
        );

        // pilot_id is left alone when omitted
        let update = json!({
            "name": "X-wing",
            "model": "T-65B X-wing",
            "vehicle_class": "starfighter",
            "manufacturer": "Incom Corporation",
            "length": 13,
            "passengers": 0
        });
        let response = server.put("/vehicles/12").json(&update).await;
        response.assert_status(StatusCode::OK);
        let updated: VehicleResponse = response.json();
        assert_eq!(updated.model, "T-65B X-wing");
        assert_eq!(updated.length, 13);
        assert_eq!(updated.pilot_id, Some(1));

        server.delete("/vehicles/12").await.assert_status(StatusCode::OK);
        server.get("/vehicles/12").await.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_favorite_add_list_delete() {
        let server = test_server().await;

        let added = server
            .post("/favorites/user/1")
            .json(&json!({ "planet_id": 1 }))
            .await;
        added.assert_status(StatusCode::OK);
        let favorite: FavoriteResponse = added.json();
        assert_eq!(favorite.user_id, 1);
        assert_eq!(favorite.planet_id, Some(1));
        assert_eq!(favorite.character_id, None);

        let listed: Vec<FavoriteResponse> = server.get("/users/1/favorites").await.json();
        assert_eq!(listed, vec![favorite]);

        // Other users are unaffected
        let other: Vec<FavoriteResponse> = server.get("/users/2/favorites").await.json();
        assert!(other.is_empty());

        let deleted = server.delete("/favorites/users/1/planets/1").await;
        deleted.assert_status(StatusCode::OK);
        let body: ApiResponse<String> = deleted.json();
        assert!(body.success);

        server
            .delete("/favorites/users/1/planets/1")
            .await
            .assert_status(StatusCode::NOT_FOUND);

        let listed: Vec<FavoriteResponse> = server.get("/users/1/favorites").await.json();
        assert!(listed.is_empty());
    }

    #[tokio::test]
    async fn test_favorite_with_several_targets() {
        let server = test_server().await;

        let added: FavoriteResponse = server
            .post("/favorites/user/2")
            .json(&json!({ "character_id": 1, "vehicle_id": 12 }))
            .await
            .json();
        assert_eq!(added.character_id, Some(1));
        assert_eq!(added.vehicle_id, Some(12));

        server
            .delete("/favorites/users/2/vehicles/12")
            .await
            .assert_status(StatusCode::OK);
        server
            .delete("/favorites/users/2/characters/1")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_favorites_of_missing_user() {
        let server = test_server().await;

        server
            .get("/users/42/favorites")
            .await
            .assert_status(StatusCode::NOT_FOUND);
        server
            .post("/favorites/user/42")
            .json(&json!({ "planet_id": 1 }))
            .await
            .assert_status(StatusCode::NOT_FOUND);
        server
            .delete("/favorites/users/42/characters/1")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}
