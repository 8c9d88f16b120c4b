//! Pet registry API handlers
//!
//! Contains HTTP request handlers for pet CRUD operations.

use crate::api::response::ApiResponse;
use crate::error::AppError;
use crate::state::{NewPet, Pet, PetFilter, PetId, PetUpdate, SharedState};
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::Json,
};
use chrono::Utc;
use tracing::{debug, info};

/// Message returned after a successful registration
pub const CREATED_MESSAGE: &str = "ลงทะเบียนสัตว์สำเร็จ";
/// Message returned after a successful update
pub const UPDATED_MESSAGE: &str = "อัพเดทข้อมูลสำเร็จ";
/// Message returned after a successful delete
pub const DELETED_MESSAGE: &str = "ลบข้อมูลสำเร็จ";

/// Parse a path segment into a pet ID
///
/// Reads the leading integer the way a lenient integer parse does: leading
/// whitespace, an optional sign, an optional `0x` prefix, then as many
/// digits as follow. Trailing text is ignored, so `1abc` and `1.5` name pet 1.
/// A segment with no leading digits or a negative value cannot name a pet,
/// so it is reported as not found rather than as a bad request.
fn parse_pet_id(raw: &str) -> Result<PetId, AppError> {
    let not_found = || AppError::PetNotFound(raw.to_string());

    let trimmed = raw.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let (radix, body) = match unsigned.get(..2) {
        Some("0x") | Some("0X") => (16, &unsigned[2..]),
        _ => (10, unsigned),
    };

    let end = body
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(body.len());
    let digits = &body[..end];
    if digits.is_empty() {
        return Err(not_found());
    }

    let id = PetId::from_str_radix(digits, radix).map_err(|_| not_found())?;
    if negative && id != 0 {
        return Err(not_found());
    }
    Ok(id)
}

/// Unwrap a JSON body, treating a request without a JSON content type as `{}`
///
/// Bodies that do claim to be JSON but fail to decode are still errors.
fn body_or_default<T: Default>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(T::default()),
        Err(rejection) => Err(rejection.into()),
    }
}

/// Today's date (UTC) as `YYYY-MM-DD`
fn today() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

/// GET /api/pets - List pets, optionally filtered by species and owner
pub async fn list_pets(
    State(state): State<SharedState>,
    query: Result<Query<PetFilter>, QueryRejection>,
) -> Result<Json<ApiResponse<Vec<Pet>>>, AppError> {
    let Query(filter) = query?;
    let state = state.read().await;
    let pets: Vec<Pet> = state.pets_list(&filter).into_iter().cloned().collect();

    debug!(
        species = ?filter.species,
        owner_id = ?filter.owner_id,
        count = pets.len(),
        "Listed pets"
    );

    Ok(Json(ApiResponse::list(pets)))
}

/// GET /api/pets/:id - Get a specific pet
pub async fn get_pet(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Pet>>, AppError> {
    let pet_id = parse_pet_id(&id)?;
    let state = state.read().await;
    let pet = state
        .get_pet(pet_id)
        .ok_or_else(|| AppError::PetNotFound(id.clone()))?;

    debug!(pet_id, "Fetched pet");
    Ok(Json(ApiResponse::success(pet.clone())))
}

/// POST /api/pets - Register a new pet
pub async fn create_pet(
    State(state): State<SharedState>,
    payload: Result<Json<NewPet>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<Pet>>), AppError> {
    let new_pet = body_or_default(payload)?;

    let mut state = state.write().await;
    let pet = state
        .create_pet(new_pet, today())
        .ok_or(AppError::MissingRequiredFields)?;

    info!(pet_id = pet.id, species = %pet.species, owner_id = %pet.owner_id, "Registered pet");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(pet).with_message(CREATED_MESSAGE)),
    ))
}

/// PUT /api/pets/:id - Merge the supplied fields into a pet
///
/// `id` and `registrationDate` are never changed, whatever the body says.
pub async fn update_pet(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    payload: Result<Json<PetUpdate>, JsonRejection>,
) -> Result<Json<ApiResponse<Pet>>, AppError> {
    let pet_id = parse_pet_id(&id)?;
    let update = body_or_default(payload)?;

    let mut state = state.write().await;
    let pet = state
        .update_pet(pet_id, update)
        .ok_or_else(|| AppError::PetNotFound(id.clone()))?;

    info!(pet_id, "Updated pet");
    Ok(Json(
        ApiResponse::success(pet.clone()).with_message(UPDATED_MESSAGE),
    ))
}

/// DELETE /api/pets/:id - Remove a pet, returning its last state
pub async fn delete_pet(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Pet>>, AppError> {
    let pet_id = parse_pet_id(&id)?;
    let mut state = state.write().await;
    let pet = state
        .remove_pet(pet_id)
        .ok_or_else(|| AppError::PetNotFound(id.clone()))?;

    info!(pet_id, "Deleted pet");
    Ok(Json(ApiResponse::success(pet).with_message(DELETED_MESSAGE)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    fn create_test_state() -> SharedState {
        Arc::new(RwLock::new(AppState::with_sample_data()))
    }

    fn complete_pet() -> NewPet {
        NewPet {
            name: Some("A".to_string()),
            species: Some("B".to_string()),
            owner_id: Some("O1".to_string()),
            owner_name: Some("N".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_parse_pet_id() {
        assert_eq!(parse_pet_id("42").unwrap(), 42);
        assert_eq!(parse_pet_id("+1").unwrap(), 1);
        assert_eq!(parse_pet_id(" 1").unwrap(), 1);
        assert_eq!(parse_pet_id("0x1f").unwrap(), 31);
    }

    #[test]
    fn test_parse_pet_id_reads_leading_digits() {
        assert_eq!(parse_pet_id("1abc").unwrap(), 1);
        assert_eq!(parse_pet_id("1.5").unwrap(), 1);
        assert_eq!(parse_pet_id("12 34").unwrap(), 12);
    }

    #[test]
    fn test_parse_pet_id_without_digits_is_not_found() {
        assert!(matches!(
            parse_pet_id("abc"),
            Err(AppError::PetNotFound(raw)) if raw == "abc"
        ));
        assert!(parse_pet_id("").is_err());
        assert!(parse_pet_id("-").is_err());
        assert!(parse_pet_id("0x").is_err());
        assert!(parse_pet_id("-1").is_err());
        assert!(parse_pet_id("99999999999999999999999").is_err());
    }

    #[tokio::test]
    async fn test_list_pets_unfiltered() {
        let state = create_test_state();
        let Json(response) = list_pets(State(state), Ok(Query(PetFilter::default())))
            .await
            .unwrap();
        assert!(response.success);
        assert_eq!(response.count, Some(2));
        assert_eq!(response.data.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_list_pets_no_match_is_empty() {
        let state = create_test_state();
        let filter = PetFilter {
            species: Some("ปลา".to_string()),
            owner_id: None,
        };
        let Json(response) = list_pets(State(state), Ok(Query(filter))).await.unwrap();
        assert_eq!(response.count, Some(0));
        assert!(response.data.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_pet() {
        let state = create_test_state();
        let Json(response) = get_pet(State(state), Path("2".to_string()))
            .await
            .unwrap();
        assert_eq!(response.data.unwrap().name, "เหมียว");
        assert!(response.message.is_none());
    }

    #[tokio::test]
    async fn test_get_pet_not_found() {
        let state = create_test_state();
        for id in ["9999", "abc"] {
            let result = get_pet(State(state.clone()), Path(id.to_string())).await;
            match result.unwrap_err() {
                AppError::PetNotFound(_) => {
                    // Expected error
                }
                other => panic!("Expected PetNotFound error, got: {:?}", other),
            }
        }
    }

    #[tokio::test]
    async fn test_create_pet() {
        let state = create_test_state();
        let (status, Json(response)) = create_pet(State(state.clone()), Ok(Json(complete_pet())))
            .await
            .unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(response.message.as_deref(), Some(CREATED_MESSAGE));
        let pet = response.data.unwrap();
        assert_eq!(pet.id, 3);
        assert_eq!(pet.breed, "");
        assert_eq!(pet.age, 0);
        assert_eq!(pet.registration_date, today());
        assert_eq!(state.read().await.pet_count(), 3);
    }

    #[tokio::test]
    async fn test_create_pet_missing_required_field() {
        let state = create_test_state();
        let mut incomplete = complete_pet();
        incomplete.species = Some(String::new());

        let result = create_pet(State(state.clone()), Ok(Json(incomplete))).await;
        assert!(matches!(result, Err(AppError::MissingRequiredFields)));
        assert_eq!(state.read().await.pet_count(), 2);
        assert_eq!(state.read().await.next_id(), 3);
    }

    #[tokio::test]
    async fn test_update_pet_keeps_unsent_fields() {
        let state = create_test_state();
        let update = PetUpdate {
            age: Some(5),
            ..Default::default()
        };
        let Json(response) = update_pet(State(state), Path("1".to_string()), Ok(Json(update)))
            .await
            .unwrap();

        let pet = response.data.unwrap();
        assert_eq!(pet.id, 1);
        assert_eq!(pet.age, 5);
        assert_eq!(pet.name, "มะลิ");
        assert_eq!(pet.registration_date, "2022-03-15");
        assert_eq!(response.message.as_deref(), Some(UPDATED_MESSAGE));
    }

    #[tokio::test]
    async fn test_update_pet_not_found() {
        let state = create_test_state();
        let result = update_pet(
            State(state),
            Path("9999".to_string()),
            Ok(Json(PetUpdate::default())),
        )
        .await;
        assert!(matches!(result, Err(AppError::PetNotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_pet() {
        let state = create_test_state();
        let Json(response) = delete_pet(State(state.clone()), Path("1".to_string()))
            .await
            .unwrap();
        assert_eq!(response.data.unwrap().owner_id, "O001");
        assert_eq!(response.message.as_deref(), Some(DELETED_MESSAGE));

        let result = get_pet(State(state.clone()), Path("1".to_string())).await;
        assert!(matches!(result, Err(AppError::PetNotFound(_))));

        let result = delete_pet(State(state.clone()), Path("1".to_string())).await;
        assert!(matches!(result, Err(AppError::PetNotFound(_))));
        assert_eq!(state.read().await.pet_count(), 1);
    }
}
