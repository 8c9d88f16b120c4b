//! Pet record types
//!
//! Defines the registered pet record and the payloads used to create and
//! update one. Field names are serialized in camelCase to match the API.

use serde::{Deserialize, Serialize};

/// Unique identifier for a pet, assigned by the store
pub type PetId = u64;

/// Fields that must be present (and non-empty) when registering a pet
pub const REQUIRED_FIELDS: [&str; 4] = ["name", "species", "ownerId", "ownerName"];

/// A registered pet
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    /// Server-assigned identifier, never changes after creation
    pub id: PetId,
    /// Pet name
    pub name: String,
    /// Species (matched case-insensitively when filtering)
    pub species: String,
    /// Breed, empty when unknown
    pub breed: String,
    /// Age in years, 0 when unknown
    pub age: i64,
    /// Coat color, empty when unknown
    pub color: String,
    /// Owner identifier (matched exactly when filtering)
    pub owner_id: String,
    /// Owner display name
    pub owner_name: String,
    /// Registration date as `YYYY-MM-DD`, set once at creation
    pub registration_date: String,
}

/// Body of a create request
///
/// Every field is optional at the wire level so that a missing required
/// field is reported as a validation failure rather than a decode error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPet {
    /// Pet name
    pub name: Option<String>,
    /// Species
    pub species: Option<String>,
    /// Breed
    pub breed: Option<String>,
    /// Age in years
    pub age: Option<i64>,
    /// Coat color
    pub color: Option<String>,
    /// Owner identifier
    pub owner_id: Option<String>,
    /// Owner display name
    pub owner_name: Option<String>,
}

impl NewPet {
    /// Build the stored record, or `None` if a required field is absent or empty
    ///
    /// Optional fields fall back to empty strings and an age of 0.
    pub fn into_pet(self, id: PetId, registration_date: String) -> Option<Pet> {
        let NewPet {
            name,
            species,
            breed,
            age,
            color,
            owner_id,
            owner_name,
        } = self;

        Some(Pet {
            id,
            name: non_empty(name)?,
            species: non_empty(species)?,
            breed: breed.unwrap_or_default(),
            age: age.unwrap_or(0),
            color: color.unwrap_or_default(),
            owner_id: non_empty(owner_id)?,
            owner_name: non_empty(owner_name)?,
            registration_date,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Body of an update request
///
/// `None` means the client did not supply the field (absent or `null`).
/// `id` and `registrationDate` have no counterpart here, so values sent
/// for them are dropped during deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetUpdate {
    /// Pet name
    pub name: Option<String>,
    /// Species
    pub species: Option<String>,
    /// Breed
    pub breed: Option<String>,
    /// Age in years
    pub age: Option<i64>,
    /// Coat color
    pub color: Option<String>,
    /// Owner identifier
    pub owner_id: Option<String>,
    /// Owner display name
    pub owner_name: Option<String>,
}

impl PetUpdate {
    /// Overwrite every supplied field on `pet`, keeping the rest
    pub fn apply_to(self, pet: &mut Pet) {
        if let Some(name) = self.name {
            pet.name = name;
        }
        if let Some(species) = self.species {
            pet.species = species;
        }
        if let Some(breed) = self.breed {
            pet.breed = breed;
        }
        if let Some(age) = self.age {
            pet.age = age;
        }
        if let Some(color) = self.color {
            pet.color = color;
        }
        if let Some(owner_id) = self.owner_id {
            pet.owner_id = owner_id;
        }
        if let Some(owner_name) = self.owner_name {
            pet.owner_name = owner_name;
        }
    }
}

/// Query filters for listing pets
///
/// Empty values are treated as "no filter", so `?species=` matches every pet.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetFilter {
    /// Species, compared case-insensitively
    pub species: Option<String>,
    /// Owner identifier, compared exactly
    pub owner_id: Option<String>,
}

impl PetFilter {
    /// Whether `pet` satisfies every non-empty filter
    pub fn matches(&self, pet: &Pet) -> bool {
        let species_ok = match self.species.as_deref() {
            Some(species) if !species.is_empty() => {
                pet.species.to_lowercase() == species.to_lowercase()
            }
            _ => true,
        };
        let owner_ok = match self.owner_id.as_deref() {
            Some(owner_id) if !owner_id.is_empty() => pet.owner_id == owner_id,
            _ => true,
        };
        species_ok && owner_ok
    }
}
