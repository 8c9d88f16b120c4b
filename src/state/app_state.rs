// Application state management
// Owns the pet collection and the identifier counter

use crate::state::pet::{NewPet, Pet, PetFilter, PetId, PetUpdate};

/// Main application state
/// Holds every registered pet in insertion order plus the next id to assign
#[derive(Debug, Clone)]
pub struct AppState {
    /// Registered pets, in the order they were added
    pets: Vec<Pet>,
    /// Identifier handed to the next created pet; only ever increases
    next_id: PetId,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            pets: Vec::new(),
            next_id: 1,
        }
    }
}

impl AppState {
    /// Create an empty state; the first pet gets id 1
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a state holding the given pets
    /// The counter starts just past the highest existing id
    pub fn with_pets(pets: Vec<Pet>) -> Self {
        let next_id = pets.iter().map(|p| p.id).max().map_or(1, |max| max + 1);
        Self { pets, next_id }
    }

    /// Create a state pre-populated with the sample registrations
    pub fn with_sample_data() -> Self {
        Self::with_pets(super::seed::sample_pets())
    }

    /// Get all pets matching `filter`, in insertion order
    pub fn pets_list(&self, filter: &PetFilter) -> Vec<&Pet> {
        self.pets.iter().filter(|pet| filter.matches(pet)).collect()
    }

    /// Get a pet by ID
    pub fn get_pet(&self, id: PetId) -> Option<&Pet> {
        self.pets.iter().find(|pet| pet.id == id)
    }

    /// Register a new pet
    /// Returns `None` (and leaves the counter untouched) if a required field is missing
    pub fn create_pet(&mut self, new_pet: NewPet, registration_date: String) -> Option<Pet> {
        let pet = new_pet.into_pet(self.next_id, registration_date)?;
        self.next_id += 1;
        self.pets.push(pet.clone());
        Some(pet)
    }

    /// Merge `update` into the pet with the given ID
    /// Returns the merged pet, or `None` if no pet has that ID
    pub fn update_pet(&mut self, id: PetId, update: PetUpdate) -> Option<&Pet> {
        let pet = self.pets.iter_mut().find(|pet| pet.id == id)?;
        update.apply_to(pet);
        Some(&*pet)
    }

    /// Remove a pet from the registry
    /// Returns the removed pet if it existed
    pub fn remove_pet(&mut self, id: PetId) -> Option<Pet> {
        let index = self.pets.iter().position(|pet| pet.id == id)?;
        Some(self.pets.remove(index))
    }

    /// Get the number of registered pets
    pub fn pet_count(&self) -> usize {
        self.pets.len()
    }

    /// Identifier the next created pet will receive
    pub fn next_id(&self) -> PetId {
        self.next_id
    }
}
