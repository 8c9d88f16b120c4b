// State management module
// Handles the pet registry, its record types and sample data

pub mod app_state;
pub mod pet;
pub mod seed;

pub use app_state::AppState;
pub use pet::{NewPet, Pet, PetFilter, PetId, PetUpdate, REQUIRED_FIELDS};

use std::sync::Arc;
use tokio::sync::RwLock;

/// State handle shared between request handlers
pub type SharedState = Arc<RwLock<AppState>>;
