//! Core engine types: combatant ids, errors, RNG.

mod error;
mod id;
mod rng;

pub use error::EngineError;
pub use id::CharacterId;
pub use rng::GameRng;
