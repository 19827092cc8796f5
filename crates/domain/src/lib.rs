//! Domain layer for Productive Panda
//!
//! Contains the mood and task vocabulary: sentiment results, mood categories,
//! thresholds, tasks and domain errors. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
