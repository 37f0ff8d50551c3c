//! Domain layer for CityBrief
//!
//! Contains the value objects and entities that flow through one lookup run:
//! the location query, the resolved coordinates, the weather report and the
//! nearby places. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
