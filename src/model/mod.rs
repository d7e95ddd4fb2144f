//! CODA matrix model - entities, relationship variants, and the aggregate.
//!
//! # Components
//!
//! - `Requirement` / `Characteristic` - validated value objects forming
//!   the two axes of the model
//! - `Relationship` - the closed family of merit curves
//!   (null/maximise/minimise/optimise)
//! - `RelationshipGrid` - dense grid resized eagerly on every append
//! - `CodaModel` - the aggregate owning both collections and the grid,
//!   with the satisfaction/merit aggregation

mod characteristic;
mod coda;
mod grid;
mod relationship;
mod requirement;

pub use characteristic::{Characteristic, Limits};
pub use coda::{CharacteristicId, CharacteristicRef, CodaModel, RequirementId, RequirementRef};
pub use grid::RelationshipGrid;
pub use relationship::{Relationship, RelationshipKind};
pub use requirement::Requirement;
