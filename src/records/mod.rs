//! Importer contract - plain records a tabular source must supply.
//!
//! Spreadsheet (or any other) ingestion lives outside this crate; an
//! importer's job ends at producing these records. `ModelDefinition`
//! assembles them into a validated [`CodaModel`], so every model
//! invariant is enforced at the boundary rather than trusted from the
//! source.

mod definition;

pub use definition::{
    CharacteristicRecord, CorrelationInput, ModelDefinition, RelationshipRecord,
    RequirementRecord,
};
