// Domain layer: the record type and the bounded collection. No I/O here.

pub mod collection;
pub mod model;

pub use collection::{Collection, CollectionStatus, CAPACITY};
pub use model::{Record, KIND_MAX_BYTES, NAME_MAX_BYTES};
