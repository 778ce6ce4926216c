//! Client-side data shapes: schema-agnostic records plus the few request bodies the client
//! assembles itself.

pub mod dataset;
pub mod job;
pub mod lookup;
pub mod record;
pub mod registration;

pub use dataset::*;
pub use job::*;
pub use lookup::*;
pub use record::*;
pub use registration::*;
