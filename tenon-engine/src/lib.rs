//! Builder synthesis and merge engine.
//!
//! Given a structured description of a "product" type (its fields,
//! constructors, visibility and markers) and, optionally, a pre-existing
//! "builder" description, this crate produces a builder description with a
//! holder field, delegating constructors or static factories, mutators,
//! adders for sequence fields, and a terminal build method. Every
//! operation re-scans the target before acting, so re-running the
//! synthesis against its own output is a no-op except for gaps a user has
//! not hand-written.
//!
//! # Module Organization
//!
//! - [`config`] - Policy value objects (naming, strategy, placement, variants)
//! - [`requirement`] - Member existence oracle
//! - [`capability`] - Sequence/scalar classification of field types
//! - [`variants`] - Layered mutator/adder variant resolution
//! - [`sort`] - Canonical member ordering
//! - [`imports`] - Namespace-import propagation
//! - [`synthesis`] - The builder synthesis engine
//! - [`accessors`] - Read-accessor generation on the product type
//! - [`record`] - Reduced synthesis path for record products

pub mod accessors;
pub mod capability;
pub mod config;
pub mod error;
pub mod imports;
pub mod record;
pub mod requirement;
pub mod sort;
pub mod synthesis;
pub mod variants;

pub use capability::{Capability, CapabilityResolver, ImportTableResolver, SequenceKind};
pub use config::{
    AccessorConfig, BuilderPlacement, CreationStrategy, EngineConfig, MutabilityPolicy,
    NamingPolicy, VariantDefaults,
};
pub use error::{Result, SynthesisError};
pub use record::RecordSynthesis;
pub use synthesis::{BuilderSynthesis, SynthesisOutcome};
