//! Builder synthesis pipeline for structured source trees.
//!
//! This crate ties the synthesis engine to its external collaborators:
//! a parsing collaborator hands in product (and optionally builder) trees,
//! the fixed pipeline drives the engine's idempotent operations in order,
//! and the canonicalized trees go back out to a printing collaborator.
//!
//! ```text
//! source text → SourceParser (external) → run_synthesis → SourcePrinter (external)
//! ```
//!
//! Parsing and printing are declared here only at their interface; this
//! crate never touches text itself.

mod pipeline;
mod ports;

pub use pipeline::{
    BatchFailure, BatchReport, SynthesisRequest, run_batch, run_record_synthesis, run_synthesis,
};
pub use ports::{SourceParser, SourcePrinter};

pub use tenon_engine::{
    AccessorConfig, BuilderPlacement, CapabilityResolver, CreationStrategy, EngineConfig,
    ImportTableResolver, MutabilityPolicy, NamingPolicy, SynthesisError, SynthesisOutcome,
    VariantDefaults, accessors::add_accessors,
};
pub use tenon_ir::{CompilationUnit, TypeDecl};
