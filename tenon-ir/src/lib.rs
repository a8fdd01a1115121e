//! Structured source-tree representation for the Tenon builder generator.
//!
//! This crate provides the tree types the synthesis engine consumes and
//! produces: compilation units, type declarations, members and type
//! references, shaped after Java sources. The trees are built by a parsing
//! collaborator and handed back to a printing collaborator; the engine only
//! ever mutates them additively.
//!
//! # Architecture
//!
//! ```text
//! source text → parser (external) → tenon-ir trees → tenon-engine → printer (external)
//! ```
//!
//! The IR is designed to be:
//! - Text-free (bodies are opaque statement lines, preserved byte-for-byte)
//! - Order-preserving (members stay in whatever order an author left them)
//! - Additive (synthesis never removes or rewrites an existing member)

mod decl;
mod markers;
mod typeref;
mod unit;

pub use decl::{ConstructorDecl, FieldDecl, Member, MethodDecl, Param, TypeDecl, TypeKind};
pub use markers::{AdderVariant, FieldMarker, MutatorVariant, TypeMarker, Visibility};
pub use typeref::TypeRef;
pub use unit::{CompilationUnit, Import};
