//! Collaborator ports.
//!
//! The engine works entirely on trees; turning raw source text into a tree
//! and back is somebody else's job. These traits are that somebody's
//! interface, so the pipeline can be tested against in-memory
//! implementations and wired to a real parser/printer elsewhere.

use eyre::Result;
use tenon_ir::CompilationUnit;

/// Turns raw source text into a structured tree.
pub trait SourceParser {
    fn parse(&self, source: &str) -> Result<CompilationUnit>;
}

/// Turns a structured tree back into source text.
pub trait SourcePrinter {
    fn print(&self, unit: &CompilationUnit) -> Result<String>;
}
