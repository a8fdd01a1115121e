//! Core utilities for the Tenon builder generator.
//!
//! Shared naming and case helpers used across the synthesis pipeline.

mod naming;

pub use naming::{JAVA_NAMING, NamingConvention, capitalize, decapitalize, singularize};
