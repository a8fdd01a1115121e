//! Failure taxonomy of the synthesis engine.

use miette::Diagnostic;
use thiserror::Error;

/// Result type for synthesis operations.
pub type Result<T> = std::result::Result<T, SynthesisError>;

/// Immediate, unrecoverable-at-this-call failures.
///
/// None of these are retried internally; partial mutation applied to a tree
/// before a failure is unspecified, so callers should operate on a copy and
/// commit only on full success.
#[derive(Debug, Error, Diagnostic)]
pub enum SynthesisError {
    #[error("product class '{name}' not found in the supplied tree")]
    #[diagnostic(
        code(tenon::product_class_not_found),
        help("the product type name must be non-blank and declared in the product unit")
    )]
    ProductClassNotFound { name: String },

    #[error("no usable constructor on product class '{product}'")]
    #[diagnostic(
        code(tenon::no_constructor_found),
        help("every declared constructor is private or marked ignore; unmark one or make one non-private")
    )]
    NoConstructorFound { product: String },

    #[error("builder field '{field}' already exists with type '{found}', expected '{expected}'")]
    #[diagnostic(
        code(tenon::product_field_has_wrong_type),
        help("rename the existing field or change its type to the product type")
    )]
    ProductFieldHasWrongType {
        field: String,
        expected: String,
        found: String,
    },

    #[error("'{name}' is not a record")]
    #[diagnostic(
        code(tenon::not_a_record),
        help("the record synthesis path only accepts fixed-shape record declarations")
    )]
    NotARecord { name: String },
}
