//! Visibility and marker vocabulary.

use serde::{Deserialize, Serialize};

/// Member visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    Public,
    Protected,
    PackagePrivate,
    Private,
}

impl Visibility {
    pub fn is_private(&self) -> bool {
        matches!(self, Visibility::Private)
    }
}

/// Parameter shapes a mutator can take.
///
/// Mutators and adders share a resolution algorithm but not a vocabulary:
/// a mutator assigns the whole field, so the single-item shape does not
/// exist for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MutatorVariant {
    /// Suppresses mutator generation for the field.
    None,
    /// The field's declared type, assigned directly.
    Object,
    /// Vararg of the element type.
    Vararg,
    /// Stream of the element type, reduced into the field.
    Stream,
    /// Generic collection of the element type.
    Collection,
}

/// Parameter shapes an adder can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdderVariant {
    /// Suppresses adder generation for the field.
    None,
    /// A single element.
    Item,
    /// Vararg of the element type.
    Vararg,
    /// Stream of the element type.
    Stream,
    /// Generic collection of the element type.
    Collection,
}

/// Per-field marker annotations consumed by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldMarker {
    /// Exclude the field from all generation.
    Ignore,
    /// Custom name for the field's mutator.
    CustomName(String),
    /// Explicit adder variants (and optionally a custom adder base name).
    GenerateAdder {
        variants: Vec<AdderVariant>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
    /// Explicit mutator variants for a sequence field, with an optional
    /// custom mutator name.
    GenerateListMutator {
        variants: Vec<MutatorVariant>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
}

/// Per-type marker annotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeMarker {
    /// The type is explicitly manipulable after construction.
    Mutable,
    /// The type is explicitly fixed after construction.
    Immutable,
}
