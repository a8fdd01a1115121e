//! Type references.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A reference to a type, possibly parameterized.
///
/// `List<String>` is `TypeRef { name: "List", args: [TypeRef("String")] }`.
/// The name may be simple or dotted (`java.util.List`); signature matching
/// compares rendered forms, so a simple and a qualified reference to the
/// same type are distinct members as far as the engine is concerned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeRef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<TypeRef>,
}

impl TypeRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    pub fn parameterized(name: impl Into<String>, args: Vec<TypeRef>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }

    /// The unqualified name (`java.util.List` -> `List`).
    pub fn bare_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }

    /// Whether the reference carries type arguments.
    pub fn is_parameterized(&self) -> bool {
        !self.args.is_empty()
    }

    /// The first type argument, defaulting to `Object` for raw references.
    pub fn item_type(&self) -> TypeRef {
        self.args
            .first()
            .cloned()
            .unwrap_or_else(|| TypeRef::new("Object"))
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.args.is_empty() {
            let args = self
                .args
                .iter()
                .map(|a| a.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            write!(f, "<{}>", args)?;
        }
        Ok(())
    }
}
