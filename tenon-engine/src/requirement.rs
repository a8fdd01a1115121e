//! Member existence oracle.
//!
//! [`MethodRequirement`] is the engine's unit of idempotency: a required
//! member shape compared against a type's own direct members. Members of
//! nested types are never considered. An existing member with a different
//! signature does not block generation of the canonical one; unrelated
//! hand-authored overloads always survive.

use tenon_ir::{TypeDecl, TypeRef};

/// A required method shape: name, ordered parameter types, vararg flag,
/// return type and staticness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodRequirement {
    pub name: String,
    /// Rendered parameter type names, pairwise-compared.
    pub params: Vec<String>,
    pub is_varargs: bool,
    /// Rendered return type name; `None` is void.
    pub return_type: Option<String>,
    pub is_static: bool,
}

impl MethodRequirement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            is_varargs: false,
            return_type: None,
            is_static: false,
        }
    }

    pub fn param(mut self, ty: &TypeRef) -> Self {
        self.params.push(ty.to_string());
        self
    }

    pub fn varargs(mut self) -> Self {
        self.is_varargs = true;
        self
    }

    pub fn returns(mut self, ty: &TypeRef) -> Self {
        self.return_type = Some(ty.to_string());
        self
    }

    pub fn static_(mut self) -> Self {
        self.is_static = true;
        self
    }
}

/// Whether a method satisfying the requirement exists directly on the type.
pub fn has_method(container: &TypeDecl, requirement: &MethodRequirement) -> bool {
    container.methods().any(|m| {
        m.name == requirement.name
            && m.is_varargs == requirement.is_varargs
            && m.is_static == requirement.is_static
            && m.return_type.as_ref().map(|t| t.to_string()) == requirement.return_type
            && m.params.len() == requirement.params.len()
            && m.params
                .iter()
                .zip(&requirement.params)
                .all(|(p, want)| p.ty.to_string() == *want)
    })
}

/// Whether a constructor with the given parameter-type sequence exists.
pub fn has_constructor(container: &TypeDecl, param_types: &[TypeRef]) -> bool {
    container.constructors().any(|c| {
        c.params.len() == param_types.len()
            && c.params
                .iter()
                .zip(param_types)
                .all(|(p, want)| p.ty.to_string() == want.to_string())
    })
}

/// Whether a field with the given name and type exists.
pub fn has_field(container: &TypeDecl, name: &str, ty: &TypeRef) -> bool {
    container
        .fields()
        .any(|f| f.name == name && f.ty.to_string() == ty.to_string())
}
