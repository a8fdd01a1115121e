//! Type declarations and their members.

use serde::{Deserialize, Serialize};

use crate::{
    markers::{AdderVariant, FieldMarker, MutatorVariant, TypeMarker, Visibility},
    typeref::TypeRef,
};

/// A parameter of a constructor, method or record component list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Param {
    pub name: String,
    pub ty: TypeRef,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// A field declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDecl {
    pub name: String,
    pub ty: TypeRef,
    pub visibility: Visibility,
    pub is_static: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<FieldMarker>,
    /// Opaque initializer expression, preserved byte-for-byte.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initializer: Option<String>,
}

impl FieldDecl {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            visibility: Visibility::Private,
            is_static: false,
            markers: Vec::new(),
            initializer: None,
        }
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn static_(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn marker(mut self, marker: FieldMarker) -> Self {
        self.markers.push(marker);
        self
    }

    pub fn initializer(mut self, expr: impl Into<String>) -> Self {
        self.initializer = Some(expr.into());
        self
    }

    pub fn is_ignored(&self) -> bool {
        self.markers.iter().any(|m| matches!(m, FieldMarker::Ignore))
    }

    /// A per-field mutator name override, if any.
    ///
    /// `CustomName` wins over a name carried by `GenerateListMutator`.
    pub fn custom_mutator_name(&self) -> Option<&str> {
        self.markers.iter().find_map(|m| match m {
            FieldMarker::CustomName(name) => Some(name.as_str()),
            _ => None,
        }).or_else(|| {
            self.markers.iter().find_map(|m| match m {
                FieldMarker::GenerateListMutator { name: Some(name), .. } => Some(name.as_str()),
                _ => None,
            })
        })
    }

    /// A per-field adder name override, if any.
    pub fn custom_adder_name(&self) -> Option<&str> {
        self.markers.iter().find_map(|m| match m {
            FieldMarker::GenerateAdder { name: Some(name), .. } => Some(name.as_str()),
            _ => None,
        })
    }

    /// Explicit per-field mutator variants, if any.
    pub fn mutator_override(&self) -> Option<&[MutatorVariant]> {
        self.markers.iter().find_map(|m| match m {
            FieldMarker::GenerateListMutator { variants, .. } => Some(variants.as_slice()),
            _ => None,
        })
    }

    /// Explicit per-field adder variants, if any.
    pub fn adder_override(&self) -> Option<&[AdderVariant]> {
        self.markers.iter().find_map(|m| match m {
            FieldMarker::GenerateAdder { variants, .. } => Some(variants.as_slice()),
            _ => None,
        })
    }

    /// Whether any marker explicitly requests generation for this field.
    pub fn has_generation_marker(&self) -> bool {
        self.markers.iter().any(|m| {
            matches!(
                m,
                FieldMarker::CustomName(_)
                    | FieldMarker::GenerateAdder { .. }
                    | FieldMarker::GenerateListMutator { .. }
            )
        })
    }
}

/// A constructor declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstructorDecl {
    pub params: Vec<Param>,
    pub visibility: Visibility,
    /// The `ignore` marker: excluded from builder derivation.
    pub is_ignored: bool,
    /// Opaque statement lines, preserved byte-for-byte.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub body: Vec<String>,
}

impl ConstructorDecl {
    pub fn new() -> Self {
        Self {
            params: Vec::new(),
            visibility: Visibility::Public,
            is_ignored: false,
            body: Vec::new(),
        }
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn ignored(mut self) -> Self {
        self.is_ignored = true;
        self
    }

    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    pub fn param_types(&self) -> Vec<&TypeRef> {
        self.params.iter().map(|p| &p.ty).collect()
    }
}

impl Default for ConstructorDecl {
    fn default() -> Self {
        Self::new()
    }
}

/// A method declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodDecl {
    pub name: String,
    pub params: Vec<Param>,
    /// Whether the last parameter is a vararg of its declared type.
    pub is_varargs: bool,
    /// `None` is void.
    pub return_type: Option<TypeRef>,
    pub visibility: Visibility,
    pub is_static: bool,
    /// Opaque statement lines, preserved byte-for-byte.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub body: Vec<String>,
}

impl MethodDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            is_varargs: false,
            return_type: None,
            visibility: Visibility::Public,
            is_static: false,
            body: Vec::new(),
        }
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn varargs(mut self) -> Self {
        self.is_varargs = true;
        self
    }

    pub fn returns(mut self, ty: TypeRef) -> Self {
        self.return_type = Some(ty);
        self
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn static_(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }
}

/// A member of a type declaration, in authored order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Member {
    Field(FieldDecl),
    Constructor(ConstructorDecl),
    Method(MethodDecl),
    Type(TypeDecl),
}

/// Whether a declaration is an open class or a fixed-shape record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeKind {
    Class,
    Record,
}

/// A type declaration.
///
/// Members are kept in whatever order an author or a prior synthesis left
/// them; the engine only appends and reorders via the canonical sorter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDecl {
    pub name: String,
    pub visibility: Visibility,
    pub kind: TypeKind,
    /// Meaningful only for nested declarations.
    pub is_static: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<TypeMarker>,
    /// Record components; empty for classes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<Param>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<Member>,
}

impl TypeDecl {
    pub fn class(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Public,
            kind: TypeKind::Class,
            is_static: false,
            markers: Vec::new(),
            components: Vec::new(),
            members: Vec::new(),
        }
    }

    pub fn record(name: impl Into<String>, components: Vec<Param>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Public,
            kind: TypeKind::Record,
            is_static: false,
            markers: Vec::new(),
            components,
            members: Vec::new(),
        }
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn static_(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn marker(mut self, marker: TypeMarker) -> Self {
        self.markers.push(marker);
        self
    }

    pub fn member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    pub fn field(self, field: FieldDecl) -> Self {
        self.member(Member::Field(field))
    }

    pub fn constructor(self, ctor: ConstructorDecl) -> Self {
        self.member(Member::Constructor(ctor))
    }

    pub fn method(self, method: MethodDecl) -> Self {
        self.member(Member::Method(method))
    }

    /// A reference to this type by its simple name.
    pub fn type_ref(&self) -> TypeRef {
        TypeRef::new(self.name.clone())
    }

    /// Effective mutability: an explicit marker wins, otherwise the
    /// caller-supplied default applies.
    pub fn is_mutable(&self, default: bool) -> bool {
        for marker in &self.markers {
            match marker {
                TypeMarker::Mutable => return true,
                TypeMarker::Immutable => return false,
            }
        }
        default
    }

    pub fn fields(&self) -> impl Iterator<Item = &FieldDecl> {
        self.members.iter().filter_map(|m| match m {
            Member::Field(f) => Some(f),
            _ => None,
        })
    }

    pub fn constructors(&self) -> impl Iterator<Item = &ConstructorDecl> {
        self.members.iter().filter_map(|m| match m {
            Member::Constructor(c) => Some(c),
            _ => None,
        })
    }

    pub fn methods(&self) -> impl Iterator<Item = &MethodDecl> {
        self.members.iter().filter_map(|m| match m {
            Member::Method(f) => Some(f),
            _ => None,
        })
    }

    pub fn nested_types(&self) -> impl Iterator<Item = &TypeDecl> {
        self.members.iter().filter_map(|m| match m {
            Member::Type(t) => Some(t),
            _ => None,
        })
    }

    pub fn field_named(&self, name: &str) -> Option<&FieldDecl> {
        self.fields().find(|f| f.name == name)
    }

    pub fn nested_type(&self, name: &str) -> Option<&TypeDecl> {
        self.nested_types().find(|t| t.name == name)
    }

    pub fn nested_type_mut(&mut self, name: &str) -> Option<&mut TypeDecl> {
        self.members.iter_mut().find_map(|m| match m {
            Member::Type(t) if t.name == name => Some(t),
            _ => None,
        })
    }

    /// Attach a nested type at a stable position (end of the member list)
    /// and return a handle to it.
    pub fn attach_nested(&mut self, nested: TypeDecl) -> &mut TypeDecl {
        self.members.push(Member::Type(nested));
        match self.members.last_mut() {
            Some(Member::Type(t)) => t,
            _ => unreachable!("just pushed a nested type"),
        }
    }

    pub fn add_field(&mut self, field: FieldDecl) {
        self.members.push(Member::Field(field));
    }

    pub fn add_constructor(&mut self, ctor: ConstructorDecl) {
        self.members.push(Member::Constructor(ctor));
    }

    pub fn add_method(&mut self, method: MethodDecl) {
        self.members.push(Member::Method(method));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(item: &str) -> TypeRef {
        TypeRef::parameterized("List", vec![TypeRef::new(item)])
    }

    #[test]
    fn test_field_marker_lookups() {
        let field = FieldDecl::new("items", list_of("String"))
            .marker(FieldMarker::CustomName("withAll".to_string()))
            .marker(FieldMarker::GenerateAdder {
                variants: vec![AdderVariant::Item, AdderVariant::Stream],
                name: None,
            });
        assert_eq!(field.custom_mutator_name(), Some("withAll"));
        assert_eq!(
            field.adder_override(),
            Some([AdderVariant::Item, AdderVariant::Stream].as_slice())
        );
        assert!(field.has_generation_marker());
        assert!(!field.is_ignored());
    }

    #[test]
    fn test_list_mutator_name_fallback() {
        let field = FieldDecl::new("items", list_of("String")).marker(
            FieldMarker::GenerateListMutator {
                variants: vec![MutatorVariant::Object],
                name: Some("replaceItems".to_string()),
            },
        );
        assert_eq!(field.custom_mutator_name(), Some("replaceItems"));
    }

    #[test]
    fn test_type_mutability() {
        let plain = TypeDecl::class("Person");
        assert!(!plain.is_mutable(false));
        assert!(plain.is_mutable(true));

        let marked = TypeDecl::class("Person").marker(TypeMarker::Mutable);
        assert!(marked.is_mutable(false));

        let frozen = TypeDecl::class("Person").marker(TypeMarker::Immutable);
        assert!(!frozen.is_mutable(true));
    }

    #[test]
    fn test_member_iterators() {
        let decl = TypeDecl::class("Person")
            .field(FieldDecl::new("name", TypeRef::new("String")))
            .constructor(ConstructorDecl::new())
            .method(MethodDecl::new("toString").returns(TypeRef::new("String")));
        assert_eq!(decl.fields().count(), 1);
        assert_eq!(decl.constructors().count(), 1);
        assert_eq!(decl.methods().count(), 1);
        assert!(decl.field_named("name").is_some());
        assert!(decl.field_named("age").is_none());
    }

    #[test]
    fn test_attach_nested_appends_at_end() {
        let mut decl = TypeDecl::class("Person")
            .field(FieldDecl::new("name", TypeRef::new("String")));
        decl.attach_nested(TypeDecl::class("Builder").static_());
        assert!(matches!(decl.members.last(), Some(Member::Type(t)) if t.name == "Builder"));
        assert!(decl.nested_type("Builder").is_some());
    }
}
