//! Compilation units and imports.

use serde::{Deserialize, Serialize};

use crate::decl::TypeDecl;

/// A namespace-import declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Import {
    /// Dotted path, without a trailing `.*` for wildcards.
    pub path: String,
    pub is_static: bool,
    pub is_wildcard: bool,
}

impl Import {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            is_static: false,
            is_wildcard: false,
        }
    }

    pub fn wildcard(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            is_static: false,
            is_wildcard: true,
        }
    }

    pub fn static_(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// The imported simple name (`java.util.List` -> `List`).
    pub fn last_segment(&self) -> &str {
        self.path.rsplit('.').next().unwrap_or(&self.path)
    }
}

/// One source file's worth of tree: package, imports, top-level types.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CompilationUnit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub imports: Vec<Import>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<TypeDecl>,
}

impl CompilationUnit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_package(package: impl Into<String>) -> Self {
        Self {
            package: Some(package.into()),
            ..Self::default()
        }
    }

    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    pub fn type_decl(mut self, decl: TypeDecl) -> Self {
        self.types.push(decl);
        self
    }

    pub fn type_named(&self, name: &str) -> Option<&TypeDecl> {
        self.types.iter().find(|t| t.name == name)
    }

    pub fn type_named_mut(&mut self, name: &str) -> Option<&mut TypeDecl> {
        self.types.iter_mut().find(|t| t.name == name)
    }

    pub fn has_import(&self, path: &str) -> bool {
        self.imports.iter().any(|i| i.path == path)
    }

    pub fn add_type(&mut self, decl: TypeDecl) -> &mut TypeDecl {
        self.types.push(decl);
        match self.types.last_mut() {
            Some(t) => t,
            None => unreachable!("just pushed a type"),
        }
    }
}
