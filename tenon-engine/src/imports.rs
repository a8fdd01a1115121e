//! Namespace-import propagation.

use tenon_ir::{CompilationUnit, Import};

/// Copy the product unit's imports into the builder unit.
///
/// Imports whose simple name matches one of `skip_names` (the product and
/// builder type names) are self-referential and skipped; paths already
/// present in the builder unit are not duplicated. Insertion order is
/// preserved.
pub fn propagate(product: &CompilationUnit, builder: &mut CompilationUnit, skip_names: &[&str]) {
    for import in &product.imports {
        if !import.is_wildcard && skip_names.contains(&import.last_segment()) {
            continue;
        }
        if !builder.has_import(&import.path) {
            builder.imports.push(import.clone());
        }
    }
}

/// Ensure a non-static, non-wildcard import of `path` exists in the unit.
///
/// Used for the types generated stream/collection bodies refer to. A
/// wildcard import already covering the path counts as present.
pub fn ensure_import(unit: &mut CompilationUnit, path: &str) {
    if unit.has_import(path) {
        return;
    }
    if let Some((parent, _)) = path.rsplit_once('.')
        && unit
            .imports
            .iter()
            .any(|i| i.is_wildcard && !i.is_static && i.path == parent)
    {
        return;
    }
    unit.imports.push(Import::new(path));
}
