//! Read-accessor generation on the product type.
//!
//! Independent of the builder: adds one public accessor per non-ignored
//! field directly to the product, named like the field. Sequence fields
//! can instead expose a stream view, re-created on every call so it is
//! finite and restartable.

use tenon_ir::{CompilationUnit, FieldDecl, MethodDecl, TypeRef};

use crate::{
    capability::CapabilityResolver,
    config::AccessorConfig,
    error::{Result, SynthesisError},
    imports,
    requirement::{self, MethodRequirement},
};

/// Add missing accessors to the named type inside `unit`.
pub fn add_accessors(
    unit: &mut CompilationUnit,
    type_name: &str,
    config: &AccessorConfig,
    resolver: &dyn CapabilityResolver,
) -> Result<()> {
    let visible_imports = unit.imports.clone();
    let Some(product) = unit.type_named(type_name.trim()) else {
        return Err(SynthesisError::ProductClassNotFound {
            name: type_name.to_string(),
        });
    };
    let fields: Vec<FieldDecl> = product.fields().cloned().collect();

    let mut to_add: Vec<MethodDecl> = Vec::new();
    let mut needs_stream_import = false;
    for field in &fields {
        if field.is_static || field.is_ignored() {
            continue;
        }
        let cap = resolver.classify(&field.ty, &visible_imports);
        let (return_ty, body) = if config.stream_sequences && cap.is_sequence() {
            needs_stream_import = true;
            (
                TypeRef::parameterized("Stream", vec![field.ty.item_type()]),
                format!("return {}.stream();", field.name),
            )
        } else {
            (field.ty.clone(), format!("return {};", field.name))
        };
        let req = MethodRequirement::new(&field.name).returns(&return_ty);
        if requirement::has_method(product, &req) {
            continue;
        }
        to_add.push(
            MethodDecl::new(&field.name)
                .returns(return_ty)
                .body_line(body),
        );
    }

    if to_add.is_empty() {
        return Ok(());
    }
    if needs_stream_import {
        imports::ensure_import(unit, "java.util.stream.Stream");
    }
    if let Some(product) = unit.type_named_mut(type_name.trim()) {
        for method in to_add {
            product.add_method(method);
        }
    }
    Ok(())
}
