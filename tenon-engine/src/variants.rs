//! Layered mutator/adder variant resolution.
//!
//! Three layers merge into the concrete variant set for a field: a
//! per-field marker override wins outright, then the caller's global
//! default, then a hard-coded single-variant fallback. A suppression
//! variant anywhere in the winning layer disables the role for the field.

use tenon_ir::{AdderVariant, FieldDecl, MutatorVariant};

use crate::config::VariantDefaults;

fn resolve_layers<V: Copy + PartialEq>(
    field_override: Option<&[V]>,
    global_default: &[V],
    fallback: V,
    none: V,
) -> Vec<V> {
    let layer: Vec<V> = match field_override {
        Some(explicit) => explicit.to_vec(),
        None if !global_default.is_empty() => global_default.to_vec(),
        None => vec![fallback],
    };
    if layer.contains(&none) {
        return Vec::new();
    }
    let mut resolved = Vec::new();
    for variant in layer {
        if !resolved.contains(&variant) {
            resolved.push(variant);
        }
    }
    resolved
}

/// The mutator variants to emit for a field; empty means suppressed.
pub fn resolve_mutators(field: &FieldDecl, defaults: &VariantDefaults) -> Vec<MutatorVariant> {
    resolve_layers(
        field.mutator_override(),
        &defaults.mutators,
        MutatorVariant::Object,
        MutatorVariant::None,
    )
}

/// The adder variants to emit for a field; empty means suppressed.
pub fn resolve_adders(field: &FieldDecl, defaults: &VariantDefaults) -> Vec<AdderVariant> {
    resolve_layers(
        field.adder_override(),
        &defaults.adders,
        AdderVariant::Item,
        AdderVariant::None,
    )
}
