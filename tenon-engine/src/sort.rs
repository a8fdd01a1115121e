//! Canonical member ordering.
//!
//! One fixed order — static fields, instance fields, constructors, factory
//! methods, mutators, adders, the build method, everything else — so
//! repeated runs and hand-edited files converge to one shape. The sort is
//! stable: members of equal rank keep their authored relative order.

use tenon_ir::{Member, MethodDecl, TypeDecl};

use crate::config::NamingPolicy;

fn method_rank(method: &MethodDecl, builder_name: &str, naming: &NamingPolicy) -> u8 {
    let returns_builder = method
        .return_type
        .as_ref()
        .is_some_and(|t| t.bare_name() == builder_name);

    if !method.is_static && method.name == naming.build_method && method.params.is_empty() {
        return 6;
    }
    if method.is_static && returns_builder {
        return 3;
    }
    if returns_builder
        && !naming.adder_prefix.is_empty()
        && method.name.starts_with(&naming.adder_prefix)
    {
        return 5;
    }
    if returns_builder && method.name.starts_with(&naming.mutator_prefix) {
        return 4;
    }
    7
}

fn member_rank(member: &Member, builder_name: &str, naming: &NamingPolicy) -> u8 {
    match member {
        Member::Field(f) if f.is_static => 0,
        Member::Field(_) => 1,
        Member::Constructor(_) => 2,
        Member::Method(m) => method_rank(m, builder_name, naming),
        Member::Type(_) => 7,
    }
}

/// Reorder the builder's members into the canonical shape.
pub fn sort_members(builder: &mut TypeDecl, naming: &NamingPolicy) {
    let builder_name = builder.name.clone();
    builder
        .members
        .sort_by_key(|m| member_rank(m, &builder_name, naming));
}
