//! Contract properties of the synthesis engine: idempotence, preservation
//! of hand-authored members, non-duplication, variant precedence and
//! naming substitution.

use tenon_engine::{
    BuilderSynthesis, CreationStrategy, EngineConfig, ImportTableResolver, NamingPolicy,
    SynthesisOutcome, VariantDefaults,
};
use tenon_ir::{
    AdderVariant, CompilationUnit, ConstructorDecl, FieldDecl, FieldMarker, Import, MethodDecl,
    MutatorVariant, Param, TypeDecl, TypeRef, Visibility,
};

fn run_pipeline(
    product: CompilationUnit,
    builder: Option<CompilationUnit>,
    config: EngineConfig,
) -> SynthesisOutcome {
    let resolver = ImportTableResolver::new();
    let creation = config.creation;
    let mut engine = BuilderSynthesis::new(product, "Person", builder, config, &resolver)
        .expect("engine construction");
    engine.add_product_field().expect("product field");
    match creation {
        CreationStrategy::Constructor => engine.add_constructors().expect("constructors"),
        CreationStrategy::Factory => engine.add_factory_methods().expect("factories"),
    }
    engine.add_mutators().expect("mutators");
    engine.add_adders().expect("adders");
    engine.add_build_method().expect("build method");
    engine.canonicalize();
    engine.finish()
}

fn person_product() -> CompilationUnit {
    CompilationUnit::with_package("com.example")
        .import(Import::new("java.util.List"))
        .type_decl(
            TypeDecl::class("Person")
                .field(
                    FieldDecl::new("x", TypeRef::new("int"))
                        .visibility(Visibility::PackagePrivate),
                )
                .field(
                    FieldDecl::new("items", TypeRef::parameterized("List", vec![TypeRef::new("String")]))
                        .visibility(Visibility::PackagePrivate),
                )
                .constructor(ConstructorDecl::new().param(Param::new("x", TypeRef::new("int")))),
        )
}

#[test]
fn test_synthesis_is_idempotent() {
    let once = run_pipeline(person_product(), None, EngineConfig::default());
    let twice = run_pipeline(
        person_product(),
        once.builder.clone(),
        EngineConfig::default(),
    );
    assert_eq!(once, twice);
}

#[test]
fn test_factory_synthesis_is_idempotent() {
    let config = EngineConfig {
        creation: CreationStrategy::Factory,
        ..EngineConfig::default()
    };
    let once = run_pipeline(person_product(), None, config.clone());
    let twice = run_pipeline(person_product(), once.builder.clone(), config);
    assert_eq!(once, twice);
}

#[test]
fn test_hand_authored_members_are_preserved() {
    let existing = CompilationUnit::with_package("com.example").type_decl(
        TypeDecl::class("PersonBuilder")
            .field(
                FieldDecl::new("cache", TypeRef::new("String"))
                    .initializer("\"unset\"")
                    .visibility(Visibility::Private),
            )
            .method(
                MethodDecl::new("reset")
                    .body_line("product = new Person();")
                    .body_line("cache = \"unset\";"),
            ),
    );
    let outcome = run_pipeline(person_product(), Some(existing.clone()), EngineConfig::default());
    let builder_unit = outcome.builder.expect("builder unit");
    let builder = builder_unit.type_named("PersonBuilder").expect("builder");

    let original = existing.type_named("PersonBuilder").expect("input builder");
    for member in &original.members {
        assert!(
            builder.members.contains(member),
            "input member dropped or altered: {:?}",
            member
        );
    }
}

#[test]
fn test_no_canonical_requirement_is_emitted_twice() {
    // Drive every operation twice inside one run, then re-run the whole
    // pipeline over its own output.
    let resolver = ImportTableResolver::new();
    let mut engine = BuilderSynthesis::new(
        person_product(),
        "Person",
        None,
        EngineConfig::default(),
        &resolver,
    )
    .expect("engine construction");
    for _ in 0..2 {
        engine.add_product_field().expect("product field");
        engine.add_constructors().expect("constructors");
        engine.add_mutators().expect("mutators");
        engine.add_adders().expect("adders");
        engine.add_build_method().expect("build method");
    }
    engine.canonicalize();
    let outcome = engine.finish();
    let outcome = run_pipeline(person_product(), outcome.builder, EngineConfig::default());

    let builder_unit = outcome.builder.expect("builder unit");
    let builder = builder_unit.type_named("PersonBuilder").expect("builder");

    assert_eq!(builder.fields().filter(|f| f.name == "product").count(), 1);
    assert_eq!(builder.constructors().count(), 1);
    assert_eq!(builder.methods().filter(|m| m.name == "withX").count(), 1);
    assert_eq!(builder.methods().filter(|m| m.name == "withItems").count(), 1);
    assert_eq!(builder.methods().filter(|m| m.name == "addItem").count(), 1);
    assert_eq!(builder.methods().filter(|m| m.name == "build").count(), 1);
}

#[test]
fn test_variant_precedence_for_mutators() {
    let config = EngineConfig {
        variants: VariantDefaults {
            mutators: vec![MutatorVariant::Stream],
            ..VariantDefaults::default()
        },
        ..EngineConfig::default()
    };

    // Global default applies to unmarked sequence fields.
    let outcome = run_pipeline(person_product(), None, config.clone());
    let builder_unit = outcome.builder.expect("builder unit");
    let builder = builder_unit.type_named("PersonBuilder").expect("builder");
    let with_items = builder
        .methods()
        .find(|m| m.name == "withItems")
        .expect("withItems");
    assert_eq!(with_items.params[0].ty.to_string(), "Stream<String>");

    // A per-field marker beats the global default.
    let product = CompilationUnit::with_package("com.example")
        .import(Import::new("java.util.List"))
        .type_decl(
            TypeDecl::class("Person").field(
                FieldDecl::new("items", TypeRef::parameterized("List", vec![TypeRef::new("String")]))
                    .visibility(Visibility::PackagePrivate)
                    .marker(FieldMarker::GenerateListMutator {
                        variants: vec![MutatorVariant::Collection],
                        name: None,
                    }),
            ),
        );
    let outcome = run_pipeline(product, None, config);
    let builder_unit = outcome.builder.expect("builder unit");
    let builder = builder_unit.type_named("PersonBuilder").expect("builder");
    let with_items = builder
        .methods()
        .find(|m| m.name == "withItems")
        .expect("withItems");
    assert_eq!(with_items.params[0].ty.to_string(), "Collection<String>");
}

#[test]
fn test_variant_precedence_for_adders() {
    let config = EngineConfig {
        variants: VariantDefaults {
            adders: vec![AdderVariant::Stream],
            ..VariantDefaults::default()
        },
        ..EngineConfig::default()
    };

    let outcome = run_pipeline(person_product(), None, config.clone());
    let builder_unit = outcome.builder.expect("builder unit");
    let builder = builder_unit.type_named("PersonBuilder").expect("builder");
    let add_item = builder
        .methods()
        .find(|m| m.name == "addItem")
        .expect("addItem");
    assert_eq!(add_item.params[0].ty.to_string(), "Stream<String>");

    let product = CompilationUnit::with_package("com.example")
        .import(Import::new("java.util.List"))
        .type_decl(
            TypeDecl::class("Person").field(
                FieldDecl::new("items", TypeRef::parameterized("List", vec![TypeRef::new("String")]))
                    .visibility(Visibility::PackagePrivate)
                    .marker(FieldMarker::GenerateAdder {
                        variants: vec![AdderVariant::Item],
                        name: None,
                    }),
            ),
        );
    let outcome = run_pipeline(product, None, config);
    let builder_unit = outcome.builder.expect("builder unit");
    let builder = builder_unit.type_named("PersonBuilder").expect("builder");
    let add_item = builder
        .methods()
        .find(|m| m.name == "addItem")
        .expect("addItem");
    assert_eq!(add_item.params[0].ty, TypeRef::new("String"));
}

#[test]
fn test_naming_substitution_touches_only_its_members() {
    let default_outcome = run_pipeline(person_product(), None, EngineConfig::default());
    let renamed_config = EngineConfig {
        naming: NamingPolicy {
            mutator_prefix: "set".to_string(),
            ..NamingPolicy::default()
        },
        ..EngineConfig::default()
    };
    let renamed_outcome = run_pipeline(person_product(), None, renamed_config);

    let names = |outcome: &SynthesisOutcome| -> Vec<String> {
        outcome
            .builder
            .as_ref()
            .expect("builder unit")
            .type_named("PersonBuilder")
            .expect("builder")
            .methods()
            .map(|m| m.name.clone())
            .collect()
    };

    let default_names = names(&default_outcome);
    let renamed_names = names(&renamed_outcome);
    assert!(default_names.contains(&"withX".to_string()));
    assert!(renamed_names.contains(&"setX".to_string()));

    // Everything not governed by the mutator prefix is unchanged.
    let stable = |ns: &[String]| -> Vec<String> {
        ns.iter()
            .filter(|n| !n.starts_with("with") && !n.starts_with("set"))
            .cloned()
            .collect()
    };
    assert_eq!(stable(&default_names), stable(&renamed_names));
}

#[test]
fn test_build_method_name_substitution() {
    let config = EngineConfig {
        naming: NamingPolicy {
            build_method: "create".to_string(),
            ..NamingPolicy::default()
        },
        ..EngineConfig::default()
    };
    let outcome = run_pipeline(person_product(), None, config);
    let builder_unit = outcome.builder.expect("builder unit");
    let builder = builder_unit.type_named("PersonBuilder").expect("builder");
    assert!(builder.methods().any(|m| m.name == "create"));
    assert!(!builder.methods().any(|m| m.name == "build"));
}
