//! The fixed synthesis pipeline.
//!
//! Each (product, builder) pair runs through the engine's operations in
//! one fixed order: holder field, creation strategy, mutators, adders,
//! build method, canonical sort. Every operation is individually
//! idempotent, so the order only determines first-synthesis emission.

use tenon_engine::{
    BuilderSynthesis, CapabilityResolver, CreationStrategy, EngineConfig, RecordSynthesis,
    SynthesisError, SynthesisOutcome,
};
use tenon_ir::{CompilationUnit, TypeKind};

/// One unit of work: a product tree, an optional pre-existing builder
/// tree, and the policies to apply.
#[derive(Debug, Clone)]
pub struct SynthesisRequest {
    pub product: CompilationUnit,
    pub product_name: String,
    pub builder: Option<CompilationUnit>,
    pub config: EngineConfig,
}

/// Run the full class pipeline over one pair.
pub fn run_synthesis(
    request: SynthesisRequest,
    resolver: &dyn CapabilityResolver,
) -> Result<SynthesisOutcome, SynthesisError> {
    let creation = request.config.creation;
    let mut engine = BuilderSynthesis::new(
        request.product,
        &request.product_name,
        request.builder,
        request.config,
        resolver,
    )?;
    engine.add_product_field()?;
    match creation {
        CreationStrategy::Constructor => engine.add_constructors()?,
        CreationStrategy::Factory => engine.add_factory_methods()?,
    }
    engine.add_mutators()?;
    engine.add_adders()?;
    engine.add_build_method()?;
    engine.canonicalize();
    Ok(engine.finish())
}

/// Run the reduced record pipeline over one pair.
pub fn run_record_synthesis(
    request: SynthesisRequest,
) -> Result<SynthesisOutcome, SynthesisError> {
    let mut engine = RecordSynthesis::new(
        request.product,
        &request.product_name,
        request.builder,
        request.config,
    )?;
    engine.add_component_fields()?;
    engine.add_constructor()?;
    engine.add_mutators()?;
    engine.add_build_method()?;
    engine.canonicalize();
    Ok(engine.finish())
}

/// A pair the batch could not process.
#[derive(Debug)]
pub struct BatchFailure {
    pub product_name: String,
    pub error: SynthesisError,
}

/// Outcomes and failures of a batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<SynthesisOutcome>,
    pub failures: Vec<BatchFailure>,
}

/// Process many pairs independently.
///
/// A failing pair is recorded and skipped; it never aborts the rest of the
/// batch. Record products are routed down the reduced pipeline.
pub fn run_batch(
    requests: Vec<SynthesisRequest>,
    resolver: &dyn CapabilityResolver,
) -> BatchReport {
    let mut report = BatchReport::default();
    for request in requests {
        let product_name = request.product_name.clone();
        let is_record = request
            .product
            .type_named(&product_name)
            .is_some_and(|t| t.kind == TypeKind::Record);
        let result = if is_record {
            run_record_synthesis(request)
        } else {
            run_synthesis(request, resolver)
        };
        match result {
            Ok(outcome) => report.outcomes.push(outcome),
            Err(error) => report.failures.push(BatchFailure {
                product_name,
                error,
            }),
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use tenon_engine::ImportTableResolver;
    use tenon_ir::{FieldDecl, Param, TypeDecl, TypeRef, Visibility};

    use super::*;

    fn person_request() -> SynthesisRequest {
        let product = CompilationUnit::with_package("com.example").type_decl(
            TypeDecl::class("Person").field(
                FieldDecl::new("x", TypeRef::new("int")).visibility(Visibility::PackagePrivate),
            ),
        );
        SynthesisRequest {
            product,
            product_name: "Person".to_string(),
            builder: None,
            config: EngineConfig::default(),
        }
    }

    #[test]
    fn test_pipeline_produces_builder_unit() {
        let resolver = ImportTableResolver::new();
        let outcome = run_synthesis(person_request(), &resolver).expect("synthesis");
        let builder_unit = outcome.builder.expect("separate builder unit");
        let builder = builder_unit.type_named("PersonBuilder").expect("builder");
        assert!(builder.field_named("product").is_some());
        assert!(builder.methods().any(|m| m.name == "build"));
    }

    #[test]
    fn test_batch_skips_failures() {
        let resolver = ImportTableResolver::new();
        let bad = SynthesisRequest {
            product: CompilationUnit::new(),
            product_name: "Missing".to_string(),
            builder: None,
            config: EngineConfig::default(),
        };
        let report = run_batch(vec![bad, person_request()], &resolver);
        assert_eq!(report.outcomes.len(), 1);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].product_name, "Missing");
    }

    #[test]
    fn test_batch_routes_records() {
        let resolver = ImportTableResolver::new();
        let record = SynthesisRequest {
            product: CompilationUnit::new().type_decl(TypeDecl::record(
                "Point",
                vec![Param::new("x", TypeRef::new("int"))],
            )),
            product_name: "Point".to_string(),
            builder: None,
            config: EngineConfig::default(),
        };
        let report = run_batch(vec![record], &resolver);
        assert_eq!(report.outcomes.len(), 1);
        let builder_unit = report.outcomes[0].builder.as_ref().expect("builder unit");
        let builder = builder_unit.type_named("PointBuilder").expect("builder");
        // The record path mirrors components instead of holding a product.
        assert!(builder.field_named("product").is_none());
        assert!(builder.field_named("x").is_some());
    }
}
