//! The builder synthesis engine.
//!
//! Drives field, constructor/factory, mutator, adder and build-method
//! generation against a target builder tree. Every operation re-scans the
//! target through the existence oracle before acting; there is no
//! applied/unapplied state, which is what makes repeated invocation safe.

use tenon_core::singularize;
use tenon_ir::{
    AdderVariant, CompilationUnit, ConstructorDecl, FieldDecl, Import, MethodDecl, MutatorVariant,
    Param, TypeDecl, TypeRef, Visibility,
};

use crate::{
    capability::{Capability, CapabilityResolver},
    config::{BuilderPlacement, EngineConfig},
    error::{Result, SynthesisError},
    imports,
    requirement::{self, MethodRequirement},
    sort,
    variants,
};

/// Read-only facts about the product, captured once at construction.
///
/// The engine never reads the product tree again after this snapshot, so
/// grafting an embedded builder into it cannot invalidate anything.
#[derive(Debug, Clone)]
struct ProductFacts {
    name: String,
    ty: TypeRef,
    imports: Vec<Import>,
    fields: Vec<FieldDecl>,
    constructors: Vec<ConstructorDecl>,
    mutable: bool,
}

/// Where the builder type is being grown.
pub(crate) enum Target {
    /// Nested inside the product type, in the product's own unit.
    Embedded,
    /// In its own compilation unit.
    Separate(CompilationUnit),
}

/// The trees handed back to the caller for printing.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisOutcome {
    /// The product unit; mutated only in embedded mode.
    pub product: CompilationUnit,
    /// The builder unit; present in separate mode.
    pub builder: Option<CompilationUnit>,
}

/// One synthesis run over a (product, builder) pair.
///
/// Operations are individually idempotent and order-insensitive with
/// respect to what already exists; first-synthesis emission order is fixed
/// by the caller's pipeline.
pub struct BuilderSynthesis<'r> {
    facts: ProductFacts,
    product_unit: CompilationUnit,
    target: Target,
    builder_name: String,
    config: EngineConfig,
    resolver: &'r dyn CapabilityResolver,
}

impl<'r> BuilderSynthesis<'r> {
    /// Bind the engine to a product unit and an optional pre-existing
    /// builder unit.
    ///
    /// In embedded placement the builder grows inside the product unit and
    /// `existing_builder` is not consulted. In separate placement the
    /// builder unit inherits the product's package declaration (when it
    /// has none) and its non-self-referential imports.
    pub fn new(
        product_unit: CompilationUnit,
        product_name: &str,
        existing_builder: Option<CompilationUnit>,
        config: EngineConfig,
        resolver: &'r dyn CapabilityResolver,
    ) -> Result<Self> {
        let Some(product) = product_unit.type_named(product_name.trim()) else {
            return Err(SynthesisError::ProductClassNotFound {
                name: product_name.to_string(),
            });
        };

        let facts = ProductFacts {
            name: product.name.clone(),
            ty: product.type_ref(),
            imports: product_unit.imports.clone(),
            fields: product.fields().cloned().collect(),
            constructors: product.constructors().cloned().collect(),
            mutable: product.is_mutable(config.mutability.mutable_by_default),
        };

        let (builder_name, target) = match config.placement {
            BuilderPlacement::Embedded => ("Builder".to_string(), Target::Embedded),
            BuilderPlacement::Separate => {
                let name = config.naming.builder_name(&facts.name);
                let mut unit = existing_builder.unwrap_or_default();
                if unit.package.is_none() {
                    unit.package = product_unit.package.clone();
                }
                imports::propagate(&product_unit, &mut unit, &[facts.name.as_str(), name.as_str()]);
                (name, Target::Separate(unit))
            }
        };

        let mut engine = Self {
            facts,
            product_unit,
            target,
            builder_name,
            config,
            resolver,
        };
        engine.builder_mut();
        Ok(engine)
    }

    /// Hand both trees back for printing.
    pub fn finish(self) -> SynthesisOutcome {
        match self.target {
            Target::Embedded => SynthesisOutcome {
                product: self.product_unit,
                builder: None,
            },
            Target::Separate(unit) => SynthesisOutcome {
                product: self.product_unit,
                builder: Some(unit),
            },
        }
    }

    /// Ensure the private holder field for the product instance exists.
    pub fn add_product_field(&mut self) -> Result<()> {
        let holder = self.config.naming.product_field.clone();
        let product_ty = self.facts.ty.clone();
        let builder = self.builder_mut();

        if let Some(existing) = builder.field_named(&holder) {
            if existing.ty.to_string() != product_ty.to_string() {
                return Err(SynthesisError::ProductFieldHasWrongType {
                    field: holder,
                    expected: product_ty.to_string(),
                    found: existing.ty.to_string(),
                });
            }
            return Ok(());
        }
        builder.add_field(FieldDecl::new(holder, product_ty));
        Ok(())
    }

    /// Constructor-creation strategy: one delegating builder constructor
    /// per eligible product constructor, plus the manipulation constructor
    /// for mutable products.
    pub fn add_constructors(&mut self) -> Result<()> {
        let holder = self.config.naming.product_field.clone();
        let product_ty = self.facts.ty.clone();
        let ctors = self.usable_constructors()?;
        let mutable = self.facts.mutable;
        let builder = self.builder_mut();

        if ctors.is_empty() {
            // Implicit default constructor on the product.
            if !requirement::has_constructor(builder, &[]) {
                builder.add_constructor(
                    ConstructorDecl::new()
                        .body_line(format!("this.{} = new {}();", holder, product_ty)),
                );
            }
        } else {
            for ctor in &ctors {
                let param_types: Vec<TypeRef> =
                    ctor.params.iter().map(|p| p.ty.clone()).collect();
                if requirement::has_constructor(builder, &param_types) {
                    continue;
                }
                let args = join_names(&ctor.params);
                let mut delegating = ConstructorDecl::new();
                for param in &ctor.params {
                    delegating = delegating.param(param.clone());
                }
                builder.add_constructor(delegating.body_line(format!(
                    "this.{} = new {}({});",
                    holder, product_ty, args
                )));
            }
        }

        if mutable && !requirement::has_constructor(builder, std::slice::from_ref(&product_ty)) {
            builder.add_constructor(
                ConstructorDecl::new()
                    .param(Param::new(holder.clone(), product_ty))
                    .body_line(format!("this.{} = {};", holder, holder)),
            );
        }
        Ok(())
    }

    /// Factory-creation strategy: a private wrap constructor plus one
    /// static factory per eligible product constructor, plus the
    /// manipulation factory for mutable products.
    pub fn add_factory_methods(&mut self) -> Result<()> {
        let naming = self.config.naming.clone();
        let holder = naming.product_field.clone();
        let product_ty = self.facts.ty.clone();
        let ctors = self.usable_constructors()?;
        let mutable = self.facts.mutable;
        let builder_name = self.builder_name.clone();
        let builder_ty = TypeRef::new(builder_name.clone());
        let builder = self.builder_mut();

        // Generated factories delegate through this.
        if !requirement::has_constructor(builder, std::slice::from_ref(&product_ty)) {
            builder.add_constructor(
                ConstructorDecl::new()
                    .visibility(Visibility::Private)
                    .param(Param::new(holder.clone(), product_ty.clone()))
                    .body_line(format!("this.{} = {};", holder, holder)),
            );
        }

        if ctors.is_empty() {
            let req = MethodRequirement::new(&naming.factory_method)
                .returns(&builder_ty)
                .static_();
            if !requirement::has_method(builder, &req) {
                builder.add_method(
                    MethodDecl::new(&naming.factory_method)
                        .static_()
                        .returns(builder_ty.clone())
                        .body_line(format!(
                            "return new {}(new {}());",
                            builder_name, product_ty
                        )),
                );
            }
        } else {
            for ctor in &ctors {
                let mut req = MethodRequirement::new(&naming.factory_method)
                    .returns(&builder_ty)
                    .static_();
                for param in &ctor.params {
                    req = req.param(&param.ty);
                }
                if requirement::has_method(builder, &req) {
                    continue;
                }
                let args = join_names(&ctor.params);
                let mut factory = MethodDecl::new(&naming.factory_method)
                    .static_()
                    .returns(builder_ty.clone());
                for param in &ctor.params {
                    factory = factory.param(param.clone());
                }
                builder.add_method(factory.body_line(format!(
                    "return new {}(new {}({}));",
                    builder_name, product_ty, args
                )));
            }
        }

        if mutable {
            let req = MethodRequirement::new(&naming.factory_method)
                .param(&product_ty)
                .returns(&builder_ty)
                .static_();
            if !requirement::has_method(builder, &req) {
                builder.add_method(
                    MethodDecl::new(&naming.factory_method)
                        .static_()
                        .param(Param::new(holder.clone(), product_ty))
                        .returns(builder_ty.clone())
                        .body_line(format!("return new {}({});", builder_name, holder)),
                );
            }
        }
        Ok(())
    }

    /// One mutator per settable field, per resolved variant.
    pub fn add_mutators(&mut self) -> Result<()> {
        let naming = self.config.naming.clone();
        let holder = naming.product_field.clone();
        let defaults = self.config.variants.clone();
        let builder_ty = TypeRef::new(self.builder_name.clone());
        let fields = self.facts.fields.clone();
        let product_imports = self.facts.imports.clone();

        for field in &fields {
            if !self.is_settable(field) {
                continue;
            }
            let resolved = variants::resolve_mutators(field, &defaults);
            if resolved.is_empty() {
                continue;
            }
            let cap = self.resolver.classify(&field.ty, &product_imports);
            let emit = if cap.is_sequence() {
                resolved
            } else {
                vec![MutatorVariant::Object]
            };
            let name = field
                .custom_mutator_name()
                .map(str::to_string)
                .unwrap_or_else(|| naming.mutator_name(&field.name));
            for variant in emit {
                self.emit_mutator(&name, field, variant, cap, &holder, &builder_ty);
            }
        }
        Ok(())
    }

    /// One or more adders per sequence-typed field, per resolved variant.
    pub fn add_adders(&mut self) -> Result<()> {
        let naming = self.config.naming.clone();
        let holder = naming.product_field.clone();
        let defaults = self.config.variants.clone();
        let builder_ty = TypeRef::new(self.builder_name.clone());
        let fields = self.facts.fields.clone();
        let product_imports = self.facts.imports.clone();

        for field in &fields {
            if !self.is_settable(field) {
                continue;
            }
            let cap = self.resolver.classify(&field.ty, &product_imports);
            if !cap.is_sequence() {
                continue;
            }
            let resolved = variants::resolve_adders(field, &defaults);
            if resolved.is_empty() {
                continue;
            }
            let name = field
                .custom_adder_name()
                .map(str::to_string)
                .unwrap_or_else(|| naming.adder_name(&field.name));
            for variant in resolved {
                self.emit_adder(&name, field, variant, &holder, &builder_ty);
            }
        }
        Ok(())
    }

    /// The terminal build method returning the holder field.
    pub fn add_build_method(&mut self) -> Result<()> {
        let name = self.config.naming.build_method.clone();
        let holder = self.config.naming.product_field.clone();
        let product_ty = self.facts.ty.clone();
        let builder = self.builder_mut();

        let req = MethodRequirement::new(&name).returns(&product_ty);
        if !requirement::has_method(builder, &req) {
            builder.add_method(
                MethodDecl::new(name)
                    .returns(product_ty)
                    .body_line(format!("return {};", holder)),
            );
        }
        Ok(())
    }

    /// Impose the canonical member order on the builder type.
    pub fn canonicalize(&mut self) {
        let naming = self.config.naming.clone();
        let builder = self.builder_mut();
        sort::sort_members(builder, &naming);
    }

    fn is_settable(&self, field: &FieldDecl) -> bool {
        if field.is_static || field.is_ignored() {
            return false;
        }
        // Private fields need an explicit per-field request.
        !(field.visibility.is_private() && !field.has_generation_marker())
    }

    fn emit_mutator(
        &mut self,
        name: &str,
        field: &FieldDecl,
        variant: MutatorVariant,
        cap: Capability,
        holder: &str,
        builder_ty: &TypeRef,
    ) {
        let item = field.ty.item_type();
        let collector = if cap.is_set_like() { "toSet" } else { "toList" };
        let (param, is_varargs, body, needed): (Param, bool, String, &[&str]) = match variant {
            MutatorVariant::None => return,
            MutatorVariant::Object => (
                Param::new(field.name.clone(), field.ty.clone()),
                false,
                format!("{}.{} = {};", holder, field.name, field.name),
                &[],
            ),
            MutatorVariant::Stream => (
                Param::new(
                    field.name.clone(),
                    TypeRef::parameterized("Stream", vec![item]),
                ),
                false,
                format!(
                    "{}.{} = {}.collect(Collectors.{}());",
                    holder, field.name, field.name, collector
                ),
                &["java.util.stream.Stream", "java.util.stream.Collectors"],
            ),
            MutatorVariant::Collection => (
                Param::new(
                    field.name.clone(),
                    TypeRef::parameterized("Collection", vec![item]),
                ),
                false,
                format!(
                    "{}.{} = {}.stream().collect(Collectors.{}());",
                    holder, field.name, field.name, collector
                ),
                &["java.util.Collection", "java.util.stream.Collectors"],
            ),
            MutatorVariant::Vararg => (
                Param::new(field.name.clone(), item),
                true,
                format!(
                    "{}.{} = Stream.of({}).collect(Collectors.{}());",
                    holder, field.name, field.name, collector
                ),
                &["java.util.stream.Stream", "java.util.stream.Collectors"],
            ),
        };

        let mut req = MethodRequirement::new(name).param(&param.ty).returns(builder_ty);
        if is_varargs {
            req = req.varargs();
        }
        if requirement::has_method(self.builder_mut(), &req) {
            return;
        }
        for path in needed {
            self.ensure_unit_import(path);
        }
        let mut method = MethodDecl::new(name).param(param).returns(builder_ty.clone());
        if is_varargs {
            method = method.varargs();
        }
        self.builder_mut()
            .add_method(method.body_line(body).body_line("return this;"));
    }

    fn emit_adder(
        &mut self,
        name: &str,
        field: &FieldDecl,
        variant: AdderVariant,
        holder: &str,
        builder_ty: &TypeRef,
    ) {
        let item = field.ty.item_type();
        let singular = singularize(&field.name);
        let (param, is_varargs, body, needed): (Param, bool, String, &[&str]) = match variant {
            AdderVariant::None => return,
            AdderVariant::Item => (
                Param::new(singular.clone(), item),
                false,
                format!("{}.{}.add({});", holder, field.name, singular),
                &[],
            ),
            AdderVariant::Stream => (
                Param::new(
                    field.name.clone(),
                    TypeRef::parameterized("Stream", vec![item]),
                ),
                false,
                format!("{}.forEach({}.{}::add);", field.name, holder, field.name),
                &["java.util.stream.Stream"],
            ),
            AdderVariant::Collection => (
                Param::new(
                    field.name.clone(),
                    TypeRef::parameterized("Collection", vec![item]),
                ),
                false,
                format!("{}.{}.addAll({});", holder, field.name, field.name),
                &["java.util.Collection"],
            ),
            AdderVariant::Vararg => (
                Param::new(field.name.clone(), item),
                true,
                format!(
                    "Stream.of({}).forEach({}.{}::add);",
                    field.name, holder, field.name
                ),
                &["java.util.stream.Stream"],
            ),
        };

        let mut req = MethodRequirement::new(name).param(&param.ty).returns(builder_ty);
        if is_varargs {
            req = req.varargs();
        }
        if requirement::has_method(self.builder_mut(), &req) {
            return;
        }
        for path in needed {
            self.ensure_unit_import(path);
        }
        let mut method = MethodDecl::new(name).param(param).returns(builder_ty.clone());
        if is_varargs {
            method = method.varargs();
        }
        self.builder_mut()
            .add_method(method.body_line(body).body_line("return this;"));
    }

    /// Eligible product constructors; empty means the product relies on its
    /// implicit default constructor.
    fn usable_constructors(&self) -> Result<Vec<ConstructorDecl>> {
        if self.facts.constructors.is_empty() {
            return Ok(Vec::new());
        }
        let usable: Vec<ConstructorDecl> = self
            .facts
            .constructors
            .iter()
            .filter(|c| !c.is_ignored && !c.visibility.is_private())
            .cloned()
            .collect();
        if usable.is_empty() {
            return Err(SynthesisError::NoConstructorFound {
                product: self.facts.name.clone(),
            });
        }
        Ok(usable)
    }

    fn ensure_unit_import(&mut self, path: &str) {
        match &mut self.target {
            Target::Separate(unit) => imports::ensure_import(unit, path),
            Target::Embedded => imports::ensure_import(&mut self.product_unit, path),
        }
    }

    /// Locate the builder type, creating it when absent.
    ///
    /// Re-run on every operation; nothing caches the location, so a tree
    /// edited between operations is always re-scanned.
    fn builder_mut(&mut self) -> &mut TypeDecl {
        match &mut self.target {
            Target::Separate(unit) => {
                if let Some(pos) = unit.types.iter().position(|t| t.name == self.builder_name) {
                    &mut unit.types[pos]
                } else {
                    unit.add_type(TypeDecl::class(self.builder_name.clone()))
                }
            }
            Target::Embedded => {
                let product = match self.product_unit.type_named_mut(&self.facts.name) {
                    Some(product) => product,
                    // Validated at construction; the engine never removes types.
                    None => unreachable!("product type disappeared from its unit"),
                };
                if product.nested_type(&self.builder_name).is_none() {
                    let nested = TypeDecl::class(self.builder_name.clone()).static_();
                    return product.attach_nested(nested);
                }
                match product.nested_type_mut(&self.builder_name) {
                    Some(builder) => builder,
                    None => unreachable!("nested builder just ensured"),
                }
            }
        }
    }
}

fn join_names(params: &[Param]) -> String {
    params
        .iter()
        .map(|p| p.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
