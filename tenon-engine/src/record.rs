//! Reduced synthesis path for record products.
//!
//! Records are fixed at construction, so the builder mirrors the component
//! list one-to-one into its own fields, offers object mutators over them,
//! and builds by constructing the product positionally. There is no holder
//! field, no factory path and no manipulation constructor.

use tenon_ir::{
    CompilationUnit, ConstructorDecl, FieldDecl, MethodDecl, Param, TypeDecl, TypeKind, TypeRef,
};

use crate::{
    config::{BuilderPlacement, EngineConfig},
    error::{Result, SynthesisError},
    imports,
    requirement::{self, MethodRequirement},
    sort,
    synthesis::{SynthesisOutcome, Target},
};

/// One synthesis run over a (record, builder) pair.
pub struct RecordSynthesis {
    name: String,
    ty: TypeRef,
    components: Vec<Param>,
    product_unit: CompilationUnit,
    target: Target,
    builder_name: String,
    config: EngineConfig,
}

impl RecordSynthesis {
    /// Bind the engine to a record unit and an optional pre-existing
    /// builder unit.
    pub fn new(
        product_unit: CompilationUnit,
        product_name: &str,
        existing_builder: Option<CompilationUnit>,
        config: EngineConfig,
    ) -> Result<Self> {
        let Some(product) = product_unit.type_named(product_name.trim()) else {
            return Err(SynthesisError::ProductClassNotFound {
                name: product_name.to_string(),
            });
        };
        if product.kind != TypeKind::Record {
            return Err(SynthesisError::NotARecord {
                name: product.name.clone(),
            });
        }

        let name = product.name.clone();
        let ty = product.type_ref();
        let components = product.components.clone();

        let (builder_name, target) = match config.placement {
            BuilderPlacement::Embedded => ("Builder".to_string(), Target::Embedded),
            BuilderPlacement::Separate => {
                let builder_name = config.naming.builder_name(&name);
                let mut unit = existing_builder.unwrap_or_default();
                if unit.package.is_none() {
                    unit.package = product_unit.package.clone();
                }
                imports::propagate(&product_unit, &mut unit, &[name.as_str(), builder_name.as_str()]);
                (builder_name, Target::Separate(unit))
            }
        };

        let mut engine = Self {
            name,
            ty,
            components,
            product_unit,
            target,
            builder_name,
            config,
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

    /// Mirror the record components into private builder fields.
    pub fn add_component_fields(&mut self) -> Result<()> {
        let components = self.components.clone();
        let builder = self.builder_mut();
        for component in components {
            if builder.field_named(&component.name).is_none() {
                builder.add_field(FieldDecl::new(component.name, component.ty));
            }
        }
        Ok(())
    }

    /// Ensure the builder is instantiable through a default constructor.
    pub fn add_constructor(&mut self) -> Result<()> {
        let builder = self.builder_mut();
        if !requirement::has_constructor(builder, &[]) {
            builder.add_constructor(ConstructorDecl::new());
        }
        Ok(())
    }

    /// One object mutator per component, assigning the builder's own field.
    pub fn add_mutators(&mut self) -> Result<()> {
        let naming = self.config.naming.clone();
        let components = self.components.clone();
        let builder_ty = TypeRef::new(self.builder_name.clone());
        let builder = self.builder_mut();

        for component in components {
            let name = naming.mutator_name(&component.name);
            let req = MethodRequirement::new(&name)
                .param(&component.ty)
                .returns(&builder_ty);
            if requirement::has_method(builder, &req) {
                continue;
            }
            builder.add_method(
                MethodDecl::new(name)
                    .param(Param::new(component.name.clone(), component.ty.clone()))
                    .returns(builder_ty.clone())
                    .body_line(format!("this.{} = {};", component.name, component.name))
                    .body_line("return this;"),
            );
        }
        Ok(())
    }

    /// The build method constructs the record positionally from the
    /// name-matched component fields.
    pub fn add_build_method(&mut self) -> Result<()> {
        let name = self.config.naming.build_method.clone();
        let product_ty = self.ty.clone();
        let args = self
            .components
            .iter()
            .map(|c| c.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let builder = self.builder_mut();

        let req = MethodRequirement::new(&name).returns(&product_ty);
        if !requirement::has_method(builder, &req) {
            builder.add_method(
                MethodDecl::new(name)
                    .returns(product_ty.clone())
                    .body_line(format!("return new {}({});", product_ty, args)),
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
                let product = match self.product_unit.type_named_mut(&self.name) {
                    Some(product) => product,
                    // Validated at construction; the engine never removes types.
                    None => unreachable!("record type disappeared from its unit"),
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

#[cfg(test)]
mod tests {
    use super::*;

    fn point_unit() -> CompilationUnit {
        CompilationUnit::with_package("com.example").type_decl(TypeDecl::record(
            "Point",
            vec![
                Param::new("x", TypeRef::new("int")),
                Param::new("y", TypeRef::new("int")),
            ],
        ))
    }

    fn run(unit: CompilationUnit) -> CompilationUnit {
        let mut engine =
            RecordSynthesis::new(unit, "Point", None, EngineConfig::default()).expect("engine");
        engine.add_component_fields().expect("fields");
        engine.add_constructor().expect("constructor");
        engine.add_mutators().expect("mutators");
        engine.add_build_method().expect("build");
        engine.canonicalize();
        engine.finish().builder.expect("separate builder unit")
    }

    #[test]
    fn test_record_builder_shape() {
        let builder_unit = run(point_unit());
        let builder = builder_unit.type_named("PointBuilder").expect("builder");

        assert_eq!(builder.fields().count(), 2);
        assert_eq!(builder.constructors().count(), 1);
        let build = builder
            .methods()
            .find(|m| m.name == "build")
            .expect("build method");
        assert_eq!(build.body, vec!["return new Point(x, y);"]);
        let with_x = builder
            .methods()
            .find(|m| m.name == "withX")
            .expect("withX");
        assert_eq!(with_x.body, vec!["this.x = x;", "return this;"]);
    }

    #[test]
    fn test_record_synthesis_is_idempotent() {
        let once = run(point_unit());
        let mut engine = RecordSynthesis::new(point_unit(), "Point", Some(once.clone()), EngineConfig::default())
            .expect("engine");
        engine.add_component_fields().expect("fields");
        engine.add_constructor().expect("constructor");
        engine.add_mutators().expect("mutators");
        engine.add_build_method().expect("build");
        engine.canonicalize();
        let twice = engine.finish().builder.expect("separate builder unit");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_class_product_is_rejected() {
        let unit = CompilationUnit::new().type_decl(TypeDecl::class("Point"));
        assert!(matches!(
            RecordSynthesis::new(unit, "Point", None, EngineConfig::default()),
            Err(SynthesisError::NotARecord { .. })
        ));
    }

    #[test]
    fn test_embedded_record_builder() {
        let config = EngineConfig {
            placement: BuilderPlacement::Embedded,
            ..EngineConfig::default()
        };
        let mut engine = RecordSynthesis::new(point_unit(), "Point", None, config).expect("engine");
        engine.add_component_fields().expect("fields");
        engine.add_build_method().expect("build");
        let outcome = engine.finish();
        assert!(outcome.builder.is_none());
        let point = outcome.product.type_named("Point").expect("point");
        let nested = point.nested_type("Builder").expect("nested builder");
        assert!(nested.is_static);
        assert_eq!(nested.fields().count(), 2);
    }
}
