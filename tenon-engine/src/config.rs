//! Policy value objects.
//!
//! One immutable struct per policy axis, composed into [`EngineConfig`] and
//! passed by value into the engine. Nothing here is mutated during a run.

use serde::{Deserialize, Serialize};
use tenon_core::{JAVA_NAMING, capitalize, singularize};
use tenon_ir::{AdderVariant, MutatorVariant};

/// The configurable vocabulary of generated members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingPolicy {
    /// Name of the terminal build method.
    pub build_method: String,
    /// Name of generated static factory methods.
    pub factory_method: String,
    /// Prefix of mutator methods.
    pub mutator_prefix: String,
    /// Prefix of adder methods.
    pub adder_prefix: String,
    /// Name of the builder's product holder field.
    pub product_field: String,
    /// Suffix appended to the product name for a separate builder type.
    pub builder_suffix: String,
}

impl Default for NamingPolicy {
    fn default() -> Self {
        Self {
            build_method: "build".to_string(),
            factory_method: "of".to_string(),
            mutator_prefix: "with".to_string(),
            adder_prefix: "add".to_string(),
            product_field: "product".to_string(),
            builder_suffix: "Builder".to_string(),
        }
    }
}

impl NamingPolicy {
    /// Name of a separate builder type for the given product.
    pub fn builder_name(&self, product: &str) -> String {
        format!("{}{}", product, self.builder_suffix)
    }

    /// Default mutator name for a field (`items` -> `withItems`).
    pub fn mutator_name(&self, field: &str) -> String {
        self.prefixed(&self.mutator_prefix, field)
    }

    /// Default adder name for a field, singularized (`items` -> `addItem`).
    pub fn adder_name(&self, field: &str) -> String {
        self.prefixed(&self.adder_prefix, &singularize(field))
    }

    fn prefixed(&self, prefix: &str, name: &str) -> String {
        if prefix.is_empty() {
            JAVA_NAMING.safe_name(name)
        } else {
            JAVA_NAMING.safe_name(&format!("{}{}", prefix, capitalize(name)))
        }
    }
}

/// How builder instances come into existence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CreationStrategy {
    /// Public constructors mirroring the product's constructors.
    #[default]
    Constructor,
    /// Static factory methods plus a private wrap constructor.
    Factory,
}

/// Where the builder type lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BuilderPlacement {
    /// An independent top-level type named product + suffix.
    #[default]
    Separate,
    /// A static nested type named `Builder` inside the product.
    Embedded,
}

/// How products lacking an explicit mutability marker are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MutabilityPolicy {
    /// When true, unmarked products get the manipulation constructor/factory.
    pub mutable_by_default: bool,
}

/// Global variant defaults, used when a field carries no override.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VariantDefaults {
    pub mutators: Vec<MutatorVariant>,
    pub adders: Vec<AdderVariant>,
}

/// Accessor generation options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AccessorConfig {
    /// When true, sequence fields get a `Stream`-valued accessor instead of
    /// returning the raw field.
    pub stream_sequences: bool,
}

/// The full per-call configuration of the synthesis engine.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    pub creation: CreationStrategy,
    pub placement: BuilderPlacement,
    pub mutability: MutabilityPolicy,
    pub variants: VariantDefaults,
    pub naming: NamingPolicy,
}
