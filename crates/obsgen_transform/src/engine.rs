//! The transformation entry point.

use obsgen_foundation::{Error, Result};
use obsgen_model::Module;
use tracing::{debug, info_span, warn};

use crate::config::TransformConfig;
use crate::context::{TransformContext, TransformOutput};

/// Rewrites declaration graphs into observable view-model graphs.
///
/// The transformer holds only configuration. Every call to
/// [`transform`](Self::transform) runs on fresh state, so one transformer can
/// be reused across modules.
///
/// # Example
///
/// ```
/// use obsgen_model::{Module, PrimitiveType, PropertyMember, Declaration};
/// use obsgen_transform::{ObservableTransformer, Shape, TransformConfig};
///
/// let mut source = Module::new("models");
/// let person = source.add(
///     Declaration::class("Person")
///         .with_property(PropertyMember::new("name").with_type(PrimitiveType::String)),
/// );
///
/// let transformer = ObservableTransformer::new(TransformConfig::interfaces());
/// let output = transformer.transform(&source).unwrap();
///
/// let generated = output.declaration_for(person, Shape::Interface).unwrap();
/// assert!(generated.is_interface());
/// assert!(generated.property("name").is_some());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ObservableTransformer {
    config: TransformConfig,
}

impl ObservableTransformer {
    /// Creates a transformer with the given configuration.
    #[must_use]
    pub fn new(config: TransformConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &TransformConfig {
        &self.config
    }

    /// Generates the observable counterpart of every declaration in `source`.
    ///
    /// # Errors
    /// Aborts on the first invalid hierarchy, dangling declaration or
    /// hydration mismatch. The partially built target is discarded and the
    /// error carries the module name and the declaration being generated.
    pub fn transform(&self, source: &Module) -> Result<TransformOutput> {
        let span = info_span!("transform", module = %source.name, mode = ?self.config.mode);
        let _enter = span.enter();

        self.run(source).map_err(|e| with_module(e, &source.name))
    }

    fn run(&self, source: &Module) -> Result<TransformOutput> {
        let shape = self.config.mode.primary_shape();
        let mut ctx = TransformContext::new(source, &self.config);

        let pairs = ctx.declare_skeletons(shape);
        for (source_id, target_id) in pairs {
            ctx.fill(source_id, target_id, shape)?;
        }
        ctx.fill_companions()?;

        let output = ctx.finish();
        for name in output.module.duplicate_names() {
            warn!(declaration = name, "generated declarations share a name");
        }
        debug!(
            declarations = output.module.len(),
            external = output.module.external_references().len(),
            "transform finished"
        );
        Ok(output)
    }
}

fn with_module(mut error: Error, module: &str) -> Error {
    let context = error.context.take().unwrap_or_default();
    error.with_context(context.with_module(module))
}
