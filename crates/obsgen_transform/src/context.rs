//! Per-run transformation state.
//!
//! A [`TransformContext`] owns everything one run mutates: the target module,
//! the [`ReferenceMap`] and the queue of companion forms still to fill. It is
//! built fresh for every run and consumed by [`TransformContext::finish`].

use std::collections::VecDeque;

use obsgen_foundation::{DeclId, Error, Result};
use obsgen_model::{Declaration, Module};
use tracing::{debug, trace};

use crate::config::TransformConfig;
use crate::mapper::{Lookup, ReferenceMap};
use crate::shape::Shape;

/// The result of one transformation run.
#[derive(Debug)]
pub struct TransformOutput {
    /// The generated graph.
    pub module: Module,
    /// Source-to-target identities recorded during the run.
    pub references: ReferenceMap,
}

impl TransformOutput {
    /// Returns the `shape` form generated for `source`, if any.
    #[must_use]
    pub fn target_of(&self, source: DeclId, shape: Shape) -> Option<DeclId> {
        self.references.entry(source)?.form(shape)
    }

    /// Returns the generated declaration for `source` in `shape`.
    #[must_use]
    pub fn declaration_for(&self, source: DeclId, shape: Shape) -> Option<&Declaration> {
        self.module.get(self.target_of(source, shape)?)
    }
}

/// Mutable state of a single transformation run.
pub struct TransformContext<'a> {
    pub(crate) source: &'a Module,
    pub(crate) config: &'a TransformConfig,
    pub(crate) target: Module,
    pub(crate) references: ReferenceMap,
    companions: VecDeque<(DeclId, DeclId, Shape)>,
}

impl<'a> TransformContext<'a> {
    /// Creates a context with an empty target module named after `source`.
    #[must_use]
    pub fn new(source: &'a Module, config: &'a TransformConfig) -> Self {
        Self {
            source,
            config,
            target: Module::new(source.name.clone()),
            references: ReferenceMap::new(),
            companions: VecDeque::new(),
        }
    }

    /// Returns the target module built so far.
    #[must_use]
    pub fn target(&self) -> &Module {
        &self.target
    }

    /// Returns the reference map built so far.
    #[must_use]
    pub fn references(&self) -> &ReferenceMap {
        &self.references
    }

    /// Declares one empty `shape` skeleton per source declaration.
    ///
    /// Every source declaration is registered before any is filled, so
    /// forward and cyclic references resolve during the fill phase.
    /// Returns `(source, skeleton)` pairs in source order.
    pub fn declare_skeletons(&mut self, shape: Shape) -> Vec<(DeclId, DeclId)> {
        let source: &'a Module = self.source;
        let mut pairs = Vec::with_capacity(source.len());
        for (id, decl) in source.iter() {
            let skeleton = self.add_form(&decl.name, shape);
            self.references.declare(id, shape, skeleton);
            debug!(source = %decl.name, %shape, "declared skeleton");
            pairs.push((id, skeleton));
        }
        pairs
    }

    /// Resolves a referenced declaration to its `shape` form.
    ///
    /// Declarations outside the source graph come back unchanged. A mapped
    /// declaration without a `shape` form gets a companion form, created once
    /// and queued for filling.
    pub fn resolve(&mut self, id: DeclId, shape: Shape) -> DeclId {
        match self.references.lookup(id, shape) {
            Lookup::Unmapped => id,
            Lookup::Mapped(target) => target,
            Lookup::Missing => self.create_companion(id, shape),
        }
    }

    fn create_companion(&mut self, id: DeclId, shape: Shape) -> DeclId {
        let source: &'a Module = self.source;
        let Some(decl) = source.get(id) else {
            // Entries are only ever declared for source declarations.
            return id;
        };
        let name = format!("{}{}", self.config.naming.companion_prefix, decl.name);
        let companion = self.add_form(&name, shape);
        let declared = self.references.declare(id, shape, companion);
        debug_assert!(declared, "companion form declared twice");
        trace!(source = %decl.name, companion = %name, %shape, "created companion form");
        self.companions.push_back((id, companion, shape));
        companion
    }

    fn add_form(&mut self, name: &str, shape: Shape) -> DeclId {
        match shape {
            Shape::Class => self.target.add_class(name),
            Shape::Interface => self.target.add_interface(name),
        }
    }

    /// Fills every queued companion form, including ones created meanwhile.
    ///
    /// # Errors
    /// Returns the first error raised while filling a companion.
    pub fn fill_companions(&mut self) -> Result<()> {
        while let Some((source, companion, shape)) = self.companions.pop_front() {
            self.fill(source, companion, shape)?;
        }
        Ok(())
    }

    /// Returns the number of companion forms still waiting to be filled.
    #[must_use]
    pub fn pending_companions(&self) -> usize {
        self.companions.len()
    }

    /// Looks up a source declaration for a dispatch site.
    pub(crate) fn source_decl(&self, id: DeclId) -> Result<&'a Declaration> {
        let source: &'a Module = self.source;
        source.get(id).ok_or_else(|| Error::unsupported_shape(id))
    }

    /// Looks up a target declaration for mutation.
    pub(crate) fn target_decl_mut(&mut self, id: DeclId) -> Result<&mut Declaration> {
        self.target
            .get_mut(id)
            .ok_or_else(|| Error::internal(format!("target declaration {id} does not exist")))
    }

    /// Consumes the context, handing back the finished graph and mapping.
    #[must_use]
    pub fn finish(self) -> TransformOutput {
        TransformOutput {
            module: self.target,
            references: self.references,
        }
    }
}
