//! Duality resolution: which target shape a source declaration becomes and
//! how its inheritance edges are wired.
//!
//! | Source | Target | Wiring |
//! |---|---|---|
//! | class | interface | extends mapped base classes and implemented interfaces |
//! | interface | interface | extends mapped base interfaces |
//! | class | class | implements mapped interfaces; base class via [`copy_base`] |
//! | interface | class | implements interface forms of base interfaces; a base class is an error |
//!
//! [`copy_base`]: TransformContext::copy_base

use obsgen_foundation::{DeclId, Error, Result};
use obsgen_model::{DeclKind, TypeRef};
use tracing::debug;

use crate::context::TransformContext;
use crate::shape::Shape;

impl TransformContext<'_> {
    /// Fills the `shape` form `target` of the source declaration `source`.
    ///
    /// # Errors
    /// Fails on an interface extending a class while generating classes, on
    /// a source id that is not in the graph, and on hydration mismatches.
    pub fn fill(&mut self, source: DeclId, target: DeclId, shape: Shape) -> Result<()> {
        let decl = self.source_decl(source)?;
        debug!(source = %decl.name, from = decl.shape_name(), to = %shape, "filling declaration");

        let result = match (shape, &decl.kind) {
            (Shape::Interface, _) => self.generate_interface(source, target),
            (Shape::Class, DeclKind::Class { .. }) => self.generate_class_from_class(source, target),
            (Shape::Class, DeclKind::Interface) => {
                self.generate_class_from_interface(source, target)
            }
        };
        result.map_err(|e| e.in_frame(format!("{} {}", decl.shape_name(), decl.name)))
    }

    fn generate_interface(&mut self, source: DeclId, target: DeclId) -> Result<()> {
        let src = self.source_decl(source)?;

        let mut extends = Vec::with_capacity(src.extends.len() + src.implements().len());
        for base in &src.extends {
            extends.push(self.map_type(base, Shape::Interface));
        }
        for contract in src.implements() {
            extends.push(self.map_type(contract, Shape::Interface));
        }
        self.target_decl_mut(target)?.extends.extend(extends);

        self.copy_base(source, target, Shape::Interface)
    }

    fn generate_class_from_class(&mut self, source: DeclId, target: DeclId) -> Result<()> {
        let src = self.source_decl(source)?;

        let mut implements = Vec::with_capacity(src.implements().len());
        for contract in src.implements() {
            implements.push(self.map_type(contract, Shape::Class));
        }
        self.push_implements(target, implements)?;

        self.copy_base(source, target, Shape::Class)?;
        if self.config.enable_conversion_functions {
            self.synthesize_hydration(target)?;
        }
        Ok(())
    }

    fn generate_class_from_interface(&mut self, source: DeclId, target: DeclId) -> Result<()> {
        let src = self.source_decl(source)?;
        let graph = self.source;

        if let Some(base) = src
            .extends
            .iter()
            .filter_map(|base| base.as_declaration().and_then(|id| graph.get(id)))
            .find(|base| base.is_class())
        {
            return Err(Error::invalid_hierarchy(&src.name, &base.name));
        }

        let mut implements = Vec::with_capacity(src.extends.len());
        for base in &src.extends {
            let from_interface = base
                .as_declaration()
                .and_then(|id| graph.get(id))
                .is_some_and(|d| d.is_interface());
            let shape = if from_interface {
                Shape::Interface
            } else {
                Shape::Class
            };
            implements.push(self.map_type(base, shape));
        }
        self.push_implements(target, implements)?;

        self.copy_base(source, target, Shape::Class)?;
        self.copy_inherited(source, target, Shape::Class)?;
        if self.config.enable_conversion_functions {
            self.synthesize_hydration(target)?;
        }
        Ok(())
    }

    fn push_implements(&mut self, target: DeclId, contracts: Vec<TypeRef>) -> Result<()> {
        let dst = self.target_decl_mut(target)?;
        match &mut dst.kind {
            DeclKind::Class { implements } => {
                implements.extend(contracts);
                Ok(())
            }
            DeclKind::Interface => Err(Error::internal(format!(
                "cannot add implemented contracts to interface {}",
                dst.name
            ))),
        }
    }
}
