//! Type reference rewriting.
//!
//! Rebuilds a source [`TypeRef`] for the target graph. Declaration references
//! go through the reference map; every other form is copied, recursing into
//! array elements, embedded raw references and generic arguments.

use obsgen_model::{RawFragment, RawStatements, TypeRef, TypeTarget};

use crate::context::TransformContext;
use crate::shape::Shape;

impl TransformContext<'_> {
    /// Rewrites a type reference for the target graph.
    ///
    /// Dispatch, first match wins:
    /// 1. raw: embedded references rewritten, text kept
    /// 2. bare name: copied
    /// 3. declaration: resolved to its `shape` form
    /// 4. array: element rewritten
    /// 5. anything else: copied
    ///
    /// Generic arguments are rewritten independently and keep their order.
    pub fn map_type(&mut self, ty: &TypeRef, shape: Shape) -> TypeRef {
        let target = match &ty.target {
            TypeTarget::Raw(raw) => TypeTarget::Raw(self.map_raw(raw, shape)),
            TypeTarget::Named(name) => TypeTarget::Named(name.clone()),
            TypeTarget::Declaration(id) => TypeTarget::Declaration(self.resolve(*id, shape)),
            TypeTarget::Array(element) => TypeTarget::Array(Box::new(self.map_type(element, shape))),
            TypeTarget::Primitive(p) => TypeTarget::Primitive(*p),
        };

        let mut generic_args = Vec::with_capacity(ty.generic_args.len());
        for arg in &ty.generic_args {
            generic_args.push(self.map_type(arg, shape));
        }

        TypeRef {
            target,
            generic_args,
        }
    }

    /// Rewrites an optional type reference; `None` stays `None`.
    pub fn map_type_opt(&mut self, ty: Option<&TypeRef>, shape: Shape) -> Option<TypeRef> {
        ty.map(|ty| self.map_type(ty, shape))
    }

    /// Rewrites the embedded references of a raw expression.
    pub fn map_raw(&mut self, raw: &RawStatements, shape: Shape) -> RawStatements {
        let mut fragments = Vec::with_capacity(raw.fragments().len());
        for fragment in raw.fragments() {
            fragments.push(match fragment {
                RawFragment::Text(text) => RawFragment::Text(text.clone()),
                RawFragment::Type(ty) => RawFragment::Type(self.map_type(ty, shape)),
            });
        }
        fragments.into_iter().collect()
    }
}
