//! Read-only traversal of type references.
//!
//! Implement [`TypeRefVisitor`] and drive it with [`walk_type_ref`] or
//! [`walk_declaration`]. Traversal is depth-first; generic arguments are
//! walked after the reference they belong to.

use std::collections::HashSet;

use obsgen_foundation::DeclId;

use crate::declaration::{Declaration, Member};
use crate::types::{PrimitiveType, RawFragment, RawStatements, TypeRef, TypeTarget};

/// Trait for read-only type-reference visitors.
///
/// The default implementations do nothing.
#[allow(unused_variables)]
pub trait TypeRefVisitor {
    /// Called when entering any reference.
    fn enter_type(&mut self, ty: &TypeRef) {}

    /// Visit a declaration reference.
    fn visit_declaration(&mut self, id: DeclId) {}

    /// Visit a bare name.
    fn visit_named(&mut self, name: &str) {}

    /// Visit a primitive.
    fn visit_primitive(&mut self, primitive: PrimitiveType) {}

    /// Visit a text fragment of a raw expression.
    fn visit_text(&mut self, text: &str) {}
}

/// Walk a type reference, its element types, raw fragments and generic arguments.
pub fn walk_type_ref<V: TypeRefVisitor>(visitor: &mut V, ty: &TypeRef) {
    visitor.enter_type(ty);
    match &ty.target {
        TypeTarget::Raw(raw) => walk_raw(visitor, raw),
        TypeTarget::Named(name) => visitor.visit_named(name),
        TypeTarget::Declaration(id) => visitor.visit_declaration(*id),
        TypeTarget::Array(element) => walk_type_ref(visitor, element),
        TypeTarget::Primitive(p) => visitor.visit_primitive(*p),
    }
    for arg in &ty.generic_args {
        walk_type_ref(visitor, arg);
    }
}

/// Walk the fragments of a raw expression.
pub fn walk_raw<V: TypeRefVisitor>(visitor: &mut V, raw: &RawStatements) {
    for fragment in raw.fragments() {
        match fragment {
            RawFragment::Text(text) => visitor.visit_text(text),
            RawFragment::Type(ty) => walk_type_ref(visitor, ty),
        }
    }
}

/// Walk every type reference reachable from a declaration.
///
/// Order: generic constraints, `extends`, `implements`, then members.
pub fn walk_declaration<V: TypeRefVisitor>(visitor: &mut V, decl: &Declaration) {
    for generic in &decl.generics {
        if let Some(constraint) = &generic.constraint {
            walk_type_ref(visitor, constraint);
        }
    }
    for base in &decl.extends {
        walk_type_ref(visitor, base);
    }
    for contract in decl.implements() {
        walk_type_ref(visitor, contract);
    }
    for member in &decl.members {
        match member {
            Member::Property(p) => {
                if let Some(ty) = &p.ty {
                    walk_type_ref(visitor, ty);
                }
                if let Some(init) = &p.init {
                    walk_raw(visitor, init);
                }
            }
            Member::Function(f) => {
                for param in &f.params {
                    if let Some(ty) = &param.ty {
                        walk_type_ref(visitor, ty);
                    }
                }
                walk_raw(visitor, &f.body);
            }
        }
    }
}

/// Collects every referenced declaration id, in first-seen order.
#[derive(Debug, Default)]
pub struct DeclarationCollector {
    /// Ids found so far.
    pub found: Vec<DeclId>,
    seen: HashSet<DeclId>,
}

impl TypeRefVisitor for DeclarationCollector {
    fn visit_declaration(&mut self, id: DeclId) {
        if self.seen.insert(id) {
            self.found.push(id);
        }
    }
}
