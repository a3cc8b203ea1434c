//! Observable property wrapping and base copying.
//!
//! Interface-shape properties become `Observable<T>` / `ObservableArray<E>`
//! contracts with no initializer. Class-shape properties lose their type
//! annotation and are initialized through the observable factories.

use std::collections::{HashSet, VecDeque};

use obsgen_foundation::{DeclId, Result};
use obsgen_model::{
    GenericParameter, Member, MemberOrigin, PropertyMember, RawStatements, TypeRef,
};

use crate::config::ObservableNaming;
use crate::context::TransformContext;
use crate::shape::Shape;

/// Rewrites one property in place into its observable form for `shape`.
pub fn make_observable(property: &mut PropertyMember, shape: Shape, naming: &ObservableNaming) {
    match shape {
        Shape::Interface => wrap_contract(property, naming),
        Shape::Class => wrap_initialization(property, naming),
    }
}

fn wrap_contract(property: &mut PropertyMember, naming: &ObservableNaming) {
    property.init = None;
    property.ty = Some(match property.ty.take() {
        Some(ty) => match ty.array_element() {
            Some(element) => {
                TypeRef::named(&naming.observable_array_type).with_arg(element.clone())
            }
            None => TypeRef::named(&naming.observable_type).with_arg(ty),
        },
        None => TypeRef::named(&naming.observable_type).with_arg(TypeRef::named(&naming.any_type)),
    });
}

fn wrap_initialization(property: &mut PropertyMember, naming: &ObservableNaming) {
    let ty = property.ty.take();
    let mut init = RawStatements::new();
    match (property.init.take(), ty) {
        (Some(existing), _) => {
            init.push_text(format!("{}(", naming.observable_factory));
            init.append(existing);
            init.push_text(")");
        }
        (None, Some(ty)) if ty.is_array() => {
            init.push_text(format!("{}<", naming.observable_array_factory));
            if let Some(element) = ty.array_element() {
                init.push_type(element.clone());
            }
            init.push_text(">()");
        }
        (None, ty) => {
            init.push_text(format!("{}<", naming.observable_factory));
            init.push_type(ty.unwrap_or_else(|| TypeRef::named(&naming.any_type)));
            init.push_text(">()");
        }
    }
    property.init = Some(init);
}

impl TransformContext<'_> {
    /// Copies generics and properties of `source` onto `target`, wrapped for `shape`.
    ///
    /// Declared order is preserved. For class sources generating classes the
    /// base class is re-derived here from the source `extends` clause.
    ///
    /// # Errors
    /// Fails if either declaration does not exist.
    pub fn copy_base(&mut self, source: DeclId, target: DeclId, shape: Shape) -> Result<()> {
        let src = self.source_decl(source)?;

        let mut generics = Vec::with_capacity(src.generics.len());
        for generic in &src.generics {
            generics.push(GenericParameter {
                name: generic.name.clone(),
                constraint: self.map_type_opt(generic.constraint.as_ref(), shape),
            });
        }

        let mut bases = Vec::new();
        if shape == Shape::Class && src.is_class() {
            for base in &src.extends {
                bases.push(self.map_type(base, Shape::Class));
            }
        }

        let mut members = Vec::new();
        for (index, property) in src.indexed_properties() {
            let origin = MemberOrigin {
                declaration: source,
                member: index,
            };
            members.push(Member::Property(self.wrap_property(property, origin, shape)));
        }

        let dst = self.target_decl_mut(target)?;
        dst.generics.extend(generics);
        dst.extends.extend(bases);
        dst.members.extend(members);
        Ok(())
    }

    /// Copies properties inherited through extended source interfaces.
    ///
    /// Walks the `extends` chain breadth-first, each interface once. A
    /// property whose name is already on `target` is skipped.
    ///
    /// # Errors
    /// Fails if either declaration does not exist.
    pub fn copy_inherited(&mut self, source: DeclId, target: DeclId, shape: Shape) -> Result<()> {
        let mut present: HashSet<String> = self
            .target_decl_mut(target)?
            .properties()
            .map(|p| p.name.clone())
            .collect();
        let mut visited = HashSet::from([source]);
        let mut queue: VecDeque<DeclId> = self.extended_source_interfaces(source)?.into();
        let mut members = Vec::new();

        while let Some(ancestor) = queue.pop_front() {
            if !visited.insert(ancestor) {
                continue;
            }
            let decl = self.source_decl(ancestor)?;
            for (index, property) in decl.indexed_properties() {
                if !present.insert(property.name.clone()) {
                    continue;
                }
                let origin = MemberOrigin {
                    declaration: ancestor,
                    member: index,
                };
                members.push(Member::Property(self.wrap_property(property, origin, shape)));
            }
            queue.extend(self.extended_source_interfaces(ancestor)?);
        }

        self.target_decl_mut(target)?.members.extend(members);
        Ok(())
    }

    fn extended_source_interfaces(&self, id: DeclId) -> Result<Vec<DeclId>> {
        let source = self.source;
        let decl = self.source_decl(id)?;
        Ok(decl
            .extends
            .iter()
            .filter_map(TypeRef::as_declaration)
            .filter(|base| source.get(*base).is_some_and(|d| d.is_interface()))
            .collect())
    }

    fn wrap_property(
        &mut self,
        property: &PropertyMember,
        origin: MemberOrigin,
        shape: Shape,
    ) -> PropertyMember {
        let mut wrapped = PropertyMember {
            name: property.name.clone(),
            accessibility: property.accessibility,
            ty: self.map_type_opt(property.ty.as_ref(), shape),
            init: property.init.as_ref().map(|init| self.map_raw(init, shape)),
            origin: Some(origin),
        };
        make_observable(&mut wrapped, shape, &self.config.naming);
        wrapped
    }
}
