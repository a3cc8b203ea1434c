//! Hydration function synthesis.
//!
//! Appends a `hydrate(input)` method to a generated class that copies every
//! observable property from a plain object. Array elements and nested values
//! whose type is a declaration of the source graph are hydrated recursively
//! on fresh instances; dates are rebuilt with the date constructor.

use obsgen_foundation::{DeclId, Error, Result};
use obsgen_model::{
    FunctionMember, FunctionParameter, Member, MemberOrigin, Module, PropertyMember,
    RawStatements, TypeRef,
};

use crate::context::TransformContext;
use crate::shape::Shape;

/// How one property is assigned from the input object.
enum Assignment {
    /// Array whose elements are hydrated on fresh instances.
    HydratedArray(TypeRef),
    /// Nested value hydrated on a fresh instance.
    Hydrated(TypeRef),
    /// Date rebuilt from the input field.
    Date,
    /// Value assigned unchanged.
    Plain,
}

impl<'a> TransformContext<'a> {
    /// Appends the hydration function to the class form `target`.
    ///
    /// # Errors
    /// Fails with a missing-counterpart error when a generated property has
    /// no originating source property.
    pub fn synthesize_hydration(&mut self, target: DeclId) -> Result<()> {
        let naming = &self.config.naming;
        let param = naming.hydrate_parameter.clone();
        let function = naming.hydrate_function.clone();
        let guard = self.config.conversion_existence_check;

        let dst = self.target_decl_mut(target)?;
        let has_base = dst.base().is_some();
        let target_name = dst.name.clone();
        let properties: Vec<(String, Option<MemberOrigin>)> = dst
            .properties()
            .map(|p| (p.name.clone(), p.origin))
            .collect();

        let mut body = RawStatements::new();
        if has_base {
            body.push_text(format!("super.{function}({param});\n"));
        }

        for (name, origin) in properties {
            let original = self.original_property(&target_name, &name, origin)?;
            let assignment = self.classify(original);

            if guard {
                body.push_text(format!("if ({param}.{name}) {{ "));
            }
            match assignment {
                Assignment::HydratedArray(element) => {
                    body.push_text(format!("this.{name}({param}.{name}.map(item => new "));
                    body.push_type(element);
                    body.push_text(format!("().{function}(item)));"));
                }
                Assignment::Hydrated(ty) => {
                    body.push_text(format!("this.{name}(new "));
                    body.push_type(ty);
                    body.push_text(format!("().{function}({param}.{name}));"));
                }
                Assignment::Date => {
                    body.push_text(format!("this.{name}(new Date({param}.{name}));"));
                }
                Assignment::Plain => {
                    body.push_text(format!("this.{name}({param}.{name});"));
                }
            }
            if guard {
                body.push_text(" }");
            }
            body.push_text("\n");
        }
        body.push_text("return this;");

        let hydrate =
            FunctionMember::new(function, body).with_param(FunctionParameter::untyped(param));
        self.target_decl_mut(target)?
            .members
            .push(Member::Function(hydrate));
        Ok(())
    }

    fn original_property(
        &self,
        target_name: &str,
        name: &str,
        origin: Option<MemberOrigin>,
    ) -> Result<&'a PropertyMember> {
        let source: &'a Module = self.source;
        origin
            .and_then(|o| source.get(o.declaration)?.members.get(o.member))
            .and_then(Member::as_property)
            .filter(|p| p.name == name)
            .ok_or_else(|| Error::missing_counterpart(target_name, name))
    }

    fn classify(&mut self, original: &PropertyMember) -> Assignment {
        let Some(ty) = &original.ty else {
            return Assignment::Plain;
        };
        if let Some(element) = ty.array_element() {
            return if self.is_graph_declaration(element) {
                Assignment::HydratedArray(self.map_type(element, Shape::Class))
            } else {
                Assignment::Plain
            };
        }
        if ty.as_primitive().is_some_and(|p| p.is_date()) {
            return Assignment::Date;
        }
        if self.is_graph_declaration(ty) {
            return Assignment::Hydrated(self.map_type(ty, Shape::Class));
        }
        Assignment::Plain
    }

    fn is_graph_declaration(&self, ty: &TypeRef) -> bool {
        ty.as_declaration().is_some_and(|id| self.source.contains(id))
    }
}
