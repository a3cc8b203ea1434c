//! Integration tests for debug rendering

use obsgen_model::{
    Declaration, FunctionMember, FunctionParameter, GenericParameter, Module, PrimitiveType,
    PropertyMember, RawStatements, TypeRef,
    render::{RenderConfig, Renderer},
};

#[test]
fn renders_class_with_everything() {
    let mut module = Module::new("models");
    let base = module.add_class("Base");
    let named = module.add_interface("Named");
    let person = module.add(
        Declaration::class("Person")
            .with_generic(GenericParameter::new("T").with_constraint(TypeRef::declaration(base)))
            .extending(TypeRef::declaration(base))
            .implementing(TypeRef::declaration(named))
            .with_property(
                PropertyMember::new("tags").with_type(TypeRef::array(PrimitiveType::String.into())),
            )
            .with_function(
                FunctionMember::new("load", RawStatements::text("a();\nreturn this;"))
                    .with_param(FunctionParameter::untyped("input")),
            ),
    );

    let text = Renderer::new(&[&module])
        .with_config(RenderConfig { indent_width: 2 })
        .render_declaration(person)
        .unwrap();
    assert_eq!(
        text,
        "class Person<T extends Base> extends Base implements Named {\n  tags: string[];\n  load(input) {\n    a();\n    return this;\n  }\n}"
    );
}

#[test]
fn resolves_names_across_modules() {
    let mut lib = Module::new("lib");
    let external = lib.add_class("External");
    let module = Module::new("models");

    assert_eq!(
        Renderer::new(&[&module, &lib]).render_type(&TypeRef::declaration(external)),
        "External"
    );
    assert!(
        Renderer::new(&[&module])
            .render_type(&TypeRef::declaration(external))
            .starts_with("<unresolved")
    );
}
