//! Integration tests for hydration function synthesis

use obsgen_model::{
    Declaration, FunctionMember, Module, PrimitiveType, PropertyMember, TypeRef, render::Renderer,
};
use obsgen_transform::{ObservableNaming, ObservableTransformer, Shape, TransformConfig};

/// `Person { name: string; tags: string[]; birthday: Date; friend: Person }`.
fn person() -> (Module, obsgen_foundation::DeclId) {
    let mut module = Module::new("models");
    let person = module.add_class("Person");
    let decl = module.get_mut(person).unwrap();
    *decl = Declaration::class("Person")
        .with_property(PropertyMember::new("name").with_type(PrimitiveType::String))
        .with_property(
            PropertyMember::new("tags").with_type(TypeRef::array(PrimitiveType::String.into())),
        )
        .with_property(PropertyMember::new("birthday").with_type(PrimitiveType::Date))
        .with_property(PropertyMember::new("friend").with_type(TypeRef::declaration(person)));
    (module, person)
}

fn hydrate_body(module: &Module, id: obsgen_foundation::DeclId, config: TransformConfig) -> String {
    let function_name = config.naming.hydrate_function.clone();
    let output = ObservableTransformer::new(config).transform(module).unwrap();
    let generated = output.declaration_for(id, Shape::Class).unwrap();
    let function: &FunctionMember = generated.function(&function_name).unwrap();
    Renderer::new(&[&output.module]).render_raw(&function.body)
}

#[test]
fn person_scenario() {
    let (module, person) = person();
    let body = hydrate_body(
        &module,
        person,
        TransformConfig::classes().with_conversion_functions(true),
    );
    assert_eq!(
        body,
        "this.name(input.name);\n\
         this.tags(input.tags);\n\
         this.birthday(new Date(input.birthday));\n\
         this.friend(new Person().hydrate(input.friend));\n\
         return this;"
    );
}

#[test]
fn person_scenario_with_existence_check() {
    let (module, person) = person();
    let body = hydrate_body(
        &module,
        person,
        TransformConfig::classes()
            .with_conversion_functions(true)
            .with_existence_check(true),
    );
    let guarded: Vec<_> = body.lines().filter(|l| l.starts_with("if (input.")).collect();
    assert_eq!(guarded.len(), 4);
    assert!(body.contains("if (input.birthday) { this.birthday(new Date(input.birthday)); }"));
    assert!(body.ends_with("return this;"));
}

#[test]
fn disabled_by_default() {
    let (module, person) = person();
    let output = ObservableTransformer::new(TransformConfig::classes())
        .transform(&module)
        .unwrap();
    let generated = output.declaration_for(person, Shape::Class).unwrap();
    assert!(generated.function("hydrate").is_none());
}

#[test]
fn interfaces_never_hydrate() {
    let (module, person) = person();
    let output = ObservableTransformer::new(
        TransformConfig::interfaces().with_conversion_functions(true),
    )
    .transform(&module)
    .unwrap();
    let generated = output.declaration_for(person, Shape::Interface).unwrap();
    assert!(generated.function("hydrate").is_none());
}

#[test]
fn arrays_of_declarations_hydrate_each_element() {
    let mut module = Module::new("models");
    let line = module.add_class("Line");
    let order = module.add(Declaration::class("Order").with_property(
        PropertyMember::new("lines").with_type(TypeRef::array(TypeRef::declaration(line))),
    ));

    let body = hydrate_body(
        &module,
        order,
        TransformConfig::classes().with_conversion_functions(true),
    );
    assert_eq!(
        body,
        "this.lines(input.lines.map(item => new Line().hydrate(item)));\nreturn this;"
    );
}

#[test]
fn derived_classes_delegate_to_base() {
    let mut module = Module::new("models");
    let entity = module.add(
        Declaration::class("Entity")
            .with_property(PropertyMember::new("id").with_type(PrimitiveType::Number)),
    );
    let user = module.add(
        Declaration::class("User")
            .extending(TypeRef::declaration(entity))
            .with_property(PropertyMember::new("email").with_type(PrimitiveType::String)),
    );

    let body = hydrate_body(
        &module,
        user,
        TransformConfig::classes().with_conversion_functions(true),
    );
    assert_eq!(
        body,
        "super.hydrate(input);\nthis.email(input.email);\nreturn this;"
    );
}

#[test]
fn inherited_interface_members_are_hydrated() {
    let mut module = Module::new("models");
    let stamped = module.add(
        Declaration::interface("Stamped")
            .with_property(PropertyMember::new("created").with_type(PrimitiveType::Date)),
    );
    let note = module.add(
        Declaration::interface("Note")
            .extending(TypeRef::declaration(stamped))
            .with_property(PropertyMember::new("text").with_type(PrimitiveType::String)),
    );

    let body = hydrate_body(
        &module,
        note,
        TransformConfig::classes().with_conversion_functions(true),
    );
    assert_eq!(
        body,
        "this.text(input.text);\nthis.created(new Date(input.created));\nreturn this;"
    );
}

#[test]
fn knockout_naming() {
    let (module, person) = person();
    let config = TransformConfig::classes()
        .with_conversion_functions(true)
        .with_naming(ObservableNaming::knockout());
    let output = ObservableTransformer::new(config).transform(&module).unwrap();
    let generated = output.declaration_for(person, Shape::Class).unwrap();

    let function = generated.function("fromJS").unwrap();
    assert_eq!(function.params[0].name, "obj");
    let body = Renderer::new(&[&output.module]).render_raw(&function.body);
    assert!(body.contains("this.friend(new Person().fromJS(obj.friend));"));
}
