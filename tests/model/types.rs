//! Integration tests for type references and raw statements

use obsgen_model::{
    Module, PrimitiveType, RawFragment, RawStatements, TypeRef, TypeTarget,
    visitor::{DeclarationCollector, walk_type_ref},
};

#[test]
fn array_accessors() {
    let element = TypeRef::primitive(PrimitiveType::Number);
    let array = TypeRef::array(element.clone());
    assert!(array.is_array());
    assert_eq!(array.array_element(), Some(&element));
    assert!(!element.is_array());
    assert_eq!(element.array_element(), None);
}

#[test]
fn conversions() {
    let mut module = Module::new("models");
    let id = module.add_class("Person");

    assert_eq!(TypeRef::from(id).as_declaration(), Some(id));
    assert_eq!(
        TypeRef::from(PrimitiveType::Date).as_primitive(),
        Some(PrimitiveType::Date)
    );
    assert!(PrimitiveType::Date.is_date());
    assert!(!PrimitiveType::String.is_date());
}

#[test]
fn generic_arguments_keep_order() {
    let ty = TypeRef::named("Map")
        .with_arg(PrimitiveType::String.into())
        .with_arg(PrimitiveType::Number.into());
    let args: Vec<_> = ty.generic_args.iter().filter_map(TypeRef::as_primitive).collect();
    assert_eq!(args, vec![PrimitiveType::String, PrimitiveType::Number]);
}

#[test]
fn raw_statements_collect_embedded_types() {
    let mut module = Module::new("models");
    let id = module.add_class("Person");

    let mut raw = RawStatements::text("new ");
    raw.push_type(TypeRef::declaration(id));
    raw.push_text("()");

    assert_eq!(raw.fragments().len(), 3);
    assert!(matches!(raw.fragments()[1], RawFragment::Type(_)));
    let embedded: Vec<_> = raw.type_refs().filter_map(TypeRef::as_declaration).collect();
    assert_eq!(embedded, vec![id]);
}

#[test]
fn collector_walks_nested_references() {
    let mut module = Module::new("models");
    let a = module.add_class("A");
    let b = module.add_class("B");

    let mut raw = RawStatements::new();
    raw.push_type(TypeRef::declaration(b));
    let ty = TypeRef::array(TypeRef::declaration(a)).with_arg(TypeRef::raw(raw));

    let mut collector = DeclarationCollector::default();
    walk_type_ref(&mut collector, &ty);
    assert_eq!(collector.found, vec![a, b]);
    assert!(matches!(ty.target, TypeTarget::Array(_)));
}
