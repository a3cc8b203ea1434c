//! Integration tests for reference mapping
//!
//! Tests reference stability, shape duality and unmapped passthrough.

use obsgen_model::{Declaration, Module, PrimitiveType, PropertyMember, TypeRef};
use obsgen_transform::{
    Lookup, ObservableTransformer, ReferenceMap, Shape, TransformConfig, TransformContext,
};

fn address_book() -> (Module, obsgen_foundation::DeclId, obsgen_foundation::DeclId) {
    let mut module = Module::new("models");
    let address = module.add(
        Declaration::class("Address")
            .with_property(PropertyMember::new("street").with_type(PrimitiveType::String)),
    );
    let person = module.add(
        Declaration::class("Person")
            .with_property(PropertyMember::new("home").with_type(TypeRef::declaration(address)))
            .with_property(PropertyMember::new("work").with_type(TypeRef::declaration(address))),
    );
    (module, address, person)
}

// =============================================================================
// Reference Stability
// =============================================================================

#[test]
fn two_references_resolve_to_one_target() {
    let (module, address, person) = address_book();
    let output = ObservableTransformer::new(TransformConfig::interfaces())
        .transform(&module)
        .unwrap();

    let target = output.target_of(address, Shape::Interface).unwrap();
    let generated = output.declaration_for(person, Shape::Interface).unwrap();
    for name in ["home", "work"] {
        let ty = generated.property(name).unwrap().ty.as_ref().unwrap();
        assert_eq!(ty.generic_args[0].as_declaration(), Some(target));
    }
}

#[test]
fn repeated_resolution_is_memoized() {
    let (module, address, _) = address_book();
    let config = TransformConfig::classes();
    let mut ctx = TransformContext::new(&module, &config);
    ctx.declare_skeletons(Shape::Class);

    let first = ctx.resolve(address, Shape::Class);
    let second = ctx.resolve(address, Shape::Class);
    assert_eq!(first, second);

    let companion = ctx.resolve(address, Shape::Interface);
    assert_eq!(ctx.resolve(address, Shape::Interface), companion);
    assert_eq!(ctx.pending_companions(), 1);
    assert_eq!(ctx.target().len(), 3);
}

// =============================================================================
// Shape Duality
// =============================================================================

#[test]
fn both_forms_are_distinct_and_consistent() {
    let mut module = Module::new("models");
    let named = module.add(
        Declaration::interface("Named")
            .with_property(PropertyMember::new("name").with_type(PrimitiveType::String)),
    );
    module.add(Declaration::interface("Person").extending(TypeRef::declaration(named)));

    let output = ObservableTransformer::new(TransformConfig::classes())
        .transform(&module)
        .unwrap();

    let class_id = output.target_of(named, Shape::Class).unwrap();
    let interface_id = output.target_of(named, Shape::Interface).unwrap();
    assert_ne!(class_id, interface_id);

    let class = output.module.get(class_id).unwrap();
    assert!(class.is_class());
    let property = class.property("name").unwrap();
    assert!(property.ty.is_none());
    assert!(property.init.is_some());

    let contract = output.module.get(interface_id).unwrap();
    assert!(contract.is_interface());
    assert_eq!(contract.name, "INamed");
    let property = contract.property("name").unwrap();
    assert!(property.init.is_none());
    assert!(property.ty.is_some());
}

#[test]
fn interface_mode_never_creates_class_forms() {
    let (module, address, person) = address_book();
    let output = ObservableTransformer::new(TransformConfig::interfaces())
        .transform(&module)
        .unwrap();

    assert_eq!(output.module.len(), 2);
    for id in [address, person] {
        assert!(output.target_of(id, Shape::Class).is_none());
    }
}

// =============================================================================
// Unmapped References
// =============================================================================

#[test]
fn external_declarations_pass_through() {
    let mut lib = Module::new("lib");
    let external = lib.add_class("Money");

    let mut module = Module::new("models");
    let order = module.add(
        Declaration::class("Order")
            .extending(TypeRef::declaration(external))
            .with_property(PropertyMember::new("total").with_type(TypeRef::declaration(external))),
    );

    let output = ObservableTransformer::new(TransformConfig::interfaces())
        .transform(&module)
        .unwrap();
    let generated = output.declaration_for(order, Shape::Interface).unwrap();
    assert_eq!(generated.extends[0].as_declaration(), Some(external));
    let total = generated.property("total").unwrap().ty.as_ref().unwrap();
    assert_eq!(total.generic_args[0].as_declaration(), Some(external));
    assert_eq!(
        output.module.external_references().into_iter().collect::<Vec<_>>(),
        vec![external]
    );
}

// =============================================================================
// Reference Map
// =============================================================================

#[test]
fn reference_map_records_registration_order() {
    let (module, address, person) = address_book();
    let output = ObservableTransformer::new(TransformConfig::classes())
        .transform(&module)
        .unwrap();

    let sources: Vec<_> = output.references.iter().map(|(source, _)| source).collect();
    assert_eq!(sources, vec![address, person]);
    let target = output.target_of(person, Shape::Class).unwrap();
    assert_eq!(output.references.source_of(target), Some(person));
}

#[test]
fn reset_forgets_every_entry() {
    let (module, address, _) = address_book();
    let output = ObservableTransformer::default().transform(&module).unwrap();
    let mut references: ReferenceMap = output.references;
    assert!(!references.is_empty());

    references.reset();
    assert!(references.is_empty());
    assert_eq!(references.lookup(address, Shape::Class), Lookup::Unmapped);
}
