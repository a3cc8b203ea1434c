//! Observable rewrite of an existing module without building a second graph.

use obsgen_model::{Member, Module};
use tracing::debug;

use crate::config::ObservableNaming;
use crate::shape::Shape;
use crate::wrap::make_observable;

/// Wraps every property of `module` in place and returns how many were
/// rewritten.
///
/// Interface properties become observable contracts and class properties get
/// observable initializers. Inheritance edges, generics and functions are
/// left untouched.
pub fn make_observable_in_place(module: &mut Module, naming: &ObservableNaming) -> usize {
    let ids: Vec<_> = module.ids().collect();
    let mut rewritten = 0;
    for id in ids {
        let Some(decl) = module.get_mut(id) else {
            continue;
        };
        let shape = if decl.is_interface() {
            Shape::Interface
        } else {
            Shape::Class
        };
        for member in &mut decl.members {
            if let Member::Property(property) = member {
                make_observable(property, shape, naming);
                rewritten += 1;
            }
        }
    }
    debug!(module = %module.name, rewritten, "rewrote module in place");
    rewritten
}
