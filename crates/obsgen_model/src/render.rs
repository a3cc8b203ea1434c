//! Debug renderer for declaration graphs.
//!
//! Produces TypeScript-flavoured text for type references, raw statements and
//! declarations. Declaration names are looked up in the modules handed to the
//! renderer; references into any other graph render as `<unresolved ...>`.
//!
//! # Example
//!
//! ```
//! use obsgen_model::{Module, TypeRef, render::Renderer};
//!
//! let mut module = Module::new("models");
//! let person = module.add_class("Person");
//! let ty = TypeRef::named("Observable").with_arg(TypeRef::array(TypeRef::declaration(person)));
//!
//! let renderer = Renderer::new(&[&module]);
//! assert_eq!(renderer.render_type(&ty), "Observable<Person[]>");
//! ```

use std::fmt::Write;

use obsgen_foundation::DeclId;

use crate::declaration::{Declaration, DeclKind, GenericParameter, Member};
use crate::module::Module;
use crate::types::{RawFragment, RawStatements, TypeRef, TypeTarget};

/// Configuration for rendering.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Number of spaces for each indentation level.
    pub indent_width: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { indent_width: 4 }
    }
}

/// Renders graph fragments using names from a set of modules.
pub struct Renderer<'m> {
    modules: Vec<&'m Module>,
    config: RenderConfig,
}

impl<'m> Renderer<'m> {
    /// Creates a renderer resolving names against `modules`.
    #[must_use]
    pub fn new(modules: &[&'m Module]) -> Self {
        Self {
            modules: modules.to_vec(),
            config: RenderConfig::default(),
        }
    }

    /// Sets the render configuration.
    #[must_use]
    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    fn lookup(&self, id: DeclId) -> Option<&'m Declaration> {
        self.modules.iter().find_map(|m| m.get(id))
    }

    /// Renders a declaration's name, or a placeholder when it is unknown.
    #[must_use]
    pub fn declaration_name(&self, id: DeclId) -> String {
        self.lookup(id)
            .map_or_else(|| format!("<unresolved {id}>"), |d| d.name.clone())
    }

    /// Renders a type reference.
    #[must_use]
    pub fn render_type(&self, ty: &TypeRef) -> String {
        let mut out = String::new();
        self.write_type(&mut out, ty);
        out
    }

    /// Renders a raw statement list.
    #[must_use]
    pub fn render_raw(&self, raw: &RawStatements) -> String {
        let mut out = String::new();
        self.write_raw(&mut out, raw);
        out
    }

    /// Renders a whole declaration, or `None` if `id` is unknown.
    #[must_use]
    pub fn render_declaration(&self, id: DeclId) -> Option<String> {
        let decl = self.lookup(id)?;
        let mut out = String::new();
        self.write_declaration(&mut out, decl);
        Some(out)
    }

    fn write_type(&self, out: &mut String, ty: &TypeRef) {
        match &ty.target {
            TypeTarget::Raw(raw) => self.write_raw(out, raw),
            TypeTarget::Named(name) => out.push_str(name),
            TypeTarget::Declaration(id) => out.push_str(&self.declaration_name(*id)),
            TypeTarget::Array(element) => {
                self.write_type(out, element);
                out.push_str("[]");
            }
            TypeTarget::Primitive(p) => out.push_str(p.name()),
        }
        if !ty.generic_args.is_empty() {
            out.push('<');
            for (i, arg) in ty.generic_args.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                self.write_type(out, arg);
            }
            out.push('>');
        }
    }

    fn write_raw(&self, out: &mut String, raw: &RawStatements) {
        for fragment in raw.fragments() {
            match fragment {
                RawFragment::Text(text) => out.push_str(text),
                RawFragment::Type(ty) => self.write_type(out, ty),
            }
        }
    }

    fn write_generics(&self, out: &mut String, generics: &[GenericParameter]) {
        if generics.is_empty() {
            return;
        }
        out.push('<');
        for (i, g) in generics.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(&g.name);
            if let Some(constraint) = &g.constraint {
                out.push_str(" extends ");
                self.write_type(out, constraint);
            }
        }
        out.push('>');
    }

    fn write_list(&self, out: &mut String, keyword: &str, types: &[TypeRef]) {
        if types.is_empty() {
            return;
        }
        let _ = write!(out, " {keyword} ");
        for (i, ty) in types.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            self.write_type(out, ty);
        }
    }

    fn write_declaration(&self, out: &mut String, decl: &Declaration) {
        let indent = " ".repeat(self.config.indent_width);
        let _ = write!(out, "{} {}", decl.shape_name(), decl.name);
        self.write_generics(out, &decl.generics);
        self.write_list(out, "extends", &decl.extends);
        if let DeclKind::Class { implements } = &decl.kind {
            self.write_list(out, "implements", implements);
        }
        out.push_str(" {\n");
        for member in &decl.members {
            out.push_str(&indent);
            match member {
                Member::Property(p) => {
                    if let Some(access) = p.accessibility {
                        let _ = write!(out, "{} ", access.keyword());
                    }
                    out.push_str(&p.name);
                    if let Some(ty) = &p.ty {
                        out.push_str(": ");
                        self.write_type(out, ty);
                    }
                    if let Some(init) = &p.init {
                        out.push_str(" = ");
                        self.write_raw(out, init);
                    }
                    out.push_str(";\n");
                }
                Member::Function(f) => {
                    let _ = write!(out, "{}(", f.name);
                    for (i, param) in f.params.iter().enumerate() {
                        if i > 0 {
                            out.push_str(", ");
                        }
                        out.push_str(&param.name);
                        if let Some(ty) = &param.ty {
                            out.push_str(": ");
                            self.write_type(out, ty);
                        }
                    }
                    out.push_str(") {\n");
                    for line in self.render_raw(&f.body).lines() {
                        let _ = writeln!(out, "{indent}{indent}{line}");
                    }
                    let _ = writeln!(out, "{indent}}}");
                }
            }
        }
        out.push('}');
    }
}
