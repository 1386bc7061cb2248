//! Textual listing of a module's exposed surface.
//!
//! The output is deterministic: functions, types and members are sorted by
//! name, constructors by kind then parameter list. Hidden attributes never
//! appear.
//!
//! ```text
//! module libE2EBindings
//!
//! fn add(int, int) -> int
//!
//! struct Date
//!     new()
//!     new(int, int, int)
//!     day: int
//!     fn toString() -> string
//! ```

use std::fmt::{self, Write};

use exposer_core::{ConstructorDescriptor, ConstructorKind, MethodDescriptor, TypeDescriptor};

use crate::module::Module;

const INDENT: &str = "    ";

/// Write the listing of `module` to `out`.
pub fn render<W: Write>(module: &Module, out: &mut W) -> fmt::Result {
    writeln!(out, "module {}", module.name())?;

    let mut functions: Vec<&MethodDescriptor> = module.functions().collect();
    functions.sort_by(|a, b| a.name.cmp(&b.name));
    if !functions.is_empty() {
        writeln!(out)?;
        for func in functions {
            write_callable(out, "", func)?;
        }
    }

    let mut types: Vec<&TypeDescriptor> = module.types().collect();
    types.sort_by(|a, b| a.name.cmp(&b.name));
    for ty in types {
        writeln!(out)?;
        write_type(out, ty)?;
    }
    Ok(())
}

/// Render the listing of `module` into a new string.
pub fn to_string(module: &Module) -> String {
    let mut out = String::new();
    // writing into a String cannot fail
    let _ = render(module, &mut out);
    out
}

fn write_type<W: Write>(out: &mut W, ty: &TypeDescriptor) -> fmt::Result {
    writeln!(out, "{} {}", ty.kind, ty.name)?;

    let mut ctors: Vec<&ConstructorDescriptor> = ty.constructors().iter().collect();
    ctors.sort_by_key(|ctor| (kind_rank(ctor.kind), ctor.signature()));
    for ctor in ctors {
        writeln!(out, "{INDENT}new({})", ctor.signature())?;
    }

    let mut attributes: Vec<_> = ty.attributes().filter(|attr| attr.is_exposed()).collect();
    attributes.sort_by(|a, b| a.name.cmp(&b.name));
    for attr in attributes {
        writeln!(out, "{INDENT}{}: {}", attr.name, attr.semantic_type)?;
    }

    let mut methods: Vec<&MethodDescriptor> = ty.methods().collect();
    methods.sort_by(|a, b| a.name.cmp(&b.name));
    for method in methods {
        write_callable(out, INDENT, method)?;
    }
    Ok(())
}

fn write_callable<W: Write>(out: &mut W, indent: &str, callable: &MethodDescriptor) -> fmt::Result {
    let params = callable
        .params
        .iter()
        .map(|p| p.name())
        .collect::<Vec<_>>()
        .join(", ");
    writeln!(
        out,
        "{indent}fn {}({}) -> {}",
        callable.name, params, callable.return_type
    )
}

fn kind_rank(kind: ConstructorKind) -> u8 {
    match kind {
        ConstructorKind::Default => 0,
        ConstructorKind::Copy => 1,
        ConstructorKind::Value => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ClassBuilder, ModuleBuilder};
    use exposer_core::{SemanticType, Visibility};

    #[derive(Default, Clone)]
    struct Counter {
        count: i32,
    }

    fn module() -> Module {
        let counter = ClassBuilder::<Counter>::class("Counter")
            .default_constructor()
            .unwrap()
            .copy_constructor()
            .unwrap()
            .constructor(|count: i32| Counter { count })
            .unwrap()
            .attribute("count", |c: &Counter| c.count, |c: &mut Counter, v: i32| c.count = v)
            .unwrap()
            .hidden_attribute("secret", SemanticType::Text, Visibility::Private)
            .unwrap()
            .method("increment", |c: &mut Counter| c.count += 1)
            .unwrap()
            .build();

        let mut builder = ModuleBuilder::new("demo");
        builder
            .function("zero", || 0i32)
            .function("add", |a: i32, b: i32| a + b)
            .add_type(counter);
        builder.build().unwrap()
    }

    #[test]
    fn listing_is_sorted_and_hides_private_members() {
        let expected = "\
module demo

fn add(int, int) -> int
fn zero() -> int

class Counter
    new()
    new(Counter)
    new(int)
    count: int
    fn increment() -> void
";
        assert_eq!(to_string(&module()), expected);
    }

    #[test]
    fn listing_is_deterministic() {
        assert_eq!(to_string(&module()), to_string(&module()));
    }

    #[test]
    fn empty_module_listing() {
        let module = ModuleBuilder::new("empty").build().unwrap();
        assert_eq!(to_string(&module), "module empty\n");
    }
}
