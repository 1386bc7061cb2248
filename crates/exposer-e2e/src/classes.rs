//! `Person`, a class exposing public text attributes.

use std::fmt;

use exposer::{ClassBuilder, ModuleBuilder, RegistrationError};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

/// Binder for `Person`.
pub fn bind(module: &mut ModuleBuilder) -> Result<(), RegistrationError> {
    module.add_type(
        ClassBuilder::<Person>::class("Person")
            .default_constructor()?
            .attribute(
                "firstName",
                |p: &Person| p.first_name.clone(),
                |p: &mut Person, v: String| p.first_name = v,
            )?
            .attribute(
                "lastName",
                |p: &Person| p.last_name.clone(),
                |p: &mut Person, v: String| p.last_name = v,
            )?
            .method("toString", |p: &Person| p.to_string())?
            .build(),
    );
    Ok(())
}
