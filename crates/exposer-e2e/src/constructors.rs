//! `DefaultedConstructors`, exercising default and copy construction.

use exposer::{ClassBuilder, ModuleBuilder, RegistrationError};

/// Holds a single text value. Copies own their own value.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DefaultedConstructors {
    pub value: String,
}

/// Binder for `DefaultedConstructors`.
pub fn bind(module: &mut ModuleBuilder) -> Result<(), RegistrationError> {
    module.add_type(
        ClassBuilder::<DefaultedConstructors>::class("DefaultedConstructors")
            .default_constructor()?
            .copy_constructor()?
            .attribute(
                "value",
                |c: &DefaultedConstructors| c.value.clone(),
                |c: &mut DefaultedConstructors, v: String| c.value = v,
            )?
            .build(),
    );
    Ok(())
}
