//! Free functions and the `World` class.

use exposer::SemanticType;
use exposer::{ClassBuilder, ModuleBuilder, RegistrationError, Visibility};

// =============================================================================
// FREE FUNCTIONS
// =============================================================================

/// Literally do nothing.
pub fn do_nothing() {}

/// A string containing `Hello world`.
pub fn hello_world() -> String {
    "Hello world".to_string()
}

/// Compute `lhs + rhs`. Wraps on overflow.
pub fn add(lhs: i32, rhs: i32) -> i32 {
    lhs.wrapping_add(rhs)
}

// =============================================================================
// WORLD
// =============================================================================

/// Stores a message and greets with it.
#[derive(Debug, Default, Clone)]
pub struct World {
    msg: String,
}

impl World {
    pub fn set(&mut self, msg: String) {
        self.msg = msg;
    }

    /// The last message passed to [`World::set`], empty before that.
    pub fn greet(&self) -> String {
        self.msg.clone()
    }
}

/// Binder for the free functions and `World`.
pub fn bind(module: &mut ModuleBuilder) -> Result<(), RegistrationError> {
    module
        .function("doNothing", do_nothing)
        .function("helloWorld", hello_world)
        .function("add", add);

    module.add_type(
        ClassBuilder::<World>::class("World")
            .default_constructor()?
            .method("set", World::set)?
            .method("greet", World::greet)?
            .hidden_attribute("msg", SemanticType::Text, Visibility::Private)?
            .build(),
    );
    Ok(())
}
