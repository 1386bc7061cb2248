//! `Date`, a plain struct with integer attributes.

use std::fmt;

use exposer::{ClassBuilder, ModuleBuilder, RegistrationError};

/// A calendar date. Fields are not validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Date {
    pub day: i32,
    pub month: i32,
    pub year: i32,
}

impl Date {
    pub fn new(day: i32, month: i32, year: i32) -> Self {
        Self { day, month, year }
    }
}

impl Default for Date {
    /// The epoch, 01/01/1970.
    fn default() -> Self {
        Self::new(1, 1, 1970)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{:04}", self.day, self.month, self.year)
    }
}

/// Binder for `Date`.
pub fn bind(module: &mut ModuleBuilder) -> Result<(), RegistrationError> {
    module.add_type(
        ClassBuilder::<Date>::structure("Date")
            .default_constructor()?
            .constructor(Date::new)?
            .attribute("day", |d: &Date| d.day, |d: &mut Date, v: i32| d.day = v)?
            .attribute("month", |d: &Date| d.month, |d: &mut Date, v: i32| d.month = v)?
            .attribute("year", |d: &Date| d.year, |d: &mut Date, v: i32| d.year = v)?
            .method("toString", |d: &Date| d.to_string())?
            .build(),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_epoch() {
        assert_eq!(Date::default(), Date::new(1, 1, 1970));
        assert_eq!(Date::default().to_string(), "01/01/1970");
    }

    #[test]
    fn test_zero_padding() {
        assert_eq!(Date::new(2, 3, 2004).to_string(), "02/03/2004");
        assert_eq!(Date::new(31, 12, 99).to_string(), "31/12/0099");
    }

    #[test]
    fn test_bind_declares_struct() {
        let mut module = ModuleBuilder::new("structs");
        bind(&mut module).unwrap();
        let module = module.build().unwrap();

        let date = module.get_type("Date").unwrap();
        assert_eq!(date.kind.to_string(), "struct");
        assert_eq!(date.constructors().len(), 2);
        assert_eq!(date.constructors_with_arity(3).count(), 1);
    }
}
