//! File naming styles.

use std::{fmt, str::FromStr};

use nestdto_core::{to_camel_case, to_kebab_case, to_pascal_case, to_snake_case};

use crate::Error;

/// Supported styles for generated file names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum NamingStyle {
    /// `create-user-profile`
    Kebab,
    /// `createUserProfile`
    #[default]
    Camel,
    /// `CreateUserProfile`
    Pascal,
    /// `create_user_profile`
    Snake,
}

impl NamingStyle {
    /// Every supported style, in the order they are listed to users.
    pub const ALL: [NamingStyle; 4] = [Self::Kebab, Self::Camel, Self::Pascal, Self::Snake];

    /// Returns the style identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            NamingStyle::Kebab => "kebab",
            NamingStyle::Camel => "camel",
            NamingStyle::Pascal => "pascal",
            NamingStyle::Snake => "snake",
        }
    }

    /// Render an identifier in this style.
    pub fn apply(&self, name: &str) -> String {
        match self {
            NamingStyle::Kebab => to_kebab_case(name),
            NamingStyle::Camel => to_camel_case(name),
            NamingStyle::Pascal => to_pascal_case(name),
            NamingStyle::Snake => to_snake_case(name),
        }
    }

    /// Quoted, comma-separated list of valid styles for error messages.
    pub fn valid_choices() -> String {
        Self::ALL
            .iter()
            .map(|s| format!("'{}'", s.as_str()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for NamingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NamingStyle {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| {
                Box::new(Error::InvalidNamingStyle {
                    value: s.to_string(),
                    valid: Self::valid_choices(),
                })
            })
    }
}
