use crate::{
    case::{to_pascal, to_snake},
    reserved::{is_raw_forbidden, is_reserved_word},
};
use proc_macro2::{Ident, Span};

/// Builder methods a member setter must never shadow.
pub const BUILDER_METHODS: [&str; 1] = ["build"];

///
/// Escaped
/// An identifier after reserved-word escaping.
///

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Escaped {
    Plain(String),
    Raw(String),
}

impl Escaped {
    /// Apply the reserved-word policy to an already-cased name.
    #[must_use]
    pub fn new(name: &str) -> Self {
        if is_raw_forbidden(name) {
            Self::Plain(format!("{name}_"))
        } else if is_reserved_word(name) {
            Self::Raw(name.to_string())
        } else {
            Self::Plain(name.to_string())
        }
    }

    /// Source form, including the `r#` prefix for raw identifiers.
    #[must_use]
    pub fn source(&self) -> String {
        match self {
            Self::Plain(s) => s.clone(),
            Self::Raw(s) => format!("r#{s}"),
        }
    }

    /// Name without any raw prefix; what rustdoc and humans see.
    #[must_use]
    pub fn bare(&self) -> &str {
        match self {
            Self::Plain(s) | Self::Raw(s) => s,
        }
    }

    #[must_use]
    pub fn to_ident(&self) -> Ident {
        match self {
            Self::Plain(s) => Ident::new(s, Span::call_site()),
            Self::Raw(s) => Ident::new_raw(s, Span::call_site()),
        }
    }
}

/// Field / method identifier for a model member or operation.
#[must_use]
pub fn member_ident(name: &str) -> Ident {
    Escaped::new(&to_snake(name)).to_ident()
}

/// Type / variant identifier for a model shape.
#[must_use]
pub fn type_ident(name: &str) -> Ident {
    Escaped::new(&to_pascal(name)).to_ident()
}

/// Module identifier for a shape's companion module.
#[must_use]
pub fn module_ident(name: &str) -> Ident {
    member_ident(name)
}

/// Primary builder setter for a member.
///
/// Members named after a builder method get a `_value` suffix.
#[must_use]
pub fn setter_ident(name: &str) -> Ident {
    let snake = to_snake(name);

    if BUILDER_METHODS.contains(&snake.as_str()) {
        Ident::new(&format!("{snake}_value"), Span::call_site())
    } else {
        Escaped::new(&snake).to_ident()
    }
}

/// Internal setter accepting the unconstrained representation.
#[must_use]
pub fn raw_setter_ident(name: &str) -> Ident {
    Ident::new(&format!("set_{}", to_snake(name)), Span::call_site())
}

/// Variant reporting a missing required member.
#[must_use]
pub fn missing_variant_ident(member: &str) -> Ident {
    Ident::new(&format!("Missing{}", to_pascal(member)), Span::call_site())
}

/// Variant reporting a failed constraint check on a member.
#[must_use]
pub fn constraint_variant_ident(member: &str) -> Ident {
    type_ident(member)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn escapes_keywords() {
        assert_eq!(member_ident("type").to_string(), "r#type");
        assert_eq!(member_ident("self").to_string(), "self_");
        assert_eq!(type_ident("Self").to_string(), "Self_");
        assert_eq!(member_ident("widget_id").to_string(), "widget_id");
    }

    #[test]
    fn setter_avoids_builder_methods() {
        assert_eq!(setter_ident("build").to_string(), "build_value");
        assert_eq!(setter_ident("Build").to_string(), "build_value");
        assert_eq!(setter_ident("builder").to_string(), "builder");
        assert_eq!(setter_ident("type").to_string(), "r#type");
    }

    #[test]
    fn taxonomy_variants() {
        assert_eq!(missing_variant_ident("id").to_string(), "MissingId");
        assert_eq!(constraint_variant_ident("nickname").to_string(), "Nickname");
        assert_eq!(raw_setter_ident("nickName").to_string(), "set_nick_name");
    }

    #[test]
    fn escaped_bare_drops_raw_prefix() {
        let e = Escaped::new("match");
        assert_eq!(e.source(), "r#match");
        assert_eq!(e.bare(), "match");
    }

    proptest! {
        #[test]
        fn member_idents_always_parse(name in "[a-z][a-z_]{0,16}") {
            let ident = member_ident(&name);
            prop_assert!(syn::parse_str::<syn::Ident>(&ident.to_string()).is_ok());
        }

        #[test]
        fn type_idents_always_parse(name in "[A-Z][A-Za-z]{0,16}") {
            let ident = type_ident(&name);
            prop_assert!(syn::parse_str::<syn::Ident>(&ident.to_string()).is_ok());
        }
    }
}
