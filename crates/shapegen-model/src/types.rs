use crate::prelude::*;
use std::fmt;

///
/// Primitive
/// built-in member targets
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Primitive {
    Blob,
    Boolean,
    Byte,
    Double,
    Float,
    Integer,
    Long,
    Short,
    String,
}

impl Primitive {
    pub const ALL: [Self; 9] = [
        Self::Blob,
        Self::Boolean,
        Self::Byte,
        Self::Double,
        Self::Float,
        Self::Integer,
        Self::Long,
        Self::Short,
        Self::String,
    ];

    /// Resolve a built-in target by its model name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Blob => "Blob",
            Self::Boolean => "Boolean",
            Self::Byte => "Byte",
            Self::Double => "Double",
            Self::Float => "Float",
            Self::Integer => "Integer",
            Self::Long => "Long",
            Self::Short => "Short",
            Self::String => "String",
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

///
/// Protocol
/// wire protocol a service is served over; selects the router policy
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Protocol {
    #[default]
    #[serde(rename = "rpc_v2")]
    RpcV2,

    #[serde(rename = "aws_json1_0")]
    AwsJson1_0,
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RpcV2 => f.write_str("rpc_v2"),
            Self::AwsJson1_0 => f.write_str("aws_json1_0"),
        }
    }
}

///
/// Target
/// a member target after resolution against the model
///

#[derive(Clone, Copy, Debug)]
pub enum Target<'a> {
    Primitive(Primitive),
    Structure(&'a Structure),
    List(&'a List),
    Constrained(&'a ConstrainedShape),
}

impl Target<'_> {
    #[must_use]
    pub const fn is_constrained(&self) -> bool {
        matches!(self, Self::Constrained(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitive_names_round_trip() {
        for p in Primitive::ALL {
            assert_eq!(Primitive::from_name(p.name()), Some(p));
        }
        assert_eq!(Primitive::from_name("string"), None);
    }

    #[test]
    fn protocol_uses_snake_names() {
        let p: Protocol = serde_json::from_str("\"aws_json1_0\"").unwrap();
        assert_eq!(p, Protocol::AwsJson1_0);
        assert_eq!(Protocol::default().to_string(), "rpc_v2");
    }
}
