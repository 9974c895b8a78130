use crate::prelude::*;

///
/// Structure
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Structure {
    pub name: String,

    #[serde(default)]
    pub members: Vec<Member>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs: Option<String>,
}

impl Structure {
    #[must_use]
    pub fn get_member(&self, name: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.name == name)
    }

    #[must_use]
    pub fn has_required(&self) -> bool {
        self.members.iter().any(|m| m.required)
    }

    #[must_use]
    pub fn has_constrained(&self) -> bool {
        self.members.iter().any(Member::needs_constraint_check)
    }
}

///
/// Member
///
/// `constrained` is resolved once when the model is loaded; it is true
/// when the target needs a constraint check at build time.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Member {
    pub name: String,
    pub target: String,

    #[serde(default)]
    pub required: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs: Option<String>,

    #[serde(skip)]
    pub constrained: bool,
}

impl Member {
    #[must_use]
    pub fn new(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target: target.into(),
            required: false,
            docs: None,
            constrained: false,
        }
    }

    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub const fn needs_constraint_check(&self) -> bool {
        self.constrained
    }
}
