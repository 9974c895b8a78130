use crate::prelude::*;

///
/// ConstrainedShape
///
/// A target whose values must pass a constraint check. `path` names the
/// Rust type implementing the runtime `Constrained` contract.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ConstrainedShape {
    pub name: String,
    pub path: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs: Option<String>,
}
