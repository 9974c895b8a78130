use crate::prelude::*;

///
/// List
/// ordered collection of a single member target
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct List {
    pub name: String,
    pub member: String,
}
