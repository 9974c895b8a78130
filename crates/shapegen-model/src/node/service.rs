use crate::prelude::*;

///
/// Service
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Service {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<Protocol>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub operations: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs: Option<String>,
}

impl Service {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: None,
            protocol: None,
            operations: Vec::new(),
            resources: Vec::new(),
            docs: None,
        }
    }
}

///
/// OperationSlot
/// one generic slot of a service builder, numbered from 1
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OperationSlot {
    pub index: usize,
    pub operation: String,
}
