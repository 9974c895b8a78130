use crate::prelude::*;

///
/// Resource
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Resource {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub put: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub operations: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub collection_operations: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<String>,
}

impl Resource {
    /// Operations bound directly to this resource: lifecycle first
    /// (put, create, read, update, delete, list), then instance, then
    /// collection operations.
    pub fn owned_operations(&self) -> impl Iterator<Item = &str> {
        [
            &self.put,
            &self.create,
            &self.read,
            &self.update,
            &self.delete,
            &self.list,
        ]
        .into_iter()
        .flatten()
        .chain(&self.operations)
        .chain(&self.collection_operations)
        .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifecycle_precedes_instance_operations() {
        let resource = Resource {
            name: "Widget".into(),
            read: Some("GetWidget".into()),
            put: Some("PutWidget".into()),
            operations: vec!["PolishWidget".into()],
            collection_operations: vec!["CountWidgets".into()],
            ..Default::default()
        };

        let ops: Vec<_> = resource.owned_operations().collect();
        assert_eq!(
            ops,
            vec!["PutWidget", "GetWidget", "PolishWidget", "CountWidgets"]
        );
    }
}
