use crate::prelude::*;
use std::collections::HashSet;

///
/// Model
///
/// The whole shape model. Shape names share one namespace across all
/// kinds; lookups are linear because models are small and declaration
/// order has to be preserved everywhere.
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Model {
    #[serde(default)]
    pub namespace: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub structures: Vec<Structure>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lists: Vec<List>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub constrained: Vec<ConstrainedShape>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub operations: Vec<Operation>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<Resource>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub services: Vec<Service>,
}

impl Model {
    #[must_use]
    pub fn get_structure(&self, name: &str) -> Option<&Structure> {
        self.structures.iter().find(|s| s.name == name)
    }

    #[must_use]
    pub fn get_list(&self, name: &str) -> Option<&List> {
        self.lists.iter().find(|s| s.name == name)
    }

    #[must_use]
    pub fn get_constrained(&self, name: &str) -> Option<&ConstrainedShape> {
        self.constrained.iter().find(|s| s.name == name)
    }

    #[must_use]
    pub fn get_operation(&self, name: &str) -> Option<&Operation> {
        self.operations.iter().find(|s| s.name == name)
    }

    #[must_use]
    pub fn get_resource(&self, name: &str) -> Option<&Resource> {
        self.resources.iter().find(|s| s.name == name)
    }

    #[must_use]
    pub fn get_service(&self, name: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.name == name)
    }

    /// Resolve a member or list target by name.
    #[must_use]
    pub fn resolve_target(&self, name: &str) -> Option<Target<'_>> {
        if let Some(p) = Primitive::from_name(name) {
            return Some(Target::Primitive(p));
        }

        self.get_structure(name)
            .map(Target::Structure)
            .or_else(|| self.get_list(name).map(Target::List))
            .or_else(|| self.get_constrained(name).map(Target::Constrained))
    }

    /// Mark every member whose target needs a constraint check.
    ///
    /// Called once by the loader; unresolved targets stay unmarked and are
    /// reported by validation.
    pub fn resolve_constraints(&mut self) {
        let constrained: HashSet<String> =
            self.constrained.iter().map(|c| c.name.clone()).collect();

        for structure in &mut self.structures {
            for member in &mut structure.members {
                member.constrained = constrained.contains(&member.target);
            }
        }
    }

    /// The ordered, deduplicated operation slots of a service.
    ///
    /// Resource-bound operations come first, in resource traversal order
    /// (each resource's own operations, then its child resources, depth
    /// first), followed by the service's direct operations. Duplicates
    /// keep their first position.
    #[must_use]
    pub fn operation_slots(&self, service: &Service) -> Vec<OperationSlot> {
        let mut seen_ops = HashSet::new();
        let mut seen_resources = HashSet::new();
        let mut names = Vec::new();

        for resource in &service.resources {
            self.walk_resource(resource, &mut seen_resources, &mut |op| {
                if seen_ops.insert(op.to_string()) {
                    names.push(op.to_string());
                }
            });
        }

        for op in &service.operations {
            if seen_ops.insert(op.clone()) {
                names.push(op.clone());
            }
        }

        names
            .into_iter()
            .enumerate()
            .map(|(i, operation)| OperationSlot {
                index: i + 1,
                operation,
            })
            .collect()
    }

    // cycles are reported by validation; the visited set only keeps the
    // walk finite on an unvalidated model
    fn walk_resource<'a>(
        &'a self,
        name: &'a str,
        visited: &mut HashSet<&'a str>,
        emit: &mut dyn FnMut(&str),
    ) {
        if !visited.insert(name) {
            return;
        }
        let Some(resource) = self.get_resource(name) else {
            return;
        };

        for op in resource.owned_operations() {
            emit(op);
        }
        for child in &resource.resources {
            self.walk_resource(child, visited, emit);
        }
    }

    /// Every shape name with its kind, in declaration order.
    pub fn shape_names(&self) -> impl Iterator<Item = (&'static str, &str)> {
        let structures = self.structures.iter().map(|s| ("structure", s.name.as_str()));
        let lists = self.lists.iter().map(|s| ("list", s.name.as_str()));
        let constrained = self
            .constrained
            .iter()
            .map(|s| ("constrained", s.name.as_str()));
        let operations = self.operations.iter().map(|s| ("operation", s.name.as_str()));
        let resources = self.resources.iter().map(|s| ("resource", s.name.as_str()));
        let services = self.services.iter().map(|s| ("service", s.name.as_str()));

        structures
            .chain(lists)
            .chain(constrained)
            .chain(operations)
            .chain(resources)
            .chain(services)
    }
}
