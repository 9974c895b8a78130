use crate::prelude::*;
use std::collections::HashSet;

pub fn validate_references(model: &Model, errs: &mut ErrorTree) {
    validate_members(model, errs);
    validate_operations(model, errs);
    validate_resources(model, errs);
    validate_services(model, errs);
}

fn validate_members(model: &Model, errs: &mut ErrorTree) {
    for structure in &model.structures {
        for member in &structure.members {
            if model.resolve_target(&member.target).is_none() {
                errs.add_for(
                    format!("structure {}", structure.name),
                    format!(
                        "member '{}' targets unknown shape '{}'",
                        member.name, member.target
                    ),
                );
            }
        }
    }

    for list in &model.lists {
        match model.resolve_target(&list.member) {
            None => errs.add_for(
                format!("list {}", list.name),
                format!("member targets unknown shape '{}'", list.member),
            ),
            Some(Target::Constrained(_)) => errs.add_for(
                format!("list {}", list.name),
                "constrained list members are not supported",
            ),
            Some(_) => {}
        }
    }
}

fn validate_operations(model: &Model, errs: &mut ErrorTree) {
    for op in &model.operations {
        let route = format!("operation {}", op.name);
        let refs = op
            .input
            .iter()
            .map(|s| ("input", s))
            .chain(op.output.iter().map(|s| ("output", s)))
            .chain(op.errors.iter().map(|s| ("error", s)));

        for (role, name) in refs {
            if model.get_structure(name).is_none() {
                errs.add_for(
                    route.clone(),
                    format!("{role} '{name}' is not a structure"),
                );
            }
        }

        let mut seen = HashSet::new();
        for error in &op.errors {
            if !seen.insert(error) {
                errs.add_for(route.clone(), format!("duplicate error '{error}'"));
            }
        }
    }
}

fn validate_resources(model: &Model, errs: &mut ErrorTree) {
    for resource in &model.resources {
        let route = format!("resource {}", resource.name);

        for op in resource.owned_operations() {
            if model.get_operation(op).is_none() {
                errs.add_for(route.clone(), format!("unknown operation '{op}'"));
            }
        }
        for child in &resource.resources {
            if model.get_resource(child).is_none() {
                errs.add_for(route.clone(), format!("unknown resource '{child}'"));
            }
        }

        if reaches(model, &resource.name, &resource.name, &mut HashSet::new()) {
            errs.add_for(route, "resource is its own descendant");
        }
    }
}

// does `from` reach `target` through child resources (excluding itself)?
fn reaches<'a>(model: &'a Model, from: &str, target: &str, seen: &mut HashSet<&'a str>) -> bool {
    let Some(resource) = model.get_resource(from) else {
        return false;
    };

    for child in &resource.resources {
        if child == target {
            return true;
        }
        if seen.insert(child.as_str()) && reaches(model, child, target, seen) {
            return true;
        }
    }

    false
}

fn validate_services(model: &Model, errs: &mut ErrorTree) {
    for service in &model.services {
        let route = format!("service {}", service.name);

        for op in &service.operations {
            if model.get_operation(op).is_none() {
                errs.add_for(route.clone(), format!("unknown operation '{op}'"));
            }
        }
        for resource in &service.resources {
            if model.get_resource(resource).is_none() {
                errs.add_for(route.clone(), format!("unknown resource '{resource}'"));
            }
        }
    }
}
