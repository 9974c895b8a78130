use crate::{MAX_NAME_LEN, prelude::*};
use std::collections::{HashMap, HashSet};

/// Ensure a model name can become an identifier.
pub(crate) fn validate_name(name: &str) -> Result<(), String> {
    let mut chars = name.chars();

    let Some(first) = chars.next() else {
        return Err("name is empty".to_string());
    };
    if name.len() > MAX_NAME_LEN {
        return Err(format!("name '{name}' exceeds max length {MAX_NAME_LEN}"));
    }
    if !first.is_ascii_alphabetic() {
        return Err(format!("name '{name}' must start with an ASCII letter"));
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(format!(
            "name '{name}' must contain only ASCII letters, digits and '_'"
        ));
    }

    Ok(())
}

/// Ensure a constrained shape names something that looks like a Rust path.
pub(crate) fn validate_type_path(path: &str) -> Result<(), String> {
    let trimmed = path.strip_prefix("::").unwrap_or(path);
    let valid = !trimmed.is_empty()
        && trimmed.split("::").all(|segment| {
            let mut chars = segment.chars();
            chars
                .next()
                .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        });

    if valid {
        Ok(())
    } else {
        Err(format!("'{path}' is not a valid type path"))
    }
}

pub fn validate_names(model: &Model, errs: &mut ErrorTree) {
    // shape names share one namespace
    let mut seen: HashMap<&str, &str> = HashMap::new();
    for (kind, name) in model.shape_names() {
        let route = format!("{kind} {name}");

        if let Err(e) = validate_name(name) {
            errs.add_for(route.clone(), e);
        }
        if let Some(prev) = seen.insert(name, kind) {
            errs.add_for(route, format!("duplicate shape name, already declared as {prev}"));
        }
    }

    for structure in &model.structures {
        let route = format!("structure {}", structure.name);
        let mut members = HashSet::new();

        for member in &structure.members {
            if let Err(e) = validate_name(&member.name) {
                errs.add_for(route.clone(), format!("member: {e}"));
            }
            if !members.insert(member.name.as_str()) {
                errs.add_for(route.clone(), format!("duplicate member '{}'", member.name));
            }
        }
    }

    for shape in &model.constrained {
        if let Err(e) = validate_type_path(&shape.path) {
            errs.add_for(format!("constrained {}", shape.name), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_names() {
        assert!(validate_name("").is_err());
        assert!(validate_name("1abc").is_err());
        assert!(validate_name("a-b").is_err());
        assert!(validate_name("_x").is_err());
        assert!(validate_name("GetWidget").is_ok());
        assert!(validate_name("widget_id2").is_ok());
    }

    #[test]
    fn checks_type_paths() {
        assert!(validate_type_path("crate::constraints::Nickname").is_ok());
        assert!(validate_type_path("::other::Name").is_ok());
        assert!(validate_type_path("Name").is_ok());
        assert!(validate_type_path("").is_err());
        assert!(validate_type_path("crate::").is_err());
        assert!(validate_type_path("a b").is_err());
    }

    #[test]
    fn duplicate_members_and_shapes_are_reported() {
        let model = Model {
            structures: vec![Structure {
                name: "User".into(),
                members: vec![Member::new("id", "String"), Member::new("id", "Integer")],
                docs: None,
            }],
            lists: vec![List {
                name: "User".into(),
                member: "String".into(),
            }],
            ..Default::default()
        };

        let mut errs = ErrorTree::new();
        validate_names(&model, &mut errs);

        let flat = errs.flatten();
        assert_eq!(flat.len(), 2);
        assert!(flat.iter().any(|(_, m)| m.contains("duplicate member 'id'")));
        assert!(flat
            .iter()
            .any(|(r, m)| r == "list User" && m.contains("already declared as structure")));
    }
}
