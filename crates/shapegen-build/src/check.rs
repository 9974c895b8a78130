//! Identifier collision checks, run over the whole model before any code
//! is emitted.

use crate::{
    Codegen, CodegenError,
    operation::error_ident,
    record::taxonomy,
    service::{builder_ident, handler_setter, operation_setter, shadows_generic},
};
use shapegen_model::node::{Model, Service, Structure};
use shapegen_utils::ident::{module_ident, raw_setter_ident, setter_ident, type_ident};
use std::collections::HashMap;

pub fn check(cg: &Codegen<'_>) -> Result<(), CodegenError> {
    let model = cg.model;

    if cg.config.records {
        check_paths(model)?;
        check_modules(model)?;
        for structure in &model.structures {
            check_cases(structure)?;
            check_methods(structure)?;
        }
    }
    if cg.config.services {
        for service in &model.services {
            check_setters(model, service)?;
        }
    }

    check_types(cg)
}

// constrained types are named from inside builder modules too, so the
// path has to resolve from anywhere in the crate
fn check_paths(model: &Model) -> Result<(), CodegenError> {
    for shape in &model.constrained {
        if !(shape.path.starts_with("crate::") || shape.path.starts_with("::")) {
            return Err(CodegenError::InvalidPath {
                shape: shape.name.clone(),
                path: shape.path.clone(),
            });
        }
    }

    Ok(())
}

fn check_modules(model: &Model) -> Result<(), CodegenError> {
    let mut seen = HashMap::new();

    for structure in &model.structures {
        let module = module_ident(&structure.name).to_string();
        if let Some(first) = seen.insert(module.clone(), structure.name.clone()) {
            return Err(CodegenError::ModuleCollision {
                module,
                first,
                second: structure.name.clone(),
            });
        }
    }

    Ok(())
}

fn check_cases(structure: &Structure) -> Result<(), CodegenError> {
    let mut seen = HashMap::new();

    for case in taxonomy(structure) {
        let variant = case.variant().to_string();
        if let Some(first) = seen.insert(variant.clone(), case.member.name.clone()) {
            return Err(CodegenError::CaseCollision {
                structure: structure.name.clone(),
                case: variant,
                first,
                second: case.member.name.clone(),
            });
        }
    }

    Ok(())
}

fn check_methods(structure: &Structure) -> Result<(), CodegenError> {
    let mut seen = HashMap::new();

    for member in &structure.members {
        let mut methods = vec![setter_ident(&member.name).to_string()];
        if member.needs_constraint_check() {
            methods.push(raw_setter_ident(&member.name).to_string());
        }

        for method in methods {
            if let Some(first) = seen.insert(method.clone(), member.name.clone()) {
                return Err(CodegenError::MethodCollision {
                    structure: structure.name.clone(),
                    method,
                    first,
                    second: member.name.clone(),
                });
            }
        }
    }

    Ok(())
}

// `build` is the builder's own method and `plugin` its own field
fn check_setters(model: &Model, service: &Service) -> Result<(), CodegenError> {
    let mut seen: HashMap<String, String> = ["build", "plugin"]
        .into_iter()
        .map(|name| (name.to_string(), name.to_string()))
        .collect();

    for slot in model.operation_slots(service) {
        let ty = type_ident(&slot.operation).to_string();
        if shadows_generic(&ty) {
            return Err(CodegenError::ReservedType {
                service: service.name.clone(),
                operation: slot.operation.clone(),
                ty,
            });
        }

        let setters = [
            handler_setter(&slot.operation).to_string(),
            operation_setter(&slot.operation).to_string(),
        ];

        for setter in setters {
            if let Some(first) = seen.insert(setter.clone(), slot.operation.clone()) {
                return Err(CodegenError::SetterCollision {
                    service: service.name.clone(),
                    setter,
                    first,
                    second: slot.operation.clone(),
                });
            }
        }
    }

    Ok(())
}

// every type emitted at the root of the generated file
fn check_types(cg: &Codegen<'_>) -> Result<(), CodegenError> {
    let model = cg.model;
    let mut types: Vec<(String, String)> = Vec::new();

    if cg.config.records {
        types.extend(model.lists.iter().map(|l| (type_ident(&l.name).to_string(), l.name.clone())));
        types.extend(
            model
                .structures
                .iter()
                .map(|s| (type_ident(&s.name).to_string(), s.name.clone())),
        );
    }
    if cg.config.services {
        for op in &model.operations {
            types.push((type_ident(&op.name).to_string(), op.name.clone()));
            if !op.errors.is_empty() {
                types.push((error_ident(op).to_string(), format!("{} errors", op.name)));
            }
        }
        for service in &model.services {
            types.push((type_ident(&service.name).to_string(), service.name.clone()));
            types.push((
                builder_ident(&service.name).to_string(),
                format!("{} builder", service.name),
            ));
        }
    }

    let mut seen = HashMap::new();
    for (ty, origin) in types {
        if let Some(first) = seen.insert(ty.clone(), origin.clone()) {
            return Err(CodegenError::TypeCollision {
                ty,
                first,
                second: origin,
            });
        }
    }

    Ok(())
}
