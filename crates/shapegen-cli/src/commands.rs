use anyhow::{Context, Result, anyhow};
use shapegen_build::Codegen;
use shapegen_model::{build::load_model, node::Model};
use std::{fs, path::Path};
use tracing::info;

fn load(model: &Path) -> Result<Model> {
    load_model(model).with_context(|| format!("loading model {}", model.display()))
}

pub fn generate(model: &Path, config: &Path, out: Option<&Path>) -> Result<()> {
    let model = load(model)?;
    let config = shapegen_config_build::load(config)
        .with_context(|| format!("loading config {}", config.display()))?;

    let source = shapegen_build::generate(&model, &config)?;

    match out {
        Some(path) => {
            fs::write(path, &source).with_context(|| format!("writing {}", path.display()))?;
            info!(path = %path.display(), bytes = source.len(), "wrote generated source");
        }
        None => print!("{source}"),
    }

    Ok(())
}

pub fn check(model: &Path, config: &Path) -> Result<()> {
    let model = load(model)?;
    let config = shapegen_config_build::load(config)
        .with_context(|| format!("loading config {}", config.display()))?;

    Codegen::new(&model, &config).check()?;

    println!(
        "ok: {} structures, {} operations, {} services",
        model.structures.len(),
        model.operations.len(),
        model.services.len()
    );

    Ok(())
}

pub fn slots(model: &Path, service: &str) -> Result<()> {
    let model = load(model)?;
    let svc = model
        .get_service(service)
        .ok_or_else(|| anyhow!("unknown service '{service}'"))?;

    for slot in model.operation_slots(svc) {
        println!("Op{}\t{}", slot.index, slot.operation);
    }

    Ok(())
}
