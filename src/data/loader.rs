use std::path::Path;

use super::types::Dataset;
use crate::error::Result;

const BUILTIN: &str = include_str!("sample.toml");

pub fn builtin_dataset() -> Result<Dataset> {
    parse_dataset(BUILTIN)
}

pub fn load_dataset(path: &Path) -> Result<Dataset> {
    let content = std::fs::read_to_string(path)?;
    let dataset = parse_dataset(&content)?;
    tracing::info!(
        quests = dataset.quests.len(),
        students = dataset.students.len(),
        "loaded dataset from {}",
        path.display()
    );
    Ok(dataset)
}

fn parse_dataset(content: &str) -> Result<Dataset> {
    let dataset: Dataset = toml::from_str(content)?;
    Ok(dataset)
}
