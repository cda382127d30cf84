use std::collections::HashMap;
use std::env::{self, VarError};

/// Source of named string inputs, e.g. a CI step's `with:` block.
pub trait InputProvider {
    fn get(&self, name: &str) -> Option<String>;
}

// Reads inputs the way GitHub Actions exposes them: `INPUT_<NAME>`
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvInputs;

impl EnvInputs {
    pub fn variable_name(name: &str) -> String {
        format!("INPUT_{}", name.replace(' ', "_").to_uppercase())
    }
}

impl InputProvider for EnvInputs {
    fn get(&self, name: &str) -> Option<String> {
        match env::var(Self::variable_name(name)) {
            Ok(value) => Some(value),
            Err(VarError::NotPresent) => None,
            // keep it so the value gets rejected instead of silently unset
            Err(VarError::NotUnicode(raw)) => Some(raw.to_string_lossy().into_owned()),
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct MapInputs {
    values: HashMap<String, String>,
}

impl MapInputs {
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let values = pairs
            .into_iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        MapInputs { values }
    }

    pub fn insert(&mut self, name: &str, value: &str) {
        self.values.insert(name.to_string(), value.to_string());
    }
}

impl InputProvider for MapInputs {
    fn get(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }
}
