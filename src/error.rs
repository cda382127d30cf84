use crate::models::Category;

#[derive(Debug, thiserror::Error)]
pub enum GateError {
    #[error("Invalid configuration: {field} must be a non-negative number, got {value:?}")]
    InvalidConfiguration { field: &'static str, value: String },

    #[error("Malformed Lighthouse results: {0}")]
    MalformedResults(String),
}

impl GateError {
    pub fn invalid_threshold(category: Category, value: &str) -> Self {
        GateError::InvalidConfiguration {
            field: category.input_name(),
            value: value.to_string(),
        }
    }
}

pub type GateResult<T> = Result<T, GateError>;
