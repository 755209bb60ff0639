use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelationError {
    /// An element outside the domain was referenced.
    #[error("element {element} is not part of the domain")]
    UnknownElement { element: String },
    /// Order-only machinery was asked to work on something that is not an order.
    #[error("relation is not an order: cycle through {element}")]
    NotAnOrder { element: String },
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
    #[error("domain has {size} elements, above the limit of {limit}")]
    DomainTooLarge { size: usize, limit: usize },
    #[error("report i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl RelationError {
    pub fn unknown(element: &impl std::fmt::Debug) -> Self {
        Self::UnknownElement {
            element: format!("{element:?}"),
        }
    }

    pub fn not_an_order(element: &impl std::fmt::Debug) -> Self {
        Self::NotAnOrder {
            element: format!("{element:?}"),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RelationError>;
