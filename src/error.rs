use crate::types::Type;

/// Errors raised while building or registering chart data.
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("unknown type label '{0}'")]
    UnknownType(String),

    #[error("row '{attacking}' has no entry for '{defending}'")]
    MissingEntry { attacking: Type, defending: Type },

    #[error("row '{attacking}' lists '{defending}' more than once")]
    DuplicateEntry { attacking: Type, defending: Type },

    #[error("row '{attacking}' has invalid multiplier {value} against '{defending}'")]
    InvalidMultiplier {
        attacking: Type,
        defending: Type,
        value: f32,
    },

    #[error("chart has no row for '{0}'")]
    MissingRow(Type),

    #[error("chart lists row '{0}' more than once")]
    DuplicateRow(Type),

    #[error("type '{0}' was refused by the registry")]
    Rejected(Type),
}
