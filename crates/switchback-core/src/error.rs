pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid layout constant `{name}`: {value}")]
    InvalidConstant { name: &'static str, value: f64 },

    #[error("row {row} has {len} nodes; connector routing is only defined for rows of 1 or 2")]
    RowCardinality { row: usize, len: usize },

    #[error("expected {expected} node centers for this graph, got {actual}")]
    CenterCountMismatch { expected: usize, actual: usize },

    #[error(
        "lane override targets the transition below row {above_row}, but the graph has {row_count} rows"
    )]
    OverrideOutOfRange { above_row: usize, row_count: usize },
}
