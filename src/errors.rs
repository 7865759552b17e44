use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum NavigationError {
    /// Star was never inserted, or has no coordinate row when one is needed
    #[error("unknown star: {0}")]
    UnknownNode(String),

    /// Frontier emptied before the target was popped
    #[error("no route from {start} to {end} after {iterations} iterations")]
    UnreachableTarget {
        start: String,
        end: String,
        iterations: usize,
    },

    /// Index-level form of `UnreachableTarget`, raised by the search engine
    #[error("no path found after {iterations} iterations")]
    NoPathFound { iterations: usize },

    #[error("lane {from} -> {to} has invalid distance {weight}")]
    InvalidWeight {
        from: String,
        to: String,
        weight: f64,
    },

    #[error("star {0} has a non-finite coordinate")]
    InvalidCoordinate(String),

    #[error("star {0} is listed more than once")]
    DuplicateNode(String),
}
