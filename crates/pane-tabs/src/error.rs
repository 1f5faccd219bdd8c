//! Tab and page error types

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TabError {
    #[error("Index {index} out of bounds for {count} entries")]
    IndexOutOfBounds { index: usize, count: usize },

    #[error("A page set needs at least one page")]
    EmptyPageSet,
}
