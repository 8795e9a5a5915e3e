//! FILENAME: model/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("source row {index}: missing field '{field}'")]
    MissingField { field: &'static str, index: usize },

    #[error("source row {index}: field '{field}' is not a {expected}")]
    WrongType {
        field: &'static str,
        index: usize,
        expected: &'static str,
    },

    #[error("source row {index}: expected a JSON object")]
    NotAnObject { index: usize },
}
