//! Core type bindings for Python.

use pyo3::exceptions::{PyIndexError, PyValueError};
use pyo3::prelude::*;

use crate::core::{Card, EngineError, Symbol};

/// Python wrapper for Card.
#[pyclass(name = "Card")]
#[derive(Clone, Debug)]
pub struct PyCard(pub Card);

#[pymethods]
impl PyCard {
    /// The card face.
    #[getter]
    fn value(&self) -> String {
        self.0.value.to_string()
    }

    #[getter]
    fn flipped(&self) -> bool {
        self.0.flipped
    }

    #[getter]
    fn matched(&self) -> bool {
        self.0.matched
    }

    /// Whether the face should be shown.
    fn is_revealed(&self) -> bool {
        self.0.is_revealed()
    }

    fn __repr__(&self) -> String {
        format!(
            "Card(value={}, flipped={}, matched={})",
            self.0.value, self.0.flipped, self.0.matched
        )
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// Map an engine error onto the closest Python exception.
pub(crate) fn engine_err(err: EngineError) -> PyErr {
    match err {
        EngineError::InvalidIndex { .. } => PyIndexError::new_err(err.to_string()),
        _ => PyValueError::new_err(err.to_string()),
    }
}

/// Split a Python string into card symbols, one per character.
pub(crate) fn symbols_from_str(glyphs: &str) -> Vec<Symbol> {
    glyphs.chars().map(Symbol::new).collect()
}
