//! Python bindings for the memory-match engine.
//!
//! Lets a Python front end (or an agent experimenting with recall
//! strategies) drive the engine directly.
//!
//! # Quick Start
//!
//! ```python
//! import memory_match as mm
//!
//! game = mm.MemoryGame(seed=42)
//! game.flip(0)
//! game.flip(1)
//! game.tick()
//! print(game.score, game.moves, game.completed)
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_game;

pub use py_core::*;
pub use py_game::*;

/// memory_match: matching-pairs game engine.
#[pymodule]
fn memory_match(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCard>()?;
    m.add_class::<PyMemoryGame>()?;

    Ok(())
}
