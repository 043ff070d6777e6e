//! Python bindings for the gomoku referee.
//!
//! # Quick Start
//!
//! ```python
//! import gomoku_referee as gr
//!
//! camp = gr.GomokuBootcamp(board_size=15)
//! state = camp.case_generator()
//!
//! prompt = camp.prompt_func(state)
//! score, state = camp.verify_score("I play (7,7)", state)
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

mod py_bootcamp;
mod py_core;

pub use py_bootcamp::*;
pub use py_core::*;

pub(crate) fn value_error(err: impl std::fmt::Display) -> PyErr {
    PyErr::new::<PyValueError, _>(err.to_string())
}

/// gomoku_referee: five-in-a-row rules and reply scoring.
#[pymodule]
fn gomoku_referee(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyGameState>()?;
    m.add_class::<PyGomokuBootcamp>()?;
    Ok(())
}
