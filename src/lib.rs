// lib.rs

//! Menu-driven terminal calculator: pick an operation, enter its operands,
//! get the result, and review the calculations made this session.

pub mod collector;
pub mod config;
pub mod error;
pub mod history;
pub mod input;
pub mod menu;
pub mod operations;
pub mod repl;
pub mod util;

pub use config::{Cli, SessionConfig};
pub use error::{CalcError, DomainError};
pub use history::History;
pub use input::{BufReadSource, EditorSource, LineSource};
pub use operations::{Calculation, Operation};
pub use repl::{CalculatorSession, Repl, State};
