// repl.rs

use crate::collector::{self, Collected};
use crate::config::SessionConfig;
use crate::error::CalcError;
use crate::history::History;
use crate::input::LineSource;
use crate::menu::{self, Action, SELECTION_PROMPT};
use crate::operations::Operation;
use crate::util::writeln_ignore_broken_pipe;
use std::io::{self, Write};

pub const WELCOME: &str = "Welcome to the CLI Calculator script.";
pub const PAUSE_PROMPT: &str = "Press enter to get back to operation selection";
pub const GOODBYE: &str = "Goodbye!";

/// Per-run state. Only successful calculations touch it.
#[derive(Debug, Default)]
pub struct CalculatorSession {
    pub history: History,
    pub running: bool,
}

impl CalculatorSession {
    pub fn new() -> Self {
        Self {
            history: History::new(),
            running: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum State {
    ShowMenu,
    AwaitSelection,
    ShowHistory,
    CollectArgs(Operation),
    /// Argument collection failed.
    Abort(CalcError),
    Execute(Operation, Vec<f64>),
    /// The operation rejected its inputs.
    Failed(CalcError),
    AppendHistory(String),
    ShowFeedback(String),
    Exit,
}

pub struct Repl<S, W> {
    source: S,
    out: W,
    session: CalculatorSession,
    config: SessionConfig,
}

impl<S: LineSource, W: Write> Repl<S, W> {
    pub fn new(source: S, out: W, config: SessionConfig) -> Self {
        Self {
            source,
            out,
            session: CalculatorSession::new(),
            config,
        }
    }

    pub fn session(&self) -> &CalculatorSession {
        &self.session
    }

    pub fn into_parts(self) -> (S, W, CalculatorSession) {
        (self.source, self.out, self.session)
    }

    /// Runs until the exit selection or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        log::info!("calculator session started");
        self.say(WELCOME)?;
        let mut state = State::ShowMenu;
        while state != State::Exit {
            state = self.step(state)?;
        }
        self.session.running = false;
        self.say(GOODBYE)?;
        log::info!(
            "calculator session ended after {} calculation(s)",
            self.session.history.len()
        );
        Ok(())
    }

    /// Performs one transition. Calculator errors are reported here and never
    /// returned; the `Err` case is terminal I/O only.
    pub fn step(&mut self, state: State) -> io::Result<State> {
        log::trace!("state: {:?}", state);
        let next = match state {
            State::ShowMenu => {
                self.say(menu::render_menu())?;
                State::AwaitSelection
            }
            State::AwaitSelection => self.await_selection()?,
            State::ShowHistory => {
                self.say(self.session.history.render())?;
                State::ShowMenu
            }
            State::CollectArgs(op) => {
                match collector::collect(&mut self.source, &mut self.out, op.arity())? {
                    Collected::Args(args) => State::Execute(op, args),
                    Collected::Invalid(err) => State::Abort(err),
                    Collected::Closed => State::Exit,
                }
            }
            State::Abort(err) => {
                log::debug!("argument collection aborted: {}", err);
                self.say(format!("\n\nError:\n\t{}\n", err))?;
                if self.config.pause_on_invalid_number
                    && self.source.read_line(PAUSE_PROMPT)?.is_none()
                {
                    return Ok(State::Exit);
                }
                State::ShowMenu
            }
            State::Execute(op, args) => match op.execute(&args) {
                Ok(calculation) => State::AppendHistory(calculation.render()),
                Err(err) => State::Failed(err),
            },
            State::Failed(err) => {
                log::debug!("operation failed: {}", err);
                self.say(format!("Error executing operation:\n\t{}", err))?;
                State::ShowMenu
            }
            State::AppendHistory(line) => {
                log::debug!("history += {:?}", line);
                self.session.history.append(line.clone());
                State::ShowFeedback(line)
            }
            State::ShowFeedback(line) => {
                self.say(format!("\n{}", line))?;
                State::ShowMenu
            }
            State::Exit => State::Exit,
        };
        Ok(next)
    }

    fn await_selection(&mut self) -> io::Result<State> {
        let Some(line) = self.source.read_line(SELECTION_PROMPT)? else {
            return Ok(State::Exit);
        };
        let code = line.trim();
        let Some(descriptor) = menu::lookup(code) else {
            log::debug!("unknown selection {:?}", code);
            self.say(CalcError::UnknownSelection(code.to_string()).to_string())?;
            return Ok(State::ShowMenu);
        };
        log::debug!(
            "selected {} ({}, {} operand(s))",
            descriptor.code,
            descriptor.label,
            descriptor.arity()
        );
        Ok(match descriptor.action {
            Action::Calculate(op) => State::CollectArgs(op),
            Action::ShowHistory => State::ShowHistory,
            Action::Exit => State::Exit,
        })
    }

    fn say<T: AsRef<str>>(&mut self, text: T) -> io::Result<()> {
        writeln_ignore_broken_pipe(&mut self.out, text)
    }
}
