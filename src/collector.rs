// collector.rs

use crate::error::CalcError;
use crate::input::LineSource;
use std::io::{self, Write};

#[derive(Debug, PartialEq)]
pub enum Collected {
    Args(Vec<f64>),
    /// The first bad token; nothing collected so far is kept.
    Invalid(CalcError),
    /// Input ended while prompting.
    Closed,
}

pub fn argument_prompt(index: usize) -> String {
    format!("Enter number {}: ", index)
}

/// Parses one operand. `index` is 1-based and only used for the error.
pub fn parse_number(index: usize, text: &str) -> Result<f64, CalcError> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CalcError::InvalidNumber {
            index,
            input: trimmed.to_string(),
        }),
    }
}

/// Prompts `arity` times and stops at the first value that does not parse.
pub fn collect<S, W>(source: &mut S, out: &mut W, arity: usize) -> io::Result<Collected>
where
    S: LineSource + ?Sized,
    W: Write,
{
    let mut args = Vec::with_capacity(arity);
    for index in 1..=arity {
        writeln!(out)?;
        out.flush()?;
        let Some(line) = source.read_line(&argument_prompt(index))? else {
            return Ok(Collected::Closed);
        };
        match parse_number(index, &line) {
            Ok(value) => args.push(value),
            Err(err) => {
                log::debug!("argument {} rejected: {:?}", index, line);
                return Ok(Collected::Invalid(err));
            }
        }
    }
    Ok(Collected::Args(args))
}
