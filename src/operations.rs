// operations.rs

use crate::error::{CalcError, DomainError};
use std::fmt;

/// The arithmetic the calculator knows. Show-history and exit are not
/// operations; they live on [`crate::menu::Action`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    SquareRoot,
    CubeRoot,
}

impl Operation {
    pub const ALL: [Operation; 7] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Power,
        Operation::SquareRoot,
        Operation::CubeRoot,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Power => "power",
            Operation::SquareRoot => "square-root",
            Operation::CubeRoot => "cube-root",
        }
    }

    /// Number of operands collected before the operation runs.
    pub fn arity(self) -> usize {
        match self {
            Operation::SquareRoot | Operation::CubeRoot => 1,
            _ => 2,
        }
    }

    /// Runs the operation. `args` must hold exactly [`Operation::arity`] values.
    pub fn execute(self, args: &[f64]) -> Result<Calculation, CalcError> {
        if args.len() != self.arity() {
            return Err(CalcError::ArityMismatch {
                operation: self.name(),
                expected: self.arity(),
                got: args.len(),
            });
        }
        let result = self.compute(args)?;
        Ok(Calculation {
            operation: self,
            args: args.to_vec(),
            result,
        })
    }

    fn compute(self, args: &[f64]) -> Result<f64, DomainError> {
        let a = args[0];
        match self {
            Operation::Add => Ok(a + args[1]),
            Operation::Subtract => Ok(a - args[1]),
            Operation::Multiply => Ok(a * args[1]),
            Operation::Divide => {
                let b = args[1];
                if b == 0.0 {
                    return Err(DomainError::DivisionByZero);
                }
                Ok(a / b)
            }
            Operation::Power => {
                let b = args[1];
                let result = a.powf(b);
                // negative base with a fractional exponent
                if result.is_nan() {
                    return Err(DomainError::PowerDomain {
                        base: a,
                        exponent: b,
                    });
                }
                // 0^negative is the one finite input allowed to reach infinity
                if result.is_infinite() && a != 0.0 && a.is_finite() && b.is_finite() {
                    return Err(DomainError::PowerOverflow {
                        base: a,
                        exponent: b,
                    });
                }
                Ok(result)
            }
            Operation::SquareRoot => {
                if a < 0.0 {
                    return Err(DomainError::NegativeRadicand(a));
                }
                Ok(a.sqrt())
            }
            Operation::CubeRoot => Ok(a.cbrt()),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A successful computation: the operands exactly as entered and the result.
#[derive(Clone, PartialEq, Debug)]
pub struct Calculation {
    pub operation: Operation,
    pub args: Vec<f64>,
    pub result: f64,
}

impl Calculation {
    /// The feedback line. The same string is stored in the history.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.result;
        match (self.operation, self.args.as_slice()) {
            (Operation::Add, [a, b]) => write!(f, "{} + {} = {}", a, b, r),
            (Operation::Subtract, [a, b]) => write!(f, "{} - {} = {}", a, b, r),
            (Operation::Multiply, [a, b]) => write!(f, "{} * {} = {}", a, b, r),
            (Operation::Divide, [a, b]) => write!(f, "{} / {} = {}", a, b, r),
            (Operation::Power, [a, b]) => write!(f, "pow({}, {}) = {}", a, b, r),
            (Operation::SquareRoot, [a]) => write!(f, "sqrt({}) = {}", a, r),
            (Operation::CubeRoot, [a]) => write!(f, "cbrt({}) = {}", a, r),
            (op, args) => write!(f, "{}({:?}) = {}", op, args, r),
        }
    }
}
