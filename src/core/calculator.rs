use crate::domain::model::BinaryOp;
use crate::utils::error::{DemoError, Result};

/// Four-function calculator over `f64`.
///
/// `result` is reserved state: it starts at zero and none of the
/// operations read or write it.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    result: f64,
}

impl Calculator {
    pub fn new() -> Self {
        Self { result: 0.0 }
    }

    pub fn result(&self) -> f64 {
        self.result
    }

    pub fn add(&self, x: f64, y: f64) -> f64 {
        x + y
    }

    pub fn subtract(&self, x: f64, y: f64) -> f64 {
        x - y
    }

    pub fn multiply(&self, x: f64, y: f64) -> f64 {
        x * y
    }

    /// Fails with [`DemoError::DivisionByZero`] for a zero divisor (`-0.0` included).
    pub fn divide(&self, x: f64, y: f64) -> Result<f64> {
        if y == 0.0 {
            return Err(DemoError::DivisionByZero);
        }
        Ok(x / y)
    }

    pub fn apply(&self, op: BinaryOp, x: f64, y: f64) -> Result<f64> {
        tracing::debug!(?op, x, y, "applying operation");
        match op {
            BinaryOp::Add => Ok(self.add(x, y)),
            BinaryOp::Subtract => Ok(self.subtract(x, y)),
            BinaryOp::Multiply => Ok(self.multiply(x, y)),
            BinaryOp::Divide => self.divide(x, y),
        }
    }
}
