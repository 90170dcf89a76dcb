use crate::utils::error::{DemoError, Result};

/// Largest index whose Fibonacci number fits in a `u64`.
pub const MAX_FIBONACCI_INDEX: i64 = 93;

/// `fibonacci(n)` for `n <= 0` is 0.
pub fn fibonacci(n: i64) -> Result<u64> {
    if n > MAX_FIBONACCI_INDEX {
        return Err(DemoError::ValidationError {
            message: format!(
                "Fibonacci index {} exceeds the maximum of {}",
                n, MAX_FIBONACCI_INDEX
            ),
        });
    }
    if n <= 0 {
        return Ok(0);
    }

    let (mut prev, mut curr) = (0u64, 1u64);
    for _ in 1..n {
        let next = prev + curr;
        prev = curr;
        curr = next;
    }
    Ok(curr)
}

#[derive(Debug, Clone, Default)]
pub struct Counter {
    value: u64,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self) -> u64 {
        self.value += 1;
        self.value
    }

    pub fn value(&self) -> u64 {
        self.value
    }
}
