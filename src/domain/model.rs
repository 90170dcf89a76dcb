use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOp {
    pub fn label(&self) -> &'static str {
        match self {
            BinaryOp::Add => "Addition",
            BinaryOp::Subtract => "Subtraction",
            BinaryOp::Multiply => "Multiplication",
            BinaryOp::Divide => "Division",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpResult {
    Value(f64),
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArithmeticOutcome {
    pub op: BinaryOp,
    pub x: f64,
    pub y: f64,
    pub result: OpResult,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum FetchOutcome {
    Fetched(serde_json::Value),
    Failed(String),
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceSummary {
    pub input: Vec<i64>,
    pub doubled: Vec<i64>,
    pub sum: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoReport {
    pub generated_at: DateTime<Utc>,
    pub arithmetic: Vec<ArithmeticOutcome>,
    pub squared: (i64, i64),
    pub fetch: FetchOutcome,
    pub sequence: SequenceSummary,
    pub fibonacci: Vec<(i64, u64)>,
    pub counter_value: u64,
}

impl DemoReport {
    /// 產生輸出到 stdout 的診斷行
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();

        for outcome in &self.arithmetic {
            match &outcome.result {
                OpResult::Value(value) => lines.push(format!("{}: {}", outcome.op.label(), value)),
                OpResult::Error(message) => lines.push(format!(
                    "{} ({} / {}) failed: {}",
                    outcome.op.label(),
                    outcome.x,
                    outcome.y,
                    message
                )),
            }
        }

        lines.push(format!("Square of {}: {}", self.squared.0, self.squared.1));

        match &self.fetch {
            FetchOutcome::Fetched(payload) => lines.push(format!("Fetched data: {}", payload)),
            FetchOutcome::Failed(message) => {
                lines.push(format!("Error fetching data: {}", message))
            }
            FetchOutcome::Skipped => lines.push("Fetch skipped".to_string()),
        }

        lines.push(format!("Doubled numbers: {:?}", self.sequence.doubled));
        lines.push(format!("Sum of numbers: {}", self.sequence.sum));

        for (n, value) in &self.fibonacci {
            lines.push(format!("Fibonacci({}) = {}", n, value));
        }
        lines.push(format!("Value after increment: {}", self.counter_value));

        lines
    }
}
