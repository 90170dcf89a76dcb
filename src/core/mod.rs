pub mod calculator;
pub mod fetch;
pub mod runner;
pub mod sequence;
pub mod series;

pub use crate::domain::model::{
    ArithmeticOutcome, BinaryOp, DemoReport, FetchOutcome, OpResult, SequenceSummary,
};
pub use crate::domain::ports::{ConfigProvider, PayloadSource, Storage};
pub use crate::utils::error::Result;
