use crate::core::calculator::Calculator;
use crate::core::fetch::{fetch_outcome, HttpPayloadSource};
use crate::core::sequence::{square, SAMPLE_NUMBERS};
use crate::core::series::{fibonacci, Counter};
use crate::core::{
    ArithmeticOutcome, BinaryOp, ConfigProvider, DemoReport, FetchOutcome, OpResult,
    PayloadSource, SequenceSummary, Storage,
};
use crate::utils::error::Result;
use crate::utils::monitor::ProcessMonitor;
use chrono::Utc;

/// 示範用的運算：最後一筆刻意觸發除以零
pub const ARITHMETIC_SAMPLES: [(BinaryOp, f64, f64); 5] = [
    (BinaryOp::Add, 5.0, 3.0),
    (BinaryOp::Subtract, 10.0, 4.0),
    (BinaryOp::Multiply, 6.0, 7.0),
    (BinaryOp::Divide, 20.0, 5.0),
    (BinaryOp::Divide, 1.0, 0.0),
];

pub const SQUARE_SAMPLE: i64 = 4;
pub const FIBONACCI_SAMPLES: usize = 10;

pub struct DemoRunner<S: Storage, P: PayloadSource> {
    storage: S,
    source: Option<P>,
    report_path: Option<String>,
    monitor: ProcessMonitor,
}

impl<S: Storage, P: PayloadSource> DemoRunner<S, P> {
    /// `source` 為 `None` 時略過遠端抓取
    pub fn new(storage: S, source: Option<P>, report_path: Option<String>) -> Self {
        Self::new_with_monitoring(storage, source, report_path, false)
    }

    pub fn new_with_monitoring(
        storage: S,
        source: Option<P>,
        report_path: Option<String>,
        monitor_enabled: bool,
    ) -> Self {
        Self {
            storage,
            source,
            report_path,
            monitor: ProcessMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&mut self) -> Result<(DemoReport, Option<String>)> {
        tracing::info!("Starting demonstrations...");
        self.monitor.log_stats("Start");

        let arithmetic = self.run_arithmetic();
        let squared = (SQUARE_SAMPLE, square(SQUARE_SAMPLE)?);
        tracing::info!("Square of {}: {}", squared.0, squared.1);

        let fetch = match &self.source {
            Some(source) => match fetch_outcome(source).await {
                Ok(payload) => FetchOutcome::Fetched(payload),
                Err(message) => FetchOutcome::Failed(message),
            },
            None => {
                tracing::info!("Remote fetch disabled, skipping");
                FetchOutcome::Skipped
            }
        };
        self.monitor.log_stats("Fetch");

        let sequence = SequenceSummary::from_numbers(&SAMPLE_NUMBERS)?;
        tracing::info!("Doubled numbers: {:?}", sequence.doubled);
        tracing::info!("Sum of numbers: {}", sequence.sum);

        let mut fibonacci_values = Vec::with_capacity(FIBONACCI_SAMPLES);
        for n in 0..FIBONACCI_SAMPLES as i64 {
            fibonacci_values.push((n, fibonacci(n)?));
        }
        let mut counter = Counter::new();
        let counter_value = counter.increment();

        let report = DemoReport {
            generated_at: Utc::now(),
            arithmetic,
            squared,
            fetch,
            sequence,
            fibonacci: fibonacci_values,
            counter_value,
        };

        let written = match &self.report_path {
            Some(path) => {
                let json = serde_json::to_vec_pretty(&report)?;
                let written = self.storage.write_file(path, &json).await?;
                tracing::info!("📁 Report saved to: {}", written);
                Some(written)
            }
            None => None,
        };

        self.monitor.log_stats("Finished");
        Ok((report, written))
    }

    fn run_arithmetic(&self) -> Vec<ArithmeticOutcome> {
        let calc = Calculator::new();
        ARITHMETIC_SAMPLES
            .iter()
            .map(|&(op, x, y)| {
                let result = match calc.apply(op, x, y) {
                    Ok(value) => {
                        tracing::info!("{}: {}", op.label(), value);
                        OpResult::Value(value)
                    }
                    Err(e) => {
                        tracing::warn!("{} ({} / {}) failed: {}", op.label(), x, y, e);
                        OpResult::Error(e.to_string())
                    }
                };
                ArithmeticOutcome { op, x, y, result }
            })
            .collect()
    }
}

impl<S: Storage> DemoRunner<S, HttpPayloadSource> {
    pub fn from_config<C: ConfigProvider + ?Sized>(storage: S, config: &C) -> Self {
        let source = config
            .fetch_enabled()
            .then(|| HttpPayloadSource::new(config.endpoint()));

        Self::new_with_monitoring(
            storage,
            source,
            config.report_path().map(str::to_string),
            config.monitoring_enabled(),
        )
    }
}
