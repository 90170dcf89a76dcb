use crate::domain::model::SequenceSummary;
use crate::utils::error::{DemoError, Result};

pub const SAMPLE_NUMBERS: [i64; 5] = [1, 2, 3, 4, 5];

fn overflow(operation: &str, value: i64) -> DemoError {
    DemoError::ValidationError {
        message: format!("{} of {} overflows i64", operation, value),
    }
}

pub fn square(x: i64) -> Result<i64> {
    x.checked_mul(x).ok_or_else(|| overflow("Square", x))
}

pub fn double_all(numbers: &[i64]) -> Result<Vec<i64>> {
    numbers
        .iter()
        .map(|&n| n.checked_mul(2).ok_or_else(|| overflow("Doubling", n)))
        .collect()
}

pub fn sum(numbers: &[i64]) -> Result<i64> {
    numbers.iter().try_fold(0i64, |acc, &n| {
        acc.checked_add(n).ok_or_else(|| DemoError::ValidationError {
            message: format!("Sum overflows i64 after adding {}", n),
        })
    })
}

impl SequenceSummary {
    pub fn from_numbers(numbers: &[i64]) -> Result<Self> {
        Ok(Self {
            input: numbers.to_vec(),
            doubled: double_all(numbers)?,
            sum: sum(numbers)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_transform() {
        assert_eq!(double_all(&SAMPLE_NUMBERS).unwrap(), vec![2, 4, 6, 8, 10]);
        assert_eq!(sum(&SAMPLE_NUMBERS).unwrap(), 15);
    }

    #[test]
    fn test_square() {
        assert_eq!(square(4).unwrap(), 16);
        assert_eq!(square(-3).unwrap(), 9);
        assert_eq!(square(0).unwrap(), 0);
    }

    #[test]
    fn test_empty_sequence() {
        assert!(double_all(&[]).unwrap().is_empty());
        assert_eq!(sum(&[]).unwrap(), 0);
    }

    #[test]
    fn test_summary_keeps_input_order() {
        let summary = SequenceSummary::from_numbers(&[3, -1, 7]).unwrap();
        assert_eq!(summary.input, vec![3, -1, 7]);
        assert_eq!(summary.doubled, vec![6, -2, 14]);
        assert_eq!(summary.sum, 9);
    }

    #[test]
    fn test_square_overflow() {
        assert_eq!(square(3_037_000_499).unwrap(), 9_223_372_030_926_249_001);
        assert!(matches!(
            square(4_000_000_000),
            Err(DemoError::ValidationError { .. })
        ));
        assert!(square(i64::MIN).is_err());
    }

    #[test]
    fn test_double_overflow() {
        assert_eq!(double_all(&[i64::MAX / 2]).unwrap(), vec![i64::MAX - 1]);
        assert!(matches!(
            double_all(&[1, i64::MAX / 2 + 1]),
            Err(DemoError::ValidationError { .. })
        ));
    }

    #[test]
    fn test_sum_overflow() {
        assert!(sum(&[i64::MAX, 1, -1]).is_err());
        assert_eq!(sum(&[i64::MAX - 1, 1]).unwrap(), i64::MAX);
        assert!(matches!(
            sum(&[i64::MAX, 1]),
            Err(DemoError::ValidationError { .. })
        ));
        assert!(sum(&[i64::MIN, -1]).is_err());
    }

    #[test]
    fn test_summary_propagates_overflow() {
        assert!(SequenceSummary::from_numbers(&[i64::MAX]).is_err());
    }
}
