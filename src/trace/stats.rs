//! Summary statistics over a parsed trace.

use super::types::Sample;

/// Mean/min/max summary of one series, as shown in the statistics table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesSummary {
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

/// Summarize a sample slice. Returns `None` for an empty slice so callers
/// render a "no data" note instead of fabricated numbers.
pub fn summarize(samples: &[Sample]) -> Option<SeriesSummary> {
    if samples.is_empty() {
        return None;
    }

    let mut sum = 0.0;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for sample in samples {
        sum += sample.value;
        min = min.min(sample.value);
        max = max.max(sample.value);
    }

    Some(SeriesSummary {
        count: samples.len(),
        mean: sum / samples.len() as f64,
        min,
        max,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample(value: f64) -> Sample {
        Sample {
            datetime: NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_micro_opt(10, 0, 0, 0)
                .unwrap(),
            time_hm: "10:00".to_string(),
            value,
        }
    }

    #[test]
    fn test_summarize_basic() {
        let samples = vec![sample(1.0), sample(2.0), sample(3.0)];
        let summary = summarize(&samples).unwrap();

        assert_eq!(summary.count, 3);
        assert_eq!(summary.mean, 2.0);
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.max, 3.0);
    }

    #[test]
    fn test_summarize_single_sample() {
        let summary = summarize(&[sample(4.25)]).unwrap();

        assert_eq!(summary.count, 1);
        assert_eq!(summary.mean, 4.25);
        assert_eq!(summary.min, 4.25);
        assert_eq!(summary.max, 4.25);
    }

    #[test]
    fn test_summarize_empty() {
        assert_eq!(summarize(&[]), None);
    }
}
