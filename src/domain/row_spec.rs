// One classified data row of the metrics CSV
use super::statistic::Statistic;
use super::validators::{is_integer, is_valid_metric_name};
use csv::StringRecord;

const THRESHOLD_COLUMN: usize = 0;
const STATISTIC_COLUMN: usize = 1;
const FIRST_METRIC_COLUMN: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RowSpec {
    pub threshold: Option<i64>,
    pub statistic: Option<Statistic>,
    pub metric_names: Vec<String>,
}

impl RowSpec {
    /// Classifies `threshold, statistic, metric...` cells.
    ///
    /// Invalid cells are dropped rather than reported: a bad threshold or
    /// statistic becomes `None` and blank metric columns are skipped.
    pub fn classify(record: &StringRecord) -> Self {
        let threshold = record
            .get(THRESHOLD_COLUMN)
            .filter(|cell| is_integer(cell))
            .and_then(|cell| cell.parse::<i64>().ok());

        let statistic = record.get(STATISTIC_COLUMN).and_then(Statistic::parse);

        let metric_names = record
            .iter()
            .skip(FIRST_METRIC_COLUMN)
            .filter(|cell| is_valid_metric_name(Some(*cell)))
            .map(str::to_string)
            .collect();

        Self {
            threshold,
            statistic,
            metric_names,
        }
    }
}
