//! Run report model: counters plus non-fatal warnings.

use std::collections::BTreeMap;
use std::fmt;

/// Aggregate counters and diagnostics for one pipeline run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReportManifestRun {
    /// Input line-item rows consumed.
    pub cnt_rows_input: u64,
    /// Distinct orders aggregated.
    pub cnt_orders: u64,
    /// Records in the CM bucket.
    pub cnt_bucket_cm: u64,
    /// Records in the MC bucket (including the Cold Xpress row).
    pub cnt_bucket_mc: u64,
    /// Records in the CX bucket.
    pub cnt_bucket_cx: u64,
    /// Records in the untagged bucket.
    pub cnt_bucket_other: u64,
    /// Output artifacts planned (empty buckets omitted).
    pub cnt_artifacts: u64,
    /// Non-fatal warnings collected during the run.
    pub warnings: Vec<String>,
}

impl ReportManifestRun {
    /// Number of collected warnings.
    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    /// Add a warning message.
    pub fn warn(&mut self, msg: impl AsRef<str>) {
        self.warnings.push(msg.as_ref().to_string());
    }

    /// Machine-readable counters.
    pub fn to_dict(&self) -> BTreeMap<String, u64> {
        let mut dict_counts = BTreeMap::new();
        dict_counts.insert("cnt_rows_input".to_string(), self.cnt_rows_input);
        dict_counts.insert("cnt_orders".to_string(), self.cnt_orders);
        dict_counts.insert("cnt_bucket_cm".to_string(), self.cnt_bucket_cm);
        dict_counts.insert("cnt_bucket_mc".to_string(), self.cnt_bucket_mc);
        dict_counts.insert("cnt_bucket_cx".to_string(), self.cnt_bucket_cx);
        dict_counts.insert("cnt_bucket_other".to_string(), self.cnt_bucket_other);
        dict_counts.insert("cnt_artifacts".to_string(), self.cnt_artifacts);
        dict_counts.insert("cnt_warnings".to_string(), self.warning_count() as u64);
        dict_counts
    }

    /// Human-readable one-line summary.
    pub fn format(&self, prefix: &str) -> String {
        format!(
            "{prefix} rows={} orders={} cm={} mc={} cx={} other={} artifacts={} warnings={}",
            self.cnt_rows_input,
            self.cnt_orders,
            self.cnt_bucket_cm,
            self.cnt_bucket_mc,
            self.cnt_bucket_cx,
            self.cnt_bucket_other,
            self.cnt_artifacts,
            self.warning_count()
        )
    }
}

impl fmt::Display for ReportManifestRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format("[RUN]"))
    }
}
