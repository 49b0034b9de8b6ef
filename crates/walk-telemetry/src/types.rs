//! Sample value objects produced by walk parsing.

use serde::Serialize;
use std::collections::BTreeMap;

/// Reserved label key carrying the row's own instance index.
pub const SNMP_INDEX_LABEL: &str = "snmp_index";

/// A coerced numeric reading. Integral values keep their integer
/// identity through serialization instead of becoming `x.0` floats.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetricValue {
    Integer(i64),
    Float(f64),
}

impl MetricValue {
    /// Collapse an integral float into an integer reading.
    pub fn from_f64(value: f64) -> Self {
        if value.is_finite() && value.fract() == 0.0 {
            MetricValue::Integer(value as i64)
        } else {
            MetricValue::Float(value)
        }
    }
}

/// One metric extracted from one walk row, carrying the row's full
/// label snapshot. Samples are independent value objects; consumers may
/// ship them individually.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ParsedSample {
    pub metric_name: String,
    pub value: MetricValue,
    /// Module that declared the object, `"Unknown"` for raw lines
    pub mib_module: String,
    /// Batch category derived from the walk's root identifier
    pub metric_category: String,
    pub agent_host: String,
    /// Capture time, seconds since the epoch, one per batch
    pub timestamp: i64,
    /// Row labels, always including [`SNMP_INDEX_LABEL`]
    pub labels: BTreeMap<String, String>,
}
