//! Line classification and row grouping.

use crate::types::{MetricValue, ParsedSample, SNMP_INDEX_LABEL};
use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;

/// `MODULE::name.index value`
static QUALIFIED_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.*?)::(.*?)\.(.*?) (.*)$").expect("qualified line pattern"));

/// `name.index value`, no module qualifier
static RAW_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.*?)\.(.*?) (.*)$").expect("raw line pattern"));

static PAREN_INT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\((\d+)\)").expect("paren pattern"));

/// Inner type markers unwrapped when a value embeds a second
/// `TYPE: data` pair.
const WRAPPED_TYPE_MARKERS: &[&str] = &[
    "INTEGER",
    "STRING",
    "Gauge32",
    "Counter32",
    "Counter64",
    "OID",
    "IpAddress",
    "TimeTicks",
    "Unsigned32",
];

/// Declared types eligible for metric extraction, matched
/// case-insensitively against the value's type prefix.
const NUMERIC_TYPES: &[&str] = &[
    "counter32",
    "counter64",
    "gauge32",
    "integer",
    "unsigned32",
    "timeticks",
];

/// Name fragments that mark an object as an identifier. Such fields
/// become labels even when their declared type is numeric.
const IDENTIFIER_NAME_HINTS: &[&str] = &[
    "index", "id", "name", "descr", "serial", "mac", "type", "version",
];

/// Fields of one logical row, grouped by trailing instance index.
#[derive(Default)]
struct Row {
    labels: BTreeMap<String, String>,
    metrics: Vec<MetricField>,
}

struct MetricField {
    name: String,
    value: MetricValue,
    module: String,
}

/// Classify raw walk output lines into ordered samples.
///
/// Unmatched lines are dropped; fields whose value cannot be coerced
/// are demoted to labels. Neither aborts the batch. The batch category
/// is the text after `::` in the root identifier, or the identifier
/// itself.
pub fn parse_walk_output<S: AsRef<str>>(
    lines: &[S],
    agent_host: &str,
    root_identifier: &str,
) -> Vec<ParsedSample> {
    let category = root_identifier
        .split("::")
        .nth(1)
        .unwrap_or(root_identifier);

    // Row grouping preserves first-encounter order of instance indexes.
    let mut rows: Vec<(String, Row)> = Vec::new();
    let mut row_positions: FxHashMap<String, usize> = FxHashMap::default();

    for line in lines {
        let Some(field) = split_line(line.as_ref()) else {
            continue;
        };

        let position = *row_positions
            .entry(field.index.clone())
            .or_insert_with(|| {
                rows.push((field.index.clone(), Row::default()));
                rows.len() - 1
            });
        let row = &mut rows[position].1;

        classify_field(field, row);
    }

    let timestamp = chrono::Utc::now().timestamp();
    let mut samples = Vec::new();
    for (index, mut row) in rows {
        row.labels.insert(SNMP_INDEX_LABEL.to_string(), index);
        for metric in row.metrics {
            samples.push(ParsedSample {
                metric_name: metric.name,
                value: metric.value,
                mib_module: metric.module,
                metric_category: category.to_string(),
                agent_host: agent_host.to_string(),
                timestamp,
                labels: row.labels.clone(),
            });
        }
    }
    samples
}

/// One matched line, before value normalization.
struct RawField {
    module: String,
    name: String,
    index: String,
    value: String,
}

fn split_line(line: &str) -> Option<RawField> {
    if let Some(captures) = QUALIFIED_LINE.captures(line) {
        return Some(RawField {
            module: captures[1].to_string(),
            name: captures[2].to_string(),
            index: captures[3].trim().to_string(),
            value: captures[4].trim().to_string(),
        });
    }
    let captures = RAW_LINE.captures(line)?;
    Some(RawField {
        module: "Unknown".to_string(),
        name: captures[1].to_string(),
        index: captures[2].trim().to_string(),
        value: captures[3].trim().to_string(),
    })
}

fn classify_field(field: RawField, row: &mut Row) {
    let mut raw = field.value.as_str();
    if let Some(stripped) = raw.strip_prefix("= ") {
        raw = stripped;
    }

    // Split `TYPE: data`, unwrapping a doubled marker such as
    // `Wrong Type (should be ...): INTEGER: 7`.
    let (value_type, mut data) = match raw.split_once(": ") {
        Some((value_type, data)) => {
            let data = match data.split_once(": ") {
                Some((inner_type, inner))
                    if WRAPPED_TYPE_MARKERS.contains(&inner_type.trim()) =>
                {
                    inner
                }
                _ => data,
            };
            (value_type, data)
        }
        None => ("Unknown", raw),
    };
    data = data.trim_matches('"');

    let type_lower = value_type.to_lowercase();
    let name_lower = field.name.to_lowercase();
    let mut is_metric = NUMERIC_TYPES.iter().any(|t| type_lower.contains(t))
        && !IDENTIFIER_NAME_HINTS
            .iter()
            .any(|hint| name_lower.contains(hint));

    // TimeTicks readings carry centiseconds in parentheses and are
    // always metrics, identifier-looking names included.
    let mut pre_coerced: Option<f64> = None;
    if type_lower.contains("timeticks") {
        is_metric = true;
        if let Some(ticks) = extract_paren_int(data) {
            pre_coerced = Some(ticks as f64 / 100.0);
        }
    }

    if is_metric {
        match pre_coerced.or_else(|| coerce_numeric(data)) {
            Some(value) => row.metrics.push(MetricField {
                name: field.name,
                value: MetricValue::from_f64(value),
                module: field.module,
            }),
            None => {
                row.labels.insert(field.name, data.to_string());
            }
        }
    } else {
        row.labels.insert(field.name, data.to_string());
    }
}

fn extract_paren_int(text: &str) -> Option<i64> {
    PAREN_INT
        .captures(text)
        .and_then(|captures| captures[1].parse::<i64>().ok())
}

/// Parenthesized integer if present, else the first whitespace token as
/// a float.
fn coerce_numeric(text: &str) -> Option<f64> {
    if let Some(n) = extract_paren_int(text) {
        return Some(n as f64);
    }
    text.split_whitespace().next()?.parse::<f64>().ok()
}
