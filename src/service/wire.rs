//! JSON payloads exchanged with the classification service.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::ServiceError;
use super::error::describe_status;
use crate::session::{CellLabel, Classification, RawScores, Sample};

const STATUS_OK: &str = "OK";
const TARGET_CLASS_KEY: &str = "target_class";

/// Body for `records/random`.
///
/// The service filters stored records by `training_record`, which it stores as
/// the strings `"True"` / `"False"`.
#[derive(Debug, Serialize)]
pub(crate) struct RandomRecordsRequest {
    pub max: usize,
    pub training_record: &'static str,
}

impl RandomRecordsRequest {
    pub(crate) fn testing_records(max: usize) -> Self {
        Self {
            max,
            training_record: "False",
        }
    }
}

/// Body for `query`; features travel as one comma-joined string.
#[derive(Debug, Serialize)]
pub(crate) struct QueryRequest<'a> {
    pub name: &'a str,
    pub features: String,
}

impl<'a> QueryRequest<'a> {
    pub(crate) fn new(name: &'a str, features: &[f64]) -> Self {
        Self {
            name,
            features: join_features(features),
        }
    }
}

pub(crate) fn join_features(features: &[f64]) -> String {
    features
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

#[derive(Debug, Deserialize)]
struct StatusWire {
    status: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RecordsWire {
    status: Option<String>,
    records: Option<Vec<Map<String, Value>>>,
}

#[derive(Debug, Deserialize)]
struct QueryWire {
    status: Option<String>,
    identified_class: Option<Value>,
    raw_network_output: Option<Vec<Vec<Value>>>,
}

#[derive(Debug, Deserialize)]
struct MetadataWire {
    status: Option<String>,
    records: Option<Vec<Map<String, Value>>>,
}

/// Parse a `records/random` response into samples with `feature_count` features each.
pub(crate) fn parse_records(body: &str, feature_count: usize) -> Result<Vec<Sample>, ServiceError> {
    let wire: RecordsWire = parse_json(body)?;
    ensure_ok(wire.status.as_deref())?;
    let records = wire
        .records
        .ok_or_else(|| malformed("missing `records` array"))?;
    records
        .iter()
        .enumerate()
        .map(|(index, record)| parse_record(index, record, feature_count))
        .collect()
}

fn parse_record(
    index: usize,
    record: &Map<String, Value>,
    feature_count: usize,
) -> Result<Sample, ServiceError> {
    let features = (0..feature_count)
        .map(|feature| {
            let key = feature.to_string();
            let value = record
                .get(&key)
                .ok_or_else(|| malformed(format!("record {index} is missing feature `{key}`")))?;
            as_f64(value)
                .ok_or_else(|| malformed(format!("record {index} feature `{key}` is not numeric")))
        })
        .collect::<Result<Vec<_>, _>>()?;
    let target = record
        .get(TARGET_CLASS_KEY)
        .ok_or_else(|| malformed(format!("record {index} is missing `{TARGET_CLASS_KEY}`")))?;
    let label = as_class(target)
        .map(CellLabel::from_class)
        .filter(|label| *label != CellLabel::Unknown)
        .ok_or_else(|| malformed(format!("record {index} has invalid `{TARGET_CLASS_KEY}`")))?;
    Ok(Sample::new(features, label))
}

/// Parse a `query` response.
pub(crate) fn parse_classification(body: &str) -> Result<Classification, ServiceError> {
    let wire: QueryWire = parse_json(body)?;
    ensure_ok(wire.status.as_deref())?;
    let predicted_class = wire
        .identified_class
        .as_ref()
        .and_then(as_class)
        .filter(|class| *class <= 1)
        .ok_or_else(|| malformed("missing or invalid `identified_class`"))?;
    let row = wire
        .raw_network_output
        .as_ref()
        .and_then(|rows| rows.first())
        .ok_or_else(|| malformed("missing `raw_network_output`"))?;
    let score = |slot: usize| {
        row.get(slot)
            .and_then(as_f64)
            .ok_or_else(|| malformed(format!("`raw_network_output` lacks score {slot}")))
    };
    Ok(Classification {
        predicted_class,
        raw: RawScores {
            benign: score(0)?,
            malignant: score(1)?,
        },
    })
}

/// Parse the root status response; `Ok(())` means healthy.
pub(crate) fn parse_status(body: &str) -> Result<(), ServiceError> {
    let wire: StatusWire = parse_json(body)?;
    match wire.status.as_deref() {
        Some(STATUS_OK) => Ok(()),
        Some(other) => Err(malformed(format!("service status is `{other}`"))),
        None => Err(malformed("missing `status`")),
    }
}

/// Parse a `metadata` response into the list of deployed network names.
pub(crate) fn parse_models(body: &str) -> Result<Vec<String>, ServiceError> {
    let wire: MetadataWire = parse_json(body)?;
    ensure_ok(wire.status.as_deref())?;
    let records = wire
        .records
        .ok_or_else(|| malformed("missing `records` array"))?;
    let mut names: Vec<String> = records
        .iter()
        .filter_map(|record| record.get("network_id").and_then(Value::as_str))
        .map(str::to_string)
        .collect();
    names.sort();
    names.dedup();
    Ok(names)
}

/// Extract a readable message from an error body, falling back to the raw text.
pub(crate) fn rejection_message(body: &str) -> String {
    serde_json::from_str::<StatusWire>(body)
        .ok()
        .and_then(|wire| wire.status)
        .map(|status| describe_status(&status))
        .unwrap_or_else(|| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                "no details".to_string()
            } else {
                trimmed.chars().take(200).collect()
            }
        })
}

fn parse_json<T: for<'de> Deserialize<'de>>(body: &str) -> Result<T, ServiceError> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Err(malformed("empty response body"));
    }
    serde_json::from_str(trimmed).map_err(|err| malformed(format!("invalid JSON: {err}")))
}

/// Older service builds omit `status`; only an explicit non-OK value is an error.
fn ensure_ok(status: Option<&str>) -> Result<(), ServiceError> {
    match status {
        None | Some(STATUS_OK) => Ok(()),
        Some(other) => Err(malformed(format!(
            "service status `{other}`: {}",
            describe_status(other)
        ))),
    }
}

fn as_f64(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|value| value.is_finite())
}

fn as_class(value: &Value) -> Option<u8> {
    let raw = as_f64(value)?;
    if raw.fract() != 0.0 || !(0.0..=255.0).contains(&raw) {
        return None;
    }
    Some(raw as u8)
}

fn malformed(message: impl Into<String>) -> ServiceError {
    ServiceError::MalformedResponse(message.into())
}
