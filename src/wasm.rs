//! JavaScript bindings.
//!
//! Tables cross the boundary as `{ headers: string[], rows: string[][] }`.
//! Validation failures surface their message verbatim; anything else is
//! logged and reported as a generic error.

use wasm_bindgen::prelude::*;

use crate::error::PartitionError;
use crate::partition::{PartitionConfig, PartitionRunner};
use crate::roster::{add_composite_score, Table};

fn to_js_error(err: PartitionError) -> JsError {
    if !err.is_validation() {
        tracing::error!(error = %err, "partitioning failed");
    }
    JsError::new(&err.public_message())
}

fn decode<T: serde::de::DeserializeOwned>(value: JsValue) -> Result<T, JsError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| JsError::new(&e.to_string()))
}

fn encode<T: serde::Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

/// Partitions a table into `class_count` classes with the default schema.
#[wasm_bindgen(js_name = partitionTable)]
pub fn partition_table(table: JsValue, class_count: i32) -> Result<JsValue, JsError> {
    let table: Table = decode(table)?;
    let config = PartitionConfig::new(i64::from(class_count));
    let out = PartitionRunner::run_table(table, &config).map_err(to_js_error)?;
    encode(&out)
}

/// Partitions a table with a full [`PartitionConfig`] object.
#[wasm_bindgen(js_name = partitionTableWithConfig)]
pub fn partition_table_with_config(table: JsValue, config: JsValue) -> Result<JsValue, JsError> {
    let table: Table = decode(table)?;
    let config: PartitionConfig = decode(config)?;
    let out = PartitionRunner::run_table(table, &config).map_err(to_js_error)?;
    encode(&out)
}

/// Adds a `MAP_score` column computed from `math_score` and `reading_score`.
#[wasm_bindgen(js_name = computeMapScores)]
pub fn compute_map_scores(table: JsValue) -> Result<JsValue, JsError> {
    let mut table: Table = decode(table)?;
    let score_column = PartitionConfig::default().policy.score_column;
    add_composite_score(&mut table, &score_column).map_err(to_js_error)?;
    encode(&table)
}
