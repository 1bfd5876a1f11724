//! Key files as written by wallet tooling.
//!
//! Two shapes are understood:
//! - a plain JSON array of integers, `[12, 34, ...]`;
//! - a wallet dump, `{"_keypair": {"secretKey": {"0": 12, "1": 34, ...}}}`, whose
//!   `secretKey` may also be a plain array.

use std::{fs, path::Path};

use b58enc::bytes_from_values;
use log::debug;
use serde_json::Value;

use crate::error::{CliError, Result};

/// Read `path` and return the key bytes it holds.
pub fn read_key_file(path: &Path) -> Result<Vec<u8>> {
    let raw = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let json: Value = serde_json::from_str(&raw).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    let values = key_values(&json).ok_or_else(|| CliError::UnsupportedKeyFile {
        path: path.to_path_buf(),
    })?;
    debug!("read {} values from {}", values.len(), path.display());
    Ok(bytes_from_values(values)?)
}

/// Pull the integer list out of either supported shape.
///
/// Returns `None` for any other shape, for non-integer entries, and for
/// `secretKey` objects whose keys are not exactly `"0"..="n-1"`.
pub fn key_values(json: &Value) -> Option<Vec<i128>> {
    match json {
        Value::Array(items) => integers(items),
        Value::Object(map) => match map.get("_keypair")?.get("secretKey")? {
            Value::Array(items) => integers(items),
            Value::Object(entries) => {
                let mut indexed = entries
                    .iter()
                    .map(|(key, value)| Some((key.parse::<usize>().ok()?, integer(value)?)))
                    .collect::<Option<Vec<_>>>()?;
                indexed.sort_unstable_by_key(|(index, _)| *index);
                let contiguous = indexed
                    .iter()
                    .enumerate()
                    .all(|(position, (index, _))| position == *index);
                contiguous.then(|| indexed.into_iter().map(|(_, value)| value).collect())
            }
            _ => None,
        },
        _ => None,
    }
}

fn integers(items: &[Value]) -> Option<Vec<i128>> {
    items.iter().map(integer).collect()
}

fn integer(value: &Value) -> Option<i128> {
    let Value::Number(number) = value else {
        return None;
    };
    if let Some(v) = number.as_i64() {
        return Some(v.into());
    }
    if let Some(v) = number.as_u64() {
        return Some(v.into());
    }
    // Integers past u64 and spellings like `1e3` or `300.0` arrive as f64.
    // `as` saturates, so huge values stay out of byte range.
    number
        .as_f64()
        .filter(|f| f.fract() == 0.0)
        .map(|f| f as i128)
}
