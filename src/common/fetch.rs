use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;

use crate::common::color::parse_hex;
use crate::common::data::Error;
use crate::common::processors::{get_array_from_value, get_name_from_value, get_str_from_value};

/// Canonical `#RRGGBB` to color name.
pub type ColorTable = HashMap<String, String>;

pub async fn fetch_color_table(url: &str, timeout: Duration) -> Result<ColorTable, Error> {
    let client = reqwest::Client::builder().timeout(timeout).build()?;
    let resp = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    let table = parse_color_table(&resp)?;
    tracing::info!("Got {} color names from {url}", table.len());
    Ok(table)
}

/// Accepts either a bare array of entries or an object with a `colors` array.
/// Entries without a usable hex or name are skipped; the first name for a
/// hex wins.
pub fn parse_color_table(body: &str) -> Result<ColorTable, Error> {
    let json: Value = serde_json::from_str(body)?;
    let entries = match &json {
        Value::Array(entries) => entries,
        _ => get_array_from_value(&json, "colors")?,
    };

    let mut table = ColorTable::new();
    for entry in entries {
        let (hex, name) = match (get_str_from_value(entry, "hex"), get_name_from_value(entry)) {
            (Ok(hex), Ok(name)) => (hex, name),
            (Err(e), _) | (_, Err(e)) => {
                tracing::debug!("Skipping color entry: {e}");
                continue;
            }
        };
        match parse_hex(hex, true) {
            Ok(color) => {
                table.entry(color.hex()).or_insert_with(|| name.to_owned());
            }
            Err(e) => tracing::debug!("Skipping color entry {name:?}: {e}"),
        }
    }
    Ok(table)
}
