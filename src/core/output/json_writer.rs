//! JSON output writer.

use std::fs::File;
use std::io::Write;

use serde::Serialize;

use crate::error::Result;

/// Writes any serializable value (a [`Report`](crate::report::Report), the
/// record table, a single aggregate) to a pretty-printed JSON file.
pub fn write_json<T: Serialize + ?Sized>(value: &T, output_path: &str) -> Result<()> {
    let json = to_json(value)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts a value to a pretty-printed JSON string.
///
/// Same format as [`write_json`], but returns a String instead of writing to
/// a file.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
