//! JSON persistence shared by both descriptor kinds.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::ModelResult;

/// Serializes with the 4-space indentation the descriptor files use.
pub(crate) fn to_pretty_string<T: Serialize>(value: &T) -> ModelResult<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    buf.push(b'\n');
    // serde_json only emits UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

pub(crate) fn read_file<T: DeserializeOwned>(path: &Path) -> ModelResult<T> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

pub(crate) fn write_file<T: Serialize>(path: &Path, value: &T) -> ModelResult<()> {
    fs::write(path, to_pretty_string(value)?)?;
    Ok(())
}
