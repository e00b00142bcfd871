use std::io::Write;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::file_format::FileFormat;
use crate::normalize_string::NormalizeString;

pub type Result<T> = anyhow::Result<T>;

pub fn serialize<T: Serialize>(value: &T, format: FileFormat) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    serialize_into(value, format, &mut buffer)?;
    Ok(buffer)
}

pub fn serialize_into<T: Serialize, W: Write>(
    value: &T,
    format: FileFormat,
    writer: &mut W,
) -> Result<()> {
    let text = match format {
        FileFormat::Yaml => serde_yml::to_string(value)?,
        FileFormat::Json => serde_json::to_string_pretty(value)?,
    };
    writer.write_all(text.normalize().as_bytes())?;

    Ok(())
}

pub fn deserialize<T: DeserializeOwned>(serialized: &[u8], format: FileFormat) -> Result<T> {
    let text = std::str::from_utf8(serialized)?;
    match format {
        FileFormat::Yaml => Ok(serde_yml::from_str(text)?),
        FileFormat::Json => Ok(serde_json::from_str(text)?),
    }
}
