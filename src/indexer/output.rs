use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::models::ArchiveIndex;

/// Write the index document as tab-indented JSON followed by a newline
pub fn write_index<W: Write>(index: &ArchiveIndex, mut writer: W) -> Result<()> {
    let formatter = PrettyFormatter::with_indent(b"\t");
    let mut serializer = Serializer::with_formatter(&mut writer, formatter);
    index.serialize(&mut serializer).context("Failed to serialize index")?;
    writeln!(writer).context("Failed to write index")?;
    writer.flush().context("Failed to flush index output")
}
