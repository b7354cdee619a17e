//! Shared output helpers for commands that print JSON documents.

use anyhow::Result;
use serde::Serialize;
use std::io::Write;

/// Write `value` as pretty-printed JSON followed by a newline.
pub fn write_json<T: Serialize + ?Sized>(out: &mut dyn Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
