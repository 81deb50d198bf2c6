use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::probe::ValidKeyRecord;

/// Default output file, appended across runs.
pub const OUTPUT_FILE: &str = "valid_keys.txt";

const SEPARATOR_LEN: usize = 40;

/// Append one block per record to `sink`, in input order. Empty input writes
/// nothing.
///
/// Each block is formatted in full before a single write, so a record is
/// never half-persisted. Existing sink content is never read or rewritten.
pub fn persist<W: Write>(sink: &mut W, records: &[ValidKeyRecord]) -> Result<()> {
    if records.is_empty() {
        return Ok(());
    }
    for record in records {
        sink.write_all(format_block(record).as_bytes())?;
    }
    sink.flush()?;
    Ok(())
}

/// Open `path` for appending and persist into it. The file is only created
/// when there is at least one record to write.
pub fn persist_to_file(path: &Path, records: &[ValidKeyRecord]) -> Result<()> {
    if records.is_empty() {
        return Ok(());
    }
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    persist(&mut file, records)
}

fn format_block(record: &ValidKeyRecord) -> String {
    format!(
        "[{}] {}\nSource: {}\nKey: {}\nTested URL: {}\n{}\n",
        record.vendor.tag(),
        record.api_name,
        record.source,
        record.key,
        record.tested_url,
        "-".repeat(SEPARATOR_LEN),
    )
}
