//! On-disk layout of the state table.
//!
//! # Record Structure
//! ```text
//! [4 bytes] Cube key (big-endian u32)
//! [1 byte ] Recovery move code (1..=6)
//! ```
//!
//! Records are packed back to back with no header, sorted ascending by key.
//! A complete file holds 3,674,159 records (18,370,795 bytes).

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use byteorder::{BigEndian, ByteOrder};
use log::{debug, trace};

use super::{Entry, StateTable};
use crate::pocket::types::error::{PocketError, Result};
use crate::pocket::types::models::CubeKey;
use crate::pocket::types::turn::Turn;

/// Size of one record in bytes.
pub const RECORD_SIZE: usize = 5;

/// Decodes one 5-byte record.
pub fn decode_record(record: &[u8]) -> Result<Entry> {
    if record.len() != RECORD_SIZE {
        return Err(PocketError::InvalidFormat(format!(
            "Record must be {} bytes, found {}",
            RECORD_SIZE,
            record.len()
        )));
    }
    let raw = BigEndian::read_u32(&record[0..4]);
    let key = CubeKey::try_from(raw)
        .map_err(|_| PocketError::InvalidFormat(format!("Key {} is out of range", raw)))?;
    let recovery = Turn::try_from(record[4])?;
    Ok(Entry { key, recovery })
}

/// Encodes one entry into its 5-byte record.
pub fn encode_record(entry: &Entry) -> [u8; RECORD_SIZE] {
    let mut record = [0u8; RECORD_SIZE];
    BigEndian::write_u32(&mut record[0..4], entry.key.raw());
    record[4] = entry.recovery.code();
    record
}

/// Parses a table from a stream of records.
pub fn read_table<R: Read>(mut reader: R) -> Result<StateTable> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    debug!("Read {} bytes of table data", bytes.len());

    if bytes.len() % RECORD_SIZE != 0 {
        return Err(PocketError::InvalidFormat(format!(
            "Table size {} is not a multiple of the {}-byte record size",
            bytes.len(),
            RECORD_SIZE
        )));
    }

    let entries = bytes
        .chunks_exact(RECORD_SIZE)
        .map(decode_record)
        .collect::<Result<Vec<_>>>()?;
    trace!("Decoded {} records", entries.len());

    StateTable::from_sorted(entries)
}

/// Writes every entry of `table` as a record.
pub fn write_table<W: Write>(mut writer: W, table: &StateTable) -> Result<()> {
    for entry in table.entries() {
        writer.write_all(&encode_record(entry))?;
    }
    writer.flush()?;
    Ok(())
}

pub fn read_file(path: &Path) -> Result<StateTable> {
    let file = File::open(path)?;
    read_table(BufReader::new(file))
}

/// Writes `table` to `path` through a sibling `.partial` file.
///
/// The final path is replaced only after every record is synced to disk; on
/// failure the partial file is removed and any existing table is untouched.
pub fn write_file(path: &Path, table: &StateTable) -> Result<()> {
    let partial = partial_path(path);
    let written = write_synced(&partial, table);
    if let Err(e) = written {
        let _ = fs::remove_file(&partial);
        return Err(e);
    }
    fs::rename(&partial, path)?;
    debug!("Moved {} into place", partial.display());
    Ok(())
}

fn write_synced(path: &Path, table: &StateTable) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_table(&mut writer, table)?;
    let file = writer.into_inner().map_err(|e| e.into_error())?;
    file.sync_all()?;
    Ok(())
}

/// The temporary file a table is written to before it replaces `path`.
pub fn partial_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".partial");
    PathBuf::from(name)
}
