//! Line-per-entry JSON export.
//!
//! The output layout is a byte-level contract with downstream readers:
//! `{` on its own line, one compact record per entry line with a
//! two-space indent, commas on every entry but the last, `}` on its own
//! line. A generic pretty-printer produces equivalent JSON but not this
//! layout, so emission is line-by-line; serde_json still renders every
//! key and record so escaping stays correct.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::record::Pokedex;

pub type Result<T> = std::result::Result<T, ExportError>;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write output file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to render record: {0}")]
    Render(#[from] serde_json::Error),
}

/// Write the collection to `path`, replacing any existing file.
pub fn write_json(pokedex: &Pokedex, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    render(pokedex, &mut writer)?;
    writer.flush()?;
    Ok(())
}

fn render<W: Write>(pokedex: &Pokedex, writer: &mut W) -> Result<()> {
    writeln!(writer, "{{")?;
    let last = pokedex.len().saturating_sub(1);
    for (i, (name, record)) in pokedex.iter().enumerate() {
        let key = serde_json::to_string(name)?;
        let body = serde_json::to_string(record)?;
        let comma = if i < last { "," } else { "" };
        writeln!(writer, "  {key}: {body}{comma}")?;
    }
    writeln!(writer, "}}")?;
    Ok(())
}
