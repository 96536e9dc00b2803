use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;

use crate::car::Car;
use crate::error::SeedError;

/// Serialize the fleet as a pretty-printed JSON array (2-space indentation)
/// to `path`, overwriting any existing file.
///
/// # Errors
/// Errors when the file cannot be created or written, or when serialization
/// fails. There is no retry and no partial-write recovery.
pub fn write_fleet<P: AsRef<Path>>(fleet: &[Car], path: P) -> Result<(), SeedError> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, fleet)?;
    writer.flush()?;

    info!("wrote {} car records to {}", fleet.len(), path.display());
    Ok(())
}
