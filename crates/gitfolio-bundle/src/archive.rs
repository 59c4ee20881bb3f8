//! In-memory ZIP assembly

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use gitfolio_core::config::consts;

use crate::error::BundleError;

/// Compresses the resolved entries into a single in-memory ZIP archive
///
/// Entries are written in the order given; every path appears exactly once
/// by construction of the resolution step.
///
/// # Errors
///
/// Returns `BundleError::Assembly` on packing failure.
pub fn assemble_archive(entries: &[(String, Vec<u8>)]) -> Result<Vec<u8>, BundleError> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(consts::bundle::COMPRESSION_LEVEL));

    for (path, bytes) in entries {
        writer.start_file(path.as_str(), options)?;
        writer.write_all(bytes)?;
    }

    let cursor = writer.finish()?;
    Ok(cursor.into_inner())
}
