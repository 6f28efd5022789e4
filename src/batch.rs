use crate::constants::DS_STORE;
use crate::error::Result;
use crate::processing::{compress_image, ShrinkOptions};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::Path;

/// Compresses every file in `source_dir` into `destination_dir`.
///
/// Entries are visited in whatever order the filesystem yields them; the
/// only name treated specially is the macOS `.DS_Store` artifact, which is
/// skipped. Each entry runs through the single-image compressor with the
/// destination set, so a fatal save error aborts the remaining batch while
/// already-written files stay in place. When either directory is absent the
/// run degrades to a console message and no work.
pub fn batch_compress(
    source_dir: Option<&Path>,
    destination_dir: Option<&Path>,
    options: &ShrinkOptions,
) -> Result<()> {
    let (source, destination) = match (source_dir, destination_dir) {
        (Some(source), Some(destination)) if source.is_dir() && destination.is_dir() => {
            (source, destination)
        }
        _ => {
            crate::error!("batch compress requires source and destination folder");
            return Ok(());
        }
    };

    crate::info!("🚀 Starting batch compression...");
    crate::info!("📁 Source: {}", source.display());
    crate::info!("📁 Destination: {}", destination.display());

    let entries = fs::read_dir(source)?.collect::<std::io::Result<Vec<_>>>()?;

    let progress = ProgressBar::new(entries.len() as u64);
    progress.set_style(ProgressStyle::default_bar());

    for entry in entries {
        if entry.file_name().to_str() == Some(DS_STORE) {
            crate::verbose!("Skipping {}", DS_STORE);
            progress.inc(1);
            continue;
        }

        compress_image(&entry.path(), options, Some(destination))?;
        progress.inc(1);
    }

    progress.finish_and_clear();

    // Proxy for the success tally: assumes the destination started out empty.
    let compressed = fs::read_dir(destination)?.count();
    crate::info!("✅ {} images compressed successfully", compressed);

    Ok(())
}
