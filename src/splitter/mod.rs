//! Splitting oversized archive files into smaller chunk files.
//!
//! # Error Handling Strategy
//!
//! Unlike a long-running service, the splitter is a one-shot maintenance run:
//!
//! - **Fail fast**: the first unreadable file, parse failure or `messageCount` mismatch aborts
//!   the whole run. A count mismatch means the export is corrupt or not what we expect, and
//!   splitting it would silently produce wrong chunks.
//!
//! - **No cleanup on failure**: chunk files already written stay in the output directory. The
//!   next run recreates the directory from scratch, so re-running after fixing the input is
//!   always safe.
//!
//! - **Context everywhere**: every I/O and parse error carries the offending path.

pub mod plan;

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{debug, info};

pub use plan::ChunkPlan;

use crate::models::Archive;
use crate::naming::chunk_file_name;
use crate::utils::{file_name_string, list_archive_files, progress_bar};

/// Files larger than this many bytes are split
pub const SPLIT_THRESHOLD_BYTES: u64 = 20_000_000;

/// Nominal size of one chunk, used only to estimate the chunk count
pub const TARGET_CHUNK_BYTES: u64 = 10_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitOptions {
    pub threshold_bytes: u64,
    pub target_chunk_bytes: u64,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self { threshold_bytes: SPLIT_THRESHOLD_BYTES, target_chunk_bytes: TARGET_CHUNK_BYTES }
    }
}

/// Counts reported at the end of a split run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitSummary {
    pub files_scanned: usize,
    pub files_split: usize,
    pub files_skipped: usize,
    pub chunks_written: usize,
}

/// Split every oversized archive in `source_dir` into `output_dir`
///
/// `output_dir` is deleted (with everything in it) and recreated empty before any file is read.
/// Files at or below `options.threshold_bytes` produce no output at all.
///
/// # Errors
///
/// Returns an error, leaving whatever chunks were already written in place, if:
/// - The output directory is the source directory or contains it (nothing is deleted)
/// - The output directory cannot be removed or created
/// - The source directory cannot be listed
/// - Any oversized file cannot be read or parsed, or its `messageCount` is wrong
/// - Any chunk file cannot be written
pub fn split_directory(
    source_dir: &Path,
    output_dir: &Path,
    options: &SplitOptions,
) -> Result<SplitSummary> {
    ensure_output_outside_source(source_dir, output_dir)?;
    recreate_dir(output_dir)?;

    let files = list_archive_files(source_dir)?;
    let mut summary = SplitSummary { files_scanned: files.len(), ..Default::default() };

    let pb = progress_bar(files.len());
    for path in &files {
        let size = fs::metadata(path)
            .with_context(|| format!("Failed to read file metadata: {}", path.display()))?
            .len();

        if size <= options.threshold_bytes {
            debug!(path = %path.display(), size, "below threshold, skipping");
            summary.files_skipped += 1;
            pb.inc(1);
            continue;
        }

        info!(path = %path.display(), size, "splitting archive");
        let written = split_archive(path, size, output_dir, options)?;
        summary.files_split += 1;
        summary.chunks_written += written.len();
        pb.inc(1);
    }
    pb.finish_and_clear();

    info!(
        scanned = summary.files_scanned,
        split = summary.files_split,
        skipped = summary.files_skipped,
        chunks = summary.chunks_written,
        "split finished"
    );

    Ok(summary)
}

/// Split one archive of `file_size` bytes into chunk files under `output_dir`
///
/// Returns the written paths in chunk order. The first chunk keeps the input's file name.
pub fn split_archive(
    path: &Path,
    file_size: u64,
    output_dir: &Path,
    options: &SplitOptions,
) -> Result<Vec<PathBuf>> {
    let archive = read_archive(path)?;

    if !archive.count_matches() {
        bail!(
            "messageCount mismatch in {}: declared {}, found {} messages",
            path.display(),
            archive.message_count.map_or_else(|| "nothing".to_string(), |c| c.to_string()),
            archive.messages.len()
        );
    }

    let file_name = file_name_string(path)?;
    let plan = ChunkPlan::new(file_size, archive.messages.len(), options.target_chunk_bytes);
    debug!(chunks = plan.chunks, per_chunk = plan.per_chunk, "chunk plan");

    let mut written = Vec::new();
    for (i, range) in plan.ranges().enumerate() {
        let chunk = archive.chunk(&archive.messages[range]);
        let out_path = output_dir.join(chunk_file_name(&file_name, i + 1));
        info!(" -> {}", out_path.display());
        write_archive(&out_path, &chunk)?;
        written.push(out_path);
    }

    Ok(written)
}

fn read_archive(path: &Path) -> Result<Archive> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open archive file: {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse archive file: {}", path.display()))
}

/// Write pretty-printed (2-space) JSON
fn write_archive(path: &Path, archive: &Archive) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create chunk file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, archive)
        .with_context(|| format!("Failed to write chunk file: {}", path.display()))?;
    writer.flush().with_context(|| format!("Failed to flush chunk file: {}", path.display()))
}

/// Refuse an output directory that would take the source archives down with it
fn ensure_output_outside_source(source_dir: &Path, output_dir: &Path) -> Result<()> {
    // A missing output directory cannot contain an existing source
    if !output_dir.exists() {
        return Ok(());
    }

    let source = source_dir
        .canonicalize()
        .with_context(|| format!("Failed to resolve source directory: {}", source_dir.display()))?;
    let output = output_dir
        .canonicalize()
        .with_context(|| format!("Failed to resolve output directory: {}", output_dir.display()))?;

    if source.starts_with(&output) {
        bail!(
            "Output directory {} is or contains the source directory {}",
            output_dir.display(),
            source_dir.display()
        );
    }

    Ok(())
}

fn recreate_dir(dir: &Path) -> Result<()> {
    match fs::remove_dir_all(dir) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => {
            return Err(e)
                .with_context(|| format!("Failed to remove output directory: {}", dir.display()));
        }
    }
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))
}
