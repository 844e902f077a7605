//! Archive filename convention
//!
//! Every archive file is named `<guild> - <category> - <channel> [<channel_id>]`, optionally
//! followed by ` [part <n>]`, with a `.json` extension. The export tool produces these names and
//! downstream consumers read the fields back out of them, so the pattern is matched exactly:
//! a stem that does not fully match is rejected rather than guessed at.

use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result, bail};
use regex::Regex;

static STEM_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.*) - (.*) - (.*) \[(\d+)\]( \[part (\d+)\])?$")
        .expect("archive stem pattern is valid")
});

/// Fields recovered from an archive file stem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveName {
    pub guild: String,
    pub category: String,
    pub channel: String,
    /// Digits exactly as they appear in the name
    pub channel_id: String,
    /// 1-based; 1 when the name has no part suffix
    pub part: u32,
}

impl ArchiveName {
    /// Parse a file stem (name without `.json`)
    ///
    /// # Errors
    ///
    /// Returns `Invalid filename: <stem>` if the stem does not fully match the convention, or if
    /// the part number does not fit in a `u32`.
    ///
    /// # Examples
    ///
    /// ```
    /// use archive_tools::ArchiveName;
    ///
    /// let name = ArchiveName::parse("Guild - Cat - Channel [12345] [part 2]")?;
    /// assert_eq!(name.channel_id, "12345");
    /// assert_eq!(name.part, 2);
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn parse(stem: &str) -> Result<Self> {
        let Some(caps) = STEM_PATTERN.captures(stem) else {
            bail!("Invalid filename: {}", stem);
        };

        let part = match caps.get(6) {
            Some(m) => m
                .as_str()
                .parse::<u32>()
                .with_context(|| format!("Invalid part number in filename: {}", stem))?,
            None => 1,
        };

        Ok(Self {
            guild: caps[1].to_string(),
            category: caps[2].to_string(),
            channel: caps[3].to_string(),
            channel_id: caps[4].to_string(),
            part,
        })
    }

    /// Parse the stem of an archive path
    pub fn from_path(path: &Path) -> Result<Self> {
        let stem = path
            .file_stem()
            .with_context(|| format!("Archive path has no file name: {}", path.display()))?;
        Self::parse(&stem.to_string_lossy())
    }
}

/// Output file name for the `index`-th (1-based) chunk of `file_name`
///
/// The first chunk keeps the original name; later chunks get ` [part <index>]` before `.json`.
pub fn chunk_file_name(file_name: &str, index: usize) -> String {
    if index <= 1 {
        return file_name.to_string();
    }
    let stem = Path::new(file_name)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_name.to_string());
    format!("{} [part {}].json", stem, index)
}
