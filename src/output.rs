//! Plain-text output: one identifier per line.

use std::fs::{self, File};
use std::io::{self, BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use crate::{Identifiers, Sex, SexFilter, Year, YearRange};

/// Directory the batch command writes into when none is given.
pub const DEFAULT_BATCH_DIR: &str = "generated_pesels";

const BYTES_PER_GIB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Progress bar over birth days processed. Hidden unless `visible`.
pub fn day_progress(days: u64, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(days);
    let style = ProgressStyle::with_template("Progress: [{bar:50}] {percent}% ({pos}/{len} days) {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=>-");
    bar.set_style(style);
    bar
}

/// Writes identifiers one per line, stopping after `limit` if given.
/// Advances `progress` once per birth date completed. Returns the number of
/// lines written.
///
/// # Errors
/// Propagates any write failure from `writer`.
pub fn write_identifiers<W: Write>(
    identifiers: Identifiers,
    writer: W,
    limit: Option<u64>,
    progress: &ProgressBar,
) -> io::Result<u64> {
    let mut writer = BufWriter::new(writer);
    let mut written = 0u64;
    let mut current_day = identifiers.current_date();

    for id in identifiers.take(limit.map_or(usize::MAX, |n| usize::try_from(n).unwrap_or(usize::MAX))) {
        if Some(id.birth_date()) != current_day {
            progress.inc(1);
            current_day = Some(id.birth_date());
        }
        writeln!(writer, "{id}")?;
        written += 1;
    }

    writer.flush()?;
    progress.inc(1);
    progress.finish();
    debug!(written, "identifiers written");
    Ok(written)
}

/// Asks on `prompt` whether `path` may be overwritten and reads the answer
/// from `input`. Only `y`/`Y` counts as consent.
///
/// # Errors
/// Propagates I/O failures on either stream.
pub fn confirm_overwrite<R: BufRead, W: Write>(path: &Path, mut input: R, mut prompt: W) -> io::Result<bool> {
    write!(prompt, "File {} already exists. Overwrite? [y/N] ", path.display())?;
    prompt.flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}

/// Path of the batch file for one year and sex, e.g. `1990_male.txt`.
pub fn batch_file_path(dir: &Path, year: Year, sex: Sex) -> PathBuf {
    dir.join(format!("{year}_{sex}.txt"))
}

/// What a batch run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub files_generated: usize,
    pub files_skipped:   usize,
    pub total_bytes:     u64,
}

impl BatchSummary {
    #[allow(clippy::cast_precision_loss)]
    pub fn total_gib(&self) -> f64 {
        self.total_bytes as f64 / BYTES_PER_GIB
    }
}

/// Writes one file per year and sex under `dir`, skipping files that already
/// exist.
///
/// # Errors
/// Returns an error if `dir` cannot be created or a file cannot be written.
pub fn write_batch(range: YearRange, dir: &Path, show_progress: bool) -> io::Result<BatchSummary> {
    fs::create_dir_all(dir)?;
    info!(dir = %dir.display(), "storing generated files");

    let mut summary = BatchSummary::default();
    for year in range.years() {
        let year_range = YearRange::new(year.get(), year.get()).map_err(io::Error::other)?;
        for sex in [Sex::Male, Sex::Female] {
            let path = batch_file_path(dir, year, sex);
            if path.exists() {
                info!(path = %path.display(), "file already exists, skipping");
                summary.files_skipped += 1;
                continue;
            }

            info!(%year, %sex, "generating identifiers");
            let identifiers = Identifiers::new(year_range, SexFilter::from(sex));
            let progress = day_progress(year_range.day_count(), show_progress);
            write_identifiers(identifiers, File::create(&path)?, None, &progress)?;

            let size = fs::metadata(&path)?.len();
            summary.files_generated += 1;
            summary.total_bytes += size;
            #[allow(clippy::cast_precision_loss)]
            let mib = size as f64 / (1024.0 * 1024.0);
            info!(path = %path.display(), "generated ({mib:.1} MB)");
        }
    }
    Ok(summary)
}
