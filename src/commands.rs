//! Command implementations for the CLI.

use std::fs::File;
use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use pesel_gen::output::{confirm_overwrite, day_progress, write_batch, write_identifiers};
use pesel_gen::{YearRange, decode, generate_str};
use tracing::info;

use crate::cli::{BatchArgs, CheckArgs, GenerateArgs};

pub fn run_generate(args: &GenerateArgs) -> Result<()> {
    // Validate everything before touching any output.
    let identifiers = generate_str(args.start_year, args.end_year, args.sex.as_deref())?;
    let range = identifiers.range();
    info!(
        "Generating PESEL numbers for years {}-{}",
        range.start(),
        range.end()
    );
    if args.sex.is_some() {
        info!("Generating only {} PESELs", identifiers.sex_filter());
    }

    let Some(path) = &args.output else {
        let stdout = io::stdout().lock();
        let written = match write_identifiers(identifiers, stdout, args.limit, &day_progress(0, false)) {
            Ok(n) => n,
            // Downstream closed the pipe (e.g. `| head`); stop quietly.
            Err(err) if err.kind() == io::ErrorKind::BrokenPipe => return Ok(()),
            Err(err) => return Err(err).context("failed to write to stdout"),
        };
        eprintln!("\nGenerated {written} PESEL numbers");
        return Ok(());
    };

    if path.exists() && !args.force {
        let confirmed = confirm_overwrite(path, io::stdin().lock(), io::stderr())
            .context("failed to read overwrite confirmation")?;
        if !confirmed {
            eprintln!("Operation cancelled.");
            return Ok(());
        }
    }

    let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let progress = day_progress(range.day_count(), !args.no_progress && io::stderr().is_terminal());
    let written = write_identifiers(identifiers, file, args.limit, &progress)
        .with_context(|| format!("failed to write {}", path.display()))?;
    eprintln!("Generated {written} PESEL numbers and saved to {}", path.display());
    Ok(())
}

pub fn run_batch(args: &BatchArgs) -> Result<()> {
    let range = YearRange::new(args.start_year, args.end_year)?;
    let show_progress = !args.no_progress && io::stderr().is_terminal();
    let summary = write_batch(range, &args.output_dir, show_progress)
        .with_context(|| format!("batch generation into {} failed", args.output_dir.display()))?;

    println!("\nGeneration complete!");
    println!("Total files generated: {}", summary.files_generated);
    println!("Total size: {:.1} GB", summary.total_gib());
    Ok(())
}

pub fn run_check(args: &CheckArgs) -> Result<()> {
    for raw in &args.identifiers {
        let id = decode(raw.trim()).with_context(|| format!("{raw} is not a valid PESEL number"))?;
        println!(
            "{id}  {}  serial={}  {}",
            id.birth_date(),
            id.serial(),
            id.sex()
        );
    }
    Ok(())
}
