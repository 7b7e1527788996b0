use std::fs;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use harvest_cli::pipeline::{classify_source, load_table, normalize_file};
use harvest_map::default_classifier;
use harvest_transform::normalize_period;

use crate::cli::{ClassifyArgs, NormalizeArgs, OutputFormatArg, PeriodArgs};
use crate::summary::{print_classifications, print_normalization, print_period, print_roles};

pub fn run_classify(args: &ClassifyArgs) -> Result<()> {
    let span = info_span!("classify", file = %args.file.display());
    let _guard = span.enter();

    let table = load_table(&args.file)?;
    let classifications = classify_source(&table, args.samples);
    match args.format {
        OutputFormatArg::Table => {
            print_classifications(&args.file.display().to_string(), &classifications);
        }
        OutputFormatArg::Json => {
            let json = serde_json::to_string_pretty(&classifications)
                .context("serialize classifications")?;
            println!("{json}");
        }
    }
    Ok(())
}

/// Returns true when at least one row needs review.
pub fn run_normalize(args: &NormalizeArgs) -> Result<bool> {
    let span = info_span!("normalize", file = %args.file.display());
    let _guard = span.enter();

    let outcome = normalize_file(&args.file, args.samples, &args.map)?;

    if let Some(path) = &args.output {
        let json = serde_json::to_string_pretty(&outcome).context("serialize result")?;
        fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
        info!(path = %path.display(), "wrote result");
    }
    match args.format {
        OutputFormatArg::Table => print_normalization(&outcome),
        OutputFormatArg::Json => {
            let json = serde_json::to_string_pretty(&outcome.records)
                .context("serialize records")?;
            println!("{json}");
        }
    }
    Ok(outcome.records.has_reviews())
}

pub fn run_period(args: &PeriodArgs) -> Result<()> {
    let period = normalize_period(
        Some(args.text.as_str()),
        args.start.as_deref(),
        args.end.as_deref(),
    );
    match args.format {
        OutputFormatArg::Table => print_period(&args.text, &period),
        OutputFormatArg::Json => {
            let json = serde_json::to_string_pretty(&period).context("serialize period")?;
            println!("{json}");
        }
    }
    Ok(())
}

pub fn run_roles() -> Result<()> {
    print_roles(&default_classifier().config().keywords);
    Ok(())
}
