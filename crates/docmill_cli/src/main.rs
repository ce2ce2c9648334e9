mod cli;

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{bail, Context};
use clap::Parser;
use docmill_engine::{default_worker_count, sibling_markdown_path, BatchRunner, FileConverter};
use docmill_logging::{initialize, LogDestination};

use cli::Cli;

/// Input trees looked for in batch mode, paired with their output roots.
const DOC_TREES: &[(&str, &str)] = &[
    ("Manual", "output-manual"),
    ("ScriptReference", "output-script"),
];

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    initialize(LogDestination::Terminal);

    match args.input {
        Some(input) => convert_single(&input, args.output.as_deref()),
        None => convert_doc_trees(args.threads, args.yes),
    }
}

fn convert_single(input: &Path, output: Option<&Path>) -> anyhow::Result<()> {
    if !input.exists() {
        bail!("input file {} does not exist", input.display());
    }
    let output = match output {
        Some(path) => path.to_path_buf(),
        None => sibling_markdown_path(input),
    };

    let converter = FileConverter::new();
    let outcome = converter
        .convert_to(input, &output)
        .with_context(|| format!("converting {}", input.display()))?;
    println!(
        "Converted {} -> {}",
        outcome.input.display(),
        outcome.output.display()
    );
    Ok(())
}

fn convert_doc_trees(threads: Option<usize>, assume_yes: bool) -> anyhow::Result<()> {
    let plan: Vec<(&str, &str)> = DOC_TREES
        .iter()
        .copied()
        .filter(|(src, _)| Path::new(src).is_dir())
        .collect();
    if plan.is_empty() {
        bail!(
            "no 'Manual' or 'ScriptReference' directory found in the current directory; \
             place one or both here and run again"
        );
    }

    println!("The following directories will be converted:");
    for (src, dst) in &plan {
        println!("  - {src} -> {dst}");
    }

    if !assume_yes && !confirm("\nStart conversion? (y/n): ")? {
        println!("Conversion cancelled");
        return Ok(());
    }

    let workers = threads.unwrap_or_else(default_worker_count);
    println!("Using {workers} worker threads");

    let runner = BatchRunner::new(workers);
    for (src, dst) in plan {
        println!("\nConverting {src} to {dst}...");
        let handle = runner.convert_tree(Path::new(src), Path::new(dst))?;
        println!("Found {} HTML files", handle.total());

        let mut converted = 0usize;
        let mut failed = 0usize;
        for report in handle.reports() {
            match report.result {
                Ok(outcome) => {
                    converted += 1;
                    println!(
                        "Converted {} -> {}",
                        outcome.input.display(),
                        outcome.output.display()
                    );
                }
                Err(err) => {
                    failed += 1;
                    log::warn!("failed to convert {}: {}", report.input.display(), err);
                    eprintln!("Failed {}: {}", report.input.display(), err);
                }
            }
        }
        println!("Finished {src}: {converted} converted, {failed} failed");
    }

    println!("\nAll conversions complete");
    Ok(())
}

fn confirm(prompt: &str) -> anyhow::Result<bool> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let answer = line.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}
