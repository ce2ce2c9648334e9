use std::path::PathBuf;

use clap::Parser;

/// Convert a tree of documentation HTML pages into Markdown.
///
/// With no arguments, expects `Manual/` and/or `ScriptReference/` in the
/// current directory and mirrors them into `output-manual/` and
/// `output-script/`. With an input path, converts that single file.
#[derive(Debug, Parser)]
#[command(name = "docmill", version, about)]
pub struct Cli {
    /// Single HTML file to convert (omit to batch-convert doc trees).
    pub input: Option<PathBuf>,

    /// Output Markdown path for single-file mode (default: input with .md).
    pub output: Option<PathBuf>,

    /// Number of worker threads (default: detected core count).
    #[arg(long)]
    pub threads: Option<usize>,

    /// Skip the confirmation prompt in batch mode.
    #[arg(short = 'y', long)]
    pub yes: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_single_file_arguments() {
        let cli = Cli::parse_from(["docmill", "in.html", "out.md"]);
        assert_eq!(cli.input.as_deref(), Some(std::path::Path::new("in.html")));
        assert_eq!(cli.output.as_deref(), Some(std::path::Path::new("out.md")));
        assert!(!cli.yes);
    }

    #[test]
    fn parses_batch_flags() {
        let cli = Cli::parse_from(["docmill", "--threads", "4", "-y"]);
        assert!(cli.input.is_none());
        assert_eq!(cli.threads, Some(4));
        assert!(cli.yes);
    }
}
