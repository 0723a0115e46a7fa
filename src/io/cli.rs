//! Command-line interface for batch processing frequency lists into clouds

use crate::io::configuration::{
    DEFAULT_SEED, GRID_COLUMNS, GRID_ROWS, MAX_DISPLAYED_WORDS, MAX_PLACEMENT_ATTEMPTS,
    OUTPUT_SUFFIX,
};
use crate::io::error::Result;
use crate::io::frequency::load_frequency_list;
use crate::io::html::write_html;
use crate::io::image::export_layout_as_png;
use crate::io::progress::ProgressManager;
use crate::layout::engine::{LayoutConfig, LayoutEngine};
use crate::summary::report::LayoutSummary;
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

/// Output formats the processor can emit per input file
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Self-contained HTML page with the CSS-grid cloud
    Html,
    /// PNG schematic preview of the placement
    Png,
    /// Both HTML and PNG outputs
    Both,
}

impl OutputFormat {
    /// Whether HTML output is requested
    pub const fn wants_html(self) -> bool {
        matches!(self, Self::Html | Self::Both)
    }

    /// Whether PNG output is requested
    pub const fn wants_png(self) -> bool {
        matches!(self, Self::Png | Self::Both)
    }
}

#[derive(Parser)]
#[command(name = "wordgrid")]
#[command(
    author,
    version,
    about = "Render word cloud layouts from ranked frequency lists"
)]
/// Command-line arguments for the layout tool
pub struct Cli {
    /// Input frequency list (.txt/.tsv) or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Random seed for reproducible layouts
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Maximum number of words to place
    #[arg(short, long, default_value_t = MAX_DISPLAYED_WORDS)]
    pub words: usize,

    /// Number of grid columns
    #[arg(long, default_value_t = GRID_COLUMNS)]
    pub cols: usize,

    /// Number of grid rows
    #[arg(long, default_value_t = GRID_ROWS)]
    pub rows: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Html)]
    pub format: OutputFormat,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Layout configuration derived from the arguments
    pub const fn layout_config(&self) -> LayoutConfig {
        LayoutConfig {
            grid_columns: self.cols,
            grid_rows: self.rows,
            max_words: self.words,
            max_attempts: MAX_PLACEMENT_ATTEMPTS,
            seed: self.seed,
        }
    }
}

/// Orchestrates batch processing of frequency lists with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, layout configuration, or
    /// file processing fails
    pub fn process(&mut self) -> Result<()> {
        // Surface configuration errors before touching any files
        self.cli.layout_config().validate()?;

        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for file in &files {
            self.process_file(file)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if Self::is_frequency_list(&self.cli.target) {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(crate::io::error::io_error(
                    "Target file must be a .txt or .tsv frequency list",
                ))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if Self::is_frequency_list(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(crate::io::error::io_error(
                "Target must be a frequency list file or directory",
            ))
        }
    }

    fn is_frequency_list(path: &Path) -> bool {
        matches!(
            path.extension().and_then(|s| s.to_str()),
            Some("txt" | "tsv")
        )
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let html_exists = self.cli.format.wants_html()
            && Self::get_output_path(input_path, "html").exists();
        let png_exists =
            self.cli.format.wants_png() && Self::get_output_path(input_path, "png").exists();

        if html_exists || png_exists {
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path) -> Result<()> {
        if let Some(ref pm) = self.progress_manager {
            pm.start_file(input_path);
        }

        let entries = load_frequency_list(input_path)?;

        // A fresh engine per file keeps outputs independent of batch order
        let mut engine = LayoutEngine::new(self.cli.layout_config())?;
        let result = engine.layout(&entries);
        let summary = LayoutSummary::from_result(&result);

        if self.cli.format.wants_html() {
            let output_path = Self::get_output_path(input_path, "html");
            write_html(
                &result,
                &summary,
                self.cli.cols,
                self.cli.rows,
                &output_path,
            )?;
        }

        if self.cli.format.wants_png() {
            let output_path = Self::get_output_path(input_path, "png");
            export_layout_as_png(&result, self.cli.cols, self.cli.rows, &output_path)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.complete_file();
        }

        Ok(())
    }

    fn get_output_path(input_path: &Path, extension: &str) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!("{}{}.{}", stem.to_string_lossy(), OUTPUT_SUFFIX, extension);

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}
