mod logger;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use logger::StderrLogger;
use pdf_grid::{GridOptions, ImageSource};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pdfgrid", about = "Lay out a directory of images on a printable PDF grid", version)]
struct Cli {
    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the grid PDF
    Generate {
        #[command(flatten)]
        grid: GridArgs,

        /// Output PDF file
        #[arg(short, long)]
        output: PathBuf,

        /// Write the resolved options to a JSON file
        #[arg(long)]
        save_config: Option<PathBuf>,

        /// Show statistics only, don't generate PDF
        #[arg(long)]
        stats_only: bool,
    },

    /// Print the computed placements as JSON
    Plan {
        #[command(flatten)]
        grid: GridArgs,
    },

    /// Write random transparent sample images to a directory
    Samples {
        /// Output directory
        #[arg(short, long, default_value = "input_images")]
        output: PathBuf,

        /// Number of images
        #[arg(short = 'n', long, default_value_t = 50)]
        count: usize,

        /// Minimum width in pixels
        #[arg(long, default_value_t = 200)]
        min_w: u32,

        /// Maximum width in pixels
        #[arg(long, default_value_t = 800)]
        max_w: u32,

        /// Minimum height in pixels
        #[arg(long, default_value_t = 200)]
        min_h: u32,

        /// Maximum height in pixels
        #[arg(long, default_value_t = 1000)]
        max_h: u32,

        /// Seed for reproducible images
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Options shared by every subcommand. Flags override values from `--config`.
#[derive(Args)]
struct GridArgs {
    /// Directory of PNG/JPEG images
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// JSON options file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output paper size
    #[arg(long, value_enum)]
    paper: Option<PaperArg>,

    /// Output orientation
    #[arg(long, value_enum)]
    orientation: Option<OrientationArg>,

    /// Columns per page
    #[arg(long)]
    columns: Option<usize>,

    /// Rows per page
    #[arg(long)]
    rows: Option<usize>,

    /// Gap between cells and around the page edge, in points
    #[arg(long)]
    margin: Option<f64>,

    /// Keep transparent borders instead of trimming them
    #[arg(long)]
    no_trim: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    A3,
    A4,
    A5,
    Letter,
    Legal,
    Tabloid,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Portrait,
    Landscape,
}

impl From<PaperArg> for pdf_grid::PaperSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::A3 => Self::A3,
            PaperArg::A4 => Self::A4,
            PaperArg::A5 => Self::A5,
            PaperArg::Letter => Self::Letter,
            PaperArg::Legal => Self::Legal,
            PaperArg::Tabloid => Self::Tabloid,
        }
    }
}

impl From<OrientationArg> for pdf_grid::Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Self::Portrait,
            OrientationArg::Landscape => Self::Landscape,
        }
    }
}

impl GridArgs {
    /// Start from the config file (or defaults) and apply command-line overrides
    async fn resolve(self) -> Result<GridOptions> {
        let mut options = match &self.config {
            Some(path) => GridOptions::load(path)
                .await
                .with_context(|| format!("loading config {}", path.display()))?,
            None => GridOptions::default(),
        };

        if let Some(input) = self.input {
            options.input_dir = input;
        }
        if let Some(paper) = self.paper {
            options.paper_size = paper.into();
        }
        if let Some(orientation) = self.orientation {
            options.orientation = orientation.into();
        }
        if let Some(columns) = self.columns {
            options.columns = columns;
        }
        if let Some(rows) = self.rows {
            options.rows = rows;
        }
        if let Some(margin) = self.margin {
            options.margin_pt = margin;
        }
        if self.no_trim {
            options.trim_transparent = false;
        }

        options.validate()?;
        Ok(options)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    StderrLogger::new(level).init()?;

    match cli.command {
        Commands::Generate {
            grid,
            output,
            save_config,
            stats_only,
        } => {
            let options = grid.resolve().await?;
            if let Some(path) = save_config {
                options.save(&path).await?;
                log::info!("Saved options → {}", path.display());
            }

            let geometry = options.page_geometry()?;
            let library =
                pdf_grid::load_image_dir(&options.input_dir, options.trim_transparent).await?;

            // Calculate and show statistics
            let stats = pdf_grid::calculate_statistics(library.len(), &geometry);
            println!("Grid Statistics:");
            println!("  Images: {}", stats.images);
            println!("  Cells per page: {}", stats.slots_per_page);
            println!(
                "  Cell size: {:.2} x {:.2} pt",
                geometry.cell_width(),
                geometry.cell_height()
            );
            println!("  Pages: {}", stats.pages);
            println!("  Empty cells on last page: {}", stats.empty_slots);

            if stats_only {
                return Ok(());
            }

            if library.is_empty() {
                log::warn!(
                    "No images found in {}, nothing written",
                    options.input_dir.display()
                );
                return Ok(());
            }

            let doc = pdf_grid::generate_pdf(library, &geometry).await?;
            pdf_grid::save_pdf(doc, &output).await?;
            println!("Generated {} page(s) → {}", stats.pages, output.display());
        }

        Commands::Plan { grid } => {
            let options = grid.resolve().await?;
            let geometry = options.page_geometry()?;
            let library =
                pdf_grid::load_image_dir(&options.input_dir, options.trim_transparent).await?;

            let placements = pdf_grid::layout(&library.descriptors(), &geometry)?;
            println!("{}", serde_json::to_string_pretty(&placements)?);
        }

        Commands::Samples {
            output,
            count,
            min_w,
            max_w,
            min_h,
            max_h,
            seed,
        } => {
            let options = pdf_grid::SampleOptions {
                count,
                min_width: min_w,
                max_width: max_w,
                min_height: min_h,
                max_height: max_h,
                seed,
            };
            let paths = pdf_grid::generate_samples(&output, &options).await?;
            println!("Generated {} image(s) in {}", paths.len(), output.display());
        }
    }

    Ok(())
}
