use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use sheet_layout::layout::page_relative_y;
use sheet_layout::{Canvas, LayoutConfig, PageSize};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "sheet", about = "Cheat-sheet card layout CLI", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the card size for a title and body
    Size {
        #[arg(short, long, default_value = "")]
        title: String,

        #[arg(short, long, default_value = "")]
        body: String,

        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Lay out cards from CSV onto a canvas
    Pack {
        /// Input CSV file (columns: title, body, optional color)
        #[arg(short, long)]
        input: PathBuf,

        /// Output canvas JSON file
        #[arg(short, long)]
        output: PathBuf,

        /// Repack from scratch after inserting
        #[arg(long)]
        relayout: bool,

        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Repack every card of a saved canvas
    Relayout {
        /// Input canvas JSON file
        #[arg(short, long)]
        input: PathBuf,

        /// Output canvas JSON file (defaults to overwriting the input)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Show which cards land on which page
    Pages {
        /// Input canvas JSON file
        #[arg(short, long)]
        input: PathBuf,

        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Show layout statistics for a saved canvas
    Stats {
        /// Input canvas JSON file
        #[arg(short, long)]
        input: PathBuf,

        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Write a layout configuration file
    Config {
        /// Output JSON file
        #[arg(short, long)]
        output: PathBuf,

        #[command(flatten)]
        layout: LayoutArgs,
    },
}

#[derive(Args)]
struct LayoutArgs {
    /// Layout configuration JSON file (overrides --paper)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Page size preset
    #[arg(long, default_value = "letter", value_enum)]
    paper: PaperArg,

    /// Page margin in canvas units
    #[arg(long)]
    margin: Option<f32>,

    /// Gap between cards in canvas units
    #[arg(long)]
    spacing: Option<f32>,
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    Letter,
    A4,
    Legal,
}

impl From<PaperArg> for PageSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::Letter => Self::Letter,
            PaperArg::A4 => Self::A4,
            PaperArg::Legal => Self::Legal,
        }
    }
}

impl LayoutArgs {
    async fn resolve(&self) -> Result<LayoutConfig> {
        let mut config = match &self.config {
            Some(path) => LayoutConfig::load(path).await?,
            None => LayoutConfig::for_page(self.paper.into()),
        };
        if let Some(margin) = self.margin {
            config.margin = margin;
        }
        if let Some(spacing) = self.spacing {
            config.spacing = spacing;
        }
        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match cli.command {
        Commands::Size {
            title,
            body,
            layout,
        } => {
            let config = layout.resolve().await?;
            let size = sheet_layout::size_content(&title, &body, &config);
            println!("{} x {}", size.width, size.height);
        }

        Commands::Pack {
            input,
            output,
            relayout,
            layout,
        } => {
            let config = layout.resolve().await?;
            let mut canvas = sheet_cards::canvas_from_csv(&input, config).await?;
            if relayout {
                canvas.relayout();
            }
            canvas.save(&output).await?;
            println!(
                "Placed {} cards on {} pages → {}",
                canvas.len(),
                canvas.page_count(),
                output.display()
            );
        }

        Commands::Relayout {
            input,
            output,
            layout,
        } => {
            let mut canvas = load_canvas(&input, &layout).await?;
            let pages_before = canvas.page_count();
            canvas.relayout();

            let output = output.unwrap_or(input);
            canvas.save(&output).await?;
            println!(
                "Relaid {} cards: {} → {} pages → {}",
                canvas.len(),
                pages_before,
                canvas.page_count(),
                output.display()
            );
        }

        Commands::Pages { input, layout } => {
            let canvas = load_canvas(&input, &layout).await?;
            let pages = canvas.pages();
            println!("Pages: {}", pages.len());
            for (index, cards) in pages.iter().enumerate() {
                let placed: Vec<String> = cards
                    .iter()
                    .map(|card| {
                        let y = page_relative_y(card, index, canvas.config());
                        format!("{}@{}", card.id, y)
                    })
                    .collect();
                println!(
                    "  Page {}: {} cards [{}]",
                    index + 1,
                    cards.len(),
                    placed.join(", ")
                );
            }
        }

        Commands::Stats { input, layout } => {
            let canvas = load_canvas(&input, &layout).await?;
            let stats = canvas.statistics();
            println!("Layout Statistics:");
            println!("  Cards: {}", stats.cards);
            println!("  Pages: {}", stats.pages);
            println!("  Rows: {}", stats.rows);
            println!("  Content height: {}", stats.content_height);
            println!("  Fill ratio: {:.1}%", stats.fill_ratio * 100.0);
            if !stats.overlapping_pairs.is_empty() {
                println!("  Overlapping pairs: {}", stats.overlapping_pairs.len());
                for (a, b) in &stats.overlapping_pairs {
                    println!("    {} / {}", a, b);
                }
            }
        }

        Commands::Config { output, layout } => {
            let config = layout.resolve().await?;
            config.save(&output).await?;
            println!("Configuration saved → {}", output.display());
        }
    }

    Ok(())
}

async fn load_canvas(path: &Path, layout: &LayoutArgs) -> Result<Canvas> {
    let config = layout.resolve().await?;
    Ok(Canvas::load(path, config).await?)
}
