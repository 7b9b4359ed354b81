//! reportforge CLI - structured report generator

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;

use reportforge::{
    BackendRegistry, Outline, OutputFormat, RenderOptions, Reportforge, DEFAULT_OUTPUT_PATH,
};

#[derive(Parser)]
#[command(name = "reportforge")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Assemble structured reports into DOCX, Markdown, text, and JSON", long_about = None)]
struct Cli {
    #[command(flatten)]
    generate: GenerateArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args, Clone, Default)]
struct GenerateArgs {
    /// Output file
    #[arg(short, long, value_name = "FILE", env = "REPORTFORGE_OUTPUT")]
    output: Option<PathBuf>,

    /// Output format (inferred from the output extension if omitted)
    #[arg(short, long, value_enum)]
    format: Option<FormatArg>,

    /// Default font family
    #[arg(long, value_name = "NAME")]
    font: Option<String>,

    /// Default font size in points
    #[arg(long, value_name = "PT")]
    font_size: Option<f32>,

    /// Outline file (JSON); the built-in report if omitted
    #[arg(long, value_name = "FILE")]
    outline: Option<PathBuf>,

    /// Include YAML frontmatter in Markdown output
    #[arg(long)]
    frontmatter: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Assemble the outline and write the document (default)
    #[command(alias = "gen")]
    Generate(GenerateArgs),

    /// Print the outline as JSON
    Outline {
        /// Outline file to normalize; the built-in report if omitted
        #[arg(long, value_name = "FILE")]
        outline: Option<PathBuf>,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show document statistics without writing anything
    Info {
        /// Outline file; the built-in report if omitted
        #[arg(long, value_name = "FILE")]
        outline: Option<PathBuf>,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// List supported output formats
    Formats,

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
enum FormatArg {
    /// Word document
    Docx,
    /// Markdown
    #[value(alias = "md")]
    Markdown,
    /// Plain text
    #[value(alias = "txt")]
    Text,
    /// JSON document tree
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Docx => OutputFormat::Docx,
            FormatArg::Markdown => OutputFormat::Markdown,
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Generate(args)) => cmd_generate(&args),
        Some(Commands::Outline { outline, output }) => {
            cmd_outline(outline.as_deref(), output.as_deref())
        }
        Some(Commands::Info { outline, json }) => cmd_info(outline.as_deref(), json),
        Some(Commands::Formats) => {
            cmd_formats();
            Ok(())
        }
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => cmd_generate(&cli.generate),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn load_outline(path: Option<&Path>) -> reportforge::Result<Outline> {
    match path {
        Some(path) => {
            log::debug!("Loading outline from {}", path.display());
            Outline::from_file(path)
        }
        None => Ok(reportforge::capstone_report()),
    }
}

/// Destination for `generate`: the explicit output, or the default file
/// name with the extension of the requested format.
fn resolve_output(args: &GenerateArgs) -> PathBuf {
    match (&args.output, args.format) {
        (Some(path), _) => path.clone(),
        (None, Some(format)) => {
            PathBuf::from(DEFAULT_OUTPUT_PATH).with_extension(OutputFormat::from(format).extension())
        }
        (None, None) => PathBuf::from(DEFAULT_OUTPUT_PATH),
    }
}

fn cmd_generate(args: &GenerateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let outline = load_outline(args.outline.as_deref())?;
    let output = resolve_output(args);

    let mut forge = Reportforge::new().with_outline(outline);
    if let Some(ref font) = args.font {
        forge = forge.with_font(font.as_str());
    }
    if let Some(size) = args.font_size {
        forge = forge.with_font_size(size);
    }
    if let Some(format) = args.format {
        forge = forge.with_format(format.into());
    }
    if args.frontmatter {
        forge = forge.with_frontmatter();
    }

    log::info!("Generating {}", output.display());
    let assembled = forge.assemble()?;
    let blocks = assembled.document().block_count();
    let report = assembled.save(&output)?;

    println!(
        "{} {} ({}, {} blocks, {} bytes)",
        "Saved to".green(),
        report.path.display(),
        report.format,
        blocks,
        report.bytes
    );

    Ok(())
}

fn cmd_outline(
    outline: Option<&Path>,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let json = load_outline(outline)?.to_json()?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_info(outline: Option<&Path>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let outline = load_outline(outline)?;
    let entries = outline.len();
    let assembled = Reportforge::new().with_outline(outline).assemble()?;
    let doc = assembled.document();
    let stats = assembled.stats();

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    if let Some(ref title) = doc.metadata.title {
        println!("{}: {}", "Title".bold(), title);
    }
    if let Some(ref author) = doc.metadata.author {
        println!("{}: {}", "Author".bold(), author);
    }
    if let Some(ref date) = doc.metadata.date {
        println!("{}: {}", "Date".bold(), date);
    }
    println!(
        "{}: {} {}pt, {:?} spacing",
        "Style".bold(),
        doc.style().font_name,
        doc.style().font_size,
        doc.style().line_spacing
    );
    println!("{}: {}", "Outline entries".bold(), entries);

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Blocks".bold(), stats.block_count());
    println!(
        "{}: {} (level 1: {}, level 2: {}, level 3: {})",
        "Headings".bold(),
        stats.heading_count,
        stats.headings_by_level[0],
        stats.headings_by_level[1],
        stats.headings_by_level[2]
    );
    println!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
    println!("{}: {}", "Bullet items".bold(), stats.bullet_count);
    println!(
        "{}: {} ({} rows)",
        "Tables".bold(),
        stats.table_count,
        stats.table_row_count
    );
    println!("{}: {}", "Page breaks".bold(), stats.page_break_count);
    println!("{}: {}", "Words".bold(), stats.word_count);
    println!("{}: {}", "Characters".bold(), stats.char_count);

    Ok(())
}

fn cmd_formats() {
    let registry = BackendRegistry::with_options(RenderOptions::default());

    println!("{}", "Supported formats".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    for format in registry.formats() {
        println!(
            "  {:<10} .{:<6} {}",
            format.to_string().bold(),
            format.extension(),
            format.mime_type().dimmed()
        );
    }
}

fn cmd_version() {
    println!(
        "{} {}",
        "reportforge".cyan().bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!("Structured report generator");
    println!();
    println!(
        "Repository: {}",
        "https://github.com/iyulab/reportforge".dimmed()
    );
    println!("License: MIT");
}
