use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod output;

use output::ColorMode;

/// Resume section extractor - pull Skills, Projects, and Experience out of a PDF
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the resume PDF, or a JSON file to pretty-print
    file_path: PathBuf,

    /// Minimum characters of digital text before the OCR fallback kicks in
    #[arg(long, default_value_t = vitae_ingest::DEFAULT_MIN_TEXT_LENGTH)]
    threshold: usize,

    /// Emit the section mapping as pretty-printed JSON instead of a report
    #[arg(long)]
    json: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Path to output file
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if !cli.file_path.exists() {
        anyhow::bail!("File not found: {}", cli.file_path.display());
    }

    let use_color = !cli.no_color && cli.output.is_none();
    let color = ColorMode(use_color);

    let mut writer: Box<dyn Write> = if let Some(ref output_path) = cli.output {
        Box::new(std::fs::File::create(output_path)?)
    } else {
        Box::new(std::io::stdout())
    };

    let is_pdf = has_extension(&cli.file_path, "pdf");
    let is_json = has_extension(&cli.file_path, "json");

    if is_pdf {
        parse_pdf(&cli, &mut writer, color)
    } else if is_json {
        print_json(&cli.file_path, &mut writer)
    } else {
        anyhow::bail!(
            "Unsupported file type (expected .pdf or .json): {}",
            cli.file_path.display()
        );
    }
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .map(|e| e.eq_ignore_ascii_case(ext))
        .unwrap_or(false)
}

/// Run the extraction pipeline and render the section report.
fn parse_pdf(cli: &Cli, writer: &mut Box<dyn Write>, color: ColorMode) -> anyhow::Result<()> {
    let file_name = cli
        .file_path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| cli.file_path.display().to_string());

    let text = vitae_ingest::extract_text_with_threshold(&cli.file_path, cli.threshold)?;
    let sections = vitae_parsing::segment(&text);

    if cli.json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&sections)?)?;
    } else {
        output::print_sections(writer, &file_name, &sections, color)?;
    }
    Ok(())
}

/// Non-PDF branch: parse the JSON file and pretty-print its contents,
/// bypassing the extraction pipeline entirely.
fn print_json(path: &Path, writer: &mut Box<dyn Write>) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(path)?;
    let value: serde_json::Value =
        serde_json::from_str(&raw).map_err(|e| anyhow::anyhow!("Error reading JSON: {}", e))?;
    writeln!(writer, "{}", serde_json::to_string_pretty(&value)?)?;
    Ok(())
}
