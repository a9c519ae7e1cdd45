//! icon2logo command-line tool.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use icon2logo::{
    Color, Configurable, Editor, Error, ExportFormat, SAMPLES, StyleChange, StyleProfile,
};

/// Turn a line icon into a logo
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// SVG file to style, or `-` to read markup from stdin
    #[arg(value_hint = clap::ValueHint::FilePath, conflicts_with = "example")]
    input: Option<PathBuf>,

    /// Use a built-in example icon instead of an input file
    #[arg(short, long, value_name = "INDEX")]
    example: Option<usize>,

    /// Stroke color (hex or CSS name)
    #[arg(long, value_name = "COLOR")]
    stroke: Option<Color>,

    /// Stroke width, 0 to 3
    #[arg(long, value_name = "WIDTH")]
    thickness: Option<f64>,

    /// Fill shapes with this color
    #[arg(long, value_name = "COLOR")]
    fill: Option<Color>,

    /// Draw a background in this color
    #[arg(long, value_name = "COLOR")]
    background: Option<Color>,

    /// Background corner radius, 0 (square) to 10 (circle)
    #[arg(long, value_name = "PERCENT")]
    radius: Option<f64>,

    /// Padding, -10 (largest icon) to 10 (smallest)
    #[arg(long, allow_negative_numbers = true)]
    padding: Option<f64>,

    /// JSON style profile applied before the flags above
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    profile: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Png)]
    format: ExportFormat,

    /// Export size in pixels (clamped to 512)
    #[arg(short, long, allow_negative_numbers = true)]
    size: Option<i64>,

    /// Output file or directory (default: current directory)
    #[arg(short, long, value_hint = clap::ValueHint::AnyPath)]
    output: Option<PathBuf>,

    /// Print the styled SVG to stdout instead of writing a file
    #[arg(long, conflicts_with_all = ["output", "print_profile"])]
    copy: bool,

    /// Print the resulting style profile as JSON and exit
    #[arg(long)]
    print_profile: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut editor = Editor::default();

    load(&mut editor, &cli)?;

    if let Some(path) = &cli.profile {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read profile `{}`", path.display()))?;
        editor.apply_profile(&StyleProfile::from_json(&json)?);
    }

    for change in changes(&cli) {
        editor.update(change)?;
    }

    if cli.print_profile {
        println!("{}", editor.export_profile().to_json_pretty()?);
        return Ok(());
    }

    if let Some(size) = cli.size {
        editor.set_export_size(size)?;
    }

    if cli.copy {
        let mut clipboard = String::new();
        editor.copy_svg(&mut clipboard)?;
        println!("{clipboard}");
        return Ok(());
    }

    let artifact = match cli.format {
        ExportFormat::Svg => editor.download_svg()?,
        ExportFormat::Png => editor
            .download_png()
            .context("failed to render the styled icon")?,
    };

    let written = match &cli.output {
        Some(path) if !path.is_dir() => {
            artifact.write_to(path)?;
            path.clone()
        }
        Some(dir) => artifact.write_to_dir(dir)?,
        None => artifact.write_to_dir(Path::new("."))?,
    };
    println!("{}", written.display());

    Ok(())
}

fn load(editor: &mut Editor, cli: &Cli) -> Result<()> {
    if let Some(index) = cli.example {
        editor.pick_example(index).with_context(|| {
            format!("examples are numbered 0 to {}", SAMPLES.len() - 1)
        })?;
        return Ok(());
    }

    match cli.input.as_deref() {
        Some(path) if path != Path::new("-") => editor.load_file(path)?,
        Some(_) => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            if !editor.paste(&text) {
                return Err(Error::NotSvgMarkup.into());
            }
        }
        None => bail!("no input: pass an .svg file, `-` for stdin, or --example"),
    }
    Ok(())
}

/// Parameter changes requested on the command line, in application order.
fn changes(cli: &Cli) -> Vec<StyleChange> {
    let mut changes = Vec::new();
    if let Some(color) = &cli.stroke {
        changes.push(StyleChange::StrokeColor(color.clone()));
    }
    if let Some(width) = cli.thickness {
        changes.push(StyleChange::StrokeWidth(width));
    }
    if let Some(color) = &cli.fill {
        changes.push(StyleChange::FillColor(color.clone()));
        changes.push(StyleChange::FillEnabled(true));
    }
    if let Some(color) = &cli.background {
        changes.push(StyleChange::BackgroundColor(color.clone()));
        changes.push(StyleChange::BackgroundEnabled(true));
    }
    if let Some(radius) = cli.radius {
        changes.push(StyleChange::CornerRadius(radius));
    }
    if let Some(padding) = cli.padding {
        changes.push(StyleChange::Padding(padding));
    }
    changes
}
