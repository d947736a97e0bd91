use anyhow::{Context, Result};
use clap::Parser;
use quotewall::font::Typeface;
use quotewall::{layout, quotes, render, Config};
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "quotewall")]
#[command(about = "Render numbered quotes as wallpaper images", long_about = None)]
struct Args {
    /// Text file of numbered quotes (e.g., '1. "Stay curious"')
    input: PathBuf,
}

fn main() -> Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if err.use_stderr() => {
            // Usage errors exit with code 1, not clap's default 2.
            let _ = err.print();
            std::process::exit(1);
        }
        Err(err) => err.exit(),
    };

    let config = Config::default();

    let quotes = quotes::extract_quotes_from_file(&args.input)?;
    if quotes.is_empty() {
        eprintln!("No quotes found in '{}'", args.input.display());
        std::process::exit(1);
    }

    fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "Failed to create output directory '{}'",
            config.output_dir.display()
        )
    })?;

    let typeface = Typeface::load(&config.font_path).context("Failed to load font")?;

    for (idx, quote) in quotes.iter().enumerate() {
        let fitted = layout::fit_to_box(
            quote,
            |size| Ok(typeface.at_size(size)),
            config.available_width(),
            config.available_height(),
            config.size_range(),
            config.line_spacing,
        )?;

        let output_path = config.output_dir.join(format!("quote_{}.png", idx + 1));
        let face = typeface.at_size(fitted.font_size);
        render::render_wallpaper(&fitted, &face, &config, &output_path)
            .with_context(|| format!("Failed to render quote {}", idx + 1))?;
    }

    Ok(())
}
