//! `custom-painter`: render the cross-circle painter off-screen.
//!
//! Output is either an SVG document or the raw draw-command list as JSON,
//! written to stdout unless `--output` is given.

mod cli;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use cli::{Cli, Commands, OutputFormat};
use cp_core::{
    Canvas, CrossCirclePainter, Painter, RecordingCanvas, ScreenConfig, Size, main_screen,
    paint_screen, screen_extent,
};
use cp_render::render_svg_commands;
use std::io::Write;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let (canvas, format, output) = match cli.command {
        Commands::Screen {
            density,
            inset,
            format,
            output,
        } => {
            let config = ScreenConfig {
                density,
                status_bar_inset: inset,
            };
            let screen = main_screen();
            let mut canvas = RecordingCanvas::new(screen_extent(&screen, &config));
            paint_screen(&screen, &config, &mut canvas);
            (canvas, format, output)
        }
        Commands::Painter {
            width,
            height,
            format,
            output,
        } => {
            let mut canvas = RecordingCanvas::new(Size::new(width, height));
            CrossCirclePainter::new().render(&mut canvas, width, height);
            (canvas, format, output)
        }
    };

    log::info!(
        "rendered {} commands on {}x{}",
        canvas.commands().len(),
        canvas.size().width,
        canvas.size().height
    );

    let text = match format {
        OutputFormat::Svg => render_svg_commands(canvas.commands(), canvas.size()),
        OutputFormat::Json => canvas.to_json().map_err(|e| anyhow!(e))?,
    };

    match output {
        Some(path) => std::fs::write(&path, text)
            .with_context(|| format!("writing {}", path.display()))?,
        None => std::io::stdout()
            .write_all(text.as_bytes())
            .context("writing to stdout")?,
    }

    Ok(())
}
