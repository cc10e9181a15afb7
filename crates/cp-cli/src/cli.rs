// Command-line argument parsing.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Render the cross-circle painter to SVG or JSON
#[derive(Parser)]
#[command(name = "custom-painter")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the two-instance demo screen
    Screen {
        /// Pixels per dp
        #[arg(
            long,
            default_value_t = 1.0,
            value_parser = positive,
            allow_negative_numbers = true
        )]
        density: f32,

        /// Status bar inset above the column, in dp
        #[arg(
            long,
            default_value_t = 0.0,
            value_parser = finite_non_negative,
            allow_negative_numbers = true
        )]
        inset: f32,

        #[arg(long, value_enum, default_value_t = OutputFormat::Svg)]
        format: OutputFormat,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Render a single painter at an explicit size
    Painter {
        #[arg(
            long,
            default_value_t = 100.0,
            value_parser = positive,
            allow_negative_numbers = true
        )]
        width: f32,

        #[arg(
            long,
            default_value_t = 100.0,
            value_parser = positive,
            allow_negative_numbers = true
        )]
        height: f32,

        #[arg(long, value_enum, default_value_t = OutputFormat::Svg)]
        format: OutputFormat,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Svg,
    Json,
}

fn parse_f32(s: &str) -> Result<f32, String> {
    s.parse().map_err(|e| format!("{s:?}: {e}"))
}

/// Painter sizes and density must be positive and finite.
fn positive(s: &str) -> Result<f32, String> {
    let v = parse_f32(s)?;
    if v.is_finite() && v > 0.0 {
        Ok(v)
    } else {
        Err(format!("{s:?} must be a positive number"))
    }
}

/// Insets may be zero, never negative or non-finite.
fn finite_non_negative(s: &str) -> Result<f32, String> {
    let v = parse_f32(s)?;
    if v.is_finite() && v >= 0.0 {
        Ok(v)
    } else {
        Err(format!("{s:?} must be a finite, non-negative number"))
    }
}
