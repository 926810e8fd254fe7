//! Extrude CLI
//!
//! Resolve component props into scene JSON and export gradient textures.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use extrude_3d::{build_gradient_texture, GradientSpec, Scene};
use extrude_cn::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;
mod playground;

use config::ExtrudeConfig;

#[derive(Parser)]
#[command(name = "extrude")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Extrude 3D component toolkit", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Theme TOML overriding the built-in token tables
    #[arg(long, global = true)]
    theme: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the scene of a button
    Button {
        /// Props file (JSON, or TOML with a .toml extension)
        #[arg(long)]
        props: Option<PathBuf>,

        /// Label, overriding the props file
        #[arg(long)]
        text: Option<String>,

        /// Size tier (small, medium, large, xlarge)
        #[arg(long)]
        size: Option<String>,

        /// Viewport width in CSS pixels
        #[arg(long)]
        viewport: Option<f32>,
    },

    /// Paint a two-stop gradient into a PNG
    Gradient {
        /// Start color (hex or CSS name)
        #[arg(long)]
        from: String,

        /// End color (hex or CSS name)
        #[arg(long)]
        to: String,

        /// Direction in degrees; 0 runs left to right
        #[arg(long, default_value = "0")]
        angle: f32,

        /// Edge length in pixels
        #[arg(long)]
        size: Option<u32>,

        /// Output path
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Print the landing page buttons
    Playground {
        /// Viewport width in CSS pixels
        #[arg(long)]
        viewport: Option<f32>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config = ExtrudeConfig::load_from_dir(&std::env::current_dir()?)?;
    load_theme(cli.theme.as_deref().or(config.theme.as_deref()))?;

    match cli.command {
        Commands::Button {
            props,
            text,
            size,
            viewport,
        } => cmd_button(&config, props.as_deref(), text, size.as_deref(), viewport),

        Commands::Gradient {
            from,
            to,
            angle,
            size,
            output,
        } => cmd_gradient(&config, &from, &to, angle, size, &output),

        Commands::Playground { viewport } => cmd_playground(&config, viewport),
    }
}

fn load_theme(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let theme = ExtrudeTheme::load(path)
        .with_context(|| format!("Failed to load theme {}", path.display()))?;
    info!("Using theme {}", path.display());
    ThemeState::set(theme);
    Ok(())
}

fn read_props(path: &Path) -> Result<ButtonProps> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let props = if path.extension().is_some_and(|ext| ext == "toml") {
        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))?
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?
    };
    Ok(props)
}

fn cmd_button(
    config: &ExtrudeConfig,
    props_path: Option<&Path>,
    text: Option<String>,
    size: Option<&str>,
    width: Option<f32>,
) -> Result<()> {
    let mut props = match props_path {
        Some(path) => read_props(path)?,
        None => ButtonProps::default(),
    };
    if let Some(text) = text {
        props.text = text;
    }
    if let Some(size) = size {
        props.size = SizeCategory::parse_lossy(size);
    }

    let viewport = config.viewport(width);
    debug!(
        "Resolving button {:?} ({}) for {}x{}",
        props.text, props.size, viewport.width, viewport.height
    );

    let scene = Button::from_props(props).scene(viewport);
    println!("{}", config.to_json(&scene)?);
    Ok(())
}

fn cmd_gradient(
    config: &ExtrudeConfig,
    from: &str,
    to: &str,
    angle: f32,
    size: Option<u32>,
    output: &Path,
) -> Result<()> {
    let from = Color::parse(from).with_context(|| format!("Invalid start color '{}'", from))?;
    let to = Color::parse(to).with_context(|| format!("Invalid end color '{}'", to))?;
    let size = size.unwrap_or(config.output.gradient_size);
    if size == 0 {
        anyhow::bail!("Gradient size must be at least 1 pixel");
    }

    let spec = GradientSpec::new(from, to, angle);
    let texture = build_gradient_texture(Some(&spec), size)
        .context("Gradient texture was not produced")?;
    texture
        .save_png(output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    info!("Wrote {}x{} gradient to {}", size, size, output.display());
    Ok(())
}

fn cmd_playground(config: &ExtrudeConfig, width: Option<f32>) -> Result<()> {
    let viewport = config.viewport(width);
    let scenes: Vec<Scene> = playground::landing_buttons()
        .iter()
        .map(|button| button.scene(viewport))
        .collect();
    println!("{}", config.to_json(&scenes)?);
    Ok(())
}
