use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use emblem::{Artwork, OutputSpec};

mod logo;
mod manifest;

#[derive(Parser, Debug)]
#[command(name = "emblem", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the artwork once at native resolution as a PNG.
    Render(RenderArgs),
    /// Write the full icon set and optionally patch an asset-catalog manifest.
    Generate(GenerateArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Square canvas size in pixels.
    #[arg(long, default_value_t = 1024)]
    canvas_size: u32,

    /// Margin around the fitted artwork in pixels.
    #[arg(long, default_value_t = 120)]
    margin: u32,

    /// Artwork JSON overriding the built-in logo.
    #[arg(long)]
    artwork: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Directory the icon files are written into (created if missing).
    #[arg(long)]
    out_dir: PathBuf,

    /// Base canvas size in pixels; smaller sizes are downsampled from it.
    #[arg(long, default_value_t = 1024)]
    canvas_size: u32,

    /// Margin around the fitted artwork in pixels.
    #[arg(long, default_value_t = 120)]
    margin: u32,

    /// Artwork JSON overriding the built-in logo.
    #[arg(long)]
    artwork: Option<PathBuf>,

    /// Asset-catalog Contents.json to patch with the generated filenames.
    #[arg(long)]
    manifest: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Generate(args) => cmd_generate(args),
    }
}

fn load_artwork(path: Option<&Path>) -> anyhow::Result<Artwork> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("read artwork '{}'", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parse artwork '{}'", path.display()))
        }
        None => Ok(logo::builtin()),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let artwork = load_artwork(args.artwork.as_deref())?;
    let pixmap = emblem::render_base(&artwork, args.canvas_size, args.margin)?;
    let bytes = emblem::encode_png(&pixmap)?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, &bytes)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let artwork = load_artwork(args.artwork.as_deref())?;
    let base_filename = format!("app-icon-{}.png", args.canvas_size);

    let mut outputs = vec![OutputSpec {
        filename: base_filename.clone(),
        width: args.canvas_size,
        height: args.canvas_size,
    }];
    for size in [16u32, 32, 64, 128, 256, 512] {
        outputs.push(OutputSpec {
            filename: format!("icon-{size}.png"),
            width: size,
            height: size,
        });
    }

    let icons = emblem::render_icon_set(&artwork, args.canvas_size, args.margin, &outputs)?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;
    for icon in &icons {
        let path = args.out_dir.join(&icon.filename);
        std::fs::write(&path, &icon.bytes)
            .with_context(|| format!("write png '{}'", path.display()))?;
        eprintln!("wrote {}", path.display());
    }

    if let Some(manifest_path) = &args.manifest {
        manifest::assign_icon_filenames(manifest_path, &base_filename)?;
        eprintln!("updated {}", manifest_path.display());
    }
    Ok(())
}
