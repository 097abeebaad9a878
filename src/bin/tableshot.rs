use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "tableshot", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a table document as a PNG.
    Render(RenderArgs),
    /// Write the SVG drawn for a table document.
    Svg(SvgArgs),
    /// Print the computed layout of a table document as JSON.
    Layout(LayoutArgs),
}

#[derive(Args, Debug)]
struct SurfaceArgs {
    /// Input table document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Override the document canvas width in pixels.
    #[arg(long)]
    width: Option<u32>,

    /// Override the document canvas height in pixels.
    #[arg(long)]
    height: Option<u32>,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    surface: SurfaceArgs,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Extra directory to load .ttf/.otf fonts from (repeatable).
    #[arg(long = "font-dir")]
    font_dirs: Vec<PathBuf>,

    /// Do not load system fonts.
    #[arg(long, default_value_t = false)]
    no_system_fonts: bool,
}

#[derive(Args, Debug)]
struct SvgArgs {
    #[command(flatten)]
    surface: SurfaceArgs,

    /// Output SVG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct LayoutArgs {
    /// Input table document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Svg(args) => cmd_svg(args),
        Command::Layout(args) => cmd_layout(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_surface(args: &SurfaceArgs) -> anyhow::Result<(tableshot::Table, tableshot::SvgSurface)> {
    let doc = tableshot::TableDocument::from_path(&args.in_path)?;
    let table = doc
        .to_table()
        .with_context(|| format!("build table from '{}'", args.in_path.display()))?;

    let mut canvas = doc.canvas()?;
    if let Some(w) = args.width {
        canvas.width = w;
    }
    if let Some(h) = args.height {
        canvas.height = h;
    }
    let canvas = tableshot::Canvas::new(canvas.width, canvas.height)?;

    let mut surface = tableshot::SvgSurface::new(canvas);
    if let Some(bg) = &doc.background {
        surface = surface.with_background(bg.clone());
    }
    Ok((table, surface))
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let (table, surface) = load_surface(&args.surface)?;
    let fonts = tableshot::FontOptions {
        font_dirs: args.font_dirs,
        skip_system_fonts: args.no_system_fonts,
    };
    let frame = tableshot::render_table(&table, surface, &fonts)?;
    tableshot::save_png(&frame, &args.out)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_svg(args: SvgArgs) -> anyhow::Result<()> {
    let (table, surface) = load_surface(&args.surface)?;
    let svg = tableshot::render_table_svg(&table, surface)?;

    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, svg)
        .with_context(|| format!("write svg '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let doc = tableshot::TableDocument::from_path(&args.in_path)?;
    let table = doc.to_table()?;
    let json = serde_json::to_string_pretty(table.layout()).context("serialize layout")?;
    println!("{json}");
    Ok(())
}
