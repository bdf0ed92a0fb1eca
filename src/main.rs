use anyhow::{Context, bail};
use clap::{ArgAction, Parser};
use serde::Serialize;
use sketchboard::draw::SceneObject;
use sketchboard::host::{self, CanvasHost, EventOutcome, Viewport};
use sketchboard::{Config, icons};
use std::path::{Path, PathBuf};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("SKETCHBOARD_GIT_HASH"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "sketchboard")]
#[command(
    version,
    long_version = LONG_VERSION,
    about = "System-design diagramming canvas with scripted sessions and PNG export"
)]
struct Cli {
    /// Replay a JSON script of canvas events
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// Write the final canvas to this PNG file
    #[arg(long, short = 'o', value_name = "PNG", requires = "script")]
    output: Option<PathBuf>,

    /// Viewport the canvas is sized for
    #[arg(long, value_name = "WxH", default_value = "1440x900")]
    viewport: Viewport,

    /// Config file (defaults to ~/.config/sketchboard/config.toml)
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the final scene as JSON
    #[arg(long, action = ArgAction::SetTrue, requires = "script")]
    dump_scene: bool,

    /// List the component palette
    #[arg(long, action = ArgAction::SetTrue, conflicts_with = "script")]
    list_icons: bool,

    /// Only list components in this category
    #[arg(long, value_name = "CATEGORY", requires = "list_icons")]
    category: Option<String>,

    /// Write a documented config file to the default location
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,
}

#[derive(Serialize)]
struct SceneDump<'a> {
    width: u32,
    height: u32,
    background: String,
    grid_lines: usize,
    render_requests: u64,
    objects: Vec<&'a SceneObject>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = Config::create_default_file()?;
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    if cli.list_icons {
        return list_icons(cli.category.as_deref());
    }

    let Some(script) = cli.script.as_deref() else {
        print_usage();
        return Ok(());
    };

    let config = match cli.config.as_deref() {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    run_script(
        script,
        cli.viewport,
        config,
        cli.output.as_deref(),
        cli.dump_scene,
    )
}

fn run_script(
    script: &Path,
    viewport: Viewport,
    config: Config,
    output: Option<&Path>,
    dump_scene: bool,
) -> anyhow::Result<()> {
    let events = host::load_script(script)?;
    let mut canvas = CanvasHost::mount(viewport, config);
    log::info!("Replaying {} events from {}", events.len(), script.display());
    let renders_at_mount = canvas.scene().render_requests();

    for (index, event) in events.into_iter().enumerate() {
        let outcome = canvas
            .dispatch(event)
            .with_context(|| format!("Event {} in {} failed", index + 1, script.display()))?;
        if let EventOutcome::Exported(path) = outcome {
            println!("Exported canvas to {}", path.display());
        }
        for notice in canvas.take_notices() {
            eprintln!("{notice}");
        }
    }

    log::debug!(
        "Script requested {} repaints",
        canvas.scene().render_requests() - renders_at_mount
    );

    if let Some(output) = output {
        let path = canvas.export_to(output)?;
        for notice in canvas.take_notices() {
            eprintln!("{notice}");
        }
        println!("Exported canvas to {}", path.display());
    }

    if dump_scene {
        let scene = canvas.scene();
        let dump = SceneDump {
            width: scene.width(),
            height: scene.height(),
            background: scene.background().to_hex(),
            grid_lines: scene.grid_line_count(),
            render_requests: scene.render_requests(),
            objects: scene.drawings().collect(),
        };
        println!("{}", serde_json::to_string_pretty(&dump)?);
    }

    Ok(())
}

fn list_icons(category: Option<&str>) -> anyhow::Result<()> {
    let category = category.unwrap_or(icons::ALL_CATEGORY);
    if !icons::is_known_category(category) {
        let known: Vec<&str> = icons::CATEGORIES.iter().map(|(id, _)| *id).collect();
        bail!(
            "Unknown category '{}' (expected one of: {})",
            category,
            known.join(", ")
        );
    }

    for entry in icons::filter_catalog(category) {
        println!(
            "{:<14} {:<16} {:<9} {}",
            entry.id, entry.label, entry.color, entry.category
        );
    }
    Ok(())
}

fn print_usage() {
    println!("sketchboard: System-design diagramming canvas");
    println!();
    println!("Usage:");
    println!("  sketchboard --script session.json --output diagram.png");
    println!("  sketchboard --script session.json --dump-scene");
    println!("  sketchboard --list-icons [--category database]");
    println!("  sketchboard --init-config");
    println!("  sketchboard --help");
    println!();
    println!("A script is a JSON array of events, for example:");
    println!(r#"  [{{"event": "set-tool", "tool": "rectangle"}},"#);
    println!(r#"   {{"event": "pointer-down", "x": 100, "y": 100}},"#);
    println!(r#"   {{"event": "pointer-move", "x": 250, "y": 180}},"#);
    println!(r#"   {{"event": "pointer-up", "x": 250, "y": 180}}]"#);
}
