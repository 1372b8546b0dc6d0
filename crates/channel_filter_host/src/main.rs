// SPDX-License-Identifier: MIT OR Apache-2.0
//! `channel_filter` - headless host for the channel filter
//!
//! Replays filter button clicks against a scene and prints the resulting
//! channel state:
//! - Scenes and settings are RON files (a demo scene is built in)
//! - Clicks come from a script file and/or `--click` arguments
//! - Reports are an aligned text table or JSON

use channel_filter::{FilterPanel, ProfileVersion};
use channel_filter_host::report;
use channel_filter_host::{parse_script, Click, HostAdapter, HostError, HostSettings, OutputFormat, Result, Scene};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "channel_filter")]
#[command(about = "Filter animation channels per axis with replace/add/remove clicks")]
#[command(version)]
struct Args {
    /// Scene file (RON); the built-in demo scene when omitted
    #[arg(short, long)]
    scene: Option<PathBuf>,

    /// Click script, one `[shift+][ctrl+]<action id>` per line
    #[arg(long)]
    script: Option<PathBuf>,

    /// Extra click, run after the script (repeatable)
    #[arg(short, long = "click")]
    clicks: Vec<String>,

    /// Settings file (RON); `channel_filter.ron` is used if present
    #[arg(long)]
    config: Option<PathBuf>,

    /// Profile version, overriding the settings file (1.0 or 1.0.3)
    #[arg(short, long)]
    profile: Option<ProfileVersion>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// List the profile's actions grouped as on the panel, then exit
    #[arg(long)]
    list_actions: bool,

    /// Write the resulting scene to this file
    #[arg(long)]
    write_scene: Option<PathBuf>,
}

fn main() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("channel_filter=info,channel_filter_host=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(Args::parse()) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let mut settings = HostSettings::load_or_default(args.config.as_deref())?;
    if let Some(version) = args.profile {
        settings.profile = version;
    }
    let adapter = HostAdapter::new(settings.build_profile()?);
    tracing::info!(
        "Channel filter v{} (profile {})",
        env!("CARGO_PKG_VERSION"),
        adapter.profile().version()
    );

    if args.list_actions {
        print_actions(&adapter);
        return Ok(());
    }

    let mut scene = match &args.scene {
        Some(path) => Scene::load(path)?,
        None => Scene::demo(),
    };

    let mut clicks = match &args.script {
        Some(path) => {
            let source = std::fs::read_to_string(path).map_err(|e| HostError::io(path, e))?;
            parse_script(&source)?
        }
        None => Vec::new(),
    };
    for text in &args.clicks {
        clicks.push(Click::parse(text, 0)?);
    }

    // Resolve everything first so a typo does not leave a half-applied script
    let resolved = clicks
        .iter()
        .map(|click| -> Result<_> { Ok((click.resolve(adapter.profile())?, click.modifiers)) })
        .collect::<Result<Vec<_>>>()?;

    for (action, modifiers) in &resolved {
        let finished = adapter.invoke(&mut scene, action, *modifiers);
        tracing::debug!(
            action = %finished.action_id,
            objects = finished.objects,
            channels = finished.channels,
            "Operator finished"
        );
    }

    let format = if args.json {
        OutputFormat::Json
    } else {
        settings.output
    };
    match format {
        OutputFormat::Text => print!("{}", report::render_text(&scene)),
        OutputFormat::Json => println!("{}", report::render_json(&scene)?),
    }

    if let Some(path) = &args.write_scene {
        scene.save(path)?;
    }
    Ok(())
}

fn print_actions(adapter: &HostAdapter) {
    for section in FilterPanel::sections(adapter.profile()) {
        println!("{}", section.title);
        for action in section.actions {
            println!("  {:<36}  {}", action.id(), action.label());
        }
    }
}
