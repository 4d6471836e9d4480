// Copyright 2025. Frame capture CLI for plug-ui.
//
// Usage:
//   knob-snapshot knob <size> <value> [--drag <dy>]... -o <output.bmp>
//   knob-snapshot placeholder <width> <height> -o <output.bmp>
//
// Set RUST_LOG=debug to trace the replayed pointer gesture.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use knob_snapshot::{render_knob, render_placeholder, save_bmp};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        bail!("missing command");
    }

    match args[1].as_str() {
        "knob" => cmd_knob(&args[2..]),
        "placeholder" => cmd_placeholder(&args[2..]),
        other => {
            print_usage();
            bail!("unknown command: {other}");
        }
    }
}

fn print_usage() {
    eprintln!("knob-snapshot - render plug-ui frames to BMP");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  knob <size> <value> [--drag <dy>]... -o <output.bmp>");
    eprintln!("      Render a size x size knob at a normalized value, optionally");
    eprintln!("      after dragging up by dy pixels per step.");
    eprintln!();
    eprintln!("  placeholder <width> <height> -o <output.bmp>");
    eprintln!("      Render the placeholder frame.");
}

/// Split `-o <path>` and `--drag <dy>` options from positional arguments.
struct Options {
    positional: Vec<String>,
    output: Option<PathBuf>,
    drags: Vec<f32>,
}

fn parse_options(args: &[String]) -> Result<Options> {
    let mut opts = Options {
        positional: Vec::new(),
        output: None,
        drags: Vec::new(),
    };
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-o" => {
                let path = args.get(i + 1).context("-o needs a path")?;
                opts.output = Some(PathBuf::from(path));
                i += 2;
            }
            "--drag" => {
                let dy = args.get(i + 1).context("--drag needs a pixel offset")?;
                opts.drags.push(dy.parse().with_context(|| format!("invalid drag offset '{dy}'"))?);
                i += 2;
            }
            _ => {
                opts.positional.push(args[i].clone());
                i += 1;
            }
        }
    }
    Ok(opts)
}

fn cmd_knob(args: &[String]) -> Result<()> {
    let opts = parse_options(args)?;
    let [size, value] = opts.positional.as_slice() else {
        bail!("usage: knob-snapshot knob <size> <value> [--drag <dy>]... -o <output.bmp>");
    };
    let size: u32 = size.parse().with_context(|| format!("invalid size '{size}'"))?;
    let value: f32 = value.parse().with_context(|| format!("invalid value '{value}'"))?;
    let output = opts
        .output
        .unwrap_or_else(|| PathBuf::from(format!("knob_{size}_{value}.bmp")));

    let (snap, knob) = render_knob(size, value, &opts.drags).context("rendering knob")?;
    save_bmp(&output, &snap).with_context(|| format!("writing {}", output.display()))?;
    info!(
        value = knob.value(),
        path = %output.display(),
        "saved knob snapshot"
    );
    Ok(())
}

fn cmd_placeholder(args: &[String]) -> Result<()> {
    let opts = parse_options(args)?;
    let [width, height] = opts.positional.as_slice() else {
        bail!("usage: knob-snapshot placeholder <width> <height> -o <output.bmp>");
    };
    let width: u32 = width.parse().with_context(|| format!("invalid width '{width}'"))?;
    let height: u32 = height.parse().with_context(|| format!("invalid height '{height}'"))?;
    let output = opts
        .output
        .unwrap_or_else(|| PathBuf::from(format!("placeholder_{width}x{height}.bmp")));

    let snap = render_placeholder(width, height).context("rendering placeholder")?;
    save_bmp(&output, &snap).with_context(|| format!("writing {}", output.display()))?;
    info!(path = %output.display(), "saved placeholder snapshot");
    Ok(())
}
