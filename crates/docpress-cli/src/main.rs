use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use docpress_config::Config;
use docpress_engine::{
    BatchOptions, FormatOp, RichDocument, build_script, compile, compile_batch, parse_markdown,
};

#[derive(Parser)]
#[command(
    name = "docpress",
    version,
    about = "Compile Markdown into batch edit scripts for rich-text document APIs"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compile a markdown file into a JSON edit batch
    Compile(CompileArgs),

    /// Replay the compiled batch against a local document and print it
    Preview(PreviewArgs),

    /// Compile a markdown file and verify the resulting script
    Check(CheckArgs),
}

#[derive(clap::Args)]
struct CompileArgs {
    /// Markdown file to compile
    input: PathBuf,

    /// Output path for the JSON batch (default: stdout, or the configured
    /// output directory)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty-print the JSON batch
    #[arg(long)]
    pretty: bool,

    /// Preset id sent with list bullet commands
    #[arg(long)]
    bullet_preset: Option<String>,
}

#[derive(clap::Args)]
struct PreviewArgs {
    /// Markdown file to preview
    input: PathBuf,
}

#[derive(clap::Args)]
struct CheckArgs {
    /// Markdown file to check
    input: PathBuf,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()
        .with_context(|| format!("cannot load config at {}", Config::config_path().display()))?
        .unwrap_or_default();

    match cli.command {
        Command::Compile(args) => do_compile(args, &config),
        Command::Preview(args) => do_preview(&args.input),
        Command::Check(args) => do_check(&args.input),
    }
}

fn do_compile(args: CompileArgs, config: &Config) -> Result<()> {
    let markdown = read_input(&args.input)?;
    let script = compile(&markdown);

    let mut opts = BatchOptions::default();
    if let Some(preset) = args.bullet_preset.clone().or_else(|| config.bullet_preset.clone()) {
        opts.bullet_preset = preset;
    }
    let batch = compile_batch(&script, &opts);

    let pretty = args.pretty || config.pretty.unwrap_or(false);
    let json = if pretty {
        serde_json::to_string_pretty(&batch)?
    } else {
        serde_json::to_string(&batch)?
    };

    match output_path(&args, config) {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("cannot create {}", parent.display()))?;
            }
            fs::write(&path, json).with_context(|| format!("cannot write {}", path.display()))?;
            println!("Wrote {}", path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}

/// Explicit `-o` wins; otherwise a configured output directory receives
/// `<input-stem>.json`; otherwise the batch goes to stdout.
fn output_path(args: &CompileArgs, config: &Config) -> Option<PathBuf> {
    if let Some(path) = &args.output {
        return Some(path.clone());
    }
    config.output_dir.as_ref().map(|dir| {
        let stem = args.input.file_stem().unwrap_or_else(|| OsStr::new("batch"));
        dir.join(stem).with_extension("json")
    })
}

fn do_preview(input: &Path) -> Result<()> {
    let markdown = read_input(input)?;
    let batch = compile_batch(&compile(&markdown), &BatchOptions::default());

    let mut doc = RichDocument::new();
    doc.apply_batch(&batch)
        .with_context(|| format!("batch for {} does not replay", input.display()))?;

    print!("{}", doc.render_markdown());
    Ok(())
}

fn do_check(input: &Path) -> Result<()> {
    let markdown = read_input(input)?;
    let lines = parse_markdown(&markdown);
    let script = build_script(&lines);

    script
        .validate()
        .with_context(|| format!("script for {} fails verification", input.display()))?;

    let (mut headings, mut bullets, mut bold, mut italic) = (0usize, 0usize, 0usize, 0usize);
    for op in &script.ops {
        match op {
            FormatOp::Heading { .. } => headings += 1,
            FormatOp::Bullet { .. } => bullets += 1,
            FormatOp::Bold { .. } => bold += 1,
            FormatOp::Italic { .. } => italic += 1,
        }
    }

    println!(
        "{}: {} lines, {} body chars",
        input.display(),
        lines.len(),
        script.insert_text.chars().count()
    );
    println!("format ops: {headings} heading, {bullets} bullet, {bold} bold, {italic} italic");
    Ok(())
}

fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))
}
