use std::io::Read as _;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use deckcast::{Config, DialogueRequest, Pipeline, VideoJobRequest};

#[derive(Parser, Debug)]
#[command(name = "deckcast", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a video assembly job from a JSON request payload.
    Video(VideoArgs),
    /// Synthesize dialogue audio from a JSON request payload.
    Dialogue(DialogueArgs),
}

#[derive(Parser, Debug)]
struct VideoArgs {
    /// Request JSON file (reads stdin when omitted).
    #[arg(long = "in")]
    in_path: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct DialogueArgs {
    /// Request JSON file (reads stdin when omitted).
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Write raw audio bytes here instead of base64 in the response.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Video(args) => cmd_video(args),
        Command::Dialogue(args) => cmd_dialogue(args),
    }
}

fn read_request(in_path: Option<&PathBuf>) -> anyhow::Result<String> {
    match in_path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("read request from '{}'", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("read request from stdin")?;
            Ok(buf)
        }
    }
}

fn cmd_video(args: VideoArgs) -> anyhow::Result<()> {
    let raw = read_request(args.in_path.as_ref())?;
    let request: VideoJobRequest = serde_json::from_str(&raw).context("parse video request")?;

    let config = Config::from_env()?;
    let pipeline = Pipeline::new(&config)?;
    let response = pipeline.run_video(&request);

    println!("{}", serde_json::to_string_pretty(&response)?);
    if !response.success {
        std::process::exit(1);
    }
    Ok(())
}

fn cmd_dialogue(args: DialogueArgs) -> anyhow::Result<()> {
    let raw = read_request(args.in_path.as_ref())?;
    let request: DialogueRequest = serde_json::from_str(&raw).context("parse dialogue request")?;

    let config = Config::from_env()?;
    let pipeline = Pipeline::new(&config)?;
    let mut response = pipeline.run_dialogue(&request);

    if let Some(out) = &args.out
        && let Some(encoded) = response.audio_base64.take()
    {
        use base64::Engine as _;
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(encoded)
            .context("decode synthesized audio")?;
        std::fs::write(out, &bytes).with_context(|| format!("write audio '{}'", out.display()))?;
        eprintln!("wrote {}", out.display());
    }

    println!("{}", serde_json::to_string_pretty(&response)?);
    if !response.success {
        std::process::exit(1);
    }
    Ok(())
}
