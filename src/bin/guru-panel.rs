//! Guru Panel CLI
//!
//! Run with: cargo run --bin guru-panel -- --topic "..." --gurus "warren_buffett,cathie_wood"

use anyhow::Result;
use clap::Parser;
use guru_panel::{
    create_panel_options, transcript, RuntimeClient, RuntimeConfig, RuntimeError, SessionEvent,
    Transcript, AVAILABLE_GURUS,
};
use std::io::Write;
use std::path::PathBuf;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

#[derive(Parser)]
#[command(name = "guru-panel")]
#[command(about = "Investment Guru Multi-Agent Discussion Panel", long_about = None)]
struct Cli {
    /// Discussion topic
    #[arg(
        long,
        default_value = "AI 에이전트 시대의 picks and shovels 투자 기회에 대해 토론해줘."
    )]
    topic: String,

    /// Comma-separated list of investment gurus (e.g. 'warren_buffett,elon_musk')
    #[arg(
        long,
        default_value = "warren_buffett,peter_lynch,cathie_wood,ray_dalio,benjamin_graham"
    )]
    gurus: String,

    /// Base URL override for the agent runtime
    #[arg(long)]
    base_url: Option<String>,

    /// Directory the transcript is saved to
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// List the predefined gurus
    #[arg(long)]
    list_gurus: bool,
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "guru_panel=debug"
    } else {
        "guru_panel=warn"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    // Logs go to stderr; stdout carries the streamed discussion text
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn spawn_signal_handler(shutdown: CancellationToken) {
    tokio::spawn(async move {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigint = signal(SignalKind::interrupt()).expect("SIGINT handler");
        let mut sigterm = signal(SignalKind::terminate()).expect("SIGTERM handler");

        tokio::select! {
            _ = sigint.recv() => {}
            _ = sigterm.recv() => {}
        }

        shutdown.cancel();
    });
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.list_gurus {
        println!("Predefined Gurus:");
        println!("{:-<40}", "");
        for guru in AVAILABLE_GURUS {
            println!("  {}", guru);
        }
        return Ok(());
    }

    // Parse gurus
    let guru_names: Vec<String> = cli
        .gurus
        .split(',')
        .map(|name| name.trim().to_string())
        .collect();

    println!("🤖 Starting Investment Guru Discussion Panel");
    println!("topic: {}", cli.topic);
    println!("Participants: {}", guru_names.join(", "));
    println!("{:-<60}", "");

    // Create options with all gurus registered
    let options = create_panel_options(&guru_names)?;

    let config = match cli.base_url {
        Some(ref base_url) => RuntimeConfig::custom("Anthropic", base_url, "ANTHROPIC_API_KEY"),
        None => RuntimeConfig::default(),
    };
    let client = RuntimeClient::new(config)?;

    let shutdown = CancellationToken::new();
    spawn_signal_handler(shutdown.clone());

    let transcript = Transcript::new(&cli.topic, &guru_names);
    let (tx, mut rx) = mpsc::unbounded_channel();

    // Run the session and event consumption concurrently; tx is moved into
    // the session so the channel closes when the stream ends
    let session_fut = client.run_session(&options, &cli.topic, tx, shutdown.clone());

    let event_fut = async move {
        let mut transcript = transcript;
        while let Some(event) = rx.recv().await {
            match event {
                SessionEvent::Text { text } => {
                    print!("{}", text);
                    std::io::stdout().flush().ok();
                    transcript.push_text(&text);
                }
                SessionEvent::ToolUse { name, input } => {
                    let annotation = transcript.push_tool_use(&name, &input);
                    println!("{}", transcript::console_line(&annotation));
                }
                SessionEvent::Done => {}
            }
        }
        transcript
    };

    let (session_result, transcript) = tokio::join!(session_fut, event_fut);

    match session_result {
        Ok(()) => {
            let path = transcript.save(&cli.output_dir)?;
            println!("\n\n💾 Discussion saved to: {}", path.display());
            Ok(())
        }
        Err(RuntimeError::Cancelled) => {
            println!("\n\n⏹️  Discussion interrupted by user.");
            Ok(())
        }
        Err(err) => {
            eprintln!("\n\n❌ Error: {}", err);
            eprintln!("Ensure you are authenticated (set ANTHROPIC_API_KEY or add a key to auth.json).");
            std::process::exit(1);
        }
    }
}
