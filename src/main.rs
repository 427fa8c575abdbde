//! Catalyst Chat - line-based client for REST management APIs
//!
//! Architecture:
//! - UI Layer - reads lines from stdin, prints render events
//! - App Layer - parses, dispatches and classifies each command
//! - Network Layer (Tokio) - async HTTP execution

use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use catalyst_chat::cli::Args;
use catalyst_chat::config::Config;
use catalyst_chat::constants::PROMPT;
use catalyst_chat::messages::ui_events::BuiltIn;
use catalyst_chat::messages::{NetworkCommand, NetworkResponse, RenderEvent, UiEvent};
use catalyst_chat::{logging, ui, AppActor, NetworkActor};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    let config = Config::load(args.config.as_deref())?.with_overrides(args.overrides());

    // Initialize logging to file
    let _guard = logging::init(&config.log_file, args.verbose)?;
    tracing::info!(base_url = %config.base_url, mode = ?config.mode, "Starting");

    if !io::stdout().is_terminal() {
        crossterm::style::force_color_output(false);
    }

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel::<NetworkCommand>();
    let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel::<NetworkResponse>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderEvent>();

    // Spawn network actor
    let echo = config.echo;
    let network_actor = NetworkActor::new(config, net_resp_tx);
    let network = tokio::spawn(network_actor.run(net_cmd_rx));

    // Spawn app actor
    let app_actor = AppActor::new(net_cmd_tx, render_tx);
    let app = tokio::spawn(app_actor.run(ui_rx, net_resp_rx));

    let code = match args.command {
        Some(line) => run_once(line, ui_tx, &mut render_rx, echo).await?,
        None => {
            run_repl(ui_tx, &mut render_rx, echo).await?;
            ExitCode::SUCCESS
        }
    };

    let state = app.await.context("App actor panicked")?;
    network.await.context("Network actor panicked")?;
    tracing::info!(messages = state.log.len(), "Session ended");

    Ok(code)
}

/// Run one command, print its reply, exit non-zero if the reply is an error
async fn run_once(
    line: String,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderEvent>,
    echo: bool,
) -> anyhow::Result<ExitCode> {
    match BuiltIn::from_line(&line) {
        Some(BuiltIn::Help(topic)) => print!("{}", ui::help_for(topic.as_deref())),
        _ => {
            let _ = ui_tx.send(UiEvent::Submit(line));
        }
    }
    let _ = ui_tx.send(UiEvent::Quit);

    let mut failed = false;
    while let Some(event) = render_rx.recv().await {
        if let RenderEvent::Entry { entry, .. } = &event {
            failed |= entry.message.is_error();
        }
        // The pending notice is noise for a single command
        if matches!(event, RenderEvent::Pending { .. }) {
            continue;
        }
        if let Some(text) = ui::render_event(&event, echo) {
            println!("{}", text);
        }
    }

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

/// Read lines until quit or EOF, printing replies as they arrive
async fn run_repl(
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderEvent>,
    echo: bool,
) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut input_open = true;

    println!("{}", ui::help_text());
    prompt()?;

    loop {
        tokio::select! {
            line = lines.next_line(), if input_open => {
                match line.context("Failed to read input")? {
                    Some(line) => match BuiltIn::from_line(&line) {
                        Some(BuiltIn::Quit) => {
                            let _ = ui_tx.send(UiEvent::Quit);
                            input_open = false;
                        }
                        Some(BuiltIn::Help(topic)) => {
                            print!("{}", ui::help_for(topic.as_deref()));
                            prompt()?;
                        }
                        None if line.trim().is_empty() => prompt()?,
                        None => {
                            let _ = ui_tx.send(UiEvent::Submit(line));
                        }
                    },
                    None => {
                        let _ = ui_tx.send(UiEvent::Quit);
                        input_open = false;
                    }
                }
            }
            event = render_rx.recv() => {
                match event {
                    Some(event) => {
                        if let Some(text) = ui::render_event(&event, echo) {
                            println!("{}", text);
                            if input_open {
                                prompt()?;
                            }
                        }
                    }
                    // App actor finished: input closed and nothing in flight
                    None => break,
                }
            }
        }
    }

    Ok(())
}

fn prompt() -> anyhow::Result<()> {
    print!("{}", PROMPT);
    io::stdout().flush().context("Failed to flush stdout")
}
