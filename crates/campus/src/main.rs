// SPDX-FileCopyrightText: 2026 Campus Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Campus - tiered, cached answers for university students.
//!
//! This is the binary entry point for the Campus assistant.

mod cli;

use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use campus_assistant::{AssistantService, ChatRequest};
use campus_config::CampusConfig;
use campus_core::redact::mask_secret;
use campus_core::{ChatReply, CompletionProvider, ConversationMessage};
use campus_openai::OpenAiProvider;
use clap::Parser;
use tracing::{info, warn};

use crate::cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match campus_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            campus_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.agent.log_level);

    let result = match cli.command {
        Some(Commands::Ask(args)) => {
            let history = match &args.history {
                Some(path) => read_history(path),
                None => Ok(Vec::new()),
            };
            match history {
                Ok(history) => answer(&config, args.into_request(history)).await,
                Err(e) => Err(e),
            }
        }
        Some(Commands::Chat { path }) => match read_request(path.as_deref()) {
            Ok(request) => answer(&config, request).await,
            Err(e) => Err(e),
        },
        Some(Commands::Config) => print_config(&config),
        None => {
            println!("campus: use --help for available commands");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("campus: {e}");
        std::process::exit(1);
    }
}

async fn answer(config: &CampusConfig, request: ChatRequest) -> Result<(), String> {
    let service = AssistantService::from_config(config, build_provider(config));
    let reply = service.generate(request).await;
    print_reply(&reply)
}

/// The configured provider, or `None` when no credential is set.
fn build_provider(config: &CampusConfig) -> Option<Arc<dyn CompletionProvider>> {
    config.ai.credential()?;
    match OpenAiProvider::new(&config.ai) {
        Ok(provider) => {
            info!(agent = %config.agent.name, "AI provider ready");
            Some(Arc::new(provider))
        }
        Err(e) => {
            warn!(error = %e, "failed to initialize AI provider");
            None
        }
    }
}

fn read_history(path: &Path) -> Result<Vec<ConversationMessage>, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read history {}: {e}", path.display()))?;
    serde_json::from_str(&text).map_err(|e| format!("invalid history {}: {e}", path.display()))
}

fn read_request(path: Option<&Path>) -> Result<ChatRequest, String> {
    let text = match path {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read request {}: {e}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| format!("cannot read stdin: {e}"))?;
            buf
        }
    };
    serde_json::from_str(&text).map_err(|e| format!("invalid chat request: {e}"))
}

fn print_reply(reply: &ChatReply) -> Result<(), String> {
    let json = serde_json::to_string_pretty(reply).map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}

fn print_config(config: &CampusConfig) -> Result<(), String> {
    let mut shown = config.clone();
    shown.ai.api_key = shown.ai.api_key.as_deref().map(mask_secret);
    let text = toml::to_string_pretty(&shown).map_err(|e| e.to_string())?;
    print!("{text}");
    Ok(())
}

/// Initialize the tracing subscriber. `RUST_LOG` wins over the config level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("campus={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .init();
}
