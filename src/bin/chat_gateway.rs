//! chat-gateway: run any gateway persona from the command line.
//!
//! Usage:
//!   chat-gateway career "Where did you intern?"
//!   chat-gateway explain --language rust --file src/lib.rs "What does this do?"
//!   chat-gateway inquiry --audience recruiter "Open to full-time roles?"
//!   chat-gateway document notes.md "Summarize the key points"
//!   chat-gateway probe
//!
//! Configuration comes from the environment (see `chat_gateway::config`);
//! `.env.local` and `.env` in the working directory are loaded first.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use chat_gateway::{Audience, ChatGateway, Document, GatewayConfig, Profile};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "chat-gateway")]
#[command(about = "Ask the portfolio chat personas a question", long_about = None)]
#[command(version)]
struct Cli {
    /// YAML file overriding the built-in owner profile
    #[arg(long, global = true)]
    profile: Option<PathBuf>,

    /// Completion endpoint URL
    #[arg(long, global = true, env = "CHAT_GATEWAY_ENDPOINT")]
    endpoint: Option<String>,

    /// Model identifier
    #[arg(long, global = true, env = "CHAT_GATEWAY_MODEL")]
    model: Option<String>,

    /// HTTP timeout in seconds
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Ask about the owner's background and career
    Career { question: String },

    /// Explain a code file or snippet
    Explain {
        /// Language name shown to the tutor
        #[arg(short, long)]
        language: String,
        /// Read code from this file instead of --code
        #[arg(short, long, conflicts_with = "code")]
        file: Option<PathBuf>,
        /// Inline code snippet
        #[arg(short, long)]
        code: Option<String>,
        /// Optional specific question
        question: Option<String>,
    },

    /// Talk technology trends and architecture
    Tech { question: String },

    /// Send a contact inquiry
    Inquiry {
        #[arg(short, long, default_value = "general")]
        audience: Audience,
        inquiry: String,
    },

    /// General assistant
    Chat {
        /// Replacement system prompt
        #[arg(long)]
        context: Option<String>,
        message: String,
    },

    /// Ask a question about a local text document
    Document { path: PathBuf, question: String },

    /// Check that the configured API key works
    Probe,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = GatewayConfig::from_env();
    if let Some(endpoint) = cli.endpoint {
        config = config.with_endpoint(endpoint);
    }
    if let Some(model) = cli.model {
        config = config.with_model(model);
    }
    if let Some(secs) = cli.timeout_secs {
        config = config.with_timeout(Duration::from_secs(secs.max(1)));
    }

    let mut builder = ChatGateway::builder().config(config);
    if let Some(path) = &cli.profile {
        let profile = Profile::from_yaml_file(path)
            .with_context(|| format!("loading profile {}", path.display()))?;
        builder = builder.profile(profile);
    }
    let gateway = builder.build().context("building chat gateway")?;

    let output = match cli.command {
        Command::Career { question } => gateway.tell_career_story(&question).await,
        Command::Explain {
            language,
            file,
            code,
            question,
        } => {
            let code = match (file, code) {
                (Some(path), _) => std::fs::read_to_string(&path)
                    .with_context(|| format!("reading {}", path.display()))?,
                (None, Some(code)) => code,
                (None, None) => anyhow::bail!("either --file or --code is required"),
            };
            gateway
                .explain_code(&code, &language, question.as_deref())
                .await
        }
        Command::Tech { question } => gateway.discuss_tech(&question).await,
        Command::Inquiry { audience, inquiry } => gateway.handle_inquiry(&inquiry, audience).await,
        Command::Chat { context, message } => gateway.chat(&message, context.as_deref()).await,
        Command::Document { path, question } => {
            let document = Document::load(&path)
                .with_context(|| format!("loading document {}", path.display()))?;
            gateway.ask_document(&document, &question).await
        }
        Command::Probe => {
            let report = gateway.probe_credential().await;
            let text = serde_json::to_string_pretty(&report)?;
            if !report.success {
                println!("{text}");
                std::process::exit(1);
            }
            text
        }
    };

    println!("{output}");
    Ok(())
}
