//! Digital Music Store chat client
//!
//! Entry point for the interactive terminal session.

use mimalloc::MiMalloc;

/// Global allocator for improved performance (M-MIMALLOC-APPS).
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use std::io::Write as _;

use anyhow::Result;
use dotenvy::dotenv;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use music_store_chat::api::Client;
use music_store_chat::config::AppConfig;
use music_store_chat::session::{ChatSession, SendOutcome};
use music_store_chat::ui;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing (M-LOG-STRUCTURED); quiet by default so log lines
    // don't interleave with the transcript.
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(EnvFilter::from_default_env().add_directive("warn".parse()?))
        .init();

    // Load .env (if present)
    let _ = dotenv();

    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    info!(
        name: "config.loaded",
        base_url = %config.api.base_url,
        customer_id = ?config.chat.customer_id,
        "Configuration loaded"
    );

    let client = match Client::new(&config.api.base_url) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    run(&client, &config).await
}

/// Interactive loop: read a line, dispatch a command or send a chat turn,
/// print whatever the turn appended.
async fn run(client: &Client, config: &AppConfig) -> Result<()> {
    let session = ChatSession::new(config.chat.customer_id.clone());

    print_header(client);
    print!(
        "{}",
        ui::list::render_transcript(&session.messages(), false, None)
    );

    // Index of the first transcript entry not yet printed.
    let mut rendered = 0_usize;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        prompt()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };

        match line.trim() {
            "" => {}
            "/quit" | "/exit" => break,
            "/help" => print_help(),
            "/clear" => {
                session.clear();
                rendered = 0;
                print!(
                    "{}",
                    ui::list::render_transcript(&session.messages(), false, None)
                );
            }
            "/health" => match client.health_check().await {
                Ok(health) => println!("service status: {}", health.status),
                Err(e) => println!("{}", ui::list::error_banner(&e.to_string())),
            },
            "/history" => show_history(client, &session).await,
            "/delete" => delete_conversation(client, &session, &mut rendered).await,
            input => {
                println!("{}", ui::loading::loading_indicator());
                let outcome = session.send(client, input).await;

                let messages = session.messages();
                for message in &messages[rendered..] {
                    print!("{}", ui::message::render_message(message));
                    println!();
                }
                rendered = messages.len();

                if outcome == SendOutcome::Errored
                    && let Some(error) = session.error()
                {
                    println!("{}", ui::list::error_banner(&error));
                }
            }
        }
    }

    Ok(())
}

/// `/history` - fetch the server-side record of the current conversation.
async fn show_history(client: &Client, session: &ChatSession) {
    let Some(thread_id) = session.thread_id() else {
        println!("No conversation yet.");
        return;
    };

    match client.get_conversation(&thread_id).await {
        Ok(history) => {
            info!(
                name: "conversation.fetched",
                thread_id = %history.thread_id,
                message_count = history.messages.len(),
                "Fetched conversation"
            );
            print!(
                "{}",
                ui::list::render_transcript(&history.messages, false, None)
            );
        }
        Err(e) => println!("{}", ui::list::error_banner(&e.to_string())),
    }
}

/// `/delete` - delete the server-side conversation, then reset locally.
async fn delete_conversation(client: &Client, session: &ChatSession, rendered: &mut usize) {
    let Some(thread_id) = session.thread_id() else {
        println!("No conversation to delete.");
        return;
    };

    match client.delete_conversation(&thread_id).await {
        Ok(()) => {
            info!(name: "conversation.deleted", thread_id = %thread_id, "Deleted conversation");
            session.clear();
            *rendered = 0;
            println!("Conversation deleted.");
        }
        Err(e) => println!("{}", ui::list::error_banner(&e.to_string())),
    }
}

fn print_header(client: &Client) {
    println!("==============================================");
    println!("  Digital Music Store AI Agent");
    println!("  Ask me about music catalog and invoices!");
    println!("==============================================");
    println!("  backend: {}", client.base_url());
    println!("  type /help for commands");
    println!();
}

fn print_help() {
    println!("Commands:");
    println!("  /history   show the server-side conversation record");
    println!("  /delete    delete the conversation on the server and reset");
    println!("  /clear     reset the local transcript");
    println!("  /health    check that the agent service is up");
    println!("  /quit      exit (also /exit)");
    println!("Anything else is sent to the agent as a chat message.");
}

fn prompt() -> Result<()> {
    print!("you> ");
    std::io::stdout().flush()?;
    Ok(())
}
