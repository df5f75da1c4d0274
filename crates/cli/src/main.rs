use std::io::{self, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use campus_agents::{CampusAssistant, ChatInput};
use campus_catalog::{AdminRequest, AdminService};
use campus_core::Module;
use campus_observability::{init_tracing, AppMetrics};
use campus_storage::MemoryStore;
use chrono::Utc;
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "campus")]
#[command(about = "Campus Concierge CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Interactive chat with the assistant
    Chat,
    /// Print the upcoming class schedule
    Schedule,
    /// Print dining venues and today's specials
    Dining,
    /// Print the facilities directory
    Facilities,
    /// Search the library catalog
    Library {
        #[command(subcommand)]
        command: LibraryCommand,
    },
    /// Submit administrative requests
    Admin {
        #[command(subcommand)]
        command: AdminCommand,
    },
}

#[derive(Debug, Subcommand)]
enum LibraryCommand {
    Search {
        query: String,
        #[arg(long, default_value_t = 5)]
        limit: usize,
    },
}

#[derive(Debug, Subcommand)]
enum AdminCommand {
    Request {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, default_value = "other")]
        service: String,
        #[arg(long)]
        details: String,
    },
}

fn main() -> Result<()> {
    init_tracing("campus_cli");
    let cli = Cli::parse();

    let assistant = build_assistant();
    let today = Utc::now().date_naive();

    match cli.command {
        Command::Chat => run_chat(assistant)?,
        Command::Schedule => {
            let view = assistant.module_view(Module::Schedule, today);
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
        Command::Dining => {
            let view = assistant.module_view(Module::Dining, today);
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
        Command::Facilities => {
            let view = assistant.module_view(Module::Facilities, today);
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
        Command::Library { command } => match command {
            LibraryCommand::Search { query, limit } => {
                let mut hits = assistant.search_library(&query);
                hits.truncate(limit);
                println!("{}", serde_json::to_string_pretty(&hits)?);
            }
        },
        Command::Admin { command } => match command {
            AdminCommand::Request {
                name,
                email,
                service,
                details,
            } => {
                let service =
                    AdminService::parse(&service).context("invalid --service value")?;
                let receipt = assistant.submit_admin_request(&AdminRequest {
                    name,
                    email,
                    service,
                    details,
                })?;
                println!("{}", serde_json::to_string_pretty(&receipt)?);
            }
        },
    }

    Ok(())
}

fn run_chat(assistant: CampusAssistant<MemoryStore>) -> Result<()> {
    let mut session_id: Option<String> = None;
    let mut shown_module = Module::Home;

    println!("Campus Concierge chat mode. type 'exit' to quit.");

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }

        let message = line.trim();
        if message.eq_ignore_ascii_case("exit") || message.eq_ignore_ascii_case("quit") {
            break;
        }

        if message.is_empty() {
            continue;
        }

        // "/go <module>" is the menu-click path, bypassing the router.
        if let Some(target) = message.strip_prefix("/go ") {
            let Some(module) = Module::parse(target) else {
                println!("unknown module: {target}");
                continue;
            };

            let sid = session_id.clone().unwrap_or_else(|| "local".to_string());
            assistant.set_active_module(&sid, module);
            session_id = Some(sid);

            shown_module = module;
            let view = assistant.module_view(module, Utc::now().date_naive());
            println!("[{}]", module.as_str());
            println!("{}\n", serde_json::to_string_pretty(&view)?);
            continue;
        }

        let outcome = assistant.handle_chat(ChatInput {
            session_id: session_id.clone(),
            text: message.to_string(),
        })?;
        session_id = Some(outcome.session_id.clone());

        if let Some(reply) = &outcome.reply {
            println!("\n{}\n", reply.reply_text);
        }

        if outcome.active_module != shown_module {
            shown_module = outcome.active_module;
            let view = assistant.module_view(shown_module, Utc::now().date_naive());
            println!("[{}]", shown_module.as_str());
            println!("{}\n", serde_json::to_string_pretty(&view)?);
        }
    }

    Ok(())
}

fn build_assistant() -> CampusAssistant<MemoryStore> {
    CampusAssistant::new(Arc::new(MemoryStore::new()), AppMetrics::shared())
}
