//! Command-line access to a Freshdesk helpdesk.
//!
//! # Configuration
//!
//! Set the following environment variables (or use a `.env` file):
//!
//! - `FRESHDESK_DOMAIN`: helpdesk subdomain or base URL
//! - `FRESHDESK_API_KEY`: agent API key
//!
//! # Usage
//!
//! ```bash
//! freshdesk tickets
//! freshdesk search "status:2 AND priority:4"
//! freshdesk conversations 42
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use freshdesk::cli::{Cli, Command};
use freshdesk::{config, ApiClient, Query};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();

    // Logs go to stderr, stdout carries records.
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("freshdesk=info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let config = config::Config::from_env().context("Failed to load configuration")?;
    tracing::debug!("Configuration loaded, domain: {}", config.domain);

    let client = ApiClient::new(&config).context("Failed to create Freshdesk client")?;

    if let Err(e) = client.test_connection().await {
        tracing::warn!(error = %e, "Connection test failed, continuing anyway");
    }

    run(&client, cli.command).await
}

async fn run(client: &ApiClient, command: Command) -> Result<()> {
    match command {
        Command::Tickets => {
            let tickets = client.tickets().all().await?.collect_all().await?;
            for ticket in tickets {
                println!("#{}\t{}\t{}", ticket.id, ticket.status, ticket.display_subject());
            }
        }
        Command::Companies => {
            for company in client.companies().all().await? {
                println!("#{}\t{}", company.id, company.name);
            }
        }
        Command::Contacts => {
            for user in client.users().all().await? {
                println!("#{}\t{}", user.id, user.display_name());
            }
        }
        Command::Groups => {
            for group in client.groups().all().await? {
                println!("#{}\t{}\t{} agents", group.id, group.name, group.agent_ids.len());
            }
        }
        Command::Me => {
            let agent = client.agents().me().await?;
            println!("#{}\t{}", agent.id, agent.contact.name);
        }
        Command::Search { expression } => {
            let results = client.tickets().search(&Query::raw(expression)).await?;
            if let Some(total) = results.total() {
                if (results.len() as u64) < total {
                    tracing::warn!(shown = results.len(), total, "Search results are incomplete");
                }
            }
            for ticket in &results {
                println!("#{}\t{}\t{}", ticket.id, ticket.status, ticket.display_subject());
            }
        }
        Command::Conversations { ticket_id } => {
            for conversation in client.tickets().conversations(ticket_id).await? {
                println!(
                    "#{}\t{}\t{}",
                    conversation.id,
                    conversation.direction(),
                    conversation.body_text
                );
            }
        }
    }

    Ok(())
}
