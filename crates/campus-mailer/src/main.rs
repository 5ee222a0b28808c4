//! Credential audit and test mail delivery CLI.
//!
//! `diagnose` reports which credentials resolved to real values;
//! `send-test` pushes one message through the chosen transport so a
//! deployment can be verified end to end.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use campus_config::{CredentialResolver, EnvOverrides, audit};
use campus_mailer::{MailerConfig, Message, ScriptMailer, SendGridMailer};
use campus_std::SystemEnv;

#[derive(Parser, Debug)]
#[command(name = "campus-mailer")]
#[command(about = "Credential audit and test mail delivery", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Audit the resolved credentials. Exits non-zero unless every key
    /// has a real, well-formed value.
    Diagnose {
        /// Emit the report as JSON instead of a table.
        #[arg(long)]
        json: bool,
        /// Also verify the SendGrid key against the live API.
        #[arg(long)]
        live: bool,
    },
    /// Send a test message through the chosen transport.
    SendTest {
        /// Recipient address.
        #[arg(long)]
        to: String,
        #[arg(long, default_value = "Campus test message")]
        subject: String,
        #[arg(long, default_value = "This is a test message from the campus mail tooling.")]
        body: String,
        #[arg(long, value_enum, default_value = "sendgrid")]
        via: Transport,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Transport {
    Sendgrid,
    Script,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    // Compiled values first, CAMPUS_* process env as the runtime override.
    let creds = CredentialResolver::compiled()
        .with_overrides(EnvOverrides::new(SystemEnv))
        .load();
    let config = MailerConfig::from_env(&SystemEnv);

    match args.command {
        Command::Diagnose { json, live } => {
            let report = audit(&creds);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{report}");
            }

            if live {
                match SendGridMailer::new(&config, &creds) {
                    Ok(mailer) => {
                        let accepted = mailer.verify_key().await?;
                        println!("sendgrid key accepted by api: {accepted}");
                    }
                    Err(e) => println!("live check skipped: {e}"),
                }
            }

            if !report.is_fully_configured() {
                std::process::exit(1);
            }
        }
        Command::SendTest {
            to,
            subject,
            body,
            via,
        } => {
            let message = Message::new(to, subject, body);
            match via {
                Transport::Sendgrid => {
                    SendGridMailer::new(&config, &creds)?.send(&message).await?;
                }
                Transport::Script => {
                    ScriptMailer::new(&config, &creds)?.send(&message).await?;
                }
            }
            info!(to = message.to(), "test message sent");
        }
    }

    Ok(())
}
