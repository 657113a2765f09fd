use basiq::{AuthLinkParams, AuthScope, Client, Config, UserParams};
use clap::{Parser, Subcommand};
use std::error::Error;

#[derive(Debug, Parser)]
#[command(name = "basiq-cli", about = "CLI wrapper for the Basiq API")]
struct Cli {
    /// API key; falls back to BASIQ_API_KEY env var
    #[arg(long, env = "BASIQ_API_KEY")]
    api_key: String,

    /// Token scope: SERVER_ACCESS or CLIENT_ACCESS
    #[arg(long, env = "BASIQ_SCOPE", default_value = "SERVER_ACCESS")]
    scope: AuthScope,

    /// User the token is bound to (required for CLIENT_ACCESS)
    #[arg(long, env = "BASIQ_USER_ID")]
    token_user: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Create a user
    CreateUser {
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        mobile: Option<String>,
    },
    /// Show a user
    User { user_id: String },
    /// List accounts of a user
    Accounts { user_id: String },
    /// Fetch every transaction of a user
    Transactions { user_id: String },
    /// List connections of a user
    Connections { user_id: String },
    /// Refresh all connections of a user
    Refresh { user_id: String },
    /// Create a consent link for a user
    AuthLink {
        user_id: String,
        #[arg(long)]
        mobile: Option<String>,
    },
    /// Show job progress
    Job { job_id: String },
    /// List supported institution connectors
    Connectors,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut config = Config::new(cli.api_key, cli.scope);
    if let Some(user) = cli.token_user {
        config = config.with_user_id(user);
    }
    let client = Client::new(config)?;

    match cli.command {
        Commands::CreateUser { email, mobile } => {
            let params = UserParams {
                email,
                mobile,
                ..Default::default()
            };
            let user = client.create_user(&params).await?;
            println!("Created user {}", user.id.unwrap_or_default());
        }
        Commands::User { user_id } => {
            let user = client.user(&user_id).await?;
            println!("{user:#?}");
        }
        Commands::Accounts { user_id } => {
            let accounts = client.accounts(&user_id).await?;
            for account in &accounts.data {
                println!(
                    "{} | {} | {} {}",
                    account.id.as_deref().unwrap_or("-"),
                    account.name.as_deref().unwrap_or("-"),
                    account
                        .balance
                        .map(|b| b.to_string())
                        .unwrap_or_else(|| "-".into()),
                    account.currency.as_deref().unwrap_or("")
                );
            }
        }
        Commands::Transactions { user_id } => {
            let transactions = client.transactions(&user_id).await?;
            println!("Fetched {} transactions", transactions.len());
            for txn in &transactions {
                println!(
                    "{} | {} | {}",
                    txn.post_date.as_deref().unwrap_or("-"),
                    txn.amount.map(|a| a.to_string()).unwrap_or_default(),
                    txn.description.as_deref().unwrap_or("")
                );
            }
        }
        Commands::Connections { user_id } => {
            let connections = client.connections(&user_id).await?;
            for conn in &connections.data {
                println!(
                    "{} | {}",
                    conn.id.as_deref().unwrap_or("-"),
                    conn.status.as_deref().unwrap_or("-")
                );
            }
        }
        Commands::Refresh { user_id } => {
            let jobs = client.refresh_connections(&user_id).await?;
            for job in &jobs.data {
                println!("Started job {}", job.id.as_deref().unwrap_or("-"));
            }
        }
        Commands::AuthLink { user_id, mobile } => {
            let link = client
                .create_auth_link(&user_id, &AuthLinkParams { mobile })
                .await?;
            println!("{}", link.links.public.unwrap_or_default());
        }
        Commands::Job { job_id } => {
            let job = client.job(&job_id).await?;
            match job.failed_step() {
                Some(step) => println!("failed at {}", step.title.as_deref().unwrap_or("?")),
                None if job.is_complete() => println!("complete"),
                None => println!("in progress"),
            }
        }
        Commands::Connectors => {
            let connectors = client.connectors().await?;
            for connector in &connectors.data {
                println!(
                    "{} | {}",
                    connector.id.as_deref().unwrap_or("-"),
                    connector.method.as_deref().unwrap_or("-")
                );
            }
        }
    }

    Ok(())
}
