use anyhow::Context;
use clap::{Parser, Subcommand};
use migration::{Migrator, MigratorTrait};
use sea_orm::Database;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use protraveller::app::AppState;
use protraveller::auth::adapter::outgoing::security::build_password_hasher;
use protraveller::auth::application::ports::incoming::use_cases::CreateUserCommand;
use protraveller::config::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "protraveller")]
#[command(about = "ProTraveller database management", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Apply pending schema migrations
    Migrate,

    /// Create a staff account with every permission
    CreateSuperuser {
        #[arg(long, value_name = "EMAIL")]
        email: String,

        #[arg(long, value_name = "USERNAME")]
        username: String,

        /// Must start with "+" followed by digits
        #[arg(long, value_name = "PHONE")]
        phone_number: Option<String>,

        #[arg(long, env = "PROTRAVELLER_SUPERUSER_PASSWORD", hide_env_values = true)]
        password: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load().context("loading configuration")?;

    let db = Database::connect(config.database.connect_options())
        .await
        .context("connecting to the database")?;

    match cli.command {
        Command::Migrate => {
            Migrator::up(&db, None).await.context("applying migrations")?;
            info!("Migrations applied");
        }
        Command::CreateSuperuser {
            email,
            username,
            phone_number,
            password,
        } => {
            let hasher = build_password_hasher(&config.hasher)?;
            let state = AppState::new(Arc::new(db), hasher);

            let mut command = CreateUserCommand::new(email, username).with_password(password);
            if let Some(phone_number) = phone_number {
                command = command.with_phone_number(phone_number);
            }

            let user = state.auth.factory.create_superuser(command).await?;
            info!(user_id = %user.id, username = %user.username, "Superuser created");
        }
    }

    Ok(())
}
