//! Set a member's role from the command line.
//!
//! The first Coordenador has to be created this way, since self-registration
//! always produces an Agente.
//!
//! ```text
//! promote_member MARIA
//! promote_member MARIA --role agente
//! ```

use anyhow::{bail, Context, Result};
use clap::Parser;
use server_core::config::database_url_from_env;
use server_core::domains::member::models::{Member, Role};
use sqlx::postgres::PgPoolOptions;

#[derive(Parser)]
#[command(name = "promote_member")]
#[command(about = "Change the role of a registered member")]
struct Cli {
    /// Login of the member (case-insensitive)
    login: String,

    /// New role: Coordenador or Agente
    #[arg(long, default_value = "Coordenador")]
    role: Role,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,sqlx=warn".into()),
        )
        .init();

    let cli = Cli::parse();
    let database_url = database_url_from_env()?;

    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    let Some(member) = Member::set_role_by_login(&cli.login, cli.role, &pool)
        .await
        .context("Failed to update role")?
    else {
        bail!("No member with login {}", cli.login.trim());
    };

    tracing::info!(
        member_id = %member.id,
        login = %member.login,
        role = %member.role,
        "Role updated"
    );
    println!("{} ({}) agora é {}", member.full_name, member.login, member.role);

    Ok(())
}
