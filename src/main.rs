use admin_actions::application::registry::{ActionContext, ActionRegistry};
use admin_actions::config::{Command, Config};
use admin_actions::domain::ports::Io;
use admin_actions::infrastructure::store::open_user_store;
use admin_actions::infrastructure::stripe::StripeClient;
use admin_actions::interfaces::console::ConsoleIo;
use admin_actions::interfaces::host::Host;
use admin_actions::telemetry;
use clap::Parser;
use miette::{IntoDiagnostic, Result};

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine; variables already in the environment win.
    dotenvy::dotenv().ok();
    let config = Config::parse();
    telemetry::init(config.log_format);

    let users = open_user_store(config.db_path.as_deref()).into_diagnostic()?;
    let stripe = StripeClient::new(config.stripe()).into_diagnostic()?;
    tracing::info!(stripe_test_mode = stripe.is_test_mode(), "payment client configured");

    let registry = ActionRegistry::default_actions().into_diagnostic()?;
    let ctx = ActionContext::new(users, Box::new(stripe));
    let host = Host::new(config.api_key.clone(), registry, ctx);
    let io = ConsoleIo::stdio();

    match config.command() {
        Command::Listen => host.listen(&io).await.into_diagnostic()?,
        Command::List => {
            let menu = host.menu();
            io.markdown(&menu).await.into_diagnostic()?;
        }
        Command::Run { slug } => host.run(&slug, &io).await.into_diagnostic()?,
    }

    Ok(())
}
