use crate::application::registry::{ActionContext, ActionDefinition, ActionRegistry};
use crate::domain::ports::Io;
use crate::error::{AdminError, Result};
use tracing::Instrument;

const QUIT_COMMANDS: [&str; 2] = ["quit", "exit"];

/// Runs registered actions on behalf of a user session.
///
/// The host owns the default error surface: an action that fails is reported
/// through [`Io::error`] and the session continues.
pub struct Host {
    api_key: String,
    registry: ActionRegistry,
    ctx: ActionContext,
}

impl Host {
    pub fn new(api_key: impl Into<String>, registry: ActionRegistry, ctx: ActionContext) -> Self {
        Self {
            api_key: api_key.into(),
            registry,
            ctx,
        }
    }

    /// Resolves a menu selection by index (1-based), slug or name.
    pub fn resolve(&self, selection: &str) -> Option<&ActionDefinition> {
        let selection = selection.trim();
        if let Ok(index) = selection.parse::<usize>() {
            return index
                .checked_sub(1)
                .and_then(|i| self.registry.definitions().nth(i));
        }
        self.registry.definitions().find(|d| {
            d.slug.eq_ignore_ascii_case(selection) || d.name.eq_ignore_ascii_case(selection)
        })
    }

    fn ensure_api_key(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(AdminError::Config("host API key must not be empty".to_string()));
        }
        Ok(())
    }

    /// Runs one action by slug, propagating its error.
    pub async fn run(&self, slug: &str, io: &dyn Io) -> Result<()> {
        self.ensure_api_key()?;
        self.run_action(slug, io).await
    }

    async fn run_action(&self, slug: &str, io: &dyn Io) -> Result<()> {
        let span = tracing::info_span!("action", slug);
        async {
            tracing::info!("action started");
            self.registry.run(slug, &self.ctx, io).await?;
            tracing::info!("action completed");
            Ok(())
        }
        .instrument(span)
        .await
    }

    /// Serves actions until the user quits or input ends.
    pub async fn listen(&self, io: &dyn Io) -> Result<()> {
        self.ensure_api_key()?;
        tracing::info!(actions = self.registry.len(), "host listening");

        loop {
            io.markdown(&self.menu()).await?;
            let selection = match io.text("Action").await {
                Ok(selection) => selection,
                Err(AdminError::InputClosed) => break,
                Err(e) => return Err(e),
            };
            let selection = selection.trim();
            if selection.is_empty() {
                continue;
            }
            if QUIT_COMMANDS.iter().any(|q| q.eq_ignore_ascii_case(selection)) {
                break;
            }

            let Some(slug) = self.resolve(selection).map(|d| d.slug) else {
                io.error(&AdminError::UnknownAction(selection.to_string()).to_string())
                    .await?;
                continue;
            };

            match self.run_action(slug, io).await {
                Ok(()) => {}
                Err(AdminError::InputClosed) => break,
                Err(e) => {
                    tracing::error!(slug, error = %e, "action failed");
                    io.error(&e.to_string()).await?;
                }
            }
        }

        tracing::info!("host stopped");
        Ok(())
    }

    pub fn menu(&self) -> String {
        let mut menu = String::from("Available actions:");
        for (i, def) in self.registry.definitions().enumerate() {
            menu.push_str(&format!(
                "\n{}. {} ({}): {}",
                i + 1,
                def.name,
                def.slug,
                def.description
            ));
        }
        menu
    }
}
