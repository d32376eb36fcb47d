use crate::application::registry::{
    Action, ActionContext, ActionDefinition, InputKind, InputSpec,
};
use crate::application::validation::unique_email;
use crate::domain::ports::Io;
use crate::domain::user::{Email, User};
use crate::error::Result;
use async_trait::async_trait;

pub const SUCCESS_MESSAGE: &str = "User created successfully";
pub const REQUIRED_MESSAGE: &str = "This field is required.";
const NAME_LABEL: &str = "Name";
const EMAIL_LABEL: &str = "Email";

/// Collects a name and an unused email, then inserts the user.
///
/// The duplicate check happens while the form is filled in; the store's own
/// uniqueness check on `create` still applies, and a loss there propagates.
pub struct CreateUser {
    definition: ActionDefinition,
}

impl CreateUser {
    pub fn new() -> Self {
        Self {
            definition: ActionDefinition {
                slug: "create-user",
                name: "Create User",
                description: "Create a new user",
                inputs: vec![
                    InputSpec {
                        label: NAME_LABEL,
                        kind: InputKind::Text,
                    },
                    InputSpec {
                        label: EMAIL_LABEL,
                        kind: InputKind::Email,
                    },
                ],
            },
        }
    }

    async fn prompt_name(io: &dyn Io) -> Result<String> {
        loop {
            let answer = io.text(NAME_LABEL).await?;
            let name = answer.trim();
            if !name.is_empty() {
                return Ok(name.to_string());
            }
            io.field_error(NAME_LABEL, REQUIRED_MESSAGE).await?;
        }
    }

    async fn prompt_unused_email(ctx: &ActionContext, io: &dyn Io) -> Result<Email> {
        loop {
            let candidate = io.email(EMAIL_LABEL).await?;
            let rejection = unique_email(&candidate, |email| async move {
                ctx.users.find_by_email(&email).await
            })
            .await?;

            match rejection {
                None => return Ok(candidate),
                Some(message) => {
                    tracing::debug!(email = %candidate, "email rejected by validation");
                    io.field_error(EMAIL_LABEL, &message).await?;
                }
            }
        }
    }
}

impl Default for CreateUser {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Action for CreateUser {
    fn definition(&self) -> &ActionDefinition {
        &self.definition
    }

    async fn run(&self, ctx: &ActionContext, io: &dyn Io) -> Result<()> {
        let name = Self::prompt_name(io).await?;
        let email = Self::prompt_unused_email(ctx, io).await?;

        let user = ctx.users.create(User::new(name, email)).await?;
        tracing::info!(email = %user.email, "user created");

        io.markdown(SUCCESS_MESSAGE).await
    }
}
