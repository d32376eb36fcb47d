use crate::application::actions::create_user::CreateUser;
use crate::application::actions::list_transactions::ListTransactions;
use crate::domain::ports::{Io, PaymentClientBox, UserStoreBox};
use crate::error::{AdminError, Result};
use async_trait::async_trait;
use std::collections::BTreeMap;

/// Services shared by every action run, built once at startup.
pub struct ActionContext {
    pub users: UserStoreBox,
    pub payments: PaymentClientBox,
}

impl ActionContext {
    pub fn new(users: UserStoreBox, payments: PaymentClientBox) -> Self {
        Self { users, payments }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
}

/// One field an action collects from the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputSpec {
    pub label: &'static str,
    pub kind: InputKind,
}

/// Metadata the host shows for an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionDefinition {
    /// Kebab-case identifier the action is invoked by.
    pub slug: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub inputs: Vec<InputSpec>,
}

#[async_trait]
pub trait Action: Send + Sync {
    fn definition(&self) -> &ActionDefinition;
    async fn run(&self, ctx: &ActionContext, io: &dyn Io) -> Result<()>;
}

pub type ActionBox = Box<dyn Action>;

/// Explicit mapping from slug to action, ordered by slug.
#[derive(Default)]
pub struct ActionRegistry {
    actions: BTreeMap<&'static str, ActionBox>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in admin action.
    pub fn default_actions() -> Result<Self> {
        let mut registry = Self::new();
        registry.register(Box::new(CreateUser::new()))?;
        registry.register(Box::new(ListTransactions::new()))?;
        Ok(registry)
    }

    pub fn register(&mut self, action: ActionBox) -> Result<()> {
        let slug = action.definition().slug;
        if self.actions.contains_key(slug) {
            return Err(AdminError::DuplicateAction(slug.to_string()));
        }
        self.actions.insert(slug, action);
        Ok(())
    }

    pub fn get(&self, slug: &str) -> Option<&dyn Action> {
        self.actions.get(slug).map(|action| action.as_ref())
    }

    pub fn definitions(&self) -> impl Iterator<Item = &ActionDefinition> {
        self.actions.values().map(|action| action.definition())
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub async fn run(&self, slug: &str, ctx: &ActionContext, io: &dyn Io) -> Result<()> {
        let action = self
            .get(slug)
            .ok_or_else(|| AdminError::UnknownAction(slug.to_string()))?;
        action.run(ctx, io).await
    }
}
