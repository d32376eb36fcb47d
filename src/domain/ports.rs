use super::charge::Charge;
use super::user::{Email, User};
use crate::error::Result;
use async_trait::async_trait;

/// The user collection of the backing data store.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>>;
    /// Inserts a user. Fails with `DuplicateEmail` if the email is taken.
    async fn create(&self, user: User) -> Result<User>;
}

/// Read access to the payment provider's charges.
#[async_trait]
pub trait PaymentClient: Send + Sync {
    /// Returns at most `limit` charges, newest first as ordered by the provider.
    async fn list_charges(&self, limit: u8) -> Result<Vec<Charge>>;
}

/// A rendered table: column headers plus rows of display strings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Input and display primitives the host offers to a running action.
#[async_trait]
pub trait Io: Send + Sync {
    async fn text(&self, label: &str) -> Result<String>;
    /// Prompts until the answer is a syntactically valid email.
    async fn email(&self, label: &str) -> Result<Email>;
    /// Reports a validation message inline on the given field.
    async fn field_error(&self, label: &str, message: &str) -> Result<()>;
    async fn markdown(&self, text: &str) -> Result<()>;
    async fn table(&self, title: &str, table: &Table) -> Result<()>;
    /// Generic error presentation used by the host.
    async fn error(&self, message: &str) -> Result<()>;
}

pub type UserStoreBox = Box<dyn UserStore>;
pub type PaymentClientBox = Box<dyn PaymentClient>;
