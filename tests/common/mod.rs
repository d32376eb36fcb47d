#![allow(dead_code)]

use admin_actions::domain::charge::Charge;
use admin_actions::domain::ports::{Io, PaymentClient, Table, UserStore};
use admin_actions::domain::user::{Email, User};
use admin_actions::error::{AdminError, Result};
use admin_actions::infrastructure::in_memory::InMemoryUserStore;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Everything an action showed to the user, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Shown {
    Prompt(String),
    FieldError(String, String),
    Markdown(String),
    Table(String, Table),
    Error(String),
}

/// Io double that answers prompts from a script and records all output.
///
/// Running out of answers behaves like a closed console.
#[derive(Clone, Default)]
pub struct ScriptedIo {
    answers: Arc<Mutex<VecDeque<String>>>,
    shown: Arc<Mutex<Vec<Shown>>>,
}

impl ScriptedIo {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: Arc::new(Mutex::new(answers.into_iter().map(Into::into).collect())),
            shown: Arc::default(),
        }
    }

    pub fn shown(&self) -> Vec<Shown> {
        self.shown.lock().unwrap().clone()
    }

    pub fn markdowns(&self) -> Vec<String> {
        self.shown()
            .into_iter()
            .filter_map(|s| match s {
                Shown::Markdown(text) => Some(text),
                _ => None,
            })
            .collect()
    }

    pub fn errors(&self) -> Vec<String> {
        self.shown()
            .into_iter()
            .filter_map(|s| match s {
                Shown::Error(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    pub fn field_errors(&self) -> Vec<(String, String)> {
        self.shown()
            .into_iter()
            .filter_map(|s| match s {
                Shown::FieldError(label, message) => Some((label, message)),
                _ => None,
            })
            .collect()
    }

    pub fn tables(&self) -> Vec<(String, Table)> {
        self.shown()
            .into_iter()
            .filter_map(|s| match s {
                Shown::Table(title, table) => Some((title, table)),
                _ => None,
            })
            .collect()
    }

    fn record(&self, shown: Shown) {
        self.shown.lock().unwrap().push(shown);
    }

    fn answer(&self, label: &str) -> Result<String> {
        self.record(Shown::Prompt(label.to_string()));
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .ok_or(AdminError::InputClosed)
    }
}

#[async_trait]
impl Io for ScriptedIo {
    async fn text(&self, label: &str) -> Result<String> {
        self.answer(label)
    }

    async fn email(&self, label: &str) -> Result<Email> {
        Email::parse(&self.answer(label)?)
    }

    async fn field_error(&self, label: &str, message: &str) -> Result<()> {
        self.record(Shown::FieldError(label.to_string(), message.to_string()));
        Ok(())
    }

    async fn markdown(&self, text: &str) -> Result<()> {
        self.record(Shown::Markdown(text.to_string()));
        Ok(())
    }

    async fn table(&self, title: &str, table: &Table) -> Result<()> {
        self.record(Shown::Table(title.to_string(), table.clone()));
        Ok(())
    }

    async fn error(&self, message: &str) -> Result<()> {
        self.record(Shown::Error(message.to_string()));
        Ok(())
    }
}

/// User store wrapper that counts calls into the inner in-memory store.
#[derive(Clone, Default)]
pub struct RecordingUserStore {
    pub inner: InMemoryUserStore,
    lookups: Arc<AtomicUsize>,
    creates: Arc<AtomicUsize>,
}

impl RecordingUserStore {
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            inner: InMemoryUserStore::with_users(users),
            ..Self::default()
        }
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    pub fn creates(&self) -> usize {
        self.creates.load(Ordering::SeqCst)
    }

    pub async fn all_users(&self) -> Vec<User> {
        self.inner.all_users().await
    }
}

#[async_trait]
impl UserStore for RecordingUserStore {
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.inner.find_by_email(email).await
    }

    async fn create(&self, user: User) -> Result<User> {
        self.creates.fetch_add(1, Ordering::SeqCst);
        self.inner.create(user).await
    }
}

/// Payment client double returning canned charges and recording limits.
#[derive(Clone, Default)]
pub struct FakePaymentClient {
    charges: Vec<Charge>,
    fail_with_status: Option<u16>,
    limits: Arc<Mutex<Vec<u8>>>,
}

impl FakePaymentClient {
    pub fn with_charges(charges: Vec<Charge>) -> Self {
        Self {
            charges,
            ..Self::default()
        }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            fail_with_status: Some(status),
            ..Self::default()
        }
    }

    pub fn limits(&self) -> Vec<u8> {
        self.limits.lock().unwrap().clone()
    }
}

#[async_trait]
impl PaymentClient for FakePaymentClient {
    async fn list_charges(&self, limit: u8) -> Result<Vec<Charge>> {
        self.limits.lock().unwrap().push(limit);
        if let Some(status) = self.fail_with_status {
            return Err(AdminError::Payment {
                status,
                message: "Invalid API Key provided".to_string(),
            });
        }
        Ok(self
            .charges
            .iter()
            .take(usize::from(limit))
            .cloned()
            .collect())
    }
}

pub fn email(value: &str) -> Email {
    Email::parse(value).unwrap()
}

pub fn charge(id: &str, amount: i64, created: i64) -> Charge {
    Charge {
        id: id.to_string(),
        amount,
        created,
    }
}

pub fn charges(count: usize) -> Vec<Charge> {
    (0..count)
        .map(|i| charge(&format!("ch_{i}"), 100 * (i as i64 + 1), 1_700_000_000 - i as i64 * 86_400))
        .collect()
}
