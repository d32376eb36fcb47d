use crate::domain::ports::UserStore;
use crate::domain::user::{Email, User};
use crate::error::{AdminError, Result};
use async_trait::async_trait;
use rocksdb::{ColumnFamily, ColumnFamilyDescriptor, DB, Options};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Column Family for storing user records, keyed by email.
pub const CF_USERS: &str = "users";

/// A persistent user store backed by RocksDB.
///
/// Users are stored as JSON under their email. The lookup and the put of a
/// `create` run under a shared mutex, which makes the uniqueness check atomic
/// for every clone of this store within the process.
#[derive(Clone)]
pub struct RocksDBUserStore {
    db: Arc<DB>,
    write_guard: Arc<Mutex<()>>,
}

impl RocksDBUserStore {
    /// Opens or creates a RocksDB instance at the specified path.
    ///
    /// Ensures that the `users` column family exists.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_users = ColumnFamilyDescriptor::new(CF_USERS, Options::default());
        let db = DB::open_cf_descriptors(&opts, path, vec![cf_users])?;

        Ok(Self {
            db: Arc::new(db),
            write_guard: Arc::new(Mutex::new(())),
        })
    }

    fn users_cf(&self) -> Result<&ColumnFamily> {
        self.db.cf_handle(CF_USERS).ok_or_else(|| {
            AdminError::Internal(Box::new(std::io::Error::other(
                "Users column family not found",
            )))
        })
    }
}

#[async_trait]
impl UserStore for RocksDBUserStore {
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>> {
        let cf = self.users_cf()?;
        match self.db.get_cf(cf, email.as_str().as_bytes())? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, user: User) -> Result<User> {
        let _guard = self.write_guard.lock().await;
        let cf = self.users_cf()?;
        let key = user.email.as_str().as_bytes();

        if self.db.get_pinned_cf(cf, key)?.is_some() {
            return Err(AdminError::DuplicateEmail(user.email.to_string()));
        }

        let value = serde_json::to_vec(&user)?;
        self.db.put_cf(cf, key, value)?;
        Ok(user)
    }
}
