use crate::domain::user::{Email, User};
use crate::error::Result;
use std::future::Future;

pub const EMAIL_IN_USE_MESSAGE: &str = "This email is already in use.";

/// Validates that `candidate` is not already taken.
///
/// `lookup` resolves an email to an existing user, if any. Returns the message
/// to show on the field when the email is in use, `None` when it is free.
/// Lookup failures propagate.
pub async fn unique_email<F, Fut>(candidate: &Email, lookup: F) -> Result<Option<String>>
where
    F: FnOnce(Email) -> Fut,
    Fut: Future<Output = Result<Option<User>>>,
{
    match lookup(candidate.clone()).await? {
        Some(_) => Ok(Some(EMAIL_IN_USE_MESSAGE.to_string())),
        None => Ok(None),
    }
}
