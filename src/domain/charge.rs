use serde::{Deserialize, Serialize};

/// A charge as returned by the payment provider.
///
/// Only the fields the admin actions read are decoded; everything else in the
/// provider payload is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Charge {
    pub id: String,
    /// Amount in the currency's minor unit (cents for USD).
    pub amount: i64,
    /// Creation time in epoch seconds.
    pub created: i64,
}

/// One rendered row of the recent transactions table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub amount: String,
    pub date: String,
}
