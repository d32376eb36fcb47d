use crate::application::registry::{Action, ActionContext, ActionDefinition};
use crate::domain::charge::{Charge, TransactionRow};
use crate::domain::format::{format_currency, format_date};
use crate::domain::ports::{Io, Table};
use crate::error::Result;
use async_trait::async_trait;

/// Page size requested from the provider. Only the first page is shown.
pub const RECENT_CHARGES_LIMIT: u8 = 10;
pub const TABLE_TITLE: &str = "Recent Transactions";
pub const COLUMNS: [&str; 3] = ["id", "amount", "date"];

/// Shows the most recent charges as an `id, amount, date` table.
pub struct ListTransactions {
    definition: ActionDefinition,
}

impl ListTransactions {
    pub fn new() -> Self {
        Self {
            definition: ActionDefinition {
                slug: "list-transactions",
                name: "List Transactions",
                description: "List the most recent Stripe transactions",
                inputs: Vec::new(),
            },
        }
    }
}

impl Default for ListTransactions {
    fn default() -> Self {
        Self::new()
    }
}

pub fn to_row(charge: &Charge) -> TransactionRow {
    TransactionRow {
        id: charge.id.clone(),
        amount: format_currency(charge.amount),
        date: format_date(charge.created),
    }
}

pub fn to_table(rows: &[TransactionRow]) -> Table {
    Table {
        columns: COLUMNS.iter().map(|c| c.to_string()).collect(),
        rows: rows
            .iter()
            .map(|row| vec![row.id.clone(), row.amount.clone(), row.date.clone()])
            .collect(),
    }
}

#[async_trait]
impl Action for ListTransactions {
    fn definition(&self) -> &ActionDefinition {
        &self.definition
    }

    async fn run(&self, ctx: &ActionContext, io: &dyn Io) -> Result<()> {
        let charges = ctx.payments.list_charges(RECENT_CHARGES_LIMIT).await?;
        tracing::debug!(count = charges.len(), "fetched recent charges");

        let rows: Vec<TransactionRow> = charges.iter().map(to_row).collect();
        io.table(TABLE_TITLE, &to_table(&rows)).await
    }
}
