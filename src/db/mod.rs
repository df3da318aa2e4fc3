mod schema;

use anyhow::{Context, Result};
use chrono::Local;
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};
use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;

use crate::models::{parse_date, Budget, Category, Month, Transaction, DATE_FORMAT};

const TRANSACTION_COLUMNS: &str = "id, date, description, amount, category";

pub(crate) struct Database {
    conn: Connection,
}

impl Database {
    pub(crate) fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open database: {}", path.display()))?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")
            .context("Failed to set database pragmas")?;
        let db = Self { conn };
        db.migrate().context("Database migration failed")?;
        Ok(db)
    }

    #[cfg(test)]
    pub(crate) fn open_in_memory() -> Result<Self> {
        let db = Self {
            conn: Connection::open_in_memory()?,
        };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<()> {
        let versioned: bool = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
            [],
            |row| row.get(0),
        )?;

        if !versioned {
            self.conn.execute_batch(schema::SCHEMA_V1)?;
            self.conn.execute(
                "INSERT INTO schema_version (version) VALUES (?1)",
                params![schema::CURRENT_VERSION],
            )?;
            tracing::info!(version = schema::CURRENT_VERSION, "created database schema");
            return Ok(());
        }

        let found: i32 = self
            .conn
            .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
                row.get(0)
            })
            .optional()?
            .unwrap_or(0);

        for &(from, sql) in schema::MIGRATIONS {
            if found <= from {
                self.conn.execute_batch(sql)?;
            }
        }
        if found < schema::CURRENT_VERSION {
            self.conn.execute(
                "UPDATE schema_version SET version = ?1",
                params![schema::CURRENT_VERSION],
            )?;
            tracing::info!(from = found, to = schema::CURRENT_VERSION, "migrated database");
        }
        Ok(())
    }

    // ── Transactions ──────────────────────────────────────────

    /// Every stored transaction, newest date first.
    pub(crate) fn find_transactions(&self) -> Result<Vec<Transaction>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {TRANSACTION_COLUMNS} FROM transactions ORDER BY date DESC, id DESC"
        ))?;
        let rows = stmt.query_map([], transaction_from_row)?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .context("Failed to load transactions")
    }

    pub(crate) fn find_transactions_in(&self, month: Month) -> Result<Vec<Transaction>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {TRANSACTION_COLUMNS} FROM transactions
             WHERE date LIKE ?1
             ORDER BY date DESC, id DESC"
        ))?;
        let rows = stmt.query_map(params![format!("{month}-%")], transaction_from_row)?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .with_context(|| format!("Failed to load transactions for {month}"))
    }

    pub(crate) fn find_transaction(&self, id: i64) -> Result<Option<Transaction>> {
        self.conn
            .query_row(
                &format!("SELECT {TRANSACTION_COLUMNS} FROM transactions WHERE id = ?1"),
                params![id],
                transaction_from_row,
            )
            .optional()
            .with_context(|| format!("Failed to load transaction {id}"))
    }

    pub(crate) fn insert_transaction(&self, txn: &Transaction) -> Result<i64> {
        self.conn
            .execute(
                "INSERT INTO transactions (date, description, amount, category, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    txn.date.format(DATE_FORMAT).to_string(),
                    txn.description,
                    txn.amount.to_string(),
                    txn.category.as_str(),
                    Local::now().format("%Y-%m-%dT%H:%M:%S").to_string(),
                ],
            )
            .context("Failed to save transaction")?;
        let id = self.conn.last_insert_rowid();
        tracing::debug!(id, category = %txn.category, amount = %txn.amount, "inserted transaction");
        Ok(id)
    }

    /// Overwrite every field of an existing transaction. `false` if `id`
    /// does not exist.
    pub(crate) fn replace_transaction(&self, id: i64, txn: &Transaction) -> Result<bool> {
        let changed = self
            .conn
            .execute(
                "UPDATE transactions SET date = ?1, description = ?2, amount = ?3, category = ?4
                 WHERE id = ?5",
                params![
                    txn.date.format(DATE_FORMAT).to_string(),
                    txn.description,
                    txn.amount.to_string(),
                    txn.category.as_str(),
                    id,
                ],
            )
            .with_context(|| format!("Failed to update transaction {id}"))?;
        tracing::debug!(id, found = changed > 0, "replaced transaction");
        Ok(changed > 0)
    }

    pub(crate) fn delete_transaction(&self, id: i64) -> Result<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM transactions WHERE id = ?1", params![id])
            .with_context(|| format!("Failed to delete transaction {id}"))?;
        tracing::debug!(id, found = changed > 0, "deleted transaction");
        Ok(changed > 0)
    }

    // ── Budgets ───────────────────────────────────────────────

    /// The month's budgets in the order they were first created.
    pub(crate) fn find_budgets(&self, month: Month) -> Result<Vec<Budget>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, category, month, amount FROM budgets WHERE month = ?1 ORDER BY id",
        )?;
        let rows = stmt.query_map(params![month.to_string()], budget_from_row)?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .with_context(|| format!("Failed to load budgets for {month}"))
    }

    /// Create the (category, month) budget, or overwrite its amount if it
    /// exists. Returns the id of the stored record.
    pub(crate) fn upsert_budget(&self, budget: &Budget) -> Result<i64> {
        let month = budget.month.to_string();
        self.conn
            .execute(
                "INSERT INTO budgets (category, month, amount)
                 VALUES (?1, ?2, ?3)
                 ON CONFLICT(category, month) DO UPDATE SET amount = excluded.amount",
                params![budget.category.as_str(), month, budget.amount.to_string()],
            )
            .with_context(|| format!("Failed to save {} budget for {month}", budget.category))?;
        // last_insert_rowid is stale when the conflict branch ran.
        let id: i64 = self.conn.query_row(
            "SELECT id FROM budgets WHERE category = ?1 AND month = ?2",
            params![budget.category.as_str(), month],
            |row| row.get(0),
        )?;
        tracing::debug!(id, category = %budget.category, %month, amount = %budget.amount, "upserted budget");
        Ok(id)
    }
}

fn transaction_from_row(row: &Row<'_>) -> rusqlite::Result<Transaction> {
    let date: String = row.get(1)?;
    let amount: String = row.get(3)?;
    let category: String = row.get(4)?;
    Ok(Transaction {
        id: Some(row.get(0)?),
        date: parse_date(&date).map_err(|e| bad_column(1, e))?,
        description: row.get(2)?,
        amount: Decimal::from_str(&amount).map_err(|e| bad_column(3, e))?,
        category: Category::from_str(&category).map_err(|e| bad_column(4, e))?,
    })
}

fn budget_from_row(row: &Row<'_>) -> rusqlite::Result<Budget> {
    let category: String = row.get(1)?;
    let month: String = row.get(2)?;
    let amount: String = row.get(3)?;
    Ok(Budget {
        id: Some(row.get(0)?),
        category: Category::from_str(&category).map_err(|e| bad_column(1, e))?,
        month: Month::from_str(&month).map_err(|e| bad_column(2, e))?,
        amount: Decimal::from_str(&amount).map_err(|e| bad_column(3, e))?,
    })
}

/// A stored TEXT value that no longer parses into its model type.
fn bad_column<E>(idx: usize, err: E) -> rusqlite::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(err))
}
