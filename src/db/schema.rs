pub(crate) const SCHEMA_V1: &str = r#"
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS transactions (
    id           INTEGER PRIMARY KEY AUTOINCREMENT,
    date         TEXT NOT NULL,
    description  TEXT NOT NULL,
    amount       TEXT NOT NULL,
    category     TEXT NOT NULL
                 CHECK (category IN ('Food', 'Rent', 'Utilities', 'Travel', 'Entertainment')),
    created_at   TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_transactions_date ON transactions(date);

CREATE TABLE IF NOT EXISTS budgets (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    category  TEXT NOT NULL
              CHECK (category IN ('Food', 'Rent', 'Utilities', 'Travel', 'Entertainment')),
    month     TEXT NOT NULL,
    amount    TEXT NOT NULL,
    UNIQUE(category, month)
);
"#;

pub(crate) const CURRENT_VERSION: i32 = 1;

/// Upgrade steps as `(from_version, sql)`; applied in order to any
/// database older than `CURRENT_VERSION`.
pub(crate) const MIGRATIONS: &[(i32, &str)] = &[];
