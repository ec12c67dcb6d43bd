//! Table definitions created on startup.
//!
//! Assets reference their owning client and are removed with it.

pub(crate) const CREATE_STATEMENTS: [&str; 3] = [
    "CREATE TABLE IF NOT EXISTS clients (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        email TEXT NOT NULL,
        status BOOLEAN NOT NULL DEFAULT 1
    )",
    "CREATE TABLE IF NOT EXISTS assets (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        value REAL NOT NULL,
        client_id INTEGER NOT NULL REFERENCES clients(id) ON DELETE CASCADE
    )",
    "CREATE INDEX IF NOT EXISTS idx_assets_client_id ON assets(client_id)",
];
