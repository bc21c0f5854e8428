//! SQLite-backed processing log.
//!
//! Two tables: `processed_files` holds one row per distinct input filename
//! with the facts last seen for it, and `processing_operations` gets one row
//! per successful invocation.

use std::path::Path;

use log::{debug, warn};
use rasterkit_core::codec::probe_file;
use rasterkit_core::journal::{JournalError, ProcessingLog};
use rusqlite::{params, Connection, OptionalExtension};

fn db_err(context: &str) -> impl Fn(rusqlite::Error) -> JournalError + '_ {
    move |e| JournalError::Database(format!("{context}: {e}"))
}

/// Processing log stored in an SQLite database file.
pub struct SqliteLog {
    conn: Connection,
}

impl SqliteLog {
    /// Open (or create) the database at `path` and make sure the tables exist.
    pub fn open(path: &Path) -> Result<Self, JournalError> {
        let conn = Connection::open(path).map_err(db_err("Could not open database"))?;
        Self::with_connection(conn)
    }

    /// Use an already opened connection, e.g. an in-memory database.
    pub fn with_connection(conn: Connection) -> Result<Self, JournalError> {
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS processed_files (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                filename TEXT NOT NULL,
                file_type TEXT,
                width INTEGER,
                height INTEGER,
                file_size_kb REAL
            );
            CREATE TABLE IF NOT EXISTS processing_operations (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                file_id INTEGER NOT NULL,
                output_filename TEXT NOT NULL,
                operation_command TEXT NOT NULL,
                processed_at DATETIME DEFAULT CURRENT_TIMESTAMP,
                FOREIGN KEY (file_id) REFERENCES processed_files (id)
            );",
        )
        .map_err(db_err("Could not initialize database"))?;
        Ok(Self { conn })
    }

    /// The underlying connection.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

/// Facts stored for an input file. Unreadable files are logged as unknown.
struct FileFacts {
    file_type: String,
    width: u32,
    height: u32,
    size_kb: f64,
}

impl FileFacts {
    fn probe(path: &Path) -> Self {
        match probe_file(path) {
            Ok(info) => Self {
                file_type: info.format.unwrap_or_else(|| "Unknown".to_string()),
                width: info.width,
                height: info.height,
                size_kb: info.file_size as f64 / 1024.0,
            },
            Err(err) => {
                warn!("Could not get file info for logging: {err}");
                Self {
                    file_type: "Unknown".to_string(),
                    width: 0,
                    height: 0,
                    size_kb: 0.0,
                }
            }
        }
    }
}

impl ProcessingLog for SqliteLog {
    fn record(&self, input: &Path, output: &Path, command: &str) -> Result<(), JournalError> {
        let filename = input.display().to_string();
        let facts = FileFacts::probe(input);

        let tx = self
            .conn
            .unchecked_transaction()
            .map_err(db_err("Could not start transaction"))?;

        let existing: Option<i64> = tx
            .query_row(
                "SELECT id FROM processed_files WHERE filename = ?1",
                params![filename],
                |row| row.get(0),
            )
            .optional()
            .map_err(db_err("Could not look up file"))?;

        let file_id = match existing {
            Some(id) => {
                tx.execute(
                    "UPDATE processed_files
                     SET file_type = ?1, width = ?2, height = ?3, file_size_kb = ?4
                     WHERE id = ?5",
                    params![facts.file_type, facts.width, facts.height, facts.size_kb, id],
                )
                .map_err(db_err("Could not update file"))?;
                id
            }
            None => {
                tx.execute(
                    "INSERT INTO processed_files (filename, file_type, width, height, file_size_kb)
                     VALUES (?1, ?2, ?3, ?4, ?5)",
                    params![filename, facts.file_type, facts.width, facts.height, facts.size_kb],
                )
                .map_err(db_err("Could not insert file"))?;
                tx.last_insert_rowid()
            }
        };

        tx.execute(
            "INSERT INTO processing_operations (file_id, output_filename, operation_command)
             VALUES (?1, ?2, ?3)",
            params![file_id, output.display().to_string(), command],
        )
        .map_err(db_err("Could not insert operation"))?;

        tx.commit().map_err(db_err("Could not commit"))?;
        debug!("logged {command} for {filename} (file id {file_id})");
        Ok(())
    }
}
