#![forbid(unsafe_code)]
//! SQLite persistence for collection points.
//!
//! One table, one statement per operation. Every call opens its own
//! connection inside `spawn_blocking` and releases it on return, so no
//! connection outlives the operation that needed it.

use recicla_model::{CollectionPoint, Materials, PointDraft, PointId, TimeOfDay};
use rusqlite::{params, Connection, OptionalExtension};
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const CRATE_NAME: &str = "recicla-store";

/// Storage fault: connection or statement failure. Not retried; the
/// request that hit it fails.
#[derive(Debug)]
pub struct StoreError(pub String);

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::error::Error for StoreError {}

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS points (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    street TEXT NOT NULL,
    number TEXT NOT NULL,
    complement TEXT,
    neighborhood TEXT NOT NULL,
    city TEXT NOT NULL,
    state TEXT NOT NULL,
    postal_code TEXT NOT NULL,
    materials_blob TEXT NOT NULL,
    hours_start TEXT NOT NULL,
    hours_end TEXT NOT NULL
);
";

const POINT_COLUMNS: &str = "id, name, street, number, complement, neighborhood, city, state, \
                             postal_code, materials_blob, hours_start, hours_end";

#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn with_conn<T, F>(&self, op: F) -> Result<T, StoreError>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> Result<T, StoreError> + Send + 'static,
    {
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || {
            let conn = Connection::open(&path).map_err(|e| StoreError(e.to_string()))?;
            op(&conn)
        })
        .await
        .map_err(|e| StoreError(e.to_string()))?
    }

    /// Creates the `points` table when missing. Idempotent.
    pub async fn init(&self) -> Result<(), StoreError> {
        self.with_conn(|conn| {
            conn.execute_batch(SCHEMA)
                .map_err(|e| StoreError(e.to_string()))
        })
        .await
    }

    /// All points ordered by name ascending (SQLite BINARY collation).
    pub async fn list(&self) -> Result<Vec<CollectionPoint>, StoreError> {
        self.with_conn(|conn| {
            let sql = format!("SELECT {POINT_COLUMNS} FROM points ORDER BY name");
            let mut stmt = conn.prepare(&sql).map_err(|e| StoreError(e.to_string()))?;
            let mapped = stmt
                .query_map([], decode_row)
                .map_err(|e| StoreError(e.to_string()))?;
            mapped
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| StoreError(e.to_string()))
        })
        .await
    }

    pub async fn fetch(&self, id: PointId) -> Result<Option<CollectionPoint>, StoreError> {
        self.with_conn(move |conn| {
            let sql = format!("SELECT {POINT_COLUMNS} FROM points WHERE id = ?1");
            conn.query_row(&sql, params![id.as_i64()], decode_row)
                .optional()
                .map_err(|e| StoreError(e.to_string()))
        })
        .await
    }

    pub async fn insert(&self, draft: PointDraft) -> Result<PointId, StoreError> {
        self.with_conn(move |conn| {
            let blob = draft
                .materials
                .encode()
                .map_err(|e| StoreError(e.to_string()))?;
            conn.execute(
                "INSERT INTO points \
                 (name, street, number, complement, neighborhood, city, state, postal_code, \
                  materials_blob, hours_start, hours_end) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
                params![
                    draft.name,
                    draft.street,
                    draft.number,
                    draft.complement,
                    draft.neighborhood,
                    draft.city,
                    draft.state,
                    draft.postal_code,
                    blob,
                    draft.hours_start.canonical_string(),
                    draft.hours_end.canonical_string(),
                ],
            )
            .map_err(|e| StoreError(e.to_string()))?;
            Ok(PointId::new(conn.last_insert_rowid()))
        })
        .await
    }

    /// In-place update of every non-id column. Updating a missing id
    /// changes nothing and is not an error.
    pub async fn update(&self, id: PointId, draft: PointDraft) -> Result<(), StoreError> {
        self.with_conn(move |conn| {
            let blob = draft
                .materials
                .encode()
                .map_err(|e| StoreError(e.to_string()))?;
            conn.execute(
                "UPDATE points SET \
                 name = ?1, street = ?2, number = ?3, complement = ?4, neighborhood = ?5, \
                 city = ?6, state = ?7, postal_code = ?8, materials_blob = ?9, \
                 hours_start = ?10, hours_end = ?11 \
                 WHERE id = ?12",
                params![
                    draft.name,
                    draft.street,
                    draft.number,
                    draft.complement,
                    draft.neighborhood,
                    draft.city,
                    draft.state,
                    draft.postal_code,
                    blob,
                    draft.hours_start.canonical_string(),
                    draft.hours_end.canonical_string(),
                    id.as_i64(),
                ],
            )
            .map_err(|e| StoreError(e.to_string()))?;
            Ok(())
        })
        .await
    }

    /// Unconditional delete; a missing id is a silent no-op.
    pub async fn delete(&self, id: PointId) -> Result<(), StoreError> {
        self.with_conn(move |conn| {
            conn.execute("DELETE FROM points WHERE id = ?1", params![id.as_i64()])
                .map_err(|e| StoreError(e.to_string()))?;
            Ok(())
        })
        .await
    }
}

fn decode_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<CollectionPoint> {
    let id = PointId::new(row.get::<_, i64>(0)?);
    let blob: String = row.get(9)?;
    let draft = PointDraft {
        name: row.get(1)?,
        street: row.get(2)?,
        number: row.get(3)?,
        complement: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
        neighborhood: row.get(5)?,
        city: row.get(6)?,
        state: row.get(7)?,
        postal_code: row.get(8)?,
        // An undecodable blob reads as "no materials" rather than
        // failing the whole listing.
        materials: Materials::decode_or_empty(&blob),
        hours_start: decode_time(row, 10)?,
        hours_end: decode_time(row, 11)?,
    };
    Ok(CollectionPoint::new(id, draft))
}

fn decode_time(row: &rusqlite::Row<'_>, idx: usize) -> rusqlite::Result<TimeOfDay> {
    let raw: String = row.get(idx)?;
    TimeOfDay::parse(&raw).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
    })
}
