//! `SQLite` implementation of [`AlcoholRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use alcs_app::ports::AlcoholRepository;
use alcs_domain::alcohol::{Alcohol, NewAlcohol};
use alcs_domain::error::{AlcsError, DuplicateNameError};
use alcs_domain::id::AlcoholId;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Alcohol`].
struct Wrapper(Alcohol);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Alcohol> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Alcohol {
            id: AlcoholId::new(row.try_get("id")?),
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            price: row.try_get("price")?,
        }))
    }
}

const INSERT: &str = "INSERT INTO alcs (name, description, price) VALUES (?, ?, ?) RETURNING id";
const SELECT_BY_ID: &str = "SELECT id, name, description, price FROM alcs WHERE id = ?";
const SELECT_ALL: &str = "SELECT id, name, description, price FROM alcs ORDER BY id";
const DELETE_BY_ID: &str =
    "DELETE FROM alcs WHERE id = ? RETURNING id, name, description, price";

/// Map an insert failure, turning a unique-constraint violation into
/// [`DuplicateNameError`].
fn classify_insert_error(err: sqlx::Error, name: String) -> AlcsError {
    let is_duplicate = err
        .as_database_error()
        .is_some_and(|db_err| db_err.is_unique_violation());
    if is_duplicate {
        DuplicateNameError {
            entity: "Alcohol",
            name,
        }
        .into()
    } else {
        StorageError::from(err).into()
    }
}

/// `SQLite`-backed alcohol repository.
///
/// Uniqueness of `name` is enforced by the table's `UNIQUE` constraint and
/// deletion is a single `DELETE … RETURNING` statement, so both are atomic
/// regardless of how many pooled connections are in flight.
#[derive(Clone)]
pub struct SqliteAlcoholRepository {
    pool: SqlitePool,
}

impl SqliteAlcoholRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl AlcoholRepository for SqliteAlcoholRepository {
    fn create(&self, new: NewAlcohol) -> impl Future<Output = Result<Alcohol, AlcsError>> + Send {
        let pool = self.pool.clone();
        async move {
            let inserted = sqlx::query(INSERT)
                .bind(&new.name)
                .bind(new.description.as_deref())
                .bind(new.price)
                .fetch_one(&pool)
                .await;

            match inserted {
                Ok(row) => {
                    let id: i64 = row.try_get("id").map_err(StorageError::from)?;
                    Ok(Alcohol::from_new(AlcoholId::new(id), new))
                }
                Err(err) => Err(classify_insert_error(err, new.name)),
            }
        }
    }

    fn get_by_id(
        &self,
        id: AlcoholId,
    ) -> impl Future<Output = Result<Option<Alcohol>, AlcsError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.as_i64())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Alcohol>, AlcsError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn delete(
        &self,
        id: AlcoholId,
    ) -> impl Future<Output = Result<Option<Alcohol>, AlcsError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(DELETE_BY_ID)
                .bind(id.as_i64())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }
}
