//! Generic unit-of-work repository.
//!
//! `Repository<T>` holds the pending changes of one logical unit of work
//! (one incoming request) and commits them atomically in a single
//! transaction on [`Repository::save`]. Filtering is expressed through
//! opaque boolean predicates over `T`, so callers never see the storage
//! query language.

use std::collections::HashSet;

use async_trait::async_trait;
use campus_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::DbError;

/// Opaque filter over an entity. Returns `true` for rows to keep.
pub type Predicate<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

/// Query/command primitives an entity exposes to the generic repository.
///
/// Implementations own the SQL for one table. `fetch_all` imposes the
/// entity's canonical ordering; `insert` returns the stored row with its
/// assigned identifier; `replace` and `delete` report affected row
/// counts so the unit of work can detect missing targets.
#[async_trait]
pub trait Persist: Clone + Send + Sync + Unpin + 'static {
    /// Entity name used in error messages.
    const ENTITY: &'static str;

    fn id(&self) -> DbId;

    async fn fetch_all(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error>;

    async fn insert(conn: &mut PgConnection, entity: &Self) -> Result<Self, sqlx::Error>;

    /// Full replace of the row with `entity.id()`. Returns rows affected.
    async fn replace(conn: &mut PgConnection, entity: &Self) -> Result<u64, sqlx::Error>;

    async fn delete(conn: &mut PgConnection, id: DbId) -> Result<u64, sqlx::Error>;
}

/// A change scheduled against the unit of work, applied at save time.
enum Pending<T> {
    Insert(T),
    Replace(T),
    Delete(DbId),
}

/// Per-request unit of work over a connection pool.
///
/// Reads go straight to the store; mutations are scheduled and applied
/// all-or-nothing by [`Repository::save`]. The identity map records
/// which rows this unit of work is tracking: `update` and `remove`
/// refuse untracked instances, which must be re-attached first.
pub struct Repository<T: Persist> {
    pool: PgPool,
    tracked: HashSet<DbId>,
    pending: Vec<Pending<T>>,
}

impl<T: Persist> Repository<T> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            tracked: HashSet::new(),
            pending: Vec::new(),
        }
    }

    /// All rows matching `filter`, in the entity's canonical order.
    /// Zero matches yields an empty vec, never an error.
    pub async fn get_all(&self, filter: Option<Predicate<T>>) -> Result<Vec<T>, DbError> {
        let mut rows = T::fetch_all(&self.pool).await?;
        if let Some(pred) = filter {
            rows.retain(|e| pred(e));
        }
        Ok(rows)
    }

    /// First row matching `filter`, or `None`.
    ///
    /// When `tracked` is set the returned instance joins the identity
    /// map, enabling later `update`/`remove` without re-attaching.
    pub async fn get(
        &mut self,
        filter: Option<Predicate<T>>,
        tracked: bool,
    ) -> Result<Option<T>, DbError> {
        let rows = T::fetch_all(&self.pool).await?;
        let found = match filter {
            Some(pred) => rows.into_iter().find(|e| pred(e)),
            None => rows.into_iter().next(),
        };
        if tracked {
            if let Some(entity) = &found {
                self.tracked.insert(entity.id());
            }
        }
        Ok(found)
    }

    /// Schedule an insertion. The identifier is assigned at save time.
    pub fn create(&mut self, entity: T) {
        self.pending.push(Pending::Insert(entity));
    }

    /// Re-attach an instance fetched untracked so it can be updated or
    /// removed.
    pub fn attach(&mut self, entity: &T) {
        self.tracked.insert(entity.id());
    }

    /// Schedule a full replace of a tracked record.
    pub fn update(&mut self, entity: T) -> Result<(), DbError> {
        if !self.tracked.contains(&entity.id()) {
            return Err(DbError::NotTracked {
                entity: T::ENTITY,
                id: entity.id(),
            });
        }
        self.pending.push(Pending::Replace(entity));
        Ok(())
    }

    /// Schedule deletion of a tracked record.
    pub fn remove(&mut self, entity: &T) -> Result<(), DbError> {
        if !self.tracked.contains(&entity.id()) {
            return Err(DbError::NotTracked {
                entity: T::ENTITY,
                id: entity.id(),
            });
        }
        self.pending.push(Pending::Delete(entity.id()));
        Ok(())
    }

    /// Commit all scheduled changes in one transaction.
    ///
    /// Returns the inserted rows with their store-assigned identifiers.
    /// A replace or delete that matches no row aborts the whole
    /// transaction with [`DbError::NotFound`]; store failures propagate
    /// without retry. On failure nothing is committed and the scheduled
    /// changes are discarded.
    pub async fn save(&mut self) -> Result<Vec<T>, DbError> {
        let pending = std::mem::take(&mut self.pending);
        if pending.is_empty() {
            return Ok(Vec::new());
        }

        let mut tx = self.pool.begin().await?;
        let mut inserted = Vec::new();
        let mut deleted = Vec::new();

        for op in pending {
            match op {
                Pending::Insert(entity) => {
                    let row = T::insert(&mut *tx, &entity).await?;
                    inserted.push(row);
                }
                Pending::Replace(entity) => {
                    let rows = T::replace(&mut *tx, &entity).await?;
                    if rows == 0 {
                        return Err(DbError::NotFound {
                            entity: T::ENTITY,
                            id: entity.id(),
                        });
                    }
                }
                Pending::Delete(id) => {
                    let rows = T::delete(&mut *tx, id).await?;
                    if rows == 0 {
                        return Err(DbError::NotFound {
                            entity: T::ENTITY,
                            id,
                        });
                    }
                    deleted.push(id);
                }
            }
        }

        tx.commit().await?;

        // Identity map reflects only committed changes.
        for row in &inserted {
            self.tracked.insert(row.id());
        }
        for id in deleted {
            self.tracked.remove(&id);
        }

        Ok(inserted)
    }
}
