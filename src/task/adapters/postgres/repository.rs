//! `PostgreSQL` repository implementation for task storage.

use super::{
    models::{NewTaskRow, TaskRow},
    schema::tasks,
};
use crate::task::{
    domain::{ActiveDate, Task, TaskDraft, TaskId, TaskStatus, TaskTitle},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// Default connection pool size when none is configured.
const DEFAULT_MAX_POOL_SIZE: u32 = 10;

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// Connection configuration for the `PostgreSQL` task store.
///
/// Passed explicitly at construction time; the adapter holds no global
/// state. The table name is fixed by the Diesel schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostgresStoreConfig {
    database_url: String,
    max_pool_size: u32,
}

impl PostgresStoreConfig {
    /// Creates a configuration for the given database URL with the default
    /// pool size.
    #[must_use]
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_pool_size: DEFAULT_MAX_POOL_SIZE,
        }
    }

    /// Sets the maximum connection pool size.
    #[must_use]
    pub const fn with_max_pool_size(mut self, size: u32) -> Self {
        self.max_pool_size = size;
        self
    }

    /// Returns the database connection URL.
    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database_url
    }
}

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from an existing connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    /// Builds a repository from store configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the connection pool
    /// cannot be established.
    pub fn connect(config: &PostgresStoreConfig) -> TaskRepositoryResult<Self> {
        let manager = ConnectionManager::<PgConnection>::new(config.database_url());
        let pool = Pool::builder()
            .max_size(config.max_pool_size)
            .build(manager)
            .map_err(TaskRepositoryError::persistence)?;
        Ok(Self::new(pool))
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn insert(&self, draft: &TaskDraft) -> TaskRepositoryResult<TaskId> {
        let id = TaskId::new();
        let new_row = to_new_row(id, draft);

        self.run_blocking(move |connection| {
            diesel::insert_into(tasks::table)
                .values(&new_row)
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            Ok(id)
        })
        .await
    }

    async fn replace(&self, id: TaskId, draft: &TaskDraft) -> TaskRepositoryResult<()> {
        let row = to_new_row(id, draft);

        self.run_blocking(move |connection| {
            let matched = diesel::update(tasks::table.filter(tasks::id.eq(id.into_inner())))
                .set((
                    tasks::title.eq(&row.title),
                    tasks::active_at.eq(&row.active_at),
                    tasks::status.eq(&row.status),
                ))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;

            if matched == 0 {
                return Err(TaskRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn set_status(&self, id: TaskId, status: &TaskStatus) -> TaskRepositoryResult<()> {
        let status_value = status.as_str().to_owned();

        self.run_blocking(move |connection| {
            let matched = diesel::update(tasks::table.filter(tasks::id.eq(id.into_inner())))
                .set(tasks::status.eq(&status_value))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;

            if matched == 0 {
                return Err(TaskRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::id.eq(id.into_inner()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn find_by_status(&self, status: &TaskStatus) -> TaskRepositoryResult<Vec<Task>> {
        let status_value = status.as_str().to_owned();

        self.run_blocking(move |connection| {
            let rows = tasks::table
                .filter(tasks::status.eq(&status_value))
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn count_by_title(&self, title: &TaskTitle) -> TaskRepositoryResult<u64> {
        let title_value = title.as_str().to_owned();

        self.run_blocking(move |connection| {
            let count = tasks::table
                .filter(tasks::title.eq(&title_value))
                .count()
                .get_result::<i64>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            u64::try_from(count).map_err(TaskRepositoryError::persistence)
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let deleted = diesel::delete(tasks::table.filter(tasks::id.eq(id.into_inner())))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;

            if deleted == 0 {
                return Err(TaskRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

fn to_new_row(id: TaskId, draft: &TaskDraft) -> NewTaskRow {
    NewTaskRow {
        id: id.into_inner(),
        title: draft.title().as_str().to_owned(),
        active_at: draft.active_at().to_string(),
        status: draft.status().as_str().to_owned(),
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        title,
        active_at: persisted_active_at,
        status,
    } = row;

    let active_at =
        ActiveDate::parse(&persisted_active_at).map_err(TaskRepositoryError::persistence)?;

    Ok(Task::from_persisted(
        TaskId::from_uuid(id),
        TaskTitle::from_stored(title),
        active_at,
        TaskStatus::new(status),
    ))
}
