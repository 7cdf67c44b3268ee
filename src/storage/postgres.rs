//! Durable catalog store backed by PostgreSQL.
//!
//! Identities come from `SERIAL` primary keys, so concurrent inserts never
//! share an id and ids are never reused, even after a failed transaction.

use super::CatalogStore;
use crate::domain::model::{EntityKind, NewSemester, NewUnit, Semester, Unit};
use anyhow::Context;
use async_trait::async_trait;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};

const CREATE_SEMESTERS_SQL: &str = "CREATE TABLE IF NOT EXISTS semesters (
    id SERIAL PRIMARY KEY,
    title TEXT NOT NULL,
    description TEXT NOT NULL,
    pattern TEXT NOT NULL,
    year TEXT NOT NULL,
    sem TEXT NOT NULL,
    branch TEXT NOT NULL,
    university TEXT NOT NULL,
    syllabus TEXT[]
)";

const CREATE_UNITS_SQL: &str = "CREATE TABLE IF NOT EXISTS units (
    id SERIAL PRIMARY KEY,
    title TEXT NOT NULL,
    branch TEXT NOT NULL,
    year TEXT NOT NULL,
    sem TEXT NOT NULL,
    pattern TEXT NOT NULL,
    unitno TEXT NOT NULL,
    description TEXT NOT NULL,
    url TEXT NOT NULL,
    youtube TEXT[],
    question TEXT[]
)";

const SEMESTER_COLUMNS: &str =
    "id, title, description, pattern, year, sem, branch, university, syllabus";
const UNIT_COLUMNS: &str =
    "id, title, branch, year, sem, pattern, unitno, description, url, youtube, question";
const SEMESTER_INSERT_COLUMNS: &str =
    "title, description, pattern, year, sem, branch, university, syllabus";
const UNIT_INSERT_COLUMNS: &str =
    "title, branch, year, sem, pattern, unitno, description, url, youtube, question";

#[derive(Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Connects to `database_url` and ensures the catalog tables exist.
    pub async fn connect(database_url: &str, max_connections: u32) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await
            .context("failed to connect to DATABASE_URL")?;
        Self::new_with_pool(pool).await
    }

    pub async fn new_with_pool(pool: PgPool) -> anyhow::Result<Self> {
        for sql in [CREATE_SEMESTERS_SQL, CREATE_UNITS_SQL] {
            sqlx::query(sql)
                .execute(&pool)
                .await
                .context("failed to create catalog tables")?;
        }
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

fn semester_from_row(r: &PgRow) -> anyhow::Result<Semester> {
    Ok(Semester {
        id: r.try_get("id")?,
        title: r.try_get("title")?,
        description: r.try_get("description")?,
        pattern: r.try_get("pattern")?,
        year: r.try_get("year")?,
        sem: r.try_get("sem")?,
        branch: r.try_get("branch")?,
        university: r.try_get("university")?,
        syllabus: r.try_get("syllabus")?,
    })
}

fn unit_from_row(r: &PgRow) -> anyhow::Result<Unit> {
    // List columns are nullable in the table; units always store a list.
    let youtube: Option<Vec<String>> = r.try_get("youtube")?;
    let question: Option<Vec<String>> = r.try_get("question")?;
    Ok(Unit {
        id: r.try_get("id")?,
        title: r.try_get("title")?,
        branch: r.try_get("branch")?,
        year: r.try_get("year")?,
        sem: r.try_get("sem")?,
        pattern: r.try_get("pattern")?,
        unitno: r.try_get("unitno")?,
        description: r.try_get("description")?,
        url: r.try_get("url")?,
        youtube: youtube.unwrap_or_default(),
        question: question.unwrap_or_default(),
    })
}

#[async_trait]
impl CatalogStore for PostgresStore {
    async fn create_semester(&self, s: NewSemester) -> anyhow::Result<Semester> {
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING {}",
            EntityKind::Semester.table_name(),
            SEMESTER_INSERT_COLUMNS,
            SEMESTER_COLUMNS
        );
        let row = sqlx::query(&sql)
            .bind(&s.title)
            .bind(&s.description)
            .bind(&s.pattern)
            .bind(&s.year)
            .bind(&s.sem)
            .bind(&s.branch)
            .bind(&s.university)
            .bind(&s.syllabus)
            .fetch_one(&self.pool)
            .await
            .context("failed to insert semester")?;
        semester_from_row(&row)
    }

    async fn list_semesters(&self) -> anyhow::Result<Vec<Semester>> {
        let sql = format!(
            "SELECT {} FROM {} ORDER BY id",
            SEMESTER_COLUMNS,
            EntityKind::Semester.table_name()
        );
        let rows = sqlx::query(&sql)
            .fetch_all(&self.pool)
            .await
            .context("failed to list semesters")?;
        rows.iter().map(semester_from_row).collect()
    }

    async fn get_semester(&self, id: i32) -> anyhow::Result<Option<Semester>> {
        let sql = format!(
            "SELECT {} FROM {} WHERE id = $1",
            SEMESTER_COLUMNS,
            EntityKind::Semester.table_name()
        );
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .context("failed to read semester")?;
        row.as_ref().map(semester_from_row).transpose()
    }

    async fn create_unit(&self, u: NewUnit) -> anyhow::Result<Unit> {
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) RETURNING {}",
            EntityKind::Unit.table_name(),
            UNIT_INSERT_COLUMNS,
            UNIT_COLUMNS
        );
        let row = sqlx::query(&sql)
            .bind(&u.title)
            .bind(&u.branch)
            .bind(&u.year)
            .bind(&u.sem)
            .bind(&u.pattern)
            .bind(&u.unitno)
            .bind(&u.description)
            .bind(&u.url)
            .bind(&u.youtube)
            .bind(&u.question)
            .fetch_one(&self.pool)
            .await
            .context("failed to insert unit")?;
        unit_from_row(&row)
    }

    async fn list_units(&self) -> anyhow::Result<Vec<Unit>> {
        let sql = format!(
            "SELECT {} FROM {} ORDER BY id",
            UNIT_COLUMNS,
            EntityKind::Unit.table_name()
        );
        let rows = sqlx::query(&sql)
            .fetch_all(&self.pool)
            .await
            .context("failed to list units")?;
        rows.iter().map(unit_from_row).collect()
    }

    async fn get_unit(&self, id: i32) -> anyhow::Result<Option<Unit>> {
        let sql = format!(
            "SELECT {} FROM {} WHERE id = $1",
            UNIT_COLUMNS,
            EntityKind::Unit.table_name()
        );
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .context("failed to read unit")?;
        row.as_ref().map(unit_from_row).transpose()
    }

    async fn ping(&self) -> anyhow::Result<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .context("DB ping failed")?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}
