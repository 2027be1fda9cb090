use anyhow::{Context, Result};
use sqlx::{
    postgres::{PgPoolOptions, PgRow},
    PgPool, Row,
};

use crate::model::{FamilyTree, Id, Member, NewFamilyTree, NewMember};
use crate::store::traits::{MemberStore, TreeStore};

/// Additive schema reconciliation, applied in order on every start.
/// Statements only ever create, add or widen; nothing is dropped.
const SCHEMA_STATEMENTS: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS family_trees (id BIGSERIAL PRIMARY KEY)",
    "ALTER TABLE family_trees ADD COLUMN IF NOT EXISTS name TEXT NOT NULL DEFAULT ''",
    "CREATE TABLE IF NOT EXISTS members (id BIGSERIAL PRIMARY KEY)",
    "ALTER TABLE members ADD COLUMN IF NOT EXISTS tree_id BIGINT NOT NULL DEFAULT 0",
    "ALTER TABLE members ADD COLUMN IF NOT EXISTS name TEXT NOT NULL DEFAULT ''",
    "ALTER TABLE members ADD COLUMN IF NOT EXISTS generation BIGINT NOT NULL DEFAULT 0",
    "ALTER TABLE members ADD COLUMN IF NOT EXISTS x BIGINT NOT NULL DEFAULT 0",
    "ALTER TABLE members ADD COLUMN IF NOT EXISTS y BIGINT NOT NULL DEFAULT 0",
    "ALTER TABLE members ADD COLUMN IF NOT EXISTS parent_ids TEXT NOT NULL DEFAULT ''",
    "ALTER TABLE members ADD COLUMN IF NOT EXISTS children TEXT NOT NULL DEFAULT ''",
    "ALTER TABLE members ADD COLUMN IF NOT EXISTS spouse_id BIGINT",
    "ALTER TABLE members ADD COLUMN IF NOT EXISTS created_at BIGINT NOT NULL DEFAULT 0",
    "ALTER TABLE members ADD COLUMN IF NOT EXISTS updated_at BIGINT NOT NULL DEFAULT 0",
    // Widen columns created as INTEGER by earlier schema versions
    "ALTER TABLE members ALTER COLUMN generation TYPE BIGINT",
    "ALTER TABLE members ALTER COLUMN x TYPE BIGINT",
    "ALTER TABLE members ALTER COLUMN y TYPE BIGINT",
    "CREATE INDEX IF NOT EXISTS idx_members_tree_id ON members (tree_id)",
];

const MEMBER_COLUMNS: &str =
    "id, tree_id, name, generation, x, y, parent_ids, children, spouse_id, created_at, updated_at";

#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Create a new PostgreSQL store with the given database URL
    pub async fn new(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await
            .context("Failed to create PostgreSQL connection pool")?;

        Ok(Self { pool })
    }

    /// Bring the schema up to date with the model
    pub async fn migrate(&self) -> Result<()> {
        for statement in SCHEMA_STATEMENTS {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .with_context(|| format!("Failed to apply schema statement: {statement}"))?;
        }
        log::info!("Schema reconciled ({} statements)", SCHEMA_STATEMENTS.len());
        Ok(())
    }
}

fn tree_from_row(row: &PgRow) -> Result<FamilyTree> {
    Ok(FamilyTree {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
    })
}

fn member_from_row(row: &PgRow) -> Result<Member> {
    Ok(Member {
        id: row.try_get("id")?,
        tree_id: row.try_get("tree_id")?,
        name: row.try_get("name")?,
        generation: row.try_get("generation")?,
        x: row.try_get("x")?,
        y: row.try_get("y")?,
        parent_ids: row.try_get("parent_ids")?,
        children: row.try_get("children")?,
        spouse_id: row.try_get("spouse_id")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

#[async_trait::async_trait]
impl TreeStore for PostgresStore {
    async fn list_trees(&self) -> Result<Vec<FamilyTree>> {
        let rows = sqlx::query("SELECT id, name FROM family_trees ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .context("Failed to list family trees")?;

        rows.iter().map(tree_from_row).collect()
    }

    async fn get_tree(&self, id: Id) -> Result<Option<FamilyTree>> {
        let row = sqlx::query("SELECT id, name FROM family_trees WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .context("Failed to fetch family tree")?;

        row.as_ref().map(tree_from_row).transpose()
    }

    async fn create_tree(&self, tree: NewFamilyTree) -> Result<FamilyTree> {
        let row = sqlx::query("INSERT INTO family_trees (name) VALUES ($1) RETURNING id, name")
            .bind(&tree.name)
            .fetch_one(&self.pool)
            .await
            .context("Failed to create family tree")?;

        tree_from_row(&row)
    }
}

#[async_trait::async_trait]
impl MemberStore for PostgresStore {
    async fn list_members_for_tree(&self, tree_id: Id) -> Result<Vec<Member>> {
        let rows = sqlx::query(&format!(
            "SELECT {MEMBER_COLUMNS} FROM members WHERE tree_id = $1 ORDER BY id"
        ))
        .bind(tree_id)
        .fetch_all(&self.pool)
        .await
        .context("Failed to list members")?;

        rows.iter().map(member_from_row).collect()
    }

    async fn get_member(&self, tree_id: Id, id: Id) -> Result<Option<Member>> {
        let row = sqlx::query(&format!(
            "SELECT {MEMBER_COLUMNS} FROM members WHERE tree_id = $1 AND id = $2"
        ))
        .bind(tree_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch member")?;

        row.as_ref().map(member_from_row).transpose()
    }

    async fn create_member(&self, member: NewMember) -> Result<Member> {
        let row = sqlx::query(&format!(
            r#"
            INSERT INTO members (tree_id, name, generation, x, y, parent_ids, children, spouse_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {MEMBER_COLUMNS}
            "#
        ))
        .bind(member.tree_id)
        .bind(&member.name)
        .bind(member.generation)
        .bind(member.x)
        .bind(member.y)
        .bind(&member.parent_ids)
        .bind(&member.children)
        .bind(member.spouse_id)
        .bind(member.created_at)
        .bind(member.updated_at)
        .fetch_one(&self.pool)
        .await
        .context("Failed to create member")?;

        member_from_row(&row)
    }

    async fn save_member(&self, member: Member) -> Result<Member> {
        let row = sqlx::query(&format!(
            r#"
            INSERT INTO members (id, tree_id, name, generation, x, y, parent_ids, children, spouse_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ON CONFLICT (id) DO UPDATE SET
                tree_id = EXCLUDED.tree_id,
                name = EXCLUDED.name,
                generation = EXCLUDED.generation,
                x = EXCLUDED.x,
                y = EXCLUDED.y,
                parent_ids = EXCLUDED.parent_ids,
                children = EXCLUDED.children,
                spouse_id = EXCLUDED.spouse_id,
                created_at = EXCLUDED.created_at,
                updated_at = EXCLUDED.updated_at
            RETURNING {MEMBER_COLUMNS}
            "#
        ))
        .bind(member.id)
        .bind(member.tree_id)
        .bind(&member.name)
        .bind(member.generation)
        .bind(member.x)
        .bind(member.y)
        .bind(&member.parent_ids)
        .bind(&member.children)
        .bind(member.spouse_id)
        .bind(member.created_at)
        .bind(member.updated_at)
        .fetch_one(&self.pool)
        .await
        .context("Failed to save member")?;

        member_from_row(&row)
    }

    async fn delete_member(&self, tree_id: Id, id: Id) -> Result<bool> {
        let result = sqlx::query("DELETE FROM members WHERE tree_id = $1 AND id = $2")
            .bind(tree_id)
            .bind(id)
            .execute(&self.pool)
            .await
            .context("Failed to delete member")?;

        Ok(result.rows_affected() > 0)
    }
}
