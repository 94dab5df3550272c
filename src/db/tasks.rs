use super::db::Db;
use crate::libs::task::{Quadrant, Task, TaskStatus};
use anyhow::Result;
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};

const SCHEMA_TASKS: &str = "CREATE TABLE IF NOT EXISTS tasks (
    id TEXT NOT NULL PRIMARY KEY,
    title TEXT NOT NULL,
    description TEXT,
    quadrant INTEGER NOT NULL,
    created_at TEXT NOT NULL,
    completed_at TEXT,
    status TEXT NOT NULL,
    tags TEXT NOT NULL DEFAULT '[]'
);";
const INSERT_TASK: &str = "INSERT INTO tasks (id, title, description, quadrant, created_at, completed_at, status, tags)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)";
const UPDATE_TASK: &str = "UPDATE tasks
    SET title = ?2, description = ?3, quadrant = ?4, completed_at = ?5, status = ?6, tags = ?7
    WHERE id = ?1";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";
const SELECT_TASKS: &str = "SELECT id, title, description, quadrant, created_at, completed_at, status, tags FROM tasks";
const ORDER_BY_CREATED: &str = "ORDER BY created_at";
const WHERE_ID: &str = "WHERE id = ?1";

pub struct Tasks {
    pub conn: Connection,
}

impl Tasks {
    pub fn new() -> Result<Tasks> {
        Self::with_db(Db::new()?)
    }

    /// Uses an already opened database, creating the table if needed.
    pub fn with_db(db: Db) -> Result<Tasks> {
        db.conn.execute(SCHEMA_TASKS, [])?;

        Ok(Tasks { conn: db.conn })
    }

    pub fn insert(&mut self, task: &Task) -> Result<()> {
        self.conn.execute(
            INSERT_TASK,
            params![
                task.id,
                task.title,
                task.description,
                u8::from(task.quadrant),
                task.created_at,
                task.completed_at,
                task.status.as_str(),
                serde_json::to_string(&task.tags)?,
            ],
        )?;

        Ok(())
    }

    /// Every stored task, oldest first.
    pub fn fetch(&mut self) -> Result<Vec<Task>> {
        let mut stmt = self.conn.prepare(&format!("{} {}", SELECT_TASKS, ORDER_BY_CREATED))?;
        let task_iter = stmt.query_map([], task_from_row)?;

        let mut tasks = Vec::new();
        for task_result in task_iter {
            tasks.push(task_result?);
        }

        Ok(tasks)
    }

    pub fn get_by_id(&mut self, id: &str) -> Result<Option<Task>> {
        let task = self
            .conn
            .query_row(&format!("{} {}", SELECT_TASKS, WHERE_ID), params![id], task_from_row)
            .optional()?;

        Ok(task)
    }

    /// Writes every mutable column of `task`. Returns the number of rows
    /// changed, 0 when the id is unknown.
    pub fn update(&mut self, task: &Task) -> Result<usize> {
        let changed = self.conn.execute(
            UPDATE_TASK,
            params![
                task.id,
                task.title,
                task.description,
                u8::from(task.quadrant),
                task.completed_at,
                task.status.as_str(),
                serde_json::to_string(&task.tags)?,
            ],
        )?;

        Ok(changed)
    }

    pub fn delete(&mut self, id: &str) -> Result<usize> {
        Ok(self.conn.execute(DELETE_TASK, params![id])?)
    }
}

fn task_from_row(row: &Row) -> rusqlite::Result<Task> {
    let quadrant: u8 = row.get(3)?;
    let quadrant = Quadrant::try_from(quadrant).map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Integer, Box::new(e)))?;

    let status: String = row.get(6)?;
    let status = status
        .parse::<TaskStatus>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(6, Type::Text, Box::new(e)))?;

    let tags: String = row.get(7)?;
    let tags: Vec<String> =
        serde_json::from_str(&tags).map_err(|e| rusqlite::Error::FromSqlConversionFailure(7, Type::Text, Box::new(e)))?;

    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        quadrant,
        created_at: row.get(4)?,
        completed_at: row.get(5)?,
        status,
        tags,
    })
}
