//! SQLite persistence.
//!
//! [`db::Db`] owns the connection to the application database file;
//! [`tasks::Tasks`] is the task table store used by the local backend.

pub mod db;
pub mod tasks;
