pub mod calendar;
pub mod config;
pub mod data_storage;
pub mod error;
pub mod messages;
pub mod prompt;
pub mod report;
pub mod repository;
pub mod stats;
pub mod task;
pub mod view;
pub mod window;
