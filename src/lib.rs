pub mod app;
pub mod async_task;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod event;
pub mod main_lib;
pub mod model;
pub mod navigation;
pub mod player;
pub mod recency;
pub mod selection;
pub mod ui;
