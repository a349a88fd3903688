pub mod catalog;
pub mod config;
pub mod context;
pub mod db;
pub mod filter;
pub mod model;
pub mod render;
pub mod repl;
pub mod session;
pub mod sort;
pub mod state;
pub mod tables;
