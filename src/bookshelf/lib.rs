//! # Bookshelf Architecture
//!
//! Bookshelf is a personal library catalog: a collection of book records kept
//! in one CSV file, with commands to add, list, search, delete, report on,
//! export and import them.
//!
//! The crate is a library with a terminal client on top. Everything from
//! [`api`] inward takes plain Rust arguments and returns `Result<CmdResult>`;
//! it never prints, never prompts and never exits the process.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Menu loop, prompts, re-prompting, colored output         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - load → command → save, one operation at a time           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure logic over a loaded `Library` value                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait: CsvStore, InMemoryStore                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Book`, `Library` and the field list
//! - [`validation`]: Year, rating and required-field checks
//! - [`index`]: 1-based display numbering and delete selections
//! - [`config`]: Configuration file
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod store;
pub mod validation;
