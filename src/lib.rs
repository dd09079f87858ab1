//! Form-report utilities: pure model-to-string transforms for three fixed
//! templates, plus the CLI collaborator that feeds them.
//!
//! - `render::bug` / `render::feature` - Markdown and HTML-fragment
//!   renderers over flat field records
//! - `render::eval` - the plain-text interview evaluation compiler
//! - `fields` / `types` - field-map loading and pure model extraction
//! - `config` - competency/question configuration and job resolution
//! - `timer` - the self-contained session countdown component
//! - `export` / `ui` - delivery side effects and console output

pub mod cli;
pub mod config;
pub mod export;
pub mod fields;
pub mod render;
pub mod text;
pub mod timer;
pub mod types;
pub mod ui;
