//! # Holler
//!
//! Command-line logging filter built on `holler-core`.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────┐
//! │                  apps/holler (THE BINARY)             │
//! │                                                       │
//! │  ┌─────────┐   ┌──────────┐   ┌────────────────────┐  │
//! │  │  CLI    │   │  Config  │   │ Logger + Adapters  │  │
//! │  │ (clap)  │   │  (toml)  │   │  (stdout/file/..)  │  │
//! │  └────┬────┘   └────┬─────┘   └─────────┬──────────┘  │
//! │       └─────────────┼───────────────────┘             │
//! │                     ▼                                 │
//! │             ┌───────────────┐                         │
//! │             │  holler-core  │                         │
//! │             │  (THE LOGIC)  │                         │
//! │             └───────────────┘                         │
//! └───────────────────────────────────────────────────────┘
//! ```

pub mod adapter;
pub mod cli;
pub mod config;
pub mod deprecation;
pub mod env;
pub mod event;
pub mod format;
pub mod logger;
pub mod repository;

pub use adapter::{Adapter, StreamAdapter};
pub use config::{AdapterConfig, AdapterKind, Config, LoggerConfig};
pub use event::Event;
pub use format::Formatter;
pub use logger::{LogStats, Logger};
pub use repository::{Repository, SharedLogger};
