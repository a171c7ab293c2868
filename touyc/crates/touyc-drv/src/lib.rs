//! touyc-drv - Compiler Driver
//!
//! Loads touy source files, runs the lexer over them and prints the
//! resulting token listing. Lexical errors are rendered with their source
//! context on stderr.
//!
//! # Example
//!
//! ```
//! use touyc_drv::{write_rows, Config, OutputFormat, Session};
//!
//! let mut session = Session::new(Config::default());
//! let file = session.add_source("main.touy", "x := 42;");
//! let rows = session.list_tokens(file).unwrap();
//!
//! let mut out = Vec::new();
//! write_rows(&rows, OutputFormat::Table, &mut out).unwrap();
//! assert!(String::from_utf8(out).unwrap().starts_with("1\t1\tIdentifier\tx\n"));
//! assert!(session.finish().is_ok());
//! ```

pub mod config;
pub mod error;
pub mod listing;
pub mod session;

pub use config::{Config, OutputFormat, CONFIG_FILE_NAME};
pub use error::{DriverError, Result};
pub use listing::{write_rows, TokenRow};
pub use session::Session;
