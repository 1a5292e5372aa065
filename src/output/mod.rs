//! Tree formatting and display
//!
//! # Module Structure
//!
//! - `config` - Mode and output configuration
//! - `utils` - ANSI color helpers shared by the console formatters
//! - `indented` - Indented listing with folder/file glyphs
//! - `connector` - ASCII tree with `|--` connectors
//! - `export` - Plain-text file export

mod config;
mod connector;
mod export;
mod indented;
mod utils;

pub use config::{Mode, OutputConfig};
pub use connector::{ConnectorFormatter, connector_prefix};
pub use export::{EXPORT_HEADER, ExportWriter, export_structure};
pub use indented::IndentedFormatter;
pub use utils::{DIR_COLOR, FILE_COLOR, write_colored};
