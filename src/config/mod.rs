//! # Configuration Module
//!
//! This module provides the theme, the render options and the per-command
//! configurations of the CLI.
//!
//! ## Components
//!
//! - **Theme**: Every display decision of the DOT output, with defaults and a
//!   deep merge of partial JSON overrides
//! - **RenderOptions**: Options of [`crate::render`] (`noargs`, `sort` and a
//!   theme override)
//! - **RenderConfig** / **QueryConfig** / **ThemeConfig**: Configurations of
//!   the `render`, `query` and `theme` commands
//! - **load_theme_overrides**: Reads a JSON or TOML theme file
//!
//! ## Example
//!
//! ```
//! use graphqlviz::common::ConfigBuilder;
//! use graphqlviz::config::{RenderOptions, Theme};
//! use serde_json::json;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let options = RenderOptions::builder()
//!     .with_sort(true)
//!     .with_theme(json!({"inputs": {"hide": true}}))
//!     .build()?;
//!
//! let theme = options.resolve_theme()?;
//! assert!(theme.field.sort);
//! assert!(theme.inputs.hide);
//! assert_eq!(theme.types, Theme::default().types);
//! # Ok(())
//! # }
//! ```

pub mod command;
pub mod loader;
pub mod render;
pub mod theme;

pub use command::{QueryConfig, RenderConfig, RenderConfigBuilder, ThemeConfig, ThemeConfigBuilder};
pub use loader::{load_theme_overrides, parse_assignment};
pub use render::{RenderOptions, RenderOptionsBuilder};
pub use theme::{
    AnchorTheme, CategoryTheme, EdgeLabels, FieldAlign, FieldTheme, HeaderTheme, Theme,
    merge_values, path_override,
};
