//! Sheet export: form-template filling plus JSON and plain-text
//! projections of a computed character sheet.

pub mod document;
pub mod error;
pub mod fields;
pub mod json;
pub mod mapper;
pub mod text;

pub use document::{FieldKind, FormDocument};
pub use error::ExportError;
pub use json::{FieldSelection, JsonStyle, render_json_full, render_json_selected};
pub use mapper::{ExportReport, GENERATOR_LABEL, export_sheet, format_modifier};
pub use text::{TextStyle, render_text};
