//! Console rendering of reports and table previews.

mod preview;
mod report;

pub use preview::render_preview;
pub use report::{render_json, render_table, render_text};
