mod json;
mod narrative;
mod table;

pub use json::{render_json, render_json_pretty};
pub use narrative::render_narrative;
pub use table::{render_table, table_header};
