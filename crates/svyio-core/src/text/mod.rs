//! Text file helpers: line streaming, line counting, writing and size
//! formatting.

pub mod lines;
pub mod size;
pub mod write;

pub use lines::line_count;
pub use lines::read_lines;
pub use size::humanize_file_size;
pub use write::WriteMode;
pub use write::write_lines;
pub use write::write_text;
