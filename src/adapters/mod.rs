pub mod console_sink;
pub mod file_source;

pub use console_sink::ConsoleSink;
pub use file_source::FileGridSource;
