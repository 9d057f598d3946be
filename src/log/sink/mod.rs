mod console_sink;
mod memory_sink;
mod trait_;
mod writer_sink;

pub use console_sink::{ConsoleSink, ConsoleSinkConfig, Target};
pub use memory_sink::MemorySink;
pub use trait_::LogSink;
pub use writer_sink::WriterSink;
