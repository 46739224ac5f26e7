//! Output destination for the `puts` builtin.
//!
//! Programs print through a handler so tests and embedders can capture
//! output instead of writing to stdout.

use std::sync::Arc;

use parking_lot::Mutex;

/// Collects printed lines in memory.
#[derive(Default)]
pub struct BufferPrintHandler {
    buffer: Mutex<String>,
}

impl BufferPrintHandler {
    pub fn new() -> Self {
        BufferPrintHandler::default()
    }

    pub fn println(&self, msg: &str) {
        let mut buf = self.buffer.lock();
        buf.push_str(msg);
        buf.push('\n');
    }

    /// Everything printed so far.
    pub fn output(&self) -> String {
        self.buffer.lock().clone()
    }
}

/// Where `puts` output goes.
pub enum PrintHandler {
    Stdout,
    Buffer(BufferPrintHandler),
    /// Discard everything.
    Silent,
}

impl PrintHandler {
    pub fn println(&self, msg: &str) {
        match self {
            PrintHandler::Stdout => println!("{msg}"),
            PrintHandler::Buffer(h) => h.println(msg),
            PrintHandler::Silent => {}
        }
    }

    /// Captured output; empty for handlers that do not capture.
    pub fn output(&self) -> String {
        match self {
            PrintHandler::Buffer(h) => h.output(),
            PrintHandler::Stdout | PrintHandler::Silent => String::new(),
        }
    }
}

/// Print handler shared between an evaluator and whoever reads its output.
pub type SharedPrintHandler = Arc<PrintHandler>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Stdout)
}

pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Buffer(BufferPrintHandler::new()))
}

pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Silent)
}
