use crate::domain::ports::DisplaySlot;
use crate::domain::submission::MessageColor;
use std::io::Write;
use std::sync::{Arc, Mutex};
use tracing::warn;

/// A writer shared by every slot of one terminal page.
pub type SharedWriter = Arc<Mutex<dyn Write + Send>>;

pub fn shared_writer<W: Write + Send + 'static>(writer: W) -> SharedWriter {
    Arc::new(Mutex::new(writer))
}

/// Renders a page slot as lines of text: `<slot>: <text>`.
///
/// Colour changes are printed as `<slot> color: <css value>`.
#[derive(Clone)]
pub struct TerminalSlot {
    name: String,
    out: SharedWriter,
}

impl TerminalSlot {
    pub fn new(name: impl Into<String>, out: SharedWriter) -> Self {
        Self {
            name: name.into(),
            out,
        }
    }

    fn write_line(&self, line: std::fmt::Arguments<'_>) {
        let mut out = self.out.lock().unwrap_or_else(|e| e.into_inner());
        if let Err(e) = out.write_fmt(line).and_then(|_| out.flush()) {
            warn!(slot = %self.name, error = %e, "Failed to write slot");
        }
    }
}

impl DisplaySlot for TerminalSlot {
    fn set_text(&self, text: &str) {
        self.write_line(format_args!("{}: {}\n", self.name, text));
    }

    fn set_color(&self, color: MessageColor) {
        self.write_line(format_args!("{} color: {}\n", self.name, color.css_value()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_terminal_slots_share_output() {
        let buffer = Buffer::default();
        let out = shared_writer(buffer.clone());
        let subtotal = TerminalSlot::new("subtotal", out.clone());
        let message = TerminalSlot::new("message", out);

        subtotal.set_text("GHS 20.00");
        message.set_color(MessageColor::Success);
        message.set_text("");

        let written = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        assert_eq!(
            written,
            "subtotal: GHS 20.00\nmessage color: var(--success-green)\nmessage: \n"
        );
    }
}
