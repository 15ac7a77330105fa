use std::io::Write;

use crate::navigator::{ScreenHost, Section, ViewModel};

/// Screen host that renders screens as text.
///
/// Write errors are logged and otherwise ignored; a broken stdout must not
/// abort navigation.
pub struct ConsoleHost<W> {
    out: W,
    checked: Option<usize>,
    title: String,
}

impl<W: Write> ConsoleHost<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            checked: None,
            title: String::new(),
        }
    }

    pub fn checked(&self) -> Option<usize> {
        self.checked
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{}", text) {
            tracing::warn!(error = %e, "Console host write failed");
        }
    }
}

impl<W: Write> ScreenHost for ConsoleHost<W> {
    fn display(&mut self, section: Section, view_model: &ViewModel, title: &str) {
        let body = serde_json::to_string_pretty(view_model.state())
            .unwrap_or_else(|_| view_model.state().to_string());
        self.emit(&format!("== {} [{}] ==\n{}", title, section, body));
    }

    fn set_menu_checked(&mut self, position: Option<usize>) {
        self.checked = position;
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn close_menu(&mut self) {}
}
