//! services/frontend/src/adapters/console.rs
//!
//! Terminal stand-ins for the page elements the client writes to, plus the
//! line commands the console host understands.

use issue_analysis_core::ports::{InputField, LoadingIndicator, PageSurface, ResultView};
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use tracing::{error, info};

//=========================================================================================
// Line Commands
//=========================================================================================

/// What one line typed into the console host means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Type the text into the input field and press Enter.
    Submit(String),
    /// Activate the submit control with whatever the input field holds.
    Click,
    Hello,
    Color,
    Quit,
}

impl ConsoleCommand {
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            ":click" => Self::Click,
            ":hello" => Self::Hello,
            ":color" => Self::Color,
            ":quit" | ":q" => Self::Quit,
            _ => Self::Submit(line.to_string()),
        }
    }
}

//=========================================================================================
// Page Element Adapters
//=========================================================================================

/// The issue-number input; the host overwrites it with each typed line.
#[derive(Default)]
pub struct ConsoleInput(Mutex<String>);

impl ConsoleInput {
    pub fn set(&self, text: String) {
        *lock(&self.0) = text;
    }
}

impl InputField for ConsoleInput {
    fn value(&self) -> String {
        lock(&self.0).clone()
    }
}

/// Prints every non-empty replacement of the result container.
pub struct ConsoleResultView {
    current: Mutex<String>,
    out: Mutex<Box<dyn Write + Send>>,
}

impl Default for ConsoleResultView {
    /// Writes to stdout.
    fn default() -> Self {
        Self::with_writer(std::io::stdout())
    }
}

impl ConsoleResultView {
    pub fn with_writer<W: Write + Send + 'static>(out: W) -> Self {
        Self {
            current: Mutex::new(String::new()),
            out: Mutex::new(Box::new(out)),
        }
    }

    pub fn current(&self) -> String {
        lock(&self.current).clone()
    }
}

impl ResultView for ConsoleResultView {
    fn set_html(&self, html: String) {
        if !html.is_empty() {
            let mut out = lock(&self.out);
            if let Err(e) = writeln!(out, "{}", html.trim()).and_then(|()| out.flush()) {
                error!("Failed to write result: {}", e);
            }
        }
        *lock(&self.current) = html;
    }
}

#[derive(Default)]
pub struct ConsoleLoadingIndicator(AtomicBool);

impl ConsoleLoadingIndicator {
    pub fn is_visible(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

impl LoadingIndicator for ConsoleLoadingIndicator {
    fn set_visible(&self, visible: bool) {
        self.0.store(visible, Ordering::SeqCst);
        if visible {
            info!("Analyzing...");
        } else {
            info!("Done.");
        }
    }
}

/// The page surface for the cosmetic actions.
#[derive(Default)]
pub struct ConsolePage {
    background: Mutex<Option<String>>,
}

impl ConsolePage {
    pub fn background(&self) -> Option<String> {
        lock(&self.background).clone()
    }
}

impl PageSurface for ConsolePage {
    fn alert(&self, message: &str) {
        info!(%message, "Alert");
    }

    fn set_background(&self, color: &str) {
        info!(color, "Background colour changed");
        *lock(&self.background) = Some(color.to_string());
    }
}

/// Locks a mutex, recovering the data if a previous holder panicked.
fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(ConsoleCommand::parse(":click"), ConsoleCommand::Click);
        assert_eq!(ConsoleCommand::parse(" :hello "), ConsoleCommand::Hello);
        assert_eq!(ConsoleCommand::parse(":color"), ConsoleCommand::Color);
        assert_eq!(ConsoleCommand::parse(":q"), ConsoleCommand::Quit);
        assert_eq!(
            ConsoleCommand::parse("42"),
            ConsoleCommand::Submit("42".to_string())
        );
        assert_eq!(
            ConsoleCommand::parse(""),
            ConsoleCommand::Submit(String::new())
        );
    }

    #[derive(Clone, Default)]
    struct SharedBuffer(std::sync::Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            lock(&self.0).extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_result_view_writes_to_injected_writer() {
        let buffer = SharedBuffer::default();
        let view = ConsoleResultView::with_writer(buffer.clone());

        view.set_html(String::new());
        view.set_html("  <div class=\"error\">boom</div>\n".to_string());

        let written = String::from_utf8(lock(&buffer.0).clone()).unwrap();
        assert_eq!(written, "<div class=\"error\">boom</div>\n");
        assert_eq!(view.current(), "  <div class=\"error\">boom</div>\n");
    }

    #[test]
    fn test_console_elements_keep_state() {
        let input = ConsoleInput::default();
        input.set("123".to_string());
        assert_eq!(input.value(), "123");

        let view = ConsoleResultView::with_writer(std::io::sink());
        view.set_html(String::new());
        assert_eq!(view.current(), "");

        let loading = ConsoleLoadingIndicator::default();
        loading.set_visible(true);
        assert!(loading.is_visible());
        loading.set_visible(false);
        assert!(!loading.is_visible());

        let page = ConsolePage::default();
        page.set_background("#e3f2fd");
        assert_eq!(page.background().as_deref(), Some("#e3f2fd"));
    }
}
