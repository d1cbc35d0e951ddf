pub mod console;
pub mod http;

pub use console::{ConsoleCommand, ConsoleInput, ConsoleLoadingIndicator, ConsolePage, ConsoleResultView};
pub use http::HttpAnalysisBackend;
