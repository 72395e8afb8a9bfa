pub mod app;
pub mod loader;

pub use app::{App, RunStats};
pub use loader::{load_bank_text, load_bank_texts};
