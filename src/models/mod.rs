pub mod header;
pub mod paper;
pub mod question;

pub use header::PaperHeader;
pub use paper::{ExamType, OrPair, SelectedPaper};
pub use question::{Part, Question};
