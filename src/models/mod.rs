pub mod category;
pub mod fallback;
pub mod loaders;
pub mod question;
pub mod report;

pub use category::Category;
pub use fallback::fallback_questions;
pub use loaders::{load_questions_json, save_questions_json};
pub use question::{ParsedQuestion, RawBlock, PLACEHOLDER_OPTIONS};
pub use report::BankReport;
