pub mod json_loader;

pub use json_loader::{load_questions_json, save_questions_json};
