pub mod bank_service;
pub mod category_annotator;
pub mod question_source;
pub mod warn_writer;

pub use bank_service::{BankOrigin, BankService, LoadedBank};
pub use category_annotator::{
    AnnotatorChain, CategoryAnnotator, IdRangeAnnotator, ReferenceAnnotator,
};
pub use question_source::{FileSource, HttpSource, QuestionSource};
pub use warn_writer::WarnWriter;
