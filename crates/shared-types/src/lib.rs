pub mod types;

pub use types::{
    AnalysisReport, DocumentReport, Issue, Paragraph, ReferencePassage, Severity,
};
