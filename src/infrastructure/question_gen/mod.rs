//! QuestionGenerator 実装

mod builtin;
mod http;

pub use builtin::BuiltinQuestionBank;
pub use http::HttpQuestionGenerator;
