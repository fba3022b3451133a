mod span;
mod types;

pub use span::FunctionSpans;
pub use types::FunctionSpan;
