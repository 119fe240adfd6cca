//! Retrieval core: chunking, relevance ranking, prompt assembly.
//!
//! Everything in this crate is pure and synchronous. A document becomes an
//! ordered sequence of line-bounded chunks ([`chunker::chunk`]), a question
//! picks the most relevant chunks by keyword overlap
//! ([`relevance::select_relevant`]), and the selection is folded into a
//! grounded instruction for the model ([`prompt::build_prompt`]).

pub mod chunker;
pub mod prompt;
pub mod relevance;

pub use chunker::chunk;
pub use prompt::build_prompt;
pub use relevance::select_relevant;
