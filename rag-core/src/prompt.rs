//! Grounded prompt assembly: fixed instruction template around a context
//! block and a question.

/// Separator between context chunks inside the prompt.
const CHUNK_SEPARATOR: &str = "\n\n";

/// Constraint appended after the question so answers stay inside the
/// provided material.
const GROUNDING_RULE: &str = "Answer only with information present in the context. \
If the context does not contain the answer, say that the provided document does not cover it.";

/// Build the full instruction text for one question over selected chunks.
///
/// The context chunks are joined with a blank line, the question follows
/// the context block, and the text ends with an `ANSWER:` marker after
/// which the model writes its completion.
///
/// # Example
/// ```
/// let context = vec!["ownership moves values".to_string()];
/// let prompt = rag_core::build_prompt("What moves values?", &context);
/// assert!(prompt.contains("QUESTION:"));
/// assert!(prompt.ends_with("ANSWER:"));
/// ```
pub fn build_prompt(question: &str, context: &[String]) -> String {
    let context_block = context.join(CHUNK_SEPARATOR);

    format!(
        "Answer the question below precisely, using the following context.\n\n\
CONTEXT:\n{context_block}\n\n\
QUESTION:\n{question}\n\n\
{GROUNDING_RULE}\n\n\
ANSWER:"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_carries_question_and_every_chunk() {
        let context = vec!["alpha facts".to_string(), "beta facts".to_string()];
        let prompt = build_prompt("what about alpha?", &context);

        assert!(prompt.contains("what about alpha?"));
        assert!(prompt.contains("alpha facts"));
        assert!(prompt.contains("beta facts"));
    }

    #[test]
    fn chunks_are_joined_with_a_blank_line() {
        let context = vec!["one".to_string(), "two".to_string()];
        let prompt = build_prompt("q", &context);
        assert!(prompt.contains("one\n\ntwo"));
    }

    #[test]
    fn prompt_ends_with_the_answer_marker() {
        let prompt = build_prompt("q", &["ctx".to_string()]);
        assert!(prompt.ends_with("ANSWER:"));
    }

    #[test]
    fn grounding_rule_follows_the_question() {
        let prompt = build_prompt("q", &["ctx".to_string()]);
        let q_at = prompt.find("QUESTION:").unwrap();
        let rule_at = prompt.find("Answer only with information").unwrap();
        assert!(rule_at > q_at);
    }
}
