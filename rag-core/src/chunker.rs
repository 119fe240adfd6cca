//! Line-bounded text chunking.
//!
//! The bound is a soft target, not a hard cap: chunk boundaries fall only
//! between lines, so a single line longer than the bound is emitted whole.
//! Given identical input and bound, the produced sequence is identical.

use tracing::trace;

/// Split `text` into chunks of roughly `max_size` characters along line
/// boundaries.
///
/// Lines are trimmed of surrounding whitespace and accumulated; when
/// appending the next line would push a non-empty accumulator past
/// `max_size`, the accumulator is flushed as a chunk. A flush that trims to
/// nothing emits no chunk, so empty or whitespace-only input yields an
/// empty sequence.
pub fn chunk(text: &str, max_size: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();

    for line in text.lines() {
        let line = line.trim();

        if !current.is_empty() && current.len() + line.len() > max_size {
            flush(&mut current, &mut chunks);
        }

        current.push_str(line);
        current.push('\n');
    }
    flush(&mut current, &mut chunks);

    trace!(chunks = chunks.len(), max_size, "document chunked");
    chunks
}

/// Push the trimmed accumulator as a chunk (if it holds anything) and reset.
fn flush(current: &mut String, chunks: &mut Vec<String>) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        chunks.push(trimmed.to_string());
    }
    current.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_no_chunks() {
        assert!(chunk("", 100).is_empty());
        assert!(chunk("\n\n  \n", 100).is_empty());
    }

    #[test]
    fn short_text_becomes_a_single_chunk() {
        let chunks = chunk("alpha\nbeta\n", 100);
        assert_eq!(chunks, vec!["alpha\nbeta"]);
    }

    #[test]
    fn never_splits_a_line() {
        let text = "first line here\nsecond line here\nthird line here\nfourth line here\n";
        let original: Vec<&str> = text.lines().map(str::trim).collect();

        let chunks = chunk(text, 20);
        assert!(chunks.len() > 1);

        // Every chunk reproduces a contiguous run of original lines.
        let mut cursor = 0;
        for c in &chunks {
            for line in c.lines() {
                assert_eq!(line, original[cursor]);
                cursor += 1;
            }
        }
        assert_eq!(cursor, original.len());
    }

    #[test]
    fn oversized_line_is_emitted_whole() {
        let long = "x".repeat(500);
        let text = format!("short\n{long}\nshort again\n");
        let chunks = chunk(&text, 100);

        assert!(chunks.iter().any(|c| c.contains(&long)));
        // The oversized line stays on one chunk, unsplit.
        let host = chunks.iter().find(|c| c.contains(&long)).unwrap();
        assert!(host.lines().any(|l| l == long));
    }

    #[test]
    fn rechunking_chunk_output_is_stable() {
        let text = (0..40)
            .map(|i| format!("line number {i} with some filler text"))
            .collect::<Vec<_>>()
            .join("\n");

        let first = chunk(&text, 120);
        let rejoined = first.join("\n");
        let second = chunk(&rejoined, 120);

        assert_eq!(first, second);
    }

    #[test]
    fn identical_input_chunks_identically() {
        let text = "a\nbb\nccc\ndddd\neeeee\n";
        assert_eq!(chunk(text, 7), chunk(text, 7));
    }
}
