// src/core/tokens.rs
//
// Stage one of the pipeline. The recognizer flattens the sheet into one
// blob of text; all structure downstream is recovered from token positions,
// so this is the only place that looks at whitespace.

/// Split recognized text into ordered, non-empty, whitespace-delimited
/// tokens. No case or punctuation normalization happens here; the shape
/// filters own all tolerance.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

#[cfg(test)]
mod tests {
    use super::tokenize;

    #[test]
    fn splits_on_any_whitespace_run() {
        let toks = tokenize("PTS  7\t12\n\n 3 ");
        assert_eq!(toks, vec!["PTS", "7", "12", "3"]);
    }

    #[test]
    fn empty_and_blank_input_yield_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \n\t ").is_empty());
    }

    #[test]
    fn tokens_keep_their_glyphs() {
        // Noise stays intact for the cleaners to judge.
        assert_eq!(tokenize("•Tanaka 3/7"), vec!["•Tanaka", "3/7"]);
    }
}
