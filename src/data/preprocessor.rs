// ============================================================
// Layer 4 — Name Preprocessor
// ============================================================
// Cleans one raw line from a name file before it enters the
// corpus.
//
// Name files are hand-collected and often contain:
//   - Non-breaking spaces (U+00A0) and tabs
//   - Byte order marks at the start of the file
//   - Windows carriage returns left over from line splitting
//   - Accented or non-Latin letters outside the alphabet
//
// Cleaning steps (applied in order):
//   1. Map whitespace variants to a plain space, drop controls
//      and zero-width characters (they never separate words)
//   2. Drop every remaining symbol the alphabet cannot encode
//   3. Collapse runs of spaces and trim the ends
//
// A line that ends up empty is rejected by the caller.
//
// Reference: Rust Book §8 (Strings in Rust)
//            Rust Book §13 (Iterators)

use crate::domain::alphabet::Alphabet;

pub struct Preprocessor<'a> {
    alphabet: &'a Alphabet,
}

impl<'a> Preprocessor<'a> {
    pub fn new(alphabet: &'a Alphabet) -> Self {
        Self { alphabet }
    }

    /// Clean a raw line, returning only alphabet symbols.
    pub fn clean(&self, line: &str) -> String {

        // ── Step 1 + 2: Normalise and filter individual characters ───────────
        let filtered: String = line
            .chars()
            .filter_map(|c| match c {
                '\t' | '\u{00A0}' => Some(' '),
                '\u{200B}' | '\u{200C}' | '\u{200D}' | '\u{FEFF}' => None,
                c if c.is_control() => None,
                c if self.alphabet.contains(c) => Some(c),
                _ => None,
            })
            .collect();

        // ── Step 3: Collapse consecutive spaces ──────────────────────────────
        let mut out        = String::with_capacity(filtered.len());
        let mut last_space = false;
        for c in filtered.chars() {
            if c == ' ' {
                if !last_space {
                    out.push(' ');
                }
                last_space = true;
            } else {
                out.push(c);
                last_space = false;
            }
        }

        // A space may have been produced by step 1 even if the alphabet
        // lacks one; drop it in that case.
        let out = out.trim();
        if self.alphabet.contains(' ') {
            out.to_string()
        } else {
            out.chars().filter(|&c| c != ' ').collect()
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_and_collapses() {
        let a = Alphabet::default();
        let p = Preprocessor::new(&a);
        assert_eq!(p.clean("  Van   der\tBerg \r"), "Van der Berg");
    }

    #[test]
    fn test_drops_unknown_symbols() {
        let a = Alphabet::default();
        let p = Preprocessor::new(&a);
        assert_eq!(p.clean("Ślusàrski"), "lusrski");
        assert_eq!(p.clean("O'Neal-2"), "O'Neal-");
    }

    #[test]
    fn test_strips_bom() {
        let a = Alphabet::default();
        let p = Preprocessor::new(&a);
        assert_eq!(p.clean("\u{FEFF}Abe"), "Abe");
    }

    #[test]
    fn test_zero_width_characters_do_not_split_names() {
        let a = Alphabet::default();
        let p = Preprocessor::new(&a);
        assert_eq!(p.clean("Ab\u{200B}c"), "Abc");
        assert_eq!(p.clean("Ab\u{200D}c\u{FEFF}d"), "Abcd");
        assert_eq!(p.clean("Van\u{00A0}Dyke"), "Van Dyke");
    }

    #[test]
    fn test_alphabet_without_space() {
        let a = Alphabet::new("abc").unwrap();
        let p = Preprocessor::new(&a);
        assert_eq!(p.clean("a b\tc"), "abc");
    }

    #[test]
    fn test_empty_string() {
        let a = Alphabet::default();
        let p = Preprocessor::new(&a);
        assert_eq!(p.clean(""), "");
        assert_eq!(p.clean("ß"), "");
    }
}
