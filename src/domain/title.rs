//! Title-case normalizer for messy movie titles.

/// Words kept as written unless they open the title. Matched case-sensitively.
pub const MINOR_WORDS: [&str; 11] = [
    "ka", "ki", "ke", "se", "aur", "ya", "the", "of", "in", "a", "an",
];

/// Collapse spaces and title-case every word.
///
/// Tokens are split on `' '` only. A token from [`MINOR_WORDS`] in a
/// non-leading position is emitted unchanged; everything else becomes
/// uppercase first character plus lowercase rest. Whitespace-only input
/// yields `""`.
pub fn normalize_title(input: &str) -> String {
    if input.trim().is_empty() {
        return String::new();
    }

    input
        .split(' ')
        .filter(|word| !word.is_empty())
        .enumerate()
        .map(|(index, word)| {
            if index != 0 && MINOR_WORDS.contains(&word) {
                word.to_string()
            } else {
                capitalize(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_spaces_and_shouting() {
        assert_eq!(
            normalize_title("  DILWALE   DULHANIA   LE   JAYENGE  "),
            "Dilwale Dulhania Le Jayenge"
        );
    }

    #[test]
    fn test_minor_words_stay_lowercase_after_first() {
        assert_eq!(normalize_title("dil ka kya kare"), "Dil ka Kya Kare");
        assert_eq!(normalize_title("the house"), "The House");
        assert_eq!(normalize_title("a tale of two cities"), "A Tale of Two Cities");
    }

    #[test]
    fn test_minor_word_match_is_case_sensitive() {
        assert_eq!(normalize_title("dil KA kya"), "Dil Ka Kya");
        assert_eq!(normalize_title("kabhi Ki kabhi"), "Kabhi Ki Kabhi");
    }

    #[test]
    fn test_blank_input() {
        assert_eq!(normalize_title(""), "");
        assert_eq!(normalize_title("   "), "");
        assert_eq!(normalize_title("\t\n "), "");
    }

    #[test]
    fn test_single_character_words() {
        assert_eq!(normalize_title("x y"), "X Y");
        assert_eq!(normalize_title("a a"), "A a");
    }

    #[test]
    fn test_non_ascii_words() {
        assert_eq!(normalize_title("ÉCOLE été"), "École Été");
    }

    #[test]
    fn test_idempotent() {
        for title in [
            "  DILWALE   DULHANIA   LE   JAYENGE  ",
            "dil ka kya kare",
            "the house of KA",
            "sholay",
            "ek\tduje ke liye",
            "",
        ] {
            let once = normalize_title(title);
            assert_eq!(normalize_title(&once), once, "input: {title:?}");
        }
    }
}
