use libhack::Word;
use once_cell::sync::Lazy;
use regex::Regex;

pub const VARIABLE_BASE: Word = 16;
pub const COMMENT: &str = "//";
pub const ADDRESS_PREFIX: char = '@';

pub const SCREEN: Word = 16384;
pub const KBD: Word = 24576;

/// Predefined symbols, in the order they are seeded into a fresh table.
pub static BUILTINS: Lazy<Vec<(String, Word)>> = Lazy::new(|| {
    let mut builtins = (0..16)
        .map(|i| (format!("R{}", i), i))
        .collect::<Vec<_>>();
    builtins.extend(
        [
            ("SP", 0),
            ("LCL", 1),
            ("ARG", 2),
            ("THIS", 3),
            ("THAT", 4),
            ("SCREEN", SCREEN),
            ("KBD", KBD),
        ]
        .map(|(name, address)| (name.to_owned(), address)),
    );
    builtins
});

static LABEL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\((?P<label>.*)\)$").expect("Invalid label regex"));
static SYMBOL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_.$:][A-Za-z0-9_.$:]*$").expect("Invalid symbol regex")
});
static NUMBER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?[0-9]+$").expect("Invalid number regex"));

/// The name inside a `(LABEL)` declaration, trimmed. Validity is checked separately.
pub fn label_declaration(line: &str) -> Option<&str> {
    LABEL_REGEX
        .captures(line)
        .and_then(|cap| cap.name("label"))
        .map(|m| m.as_str().trim())
}

pub fn is_symbol(s: &str) -> bool {
    SYMBOL_REGEX.is_match(s)
}

pub fn is_number(s: &str) -> bool {
    NUMBER_REGEX.is_match(s)
}

/// The operand of an `@` instruction, or `None` for computation lines.
pub fn address_operand(line: &str) -> Option<&str> {
    line.strip_prefix(ADDRESS_PREFIX).map(str::trim)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins() {
        assert_eq!(BUILTINS.len(), 23);
        assert!(BUILTINS.contains(&("R15".to_owned(), 15)));
        assert!(BUILTINS.contains(&("THAT".to_owned(), 4)));
        assert!(BUILTINS.contains(&("KBD".to_owned(), 24576)));
    }

    #[test]
    fn labels() {
        assert_eq!(label_declaration("(LOOP)"), Some("LOOP"));
        assert_eq!(label_declaration("( LOOP )"), Some("LOOP"));
        assert_eq!(label_declaration("(a b)"), Some("a b"));
        assert_eq!(label_declaration("@LOOP"), None);
        assert_eq!(label_declaration("(LOOP"), None);
    }

    #[test]
    fn symbols_and_numbers() {
        assert!(is_symbol("ball.setdestination$if_true0"));
        assert!(is_symbol("_tmp:1"));
        assert!(!is_symbol("1abc"));
        assert!(!is_symbol("a b"));
        assert!(!is_symbol(""));

        assert!(is_number("0"));
        assert!(is_number("-5"));
        assert!(is_number("+12"));
        assert!(is_number("99999999999999999999"));
        assert!(!is_number("12a"));
        assert!(!is_number(""));
    }
}
