//! Conversions between `CompoundCapitalized` and `word_separated` identifiers.
//!
//! ```rust
//! use kiln_kernel::naming::{to_camel_form, to_snake_form};
//!
//! assert_eq!(to_snake_form("XMLHttpRequest"), "xml_http_request");
//! assert_eq!(to_snake_form("Foo::Bar-Baz"), "foo/bar_baz");
//! assert_eq!(to_camel_form("foo/bar_baz"), "Foo::BarBaz");
//! ```

use kiln_domain::constants::{NAMESPACE_SEPARATOR, PATH_SEPARATOR};
use regex::Regex;
use std::sync::LazyLock;

const WORD_SEPARATOR: char = '_';

// An acronym run followed by a capitalized word: `HTTPServer` -> `HTTP_Server`.
static ACRONYM_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| compile(r"([A-Z]+)([A-Z][a-z])"));
// A lowercase letter or digit followed by a capital: `myVar` -> `my_Var`.
static CAMEL_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| compile(r"([a-z0-9])([A-Z])"));

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("naming patterns are valid literals")
}

/// Converts an identifier to its word-separated lowercase form.
///
/// The rewrites run in order, each over the previous result:
/// 1. `::` becomes `/`;
/// 2. an uppercase run is split before its last capital when that capital starts a word;
/// 3. a lowercase letter or digit followed by a capital is split;
/// 4. `-` becomes `_`;
/// 5. everything is lowercased.
///
/// Rule 2 has to precede rule 3, otherwise every letter of an acronym would be split.
/// The function is total and idempotent.
#[must_use]
pub fn to_snake_form(identifier: &str) -> String {
    let pathed = identifier.replace(NAMESPACE_SEPARATOR, PATH_SEPARATOR);
    let split = ACRONYM_BOUNDARY.replace_all(&pathed, "${1}_${2}");
    let split = CAMEL_BOUNDARY.replace_all(&split, "${1}_${2}");
    split.replace('-', "_").to_lowercase()
}

/// Converts a word-separated identifier back to its compound-capitalized form.
///
/// `/` becomes `::` and each `_`-separated word is capitalized, so
/// `foo/bar_baz` turns into `Foo::BarBaz`. Acronyms are not restored.
#[must_use]
pub fn to_camel_form(identifier: &str) -> String {
    identifier
        .split(PATH_SEPARATOR)
        .map(|segment| segment.split(WORD_SEPARATOR).map(capitalize).collect::<String>())
        .collect::<Vec<_>>()
        .join(NAMESPACE_SEPARATOR)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| first.to_uppercase().chain(chars).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compound_names() {
        assert_eq!(to_snake_form("MyClassName"), "my_class_name");
        assert_eq!(to_snake_form("myVar"), "my_var");
        assert_eq!(to_snake_form("Int32Value"), "int32_value");
    }

    #[test]
    fn test_acronym_runs() {
        assert_eq!(to_snake_form("HTTPServer"), "http_server");
        assert_eq!(to_snake_form("XMLHttpRequest"), "xml_http_request");
        assert_eq!(to_snake_form("ParseHTML"), "parse_html");
        assert_eq!(to_snake_form("ABC"), "abc");
    }

    #[test]
    fn test_separators() {
        assert_eq!(to_snake_form("Foo::Bar-Baz"), "foo/bar_baz");
        assert_eq!(to_snake_form("::Foo"), "/foo");
        assert_eq!(to_snake_form("Foo::::Bar"), "foo//bar");
        assert_eq!(to_snake_form("a:::b"), "a/:b");
        assert_eq!(to_snake_form("kebab-case-name"), "kebab_case_name");
    }

    #[test]
    fn test_passthrough() {
        assert_eq!(to_snake_form(""), "");
        assert_eq!(to_snake_form("already_snake_42"), "already_snake_42");
        assert_eq!(to_snake_form("_Leading"), "_leading");
        assert_eq!(to_snake_form("Ünïcode"), "ünïcode");
    }

    #[test]
    fn test_camel_form() {
        assert_eq!(to_camel_form(""), "");
        assert_eq!(to_camel_form("my_class_name"), "MyClassName");
        assert_eq!(to_camel_form("foo/bar_baz"), "Foo::BarBaz");
        assert_eq!(to_camel_form(&to_snake_form("Foo::BarBaz")), "Foo::BarBaz");
    }
}
