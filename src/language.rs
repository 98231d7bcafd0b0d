//! BCP-47 language tag validation
//!
//! Language-tagged literals carry a tag that must match the BCP-47 grammar,
//! including the registry's grandfathered entries. Validation is a pure
//! predicate: a malformed tag is reported as `false`, never as an error.

use regex::Regex;
use std::sync::LazyLock;

/// Irregular grandfathered tags that do not fit the general grammar
const IRREGULAR: &str = "en-GB-oed|i-ami|i-bnn|i-default|i-enochian|i-hak\
|i-klingon|i-lux|i-mingo|i-navajo|i-pwn|i-tao|i-tay|i-tsu\
|sgn-BE-FR|sgn-BE-NL|sgn-CH-DE";

/// Regular grandfathered tags, registered before the current grammar
const REGULAR: &str =
    "art-lojban|cel-gaulish|no-bok|no-nyn|zh-guoyu|zh-hakka|zh-min|zh-min-nan|zh-xiang";

static LANGUAGE_TAG: LazyLock<Regex> = LazyLock::new(|| {
    // language(-extlang){0,2} | 4-letter reserved form
    let language = "(?:[a-z]{2,3}(?:-[a-z]{3}){0,2}|[a-z]{4})";
    let script = "(?:-[a-z]{4})?";
    let region = "(?:-(?:[a-z]{2}|[0-9]{3}))?";
    let variant = "(?:-(?:[a-z0-9]{5,8}|[0-9][a-z0-9]{3}))*";
    // singleton is any alphanumeric except x
    let extension = "(?:-[0-9a-wy-z](?:-[a-z0-9]{2,8})+)*";
    let private_use = "(?:-x(?:-[a-z0-9]{1,8})+)?";
    let private_only = "x(?:-[a-z0-9]{1,8})+";
    Regex::new(&format!(
        "(?i)^(?:{IRREGULAR}|{REGULAR}|{language}{script}{region}{variant}{extension}{private_use}|{private_only})$"
    ))
    .expect("language tag pattern is valid")
});

/// Check whether `tag` is a structurally valid BCP-47 language tag.
///
/// Matching is case-insensitive and covers the grandfathered registry
/// entries as well as the general
/// `language(-extlang)(-script)(-region)(-variant)*(-extension)*(-privateuse)?`
/// shape and standalone private-use tags. The whole string must match and
/// the input is validated as-is, without normalization.
pub fn is_valid_language_tag(tag: &str) -> bool {
    LANGUAGE_TAG.is_match(tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_language_tags() {
        assert!(is_valid_language_tag("en"));
        assert!(is_valid_language_tag("fr"));
        assert!(is_valid_language_tag("nld"));
    }

    #[test]
    fn test_language_with_region_and_script() {
        assert!(is_valid_language_tag("en-GB"));
        assert!(is_valid_language_tag("zh-Hans"));
        assert!(is_valid_language_tag("zh-Hans-CN"));
        assert!(is_valid_language_tag("es-419"));
    }

    #[test]
    fn test_extended_language_subtags() {
        assert!(is_valid_language_tag("zh-cmn-Hans-CN"));
        assert!(is_valid_language_tag("zh-yue-HK"));
    }

    #[test]
    fn test_variants() {
        assert!(is_valid_language_tag("sl-rozaj"));
        assert!(is_valid_language_tag("sl-rozaj-biske"));
        assert!(is_valid_language_tag("de-CH-1901"));
    }

    #[test]
    fn test_extensions_and_private_use() {
        assert!(is_valid_language_tag("en-a-myext-b-another"));
        assert!(is_valid_language_tag("en-US-x-twain"));
        assert!(is_valid_language_tag("x-whatever"));
        assert!(is_valid_language_tag("qaa-Qaaa-QM-x-southern"));
    }

    #[test]
    fn test_irregular_grandfathered_tags() {
        assert!(is_valid_language_tag("i-klingon"));
        assert!(is_valid_language_tag("i-enochian"));
        assert!(is_valid_language_tag("en-GB-oed"));
        assert!(is_valid_language_tag("sgn-BE-FR"));
        assert!(is_valid_language_tag("sgn-CH-DE"));
    }

    #[test]
    fn test_regular_grandfathered_tags() {
        assert!(is_valid_language_tag("art-lojban"));
        assert!(is_valid_language_tag("cel-gaulish"));
        assert!(is_valid_language_tag("no-bok"));
        assert!(is_valid_language_tag("zh-min-nan"));
        assert!(is_valid_language_tag("zh-xiang"));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert!(is_valid_language_tag("EN-gb"));
        assert!(is_valid_language_tag("I-KLINGON"));
        assert!(is_valid_language_tag("ZH-Min-NAN"));
    }

    #[test]
    fn test_structurally_invalid_tags() {
        assert!(!is_valid_language_tag(""));
        assert!(!is_valid_language_tag("1234"));
        assert!(!is_valid_language_tag("en--US"));
        assert!(!is_valid_language_tag("-en"));
        assert!(!is_valid_language_tag("en-"));
        assert!(!is_valid_language_tag("x-"));
        assert!(!is_valid_language_tag("toolonglanguage"));
    }

    #[test]
    fn test_whole_string_must_match() {
        assert!(!is_valid_language_tag("en-US extra"));
        assert!(!is_valid_language_tag(" en"));
    }
}
