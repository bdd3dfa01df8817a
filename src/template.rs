//! Post-processing pass for array placeholder tokens.
//!
//! A caller that needs an array literal spliced in by a downstream template
//! expander stores the string `"[${name}]"` as a field value. The object
//! model has no placeholder value type, so the rewrite happens on the
//! serialized text instead.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::debug;

/// Quoted array placeholder, e.g. `"[${items}]"`.
static ARRAY_PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""\[(\$\{[a-zA-Z_-]*\})]""#).expect("placeholder pattern"));

/// Rewrite every quoted `"[${name}]"` value into the unquoted array literal
/// `[${name}]`.
///
/// Each match is replaced with its own captured name, so duplicate or
/// reordered placeholders cannot cross-pair. The result is no longer valid
/// JSON once a placeholder has been spliced in; the downstream expander is
/// the intended consumer of such documents.
pub fn expand_arrays(document: &str) -> String {
    let mut expanded = 0usize;
    let rewritten = ARRAY_PLACEHOLDER.replace_all(document, |caps: &Captures| {
        expanded += 1;
        format!("[{}]", &caps[1])
    });
    if expanded > 0 {
        debug!(expanded, "spliced array placeholders into document text");
    }
    rewritten.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrites_quoted_placeholder() {
        let out = expand_arrays(r#"{"Items": "[${myArr}]"}"#);
        assert_eq!(out, r#"{"Items": [${myArr}]}"#);
    }

    #[test]
    fn distinct_placeholders_keep_their_names() {
        let out = expand_arrays(r#"["[${first}]", "[${second-two}]", "[${first}]"]"#);
        assert_eq!(out, r#"[[${first}], [${second-two}], [${first}]]"#);
    }

    #[test]
    fn underscore_and_hyphen_names_match() {
        let out = expand_arrays(r#""[${snake_case}]" "[${kebab-case}]""#);
        assert_eq!(out, r#"[${snake_case}] [${kebab-case}]"#);
    }

    #[test]
    fn empty_name_is_still_a_placeholder() {
        assert_eq!(expand_arrays(r#""[${}]""#), r#"[${}]"#);
    }

    #[test]
    fn leaves_non_matching_strings_alone() {
        let text = r#"{"A": "[$x]", "B": "[${has space}]", "C": "${noBrackets}", "D": "[${digits9}]"}"#;
        assert_eq!(expand_arrays(text), text);
    }
}
