//! Serialization entry points shared by the document and state types.
//!
//! `to_value` is the structured view of a definition; `dumps` is the text
//! form handed to downstream tooling, with the array placeholder rewrite
//! already applied. Per-type shaping (name exclusion, `States` keying,
//! `Branches` wrapping) lives in each type's `Serialize` implementation, so
//! `serde_json::json!`, `to_value` and `dumps` always agree on shape.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use tracing::debug;

use crate::error::Result;
use crate::template;

pub trait Dump: Serialize {
    /// JSON value view of the definition.
    fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Render the finished document text.
    ///
    /// Compact when `indent` is `None`, pretty-printed with that many
    /// spaces otherwise. The returned text is not guaranteed to be valid
    /// JSON: array placeholders (see [`crate::template`]) are spliced in
    /// unquoted for the downstream template expander.
    fn dumps(&self, indent: Option<usize>) -> Result<String> {
        let value = self.to_value()?;
        let raw = match indent {
            None => serde_json::to_string(&value)?,
            Some(width) => {
                let indent = vec![b' '; width];
                let mut buf = Vec::new();
                let mut ser = serde_json::Serializer::with_formatter(
                    &mut buf,
                    PrettyFormatter::with_indent(&indent),
                );
                value.serialize(&mut ser)?;
                String::from_utf8(buf).expect("serde_json emits valid utf-8")
            }
        };
        let document = template::expand_arrays(&raw);
        debug!(bytes = document.len(), "rendered states-language document");
        Ok(document)
    }
}
