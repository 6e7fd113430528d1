//! Hook payload decoding.
//!
//! The host writes one JSON document per invocation. Field naming is
//! flexible: the nested `tool_input` form wins over top-level fields, and
//! anything that cannot be decoded is kept verbatim so it can be passed
//! through untouched.

use serde_json::Value;
use std::io::Read;

/// Errors while reading a payload.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum PayloadError {
    /// Reading standard input failed.
    #[error("failed to read hook payload: {0}")]
    #[diagnostic(code(spec_hooks::payload::io))]
    Io(#[from] std::io::Error),
}

/// File path and content of the edit that triggered the hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditTarget<'a> {
    /// Path of the edited file, as sent by the host.
    pub file_path: &'a str,
    /// Full content of the file after the edit.
    pub content: &'a str,
}

/// A buffered hook payload.
#[derive(Debug, Clone)]
pub struct HookPayload {
    raw: Vec<u8>,
    value: Option<Value>,
}

impl HookPayload {
    /// Buffers the complete input stream, then decodes it.
    ///
    /// # Errors
    ///
    /// Returns error only if the reader itself fails. Malformed JSON is not
    /// an error; see [`HookPayload::parse`].
    pub fn read_from(mut reader: impl Read) -> Result<Self, PayloadError> {
        let mut raw = Vec::new();
        reader.read_to_end(&mut raw)?;
        Ok(Self::parse(raw))
    }

    /// Decodes raw bytes. Never fails: undecodable input keeps its bytes and
    /// has no [`value`](Self::value).
    #[must_use]
    pub fn parse(raw: impl Into<Vec<u8>>) -> Self {
        let raw = raw.into();
        let value = match serde_json::from_slice::<Value>(&raw) {
            Ok(v) => Some(v),
            Err(e) => {
                if !raw.iter().all(u8::is_ascii_whitespace) {
                    tracing::debug!("payload is not JSON: {e}");
                }
                None
            }
        };
        Self { raw, value }
    }

    /// Decoded JSON document, if the input was well-formed.
    #[must_use]
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// Bytes to forward on the success channel.
    ///
    /// The original input unchanged; blank input becomes `{}`.
    #[must_use]
    pub fn passthrough(&self) -> &[u8] {
        if self.raw.iter().all(u8::is_ascii_whitespace) {
            b"{}".as_slice()
        } else {
            self.raw.as_slice()
        }
    }

    /// The edited file path and content.
    ///
    /// Returns `None` when either is missing, empty, or not a string.
    #[must_use]
    pub fn target(&self) -> Option<EditTarget<'_>> {
        let file_path = self
            .nested_str("file_path")
            .or_else(|| self.top_level_str("file_path"))?;
        let content = self
            .nested_str("new_content")
            .or_else(|| self.nested_str("content"))
            .or_else(|| self.top_level_str("content"))?;
        Some(EditTarget { file_path, content })
    }

    /// Replacement text of an in-place edit (`new_string`), if the host sent one.
    #[must_use]
    pub fn edit_snippet(&self) -> Option<&str> {
        self.nested_str("new_string")
            .or_else(|| self.top_level_str("new_string"))
    }

    fn nested_str(&self, key: &str) -> Option<&str> {
        self.value
            .as_ref()?
            .get("tool_input")
            .and_then(|input| non_empty_str(input.get(key)))
    }

    fn top_level_str(&self, key: &str) -> Option<&str> {
        non_empty_str(self.value.as_ref()?.get(key))
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_top_level_fields() {
        let p = HookPayload::parse(r#"{"file_path":"a.java","content":"x"}"#);
        let t = p.target().unwrap();
        assert_eq!(t.file_path, "a.java");
        assert_eq!(t.content, "x");
    }

    #[test]
    fn nested_fields_take_precedence() {
        let p = HookPayload::parse(
            r#"{"file_path":"top.java","content":"top",
                "tool_input":{"file_path":"nested.java","new_content":"nested"}}"#,
        );
        let t = p.target().unwrap();
        assert_eq!(t.file_path, "nested.java");
        assert_eq!(t.content, "nested");
    }

    #[test]
    fn empty_nested_field_falls_back_to_top_level() {
        let p = HookPayload::parse(
            r#"{"file_path":"top.java","content":"top","tool_input":{"file_path":""}}"#,
        );
        assert_eq!(p.target().unwrap().file_path, "top.java");
    }

    #[test]
    fn nested_content_field_is_accepted() {
        let p = HookPayload::parse(r#"{"tool_input":{"file_path":"a.ts","content":"body"}}"#);
        assert_eq!(p.target().unwrap().content, "body");
    }

    #[test]
    fn missing_content_has_no_target() {
        let p = HookPayload::parse(r#"{"file_path":"a.java"}"#);
        assert!(p.target().is_none());
    }

    #[test]
    fn non_string_fields_are_ignored() {
        let p = HookPayload::parse(r#"{"file_path":42,"content":"x"}"#);
        assert!(p.target().is_none());
    }

    #[test]
    fn malformed_input_passes_through_verbatim() {
        let p = HookPayload::parse("not json {");
        assert!(p.value().is_none());
        assert!(p.target().is_none());
        assert_eq!(p.passthrough(), b"not json {");
    }

    #[test]
    fn blank_input_passes_through_as_empty_object() {
        let p = HookPayload::parse("  \n");
        assert_eq!(p.passthrough(), b"{}");
    }

    #[test]
    fn well_formed_input_is_forwarded_unchanged() {
        let raw = "{ \"file_path\" : \"a.java\",\n  \"content\": \"x\" }\n";
        let p = HookPayload::parse(raw);
        assert_eq!(p.passthrough(), raw.as_bytes());
    }

    #[test]
    fn edit_snippet_from_tool_input() {
        let p = HookPayload::parse(r#"{"tool_input":{"new_string":"hello"}}"#);
        assert_eq!(p.edit_snippet(), Some("hello"));
    }

    #[test]
    fn read_from_buffers_everything() {
        let input: &[u8] = br#"{"file_path":"a","content":"b"}"#;
        let p = HookPayload::read_from(input).unwrap();
        assert!(p.target().is_some());
    }
}
