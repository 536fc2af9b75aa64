//! JSON pretty-printing for response bodies.

use serde::Serialize;
use serde_json::Value;

/// Formats JSON with pretty-printing using 2-space indentation.
///
/// Object keys come out sorted, since the body is decoded into a
/// `serde_json::Value` first.
///
/// # Examples
///
/// ```
/// use courier::formatter::json::format_json_pretty;
///
/// let json = r#"{"name":"John","age":30}"#;
/// let formatted = format_json_pretty(json).unwrap();
/// assert_eq!(formatted, "{\n  \"age\": 30,\n  \"name\": \"John\"\n}");
/// ```
pub fn format_json_pretty(json: &str) -> Result<String, serde_json::Error> {
    let value: Value = serde_json::from_str(json)?;

    let mut buf = Vec::with_capacity(json.len() * 2);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"  ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;

    // serde_json only ever writes valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
