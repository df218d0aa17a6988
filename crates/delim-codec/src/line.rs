//! Line-level helpers shared by the reader and writer.

use std::borrow::Cow;

/// Removes `\r` and `\n` from `value` and replaces every occurrence of the
/// separator with a single space.
///
/// This is lossy: the original characters cannot be recovered on read.
pub fn sanitize(value: &str, separator: char) -> Cow<'_, str> {
    if !value.contains(|c| c == '\r' || c == '\n' || c == separator) {
        return Cow::Borrowed(value);
    }
    Cow::Owned(
        value
            .chars()
            .filter(|c| !matches!(c, '\r' | '\n'))
            .map(|c| if c == separator { ' ' } else { c })
            .collect(),
    )
}

/// Splits one line into field values.
///
/// A trailing `\r` and the terminal separator are removed first, so
/// `"a;b;"` yields `["a", "b"]` and `";"` yields one empty value. A blank line
/// yields no values at all.
pub(crate) fn split_fields(line: &str, separator: char) -> Vec<&str> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    if line.is_empty() {
        return Vec::new();
    }
    let line = line.strip_suffix(separator).unwrap_or(line);
    line.split(separator).collect()
}

/// Appends `values` as one line: each value followed by the separator, then `\n`.
pub(crate) fn push_line<'v>(
    out: &mut String,
    values: impl IntoIterator<Item = &'v str>,
    separator: char,
) {
    for value in values {
        out.push_str(value);
        out.push(separator);
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_passes_clean_values_through() {
        assert!(matches!(sanitize("plain", ';'), Cow::Borrowed("plain")));
    }

    #[test]
    fn sanitize_replaces_separator_and_strips_breaks() {
        assert_eq!(sanitize("a;b", ';'), "a b");
        assert_eq!(sanitize("line1\r\nline2", ';'), "line1line2");
        assert_eq!(sanitize(";\n;", ';'), "  ");
        assert_eq!(sanitize("a|b;c", '|'), "a b;c");
    }

    #[test]
    fn split_drops_terminal_separator() {
        assert_eq!(split_fields("a;b;", ';'), vec!["a", "b"]);
        assert_eq!(split_fields("a;;", ';'), vec!["a", ""]);
        assert_eq!(split_fields(";", ';'), vec![""]);
    }

    #[test]
    fn split_handles_crlf_and_missing_terminator() {
        assert_eq!(split_fields("a;b;\r", ';'), vec!["a", "b"]);
        assert_eq!(split_fields("a;b", ';'), vec!["a", "b"]);
    }

    #[test]
    fn split_blank_line_is_empty() {
        assert!(split_fields("", ';').is_empty());
        assert!(split_fields("\r", ';').is_empty());
    }

    #[test]
    fn push_line_terminates_every_value() {
        let mut out = String::new();
        push_line(&mut out, ["x", "", "z"], ',');
        assert_eq!(out, "x,,z,\n");
        out.clear();
        push_line(&mut out, std::iter::empty(), ',');
        assert_eq!(out, "\n");
    }
}
