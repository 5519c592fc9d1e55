//! Metadata fence detection and splitting

use trellis_core::{Frontmatter, FrontmatterFormat, ParseError, ParseResult};

/// Split a document into its metadata block and body
///
/// The document must begin with a `---` (YAML) or `+++` (TOML) fence
/// line closed by a matching fence. CRLF line endings are accepted.
/// A missing or unterminated fence is a format error.
pub fn split(content: &str) -> ParseResult<(Frontmatter, &str)> {
    if let Some(result) = split_with(content, "---", FrontmatterFormat::Yaml)? {
        return Ok(result);
    }
    if let Some(result) = split_with(content, "+++", FrontmatterFormat::Toml)? {
        return Ok(result);
    }
    Err(ParseError::format(
        "missing metadata block: document does not start with a `---` or `+++` fence",
    ))
}

/// Split a document, tolerating a missing metadata block
///
/// An unterminated fence is still a format error; only the complete
/// absence of a fence degrades to a body-only document.
pub fn split_lenient(content: &str) -> ParseResult<(Option<Frontmatter>, &str)> {
    match split(content) {
        Ok((frontmatter, body)) => Ok((Some(frontmatter), body)),
        Err(ParseError::Format(msg)) if msg.starts_with("missing metadata block") => {
            Ok((None, content))
        }
        Err(e) => Err(e),
    }
}

/// Try one fence marker; Ok(None) means the document does not open
/// with this marker at all.
fn split_with<'a>(
    content: &'a str,
    marker: &str,
    format: FrontmatterFormat,
) -> ParseResult<Option<(Frontmatter, &'a str)>> {
    for eol in ["\n", "\r\n"] {
        let open = format!("{marker}{eol}");
        if let Some(rest) = content.strip_prefix(open.as_str()) {
            let close = format!("{eol}{marker}{eol}");
            if let Some(end_idx) = rest.find(close.as_str()) {
                let raw = &rest[..end_idx];
                let body = &rest[end_idx + close.len()..];
                return Ok(Some((Frontmatter::new(raw.to_string(), format), body)));
            }
            // Closing fence at end of input without a trailing newline
            let close_eof = format!("{eol}{marker}");
            if let Some(raw) = rest.strip_suffix(close_eof.as_str()) {
                if !raw.contains(close_eof.as_str()) {
                    return Ok(Some((Frontmatter::new(raw.to_string(), format), "")));
                }
            }
            return Err(ParseError::format(format!(
                "unterminated metadata block: opening `{marker}` fence is never closed"
            )));
        }
    }
    Ok(None)
}
