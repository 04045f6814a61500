//! Caret-marked excerpts for YAML syntax errors.

const CONTEXT_LINES: usize = 3;

/// Renders the error location inside `content`, or `None` when the parser
/// did not report one.
pub fn render_yaml_error(origin: &str, content: &str, err: &serde_yaml::Error) -> Option<String> {
    let location = err.location()?;
    Some(mark_location(
        origin,
        content,
        location.line().saturating_sub(1),
        location.column().saturating_sub(1),
        &err.to_string(),
    ))
}

/// Builds the excerpt from zero-based `line` and `column`.
///
/// Layout: location header, dashed rule, up to three source lines ending at
/// `line`, a caret under `column`, then the message.
pub fn mark_location(
    origin: &str,
    content: &str,
    line: usize,
    column: usize,
    message: &str,
) -> String {
    let lines = content.lines().collect::<Vec<_>>();
    let header = format!("File {origin}, line {}:{}", line + 1, column + 1);
    let rule = "-".repeat(header.len() + 7);
    let start = (line + 1).saturating_sub(CONTEXT_LINES);
    let end = (line + 1).min(lines.len());

    let mut out = vec![header, rule];
    if start < end {
        out.extend(lines[start..end].iter().map(|text| text.to_string()));
    }
    out.push(format!("{}^", " ".repeat(column)));
    out.push(message.to_string());
    out.join("\n")
}
