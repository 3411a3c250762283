//! Cleanup of raw model output before it is shown or committed.

/// Strip markdown fencing, backticks, triple quotes, and a wrapping quote
/// pair from model output.
///
/// Passes repeat until nothing changes, so the result is stable under a
/// second application even when one removal exposes another (for example
/// `'''` removal leaving `"""` behind).
pub fn sanitize_response(text: &str) -> String {
    let mut current = text.to_string();
    loop {
        let next = sanitize_pass(&current);
        if next == current {
            return next;
        }
        current = next;
    }
}

fn sanitize_pass(text: &str) -> String {
    let cleaned = text
        .replace("```", "")
        .replace('`', "")
        .replace("\"\"\"", "")
        .replace("'''", "");

    let trimmed = cleaned.trim();
    match strip_wrapping_quotes(trimmed) {
        Some(inner) => inner.trim().to_string(),
        None => trimmed.to_string(),
    }
}

/// Return the text between one outer `"` or `'` pair that spans the whole
/// string. Quotes inside, such as apostrophes, do not matter.
fn strip_wrapping_quotes(text: &str) -> Option<&str> {
    ['"', '\''].into_iter().find_map(|quote| {
        text.strip_prefix(quote)?.strip_suffix(quote)
    })
}
