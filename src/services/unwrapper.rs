const FENCE: &str = "```";

/// Strips one layer of markdown code fence from a completion.
///
/// The text is trimmed; if it then opens with a fence line (three backticks,
/// optionally followed by a language tag) that line is removed, together with
/// a closing fence line when one is present. Only the outermost pair is
/// removed, so doubly-fenced text keeps its inner fence. Never fails.
pub fn unwrap_completion(raw: &str) -> String {
    let trimmed = raw.trim();

    let Some(after_fence) = trimmed.strip_prefix(FENCE) else {
        return trimmed.to_string();
    };

    let body = match after_fence.split_once('\n') {
        Some((info, rest)) if is_info_string(info) => rest,
        // Everything on one line, e.g. ```json{"cards":[]}```
        _ => after_fence.trim_start_matches(|c: char| c.is_ascii_alphanumeric() || c == '-' || c == '_'),
    };

    strip_closing_fence(body).trim().to_string()
}

fn is_info_string(line: &str) -> bool {
    line.trim()
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '+' | '.'))
}

fn strip_closing_fence(body: &str) -> &str {
    let body = body.trim_end();
    match body.rsplit_once('\n') {
        Some((content, last)) if last.trim() == FENCE => content,
        None if body.trim() == FENCE => "",
        _ => body.strip_suffix(FENCE).unwrap_or(body),
    }
}
