//! Compact, line-wrapped DOT labels from raw GEDCOM names.
//!
//! `compact` is pure and deterministic. A "line break" in the produced label
//! is the two-character DOT escape `\n`, which the renderer turns into a real
//! break inside the node.

/// Stands in for a parenthesized unknown-name span. Genealogy convention for
/// "nomen nescio". Never abbreviated further.
pub const UNKNOWN_PLACEHOLDER: &str = "N.N.";

/// Honorifics whose following token is kept whole instead of being reduced to
/// an initial. Exact match, case-sensitive. Batak/Indonesian titles from this
/// tool's data, plus the generic doctor title.
const TITLES: [&str; 7] = ["Ompu", "Op.", "Ama", "Nai", "Raja", "St.", "Dr."];

/// Compact a raw display name into a DOT label.
///
/// Surname `/` delimiters render inline as spaces; parenthesized unknown-name
/// spans become [`UNKNOWN_PLACEHOLDER`]; middle tokens shrink to initials
/// except directly after a leading title; adjacent initials share a visual
/// line, every other token boundary becomes a `\n` break.
#[must_use]
pub fn compact(raw_name: &str) -> String {
    let flattened = flatten(raw_name);
    let tokens: Vec<&str> = flattened.split_whitespace().collect();
    let last = tokens.len().saturating_sub(1);

    let mut shortened: Vec<String> = Vec::with_capacity(tokens.len());
    for (i, token) in tokens.iter().enumerate() {
        let keep_whole = i == 0
            || i == last
            || *token == UNKNOWN_PLACEHOLDER
            || (i == 1 && TITLES.contains(&tokens[0]));
        if keep_whole {
            shortened.push((*token).to_string());
        } else {
            let mut initial = String::new();
            if let Some(c) = token.chars().next() {
                initial.push(c);
            }
            initial.push('.');
            shortened.push(initial);
        }
    }

    let mut label = String::new();
    for (i, token) in shortened.iter().enumerate() {
        if i > 0 {
            if is_initial(&shortened[i - 1]) && is_initial(token) {
                label.push(' ');
            } else {
                label.push_str("\\n");
            }
        }
        label.push_str(token);
    }
    label
}

/// Replace `/` delimiters with spaces and parenthesized spans with the
/// placeholder, so the result splits cleanly on whitespace.
fn flatten(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut depth = 0usize;
    for ch in raw.chars() {
        match ch {
            '(' => {
                if depth == 0 {
                    out.push(' ');
                    out.push_str(UNKNOWN_PLACEHOLDER);
                    out.push(' ');
                }
                depth += 1;
            }
            ')' => depth = depth.saturating_sub(1),
            _ if depth > 0 => {}
            '/' => out.push(' '),
            _ => out.push(ch),
        }
    }
    out
}

/// Single letter plus period, e.g. `J.` — the shape produced by abbreviation.
fn is_initial(token: &str) -> bool {
    let mut chars = token.chars();
    matches!((chars.next(), chars.next(), chars.next()), (Some(_), Some('.'), None))
}
