use log::debug;

/// Repair the JSON defects publishers most often ship in JSON-LD blocks.
///
/// Raw newlines, carriage returns and tabs inside string literals are
/// escaped, and commas directly before a closing `]` or `}` are dropped.
/// Everything else is copied through unchanged.
pub fn sanitize_json(json_str: &str) -> String {
    let mut cleaned = String::with_capacity(json_str.len());
    let mut in_string = false;
    let mut escaped = false;
    let mut chars = json_str.chars().peekable();

    while let Some(c) = chars.next() {
        if in_string {
            match c {
                _ if escaped => {
                    escaped = false;
                    cleaned.push(c);
                }
                '\\' => {
                    escaped = true;
                    cleaned.push(c);
                }
                '"' => {
                    in_string = false;
                    cleaned.push(c);
                }
                '\n' => cleaned.push_str("\\n"),
                '\r' => cleaned.push_str("\\r"),
                '\t' => cleaned.push_str("\\t"),
                _ => cleaned.push(c),
            }
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                cleaned.push(c);
            }
            ',' => {
                // Look past whitespace for a closing bracket
                let rest = chars.clone().find(|next| !next.is_whitespace());
                if matches!(rest, Some(']' | '}')) {
                    debug!("Dropping trailing comma");
                } else {
                    cleaned.push(c);
                }
            }
            _ => cleaned.push(c),
        }
    }

    cleaned
}
