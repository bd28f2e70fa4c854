//! Character-budget text shaping: truncation, greedy word wrap, and the
//! currency/number formats the sections share.

/// Truncates to `max_chars`, marking the cut with a three-dot ellipsis that
/// survives WinAnsi encoding.
pub(crate) fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", kept.trim_end())
}

/// Greedy word wrap against a character budget. Words longer than a whole
/// line are hard-split; blank input yields no lines.
pub(crate) fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();
    for raw_line in text.lines() {
        let mut current = String::new();
        for word in raw_line.split_whitespace() {
            let word_len = word.chars().count();
            let current_len = current.chars().count();
            if current.is_empty() {
                if word_len <= max_chars {
                    current.push_str(word);
                } else {
                    current = split_long_word(word, max_chars, &mut lines);
                }
            } else if current_len + 1 + word_len <= max_chars {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(std::mem::take(&mut current));
                if word_len <= max_chars {
                    current.push_str(word);
                } else {
                    current = split_long_word(word, max_chars, &mut lines);
                }
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }
    lines
}

/// Pushes full-width chunks of `word` and returns the trailing remainder.
fn split_long_word(word: &str, max_chars: usize, lines: &mut Vec<String>) -> String {
    let mut chars = word.chars().peekable();
    let mut tail = String::new();
    while chars.peek().is_some() {
        let chunk: String = chars.by_ref().take(max_chars).collect();
        if chars.peek().is_some() {
            lines.push(chunk);
        } else {
            tail = chunk;
        }
    }
    tail
}

/// `$ 1,234.56` style: symbol, space, thousands-grouped integer part, two
/// decimals. Sign precedes the symbol.
pub(crate) fn format_money(symbol: &str, value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as i64;
    let whole = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::new();
    let digits = whole.len();
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{symbol} {grouped}.{frac:02}")
}

/// Renders `10.0` as `10` and `7.5` as `7.5`; used for percentage labels.
pub(crate) fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
