/// Selects which control characters are rewritten as two-character escape sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeSet {
    /// Only `'\n'` becomes `\n`.
    Newlines,
    /// `'\n'` becomes `\n` and `'\t'` becomes `\t`.
    NewlinesAndTabs,
}

impl EscapeSet {
    fn escapes_tabs(self) -> bool {
        matches!(self, EscapeSet::NewlinesAndTabs)
    }
}

/// Rewrites newline (and optionally tab) characters as literal backslash sequences.
///
/// Every other character, including carriage returns and backslashes, is copied through
/// unchanged.
///
/// # Arguments
///
/// * `text` - The raw file text.
/// * `set` - Which characters to escape.
///
/// # Return
///
/// Returns the escaped text, safe to place between the backticks of a template literal
/// as far as line structure is concerned.
pub fn escape(text: &str, set: EscapeSet) -> String {
    let mut escaped = String::with_capacity(text.len() + text.len() / 32);
    for ch in text.chars() {
        match ch {
            '\n' => escaped.push_str("\\n"),
            '\t' if set.escapes_tabs() => escaped.push_str("\\t"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Reverses [`escape`] for the same [`EscapeSet`].
///
/// Only exact for text that contained no literal `\n` / `\t` sequences before escaping.
pub fn unescape(text: &str, set: EscapeSet) -> String {
    let mut raw = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            raw.push(ch);
            continue;
        }
        match chars.peek() {
            Some('n') => {
                chars.next();
                raw.push('\n');
            }
            Some('t') if set.escapes_tabs() => {
                chars.next();
                raw.push('\t');
            }
            _ => raw.push(ch),
        }
    }
    raw
}
