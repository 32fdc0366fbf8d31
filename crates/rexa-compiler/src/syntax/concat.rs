use rexa_core::is_symbol;

/// Make implicit concatenation explicit by inserting `.` at every
/// juxtaposition that denotes sequencing.
///
/// A `.` goes between `l` and `r` when an operand ends at `l` (a symbol,
/// `)` or a postfix operator) and another begins at `r` (a symbol or `(`).
/// Nothing is ever inserted before `*`, `+`, `?`, `|` or `)`. Running it on
/// its own output changes nothing.
pub fn insert_concat(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    let mut prev: Option<char> = None;

    for c in text.chars() {
        if let Some(p) = prev
            && ends_operand(p)
            && begins_operand(c)
        {
            out.push('.');
        }
        out.push(c);
        prev = Some(c);
    }

    out
}

fn ends_operand(c: char) -> bool {
    is_symbol(c) || matches!(c, ')' | '*' | '+' | '?')
}

fn begins_operand(c: char) -> bool {
    is_symbol(c) || c == '('
}
