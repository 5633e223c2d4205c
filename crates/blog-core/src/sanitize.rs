//! HTML sanitization for user-submitted post bodies.

/// Strip markup capable of running script from `input`.
///
/// Uses ammonia's default allow-list: `<script>` and `<style>` are dropped
/// together with their content, event-handler attributes and `javascript:`
/// URLs are removed, and ordinary formatting tags pass through. Never fails;
/// hostile input degrades to escaped or empty text.
pub fn sanitize_html(input: &str) -> String {
    ammonia::clean(input)
}

/// Readable text of a sanitized body: tags dropped, entities decoded and
/// whitespace runs collapsed to single spaces.
///
/// The result is plain text and must be escaped again before it is placed in
/// a page.
pub fn plain_text(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(pos) = rest.find(['<', '&']) {
        text.push_str(&rest[..pos]);
        rest = &rest[pos..];

        if rest.starts_with('<') {
            // A tag may be the only thing between two words.
            text.push(' ');
            rest = match rest.find('>') {
                Some(end) => &rest[end + 1..],
                None => "",
            };
        } else {
            match decode_entity(rest) {
                Some((ch, len)) => {
                    text.push(ch);
                    rest = &rest[len..];
                }
                None => {
                    text.push('&');
                    rest = &rest[1..];
                }
            }
        }
    }
    text.push_str(rest);

    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Decode the entity at the start of `input`, returning the character and
/// the number of bytes consumed.
fn decode_entity(input: &str) -> Option<(char, usize)> {
    let end = input.bytes().take(12).position(|b| b == b';')?;
    let name = &input[1..end];

    let ch = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{a0}',
        _ => {
            let hex = name.strip_prefix("#x").or_else(|| name.strip_prefix("#X"));
            let code = if let Some(hex) = hex {
                u32::from_str_radix(hex, 16).ok()?
            } else {
                name.strip_prefix('#')?.parse().ok()?
            };
            char::from_u32(code)?
        }
    };

    Some((ch, end + 1))
}
