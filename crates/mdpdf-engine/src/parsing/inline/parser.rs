use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Strong},
    types::InlineNode,
};

/// Parses inline content into a sequence of [`InlineNode`]s.
///
/// # Raw Zone Precedence
/// Code spans are checked first and suppress all other parsing inside them:
/// `` `**x**` `` is a code span, never bold. Bold spans may wrap code spans.
///
/// # Returns
/// Nodes covering the entire input. Text between constructs, including any
/// unmatched delimiter, is emitted as `InlineNode::Text`.
pub fn parse_inline(s: &str) -> Vec<InlineNode> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = cur.pos();

    while !cur.eof() {
        let start = cur.pos();
        // Try constructs in precedence order (code spans first = raw zone)
        if let Some(node) = try_parse_code_span(&mut cur) {
            push_text(&mut out, &s[text_start..start]);
            out.push(node);
            text_start = cur.pos();
            continue;
        }
        if let Some(node) = try_parse_strong(&mut cur) {
            push_text(&mut out, &s[text_start..start]);
            out.push(node);
            text_start = cur.pos();
            continue;
        }
        cur.bump();
    }

    push_text(&mut out, &s[text_start..]);
    out
}

fn push_text(out: &mut Vec<InlineNode>, text: &str) {
    if !text.is_empty() {
        out.push(InlineNode::Text(text.to_string()));
    }
}

/// Attempts to parse a code span starting at the current position.
///
/// The content must be non-empty and backtick-free. Returns `None` if not at
/// a backtick or if the span isn't closed; the cursor is then restored.
fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if cur.peek() != Some(CodeSpan::TICK) {
        return None;
    }

    let saved = cur.clone();
    cur.bump(); // `
    let inner_start = cur.pos();

    while let Some(b) = cur.peek() {
        if b == CodeSpan::TICK {
            break;
        }
        cur.bump();
    }
    let inner = cur.slice_from(inner_start);

    if cur.peek() != Some(CodeSpan::TICK) || inner.is_empty() {
        *cur = saved;
        return None;
    }
    cur.bump(); // closing `

    Some(InlineNode::Code(inner.to_string()))
}

/// Attempts to parse a `**bold**` span starting at the current position.
///
/// Fails (restoring the cursor) on a lone `*` inside the span, on an empty
/// span, or when no closing `**` follows.
fn try_parse_strong(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if !cur.starts_with(Strong::DELIM) {
        return None;
    }

    let saved = cur.clone();
    cur.bump_n(Strong::DELIM.len());
    let inner_start = cur.pos();
    let mut children = vec![];
    let mut text_start = inner_start;

    loop {
        match cur.peek() {
            None => {
                *cur = saved;
                return None;
            }
            Some(Strong::STAR) => break,
            Some(_) => {}
        }
        let before = cur.pos();
        if let Some(code) = try_parse_code_span(cur) {
            push_text(&mut children, &cur.s[text_start..before]);
            children.push(code);
            text_start = cur.pos();
            continue;
        }
        cur.bump();
    }

    if !cur.starts_with(Strong::DELIM) || cur.pos() == inner_start {
        *cur = saved;
        return None;
    }
    push_text(&mut children, cur.slice_from(text_start));
    cur.bump_n(Strong::DELIM.len());

    Some(InlineNode::Bold(children))
}
