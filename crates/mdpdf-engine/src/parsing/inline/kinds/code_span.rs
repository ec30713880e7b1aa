/// Code span inline type with owned delimiter constant.
///
/// Code spans are "raw zones" - no other inline parsing occurs inside them,
/// and they are resolved before any bold delimiter is considered.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';
    /// Fixed-width font named in the rendered markup.
    pub const FONT_FACE: &'static str = "Courier";
}
