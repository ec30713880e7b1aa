/// Bold (strong emphasis) inline type.
///
/// Only the double-asterisk form is recognised. The inner text may not
/// contain a literal `*`, but may contain code spans.
pub struct Strong;

impl Strong {
    pub const DELIM: &'static [u8; 2] = b"**";
    pub const STAR: u8 = b'*';
}
