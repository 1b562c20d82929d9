/// The E.164 bounds for the digits after the plus sign. The upper one is
/// from the ITU; the lower one only rejects obvious garbage like "123".
pub const MIN_LENGTH_E164: usize = 4;
pub const MAX_LENGTH_E164: usize = 15;

pub const PLUS_SIGN: &'static str = "+";

pub const ARABIC_INDIC_ZERO: char = '\u{0660}';
pub const ARABIC_INDIC_NINE: char = '\u{0669}';
pub const EASTERN_ARABIC_INDIC_ZERO: char = '\u{06F0}';
pub const EASTERN_ARABIC_INDIC_NINE: char = '\u{06F9}';

// A number that starts with one of these was typed in international form.
pub const INTERNATIONAL_INTENT: &'static str = r"\+|00";

// Whatever may follow a noise label before the number itself: "tel: ",
// "mobile - ", "fax:".
pub const LABEL_TRAILER: &'static str = r"[:\s-]*";

// Trunk prefix placeholders such as "(0)" in "+44 (0) 20 7946 0958".
pub const ZERO_ONLY_GROUP: &'static str = r"\(\s*0+\s*\)";

pub const LEADING_INTERNATIONAL_PREFIX: &'static str = r"^\s*00";

// Slash, full stop, underscore, hyphen, en dash, em dash, backslash and any
// white space. Not a raw string: the dashes are inserted as characters.
pub const SEPARATORS: &'static str = "[/._\\-\u{2013}\u{2014}\\s\\\\]+";

pub const BRACKETS: &'static str = r"[(){}\[\]]";

// ASCII only: `\d` would accept every Unicode decimal digit.
pub const PLUS_DIGITS: &'static str = r"\+[0-9]+";
