//! US International layout.
//!
//! Alt selects the AltGr-level characters of the Windows "United States -
//! International" layout; keys without an AltGr level repeat their base and
//! shifted glyphs.

use super::{build_layout, KeyTable};
use crate::domain::layout::Layout;

pub const NAME: &str = "US International";

const KEYS: KeyTable = &[
    &[
        ["`", "~", "`", "~"],
        ["1", "!", "¡", "¹"],
        ["2", "@", "²", "@"],
        ["3", "#", "³", "#"],
        ["4", "$", "¤", "£"],
        ["5", "%", "€", "%"],
        ["6", "^", "¼", "^"],
        ["7", "&", "½", "&"],
        ["8", "*", "¾", "*"],
        ["9", "(", "‘", "("],
        ["0", ")", "’", ")"],
        ["-", "_", "¥", "_"],
        ["=", "+", "×", "÷"],
        ["Bksp", "Bksp", "Bksp", "Bksp"],
    ],
    &[
        ["Tab", "Tab", "Tab", "Tab"],
        ["q", "Q", "ä", "Ä"],
        ["w", "W", "å", "Å"],
        ["e", "E", "é", "É"],
        ["r", "R", "®", "R"],
        ["t", "T", "þ", "Þ"],
        ["y", "Y", "ü", "Ü"],
        ["u", "U", "ú", "Ú"],
        ["i", "I", "í", "Í"],
        ["o", "O", "ó", "Ó"],
        ["p", "P", "ö", "Ö"],
        ["[", "{", "«", "{"],
        ["]", "}", "»", "}"],
        ["\\", "|", "¬", "¦"],
    ],
    &[
        ["Caps", "Caps", "Caps", "Caps"],
        ["a", "A", "á", "Á"],
        ["s", "S", "ß", "§"],
        ["d", "D", "ð", "Ð"],
        ["f", "F", "f", "F"],
        ["g", "G", "g", "G"],
        ["h", "H", "h", "H"],
        ["j", "J", "j", "J"],
        ["k", "K", "k", "K"],
        ["l", "L", "ø", "Ø"],
        [";", ":", "¶", "°"],
        ["'", "\"", "´", "¨"],
        ["Enter", "Enter", "Enter", "Enter"],
    ],
    &[
        ["Shift", "Shift", "Shift", "Shift"],
        ["z", "Z", "æ", "Æ"],
        ["x", "X", "x", "X"],
        ["c", "C", "©", "¢"],
        ["v", "V", "v", "V"],
        ["b", "B", "b", "B"],
        ["n", "N", "ñ", "Ñ"],
        ["m", "M", "µ", "M"],
        [",", "<", "ç", "Ç"],
        [".", ">", ".", ">"],
        ["/", "?", "¿", "?"],
        ["Shift", "Shift", "Shift", "Shift"],
    ],
    &[
        ["Space", "Space", "Space", "Space"],
        ["Alt", "Alt", "Alt", "Alt"],
    ],
];

pub fn layout() -> Layout {
    build_layout(NAME, &["en", "en-US"], KEYS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::key::KeyPosition;
    use crate::domain::modifier::{KeyState, KeyboardModifier};

    #[test]
    fn test_alt_level_of_e_is_e_acute() {
        let layout = layout();
        let key = layout.key(KeyPosition::new(1, 3)).expect("e key");
        let state = KeyState::new(KeyboardModifier::Alt, false);
        assert_eq!(state.resolve(key).as_str(), "é");
    }

    #[test]
    fn test_rows_have_expected_widths() {
        let widths: Vec<usize> = layout().rows().iter().map(Vec::len).collect();
        assert_eq!(widths, vec![14, 14, 13, 12, 2]);
    }
}
