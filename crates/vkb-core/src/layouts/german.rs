//! German (T1) layout.

use super::{build_layout, KeyTable};
use crate::domain::layout::Layout;

pub const NAME: &str = "Deutsch";

const KEYS: KeyTable = &[
    &[
        ["^", "°", "^", "°"],
        ["1", "!", "¹", "¡"],
        ["2", "\"", "²", "⅛"],
        ["3", "§", "³", "£"],
        ["4", "$", "¼", "¤"],
        ["5", "%", "½", "⅜"],
        ["6", "&", "¬", "⅝"],
        ["7", "/", "{", "⅞"],
        ["8", "(", "[", "™"],
        ["9", ")", "]", "±"],
        ["0", "=", "}", "°"],
        ["ß", "?", "\\", "¿"],
        ["´", "`", "¸", "˛"],
        ["Bksp", "Bksp", "Bksp", "Bksp"],
    ],
    &[
        ["Tab", "Tab", "Tab", "Tab"],
        ["q", "Q", "@", "Ω"],
        ["w", "W", "ł", "Ł"],
        ["e", "E", "€", "€"],
        ["r", "R", "¶", "®"],
        ["t", "T", "ŧ", "Ŧ"],
        ["z", "Z", "←", "¥"],
        ["u", "U", "↓", "↑"],
        ["i", "I", "→", "ı"],
        ["o", "O", "ø", "Ø"],
        ["p", "P", "þ", "Þ"],
        ["ü", "Ü", "¨", "°"],
        ["+", "*", "~", "¯"],
        ["Enter", "Enter", "Enter", "Enter"],
    ],
    &[
        ["Caps", "Caps", "Caps", "Caps"],
        ["a", "A", "æ", "Æ"],
        ["s", "S", "ſ", "§"],
        ["d", "D", "ð", "Ð"],
        ["f", "F", "đ", "ª"],
        ["g", "G", "ŋ", "Ŋ"],
        ["h", "H", "ħ", "Ħ"],
        ["j", "J", "j", "J"],
        ["k", "K", "ĸ", "&"],
        ["l", "L", "ł", "Ł"],
        ["ö", "Ö", "˝", "˝"],
        ["ä", "Ä", "^", "^"],
        ["#", "'", "’", "˘"],
    ],
    &[
        ["Shift", "Shift", "Shift", "Shift"],
        ["<", ">", "|", "¦"],
        ["y", "Y", "»", "›"],
        ["x", "X", "«", "‹"],
        ["c", "C", "¢", "©"],
        ["v", "V", "„", "‚"],
        ["b", "B", "“", "‘"],
        ["n", "N", "”", "’"],
        ["m", "M", "µ", "º"],
        [",", ";", "·", "×"],
        [".", ":", "…", "÷"],
        ["-", "_", "–", "—"],
        ["Shift", "Shift", "Shift", "Shift"],
    ],
    &[
        ["Space", "Space", "Space", "Space"],
        ["AltGr", "AltGr", "AltGr", "AltGr"],
    ],
];

pub fn layout() -> Layout {
    build_layout(NAME, &["de"], KEYS)
}
