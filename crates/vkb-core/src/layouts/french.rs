//! French (AZERTY) layout.

use super::{build_layout, KeyTable};
use crate::domain::layout::Layout;

pub const NAME: &str = "Français";

const KEYS: KeyTable = &[
    &[
        ["²", "³", "²", "³"],
        ["&", "1", "¹", "¡"],
        ["é", "2", "~", "⅛"],
        ["\"", "3", "#", "£"],
        ["'", "4", "{", "$"],
        ["(", "5", "[", "⅜"],
        ["-", "6", "|", "⅝"],
        ["è", "7", "`", "⅞"],
        ["_", "8", "\\", "™"],
        ["ç", "9", "^", "±"],
        ["à", "0", "@", "°"],
        [")", "°", "]", "¿"],
        ["=", "+", "}", "˛"],
        ["Bksp", "Bksp", "Bksp", "Bksp"],
    ],
    &[
        ["Tab", "Tab", "Tab", "Tab"],
        ["a", "A", "æ", "Æ"],
        ["z", "Z", "â", "Å"],
        ["e", "E", "€", "¢"],
        ["r", "R", "ê", "Ê"],
        ["t", "T", "þ", "Þ"],
        ["y", "Y", "ÿ", "Ÿ"],
        ["u", "U", "û", "Û"],
        ["i", "I", "î", "Î"],
        ["o", "O", "œ", "Œ"],
        ["p", "P", "ô", "Ô"],
        ["^", "¨", "~", "˚"],
        ["$", "£", "ø", "Ø"],
        ["Enter", "Enter", "Enter", "Enter"],
    ],
    &[
        ["Caps", "Caps", "Caps", "Caps"],
        ["q", "Q", "ä", "Ä"],
        ["s", "S", "ß", "„"],
        ["d", "D", "ë", "Ë"],
        ["f", "F", "‘", "‚"],
        ["g", "G", "’", "¥"],
        ["h", "H", "ð", "Ð"],
        ["j", "J", "ü", "Ü"],
        ["k", "K", "ï", "Ï"],
        ["l", "L", "ŀ", "Ŀ"],
        ["m", "M", "ö", "Ö"],
        ["ù", "%", "´", "Ù"],
        ["*", "µ", "`", "¯"],
    ],
    &[
        ["Shift", "Shift", "Shift", "Shift"],
        ["<", ">", "|", "¦"],
        ["w", "W", "«", "“"],
        ["x", "X", "»", "”"],
        ["c", "C", "©", "®"],
        ["v", "V", "⍽", "←"],
        ["b", "B", "↓", "↑"],
        ["n", "N", "¬", "→"],
        [",", "?", "¿", "…"],
        [";", ".", "×", "⋅"],
        [":", "/", "÷", "∕"],
        ["!", "§", "¡", "−"],
        ["Shift", "Shift", "Shift", "Shift"],
    ],
    &[
        ["Space", "Space", "Space", "Space"],
        ["AltGr", "AltGr", "AltGr", "AltGr"],
    ],
];

pub fn layout() -> Layout {
    build_layout(NAME, &["fr"], KEYS)
}
