//! Spanish (Spain) layout.

use super::{build_layout, KeyTable};
use crate::domain::layout::Layout;

pub const NAME: &str = "Español";

const KEYS: KeyTable = &[
    &[
        ["º", "ª", "\\", "ª"],
        ["1", "!", "|", "!"],
        ["2", "\"", "@", "\""],
        ["3", "·", "#", "·"],
        ["4", "$", "~", "$"],
        ["5", "%", "€", "%"],
        ["6", "&", "¬", "&"],
        ["7", "/", "7", "/"],
        ["8", "(", "8", "("],
        ["9", ")", "9", ")"],
        ["0", "=", "0", "="],
        ["'", "?", "'", "?"],
        ["¡", "¿", "¡", "¿"],
        ["Bksp", "Bksp", "Bksp", "Bksp"],
    ],
    &[
        ["Tab", "Tab", "Tab", "Tab"],
        ["q", "Q", "q", "Q"],
        ["w", "W", "w", "W"],
        ["e", "E", "€", "E"],
        ["r", "R", "r", "R"],
        ["t", "T", "t", "T"],
        ["y", "Y", "y", "Y"],
        ["u", "U", "u", "U"],
        ["i", "I", "i", "I"],
        ["o", "O", "o", "O"],
        ["p", "P", "p", "P"],
        ["`", "^", "[", "^"],
        ["+", "*", "]", "*"],
        ["Enter", "Enter", "Enter", "Enter"],
    ],
    &[
        ["Caps", "Caps", "Caps", "Caps"],
        ["a", "A", "a", "A"],
        ["s", "S", "s", "S"],
        ["d", "D", "d", "D"],
        ["f", "F", "f", "F"],
        ["g", "G", "g", "G"],
        ["h", "H", "h", "H"],
        ["j", "J", "j", "J"],
        ["k", "K", "k", "K"],
        ["l", "L", "l", "L"],
        ["ñ", "Ñ", "ñ", "Ñ"],
        ["´", "¨", "{", "¨"],
        ["ç", "Ç", "}", "Ç"],
    ],
    &[
        ["Shift", "Shift", "Shift", "Shift"],
        ["<", ">", "<", ">"],
        ["z", "Z", "z", "Z"],
        ["x", "X", "x", "X"],
        ["c", "C", "c", "C"],
        ["v", "V", "v", "V"],
        ["b", "B", "b", "B"],
        ["n", "N", "n", "N"],
        ["m", "M", "m", "M"],
        [",", ";", ",", ";"],
        [".", ":", ".", ":"],
        ["-", "_", "-", "_"],
        ["Shift", "Shift", "Shift", "Shift"],
    ],
    &[
        ["Space", "Space", "Space", "Space"],
        ["AltGr", "AltGr", "AltGr", "AltGr"],
    ],
];

pub fn layout() -> Layout {
    build_layout(NAME, &["es"], KEYS)
}
