//! Russian (ЙЦУКЕН) layout. Has no Alt level.

use super::{build_layout, KeyTable};
use crate::domain::layout::Layout;

pub const NAME: &str = "Русский";

const KEYS: KeyTable = &[
    &[
        ["ё", "Ё", "ё", "Ё"],
        ["1", "!", "1", "!"],
        ["2", "\"", "2", "\""],
        ["3", "№", "3", "№"],
        ["4", ";", "4", ";"],
        ["5", "%", "5", "%"],
        ["6", ":", "6", ":"],
        ["7", "?", "7", "?"],
        ["8", "*", "8", "*"],
        ["9", "(", "9", "("],
        ["0", ")", "0", ")"],
        ["-", "_", "-", "_"],
        ["=", "+", "=", "+"],
        ["Bksp", "Bksp", "Bksp", "Bksp"],
    ],
    &[
        ["Tab", "Tab", "Tab", "Tab"],
        ["й", "Й", "й", "Й"],
        ["ц", "Ц", "ц", "Ц"],
        ["у", "У", "у", "У"],
        ["к", "К", "к", "К"],
        ["е", "Е", "е", "Е"],
        ["н", "Н", "н", "Н"],
        ["г", "Г", "г", "Г"],
        ["ш", "Ш", "ш", "Ш"],
        ["щ", "Щ", "щ", "Щ"],
        ["з", "З", "з", "З"],
        ["х", "Х", "х", "Х"],
        ["ъ", "Ъ", "ъ", "Ъ"],
        ["\\", "/", "\\", "/"],
    ],
    &[
        ["Caps", "Caps", "Caps", "Caps"],
        ["ф", "Ф", "ф", "Ф"],
        ["ы", "Ы", "ы", "Ы"],
        ["в", "В", "в", "В"],
        ["а", "А", "а", "А"],
        ["п", "П", "п", "П"],
        ["р", "Р", "р", "Р"],
        ["о", "О", "о", "О"],
        ["л", "Л", "л", "Л"],
        ["д", "Д", "д", "Д"],
        ["ж", "Ж", "ж", "Ж"],
        ["э", "Э", "э", "Э"],
        ["Enter", "Enter", "Enter", "Enter"],
    ],
    &[
        ["Shift", "Shift", "Shift", "Shift"],
        ["я", "Я", "я", "Я"],
        ["ч", "Ч", "ч", "Ч"],
        ["с", "С", "с", "С"],
        ["м", "М", "м", "М"],
        ["и", "И", "и", "И"],
        ["т", "Т", "т", "Т"],
        ["ь", "Ь", "ь", "Ь"],
        ["б", "Б", "б", "Б"],
        ["ю", "Ю", "ю", "Ю"],
        [".", ",", ".", ","],
        ["Shift", "Shift", "Shift", "Shift"],
    ],
    &[["Space", "Space", "Space", "Space"]],
];

pub fn layout() -> Layout {
    build_layout(NAME, &["ru"], KEYS)
}
