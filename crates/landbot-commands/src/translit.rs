//! Bulgarian Cyrillic ↔ Latin transliteration (Streamlined System).
//!
//! Cyrillic → Latin is a per-letter table. Latin → Cyrillic matches the longest Latin unit first
//! (`sht` before `sh` before `s`). Characters outside the tables pass through unchanged, so digits,
//! punctuation and letters of other scripts survive both directions.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    ToLatin,
    ToCyrillic,
}

const CYRILLIC_TO_LATIN: &[(char, &str)] = &[
    ('а', "a"),
    ('б', "b"),
    ('в', "v"),
    ('г', "g"),
    ('д', "d"),
    ('е', "e"),
    ('ж', "zh"),
    ('з', "z"),
    ('и', "i"),
    ('й', "y"),
    ('к', "k"),
    ('л', "l"),
    ('м', "m"),
    ('н', "n"),
    ('о', "o"),
    ('п', "p"),
    ('р', "r"),
    ('с', "s"),
    ('т', "t"),
    ('у', "u"),
    ('ф', "f"),
    ('х', "h"),
    ('ц', "ts"),
    ('ч', "ch"),
    ('ш', "sh"),
    ('щ', "sht"),
    ('ъ', "a"),
    ('ь', "y"),
    ('ю', "yu"),
    ('я', "ya"),
];

// Lookup tries unit lengths 3, 2, 1, so entry order here is irrelevant.
const LATIN_TO_CYRILLIC: &[(&str, &str)] = &[
    ("sht", "щ"),
    ("zh", "ж"),
    ("ts", "ц"),
    ("ch", "ч"),
    ("sh", "ш"),
    ("yu", "ю"),
    ("ya", "я"),
    ("a", "а"),
    ("b", "б"),
    ("c", "ц"),
    ("d", "д"),
    ("e", "е"),
    ("f", "ф"),
    ("g", "г"),
    ("h", "х"),
    ("i", "и"),
    ("j", "й"),
    ("k", "к"),
    ("l", "л"),
    ("m", "м"),
    ("n", "н"),
    ("o", "о"),
    ("p", "п"),
    ("q", "к"),
    ("r", "р"),
    ("s", "с"),
    ("t", "т"),
    ("u", "у"),
    ("v", "в"),
    ("w", "в"),
    ("x", "кс"),
    ("y", "й"),
    ("z", "з"),
];

const MAX_LATIN_UNIT: usize = 3;

/// Transliterates `text` in the given direction.
pub fn transliterate(text: &str, direction: Direction) -> String {
    match direction {
        Direction::ToLatin => to_latin(text),
        Direction::ToCyrillic => to_cyrillic(text),
    }
}

/// Appends `unit`, upper-casing its first letter when the source letter was upper-case.
fn push_cased(out: &mut String, unit: &str, upper: bool) {
    if !upper {
        out.push_str(unit);
        return;
    }
    let mut chars = unit.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.push_str(chars.as_str());
    }
}

fn lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

fn to_latin(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        let key = lower(c);
        match CYRILLIC_TO_LATIN.iter().find(|(cyr, _)| *cyr == key) {
            Some((_, latin)) => push_cased(&mut out, latin, c.is_uppercase()),
            None => out.push(c),
        }
    }
    out
}

fn to_cyrillic(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() * 2);
    let mut i = 0;
    while i < chars.len() {
        let matched = (1..=MAX_LATIN_UNIT).rev().find_map(|len| {
            let unit: String = chars.get(i..i + len)?.iter().map(|&c| lower(c)).collect();
            LATIN_TO_CYRILLIC
                .iter()
                .find(|(latin, _)| *latin == unit)
                .map(|(_, cyr)| (len, *cyr))
        });
        match matched {
            Some((len, cyr)) => {
                push_cased(&mut out, cyr, chars[i].is_uppercase());
                i += len;
            }
            None => {
                out.push(chars[i]);
                i += 1;
            }
        }
    }
    out
}
