// src/core/alphabet.rs

const ENGLISH_UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const ENGLISH_LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
const RUSSIAN_UPPER: &str = "АБВГДЕЁЖЗИЙКЛМНОПРСТУФХЦЧШЩЪЫЬЭЮЯ";
const RUSSIAN_LOWER: &str = "абвгдеёжзийклмнопрстуфхцчшщъыьэюя";

/// One script's pair of alphabets. Position `i` in `upper` and `lower` is
/// the same letter.
#[derive(Debug)]
pub struct Alphabet {
    pub upper: &'static str,
    pub lower: &'static str,
    len: usize,
}

static ENGLISH: Alphabet = Alphabet {
    upper: ENGLISH_UPPER,
    lower: ENGLISH_LOWER,
    len: 26,
};

static RUSSIAN: Alphabet = Alphabet {
    upper: RUSSIAN_UPPER,
    lower: RUSSIAN_LOWER,
    len: 33,
};

impl Alphabet {
    /// Number of letters in either case variant.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The variant matching the case of `c`.
    pub fn variant_for(&self, c: char) -> &'static str {
        if c.is_uppercase() {
            self.upper
        } else {
            self.lower
        }
    }
}

/// The scripts the cipher knows how to shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Script {
    English,
    Russian,
}

impl Script {
    /// Classification order. English is checked first.
    pub const ALL: [Script; 2] = [Script::English, Script::Russian];

    pub fn alphabet(self) -> &'static Alphabet {
        match self {
            Script::English => &ENGLISH,
            Script::Russian => &RUSSIAN,
        }
    }
}

/// Length of the longest registered alphabet. Both key scans are sized by it.
pub fn max_alphabet_len() -> usize {
    Script::ALL
        .iter()
        .map(|script| script.alphabet().len())
        .max()
        .unwrap_or(0)
}

/// Finds the script `c` belongs to, ignoring case. `None` means the
/// character passes through the cipher untouched.
pub fn classify(c: char) -> Option<Script> {
    let mut upper = c.to_uppercase();
    let folded = match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        // 'ß' and friends uppercase to several chars; none of them are ours.
        _ => return None,
    };

    Script::ALL
        .into_iter()
        .find(|script| script.alphabet().upper.contains(folded))
}
