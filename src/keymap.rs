#![deny(missing_docs)]

//! The fixed Terafont key-mapping tables.
//!
//! Terafont bakes "Caps Lock" semantics into the character stream itself:
//! the Caps-Lock-on layer carries the consonants and the Caps-Lock-off
//! layer carries the vowel signs, independent vowels, halant, and a few
//! punctuation substitutes. The consonant layer takes precedence whenever
//! both could apply; the decoder realizes this by consulting [`caps`]
//! before [`nocaps`].
//!
//! The two context-dependent keys `I` and `U` are deliberately absent from
//! both tables. Their consonant and matra meanings are exposed through
//! [`ambiguous`] and resolved by the decoder from the surrounding text.

/// Converts a key to its Caps-Lock-on (consonant) layer character.
///
/// Returns `None` if the key has no consonant meaning.
#[rustfmt::skip]
pub fn caps(key: char) -> Option<char> {
    match key {
        // Q–P row
        'Q' => Some('ણ'), // Nna
        'W' => Some('ધ'), // Dha
        'E' => Some('ભ'), // Bha
        'R' => Some('ચ'), // Ca
        'T' => Some('ત'), // Ta
        'Y' => Some('થ'), // Tha
        'O' => Some('ફ'), // Pha

        // A–L row
        'A' => Some('બ'), // Ba
        'S' => Some('ક'), // Ka
        'D' => Some('મ'), // Ma
        'F' => Some('લ'), // La
        'G' => Some('ન'), // Na
        'H' => Some('જ'), // Ja
        'J' => Some('વ'), // Va
        'K' => Some('છ'), // Cha

        // Z–M row
        'Z' => Some('ર'), // Ra
        'X' => Some('શ'), // Sha
        'C' => Some('હ'), // Ha
        'B' => Some('ખ'), // Kha
        'N' => Some('દ'), // Da
        'M' => Some('ણ'), // Nna

        _ => None,
    }
}

/// Converts a key to its Caps-Lock-off layer character: dependent vowel
/// signs, independent vowels, halant, and punctuation substitutes.
///
/// Returns `None` if the key has no mapping in this layer.
#[rustfmt::skip]
pub fn nocaps(key: char) -> Option<char> {
    match key {
        // Dependent vowel signs
        'f' => Some('ા'), // Sign Aa
        'l' => Some('િ'), // Sign I
        'u' => Some('ુ'), // Sign U
        's' => Some('ે'), // Sign E
        'o' => Some('ો'), // Sign O

        // Independent vowel
        'x' => Some('ઋ'), // Vocalic R

        // Halant
        '+' => Some('્'), // Virama

        // Punctuation substitutes
        ';' => Some('સ'), // Sa
        ',' => Some('લ'), // La
        '?' => Some('ઞ'), // Nya

        _ => None,
    }
}

/// Returns the (consonant, matra) meanings of the two context-dependent
/// keys, or `None` for any other key.
///
/// These keys cannot be resolved by table lookup alone; the decoder picks
/// one of the two meanings from the surrounding characters.
pub fn ambiguous(key: char) -> Option<(char, char)> {
    match key {
        'I' => Some(('ય', 'ી')), // Ya / Sign Ii
        'U' => Some(('ગ', 'ૂ')), // Ga / Sign Uu
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caps_layer() {
        assert_eq!(caps('A'), Some('બ'));
        assert_eq!(caps('a'), None);
        // The ambiguous keys live outside the fixed tables.
        assert_eq!(caps('I'), None);
        assert_eq!(caps('U'), None);
    }

    #[test]
    fn test_nocaps_layer() {
        assert_eq!(nocaps('+'), Some('્'));
        assert_eq!(nocaps(';'), Some('સ'));
        assert_eq!(nocaps('I'), None);
        assert_eq!(nocaps('U'), None);
    }

    #[test]
    fn test_ambiguous_keys() {
        assert_eq!(ambiguous('I'), Some(('ય', 'ી')));
        assert_eq!(ambiguous('U'), Some(('ગ', 'ૂ')));
        assert_eq!(ambiguous('l'), None);
    }
}
