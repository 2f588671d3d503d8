//! The Terafont → Unicode conversion pipeline.
//!
//! Conversion runs in fixed stages: a context-tracking base decode, then a
//! series of in-place rewrite passes over the decoded characters. The matra
//! reorder runs twice because conjunct formation can leave a Sign I
//! trailing a newly formed cluster that the first pass could not see.
//!
//! Every stage is total. Characters with no Terafont meaning pass through
//! the decoder unchanged and are ignored by the rewrite passes, so no input
//! can fail to convert.

use log::debug;

use crate::keymap;

/// Gujarati Sign Virama.
pub const HALANT: char = '\u{0ACD}';
/// Gujarati Vowel Sign I, the pre-base matra.
pub const SIGN_I: char = '\u{0ABF}';

/// The Terafont key for halant.
const HALANT_KEY: char = '+';
/// The Terafont key for Sign I, used for decoder lookahead.
const SIGN_I_KEY: char = 'l';

fn consonant(ch: char) -> bool {
    matches!(ch, '\u{0A95}'..='\u{0AB9}')
}

/// Letters that can head a base unit: independent vowels and consonants.
fn letter(ch: char) -> bool {
    matches!(ch, '\u{0A85}'..='\u{0AB9}')
}

#[rustfmt::skip]
fn matra(ch: char) -> bool {
    match ch {
        '\u{0ABE}' => true, // Sign Aa
        '\u{0ABF}' => true, // Sign I
        '\u{0AC0}' => true, // Sign Ii
        '\u{0AC1}' => true, // Sign U
        '\u{0AC2}' => true, // Sign Uu
        '\u{0AC7}' => true, // Sign E
        '\u{0AC8}' => true, // Sign Ai
        '\u{0ACB}' => true, // Sign O
        '\u{0ACC}' => true, // Sign Au
        _ => false,
    }
}

#[rustfmt::skip]
fn independent_vowel(ch: char) -> bool {
    match ch {
        '\u{0A85}' => true, // A
        '\u{0A86}' => true, // Aa
        '\u{0A87}' => true, // I
        '\u{0A88}' => true, // Ii
        '\u{0A89}' => true, // U
        '\u{0A8A}' => true, // Uu
        '\u{0A8B}' => true, // Vocalic R
        '\u{0A8F}' => true, // E
        '\u{0A90}' => true, // Ai
        '\u{0A93}' => true, // O
        '\u{0A94}' => true, // Au
        _ => false,
    }
}

/// Matras that may sit between a conjunct and a misplaced Sign I.
fn postbase_matra(ch: char) -> bool {
    matches!(
        ch,
        '\u{0ABE}' | '\u{0AC0}' | '\u{0AC1}' | '\u{0AC2}' | '\u{0AC7}' | '\u{0ACB}'
    )
}

/////////////////////////////////////////////////////////////////////////////
// Base decoding
/////////////////////////////////////////////////////////////////////////////

/// Decode each Terafont key character to its Unicode equivalent.
///
/// The decoder carries two pieces of state: the previously emitted
/// character and whether it was a halant. That is enough context to
/// resolve the two keys whose meaning depends on their surroundings.
pub(crate) fn decode(cs: &[char]) -> Vec<char> {
    let mut out = Vec::with_capacity(cs.len());
    let mut prev: Option<char> = None;
    let mut after_halant = false;

    for (i, &key) in cs.iter().enumerate() {
        if key == HALANT_KEY {
            out.push(HALANT);
            prev = Some(HALANT);
            after_halant = true;
            continue;
        }

        let emit = match keymap::ambiguous(key) {
            Some((cons, sign)) => {
                resolve_ambiguous(cons, sign, cs.get(i + 1).copied(), prev, after_halant)
            }
            None => keymap::caps(key)
                .or_else(|| keymap::nocaps(key))
                .unwrap_or(key),
        };
        out.push(emit);
        prev = Some(emit);
        after_halant = false;
    }

    out
}

/// Pick the consonant or matra meaning of a context-dependent key.
///
/// A matra cannot follow another matra and cannot stand unattached to a
/// consonant. The consonant reading therefore wins ahead of the Sign I
/// key, at the start of the text, after a halant, and after anything that
/// is neither a consonant nor a matra. The matra reading wins after the
/// pre-base Sign I and after an independent vowel.
fn resolve_ambiguous(
    cons: char,
    sign: char,
    next_key: Option<char>,
    prev: Option<char>,
    after_halant: bool,
) -> char {
    if next_key == Some(SIGN_I_KEY) {
        return cons;
    }
    match prev {
        Some(SIGN_I) => sign,
        Some(p) if independent_vowel(p) => sign,
        Some(p) if !after_halant && (consonant(p) || matra(p)) => sign,
        _ => cons,
    }
}

/////////////////////////////////////////////////////////////////////////////
// Rewrite passes
/////////////////////////////////////////////////////////////////////////////

/// Move every pre-base Sign I in front of the base unit it follows.
///
/// A base unit is a letter optionally extended by (halant, consonant)
/// pairs forming a conjunct. The rewrite is global and non-overlapping:
/// each base unit is captured by at most one Sign I per pass. A Sign I
/// that follows no letter at all stays where it is.
pub(crate) fn reorder_matra_i(cs: &mut [char]) {
    // End of the last rewrite. Text before this point was claimed by an
    // earlier Sign I and cannot be captured again in this pass.
    let mut consumed = 0;
    let mut i = 0;
    while i < cs.len() {
        if cs[i] == SIGN_I {
            let mut start = base_unit_start(cs, i);
            // Re-enter a partially claimed unit at its first free letter;
            // letters sit two apart within a conjunct chain.
            while start < consumed {
                start += 2;
            }
            let start = start.min(i);
            cs[start..=i].rotate_right(1);
            consumed = i + 1;
        }
        i += 1;
    }
}

/// Start index of the base unit ending just before index `end`.
///
/// Returns `end` itself when no base unit precedes it.
fn base_unit_start(cs: &[char], end: usize) -> usize {
    let mut start = end;
    if start > 0 && letter(cs[start - 1]) {
        start -= 1;
        while start >= 2
            && cs[start - 1] == HALANT
            && consonant(cs[start])
            && letter(cs[start - 2])
        {
            start -= 2;
        }
    }
    start
}

/// Collapse runs of halants left behind by decoding into a single halant.
pub(crate) fn normalize_halants(cs: &mut Vec<char>) {
    cs.dedup_by(|a, b| *a == HALANT && *b == HALANT);
}

/// Legacy Terafont spells the Kssa cluster with Nna in place of Ssa.
const LEGACY_KSSA: [char; 3] = ['\u{0A95}', HALANT, '\u{0AA3}']; // Ka, Virama, Nna
const KSSA: [char; 3] = ['\u{0A95}', HALANT, '\u{0AB7}']; // Ka, Virama, Ssa

/// The fixed conjuncts and their canonical spellings. Identity for now;
/// ligature codepoint substitution for a particular target environment
/// goes in this table.
#[rustfmt::skip]
const CONJUNCTS: [([char; 3], [char; 3]); 4] = [
    (KSSA, KSSA),                                                                 // Kssa
    (['\u{0AA4}', HALANT, '\u{0AB0}'], ['\u{0AA4}', HALANT, '\u{0AB0}']),         // Tra
    (['\u{0AB6}', HALANT, '\u{0AB0}'], ['\u{0AB6}', HALANT, '\u{0AB0}']),         // Shra
    (['\u{0A9C}', HALANT, '\u{0A9E}'], ['\u{0A9C}', HALANT, '\u{0A9E}']),         // Jnya
];

/// Rewrite consonant, halant, consonant triples to their canonical
/// conjunct forms. The legacy Kssa fix must run before the standard table.
pub(crate) fn apply_conjuncts(cs: &mut [char]) {
    replace_triples(cs, LEGACY_KSSA, KSSA);
    for &(from, to) in CONJUNCTS.iter() {
        replace_triples(cs, from, to);
    }
}

fn replace_triples(cs: &mut [char], from: [char; 3], to: [char; 3]) {
    let mut i = 0;
    while i + 3 <= cs.len() {
        if cs[i..i + 3] == from {
            cs[i..i + 3].copy_from_slice(&to);
            i += 3;
        } else {
            i += 1;
        }
    }
}

/// Move a Sign I trailing a whole conjunct cluster, post-base matras
/// included, to the front of the cluster.
///
/// Conjunct formation can produce such sequences after the first reorder
/// pass has already run.
pub(crate) fn normalize_prebase_i_clusters(cs: &mut [char]) {
    let mut i = 0;
    while i + 3 <= cs.len() {
        if !CONJUNCTS.iter().any(|&(_, to)| cs[i..i + 3] == to) {
            i += 1;
            continue;
        }
        let mut end = i + 3;
        while end < cs.len() && postbase_matra(cs[end]) {
            end += 1;
        }
        if end < cs.len() && cs[end] == SIGN_I {
            cs[i..=end].rotate_right(1);
            i = end + 1;
        } else {
            i += 3;
        }
    }
}

/////////////////////////////////////////////////////////////////////////////
// Pipeline
/////////////////////////////////////////////////////////////////////////////

/// Convert Terafont-encoded Gujarati text to Unicode.
///
/// Total for every input string: characters with no Terafont meaning pass
/// through unchanged. The stages run in fixed order and each consumes the
/// full output of the previous one.
pub fn convert(text: &str) -> String {
    let cs: Vec<char> = text.chars().collect();

    let mut cs = decode(&cs);
    reorder_matra_i(&mut cs);
    normalize_halants(&mut cs);
    apply_conjuncts(&mut cs);
    reorder_matra_i(&mut cs);
    normalize_prebase_i_clusters(&mut cs);

    debug!(
        "converted {} terafont chars to {} unicode chars",
        text.chars().count(),
        cs.len()
    );
    cs.into_iter().collect()
}

/////////////////////////////////////////////////////////////////////////////
// Unit tests
/////////////////////////////////////////////////////////////////////////////
