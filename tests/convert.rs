use terafont::convert;

#[test]
fn empty_input() {
    assert_eq!(convert(""), "");
}

#[test]
fn direct_consonant() {
    assert_eq!(convert("A"), "બ");
}

#[test]
fn consonant_with_post_base_matra() {
    // Sign Aa stays after its consonant; only Sign I moves.
    assert_eq!(convert("Af"), "બા");
}

#[test]
fn word_with_post_base_matras() {
    assert_eq!(convert("DfZf"), "મારા");
}

#[test]
fn sign_i_moves_before_consonant() {
    assert_eq!(convert("Sl"), "િક");
}

#[test]
fn sign_i_moves_before_conjunct() {
    assert_eq!(convert("S+Tl"), "િક્ત");
}

#[test]
fn sign_i_moves_within_word() {
    // The first reorder puts the sign before ક; the second lets it cross
    // the preceding લ as well.
    assert_eq!(convert("AfFSl"), "બાિલક");
}

#[test]
fn run_of_sign_i_keys() {
    // Each reorder pass captures a base unit with at most one sign, so
    // two passes leave the third sign in place.
    assert_eq!(convert("Slll"), "િિકિ");
}

#[test]
fn legacy_kssa_cluster() {
    assert_eq!(convert("S+M"), "ક્ષ");
}

#[test]
fn legacy_kssa_cluster_with_sign_i() {
    // The Kssa conjunct only exists after conjunct formation, so this
    // exercises the second reorder pass.
    assert_eq!(convert("S+Ml"), "િક્ષ");
}

#[test]
fn sign_i_crosses_conjunct_and_trailing_matra() {
    assert_eq!(convert("S+Mfl"), "િક્ષા");
}

#[test]
fn double_halant_collapses() {
    assert_eq!(convert("S++T"), "ક્ત");
}

#[test]
fn ambiguous_key_at_start_is_consonant() {
    assert_eq!(convert("U"), "ગ");
    assert_eq!(convert("I"), "ય");
}

#[test]
fn ambiguous_key_after_consonant_is_matra() {
    assert_eq!(convert("SU"), "કૂ");
}

#[test]
fn ambiguous_key_forced_consonant_before_sign_i_key() {
    assert_eq!(convert("Il"), "િય");
}

#[test]
fn ambiguous_key_after_independent_vowel_is_matra() {
    assert_eq!(convert("xU"), "ઋૂ");
}

#[test]
fn unmapped_characters_pass_through() {
    assert_eq!(convert("ab1 ."), "ab1 .");
}

#[test]
fn mixed_input_is_total() {
    assert_eq!(convert("🙂+𝄞"), "🙂્𝄞");
}
