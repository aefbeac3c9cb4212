use super::*;

// =============================================================
// string_hash
// =============================================================

#[test]
fn empty_string_hashes_to_zero() {
    assert_eq!(string_hash(""), 0);
}

#[test]
fn single_char_is_its_code_unit() {
    assert_eq!(string_hash("a"), 97);
}

#[test]
fn two_chars_roll_by_thirty_one() {
    assert_eq!(string_hash("ab"), 97 * 31 + 98);
}

#[test]
fn matches_known_value() {
    assert_eq!(string_hash("hello"), 99_162_322);
}

#[test]
fn wraps_like_a_signed_32_bit_integer() {
    // This input wraps to exactly i32::MIN before the absolute value.
    assert_eq!(string_hash("polygenelubricants"), 2_147_483_648);
}

#[test]
fn hashes_utf16_code_units() {
    assert_eq!(string_hash("é"), 233);
    // Surrogate pair: 0xD83D, 0xDE00.
    assert_eq!(string_hash("😀"), 0xD83D * 31 + 0xDE00);
}

#[test]
fn is_deterministic() {
    for s in ["", "x", "planet-1", "10,20", "polygenelubricants"] {
        assert_eq!(string_hash(s), string_hash(s));
    }
}

#[test]
fn distinct_inputs_usually_differ() {
    assert_ne!(string_hash("planet-1"), string_hash("planet-2"));
}

// =============================================================
// texture_index
// =============================================================

#[test]
fn texture_index_known_values() {
    assert_eq!(texture_index("a"), 30);
    assert_eq!(texture_index("hello"), 31);
    assert_eq!(texture_index("planet-1"), 15);
}

#[test]
fn texture_index_of_empty_id_is_one() {
    assert_eq!(texture_index(""), 1);
}

#[test]
fn texture_index_always_in_range() {
    for i in 0..2000 {
        let id = format!("entity-{i}");
        let idx = texture_index(&id);
        assert!((1..=TEXTURE_COUNT).contains(&idx), "{id} -> {idx}");
    }
    assert!((1..=TEXTURE_COUNT).contains(&texture_index("polygenelubricants")));
}

// =============================================================
// to_base36
// =============================================================

#[test]
fn base36_zero() {
    assert_eq!(to_base36(0), "0");
}

#[test]
fn base36_digit_boundaries() {
    assert_eq!(to_base36(9), "9");
    assert_eq!(to_base36(10), "a");
    assert_eq!(to_base36(35), "z");
    assert_eq!(to_base36(36), "10");
}

#[test]
fn base36_of_coordinate_hashes() {
    assert_eq!(to_base36(string_hash("10,20")), "rtiaz");
    assert_eq!(to_base36(string_hash("0,0")), "10ok");
}

#[test]
fn base36_of_max_value() {
    assert_eq!(to_base36(u32::MAX), "1z141z3");
}
