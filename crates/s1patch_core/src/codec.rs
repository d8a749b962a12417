//! Raw value codec
//!
//! Turns the decimal text stored in a patch file into a [`DisplayValue`] for
//! the parameter's [`Encoding`], and back again for the schemes that can be
//! reversed. Everything here is pure.
//!
//! The two 16-bit word schemes are the ones worth care:
//!
//! - `SPLIT_TC` stores two signed bytes. The low byte is reported first, so
//!   `0xB59C` decodes to `(-100, -75)`: `0x9C` then `0xB5`.
//! - `CHOP` stores sixteen on/off pads with bit 0 as the first pad, so the
//!   rendered pattern is the binary string read right to left.

use serde::Serialize;
use std::fmt;

use crate::schema::{Encoding, ParameterDefinition, TypeTag};

pub const FILLED_GLYPH: char = '◼';
pub const HOLLOW_GLYPH: char = '◻';

/// Number of pads in a chop pattern.
pub const PATTERN_WIDTH: usize = 16;

/// Human-readable form of a raw value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DisplayValue {
    Int(i64),
    /// Label from a DICT value map.
    Label(String),
    /// Raw text shown as-is (unmapped DICT code or UNK value).
    Raw(String),
    Scaled(f64),
    Pair(i8, i8),
    Pattern(String),
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayValue::Int(v) => write!(f, "{}", v),
            DisplayValue::Label(s) | DisplayValue::Raw(s) | DisplayValue::Pattern(s) => {
                f.write_str(s)
            }
            // Debug keeps the trailing ".0" on whole numbers.
            DisplayValue::Scaled(v) => write!(f, "{:?}", v),
            DisplayValue::Pair(first, second) => write!(f, "({}, {})", first, second),
        }
    }
}

/// Non-fatal condition found while decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notice {
    OutOfRange { value: i64, min: i64, max: i64 },
    MissingDictLabel { raw: String },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::OutOfRange { value, min, max } => {
                write!(f, "value {} is outside {}..={}", value, min, max)
            }
            Notice::MissingDictLabel { raw } => write!(f, "no label for code '{}'", raw),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Decoded {
    pub value: DisplayValue,
    pub notice: Option<Notice>,
}

impl Decoded {
    fn clean(value: DisplayValue) -> Self {
        Decoded {
            value,
            notice: None,
        }
    }
}

/// Raw text that cannot be read as the number its scheme needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedValue {
    pub key: String,
    pub raw: String,
    pub tag: TypeTag,
}

impl fmt::Display for MalformedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.tag {
            TypeTag::SplitTc | TypeTag::Chop => write!(
                f,
                "{}: '{}' is not a 16-bit unsigned integer ({})",
                self.key, self.raw, self.tag
            ),
            _ => write!(
                f,
                "{}: '{}' is not an integer ({})",
                self.key, self.raw, self.tag
            ),
        }
    }
}

impl std::error::Error for MalformedValue {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// The scheme loses information and has no inverse.
    NotInvertible { key: String, tag: TypeTag },
    /// The display value has the wrong shape for the scheme.
    WrongShape { key: String, tag: TypeTag },
    UnknownLabel { key: String, label: String },
    InvalidPattern { key: String, pattern: String },
    /// The raw number would not fit a 64-bit integer, or is not a number.
    Unrepresentable { key: String, value: String },
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::NotInvertible { key, tag } => {
                write!(f, "{}: {} values cannot be encoded", key, tag)
            }
            EncodeError::WrongShape { key, tag } => {
                write!(f, "{}: value does not fit a {} parameter", key, tag)
            }
            EncodeError::UnknownLabel { key, label } => {
                write!(f, "{}: no value code for label '{}'", key, label)
            }
            EncodeError::InvalidPattern { key, pattern } => write!(
                f,
                "{}: '{}' is not a {}-pad pattern",
                key, pattern, PATTERN_WIDTH
            ),
            EncodeError::Unrepresentable { key, value } => {
                write!(f, "{}: {} has no raw integer form", key, value)
            }
        }
    }
}

impl std::error::Error for EncodeError {}

/// Split a word into two signed bytes, low byte first.
pub fn split_twos_complement(raw: u16) -> (i8, i8) {
    let [high, low] = raw.to_be_bytes();
    (low as i8, high as i8)
}

/// Inverse of [`split_twos_complement`], taking the pair in the order it was
/// reported: `join_twos_complement(a, b)` where `(a, b) = split(n)` gives `n`.
pub fn join_twos_complement(second: i8, first: i8) -> u16 {
    u16::from_be_bytes([first as u8, second as u8])
}

/// Render a word as sixteen pad glyphs, bit 0 first.
pub fn chop_pattern(raw: u16) -> String {
    (0..PATTERN_WIDTH)
        .map(|bit| {
            if raw & (1 << bit) != 0 {
                FILLED_GLYPH
            } else {
                HOLLOW_GLYPH
            }
        })
        .collect()
}

/// Read a pattern produced by [`chop_pattern`]. Also accepts `1`/`x`/`#` for
/// on and `0`/`.`/`-` for off so patterns can be typed by hand.
pub fn parse_chop_pattern(pattern: &str) -> Option<u16> {
    let pads: Vec<bool> = pattern
        .trim()
        .chars()
        .filter(|&c| !matches!(c, '\u{FE0E}' | '\u{FE0F}'))
        .map(|c| match c {
            FILLED_GLYPH | '1' | 'x' | 'X' | '#' => Some(true),
            HOLLOW_GLYPH | '0' | '.' | '-' => Some(false),
            _ => None,
        })
        .collect::<Option<_>>()?;

    if pads.len() != PATTERN_WIDTH {
        return None;
    }

    Some(
        pads.iter()
            .enumerate()
            .filter(|(_, on)| **on)
            .fold(0u16, |word, (bit, _)| word | (1 << bit)),
    )
}

/// Eighth-unit detents shown to one decimal place, rounding up.
pub fn comb_display(raw: i64) -> f64 {
    ((raw as f64 / 8.0) * 10.0).ceil() / 10.0
}

pub fn div100_display(raw: i64) -> f64 {
    raw as f64 / 100.0
}

fn range_notice(def: &ParameterDefinition, value: i64) -> Option<Notice> {
    let range = def.range()?;
    if range.contains(&value) {
        None
    } else {
        Some(Notice::OutOfRange {
            value,
            min: *range.start(),
            max: *range.end(),
        })
    }
}

fn malformed(def: &ParameterDefinition, raw: &str) -> MalformedValue {
    MalformedValue {
        key: def.key.to_string(),
        raw: raw.to_string(),
        tag: def.type_tag(),
    }
}

fn parse_int(def: &ParameterDefinition, raw: &str) -> Result<i64, MalformedValue> {
    raw.parse::<i64>().map_err(|_| malformed(def, raw))
}

fn parse_word(def: &ParameterDefinition, raw: &str) -> Result<u16, MalformedValue> {
    raw.parse::<u16>().map_err(|_| malformed(def, raw))
}

/// Decode one raw value according to its definition.
pub fn decode(def: &ParameterDefinition, raw: &str) -> Result<Decoded, MalformedValue> {
    let raw = raw.trim();

    match &def.encoding {
        Encoding::Int { .. } => {
            let value = parse_int(def, raw)?;
            Ok(Decoded {
                value: DisplayValue::Int(value),
                notice: range_notice(def, value),
            })
        }
        Encoding::Dict { .. } => Ok(match def.label_for(raw) {
            Some(label) => Decoded::clean(DisplayValue::Label(label.to_string())),
            None => Decoded {
                value: DisplayValue::Raw(raw.to_string()),
                notice: Some(Notice::MissingDictLabel {
                    raw: raw.to_string(),
                }),
            },
        }),
        Encoding::Div100 { .. } => {
            let value = parse_int(def, raw)?;
            Ok(Decoded {
                value: DisplayValue::Scaled(div100_display(value)),
                notice: range_notice(def, value),
            })
        }
        Encoding::SplitTc => {
            let (first, second) = split_twos_complement(parse_word(def, raw)?);
            Ok(Decoded::clean(DisplayValue::Pair(first, second)))
        }
        Encoding::Chop => Ok(Decoded::clean(DisplayValue::Pattern(chop_pattern(
            parse_word(def, raw)?,
        )))),
        Encoding::Comb { .. } => {
            let value = parse_int(def, raw)?;
            Ok(Decoded {
                value: DisplayValue::Scaled(comb_display(value)),
                notice: range_notice(def, value),
            })
        }
        Encoding::Unknown => Ok(Decoded::clean(DisplayValue::Raw(raw.to_string()))),
    }
}

/// Encode a display value back to the raw text a patch file stores.
pub fn encode(def: &ParameterDefinition, value: &DisplayValue) -> Result<String, EncodeError> {
    let key = def.key.to_string();
    let tag = def.type_tag();
    let wrong_shape = || EncodeError::WrongShape {
        key: def.key.to_string(),
        tag,
    };
    let unrepresentable = || EncodeError::Unrepresentable {
        key: def.key.to_string(),
        value: value.to_string(),
    };

    match (&def.encoding, value) {
        (Encoding::SplitTc, DisplayValue::Pair(second, first)) => {
            Ok(join_twos_complement(*second, *first).to_string())
        }
        (Encoding::Chop, DisplayValue::Pattern(pattern)) => parse_chop_pattern(pattern)
            .map(|word| word.to_string())
            .ok_or_else(|| EncodeError::InvalidPattern {
                key,
                pattern: pattern.clone(),
            }),
        (Encoding::Chop, DisplayValue::Int(v)) | (Encoding::SplitTc, DisplayValue::Int(v)) => {
            u16::try_from(*v).map(|w| w.to_string()).map_err(|_| wrong_shape())
        }
        (Encoding::Int { .. }, DisplayValue::Int(v)) => Ok(v.to_string()),
        (Encoding::Div100 { .. }, DisplayValue::Scaled(v)) => {
            let raw = (v * 100.0).round();
            // 2^63 is exactly representable; i64::MAX is not.
            if raw.is_finite() && raw >= i64::MIN as f64 && raw < i64::MAX as f64 {
                Ok((raw as i64).to_string())
            } else {
                Err(unrepresentable())
            }
        }
        (Encoding::Div100 { .. }, DisplayValue::Int(v)) => v
            .checked_mul(100)
            .map(|raw| raw.to_string())
            .ok_or_else(unrepresentable),
        (Encoding::Dict { .. }, DisplayValue::Label(label)) => def
            .code_for(label)
            .map(str::to_string)
            .ok_or_else(|| EncodeError::UnknownLabel {
                key,
                label: label.clone(),
            }),
        (Encoding::Dict { .. }, DisplayValue::Int(v)) => Ok(v.to_string()),
        (Encoding::Dict { .. }, DisplayValue::Raw(raw))
        | (Encoding::Unknown, DisplayValue::Raw(raw)) => Ok(raw.trim().to_string()),
        (Encoding::Unknown, DisplayValue::Int(v)) => Ok(v.to_string()),
        (Encoding::Comb { .. }, _) => Err(EncodeError::NotInvertible { key, tag }),
        _ => Err(wrong_shape()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Registry;

    fn registry() -> Registry {
        Registry::s1().unwrap()
    }

    fn decode_key(key: &str, raw: &str) -> Decoded {
        let registry = registry();
        decode(registry.lookup(key).unwrap(), raw).unwrap()
    }

    #[test]
    fn split_reports_low_byte_first() {
        assert_eq!(split_twos_complement(44444), (-100, -83));
        assert_eq!(split_twos_complement(46492), (-100, -75));
        assert_eq!(split_twos_complement(6400), (0, 25));
        assert_eq!(split_twos_complement(300), (44, 1));
        assert_eq!(split_twos_complement(0x7F80), (-128, 127));
        assert_eq!(split_twos_complement(0), (0, 0));
        assert_eq!(split_twos_complement(0xFFFF), (-1, -1));
    }

    #[test]
    fn split_round_trips_every_word() {
        for n in 0..=u16::MAX {
            let (a, b) = split_twos_complement(n);
            assert_eq!(join_twos_complement(a, b), n, "word {}", n);
        }
    }

    #[test]
    fn draw_defaults_decode_to_the_factory_wave() {
        let pairs: Vec<_> = [
            "OSC_DRAW_P1",
            "OSC_DRAW_P2",
            "OSC_DRAW_P3",
            "OSC_DRAW_P4",
            "OSC_DRAW_P5",
            "OSC_DRAW_P6",
            "OSC_DRAW_P7",
            "OSC_DRAW_P8",
        ]
        .iter()
        .map(|key| {
            let registry = registry();
            let def = registry.lookup(key).unwrap().clone();
            decode(&def, &def.default_raw()).unwrap().value
        })
        .collect();

        assert_eq!(
            pairs,
            vec![
                DisplayValue::Pair(-100, -75),
                DisplayValue::Pair(-50, -25),
                DisplayValue::Pair(0, 25),
                DisplayValue::Pair(50, 75),
                DisplayValue::Pair(100, 75),
                DisplayValue::Pair(50, 25),
                DisplayValue::Pair(0, -25),
                DisplayValue::Pair(-50, -75),
            ]
        );
    }

    #[test]
    fn decode_is_deterministic() {
        let first = decode_key("OSC_DRAW_P1", "46492");
        let second = decode_key("OSC_DRAW_P1", "46492");
        assert_eq!(first, second);
        assert_eq!(first.value.to_string(), "(-100, -75)");
    }

    #[test]
    fn chop_extremes() {
        let empty = chop_pattern(0);
        assert_eq!(empty.chars().count(), PATTERN_WIDTH);
        assert!(empty.chars().all(|c| c == HOLLOW_GLYPH));

        let full = chop_pattern(u16::MAX);
        assert_eq!(full.chars().count(), PATTERN_WIDTH);
        assert!(full.chars().all(|c| c == FILLED_GLYPH));
    }

    #[test]
    fn chop_glyph_i_is_bit_i() {
        for raw in [1u16, 2, 0x8000, 0x00F0, 0xA5A5, 12345] {
            let binary = format!("{:016b}", raw);
            let glyphs: Vec<char> = chop_pattern(raw).chars().collect();
            for (i, glyph) in glyphs.iter().enumerate() {
                let bit = binary.as_bytes()[15 - i] == b'1';
                assert_eq!(*glyph == FILLED_GLYPH, bit, "raw {} pad {}", raw, i);
            }
        }
        assert_eq!(chop_pattern(1), format!("◼{}", "◻".repeat(15)));
    }

    #[test]
    fn chop_pattern_parses_back() {
        for raw in [0u16, 1, 0x8000, 0xBEEF, u16::MAX] {
            assert_eq!(parse_chop_pattern(&chop_pattern(raw)), Some(raw));
        }
        assert_eq!(parse_chop_pattern("1000000000000000"), Some(1));
        assert_eq!(parse_chop_pattern("x..............x"), Some(0x8001));
        // With the text-presentation selectors some exports carry.
        assert_eq!(
            parse_chop_pattern(&"◻\u{FE0E}\u{FE0E}".repeat(16)),
            Some(0)
        );
        assert_eq!(parse_chop_pattern("◼◼◼"), None);
        assert_eq!(parse_chop_pattern("abcdefghijklmnop"), None);
    }

    #[test]
    fn comb_rounds_up_to_tenths() {
        assert_eq!(comb_display(7), 0.9);
        assert_eq!(comb_display(8), 1.0);
        assert_eq!(comb_display(0), 0.0);
        assert_eq!(comb_display(1), 0.2);
        assert_eq!(comb_display(4), 0.5);
        assert_eq!(comb_display(255), 31.9);
    }

    #[test]
    fn div100_scales() {
        assert_eq!(div100_display(10000), 100.0);
        assert_eq!(div100_display(10050), 100.5);
        assert_eq!(decode_key("TEMPO", "12000").value.to_string(), "120.0");
    }

    #[test]
    fn int_out_of_range_is_a_notice() {
        let decoded = decode_key("LENG", "99");
        assert_eq!(decoded.value, DisplayValue::Int(99));
        assert_eq!(
            decoded.notice,
            Some(Notice::OutOfRange {
                value: 99,
                min: 1,
                max: 64
            })
        );
        assert_eq!(decode_key("LENG", "32").notice, None);
    }

    #[test]
    fn dict_falls_back_to_raw_text() {
        assert_eq!(
            decode_key("SCALE", "3").value,
            DisplayValue::Label("8t".to_string())
        );

        let decoded = decode_key("SCALE", "42");
        assert_eq!(decoded.value, DisplayValue::Raw("42".to_string()));
        assert_eq!(
            decoded.notice,
            Some(Notice::MissingDictLabel {
                raw: "42".to_string()
            })
        );

        let decoded = decode_key("SCALE", "half");
        assert_eq!(decoded.value.to_string(), "half");
    }

    #[test]
    fn unknown_passes_through() {
        let decoded = decode_key("MOTION_CC1", " -1 ");
        assert_eq!(decoded.value, DisplayValue::Raw("-1".to_string()));
        assert_eq!(decoded.notice, None);
    }

    #[test]
    fn malformed_numbers_fail() {
        let registry = registry();
        for (key, raw) in [
            ("LENG", "sixteen"),
            ("TEMPO", "120.5"),
            ("OSC_DRAW_P1", "-1"),
            ("OSC_CHOP_PWM", "65536"),
            ("OSC_CHOP_COMB", ""),
        ] {
            let def = registry.lookup(key).unwrap();
            let err = decode(def, raw).unwrap_err();
            assert_eq!(err.key, key);
            assert_eq!(err.tag, def.type_tag());
        }
    }

    #[test]
    fn encode_inverts_reversible_schemes() {
        let registry = registry();
        let cases = [
            ("OSC_DRAW_P1", "46492"),
            ("OSC_DRAW_P7", "59136"),
            ("OSC_CHOP_SAW", "43690"),
            ("LENG", "32"),
            ("TEMPO", "10050"),
            ("ARP_TYPE", "3"),
            ("SCALE", "17"),
            ("PRM4", "12"),
        ];
        for (key, raw) in cases {
            let def = registry.lookup(key).unwrap();
            let decoded = decode(def, raw).unwrap();
            assert_eq!(encode(def, &decoded.value).unwrap(), raw, "{}", key);
        }
    }

    #[test]
    fn encode_takes_pairs_in_reported_order() {
        let registry = registry();
        let def = registry.lookup("OSC_DRAW_P1").unwrap();
        assert_eq!(encode(def, &DisplayValue::Pair(-100, -75)).unwrap(), "46492");
        assert_eq!(encode(def, &DisplayValue::Pair(-75, -100)).unwrap(), "40117");
    }

    #[test]
    fn encode_rejects_what_it_cannot_invert() {
        let registry = registry();

        let comb = registry.lookup("OSC_CHOP_COMB").unwrap();
        assert!(matches!(
            encode(comb, &DisplayValue::Scaled(0.9)),
            Err(EncodeError::NotInvertible { .. })
        ));

        let leng = registry.lookup("LENG").unwrap();
        assert!(matches!(
            encode(leng, &DisplayValue::Pair(1, 2)),
            Err(EncodeError::WrongShape { .. })
        ));

        let arp = registry.lookup("ARP_TYPE").unwrap();
        assert!(matches!(
            encode(arp, &DisplayValue::Label("Sideways".to_string())),
            Err(EncodeError::UnknownLabel { .. })
        ));
        assert_eq!(
            encode(arp, &DisplayValue::Label("up/down".to_string())).unwrap(),
            "3"
        );
    }

    #[test]
    fn div100_encode_rejects_values_without_an_integer_form() {
        let registry = registry();
        let tempo = registry.lookup("TEMPO").unwrap();

        for v in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, 1e30, -1e30] {
            assert!(
                matches!(
                    encode(tempo, &DisplayValue::Scaled(v)),
                    Err(EncodeError::Unrepresentable { .. })
                ),
                "{}",
                v
            );
        }
        assert!(matches!(
            encode(tempo, &DisplayValue::Int(i64::MAX / 10)),
            Err(EncodeError::Unrepresentable { .. })
        ));
        assert!(matches!(
            encode(tempo, &DisplayValue::Int(i64::MIN)),
            Err(EncodeError::Unrepresentable { .. })
        ));

        assert_eq!(encode(tempo, &DisplayValue::Int(120)).unwrap(), "12000");
        assert_eq!(encode(tempo, &DisplayValue::Scaled(-0.5)).unwrap(), "-50");
    }

    #[test]
    fn display_values_serialize_untagged() {
        let json = serde_json::to_value(DisplayValue::Pair(-100, -75)).unwrap();
        assert_eq!(json, serde_json::json!([-100, -75]));
        let json = serde_json::to_value(DisplayValue::Scaled(120.0)).unwrap();
        assert_eq!(json, serde_json::json!(120.0));
        let json = serde_json::to_value(DisplayValue::Label("On".to_string())).unwrap();
        assert_eq!(json, serde_json::json!("On"));
    }
}
