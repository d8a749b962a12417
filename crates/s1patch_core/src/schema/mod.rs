//! Parameter schema for patch export files.
//!
//! Every key that can appear in a patch file has one [`ParameterDefinition`].
//! The definition's [`Encoding`] decides how the raw decimal text is turned
//! into something a person can read (see [`crate::codec`]), and carries exactly
//! the metadata that scheme needs: a range for numeric schemes, a value map for
//! enumerations, nothing for the opaque ones.
//!
//! A [`Registry`] is validated once when it is built and is read-only after
//! that, so a single instance can be shared by any number of decoders.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

pub mod s1;

/// Range implied by the 16-bit schemes.
pub const WORD_RANGE: RangeInclusive<i64> = 0..=0xFFFF;

/// `(code, label)` pairs for an enumerated parameter. Codes are decimal text,
/// exactly as they appear in a patch file.
pub type ValueMap = &'static [(&'static str, &'static str)];

/// The closed set of encoding schemes, without their metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TypeTag {
    #[serde(rename = "INT")]
    Int,
    #[serde(rename = "DICT")]
    Dict,
    #[serde(rename = "DIV100")]
    Div100,
    #[serde(rename = "SPLIT_TC")]
    SplitTc,
    #[serde(rename = "CHOP")]
    Chop,
    #[serde(rename = "COMB")]
    Comb,
    #[serde(rename = "UNK")]
    Unk,
}

impl TypeTag {
    pub const ALL: [TypeTag; 7] = [
        TypeTag::Int,
        TypeTag::Dict,
        TypeTag::Div100,
        TypeTag::SplitTc,
        TypeTag::Chop,
        TypeTag::Comb,
        TypeTag::Unk,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TypeTag::Int => "INT",
            TypeTag::Dict => "DICT",
            TypeTag::Div100 => "DIV100",
            TypeTag::SplitTc => "SPLIT_TC",
            TypeTag::Chop => "CHOP",
            TypeTag::Comb => "COMB",
            TypeTag::Unk => "UNK",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TypeTag::ALL
            .into_iter()
            .find(|tag| tag.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown type tag '{}'", s))
    }
}

/// How a parameter's raw value is encoded, together with the metadata the
/// scheme requires.
#[derive(Debug, Clone, PartialEq)]
pub enum Encoding {
    /// Integer passthrough, optionally range-checked.
    Int { range: Option<RangeInclusive<i64>> },
    /// Raw text is a code in a label table.
    Dict { values: ValueMap },
    /// Fixed point with two implied decimal digits.
    Div100 { range: Option<RangeInclusive<i64>> },
    /// 16-bit word holding two signed bytes, reported low byte first.
    SplitTc,
    /// 16-bit word rendered as a bit-reversed on/off pattern.
    Chop,
    /// Eighth-unit detents rendered to a tenth.
    Comb { range: Option<RangeInclusive<i64>> },
    /// Not reverse-engineered yet; passed through untouched.
    Unknown,
}

impl Encoding {
    pub fn type_tag(&self) -> TypeTag {
        match self {
            Encoding::Int { .. } => TypeTag::Int,
            Encoding::Dict { .. } => TypeTag::Dict,
            Encoding::Div100 { .. } => TypeTag::Div100,
            Encoding::SplitTc => TypeTag::SplitTc,
            Encoding::Chop => TypeTag::Chop,
            Encoding::Comb { .. } => TypeTag::Comb,
            Encoding::Unknown => TypeTag::Unk,
        }
    }

    /// Declared range, or the implied 16-bit range for the word schemes.
    pub fn range(&self) -> Option<RangeInclusive<i64>> {
        match self {
            Encoding::Int { range } | Encoding::Div100 { range } | Encoding::Comb { range } => {
                range.clone()
            }
            Encoding::SplitTc | Encoding::Chop => Some(WORD_RANGE),
            Encoding::Dict { .. } | Encoding::Unknown => None,
        }
    }
}

/// One schema entry, keyed by the string that appears left of `=` in a patch
/// file.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterDefinition {
    pub key: &'static str,
    pub name: &'static str,
    /// Where the parameter lives on the device UI. Empty when unknown.
    pub location: &'static str,
    pub encoding: Encoding,
    /// Canonical raw value. For enumerations this is the integer form of the
    /// default code.
    pub default: i64,
}

impl ParameterDefinition {
    pub const fn int(
        key: &'static str,
        name: &'static str,
        location: &'static str,
        range: RangeInclusive<i64>,
        default: i64,
    ) -> Self {
        Self::new(key, name, location, Encoding::Int { range: Some(range) }, default)
    }

    pub const fn dict(
        key: &'static str,
        name: &'static str,
        location: &'static str,
        values: ValueMap,
        default: i64,
    ) -> Self {
        Self::new(key, name, location, Encoding::Dict { values }, default)
    }

    pub const fn div100(
        key: &'static str,
        name: &'static str,
        location: &'static str,
        range: RangeInclusive<i64>,
        default: i64,
    ) -> Self {
        Self::new(key, name, location, Encoding::Div100 { range: Some(range) }, default)
    }

    pub const fn split_tc(
        key: &'static str,
        name: &'static str,
        location: &'static str,
        default: i64,
    ) -> Self {
        Self::new(key, name, location, Encoding::SplitTc, default)
    }

    pub const fn chop(
        key: &'static str,
        name: &'static str,
        location: &'static str,
        default: i64,
    ) -> Self {
        Self::new(key, name, location, Encoding::Chop, default)
    }

    pub const fn comb(
        key: &'static str,
        name: &'static str,
        location: &'static str,
        range: RangeInclusive<i64>,
        default: i64,
    ) -> Self {
        Self::new(key, name, location, Encoding::Comb { range: Some(range) }, default)
    }

    pub const fn unknown(
        key: &'static str,
        name: &'static str,
        location: &'static str,
        default: i64,
    ) -> Self {
        Self::new(key, name, location, Encoding::Unknown, default)
    }

    const fn new(
        key: &'static str,
        name: &'static str,
        location: &'static str,
        encoding: Encoding,
        default: i64,
    ) -> Self {
        ParameterDefinition {
            key,
            name,
            location,
            encoding,
            default,
        }
    }

    pub fn type_tag(&self) -> TypeTag {
        self.encoding.type_tag()
    }

    pub fn range(&self) -> Option<RangeInclusive<i64>> {
        self.encoding.range()
    }

    /// The default as it would be written in a patch file.
    pub fn default_raw(&self) -> String {
        self.default.to_string()
    }

    /// Label for a raw code. Always `None` for non-enumerated parameters.
    pub fn label_for(&self, code: &str) -> Option<&'static str> {
        match &self.encoding {
            Encoding::Dict { values } => values
                .iter()
                .find(|(c, _)| *c == code)
                .map(|(_, label)| *label),
            _ => None,
        }
    }

    /// Raw code for a label, compared case-insensitively after trimming.
    pub fn code_for(&self, label: &str) -> Option<&'static str> {
        let label = label.trim();
        match &self.encoding {
            Encoding::Dict { values } => values
                .iter()
                .find(|(_, l)| l.trim().eq_ignore_ascii_case(label))
                .map(|(code, _)| *code),
            _ => None,
        }
    }
}

/// A raw key with no definition in the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownParameterKind {
    pub key: String,
}

impl fmt::Display for UnknownParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "No parameter definition for key '{}'", self.key)
    }
}

impl std::error::Error for UnknownParameterKind {}

/// A definition whose metadata does not fit its encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    DuplicateKey(&'static str),
    EmptyValueMap(&'static str),
    InvalidCode {
        key: &'static str,
        code: &'static str,
    },
    DuplicateCode {
        key: &'static str,
        code: &'static str,
    },
    EmptyLabel {
        key: &'static str,
        code: &'static str,
    },
    DuplicateLabel {
        key: &'static str,
        label: &'static str,
    },
    InvertedRange {
        key: &'static str,
        min: i64,
        max: i64,
    },
    DefaultOutOfRange {
        key: &'static str,
        default: i64,
        min: i64,
        max: i64,
    },
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaError::DuplicateKey(key) => write!(f, "{}: defined more than once", key),
            SchemaError::EmptyValueMap(key) => write!(f, "{}: DICT has no values", key),
            SchemaError::InvalidCode { key, code } => {
                write!(f, "{}: value code '{}' is not an integer", key, code)
            }
            SchemaError::DuplicateCode { key, code } => {
                write!(f, "{}: value code '{}' appears more than once", key, code)
            }
            SchemaError::EmptyLabel { key, code } => {
                write!(f, "{}: value code '{}' has an empty label", key, code)
            }
            SchemaError::DuplicateLabel { key, label } => {
                write!(f, "{}: label '{}' appears more than once", key, label)
            }
            SchemaError::InvertedRange { key, min, max } => {
                write!(f, "{}: range {}..={} is inverted", key, min, max)
            }
            SchemaError::DefaultOutOfRange {
                key,
                default,
                min,
                max,
            } => write!(
                f,
                "{}: default {} is outside {}..={}",
                key, default, min, max
            ),
        }
    }
}

impl std::error::Error for SchemaError {}

fn validate_definition(def: &ParameterDefinition) -> Result<(), SchemaError> {
    let key = def.key;

    if let Encoding::Dict { values } = &def.encoding {
        if values.is_empty() {
            return Err(SchemaError::EmptyValueMap(key));
        }
        for (i, &(code, label)) in values.iter().enumerate() {
            if code.parse::<i64>().is_err() {
                return Err(SchemaError::InvalidCode { key, code });
            }
            if values[..i].iter().any(|&(c, _)| c == code) {
                return Err(SchemaError::DuplicateCode { key, code });
            }
            if label.trim().is_empty() {
                return Err(SchemaError::EmptyLabel { key, code });
            }
            // Labels must be unique for `code_for` to pick the right code.
            if values[..i]
                .iter()
                .any(|&(_, l)| l.trim().eq_ignore_ascii_case(label.trim()))
            {
                return Err(SchemaError::DuplicateLabel { key, label });
            }
        }
    }

    if let Some(range) = def.range() {
        let (min, max) = (*range.start(), *range.end());
        if min > max {
            return Err(SchemaError::InvertedRange { key, min, max });
        }
        if !range.contains(&def.default) {
            return Err(SchemaError::DefaultOutOfRange {
                key,
                default: def.default,
                min,
                max,
            });
        }
    }

    Ok(())
}

/// Validated, immutable set of parameter definitions.
#[derive(Debug, Clone)]
pub struct Registry {
    definitions: Vec<ParameterDefinition>,
    index: HashMap<&'static str, usize>,
}

impl Registry {
    /// Build a registry, rejecting the first definition that is inconsistent
    /// with its encoding.
    pub fn new(
        definitions: impl IntoIterator<Item = ParameterDefinition>,
    ) -> Result<Self, SchemaError> {
        let definitions: Vec<ParameterDefinition> = definitions.into_iter().collect();
        let mut index = HashMap::with_capacity(definitions.len());

        for (i, def) in definitions.iter().enumerate() {
            validate_definition(def)?;
            if index.insert(def.key, i).is_some() {
                return Err(SchemaError::DuplicateKey(def.key));
            }
        }

        Ok(Registry { definitions, index })
    }

    /// The built-in S-1 table.
    pub fn s1() -> Result<Self, SchemaError> {
        Self::new(s1::PARAMETERS.iter().cloned())
    }

    pub fn lookup(&self, key: &str) -> Result<&ParameterDefinition, UnknownParameterKind> {
        self.get(key).ok_or_else(|| UnknownParameterKind {
            key: key.to_string(),
        })
    }

    pub fn get(&self, key: &str) -> Option<&ParameterDefinition> {
        self.index.get(key).map(|&i| &self.definitions[i])
    }

    /// Definitions in table order.
    pub fn iter(&self) -> impl Iterator<Item = &ParameterDefinition> {
        self.definitions.iter()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
