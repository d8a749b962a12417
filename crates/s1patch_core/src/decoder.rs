//! Whole-file decoding
//!
//! [`PatchDecoder`] joins the records of one patch file with their schema
//! definitions and decodes every value. A file either decodes completely or
//! fails with a [`PatchError`] naming the file and the offending line; there
//! is no partial result. Range and label problems are kept on the parameter
//! as a [`Notice`] instead.

use serde::Serialize;
use std::fmt;

use crate::codec::{self, DisplayValue, MalformedValue, Notice};
use crate::record::{self, RecordError};
use crate::schema::{ParameterDefinition, Registry, TypeTag};

/// Name of the reference file whose parameters are always reported.
pub const DEFAULTS_FILE: &str = "00-DEFAULT";

/// One decoded record. Owns copies of everything it shows, so it can outlive
/// the registry it was decoded against.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodedParameter {
    pub key: String,
    pub raw_value: String,
    pub display_value: DisplayValue,
    pub display_name: String,
    pub location: String,
    pub type_tag: TypeTag,
    /// True when the value differs from the default, or the file is the
    /// defaults file.
    pub changed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<Notice>,
}

/// All parameters of one file, in file order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodedPatch {
    pub name: String,
    pub parameters: Vec<DecodedParameter>,
}

impl DecodedPatch {
    pub fn get(&self, key: &str) -> Option<&DecodedParameter> {
        self.parameters.iter().find(|p| p.key == key)
    }

    /// Parameters ordered by key, the order reports use.
    pub fn sorted_by_key(&self) -> Vec<&DecodedParameter> {
        let mut sorted: Vec<_> = self.parameters.iter().collect();
        sorted.sort_by(|a, b| a.key.cmp(&b.key));
        sorted
    }

    pub fn changed(&self) -> impl Iterator<Item = &DecodedParameter> {
        self.parameters.iter().filter(|p| p.changed)
    }

    pub fn notices(&self) -> impl Iterator<Item = (&DecodedParameter, &Notice)> {
        self.parameters
            .iter()
            .filter_map(|p| p.notice.as_ref().map(|n| (p, n)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchErrorKind {
    MalformedRecord(RecordError),
    UnknownParameterKind { key: String, line: usize },
    MalformedValue { line: usize, error: MalformedValue },
}

/// A file that could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchError {
    /// File name or other identity of the source.
    pub source: String,
    pub kind: PatchErrorKind,
}

impl PatchError {
    pub fn line(&self) -> usize {
        match &self.kind {
            PatchErrorKind::MalformedRecord(err) => err.line(),
            PatchErrorKind::UnknownParameterKind { line, .. }
            | PatchErrorKind::MalformedValue { line, .. } => *line,
        }
    }
}

impl fmt::Display for PatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            PatchErrorKind::MalformedRecord(err) => write!(f, "{}: {}", self.source, err),
            PatchErrorKind::UnknownParameterKind { key, line } => write!(
                f,
                "{}: line {}: unknown parameter '{}' (schema may be out of date)",
                self.source, line, key
            ),
            PatchErrorKind::MalformedValue { line, error } => {
                write!(f, "{}: line {}: {}", self.source, line, error)
            }
        }
    }
}

impl std::error::Error for PatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            PatchErrorKind::MalformedRecord(err) => Some(err),
            PatchErrorKind::MalformedValue { error, .. } => Some(error),
            PatchErrorKind::UnknownParameterKind { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Source name that forces every parameter to count as changed.
    pub defaults_file: String,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            defaults_file: DEFAULTS_FILE.to_string(),
        }
    }
}

/// Whether `raw` differs from the definition's default. Text that is not an
/// integer always differs, since every default is one.
pub fn differs_from_default(def: &ParameterDefinition, raw: &str) -> bool {
    raw.trim().parse::<i64>() != Ok(def.default)
}

/// Decodes patch files against a shared registry.
#[derive(Debug, Clone)]
pub struct PatchDecoder<'r> {
    registry: &'r Registry,
    options: DecodeOptions,
}

impl<'r> PatchDecoder<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self::with_options(registry, DecodeOptions::default())
    }

    pub fn with_options(registry: &'r Registry, options: DecodeOptions) -> Self {
        Self { registry, options }
    }

    pub fn is_defaults_file(&self, source: &str) -> bool {
        source == self.options.defaults_file
    }

    /// Decode the full text of one patch file. `source` identifies the file in
    /// errors and decides the defaults-file rule.
    pub fn decode(&self, source: &str, text: &str) -> Result<DecodedPatch, PatchError> {
        let fail = |kind| PatchError {
            source: source.to_string(),
            kind,
        };

        let records =
            record::parse_records(text).map_err(|err| fail(PatchErrorKind::MalformedRecord(err)))?;
        let force_changed = self.is_defaults_file(source);

        let mut parameters = Vec::with_capacity(records.len());
        for record in records {
            let def = self.registry.lookup(&record.key).map_err(|err| {
                fail(PatchErrorKind::UnknownParameterKind {
                    key: err.key,
                    line: record.line,
                })
            })?;

            let decoded = codec::decode(def, &record.raw_value).map_err(|error| {
                fail(PatchErrorKind::MalformedValue {
                    line: record.line,
                    error,
                })
            })?;

            if let Some(notice) = &decoded.notice {
                tracing::warn!(
                    source,
                    key = def.key,
                    line = record.line,
                    "{}",
                    notice
                );
            }

            parameters.push(DecodedParameter {
                changed: force_changed || differs_from_default(def, &record.raw_value),
                key: record.key,
                raw_value: record.raw_value,
                display_value: decoded.value,
                display_name: def.name.to_string(),
                location: def.location.to_string(),
                type_tag: def.type_tag(),
                notice: decoded.notice,
            });
        }

        tracing::debug!(source, parameters = parameters.len(), "decoded patch");

        Ok(DecodedPatch {
            name: source.to_string(),
            parameters,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> Registry {
        Registry::s1().unwrap()
    }

    #[test]
    fn default_value_is_unchanged() {
        let registry = registry();
        let decoder = PatchDecoder::new(&registry);
        let patch = decoder.decode("bass.prm", "LENG=16\n").unwrap();
        let leng = patch.get("LENG").unwrap();
        assert!(!leng.changed);
        assert_eq!(leng.display_value, DisplayValue::Int(16));
    }

    #[test]
    fn defaults_file_reports_everything() {
        let registry = registry();
        let decoder = PatchDecoder::new(&registry);
        let patch = decoder
            .decode(DEFAULTS_FILE, "LENG=16\nLEVEL=70\nSCALE=1\n")
            .unwrap();
        assert!(patch.parameters.iter().all(|p| p.changed));
    }

    #[test]
    fn defaults_file_name_is_configurable() {
        let registry = registry();
        let decoder = PatchDecoder::with_options(
            &registry,
            DecodeOptions {
                defaults_file: "factory.prm".to_string(),
            },
        );
        assert!(decoder.decode("factory.prm", "LENG=16\n").unwrap().parameters[0].changed);
        assert!(!decoder.decode(DEFAULTS_FILE, "LENG=16\n").unwrap().parameters[0].changed);
    }

    #[test]
    fn dict_default_compares_as_integer() {
        let registry = registry();
        let decoder = PatchDecoder::new(&registry);
        let patch = decoder.decode("p", "SCALE=1\nARP_RATE=02\nVCO_RANGE=x\n").unwrap();
        assert!(!patch.get("SCALE").unwrap().changed);
        assert!(!patch.get("ARP_RATE").unwrap().changed);
        assert!(patch.get("VCO_RANGE").unwrap().changed);
    }

    #[test]
    fn unknown_key_fails_the_file() {
        let registry = registry();
        let decoder = PatchDecoder::new(&registry);
        let err = decoder
            .decode("new-firmware.prm", "LENG=16\nSHINY_NEW=3\n")
            .unwrap_err();
        assert_eq!(err.source, "new-firmware.prm");
        assert_eq!(
            err.kind,
            PatchErrorKind::UnknownParameterKind {
                key: "SHINY_NEW".to_string(),
                line: 2
            }
        );
        assert!(err.to_string().contains("SHINY_NEW"));
        assert!(err.to_string().contains("new-firmware.prm"));
    }

    #[test]
    fn malformed_value_fails_the_file() {
        let registry = registry();
        let decoder = PatchDecoder::new(&registry);
        let err = decoder.decode("p", "TEMPO=fast\n").unwrap_err();
        assert_eq!(err.line(), 1);
        assert!(matches!(
            err.kind,
            PatchErrorKind::MalformedValue { ref error, .. } if error.tag == TypeTag::Div100
        ));
    }

    #[test]
    fn malformed_record_fails_the_file() {
        let registry = registry();
        let decoder = PatchDecoder::new(&registry);
        let err = decoder.decode("p", "LENG=16\nLEVEL\n").unwrap_err();
        assert!(matches!(err.kind, PatchErrorKind::MalformedRecord(_)));
        assert_eq!(err.line(), 2);
    }

    #[test]
    fn notices_are_kept_on_the_parameter() {
        let registry = registry();
        let decoder = PatchDecoder::new(&registry);
        let patch = decoder.decode("p", "LENG=80\nSCALE=9\nLEVEL=70\n").unwrap();
        let notices: Vec<_> = patch.notices().map(|(p, _)| p.key.as_str()).collect();
        assert_eq!(notices, vec!["LENG", "SCALE"]);
        assert_eq!(patch.parameters.len(), 3);
    }

    #[test]
    fn sorted_by_key_leaves_storage_order_alone() {
        let registry = registry();
        let decoder = PatchDecoder::new(&registry);
        let patch = decoder.decode("p", "TEMPO=10000\nLENG=16\nARP_TYPE=0\n").unwrap();
        let sorted: Vec<_> = patch.sorted_by_key().iter().map(|p| p.key.as_str()).collect();
        assert_eq!(sorted, vec!["ARP_TYPE", "LENG", "TEMPO"]);
        assert_eq!(patch.parameters[0].key, "TEMPO");
    }
}
