//! Cross-patch comparison table
//!
//! Rows are registry parameters in key order, columns are patches in name
//! order. A cell is filled only when the patch carries the parameter and the
//! value is worth reporting: it differs from the default, the patch is the
//! defaults file, or the caller asked for defaults too.

use colored::Colorize;
use serde::Serialize;
use std::borrow::Cow;
use std::collections::HashMap;
use std::io::{self, Write};

use s1patch_core::{DecodedParameter, DecodedPatch, Registry, TypeTag, codec};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReportOptions {
    /// Keep `UNK` parameters.
    pub include_unknown: bool,
    /// Fill cells whose value matches the default.
    pub include_defaults: bool,
}

impl ReportOptions {
    pub fn reports(&self, param: &DecodedParameter) -> bool {
        (self.include_unknown || param.type_tag != TypeTag::Unk)
            && (self.include_defaults || param.changed)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub key: &'static str,
    pub name: &'static str,
    pub location: &'static str,
    /// Decoded default.
    pub default: String,
    /// One cell per patch column; `None` is blank.
    pub cells: Vec<Option<String>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PatchTable {
    pub patches: Vec<String>,
    pub rows: Vec<Row>,
}

impl PatchTable {
    pub fn build(registry: &Registry, patches: &[DecodedPatch], options: ReportOptions) -> Self {
        let mut patches: Vec<&DecodedPatch> = patches.iter().collect();
        patches.sort_by(|a, b| a.name.cmp(&b.name));

        let lookups: Vec<HashMap<&str, &DecodedParameter>> = patches
            .iter()
            .map(|patch| {
                patch
                    .parameters
                    .iter()
                    .map(|p| (p.key.as_str(), p))
                    .collect()
            })
            .collect();

        let mut definitions: Vec<_> = registry
            .iter()
            .filter(|def| options.include_unknown || def.type_tag() != TypeTag::Unk)
            .collect();
        definitions.sort_by_key(|def| def.key);

        let rows = definitions
            .into_iter()
            .map(|def| Row {
                key: def.key,
                name: def.name,
                location: def.location,
                default: codec::decode(def, &def.default_raw())
                    .map(|decoded| decoded.value.to_string())
                    .unwrap_or_else(|_| def.default_raw()),
                cells: lookups
                    .iter()
                    .map(|params| {
                        params
                            .get(def.key)
                            .filter(|p| options.reports(p))
                            .map(|p| p.display_value.to_string())
                    })
                    .collect(),
            })
            .collect();

        PatchTable {
            patches: patches.iter().map(|p| p.name.clone()).collect(),
            rows,
        }
    }

    pub fn write_csv<W: Write>(&self, mut out: W) -> io::Result<()> {
        let mut header = vec!["KEY", "NAME", "LOCATION", "DEFAULT"];
        header.extend(self.patches.iter().map(String::as_str));
        write_csv_record(&mut out, header)?;

        for row in &self.rows {
            let fields = [row.key, row.name, row.location, row.default.as_str()]
                .into_iter()
                .chain(row.cells.iter().map(|c| c.as_deref().unwrap_or("")));
            write_csv_record(&mut out, fields)?;
        }

        out.flush()
    }

    /// Per-patch listing: a banner, then `Name: value` for each filled cell.
    pub fn write_dump<W: Write>(&self, mut out: W) -> io::Result<()> {
        for (col, patch) in self.patches.iter().enumerate() {
            writeln!(out)?;
            writeln!(out, "{}", format!("----- {} -----", patch).bold())?;
            for row in &self.rows {
                if let Some(value) = &row.cells[col] {
                    writeln!(out, "{}: {}", row.name.cyan(), value.yellow())?;
                }
            }
        }
        out.flush()
    }
}

/// JSON form of one patch: the parameters the table would show, key-sorted.
#[derive(Debug, Serialize)]
pub struct PatchReport<'a> {
    pub name: &'a str,
    pub parameters: Vec<&'a DecodedParameter>,
}

impl<'a> PatchReport<'a> {
    pub fn new(patch: &'a DecodedPatch, options: ReportOptions) -> Self {
        PatchReport {
            name: &patch.name,
            parameters: patch
                .sorted_by_key()
                .into_iter()
                .filter(|p| options.reports(p))
                .collect(),
        }
    }
}

fn csv_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

fn write_csv_record<'a, W: Write>(
    out: &mut W,
    fields: impl IntoIterator<Item = &'a str>,
) -> io::Result<()> {
    let line: Vec<Cow<'a, str>> = fields.into_iter().map(csv_field).collect();
    writeln!(out, "{}", line.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;
    use s1patch_core::PatchDecoder;

    fn decode_all(registry: &Registry, files: &[(&str, &str)]) -> Vec<DecodedPatch> {
        let decoder = PatchDecoder::new(registry);
        files
            .iter()
            .map(|(name, text)| decoder.decode(name, text).unwrap())
            .collect()
    }

    fn row<'t>(table: &'t PatchTable, key: &str) -> Option<&'t Row> {
        table.rows.iter().find(|r| r.key == key)
    }

    #[test]
    fn columns_sorted_and_cells_follow_changed_rule() {
        let registry = Registry::s1().unwrap();
        let patches = decode_all(
            &registry,
            &[
                ("zeta.prm", "LENG=32\nLEVEL=70\n"),
                ("00-DEFAULT", "LENG=16\n"),
            ],
        );
        let table = PatchTable::build(&registry, &patches, ReportOptions::default());

        assert_eq!(table.patches, vec!["00-DEFAULT", "zeta.prm"]);

        let leng = row(&table, "LENG").unwrap();
        assert_eq!(leng.default, "16");
        assert_eq!(
            leng.cells,
            vec![Some("16".to_string()), Some("32".to_string())]
        );

        // Unchanged in zeta.prm and absent from the defaults file.
        assert_eq!(row(&table, "LEVEL").unwrap().cells, vec![None, None]);
    }

    #[test]
    fn include_defaults_fills_unchanged_cells() {
        let registry = Registry::s1().unwrap();
        let patches = decode_all(&registry, &[("p", "LEVEL=70\n")]);
        let options = ReportOptions {
            include_defaults: true,
            ..Default::default()
        };
        let table = PatchTable::build(&registry, &patches, options);
        assert_eq!(
            row(&table, "LEVEL").unwrap().cells,
            vec![Some("70".to_string())]
        );
    }

    #[test]
    fn unknown_rows_need_opting_in() {
        let registry = Registry::s1().unwrap();
        let patches = decode_all(&registry, &[("p", "MOTION_CC1=5\n")]);

        let table = PatchTable::build(&registry, &patches, ReportOptions::default());
        assert!(row(&table, "MOTION_CC1").is_none());

        let options = ReportOptions {
            include_unknown: true,
            ..Default::default()
        };
        let table = PatchTable::build(&registry, &patches, options);
        assert_eq!(
            row(&table, "MOTION_CC1").unwrap().cells,
            vec![Some("5".to_string())]
        );
    }

    #[test]
    fn rows_are_key_sorted() {
        let registry = Registry::s1().unwrap();
        let table = PatchTable::build(&registry, &[], ReportOptions::default());
        let keys: Vec<_> = table.rows.iter().map(|r| r.key).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
        assert!(!keys.is_empty());
    }

    #[test]
    fn csv_quotes_only_when_needed() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("(-100, -75)"), "\"(-100, -75)\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn csv_has_header_and_one_line_per_row() {
        let registry = Registry::s1().unwrap();
        let patches = decode_all(&registry, &[("p", "OSC_DRAW_P1=0\n")]);
        let table = PatchTable::build(&registry, &patches, ReportOptions::default());

        let mut buf = Vec::new();
        table.write_csv(&mut buf).unwrap();
        let csv = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = csv.lines().collect();

        assert_eq!(lines[0], "KEY,NAME,LOCATION,DEFAULT,p");
        assert_eq!(lines.len(), table.rows.len() + 1);
        assert!(
            lines
                .iter()
                .any(|l| l.starts_with("OSC_DRAW_P1,") && l.ends_with(",\"(0, 0)\""))
        );
    }

    #[test]
    fn dump_lists_reported_values_under_a_banner() {
        colored::control::set_override(false);
        let registry = Registry::s1().unwrap();
        let patches = decode_all(&registry, &[("bass.prm", "LENG=32\nLEVEL=70\nTEMPO=12000\n")]);
        let table = PatchTable::build(&registry, &patches, ReportOptions::default());

        let mut buf = Vec::new();
        table.write_dump(&mut buf).unwrap();
        let dump = String::from_utf8(buf).unwrap();

        assert_eq!(
            dump,
            "\n----- bass.prm -----\nPattern Length/Last: 32\nTempo: 120.0\n"
        );
    }

    #[test]
    fn json_report_matches_table_policy() {
        let registry = Registry::s1().unwrap();
        let patches = decode_all(&registry, &[("p", "TEMPO=12000\nLEVEL=70\nLENG=32\n")]);
        let report = PatchReport::new(&patches[0], ReportOptions::default());
        let keys: Vec<_> = report.parameters.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, vec!["LENG", "TEMPO"]);
    }
}
