// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::Color;
use gatepass_core::ParsedReference;

use crate::table::{Column, Table};
use crate::util::OutputFormat;

#[derive(Debug, Clone, Copy)]
pub struct ReferenceFormatter {
    format: OutputFormat,
}

impl ReferenceFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format<'a>(&'a self, reference: &'a ParsedReference) -> Display<'a> {
        Display {
            reference,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    reference: &'a ParsedReference,
    formatter: &'a ReferenceFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.formatter.format {
            OutputFormat::Json => {
                let json =
                    serde_json::to_string_pretty(self.reference).map_err(|_| fmt::Error)?;
                writeln!(f, "{json}")
            }
            OutputFormat::Table => {
                let rows = rows(self.reference);
                let columns = [Field::Key, Field::Value];
                write!(f, "{}", Table::new(&columns, &rows).without_header())
            }
        }
    }
}

struct Row<'a> {
    key: Cow<'a, str>,
    value: Cow<'a, str>,
}

impl<'a> Row<'a> {
    fn new(key: impl Into<Cow<'a, str>>, value: impl Into<Cow<'a, str>>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

fn rows(reference: &ParsedReference) -> Vec<Row<'_>> {
    let mut rows = vec![Row::new("type", reference.kind().as_str())];
    if let Some(event_id) = reference.event_id() {
        rows.push(Row::new("event_id", event_id.as_str()));
    }

    match reference {
        ParsedReference::RegistrationUrl { raw_url, .. }
        | ParsedReference::EventUrl { raw_url, .. } => rows.push(Row::new("url", raw_url)),
        ParsedReference::StructuredData { fields, .. } => {
            if reference.from_agenda() {
                rows.push(Row::new("agenda", "yes"));
            }
            rows.extend(
                fields
                    .iter()
                    .map(|(k, v)| Row::new(format!("field.{k}"), v.as_str())),
            );
        }
        ParsedReference::Unrecognized { raw_data } => rows.push(Row::new("raw_data", raw_data)),
        ParsedReference::CheckIn { .. } | ParsedReference::NumericId { .. } => {}
    }
    rows
}

enum Field {
    Key,
    Value,
}

impl<'r> Column<Row<'r>> for Field {
    fn name(&self) -> Cow<'_, str> {
        match self {
            Field::Key => "Field",
            Field::Value => "Value",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a Row<'r>) -> Cow<'a, str> {
        match self {
            Field::Key => Cow::Borrowed(&data.key),
            Field::Value => Cow::Borrowed(&data.value),
        }
    }

    fn get_color(&self, data: &Row<'r>) -> Option<Color> {
        match self {
            Field::Key => Some(Color::Cyan),
            Field::Value if data.key == "type" && data.value == "unrecognized" => {
                Some(Color::Red)
            }
            Field::Value => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gatepass_core::classify;

    fn table(raw: &str) -> String {
        colored::control::set_override(false);
        let reference = classify(raw);
        ReferenceFormatter::new(OutputFormat::Table)
            .format(&reference)
            .to_string()
    }

    #[test]
    fn test_table_check_in() {
        assert_eq!(
            table("https://host/api/events/42/check-in"),
            "type      checkin_url\nevent_id  42\n"
        );
    }

    #[test]
    fn test_table_agenda_fields() {
        let out = table("EVENT_AGENDA:123|TITLE:Summit");
        assert!(out.contains("type                structured_data\n"));
        assert!(out.contains("agenda              yes\n"));
        assert!(out.contains("field.event_agenda  123\n"));
        assert!(out.contains("field.title         Summit\n"));
    }

    #[test]
    fn test_table_unrecognized() {
        let out = table("hello");
        assert_eq!(out, "type      unrecognized\nraw_data  hello\n");
    }

    #[test]
    fn test_json() {
        let reference = classify("https://host/register/17/");
        let out = ReferenceFormatter::new(OutputFormat::Json)
            .format(&reference)
            .to_string();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["type"], "registration_url");
        assert_eq!(value["event_id"], "17");
        assert_eq!(value["raw_url"], "https://host/register/17/");
    }
}
