//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::collections::BTreeSet;

use microbes_grid::core::{OTHER_SHAPES, SPHERE_SHAPES};
use microbes_grid::table::{AttributeValue, Record};

/// Build a record from (column, value) pairs.
pub fn record(pairs: &[(&str, AttributeValue)]) -> Record {
    pairs
        .iter()
        .map(|(column, value)| (column.to_string(), value.clone()))
        .collect()
}

/// A varied 30-ish species dataset that always admits valid grids.
pub fn microbe_rows(n: usize) -> Vec<Record> {
    const SHAPES: [&str; 6] = ["Rod", "Rod", "Coccobacillus", "Vibrio", "Streptococcus", "Spirillum"];
    const SPECIES: [&str; 3] = ["alpha", "beta", "gamma"];
    const PIGMENT: [&str; 3] = ["No", "Yes", "Yellow"];
    const OXYGEN: [&str; 5] = ["Aerobic", "Aerobic", "Anaerobic", "Facultative", "Facultative"];

    (0..n)
        .map(|i| {
            record(&[
                ("Domain", "Bacteria".into()),
                ("Genus", format!("Genus{i:02}").into()),
                ("Species", SPECIES[i % 3].into()),
                ("Gram Stain", if i % 2 == 0 { "Positive" } else { "Negative" }.into()),
                ("Shape", SHAPES[i % 6].into()),
                ("GC Content", AttributeValue::Float(30.0 + ((i * 7) % 45) as f64)),
                ("Pigment Production", PIGMENT[i % 3].into()),
                ("Oxygen", OXYGEN[i % 5].into()),
                ("Motility", if i % 4 != 0 { "Yes" } else { "No" }.into()),
                ("Habitat", "Soil".into()),
            ])
        })
        .collect()
}

/// Rows where every property covers every entity.
pub fn uniform_rows(n: usize) -> Vec<Record> {
    (0..n)
        .map(|i| {
            let mut pairs = vec![
                ("Genus", AttributeValue::from(format!("Genus{i:02}"))),
                ("Species", "sp".into()),
            ];
            for column in ["A", "B", "C", "D", "E", "F"] {
                pairs.push((column, "yes".into()));
            }
            record(&pairs)
        })
        .collect()
}

fn value<'a>(row: &'a Record, column: &str) -> Option<&'a AttributeValue> {
    row.iter().find(|(c, _)| c == column).map(|(_, v)| v)
}

fn text<'a>(row: &'a Record, column: &str) -> Option<&'a str> {
    value(row, column).and_then(AttributeValue::as_text)
}

fn display_name(row: &Record) -> String {
    format!(
        "{} {}",
        value(row, "Genus").map(ToString::to_string).unwrap_or_default(),
        value(row, "Species").map(ToString::to_string).unwrap_or_default()
    )
}

/// Recompute a property's members straight from raw records, by label.
pub fn raw_members(rows: &[Record], label: &str) -> BTreeSet<String> {
    let gc = |row: &Record| value(row, "GC Content").and_then(AttributeValue::as_number);

    rows.iter()
        .filter(|row| match label {
            "Shape:\nRod" => text(row, "Shape") == Some("Rod"),
            "Shape:\nSphere" => text(row, "Shape").is_some_and(|s| SPHERE_SHAPES.contains(&s)),
            "Shape:\nNOT Rod or Sphere" => {
                text(row, "Shape").is_some_and(|s| OTHER_SHAPES.contains(&s))
            }
            "GC content\n< 40%" => gc(row).is_some_and(|v| v < 40.0),
            "GC content:\n40-60%" => gc(row).is_some_and(|v| (40.0..=60.0).contains(&v)),
            "GC content\n> 60%" => gc(row).is_some_and(|v| v > 60.0),
            "Pigment Production:\nNo" => text(row, "Pigment Production") == Some("No"),
            "Pigment Production:\nYes" => text(row, "Pigment Production") != Some("No"),
            other => {
                let (column, expected) = other.split_once(":\n").expect("default-rule label");
                value(row, column).is_some_and(|v| v.to_string() == expected)
            }
        })
        .map(display_name)
        .collect()
}
