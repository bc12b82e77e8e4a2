use std::io::IsTerminal;

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use seqrec_dtype::Value;
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

/// One record located by a scan: where it starts and how long it is.
#[derive(Serialize)]
pub struct RecordEntry {
    pub index: usize,
    pub offset: u64,
    pub length: u64,
}

pub fn print_scan(entries: &[RecordEntry], format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            for entry in entries {
                println!(
                    "{}",
                    serde_json::to_string(entry).unwrap_or_else(|_| "{}".to_string())
                );
            }
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["INDEX", "OFFSET", "LENGTH"]);
            for entry in entries {
                table.add_row(vec![
                    entry.index.to_string(),
                    entry.offset.to_string(),
                    entry.length.to_string(),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for entry in entries {
                println!(
                    "record {} offset={} length={}",
                    entry.index, entry.offset, entry.length
                );
            }
        }
    }
}

/// One record decoded by a dump.
#[derive(Serialize)]
pub struct RecordDump {
    pub index: usize,
    pub count: usize,
    pub scalar: bool,
    pub values: Vec<serde_json::Value>,
}

pub fn print_dump(records: &[RecordDump], format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            for record in records {
                println!(
                    "{}",
                    serde_json::to_string(record).unwrap_or_else(|_| "{}".to_string())
                );
            }
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["INDEX", "COUNT", "VALUES"]);
            for record in records {
                table.add_row(vec![
                    record.index.to_string(),
                    record.count.to_string(),
                    join_values(&record.values),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for record in records {
                println!(
                    "record {} count={} values=[{}]",
                    record.index,
                    record.count,
                    join_values(&record.values)
                );
            }
        }
    }
}

pub fn value_to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Int(v) => serde_json::Value::from(*v),
        Value::Uint(v) => serde_json::Value::from(*v),
        Value::Float(v) => {
            serde_json::Number::from_f64(*v).map_or(serde_json::Value::Null, serde_json::Value::Number)
        }
    }
}

fn join_values(values: &[serde_json::Value]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
