//! Row-to-record transformation.
//!
//! Records carry only the mapped columns. A target with no mapping is
//! simply absent from every record, required or not; surfacing that is
//! validation's job, and transformation does not re-check it.

use serde_json::{Map, Value};

use intake_model::{ColumnDef, MappingSet, ParsedFile};

/// A plain record handed to the import sink: target keys to raw string
/// values.
pub type Record = Map<String, Value>;

/// Builds one record per data row from the mapped columns.
pub fn build_records(
    columns: &[ColumnDef],
    mapping: &MappingSet,
    file: &ParsedFile,
) -> Vec<Record> {
    let mapped: Vec<(&ColumnDef, &str)> = columns
        .iter()
        .filter_map(|column| {
            mapping
                .source_for(&column.key)
                .map(|source| (column, source))
        })
        .collect();

    file.rows
        .iter()
        .map(|row| {
            let mut record = Record::new();
            for (column, source) in &mapped {
                let value = file.cell(row, source);
                record.insert(column.key.clone(), Value::String(value.to_string()));
            }
            record
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use intake_model::{ColumnDef, MappingSet, ParsedFile};

    fn sample_file() -> ParsedFile {
        ParsedFile {
            source_name: "items.csv".to_string(),
            headers: vec!["SKU".to_string(), "Name".to_string()],
            rows: vec![
                vec!["A-1".to_string(), "Widget".to_string()],
                vec!["A-2".to_string(), "Gadget".to_string()],
            ],
        }
    }

    #[test]
    fn records_contain_only_mapped_columns() {
        let columns = vec![
            ColumnDef::new("sku", "SKU").required(),
            ColumnDef::new("name", "Item Name"),
        ];
        let mut mapping = MappingSet::new();
        mapping.set("sku", "SKU");

        let records = build_records(&columns, &mapping, &sample_file());
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("sku"), Some(&Value::String("A-1".into())));
        assert!(records[0].get("name").is_none());
    }

    #[test]
    fn cleared_mapping_drops_the_column_from_every_record() {
        let columns = vec![
            ColumnDef::new("sku", "SKU"),
            ColumnDef::new("name", "Item Name"),
        ];
        let mut mapping = MappingSet::new();
        mapping.set("sku", "SKU");
        mapping.set("name", "Name");
        mapping.clear("name");

        let records = build_records(&columns, &mapping, &sample_file());
        assert!(records.iter().all(|record| !record.contains_key("name")));
    }
}
