use crate::_tsv_parser::{TsvRow, TsvTable};
use crate::{DualRegulonError, DualRegulonRecord, DualRegulonTable, GeneAnnotation};

impl GeneAnnotation {
    /// Read an annotation table keyed by gene id. All remaining columns are kept as text.
    pub fn from_tsv(text: &str) -> Result<GeneAnnotation, DualRegulonError> {
        let table = TsvTable::parse(text)?;
        let mut annotation = GeneAnnotation::new(table.columns);
        for row in table.rows {
            if annotation.get(&row.id).is_some() {
                return Err(DualRegulonError::DuplicateId(row.id));
            }
            annotation.insert(&row.id, row.fields)?;
        }
        Ok(annotation)
    }
}

impl DualRegulonTable {
    /// Read an exported results table.
    ///
    /// Row labels come from the first column. `Regulon1`, `Regulon2` and `R` are
    /// required, `Overlap`, `Pvalue` and `Adjusted.Pvalue` are read when present.
    pub fn from_tsv(text: &str) -> Result<DualRegulonTable, DualRegulonError> {
        let table = TsvTable::parse(text)?;
        let regulon1 = table.require_column("Regulon1")?;
        let regulon2 = table.require_column("Regulon2")?;
        let r = table.require_column("R")?;
        let overlap = table.find_column("Overlap");
        let p_value = table.find_column("Pvalue");
        let adjusted_p_value = table.find_column("Adjusted.Pvalue");

        let optional_number = |row: &TsvRow, column: Option<usize>| match column {
            Some(column) => row.number(column),
            None => Ok(None),
        };

        let mut records = Vec::with_capacity(table.rows.len());
        for row in &table.rows {
            records.push(DualRegulonRecord {
                label: row.id.clone(),
                regulon1: row.fields[regulon1].clone(),
                regulon2: row.fields[regulon2].clone(),
                r: row.required_number(r)?,
                overlap: match overlap {
                    Some(column) => row.count(column)?,
                    None => None,
                },
                p_value: optional_number(row, p_value)?,
                adjusted_p_value: optional_number(row, adjusted_p_value)?,
            });
        }
        DualRegulonTable::new(records)
    }
}
