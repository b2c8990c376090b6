use crate::_tsv_parser::TsvTable;
use crate::{DualRegulonError, ExpressionMatrix, IncidenceMatrix};

impl ExpressionMatrix {
    /// Read a genes × samples matrix. Missing values (`NA`) become `NaN`, which makes
    /// every correlation involving that gene undefined.
    pub fn from_tsv(text: &str) -> Result<ExpressionMatrix, DualRegulonError> {
        let table = TsvTable::parse(text)?;
        let mut values = Vec::with_capacity(table.rows.len() * table.columns.len());
        for row in &table.rows {
            for column in 0..table.columns.len() {
                values.push(row.number(column)?.unwrap_or(f64::NAN));
            }
        }
        ExpressionMatrix::new(table.row_ids(), table.columns.clone(), values)
    }
}

impl IncidenceMatrix {
    /// Read a genes × regulators matrix, e.g. an exported reference or DPI network.
    /// Every entry must be present, `0` means there is no edge.
    pub fn from_tsv(text: &str) -> Result<IncidenceMatrix, DualRegulonError> {
        let table = TsvTable::parse(text)?;
        let mut values = Vec::with_capacity(table.rows.len() * table.columns.len());
        for row in &table.rows {
            for column in 0..table.columns.len() {
                values.push(row.required_number(column)?);
            }
        }
        IncidenceMatrix::new(table.row_ids(), table.columns.clone(), values)
    }
}
