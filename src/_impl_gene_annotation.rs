use crate::{DualRegulonError, GeneAnnotation};

impl GeneAnnotation {
    /// Create an empty annotation table with the given columns.
    pub fn new(columns: Vec<String>) -> GeneAnnotation {
        GeneAnnotation {
            columns,
            rows: Default::default(),
        }
    }

    /// Add (or replace) the annotation of one gene. The number of fields must match
    /// the number of columns.
    pub fn insert(&mut self, gene: &str, fields: Vec<String>) -> Result<(), DualRegulonError> {
        if fields.len() != self.columns.len() {
            return Err(DualRegulonError::DimensionMismatch(format!(
                "gene `{}` has {} annotation fields, expected {}",
                gene,
                fields.len(),
                self.columns.len()
            )));
        }
        self.rows.insert(gene.to_string(), fields);
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn num_genes(&self) -> usize {
        self.rows.len()
    }

    pub fn get(&self, gene: &str) -> Option<&[String]> {
        self.rows.get(gene).map(|it| it.as_slice())
    }
}
