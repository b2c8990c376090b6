use crate::{build_index_map, find_duplicate, DualRegulonError, ExpressionMatrix};

impl ExpressionMatrix {
    /// Create a new `ExpressionMatrix` from row-major `values`.
    ///
    /// Returns `Err` when gene ids repeat or when the number of values is not
    /// `genes.len() * samples.len()`.
    pub fn new(
        genes: Vec<String>,
        samples: Vec<String>,
        values: Vec<f64>,
    ) -> Result<ExpressionMatrix, DualRegulonError> {
        if let Some(duplicate) = find_duplicate(&genes) {
            return Err(DualRegulonError::DuplicateId(duplicate.clone()));
        }
        if values.len() != genes.len() * samples.len() {
            return Err(DualRegulonError::DimensionMismatch(format!(
                "expected {}x{} expression values, found {}",
                genes.len(),
                samples.len(),
                values.len()
            )));
        }
        Ok(ExpressionMatrix {
            gene_to_index: build_index_map(&genes),
            genes,
            samples,
            values,
        })
    }

    pub fn num_genes(&self) -> usize {
        self.genes.len()
    }

    pub fn num_samples(&self) -> usize {
        self.samples.len()
    }

    pub fn genes(&self) -> &[String] {
        &self.genes
    }

    pub fn samples(&self) -> &[String] {
        &self.samples
    }

    pub fn contains_gene(&self, gene: &str) -> bool {
        self.gene_to_index.contains_key(gene)
    }

    /// Expression profile of a gene across all samples, or `None` if the gene is unknown.
    pub fn profile(&self, gene: &str) -> Option<&[f64]> {
        let row = *self.gene_to_index.get(gene)?;
        let width = self.samples.len();
        Some(&self.values[row * width..(row + 1) * width])
    }

    /// Same as `profile`, but unknown genes are reported as an error.
    pub(crate) fn require_profile(&self, gene: &str) -> Result<&[f64], DualRegulonError> {
        self.profile(gene)
            .ok_or_else(|| DualRegulonError::UnknownGene(gene.to_string()))
    }
}
