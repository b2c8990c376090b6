use crate::{build_index_map, find_duplicate, DualRegulonError, IncidenceMatrix};

impl IncidenceMatrix {
    /// Create a new genes × regulators `IncidenceMatrix` from row-major `values`.
    pub fn new(
        genes: Vec<String>,
        regulators: Vec<String>,
        values: Vec<f64>,
    ) -> Result<IncidenceMatrix, DualRegulonError> {
        if let Some(duplicate) = find_duplicate(&genes).or_else(|| find_duplicate(&regulators)) {
            return Err(DualRegulonError::DuplicateId(duplicate.clone()));
        }
        if values.len() != genes.len() * regulators.len() {
            return Err(DualRegulonError::DimensionMismatch(format!(
                "expected {}x{} incidence values, found {}",
                genes.len(),
                regulators.len(),
                values.len()
            )));
        }
        Ok(IncidenceMatrix {
            regulator_to_index: build_index_map(&regulators),
            genes,
            regulators,
            values,
        })
    }

    /// Create an `IncidenceMatrix` from per-regulator columns.
    pub fn from_columns(
        genes: Vec<String>,
        columns: Vec<(String, Vec<f64>)>,
    ) -> Result<IncidenceMatrix, DualRegulonError> {
        let mut values = vec![0.0; genes.len() * columns.len()];
        for (j, (regulator, column)) in columns.iter().enumerate() {
            if column.len() != genes.len() {
                return Err(DualRegulonError::DimensionMismatch(format!(
                    "column `{}` has {} values, expected {}",
                    regulator,
                    column.len(),
                    genes.len()
                )));
            }
            for (i, value) in column.iter().enumerate() {
                values[i * columns.len() + j] = *value;
            }
        }
        let regulators = columns.into_iter().map(|(regulator, _)| regulator).collect();
        IncidenceMatrix::new(genes, regulators, values)
    }

    pub fn genes(&self) -> &[String] {
        &self.genes
    }

    pub fn regulators(&self) -> &[String] {
        &self.regulators
    }

    pub fn num_genes(&self) -> usize {
        self.genes.len()
    }

    pub fn num_regulators(&self) -> usize {
        self.regulators.len()
    }

    /// Value of the edge between `regulator` and the gene in the given row.
    pub fn get(&self, row: usize, regulator: &str) -> Option<f64> {
        let column = *self.regulator_to_index.get(regulator)?;
        if row >= self.genes.len() {
            return None;
        }
        Some(self.values[row * self.regulators.len() + column])
    }

    /// Copy the column of a regulator, ordered like `genes`.
    pub fn column(&self, regulator: &str) -> Option<Vec<f64>> {
        let column = *self.regulator_to_index.get(regulator)?;
        let width = self.regulators.len();
        Some(
            (0..self.genes.len())
                .map(|row| self.values[row * width + column])
                .collect(),
        )
    }

    /// Number of targets (non-zero entries) of a regulator.
    pub fn num_targets(&self, regulator: &str) -> Option<usize> {
        self.column(regulator)
            .map(|column| column.iter().filter(|it| **it != 0.0).count())
    }

    pub(crate) fn same_shape(&self, other: &IncidenceMatrix) -> bool {
        self.genes == other.genes && self.regulators == other.regulators
    }

    /// Column-wise concatenation: columns of `self` followed by columns of `other`.
    ///
    /// Both matrices must have identical gene rows.
    pub fn hconcat(&self, other: &IncidenceMatrix) -> Result<IncidenceMatrix, DualRegulonError> {
        if self.genes != other.genes {
            return Err(DualRegulonError::GeneUniverseMismatch(
                "incidence matrices have different gene rows".to_string(),
            ));
        }
        let columns = [self, other]
            .into_iter()
            .flat_map(|matrix| {
                matrix.regulators.iter().map(move |regulator| {
                    let column = matrix.column(regulator).unwrap_or_default();
                    (regulator.clone(), column)
                })
            })
            .collect();
        IncidenceMatrix::from_columns(self.genes.clone(), columns)
    }
}

pub(crate) fn sign_of(value: f64) -> i8 {
    if value > 0.0 {
        1
    } else if value < 0.0 {
        -1
    } else {
        0
    }
}
