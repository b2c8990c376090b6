use crate::{round_to, GeneAnnotation, TargetProfile, TargetReport, TargetReportRow};
use std::fmt::{Display, Formatter};

impl TargetReport {
    /// Build the report of a regulator pair: one row per profiled target with its
    /// annotation and both correlations rounded to three decimals.
    pub fn new(profile: &TargetProfile, annotation: &GeneAnnotation) -> TargetReport {
        let rows = profile
            .targets()
            .iter()
            .map(|target| TargetReportRow {
                gene: target.gene.clone(),
                annotation: annotation.get(&target.gene).map(|it| it.to_vec()),
                correlation: [
                    round_to(target.correlation[0], 3),
                    round_to(target.correlation[1], 3),
                ],
            })
            .collect();
        let [first, second] = profile.regulators();
        TargetReport {
            annotation_columns: annotation.columns().to_vec(),
            regulator_names: [first.name.clone(), second.name.clone()],
            rows,
        }
    }

    /// Column names: annotation columns followed by both regulator names.
    pub fn columns(&self) -> Vec<&str> {
        self.annotation_columns
            .iter()
            .chain(self.regulator_names.iter())
            .map(|it| it.as_str())
            .collect()
    }

    pub fn rows(&self) -> &[TargetReportRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn find(&self, gene: &str) -> Option<&TargetReportRow> {
        self.rows.iter().find(|it| it.gene == gene)
    }
}

/// Tab-separated rendering with gene ids as the first column. Missing values are `NA`.
impl Display for TargetReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "gene")?;
        for column in self.columns() {
            write!(f, "\t{}", column)?;
        }
        writeln!(f)?;
        for row in &self.rows {
            write!(f, "{}", row.gene)?;
            match &row.annotation {
                Some(fields) => {
                    for field in fields {
                        write!(f, "\t{}", field)?;
                    }
                }
                None => {
                    for _ in &self.annotation_columns {
                        write!(f, "\tNA")?;
                    }
                }
            }
            for value in row.correlation {
                if value.is_nan() {
                    write!(f, "\tNA")?;
                } else {
                    write!(f, "\t{}", value)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
