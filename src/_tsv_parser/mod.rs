use crate::DualRegulonError;
use lazy_static::lazy_static;
use regex::Regex;

/// **(internal)** `ExpressionMatrix` and `IncidenceMatrix` parsing.
mod _from_tsv_for_matrices;
/// **(internal)** `GeneAnnotation` and `DualRegulonTable` parsing.
mod _from_tsv_for_tables;

lazy_static! {
    /// Spellings of a missing value.
    static ref MISSING_VALUE: Regex = Regex::new(r"^(NA|NaN|nan|)$").unwrap();
}

/// **(internal)** One data line of a tab-separated table.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TsvRow {
    /// One-based line number in the source text.
    pub line: usize,
    pub id: String,
    pub fields: Vec<String>,
}

/// **(internal)** A tab-separated table whose first column holds row ids.
///
/// `columns` only names the data columns. Both header layouts are accepted: with a
/// header cell above the id column, and without it (as written by R's `write.table`).
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TsvTable {
    pub columns: Vec<String>,
    pub rows: Vec<TsvRow>,
}

impl TsvTable {
    pub fn parse(text: &str) -> Result<TsvTable, DualRegulonError> {
        // Blank lines and `#` comments are skipped, line numbers are kept.
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim_end_matches('\r')))
            .filter(|(_, line)| !line.trim().is_empty() && !line.starts_with('#'));

        let (header_line, header) = lines.next().ok_or(DualRegulonError::Parse {
            line: 1,
            message: "missing header".to_string(),
        })?;
        let header: Vec<String> = split_fields(header);

        let mut rows = Vec::new();
        for (line, data) in lines {
            let mut fields = split_fields(data);
            let id = fields.remove(0);
            if id.is_empty() {
                return Err(DualRegulonError::Parse {
                    line,
                    message: "empty row id".to_string(),
                });
            }
            rows.push(TsvRow { line, id, fields });
        }

        let data_width = rows.first().map(|row| row.fields.len());
        let columns = match data_width {
            Some(width) if width == header.len() => header,
            Some(width) if width + 1 == header.len() => header[1..].to_vec(),
            Some(width) => {
                return Err(DualRegulonError::Parse {
                    line: header_line,
                    message: format!(
                        "header has {} columns, rows have {} data columns",
                        header.len(),
                        width
                    ),
                })
            }
            // Without rows, assume the header names the id column too.
            None => header.into_iter().skip(1).collect(),
        };

        for row in &rows {
            if row.fields.len() != columns.len() {
                return Err(DualRegulonError::Parse {
                    line: row.line,
                    message: format!(
                        "expected {} data columns, found {}",
                        columns.len(),
                        row.fields.len()
                    ),
                });
            }
        }

        Ok(TsvTable { columns, rows })
    }

    /// Index of a required data column.
    pub fn require_column(&self, name: &str) -> Result<usize, DualRegulonError> {
        self.find_column(name)
            .ok_or_else(|| DualRegulonError::MissingColumn(name.to_string()))
    }

    pub fn find_column(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|it| it == name)
    }

    pub fn row_ids(&self) -> Vec<String> {
        self.rows.iter().map(|row| row.id.clone()).collect()
    }
}

impl TsvRow {
    /// Parse a numeric field, `None` marks a missing value.
    pub fn number(&self, column: usize) -> Result<Option<f64>, DualRegulonError> {
        let field = self.fields[column].as_str();
        if MISSING_VALUE.is_match(field) {
            return Ok(None);
        }
        field
            .parse::<f64>()
            .map(Some)
            .map_err(|_| DualRegulonError::Parse {
                line: self.line,
                message: format!("`{}` is not a number", field),
            })
    }

    /// Parse a numeric field which must be present.
    pub fn required_number(&self, column: usize) -> Result<f64, DualRegulonError> {
        self.number(column)?.ok_or_else(|| DualRegulonError::Parse {
            line: self.line,
            message: format!("missing value in row `{}`", self.id),
        })
    }

    /// Parse a non-negative integer field.
    pub fn count(&self, column: usize) -> Result<Option<usize>, DualRegulonError> {
        let field = self.fields[column].as_str();
        if MISSING_VALUE.is_match(field) {
            return Ok(None);
        }
        field
            .parse::<usize>()
            .map(Some)
            .map_err(|_| DualRegulonError::Parse {
                line: self.line,
                message: format!("`{}` is not a count", field),
            })
    }
}

/// Split one line on tabs, dropping the quotes R puts around strings.
fn split_fields(line: &str) -> Vec<String> {
    line.split('\t')
        .map(|field| {
            let field = field.trim();
            field
                .strip_prefix('"')
                .and_then(|it| it.strip_suffix('"'))
                .unwrap_or(field)
                .to_string()
        })
        .collect()
}
