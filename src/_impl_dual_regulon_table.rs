use crate::{build_index_map, find_duplicate, DualRegulonError, DualRegulonRecord, DualRegulonTable};
use std::ops::Index;

impl DualRegulonTable {
    /// Create a results table. Row labels must be unique.
    pub fn new(records: Vec<DualRegulonRecord>) -> Result<DualRegulonTable, DualRegulonError> {
        let labels: Vec<String> = records.iter().map(|it| it.label.clone()).collect();
        if let Some(duplicate) = find_duplicate(&labels) {
            return Err(DualRegulonError::DuplicateId(duplicate.clone()));
        }
        Ok(DualRegulonTable {
            label_to_index: build_index_map(&labels),
            records,
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[DualRegulonRecord] {
        &self.records
    }

    /// Row labels in table order.
    pub fn labels(&self) -> Vec<&str> {
        self.records.iter().map(|it| it.label.as_str()).collect()
    }

    pub fn find(&self, label: &str) -> Option<&DualRegulonRecord> {
        self.label_to_index.get(label).map(|i| &self.records[*i])
    }
}

/// Allow indexing `DualRegulonTable` using row labels.
impl Index<&str> for DualRegulonTable {
    type Output = DualRegulonRecord;

    fn index(&self, label: &str) -> &Self::Output {
        match self.find(label) {
            Some(record) => record,
            None => panic!("Unknown dual regulon `{}`.", label),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_fixtures::{build_record, build_results_table};
    use crate::DualRegulonTable;

    #[test]
    fn results_table() {
        let table = build_results_table();
        assert_eq!(2, table.len());
        assert_eq!(vec!["TF1.vs.TF2", "TF2.vs.TF1"], table.labels());
        assert_eq!("ENSG2", table["TF2.vs.TF1"].regulon1);
        assert_eq!(Some(2), table["TF1.vs.TF2"].overlap);
        assert!(table.find("TF3.vs.TF4").is_none());
    }

    #[test]
    fn labels_are_unique() {
        let record = build_record("A.vs.B", "A", "B", 0.5);
        assert!(DualRegulonTable::new(vec![record.clone(), record]).is_err());
    }
}
