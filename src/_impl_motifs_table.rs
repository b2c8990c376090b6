use crate::{round_to, DualRegulonError, DualRegulonTable, MotifRecord, MotifsTable};

impl MotifsTable {
    /// Project a results table onto the columns needed for plotting.
    ///
    /// Without `subset`, all rows are used in table order. With `subset`, rows are
    /// taken in the requested order and every requested label must exist: if none of
    /// them does the result is `PairsNotFound`, if only some do it is `PartialMatch`.
    ///
    /// The aggregate correlation is rounded to two decimals.
    pub fn from_results<S: AsRef<str>>(
        table: &DualRegulonTable,
        subset: Option<&[S]>,
    ) -> Result<MotifsTable, DualRegulonError> {
        let selected: Vec<_> = match subset {
            None => table.records().iter().collect(),
            Some(labels) => {
                let (found, missing): (Vec<_>, Vec<_>) = labels
                    .iter()
                    .map(|it| (it.as_ref(), table.find(it.as_ref())))
                    .partition(|(_, record)| record.is_some());
                if found.is_empty() {
                    return Err(DualRegulonError::PairsNotFound);
                }
                if !missing.is_empty() {
                    return Err(DualRegulonError::PartialMatch {
                        missing: missing
                            .into_iter()
                            .map(|(label, _)| label.to_string())
                            .collect(),
                    });
                }
                found.into_iter().filter_map(|(_, record)| record).collect()
            }
        };

        let records = selected
            .into_iter()
            .map(|record| MotifRecord {
                label: record.label.clone(),
                regulon1: record.regulon1.clone(),
                regulon2: record.regulon2.clone(),
                r: round_to(record.r, 2),
            })
            .collect();
        Ok(MotifsTable { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[MotifRecord] {
        &self.records
    }
}
