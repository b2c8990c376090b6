use crate::{find_duplicate, DualRegulonError, RegulatorMap, ResolvedRegulator};

impl RegulatorMap {
    /// Create a new `RegulatorMap` from `(name, id)` pairs.
    ///
    /// The ordering of the pairs is preserved. Both names and ids must be unique.
    pub fn new(entries: Vec<(String, String)>) -> Result<RegulatorMap, DualRegulonError> {
        let names: Vec<String> = entries.iter().map(|(name, _)| name.clone()).collect();
        let ids: Vec<String> = entries.iter().map(|(_, id)| id.clone()).collect();
        if let Some(duplicate) = find_duplicate(&names).or_else(|| find_duplicate(&ids)) {
            return Err(DualRegulonError::DuplicateId(duplicate.clone()));
        }
        let name_to_id = entries.iter().cloned().collect();
        let id_to_name = entries
            .iter()
            .map(|(name, id)| (id.clone(), name.clone()))
            .collect();
        Ok(RegulatorMap {
            entries,
            name_to_id,
            id_to_name,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Regulator ids in map order.
    pub fn ids(&self) -> Vec<String> {
        self.entries.iter().map(|(_, id)| id.clone()).collect()
    }

    /// Regulator names in map order.
    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|(name, _)| name.clone()).collect()
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn find_id(&self, name: &str) -> Option<&String> {
        self.name_to_id.get(name)
    }

    pub fn find_name(&self, id: &str) -> Option<&String> {
        self.id_to_name.get(id)
    }

    /// Resolve a regulator given either by its name or by its id.
    ///
    /// Names take precedence: the query is first looked up as a name, and only then
    /// as an id.
    pub fn resolve(&self, query: &str) -> Result<ResolvedRegulator, DualRegulonError> {
        if let Some(id) = self.find_id(query) {
            Ok(ResolvedRegulator {
                name: query.to_string(),
                id: id.clone(),
            })
        } else if let Some(name) = self.find_name(query) {
            Ok(ResolvedRegulator {
                name: name.clone(),
                id: query.to_string(),
            })
        } else {
            Err(DualRegulonError::UnknownRegulator(query.to_string()))
        }
    }

    /// Concatenate two maps, entries of `self` first.
    pub(crate) fn concat(&self, other: &RegulatorMap) -> Result<RegulatorMap, DualRegulonError> {
        let mut entries = self.entries.clone();
        entries.extend(other.entries.iter().cloned());
        RegulatorMap::new(entries)
    }
}
