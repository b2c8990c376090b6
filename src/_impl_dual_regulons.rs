use crate::{DualRegulonError, DualRegulonTable, DualRegulons, NetworkResults, RegulatoryNetwork};
use tracing::debug;

impl DualRegulons {
    /// Wrap two single-regulon networks and their evaluated pairs.
    ///
    /// The regulators of the two networks must not overlap.
    pub fn new(
        first: RegulatoryNetwork,
        second: RegulatoryNetwork,
        results: DualRegulonTable,
    ) -> Result<DualRegulons, DualRegulonError> {
        let second_ids = second.regulators().ids();
        let shared: Vec<String> = first
            .regulators()
            .ids()
            .into_iter()
            .filter(|id| second_ids.contains(id))
            .collect();
        if !shared.is_empty() {
            return Err(DualRegulonError::OverlappingRegulators(shared));
        }
        Ok(DualRegulons {
            first,
            second,
            results,
        })
    }

    pub fn first(&self) -> &RegulatoryNetwork {
        &self.first
    }

    pub fn second(&self) -> &RegulatoryNetwork {
        &self.second
    }

    pub fn results(&self) -> &DualRegulonTable {
        &self.results
    }

    /// Unify both networks into one coordinate space.
    ///
    /// Expression, annotation and parameters come from the first network. Regulators
    /// and both incidence matrices are concatenated, first network first.
    ///
    /// Both networks must be processed and must describe the same gene universe.
    pub fn merged_network(&self) -> Result<RegulatoryNetwork, DualRegulonError> {
        let first = self.first.require_results()?;
        let second = self.second.require_results()?;
        if self.first.expression().genes() != self.second.expression().genes() {
            return Err(DualRegulonError::GeneUniverseMismatch(
                "expression matrices have different genes".to_string(),
            ));
        }

        let regulators = self.first.regulators().concat(self.second.regulators())?;
        let results = NetworkResults::new(
            first.reference().hconcat(second.reference())?,
            first.dpi().hconcat(second.dpi())?,
        )?;
        debug!(
            regulators = regulators.len(),
            genes = self.first.expression().num_genes(),
            "Merged dual regulon networks."
        );

        RegulatoryNetwork::new(
            self.first.expression().clone(),
            regulators,
            self.first.annotation().clone(),
            *self.first.parameters(),
        )?
        .with_results(results)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_fixtures::{
        build_dual_regulons, build_first_network, build_results_table, build_second_network,
    };
    use crate::{
        DualRegulonError, DualRegulons, ExpressionMatrix, IncidenceMatrix, NetworkResults,
        RegulatoryNetwork,
    };

    #[test]
    fn merge_concatenates_regulators() {
        let dual = build_dual_regulons();
        let merged = dual.merged_network().unwrap();

        assert_eq!(vec!["ENSG1", "ENSG2"], merged.regulators().ids());
        assert_eq!(vec!["TF1", "TF2"], merged.regulators().names());
        let results = merged.results().unwrap();
        assert_eq!(2, results.reference().num_regulators());
        assert_eq!(2, results.dpi().num_regulators());
        assert_eq!(
            dual.first().results().unwrap().reference().column("ENSG1"),
            results.reference().column("ENSG1")
        );
        assert_eq!(
            dual.second().results().unwrap().dpi().column("ENSG2"),
            results.dpi().column("ENSG2")
        );
        // DPI differs from the reference in the G3 edge of TF1.
        assert_eq!(Some(0.5), results.reference().get(4, "ENSG1"));
        assert_eq!(Some(0.0), results.dpi().get(4, "ENSG1"));
        assert_eq!(dual.first().expression(), merged.expression());
        assert_eq!(dual.first().annotation(), merged.annotation());
    }

    #[test]
    fn merge_requires_processed_networks() {
        let first = build_first_network();
        let unprocessed = RegulatoryNetwork::new(
            first.expression().clone(),
            first.regulators().clone(),
            first.annotation().clone(),
            *first.parameters(),
        )
        .unwrap();
        let dual = DualRegulons::new(unprocessed, build_second_network(), build_results_table())
            .unwrap();
        assert!(matches!(
            dual.merged_network(),
            Err(DualRegulonError::IncompleteNetwork(_))
        ));
    }

    #[test]
    fn merge_requires_shared_gene_universe() {
        let first = build_first_network();
        let genes: Vec<String> = vec!["ENSG2".to_string(), "G9".to_string()];
        let expression =
            ExpressionMatrix::new(genes.clone(), vec!["s1".to_string()], vec![1.0, 2.0]).unwrap();
        let second = build_second_network();
        let incidence =
            IncidenceMatrix::new(genes, vec!["ENSG2".to_string()], vec![0.0, 1.0]).unwrap();
        let second = RegulatoryNetwork::new(
            expression,
            second.regulators().clone(),
            second.annotation().clone(),
            *second.parameters(),
        )
        .unwrap()
        .with_results(NetworkResults::new(incidence.clone(), incidence).unwrap())
        .unwrap();

        let dual = DualRegulons::new(first, second, build_results_table()).unwrap();
        assert!(matches!(
            dual.merged_network(),
            Err(DualRegulonError::GeneUniverseMismatch(_))
        ));
    }

    #[test]
    fn regulators_must_not_overlap() {
        let result = DualRegulons::new(
            build_first_network(),
            build_first_network(),
            build_results_table(),
        );
        assert!(matches!(
            result,
            Err(DualRegulonError::OverlappingRegulators(ids)) if ids == vec!["ENSG1".to_string()]
        ));
    }
}
