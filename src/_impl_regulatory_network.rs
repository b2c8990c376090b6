use crate::{
    DualRegulonError, ExpressionMatrix, GeneAnnotation, IncidenceMatrix, NetworkParameters,
    NetworkResults, RegulatorMap, RegulatoryNetwork, TargetNetwork,
};

impl NetworkResults {
    /// Pair a reference network with its DPI-filtered version. Both must have the same shape.
    pub fn new(
        reference: IncidenceMatrix,
        dpi: IncidenceMatrix,
    ) -> Result<NetworkResults, DualRegulonError> {
        if !reference.same_shape(&dpi) {
            return Err(DualRegulonError::DimensionMismatch(
                "reference and DPI networks differ in shape".to_string(),
            ));
        }
        Ok(NetworkResults { reference, dpi })
    }

    pub fn reference(&self) -> &IncidenceMatrix {
        &self.reference
    }

    pub fn dpi(&self) -> &IncidenceMatrix {
        &self.dpi
    }

    pub fn get(&self, network: TargetNetwork) -> &IncidenceMatrix {
        match network {
            TargetNetwork::Reference => &self.reference,
            TargetNetwork::Dpi => &self.dpi,
        }
    }
}

/// Methods for safely constructing new instances of `RegulatoryNetwork`s.
impl RegulatoryNetwork {
    /// Create an unprocessed network. Every regulator id must be a gene of `expression`.
    pub fn new(
        expression: ExpressionMatrix,
        regulators: RegulatorMap,
        annotation: GeneAnnotation,
        parameters: NetworkParameters,
    ) -> Result<RegulatoryNetwork, DualRegulonError> {
        for id in regulators.ids() {
            if !expression.contains_gene(&id) {
                return Err(DualRegulonError::UnknownGene(id));
            }
        }
        Ok(RegulatoryNetwork {
            expression,
            regulators,
            annotation,
            parameters,
            results: None,
        })
    }

    /// Attach the inferred networks, making this network processed.
    ///
    /// Rows of the results must be the expression genes and columns must be the
    /// regulator ids, both in their original order.
    pub fn with_results(
        mut self,
        results: NetworkResults,
    ) -> Result<RegulatoryNetwork, DualRegulonError> {
        let reference = results.reference();
        if reference.genes() != self.expression.genes() {
            return Err(DualRegulonError::DimensionMismatch(
                "network rows do not match the expression genes".to_string(),
            ));
        }
        if reference.regulators() != self.regulators.ids().as_slice() {
            return Err(DualRegulonError::DimensionMismatch(
                "network columns do not match the regulator ids".to_string(),
            ));
        }
        self.results = Some(results);
        Ok(self)
    }
}

/// Some basic utility methods for inspecting the `RegulatoryNetwork`.
impl RegulatoryNetwork {
    pub fn expression(&self) -> &ExpressionMatrix {
        &self.expression
    }

    pub fn regulators(&self) -> &RegulatorMap {
        &self.regulators
    }

    pub fn annotation(&self) -> &GeneAnnotation {
        &self.annotation
    }

    pub fn parameters(&self) -> &NetworkParameters {
        &self.parameters
    }

    pub fn results(&self) -> Option<&NetworkResults> {
        self.results.as_ref()
    }

    pub fn is_processed(&self) -> bool {
        self.results.is_some()
    }

    /// Same as `results`, but an unprocessed network is reported as an error.
    pub fn require_results(&self) -> Result<&NetworkResults, DualRegulonError> {
        self.results.as_ref().ok_or_else(|| {
            DualRegulonError::IncompleteNetwork(
                "reference and DPI networks are missing".to_string(),
            )
        })
    }
}
