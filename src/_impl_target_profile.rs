use crate::_impl_incidence_matrix::sign_of;
use crate::{
    DualRegulonError, Estimator, PairPlotOptions, ProfiledTarget, RegulatoryNetwork,
    ResolvedRegulator, TargetClass, TargetNetwork, TargetProfile,
};
use tracing::{debug, warn};

impl Default for PairPlotOptions {
    fn default() -> Self {
        PairPlotOptions {
            estimator: Estimator::Spearman,
            shared_targets: true,
            assigned_association: true,
            target_network: TargetNetwork::Reference,
        }
    }
}

impl TargetClass {
    /// Classify a target by the signs of its edges to the first and the second regulator.
    ///
    /// Targets of only one regulator, or with a zero-valued edge, have no class.
    pub fn from_signs(first: i8, second: i8) -> Option<TargetClass> {
        match (first, second) {
            (1, -1) => Some(TargetClass::ActivatedRepressed),
            (-1, 1) => Some(TargetClass::RepressedActivated),
            (1, 1) => Some(TargetClass::CoActivated),
            (-1, -1) => Some(TargetClass::CoRepressed),
            _ => None,
        }
    }

    /// True if this class is drawn for a dual regulon with the given aggregate correlation.
    ///
    /// Anti-correlated pairs (`r < 0`) show targets with opposite signs, all other pairs
    /// show targets with matching signs.
    pub fn is_drawn(&self, r: f64) -> bool {
        let opposite = matches!(
            self,
            TargetClass::ActivatedRepressed | TargetClass::RepressedActivated
        );
        if r < 0.0 {
            opposite
        } else {
            !opposite
        }
    }
}

impl TargetProfile {
    /// Select the targets of a regulator pair and correlate their expression with
    /// both regulators.
    ///
    /// Regulators can be given by name or by id. With `shared_targets`, only genes
    /// regulated by both regulators are kept, otherwise genes regulated by at least
    /// one of them. Targets keep the row order of the incidence matrix.
    pub fn compute(
        network: &RegulatoryNetwork,
        regulators: (&str, &str),
        options: &PairPlotOptions,
    ) -> Result<TargetProfile, DualRegulonError> {
        let incidence = network.require_results()?.get(options.target_network);
        let resolved = [
            network.regulators().resolve(regulators.0)?,
            network.regulators().resolve(regulators.1)?,
        ];

        let mut columns = Vec::with_capacity(2);
        let mut profiles = Vec::with_capacity(2);
        for regulator in &resolved {
            let column = incidence
                .column(&regulator.id)
                .ok_or_else(|| DualRegulonError::UnknownRegulator(regulator.id.clone()))?;
            debug!(
                regulator = %regulator.name,
                targets = ?incidence.num_targets(&regulator.id),
                "Selected regulator column."
            );
            columns.push(column);
            profiles.push(network.expression().require_profile(&regulator.id)?);
        }

        let mut targets = Vec::new();
        for (row, gene) in incidence.genes().iter().enumerate() {
            let edges = [columns[0][row], columns[1][row]];
            let keep = if options.shared_targets {
                edges[0] != 0.0 && edges[1] != 0.0
            } else {
                edges[0] != 0.0 || edges[1] != 0.0
            };
            if !keep {
                continue;
            }

            let expression = network.expression().require_profile(gene)?;
            let mut correlation = [0.0; 2];
            for k in 0..2 {
                correlation[k] = if options.assigned_association && edges[k] == 0.0 {
                    0.0
                } else {
                    options
                        .estimator
                        .correlate(expression, profiles[k])
                        .unwrap_or(f64::NAN)
                };
            }
            if correlation.iter().any(|it| it.is_nan()) {
                warn!(gene = %gene, estimator = %options.estimator, "Undefined correlation.");
            }

            targets.push(ProfiledTarget {
                gene: gene.clone(),
                incidence: edges,
                correlation,
            });
        }

        Ok(TargetProfile {
            regulators: resolved,
            targets,
        })
    }

    pub fn regulators(&self) -> &[ResolvedRegulator; 2] {
        &self.regulators
    }

    pub fn targets(&self) -> &[ProfiledTarget] {
        &self.targets
    }

    /// Targets drawn for a dual regulon with aggregate correlation `r`, with their class.
    pub fn classify(&self, r: f64) -> Vec<(TargetClass, &ProfiledTarget)> {
        self.targets
            .iter()
            .filter_map(|target| {
                let class = TargetClass::from_signs(
                    sign_of(target.incidence[0]),
                    sign_of(target.incidence[1]),
                )?;
                if class.is_drawn(r) {
                    Some((class, target))
                } else {
                    None
                }
            })
            .collect()
    }
}
