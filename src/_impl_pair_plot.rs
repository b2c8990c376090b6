use crate::{positive_zero, DualPlotConfig, PairPlot, PlotSeries, TargetClass, TargetProfile};

impl PairPlot {
    /// Describe the scatterplot of a regulator pair with aggregate correlation `r`.
    ///
    /// Axes show the correlation of each target with the first (x) and the second (y)
    /// regulator. Anti-correlated pairs use the first colour: opposite-sign targets
    /// activated by the first regulator are tinted, the reverse ones are blank.
    /// Other pairs use the second colour: co-repressed targets are tinted,
    /// co-activated ones are blank. Targets with an undefined correlation are skipped.
    pub fn new(profile: &TargetProfile, r: f64, config: &DualPlotConfig) -> PairPlot {
        let [first, second] = profile.regulators();
        let layout = if r < 0.0 {
            [
                (TargetClass::ActivatedRepressed, config.outline(0), config.tint(0)),
                (TargetClass::RepressedActivated, config.outline(0), config.blank()),
            ]
        } else {
            [
                (TargetClass::CoActivated, config.outline(1), config.blank()),
                (TargetClass::CoRepressed, config.outline(1), config.tint(1)),
            ]
        };

        let classified = profile.classify(r);
        let series = layout
            .into_iter()
            .map(|(class, outline, fill)| PlotSeries {
                class,
                outline,
                fill,
                points: classified
                    .iter()
                    .filter(|(it, _)| *it == class)
                    .map(|(_, target)| (target.correlation[0], target.correlation[1]))
                    .filter(|(x, y)| x.is_finite() && y.is_finite())
                    .collect(),
            })
            .collect();

        PairPlot {
            x_title: format!("{} targets (R)", first.name),
            y_title: format!("{} targets (R)", second.name),
            legend: format!("R= {}", positive_zero(r)),
            line_width: config.line_width,
            marker_size: config.marker_size,
            series,
        }
    }

    /// Total number of drawn points.
    pub fn num_points(&self) -> usize {
        self.series.iter().map(|it| it.points.len()).sum()
    }

    pub fn series(&self, class: TargetClass) -> Option<&PlotSeries> {
        self.series.iter().find(|it| it.class == class)
    }
}
