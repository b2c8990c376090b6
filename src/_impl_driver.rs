use crate::render::{render_pair, PlotSurface};
use crate::{
    DualPlotConfig, DualRegulonError, DualRegulons, Estimator, MotifsTable, PairPlot,
    PairPlotOptions, RegulatoryNetwork, TargetProfile, TargetReport,
};
use tracing::debug;

/// Plot one regulator pair of a (merged) network.
///
/// Regulators may be given by name or by id. `r` is the aggregate correlation of
/// the pair, it only selects which target classes are drawn. When `document` is
/// given, the plot is written to a document with that base path (the surface adds
/// the extension).
///
/// Returns the per-target report in the row order of the incidence matrix.
pub fn plot_pair<S: PlotSurface + ?Sized>(
    network: &RegulatoryNetwork,
    regulators: (&str, &str),
    r: f64,
    options: &PairPlotOptions,
    config: &DualPlotConfig,
    surface: &mut S,
    document: Option<&str>,
) -> Result<TargetReport, DualRegulonError> {
    let profile = TargetProfile::compute(network, regulators, options)?;
    let plot = PairPlot::new(&profile, r, config);
    render_pair(surface, &plot, document)?;
    Ok(TargetReport::new(&profile, network.annotation()))
}

/// Plot the dual regulons of `dual`, one figure per evaluated pair.
///
/// `subset` selects pairs by their label in the results table (all pairs when `None`).
/// With a `path_prefix`, every figure is written to `<prefix><regulon1>.vs.<regulon2>`
/// plus the extension of the surface, i.e. `.pdf` for a `render::PdfSurface`.
///
/// All inputs are validated before anything is drawn. Any failure aborts the whole batch.
/// Returns the pair labels with their target reports, in plotting order.
pub fn plot_dual_regulons<L: AsRef<str>, S: PlotSurface + ?Sized>(
    dual: &DualRegulons,
    subset: Option<&[L]>,
    path_prefix: Option<&str>,
    config: &DualPlotConfig,
    surface: &mut S,
) -> Result<Vec<(String, TargetReport)>, DualRegulonError> {
    config.validate()?;
    let estimator = match &config.estimator {
        Some(name) => Some(name.parse::<Estimator>()?),
        None => None,
    };
    let motifs = MotifsTable::from_results(dual.results(), subset)?;
    let merged = dual.merged_network()?;

    let options = PairPlotOptions {
        estimator: estimator.unwrap_or(merged.parameters().estimator),
        ..PairPlotOptions::default()
    };

    let mut reports = Vec::with_capacity(motifs.len());
    for (i, motif) in motifs.records().iter().enumerate() {
        let label = format!("{}.vs.{}", motif.regulon1, motif.regulon2);
        let document = path_prefix.map(|prefix| format!("{}{}", prefix, label));
        debug!(pair = %label, r = motif.r, "Plotting dual regulon {}/{}.", i + 1, motifs.len());
        let report = plot_pair(
            &merged,
            (motif.regulon1.as_str(), motif.regulon2.as_str()),
            motif.r,
            &options,
            config,
            surface,
            document.as_deref(),
        )?;
        reports.push((label, report));
    }
    Ok(reports)
}

#[cfg(test)]
mod tests {
    use crate::render::PdfSurface;
    use crate::test_fixtures::{
        build_dual_regulons, build_first_network, build_record, build_second_network,
        RecordingSurface,
    };
    use crate::{
        plot_dual_regulons, plot_pair, DualPlotConfig, DualRegulonError, DualRegulonTable,
        DualRegulons, Estimator, PairPlotOptions, TargetClass,
    };
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn single_pair_regulons() -> DualRegulons {
        let table =
            DualRegulonTable::new(vec![build_record("TF1.vs.TF2", "TF1", "TF2", -0.42)]).unwrap();
        DualRegulons::new(build_first_network(), build_second_network(), table).unwrap()
    }

    #[test]
    fn end_to_end_anti_correlated_pair() {
        let dual = single_pair_regulons();
        let dir = tempfile::tempdir().unwrap();
        let prefix = format!("{}/", dir.path().to_str().unwrap());
        let mut surface = PdfSurface::new();
        let reports = plot_dual_regulons::<&str, _>(
            &dual,
            None,
            Some(prefix.as_str()),
            &DualPlotConfig::default(),
            &mut surface,
        )
        .unwrap();

        assert_eq!(1, reports.len());
        let (label, report) = &reports[0];
        assert_eq!("TF1.vs.TF2", label);
        let genes: Vec<&str> = report.rows().iter().map(|it| it.gene.as_str()).collect();
        assert_eq!(vec!["G1", "G2"], genes);

        let written: Vec<String> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|it| it.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        assert_eq!(vec!["TF1.vs.TF2.pdf".to_string()], written);
        let bytes = std::fs::read(dir.path().join("TF1.vs.TF2.pdf")).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn anti_correlated_pair_figure() {
        let dual = single_pair_regulons();
        let mut surface = RecordingSurface::default();
        plot_dual_regulons::<&str, _>(
            &dual,
            None,
            Some("plots/"),
            &DualPlotConfig::default(),
            &mut surface,
        )
        .unwrap();

        assert_eq!(vec![PathBuf::from("plots/TF1.vs.TF2")], surface.documents);
        let plot = &surface.plots[0];
        assert_eq!("R= -0.42", plot.legend);
        assert_eq!(1, plot.series(TargetClass::ActivatedRepressed).unwrap().points.len());
        assert_eq!(1, plot.series(TargetClass::RepressedActivated).unwrap().points.len());
        assert!(!surface.is_open());
    }

    #[test]
    fn near_zero_correlation_is_shown_as_zero() {
        let table =
            DualRegulonTable::new(vec![build_record("TF1.vs.TF2", "TF1", "TF2", -0.004)]).unwrap();
        let dual =
            DualRegulons::new(build_first_network(), build_second_network(), table).unwrap();
        let mut surface = RecordingSurface::default();
        plot_dual_regulons::<&str, _>(
            &dual,
            None,
            None,
            &DualPlotConfig::default(),
            &mut surface,
        )
        .unwrap();

        let plot = &surface.plots[0];
        assert_eq!("R= 0", plot.legend);
        // Rounded to zero, the pair takes the non-negative branch.
        assert!(plot.series(TargetClass::CoActivated).is_some());
        assert!(plot.series(TargetClass::ActivatedRepressed).is_none());
    }

    #[test]
    fn pairs_follow_the_subset_order() {
        let dual = build_dual_regulons();
        let mut surface = RecordingSurface::default();
        let reports = plot_dual_regulons(
            &dual,
            Some(&["TF2.vs.TF1", "TF1.vs.TF2"][..]),
            None,
            &DualPlotConfig::default(),
            &mut surface,
        )
        .unwrap();

        let labels: Vec<&str> = reports.iter().map(|(label, _)| label.as_str()).collect();
        // Labels are built from the regulons as written in the results table.
        assert_eq!(vec!["ENSG2.vs.ENSG1", "TF1.vs.TF2"], labels);
        assert_eq!(
            vec!["open -", "draw R= 0.31", "close", "open -", "draw R= -0.42", "close"],
            surface.events
        );
        assert!(surface.documents.is_empty());
        // Swapped regulators: report columns follow the requested order.
        assert_eq!(vec!["PROBEID", "SYMBOL", "TF2", "TF1"], reports[0].1.columns());
    }

    #[test]
    fn validation_happens_before_rendering() {
        let dual = build_dual_regulons();
        let mut surface = RecordingSurface::default();

        let config = DualPlotConfig {
            estimator: Some("cosine".to_string()),
            ..DualPlotConfig::default()
        };
        let result = plot_dual_regulons::<&str, _>(&dual, None, None, &config, &mut surface);
        assert!(matches!(result, Err(DualRegulonError::UnknownEstimator(_))));

        let result = plot_dual_regulons(
            &dual,
            Some(&["TF1.vs.TF2", "TF1.vs.TF3"][..]),
            None,
            &DualPlotConfig::default(),
            &mut surface,
        );
        assert!(matches!(result, Err(DualRegulonError::PartialMatch { .. })));

        let result = plot_dual_regulons(
            &dual,
            Some(&["TF1.vs.TF3"][..]),
            None,
            &DualPlotConfig::default(),
            &mut surface,
        );
        assert!(matches!(result, Err(DualRegulonError::PairsNotFound)));

        assert!(surface.events.is_empty());
    }

    #[test]
    fn failures_abort_the_batch() {
        let table = DualRegulonTable::new(vec![
            build_record("TF1.vs.TF9", "TF1", "TF9", 0.5),
            build_record("TF1.vs.TF2", "TF1", "TF2", -0.42),
        ])
        .unwrap();
        let dual =
            DualRegulons::new(build_first_network(), build_second_network(), table).unwrap();
        let mut surface = RecordingSurface::default();
        let result = plot_dual_regulons::<&str, _>(
            &dual,
            None,
            None,
            &DualPlotConfig::default(),
            &mut surface,
        );
        assert!(matches!(result, Err(DualRegulonError::UnknownRegulator(_))));
        assert!(surface.plots.is_empty());
    }

    #[test]
    fn estimator_defaults_to_the_network() {
        let dual = single_pair_regulons();
        let merged = dual.merged_network().unwrap();
        let mut surface = RecordingSurface::default();
        let reports = plot_dual_regulons::<&str, _>(
            &dual,
            None,
            None,
            &DualPlotConfig::default(),
            &mut surface,
        )
        .unwrap();

        // The fixture networks record Pearson as their estimator.
        let options = PairPlotOptions {
            estimator: Estimator::Pearson,
            ..PairPlotOptions::default()
        };
        let expected = plot_pair(
            &merged,
            ("TF1", "TF2"),
            -0.42,
            &options,
            &DualPlotConfig::default(),
            &mut RecordingSurface::default(),
            None,
        )
        .unwrap();
        assert_eq!(expected, reports[0].1);
    }
}
