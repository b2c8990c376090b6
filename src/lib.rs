//! Visual diagnostics for *dual regulons*: pairs of transcriptional regulators whose
//! target sets are evaluated jointly in a gene regulatory network analysis.
//!
//! The crate takes two pre-computed single-regulon networks (see `RegulatoryNetwork`),
//! merges them into one coordinate space, and for every evaluated regulator pair draws
//! a scatterplot comparing how shared targets correlate with each regulator.
//!
//! The typical entry point is `plot_dual_regulons`, which validates the inputs,
//! merges the networks once, and renders one plot per pair through a `PlotSurface`.

use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};

pub mod error;
pub mod render;

/// **(internal)** Pearson, Spearman and Kendall estimators.
mod _impl_estimator;
/// **(internal)** Two-way lookup of regulator names and ids.
mod _impl_regulator_map;
/// **(internal)** Utility methods for `ExpressionMatrix`.
mod _impl_expression_matrix;
/// **(internal)** Utility methods for `IncidenceMatrix`.
mod _impl_incidence_matrix;
/// **(internal)** Utility methods for `GeneAnnotation`.
mod _impl_gene_annotation;
/// **(internal)** Construction and validation of `RegulatoryNetwork`.
mod _impl_regulatory_network;
/// **(internal)** Merging the two halves of a `DualRegulons` object.
mod _impl_dual_regulons;
/// **(internal)** Utility methods for `DualRegulonTable`.
mod _impl_dual_regulon_table;
/// **(internal)** Projection of the results table into a `MotifsTable`.
mod _impl_motifs_table;
/// **(internal)** Shared-target selection and sign classification of a regulator pair.
mod _impl_target_profile;
/// **(internal)** Backend-independent figure description.
mod _impl_pair_plot;
/// **(internal)** Display and accessors of `TargetReport`.
mod _impl_target_report;
/// **(internal)** Colours and plot configuration.
mod _impl_plot_config;
/// **(internal)** The batch driver.
mod _impl_driver;
/// **(internal)** Tab-separated readers for upstream artefacts.
mod _tsv_parser;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use _impl_driver::{plot_dual_regulons, plot_pair};
pub use error::{DualRegulonError, Result};

/// An association estimator used to correlate expression profiles.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Estimator {
    Pearson,
    Spearman,
    Kendall,
}

/// A genes × samples matrix of expression values.
///
/// Values are stored row-major, i.e. the expression profile of one gene is
/// a contiguous slice.
#[derive(Clone, Debug, PartialEq)]
pub struct ExpressionMatrix {
    genes: Vec<String>,
    samples: Vec<String>,
    values: Vec<f64>,
    gene_to_index: FxHashMap<String, usize>,
}

/// Ordered mapping between regulator display names and regulator ids.
///
/// Both directions are indexed, so a regulator can be addressed either way.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegulatorMap {
    entries: Vec<(String, String)>,
    name_to_id: FxHashMap<String, String>,
    id_to_name: FxHashMap<String, String>,
}

/// Per-gene metadata keyed by gene id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeneAnnotation {
    columns: Vec<String>,
    rows: FxHashMap<String, Vec<String>>,
}

/// A signed genes × regulators association matrix. A zero entry means there is
/// no edge between the regulator and the gene.
#[derive(Clone, Debug, PartialEq)]
pub struct IncidenceMatrix {
    genes: Vec<String>,
    regulators: Vec<String>,
    values: Vec<f64>,
    regulator_to_index: FxHashMap<String, usize>,
}

/// Parameters recorded by the pipeline that produced a `RegulatoryNetwork`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NetworkParameters {
    pub estimator: Estimator,
}

/// The reference network and its DPI-filtered version. Both have the same shape.
#[derive(Clone, Debug, PartialEq)]
pub struct NetworkResults {
    reference: IncidenceMatrix,
    dpi: IncidenceMatrix,
}

/// Selects which incidence matrix of `NetworkResults` defines the targets of a regulator.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum TargetNetwork {
    #[default]
    Reference,
    Dpi,
}

/// A transcriptional network inferred for one set of regulators.
///
/// The network is *processed* once its `NetworkResults` are present.
#[derive(Clone, Debug, PartialEq)]
pub struct RegulatoryNetwork {
    expression: ExpressionMatrix,
    regulators: RegulatorMap,
    annotation: GeneAnnotation,
    parameters: NetworkParameters,
    results: Option<NetworkResults>,
}

/// One evaluated regulator pair of a dual regulon analysis.
#[derive(Clone, Debug, PartialEq)]
pub struct DualRegulonRecord {
    pub label: String,
    pub regulon1: String,
    pub regulon2: String,
    /// Signed aggregate correlation between the two regulons.
    pub r: f64,
    pub overlap: Option<usize>,
    pub p_value: Option<f64>,
    pub adjusted_p_value: Option<f64>,
}

/// Results table of a dual regulon analysis. Row labels are unique.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DualRegulonTable {
    records: Vec<DualRegulonRecord>,
    label_to_index: FxHashMap<String, usize>,
}

/// Two single-regulon networks with non-overlapping regulators, together with
/// the table of evaluated regulator pairs.
#[derive(Clone, Debug, PartialEq)]
pub struct DualRegulons {
    first: RegulatoryNetwork,
    second: RegulatoryNetwork,
    results: DualRegulonTable,
}

/// A regulator pair selected for plotting.
#[derive(Clone, Debug, PartialEq)]
pub struct MotifRecord {
    pub label: String,
    pub regulon1: String,
    pub regulon2: String,
    /// Aggregate correlation rounded to two decimals for display.
    pub r: f64,
}

/// The three-column projection of a `DualRegulonTable` used by the plotter.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MotifsTable {
    records: Vec<MotifRecord>,
}

/// Sign combination of a target with respect to both regulators of a pair.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TargetClass {
    /// Activated by the first regulator, repressed by the second.
    ActivatedRepressed,
    /// Repressed by the first regulator, activated by the second.
    RepressedActivated,
    /// Activated by both regulators.
    CoActivated,
    /// Repressed by both regulators.
    CoRepressed,
}

/// A regulator resolved against a `RegulatorMap`.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ResolvedRegulator {
    pub name: String,
    pub id: String,
}

/// One gene retained by the target filter of a regulator pair.
#[derive(Clone, Debug, PartialEq)]
pub struct ProfiledTarget {
    pub gene: String,
    /// Incidence values of the gene for both regulators.
    pub incidence: [f64; 2],
    /// Expression correlation of the gene with both regulators.
    pub correlation: [f64; 2],
}

/// Targets of a regulator pair together with their correlation profile.
#[derive(Clone, Debug, PartialEq)]
pub struct TargetProfile {
    regulators: [ResolvedRegulator; 2],
    targets: Vec<ProfiledTarget>,
}

/// Switches of the pairwise plotter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PairPlotOptions {
    pub estimator: Estimator,
    /// Keep only targets of both regulators (otherwise targets of either one).
    pub shared_targets: bool,
    /// Zero the correlation of genes that are not targets of the respective regulator.
    pub assigned_association: bool,
    pub target_network: TargetNetwork,
}

/// An RGB colour given as `#RRGGBB`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// An RGB colour with opacity, as drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RgbaColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: f64,
}

/// Styling and estimator settings of `plot_dual_regulons`.
///
/// Can be loaded from a TOML document, missing keys take their default values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DualPlotConfig {
    /// Opacity of the tinted fills.
    pub alpha: f64,
    /// Base colours of the negative and the non-negative branch.
    pub colors: [HexColor; 2],
    /// Outline width of the markers.
    pub line_width: f64,
    /// Marker radius in pixels.
    pub marker_size: u32,
    /// Estimator name. When missing, the estimator of the merged network is used.
    pub estimator: Option<String>,
}

/// A group of points drawn with one marker style.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotSeries {
    pub class: TargetClass,
    pub outline: RgbaColor,
    pub fill: RgbaColor,
    pub points: Vec<(f64, f64)>,
}

/// A backend-independent description of one dual regulon scatterplot.
#[derive(Clone, Debug, PartialEq)]
pub struct PairPlot {
    pub x_title: String,
    pub y_title: String,
    pub legend: String,
    pub line_width: f64,
    pub marker_size: u32,
    pub series: Vec<PlotSeries>,
}

/// One row of a `TargetReport`.
#[derive(Clone, Debug, PartialEq)]
pub struct TargetReportRow {
    pub gene: String,
    /// Annotation fields of the gene, `None` if the gene is not annotated.
    pub annotation: Option<Vec<String>>,
    /// Correlations with both regulators, rounded to three decimals.
    pub correlation: [f64; 2],
}

/// Per-target report returned by the pairwise plotter.
#[derive(Clone, Debug, PartialEq)]
pub struct TargetReport {
    annotation_columns: Vec<String>,
    regulator_names: [String; 2],
    rows: Vec<TargetReportRow>,
}

/// Round `value` to the given number of decimal places. Values rounding to zero
/// give positive zero.
pub(crate) fn round_to(value: f64, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    positive_zero((value * scale).round() / scale)
}

/// Replace `-0.0` with `0.0`, any other value is unchanged.
pub(crate) fn positive_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

/// Build a mapping from elements of the given slice to their respective indices.
///
/// **Warning:** Duplicates are not detected, they are just overwritten.
pub(crate) fn build_index_map(keys: &[String]) -> FxHashMap<String, usize> {
    keys.iter()
        .enumerate()
        .map(|(i, key)| (key.clone(), i))
        .collect()
}

/// Return the first element of `keys` which appears more than once.
pub(crate) fn find_duplicate(keys: &[String]) -> Option<&String> {
    let mut seen = fxhash::FxHashSet::default();
    keys.iter().find(|key| !seen.insert(key.as_str()))
}
