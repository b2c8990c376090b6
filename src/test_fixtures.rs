//! **(test)** Small networks shared by the unit tests.
//!
//! Two regulators `TF1` (id `ENSG1`) and `TF2` (id `ENSG2`) over seven genes:
//!
//! | gene | TF1 | TF2 |
//! |------|-----|-----|
//! | G1   |  +  |  -  |
//! | G2   |  -  |  +  |
//! | G3   |  +  |     |
//! | G4   |     |  -  |
//!
//! `G5` and both regulators have no edges. `G4` is not annotated.

use crate::render::PlotSurface;
use crate::{
    DualRegulonError, DualRegulonRecord, DualRegulonTable, DualRegulons, Estimator,
    ExpressionMatrix, GeneAnnotation, IncidenceMatrix, NetworkParameters, NetworkResults,
    PairPlot, RegulatorMap, RegulatoryNetwork,
};
use std::path::PathBuf;

pub const GENES: [&str; 7] = ["ENSG1", "ENSG2", "G1", "G2", "G3", "G4", "G5"];

pub fn expression_values() -> Vec<Vec<f64>> {
    vec![
        vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
        vec![6.0, 4.0, 5.0, 3.0, 2.0, 1.0],
        vec![1.5, 2.1, 2.9, 4.2, 5.1, 5.8],
        vec![5.0, 6.0, 4.0, 3.0, 1.0, 2.0],
        vec![2.0, 1.0, 4.0, 3.0, 6.0, 5.0],
        vec![3.0, 3.0, 1.0, 6.0, 2.0, 5.0],
        vec![1.0, 1.0, 2.0, 2.0, 3.0, 3.0],
    ]
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|it| it.to_string()).collect()
}

pub fn build_expression() -> ExpressionMatrix {
    ExpressionMatrix::new(
        strings(&GENES),
        strings(&["s1", "s2", "s3", "s4", "s5", "s6"]),
        expression_values().into_iter().flatten().collect(),
    )
    .unwrap()
}

pub fn build_annotation() -> GeneAnnotation {
    let mut annotation = GeneAnnotation::new(strings(&["PROBEID", "SYMBOL"]));
    for (gene, symbol) in [
        ("ENSG1", "TF1"),
        ("ENSG2", "TF2"),
        ("G1", "GENE1"),
        ("G2", "GENE2"),
        ("G3", "GENE3"),
        ("G5", "GENE5"),
    ] {
        annotation
            .insert(gene, strings(&[gene, symbol]))
            .unwrap();
    }
    annotation
}

fn build_network(name: &str, id: &str, reference: Vec<f64>, dpi: Vec<f64>) -> RegulatoryNetwork {
    let regulators = RegulatorMap::new(vec![(name.to_string(), id.to_string())]).unwrap();
    let reference = IncidenceMatrix::new(strings(&GENES), vec![id.to_string()], reference).unwrap();
    let dpi = IncidenceMatrix::new(strings(&GENES), vec![id.to_string()], dpi).unwrap();
    RegulatoryNetwork::new(
        build_expression(),
        regulators,
        build_annotation(),
        NetworkParameters {
            estimator: Estimator::Pearson,
        },
    )
    .unwrap()
    .with_results(NetworkResults::new(reference, dpi).unwrap())
    .unwrap()
}

/// Network of `TF1`. The DPI filter removes the `G3` edge.
pub fn build_first_network() -> RegulatoryNetwork {
    build_network(
        "TF1",
        "ENSG1",
        vec![0.0, 0.0, 0.8, -0.6, 0.5, 0.0, 0.0],
        vec![0.0, 0.0, 0.8, -0.6, 0.0, 0.0, 0.0],
    )
}

/// Network of `TF2`.
pub fn build_second_network() -> RegulatoryNetwork {
    build_network(
        "TF2",
        "ENSG2",
        vec![0.0, 0.0, -0.7, 0.5, 0.0, -0.2, 0.0],
        vec![0.0, 0.0, -0.7, 0.5, 0.0, -0.2, 0.0],
    )
}

pub fn build_record(label: &str, regulon1: &str, regulon2: &str, r: f64) -> DualRegulonRecord {
    DualRegulonRecord {
        label: label.to_string(),
        regulon1: regulon1.to_string(),
        regulon2: regulon2.to_string(),
        r,
        overlap: None,
        p_value: None,
        adjusted_p_value: None,
    }
}

/// Results table with the anti-correlated pair `TF1.vs.TF2` and the co-correlated
/// pair `TF2.vs.TF1` (the latter addresses both regulators by id).
pub fn build_results_table() -> DualRegulonTable {
    DualRegulonTable::new(vec![
        DualRegulonRecord {
            overlap: Some(2),
            p_value: Some(0.001),
            adjusted_p_value: Some(0.004),
            ..build_record("TF1.vs.TF2", "TF1", "TF2", -0.4213)
        },
        build_record("TF2.vs.TF1", "ENSG2", "ENSG1", 0.3051),
    ])
    .unwrap()
}

pub fn build_dual_regulons() -> DualRegulons {
    DualRegulons::new(
        build_first_network(),
        build_second_network(),
        build_results_table(),
    )
    .unwrap()
}

/// A `PlotSurface` that records every call. Documents are named by their base path.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub events: Vec<String>,
    pub plots: Vec<PairPlot>,
    pub documents: Vec<PathBuf>,
    pub fail_draw: bool,
    pub opened: bool,
}

impl RecordingSurface {
    pub fn is_open(&self) -> bool {
        self.opened
    }
}

impl PlotSurface for RecordingSurface {
    fn open(&mut self, base: Option<&str>) -> Result<Option<PathBuf>, DualRegulonError> {
        if self.opened {
            return Err(DualRegulonError::Render("already open".to_string()));
        }
        self.opened = true;
        self.events.push(format!("open {}", base.unwrap_or("-")));
        let document = base.map(PathBuf::from);
        self.documents.extend(document.clone());
        Ok(document)
    }

    fn draw(&mut self, plot: &PairPlot) -> Result<(), DualRegulonError> {
        if self.fail_draw {
            return Err(DualRegulonError::Render("draw failed".to_string()));
        }
        self.events.push(format!("draw {}", plot.legend));
        self.plots.push(plot.clone());
        Ok(())
    }

    fn close(&mut self) -> Result<(), DualRegulonError> {
        self.opened = false;
        self.events.push("close".to_string());
        Ok(())
    }
}
