use crate::{DualRegulonError, Estimator};
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const ALL_ESTIMATORS: [Estimator; 3] = [Estimator::Pearson, Estimator::Spearman, Estimator::Kendall];

impl Estimator {
    pub fn name(&self) -> &'static str {
        match self {
            Estimator::Pearson => "pearson",
            Estimator::Spearman => "spearman",
            Estimator::Kendall => "kendall",
        }
    }

    /// Correlation of two equally long samples using this estimator.
    ///
    /// Returns `None` when the correlation is undefined: mismatched or too short
    /// inputs, or a sample with zero variance.
    pub fn correlate(&self, x: &[f64], y: &[f64]) -> Option<f64> {
        match self {
            Estimator::Pearson => pearson(x, y),
            Estimator::Spearman => spearman(x, y),
            Estimator::Kendall => kendall(x, y),
        }
    }
}

/// Estimator names are matched case-insensitively and any unique prefix is accepted.
impl FromStr for Estimator {
    type Err = DualRegulonError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let query = value.trim().to_lowercase();
        if query.is_empty() {
            return Err(DualRegulonError::UnknownEstimator(value.to_string()));
        }
        let mut matching = ALL_ESTIMATORS
            .iter()
            .filter(|it| it.name().starts_with(query.as_str()));
        match (matching.next(), matching.next()) {
            (Some(estimator), None) => Ok(*estimator),
            _ => Err(DualRegulonError::UnknownEstimator(value.to_string())),
        }
    }
}

impl Display for Estimator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn pearson(x: &[f64], y: &[f64]) -> Option<f64> {
    if x.len() != y.len() || x.len() < 2 {
        return None;
    }

    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let (mut num, mut denom_x, mut denom_y) = (0.0, 0.0, 0.0);
    for (&xx, &yy) in x.iter().zip(y.iter()) {
        let dx = xx - mean_x;
        let dy = yy - mean_y;
        num += dx * dy;
        denom_x += dx * dx;
        denom_y += dy * dy;
    }

    let denom = denom_x.sqrt() * denom_y.sqrt();
    if denom == 0.0 || !denom.is_finite() {
        return None;
    }
    Some((num / denom).clamp(-1.0, 1.0))
}

fn spearman(x: &[f64], y: &[f64]) -> Option<f64> {
    if x.len() != y.len() || x.len() < 2 {
        return None;
    }
    pearson(&rank_data(x), &rank_data(y))
}

/// Kendall's tau-b, which corrects for ties in either sample.
fn kendall(x: &[f64], y: &[f64]) -> Option<f64> {
    if x.len() != y.len() || x.len() < 2 {
        return None;
    }

    // Pairs not tied in x (resp. y) form the two halves of the tau-b denominator.
    let (mut concordant, mut discordant) = (0i64, 0i64);
    let (mut untied_x, mut untied_y) = (0i64, 0i64);
    for i in 0..x.len() {
        for j in (i + 1)..x.len() {
            let dx = sign(x[i] - x[j]);
            let dy = sign(y[i] - y[j]);
            if dx != 0 {
                untied_x += 1;
            }
            if dy != 0 {
                untied_y += 1;
            }
            match dx * dy {
                1 => concordant += 1,
                -1 => discordant += 1,
                _ => (),
            }
        }
    }

    if untied_x == 0 || untied_y == 0 {
        return None;
    }
    let denom = ((untied_x as f64) * (untied_y as f64)).sqrt();
    Some((concordant - discordant) as f64 / denom)
}

fn sign(value: f64) -> i64 {
    if value > 0.0 {
        1
    } else if value < 0.0 {
        -1
    } else {
        0
    }
}

/// **(internal)** Ranks starting at one, tied values share their average rank.
fn rank_data(values: &[f64]) -> Vec<f64> {
    let mut indexed: Vec<(usize, f64)> = values.iter().cloned().enumerate().collect();
    indexed.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));

    let mut ranks = vec![0.0; values.len()];
    let mut i = 0;
    while i < indexed.len() {
        let mut j = i + 1;
        while j < indexed.len() && indexed[j].1 == indexed[i].1 {
            j += 1;
        }
        let average_rank = ((i + 1) as f64 + j as f64) / 2.0;
        for item in &indexed[i..j] {
            ranks[item.0] = average_rank;
        }
        i = j;
    }

    ranks
}
