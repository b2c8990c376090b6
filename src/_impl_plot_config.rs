use crate::{DualPlotConfig, DualRegulonError, HexColor, RgbaColor};
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

lazy_static! {
    /// Matches a `#RRGGBB` colour, the leading `#` is optional.
    static ref HEX_COLOR: Regex =
        Regex::new("^#?([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})$").unwrap();
}

impl HexColor {
    pub const WHITE: HexColor = HexColor {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Move this colour towards white by `fraction` (0 keeps the colour, 1 gives white).
    pub fn blend_to_white(&self, fraction: f64) -> HexColor {
        let fraction = fraction.clamp(0.0, 1.0);
        let blend = |channel: u8| {
            let channel = f64::from(channel);
            (channel + (255.0 - channel) * fraction).round() as u8
        };
        HexColor {
            r: blend(self.r),
            g: blend(self.g),
            b: blend(self.b),
        }
    }

    pub fn with_alpha(&self, alpha: f64) -> RgbaColor {
        RgbaColor {
            r: self.r,
            g: self.g,
            b: self.b,
            alpha: alpha.clamp(0.0, 1.0),
        }
    }
}

impl FromStr for HexColor {
    type Err = DualRegulonError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let captures = HEX_COLOR
            .captures(value.trim())
            .ok_or_else(|| DualRegulonError::InvalidColor(value.to_string()))?;
        let channel = |i: usize| {
            u8::from_str_radix(&captures[i], 16)
                .map_err(|_| DualRegulonError::InvalidColor(value.to_string()))
        };
        Ok(HexColor {
            r: channel(1)?,
            g: channel(2)?,
            b: channel(3)?,
        })
    }
}

impl TryFrom<String> for HexColor {
    type Error = DualRegulonError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HexColor> for String {
    fn from(value: HexColor) -> Self {
        value.to_string()
    }
}

impl Display for HexColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Default for DualPlotConfig {
    fn default() -> Self {
        DualPlotConfig {
            alpha: 0.8,
            colors: [
                HexColor {
                    r: 0xE7,
                    g: 0x29,
                    b: 0x8A,
                },
                HexColor {
                    r: 0x1F,
                    g: 0x78,
                    b: 0xB4,
                },
            ],
            line_width: 0.7,
            marker_size: 4,
            estimator: None,
        }
    }
}

/// Fraction by which base colours are lightened to obtain the marker fill.
const TINT: f64 = 0.5;

impl DualPlotConfig {
    /// Read a configuration from a TOML document. Missing keys keep their defaults.
    ///
    /// ```toml
    /// alpha = 0.6
    /// colors = ["#D95F02", "#1B9E77"]
    /// estimator = "kendall"
    /// ```
    pub fn from_toml_str(document: &str) -> Result<DualPlotConfig, DualRegulonError> {
        let config: DualPlotConfig = toml::from_str(document)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that opacity and line width are in range.
    pub fn validate(&self) -> Result<(), DualRegulonError> {
        if !(0.0..=1.0).contains(&self.alpha) {
            return Err(DualRegulonError::InvalidSetting(format!(
                "opacity {} is outside of [0, 1]",
                self.alpha
            )));
        }
        if !(self.line_width >= 0.0 && self.line_width.is_finite()) {
            return Err(DualRegulonError::InvalidSetting(format!(
                "invalid line width {}",
                self.line_width
            )));
        }
        Ok(())
    }

    /// Outline colour of the negative (`0`) or non-negative (`1`) branch.
    pub fn outline(&self, branch: usize) -> RgbaColor {
        self.colors[branch].with_alpha(1.0)
    }

    /// Tinted fill of the negative (`0`) or non-negative (`1`) branch.
    pub fn tint(&self, branch: usize) -> RgbaColor {
        self.colors[branch].blend_to_white(TINT).with_alpha(self.alpha)
    }

    /// The fill used for contrast markers.
    pub fn blank(&self) -> RgbaColor {
        HexColor::WHITE.with_alpha(1.0)
    }
}
