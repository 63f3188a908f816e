use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, InvalidInput},
    geometry::constants::{
        DEFAULT_BEARING_PRECISION, MAX_BEARING_PRECISION, MIN_POLYGON_POINTS, WGS84_A,
    },
};

/// [`GeoMetrics`](crate::GeoMetrics) の設定。
///
/// JSON では `camelCase` のキーを使い、省略した項目は既定値になる。
///
/// ```
/// # use geo_metrics::MetricsConfig;
/// let config = MetricsConfig::from_json(r#"{ "bearingPrecision": 2 }"#).unwrap();
/// assert_eq!(config.bearing_precision(), Some(2));
/// assert_eq!(config.earth_radius(), 6_378_137.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MetricsConfig {
    earth_radius: f64,
    bearing_precision: Option<u32>,
    min_polygon_points: usize,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            earth_radius: WGS84_A,
            bearing_precision: Some(DEFAULT_BEARING_PRECISION),
            min_polygon_points: MIN_POLYGON_POINTS,
        }
    }
}

impl MetricsConfig {
    /// JSON 文字列から設定を読み込み、検証する。
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let config: MetricsConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// 面積計算に使う球の半径（メートル）
    pub fn earth_radius(&self) -> f64 {
        self.earth_radius
    }

    /// 描画データに書き込む方位角の小数点以下の桁数。`None` なら丸めない。
    ///
    /// [`MAX_BEARING_PRECISION`] を超える値は [`MetricsConfig::validate`] で拒否される。
    pub fn bearing_precision(&self) -> Option<u32> {
        self.bearing_precision
    }

    /// 多角形に要求する最小頂点数。3 未満を指定しても 3 として扱う。
    pub fn min_polygon_points(&self) -> usize {
        self.min_polygon_points.max(MIN_POLYGON_POINTS)
    }

    pub fn with_earth_radius(mut self, radius: f64) -> Self {
        self.earth_radius = radius;
        self
    }

    pub fn with_bearing_precision(mut self, precision: Option<u32>) -> Self {
        self.bearing_precision = precision;
        self
    }

    pub fn with_min_polygon_points(mut self, min_points: usize) -> Self {
        self.min_polygon_points = min_points;
        self
    }

    /// 設定値が計算に使えるかを確認する。
    pub fn validate(&self) -> Result<(), Error> {
        if !self.earth_radius.is_finite() || self.earth_radius <= 0.0 {
            return Err(InvalidInput::InvalidEarthRadius {
                radius: self.earth_radius,
            }
            .into());
        }
        if let Some(precision) = self
            .bearing_precision
            .filter(|precision| *precision > MAX_BEARING_PRECISION)
        {
            return Err(InvalidInput::BearingPrecisionTooLarge {
                precision,
                max: MAX_BEARING_PRECISION,
            }
            .into());
        }
        Ok(())
    }
}
