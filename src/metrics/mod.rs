//! 設定を保持して方位角・面積の計算と描画データの組み立てを行う窓口。

use tracing::{debug, warn};

use crate::{
    drawing::{DrawingPayload, Shape, ShapeKind},
    error::Error,
    geometry::{
        area::{AreaEstimate, circle_area, polygon_area_on_sphere},
        bearing::{BearingPair, SegmentBearing, back_bearing, bearing, segment_bearings},
        point::GeoPoint,
    },
};

pub mod config;

use config::MetricsConfig;

/// 方位角と面積の計算を行う。
///
/// 状態を持たない計算の集まりで、保持するのは [`MetricsConfig`] のみ。
///
/// ```
/// # use geo_metrics::{GeoMetrics, GeoPoint};
/// let metrics = GeoMetrics::default();
/// let from = GeoPoint::new(0.0, 0.0).unwrap();
/// let to = GeoPoint::new(0.0, 90.0).unwrap();
///
/// let b = metrics.compute_bearing(from, to);
/// assert!((b - 90.0).abs() < 1e-9);
/// assert!((metrics.compute_back_bearing(b) - 270.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GeoMetrics {
    config: MetricsConfig,
}

impl GeoMetrics {
    /// 設定を検証して生成する。
    pub fn new(config: MetricsConfig) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &MetricsConfig {
        &self.config
    }

    /// 大円の初期方位角（度、`0.0..360.0`、丸めなし）
    pub fn compute_bearing(&self, from: GeoPoint, to: GeoPoint) -> f64 {
        let result = bearing(from, to);
        debug!(%from, %to, bearing = result, "computed bearing");
        result
    }

    pub fn compute_back_bearing(&self, bearing: f64) -> f64 {
        back_bearing(bearing)
    }

    pub fn compute_bearing_pair(&self, from: GeoPoint, to: GeoPoint) -> BearingPair {
        BearingPair::from_bearing(self.compute_bearing(from, to))
    }

    /// 折れ線の各区間の方位（丸めなし）
    pub fn compute_segment_bearings(&self, points: &[GeoPoint]) -> Vec<SegmentBearing> {
        let legs = segment_bearings(points);
        debug!(points = points.len(), segments = legs.len(), "computed segment bearings");
        legs
    }

    /// 多角形の面積
    ///
    /// # エラー
    /// 頂点数が設定の最小頂点数に満たない場合に [`Error::InvalidInput`] を返す。
    pub fn compute_polygon_area(&self, points: &[GeoPoint]) -> Result<AreaEstimate, Error> {
        let result = polygon_area_on_sphere(
            points,
            self.config.earth_radius(),
            self.config.min_polygon_points(),
        );
        match &result {
            Ok(area) => debug!(points = points.len(), area = area.value(), "computed polygon area"),
            Err(err) => warn!(points = points.len(), %err, "rejected polygon"),
        }
        result
    }

    /// 円の面積
    ///
    /// # エラー
    /// 半径が負、または有限でない場合に [`Error::InvalidInput`] を返す。
    pub fn compute_circle_area(&self, radius: f64) -> Result<AreaEstimate, Error> {
        let result = circle_area(radius);
        match &result {
            Ok(area) => debug!(radius, area = area.value(), "computed circle area"),
            Err(err) => warn!(radius, %err, "rejected circle"),
        }
        result
    }

    /// 図形から保存用の描画データを組み立てる。
    ///
    /// 折れ線の方位は設定の桁数で丸めてから逆方位を求める。
    pub fn drawing(&self, shape: &Shape, label: impl Into<String>) -> Result<DrawingPayload, Error> {
        let label = label.into();
        let payload = match shape {
            Shape::Polygon(points) | Shape::Rectangle(points) => {
                let area = self.compute_polygon_area(points)?;
                DrawingPayload::with_area(shape.kind(), label, points.clone(), area, None)
            }
            Shape::Polyline(points) => {
                let bearings = self
                    .compute_segment_bearings(points)
                    .iter()
                    .map(|leg| match self.config.bearing_precision() {
                        Some(decimals) => leg.pair().rounded(decimals),
                        None => Ok(leg.pair()),
                    })
                    .collect::<Result<Vec<_>, Error>>()?;
                DrawingPayload::with_bearings(label, points.clone(), bearings)
            }
            Shape::Circle { center, radius } => {
                let area = self.compute_circle_area(*radius)?;
                DrawingPayload::with_area(
                    ShapeKind::Circle,
                    label,
                    vec![*center],
                    area,
                    Some(*radius),
                )
            }
        };
        debug!(shape = ?payload.shape_name(), label = payload.label(), "assembled drawing");
        Ok(payload)
    }
}
