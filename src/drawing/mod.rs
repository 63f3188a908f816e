//! 地図上で描かれた図形と、保存のために組み立てる描画データ。
//!
//! 描画データのキー名は保存先の API が受け取る形式
//! (`shapeName`, `latlng`, `bearAndbackBearing` など) に合わせている。

use serde::{Deserialize, Deserializer, Serialize};

use crate::{
    error::Error,
    geometry::{
        area::{AreaEstimate, check_radius},
        bearing::BearingPair,
        point::GeoPoint,
    },
};

/// 図形の種類。JSON では大文字で表現される。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ShapeKind {
    Polygon,
    Rectangle,
    Polyline,
    Circle,
}

/// 描画ツールで作られた図形。
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// 多角形。始点への閉じは暗黙。
    Polygon(Vec<GeoPoint>),
    /// 矩形。頂点は多角形と同じく順に並べる。
    Rectangle(Vec<GeoPoint>),
    /// 折れ線。
    Polyline(Vec<GeoPoint>),
    /// 中心と半径（メートル）で表される円。
    Circle { center: GeoPoint, radius: f64 },
}

impl Shape {
    /// 対角の2点から矩形を作る。
    ///
    /// 頂点は南西・北西・北東・南東の順に並ぶ。
    pub fn rectangle(corner: GeoPoint, opposite: GeoPoint) -> Result<Self, Error> {
        let south = corner.as_latitude().min(opposite.as_latitude());
        let north = corner.as_latitude().max(opposite.as_latitude());
        let west = corner.as_longitude().min(opposite.as_longitude());
        let east = corner.as_longitude().max(opposite.as_longitude());

        Ok(Shape::Rectangle(vec![
            GeoPoint::new(south, west)?,
            GeoPoint::new(north, west)?,
            GeoPoint::new(north, east)?,
            GeoPoint::new(south, east)?,
        ]))
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Polygon(_) => ShapeKind::Polygon,
            Shape::Rectangle(_) => ShapeKind::Rectangle,
            Shape::Polyline(_) => ShapeKind::Polyline,
            Shape::Circle { .. } => ShapeKind::Circle,
        }
    }

    /// 図形を構成する点。円の場合は中心のみ。
    pub fn points(&self) -> Vec<GeoPoint> {
        match self {
            Shape::Polygon(points) | Shape::Rectangle(points) | Shape::Polyline(points) => {
                points.clone()
            }
            Shape::Circle { center, .. } => vec![*center],
        }
    }
}

/// 保存のために組み立てる描画データ。
///
/// 面積は多角形・矩形・円、方位は折れ線、半径は円のときだけ値を持ち、
/// それ以外は `null` になる。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawingPayload {
    shape_name: ShapeKind,
    label: String,
    latlng: Vec<GeoPoint>,
    area: Option<AreaEstimate>,
    #[serde(rename = "bearAndbackBearing")]
    bear_and_back_bearing: Option<Vec<BearingPair>>,
    #[serde(default, deserialize_with = "deserialize_radius")]
    radius: Option<f64>,
}

/// 半径を読み込み、負または有限でない値を拒否する。
fn deserialize_radius<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let radius = Option::<f64>::deserialize(deserializer)?;
    if let Some(radius) = radius {
        check_radius(radius).map_err(serde::de::Error::custom)?;
    }
    Ok(radius)
}

impl DrawingPayload {
    pub(crate) fn with_area(
        shape_name: ShapeKind,
        label: String,
        latlng: Vec<GeoPoint>,
        area: AreaEstimate,
        radius: Option<f64>,
    ) -> Self {
        Self {
            shape_name,
            label,
            latlng,
            area: Some(area),
            bear_and_back_bearing: None,
            radius,
        }
    }

    pub(crate) fn with_bearings(
        label: String,
        latlng: Vec<GeoPoint>,
        bearings: Vec<BearingPair>,
    ) -> Self {
        Self {
            shape_name: ShapeKind::Polyline,
            label,
            latlng,
            area: None,
            bear_and_back_bearing: Some(bearings),
            radius: None,
        }
    }

    pub fn shape_name(&self) -> ShapeKind {
        self.shape_name
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// ラベル入力後に名前を付け直す。
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn latlng(&self) -> &[GeoPoint] {
        &self.latlng
    }

    pub fn area(&self) -> Option<AreaEstimate> {
        self.area
    }

    pub fn bearings(&self) -> Option<&[BearingPair]> {
        self.bear_and_back_bearing.as_deref()
    }

    pub fn radius(&self) -> Option<f64> {
        self.radius
    }

    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }
}
