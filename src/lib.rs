/// 発生し得るすべてのエラーを`enum` 型として定義・集約。
mod error;

/// 緯度経度、方位角、面積の計算。
mod geometry;

/// 設定を保持する計算の窓口。
mod metrics;

/// 描画ツールの図形と保存用の描画データ。
mod drawing;

pub use error::{Error, InvalidInput};
pub use geometry::{
    area::{AreaEstimate, circle_area, polygon_area},
    bearing::{BearingPair, SegmentBearing, back_bearing, bearing, round_bearing, segment_bearings},
    constants::{
        DEFAULT_BEARING_PRECISION, LEGACY_AREA_DIVISOR, MAX_BEARING_PRECISION, MIN_POLYGON_POINTS,
        WGS84_A,
    },
    point::GeoPoint,
};
pub use metrics::{GeoMetrics, config::MetricsConfig};
pub use drawing::{DrawingPayload, Shape, ShapeKind};
