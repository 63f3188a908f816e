use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, InvalidInput},
    geometry::{constants::MAX_BEARING_PRECISION, point::GeoPoint},
};

/// `from` から `to` へ向かう大円の初期方位角（度）を返す。
///
/// 北を 0 度として時計回りに測り、結果は `0.0..360.0` に正規化される。
/// 同一点を与えた場合は `atan2(0, 0)` の規約により 0 を返す。
/// 値は丸めない。丸めが必要な場合は [`round_bearing`] を使う。
///
/// # Examples
/// ```
/// # use geo_metrics::{GeoPoint, bearing};
/// let origin = GeoPoint::new(0.0, 0.0).unwrap();
/// let east = GeoPoint::new(0.0, 90.0).unwrap();
/// assert!((bearing(origin, east) - 90.0).abs() < 1e-9);
/// ```
pub fn bearing(from: GeoPoint, to: GeoPoint) -> f64 {
    let phi1 = from.as_latitude().to_radians();
    let phi2 = to.as_latitude().to_radians();
    let delta_lambda = (to.as_longitude() - from.as_longitude()).to_radians();

    let y = delta_lambda.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * delta_lambda.cos();

    (y.atan2(x).to_degrees() + 360.0) % 360.0
}

/// 角度を `0.0..360.0` に収める。
fn normalize_degrees(degrees: f64) -> f64 {
    let normalized = degrees.rem_euclid(360.0);
    // 負の極小値は丸めで 360.0 になる
    if normalized >= 360.0 { 0.0 } else { normalized }
}

/// 方位角の逆方位（180 度反対向き）を返す。
///
/// # Examples
/// ```
/// # use geo_metrics::back_bearing;
/// assert_eq!(back_bearing(90.0), 270.0);
/// assert_eq!(back_bearing(270.0), 90.0);
/// ```
pub fn back_bearing(bearing: f64) -> f64 {
    normalize_degrees(bearing + 180.0)
}

/// 方位角を小数点以下 `decimals` 桁に丸める。
///
/// 丸めた結果が 360 になった場合は 0 に戻す。
///
/// # エラー
/// `decimals` が [`MAX_BEARING_PRECISION`] を超える場合に [`Error::InvalidInput`] を返す。
pub fn round_bearing(bearing: f64, decimals: u32) -> Result<f64, Error> {
    let exponent = i32::try_from(decimals)
        .ok()
        .filter(|_| decimals <= MAX_BEARING_PRECISION)
        .ok_or(InvalidInput::BearingPrecisionTooLarge {
            precision: decimals,
            max: MAX_BEARING_PRECISION,
        })?;
    let factor = 10f64.powi(exponent);
    Ok(((bearing * factor).round() / factor) % 360.0)
}

/// 方位角と逆方位の組。
///
/// JSON 上では `{"bearing": .., "backBearing": ..}` として表現される。
/// 読み込み時には方位角の範囲と逆方位との関係を検証する。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBearingPair", into = "RawBearingPair")]
pub struct BearingPair {
    bearing: f64,
    back_bearing: f64,
}

/// シリアライズ用の検証前の表現
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawBearingPair {
    bearing: f64,
    back_bearing: f64,
}

/// 逆方位の一致判定に使う許容誤差（度）
const BACK_BEARING_TOLERANCE: f64 = 1e-9;

impl TryFrom<RawBearingPair> for BearingPair {
    type Error = Error;

    fn try_from(raw: RawBearingPair) -> Result<Self, Self::Error> {
        if !raw.bearing.is_finite() || !raw.back_bearing.is_finite() {
            return Err(InvalidInput::NonFiniteBearing {
                bearing: raw.bearing,
                back_bearing: raw.back_bearing,
            }
            .into());
        }

        if !(0.0..360.0).contains(&raw.bearing) {
            return Err(InvalidInput::BearingOutOfRange {
                bearing: raw.bearing,
            }
            .into());
        }

        let diff = (back_bearing(raw.bearing) - raw.back_bearing).rem_euclid(360.0);
        if diff.min(360.0 - diff) > BACK_BEARING_TOLERANCE {
            return Err(InvalidInput::BackBearingMismatch {
                bearing: raw.bearing,
                back_bearing: raw.back_bearing,
            }
            .into());
        }

        Ok(Self::from_bearing(raw.bearing))
    }
}

impl From<BearingPair> for RawBearingPair {
    fn from(pair: BearingPair) -> Self {
        RawBearingPair {
            bearing: pair.bearing,
            back_bearing: pair.back_bearing,
        }
    }
}

impl BearingPair {
    /// 方位角を `0.0..360.0` に正規化し、逆方位を求めて組を作る。
    pub fn from_bearing(bearing: f64) -> Self {
        let bearing = normalize_degrees(bearing);
        Self {
            bearing,
            back_bearing: back_bearing(bearing),
        }
    }

    /// 2点間の方位角と逆方位を求める。
    pub fn between(from: GeoPoint, to: GeoPoint) -> Self {
        Self::from_bearing(bearing(from, to))
    }

    pub fn bearing(&self) -> f64 {
        self.bearing
    }

    pub fn back_bearing(&self) -> f64 {
        self.back_bearing
    }

    /// 方位角を丸め、丸めた値から逆方位を求め直した組を返す。
    ///
    /// # エラー
    /// `decimals` が [`MAX_BEARING_PRECISION`] を超える場合に [`Error::InvalidInput`] を返す。
    pub fn rounded(&self, decimals: u32) -> Result<Self, Error> {
        Ok(Self::from_bearing(round_bearing(self.bearing, decimals)?))
    }
}

/// 折れ線の1区間とその方位。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentBearing {
    start: GeoPoint,
    end: GeoPoint,
    pair: BearingPair,
}

impl SegmentBearing {
    pub fn new(start: GeoPoint, end: GeoPoint) -> Self {
        Self {
            start,
            end,
            pair: BearingPair::between(start, end),
        }
    }

    pub fn start(&self) -> GeoPoint {
        self.start
    }

    pub fn end(&self) -> GeoPoint {
        self.end
    }

    pub fn pair(&self) -> BearingPair {
        self.pair
    }

    /// 区間の中点（緯度経度の単純平均）。方位ラベルの表示位置に使う。
    pub fn midpoint(&self) -> GeoPoint {
        self.start.planar_midpoint(&self.end)
    }
}

/// 折れ線の隣り合う各2点について方位を求める。
///
/// `n` 点から `n - 1` 個の区間が得られる。2点未満の場合は空になる。
pub fn segment_bearings(points: &[GeoPoint]) -> Vec<SegmentBearing> {
    points
        .windows(2)
        .map(|w| SegmentBearing::new(w[0], w[1]))
        .collect()
}
