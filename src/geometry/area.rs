use std::{f64::consts::PI, fmt};

use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, InvalidInput},
    geometry::{
        constants::{LEGACY_AREA_DIVISOR, MIN_POLYGON_POINTS, WGS84_A},
        point::GeoPoint,
    },
};

/// 面積の推定値。
///
/// 保持する値は `平方メートル / 1000` で、地図画面がこれまで「km²」として表示してきた値と一致する。
/// 実際の km² が必要な場合は [`AreaEstimate::square_kilometers`] を使う。
///
/// 値は常に有限かつ 0 以上で、JSON から読み込む際も検証される。
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct AreaEstimate(f64);

impl AreaEstimate {
    /// 表示用の値（平方メートル / 1000）から推定値を作る。
    ///
    /// # エラー
    /// 値が負、または有限でない場合に [`Error::InvalidInput`] を返す。
    pub fn new(value: f64) -> Result<Self, Error> {
        if !value.is_finite() || value < 0.0 {
            return Err(InvalidInput::InvalidArea { value }.into());
        }
        Ok(Self(value))
    }

    /// 平方メートルから推定値を作る。呼び出し側が有限かつ 0 以上を保証する。
    pub(crate) fn from_square_meters(square_meters: f64) -> Self {
        Self(square_meters / LEGACY_AREA_DIVISOR)
    }

    /// 表示用の値（平方メートル / 1000）を返す。
    pub fn value(&self) -> f64 {
        self.0
    }

    /// 実際の面積を平方メートルで返す。
    pub fn square_meters(&self) -> f64 {
        self.0 * LEGACY_AREA_DIVISOR
    }

    /// 実際の面積を平方キロメートルで返す。表示用の値とは 1000 倍異なる。
    pub fn square_kilometers(&self) -> f64 {
        self.square_meters() / 1_000_000.0
    }
}

impl TryFrom<f64> for AreaEstimate {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        AreaEstimate::new(value)
    }
}

impl From<AreaEstimate> for f64 {
    fn from(area: AreaEstimate) -> Self {
        area.0
    }
}

impl fmt::Display for AreaEstimate {
    /// 地図画面のポップアップと同じく小数点以下2桁で表示する。
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} km²", self.0)
    }
}

/// 多角形の面積を球面近似で求める。
///
/// 頂点は順に結ばれ、最後の頂点から最初の頂点へ自動的に閉じる。
/// 始点を末尾に重ねて渡しても結果は変わらない。
///
/// 隣り合う頂点の経度差は `(-180.0, 180.0]` に折り返して扱うため、
/// 経度 ±180 度をまたぐ多角形も短い側の辺で結ばれる。
/// 経度差が 180 度を超える辺を意図した多角形は表現できない。
///
/// # エラー
/// 頂点が3点未満の場合に [`Error::InvalidInput`] を返す。
///
/// # Examples
/// ```
/// # use geo_metrics::{GeoPoint, polygon_area};
/// let d = 0.008983152841195214;
/// let square = [
///     GeoPoint::new(0.0, 0.0).unwrap(),
///     GeoPoint::new(0.0, d).unwrap(),
///     GeoPoint::new(d, d).unwrap(),
///     GeoPoint::new(d, 0.0).unwrap(),
/// ];
/// let area = polygon_area(&square).unwrap();
/// assert!((area.square_kilometers() - 1.0).abs() < 0.01);
/// ```
pub fn polygon_area(points: &[GeoPoint]) -> Result<AreaEstimate, Error> {
    polygon_area_on_sphere(points, WGS84_A, MIN_POLYGON_POINTS)
}

/// 半径 `radius`（メートル）の球の上で多角形の面積を求める。
pub(crate) fn polygon_area_on_sphere(
    points: &[GeoPoint],
    radius: f64,
    min_points: usize,
) -> Result<AreaEstimate, Error> {
    let required = min_points.max(MIN_POLYGON_POINTS);
    if points.len() < required {
        return Err(InvalidInput::TooFewPoints {
            count: points.len(),
            required,
        }
        .into());
    }

    let n = points.len();
    let mut sum = 0.0;
    for i in 0..n {
        let p1 = points[i];
        let p2 = points[(i + 1) % n];

        let lat1 = p1.as_latitude().to_radians();
        let lat2 = p2.as_latitude().to_radians();
        let dlon = wrap_longitude_delta(p2.as_longitude() - p1.as_longitude()).to_radians();

        sum += dlon * (2.0 + lat1.sin() + lat2.sin());
    }

    let square_meters = (sum * radius * radius / 2.0).abs();
    Ok(AreaEstimate::from_square_meters(square_meters))
}

/// 経度差（度）を `(-180.0, 180.0]` に折り返す。
fn wrap_longitude_delta(delta: f64) -> f64 {
    if delta > 180.0 {
        delta - 360.0
    } else if delta <= -180.0 {
        delta + 360.0
    } else {
        delta
    }
}

/// 円の半径（メートル）が有限かつ 0 以上であることを確認する。
pub(crate) fn check_radius(radius: f64) -> Result<(), Error> {
    if !radius.is_finite() {
        return Err(InvalidInput::NonFiniteRadius { radius }.into());
    }
    if radius < 0.0 {
        return Err(InvalidInput::NegativeRadius { radius }.into());
    }
    Ok(())
}

/// 半径 `radius`（メートル）の円の面積を求める。
///
/// 平面上の `π r²` をそのまま使う。
///
/// # エラー
/// 半径が負、または有限でない場合に [`Error::InvalidInput`] を返す。
///
/// # Examples
/// ```
/// # use geo_metrics::circle_area;
/// let area = circle_area(1000.0).unwrap();
/// assert!((area.value() - 3141.59).abs() < 0.01);
/// assert!(circle_area(-1.0).is_err());
/// ```
pub fn circle_area(radius: f64) -> Result<AreaEstimate, Error> {
    check_radius(radius)?;

    Ok(AreaEstimate::from_square_meters(PI * radius * radius))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_two_decimals() {
        let area = AreaEstimate::from_square_meters(3_141_592.653589793);
        assert_eq!(area.to_string(), "3141.59 km²");
    }

    #[test]
    fn unit_conversions() {
        let area = AreaEstimate::from_square_meters(2_000_000.0);
        assert_eq!(area.value(), 2000.0);
        assert_eq!(area.square_meters(), 2_000_000.0);
        assert_eq!(area.square_kilometers(), 2.0);
    }

    #[test]
    fn serializes_as_plain_number() {
        let json = serde_json::to_string(&AreaEstimate::from_square_meters(1500.0)).unwrap();
        assert_eq!(json, "1.5");
    }

    #[test]
    fn new_rejects_negative_and_non_finite() {
        assert_eq!(AreaEstimate::new(12.5).unwrap().value(), 12.5);
        assert_eq!(AreaEstimate::new(0.0).unwrap().value(), 0.0);

        for value in [-42.0, f64::NAN, f64::INFINITY] {
            let err = AreaEstimate::new(value).unwrap_err();
            assert!(matches!(
                err,
                Error::InvalidInput(InvalidInput::InvalidArea { .. })
            ));
        }
    }

    #[test]
    fn deserialize_rejects_negative_area() {
        assert!(serde_json::from_str::<AreaEstimate>("-42.0").is_err());
        assert_eq!(
            serde_json::from_str::<AreaEstimate>("3.5").unwrap().value(),
            3.5
        );
    }

    #[test]
    fn wrap_longitude_delta_folds_into_half_open_range() {
        assert_eq!(wrap_longitude_delta(10.0), 10.0);
        assert_eq!(wrap_longitude_delta(180.0), 180.0);
        assert_eq!(wrap_longitude_delta(-180.0), 180.0);
        assert_eq!(wrap_longitude_delta(350.0), -10.0);
        assert_eq!(wrap_longitude_delta(-350.0), 10.0);
    }

    #[test]
    fn check_radius_reasons() {
        assert!(check_radius(0.0).is_ok());
        assert_eq!(
            check_radius(-7.0),
            Err(Error::InvalidInput(InvalidInput::NegativeRadius { radius: -7.0 }))
        );
    }

    #[test]
    fn circle_rejects_non_finite() {
        assert!(circle_area(f64::NAN).unwrap_err().is_invalid_input());
        assert!(circle_area(f64::INFINITY).is_err());
    }
}
