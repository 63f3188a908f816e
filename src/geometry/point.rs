use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, InvalidInput};

#[cfg(test)]
use proptest::prelude::*;
#[cfg(any(test, feature = "random"))]
use rand::Rng;

/// 緯度経度（度）で表される地表上の点。
///
/// 生成時に値が有限かつ範囲内であることを検証するため、
/// 一度生成された [`GeoPoint`] を受け取る計算は失敗しない。
///
/// JSON 上では地図ウィジェットと同じ `{"lat": .., "lng": ..}` 形式で表現される。
#[derive(Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LatLng", into = "LatLng")]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

/// シリアライズ用の検証前の表現
#[derive(Serialize, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

impl TryFrom<LatLng> for GeoPoint {
    type Error = Error;

    fn try_from(raw: LatLng) -> Result<Self, Self::Error> {
        GeoPoint::new(raw.lat, raw.lng)
    }
}

impl From<GeoPoint> for LatLng {
    fn from(point: GeoPoint) -> Self {
        LatLng {
            lat: point.latitude,
            lng: point.longitude,
        }
    }
}

impl fmt::Debug for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeoPoint")
            .field("latitude", &self.latitude)
            .field("longitude", &self.longitude)
            .finish()
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

impl GeoPoint {
    /// 緯度経度から [`GeoPoint`] を生成する。
    ///
    /// # 引数
    /// * `latitude` - 緯度（度）-90.0..=90.0
    /// * `longitude` - 経度（度）-180.0..=180.0
    ///
    /// # エラー
    /// 値が有限でない場合、または範囲外の場合に [`Error::InvalidInput`] を返す。
    ///
    /// # Examples
    /// ```
    /// # use geo_metrics::GeoPoint;
    /// let tokyo = GeoPoint::new(35.681, 139.767).unwrap();
    /// assert_eq!(tokyo.as_latitude(), 35.681);
    ///
    /// assert!(GeoPoint::new(91.0, 0.0).is_err());
    /// assert!(GeoPoint::new(0.0, f64::NAN).is_err());
    /// ```
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, Error> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(InvalidInput::NonFiniteCoordinate {
                latitude,
                longitude,
            }
            .into());
        }

        if !(-90.0..=90.0).contains(&latitude) {
            return Err(InvalidInput::LatitudeOutOfRange { latitude }.into());
        }

        if !(-180.0..=180.0).contains(&longitude) {
            return Err(InvalidInput::LongitudeOutOfRange { longitude }.into());
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// 緯度（度）を返す。
    pub fn as_latitude(&self) -> f64 {
        self.latitude
    }

    /// 経度（度）を返す。
    pub fn as_longitude(&self) -> f64 {
        self.longitude
    }

    /// 2点の単純平均（緯度経度平面上の中点）を返す。
    ///
    /// 大円上の中点ではない。地図上でラベルを置く位置の目安として使う。
    ///
    /// 経度は折り返さずに平均するため、経度 ±180 度をまたぐ2点
    /// （例: 経度 170 と -170）の中点は経度 0 付近、つまり地球の反対側になる。
    /// 地図画面が区間ラベルを置いてきた位置と同じ結果を返す。
    pub fn planar_midpoint(&self, other: &GeoPoint) -> GeoPoint {
        // 範囲内の2値の平均は範囲内に収まる
        GeoPoint {
            latitude: (self.latitude + other.latitude) / 2.0,
            longitude: (self.longitude + other.longitude) / 2.0,
        }
    }

    /// ランダムな [`GeoPoint`] を生成する。
    #[cfg(any(test, feature = "random"))]
    pub fn random() -> Self {
        let mut rng = rand::rng();
        Self::random_using(&mut rng)
    }

    /// 外部の乱数生成器を使用してランダムな [`GeoPoint`] を生成する。
    #[cfg(any(test, feature = "random"))]
    pub fn random_using<R: Rng>(rng: &mut R) -> Self {
        Self {
            latitude: rng.random_range(-90.0..=90.0),
            longitude: rng.random_range(-180.0..=180.0),
        }
    }

    /// 指定した点の周辺 `spread` 度以内でランダムな [`GeoPoint`] を生成する。
    ///
    /// 範囲外にはみ出す場合は境界に丸める。
    #[cfg(any(test, feature = "random"))]
    pub fn random_near_using<R: Rng>(rng: &mut R, origin: GeoPoint, spread: f64) -> Self {
        let spread = spread.abs();
        let dlat = rng.random_range(-spread..=spread);
        let dlon = rng.random_range(-spread..=spread);
        Self {
            latitude: (origin.latitude + dlat).clamp(-90.0, 90.0),
            longitude: (origin.longitude + dlon).clamp(-180.0, 180.0),
        }
    }

    #[cfg(test)]
    pub fn arb() -> impl Strategy<Value = Self> {
        Self::arb_within(-90.0..=90.0, -180.0..=180.0)
    }

    #[cfg(test)]
    pub fn arb_within(
        latitude: std::ops::RangeInclusive<f64>,
        longitude: std::ops::RangeInclusive<f64>,
    ) -> impl Strategy<Value = Self> {
        (latitude, longitude).prop_map(|(latitude, longitude)| Self {
            latitude,
            longitude,
        })
    }
}

impl TryFrom<(f64, f64)> for GeoPoint {
    type Error = Error;

    /// `(緯度, 経度)` の組から生成する。
    fn try_from((latitude, longitude): (f64, f64)) -> Result<Self, Self::Error> {
        GeoPoint::new(latitude, longitude)
    }
}

impl From<GeoPoint> for (f64, f64) {
    fn from(point: GeoPoint) -> Self {
        (point.latitude, point.longitude)
    }
}
