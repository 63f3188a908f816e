use crate::GeoPoint;

pub mod bearing;

/// 2つの方位角の差を 0..=180 の範囲で返す
/// テスト以外では使用しないため、ここに定義
pub fn angular_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);
    d.min(360.0 - d)
}

pub fn point(lat: f64, lon: f64) -> GeoPoint {
    GeoPoint::new(lat, lon).unwrap()
}

/// 赤道上の一辺約 `side_m` メートルの正方形（反時計回り）
pub fn equatorial_square(side_m: f64) -> Vec<GeoPoint> {
    let d = side_m / (crate::geometry::constants::WGS84_A * std::f64::consts::PI / 180.0);
    vec![
        point(0.0, 0.0),
        point(0.0, d),
        point(d, d),
        point(d, 0.0),
    ]
}
