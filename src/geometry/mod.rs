//! 地図上で描かれた図形の方位角と面積を求めるための型やロジック。
//!
//! 角度は度、距離・半径はメートルで扱う。
//! 面積は [`area::AreaEstimate`] の説明にある表示用の単位で返す。

/// 計算で使用する定数。
pub mod constants;

/// 緯度経度で定義される `GeoPoint` 型。
pub mod point;

/// 方位角と逆方位。
pub mod bearing;

/// 多角形と円の面積。
pub mod area;

#[cfg(test)]
mod tests;
