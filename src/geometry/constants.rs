/// WGS-84 楕円体の長半径（メートル）
///
/// 面積計算では地球をこの半径の球として扱う。
pub const WGS84_A: f64 = 6_378_137.0;

/// 面積の表示値を得るための除数
///
/// 地図画面が `平方メートル / 1000` を「km²」として表示してきた値との互換のために残している。
/// 正しい km² への換算（1,000,000）ではない。
pub const LEGACY_AREA_DIVISOR: f64 = 1000.0;

/// 多角形の面積計算に必要な最小頂点数
pub const MIN_POLYGON_POINTS: usize = 3;

/// 地図画面が方位角を丸めてきた小数点以下の桁数
pub const DEFAULT_BEARING_PRECISION: u32 = 4;

/// 方位角を丸める桁数の上限
///
/// これを超えると `10^桁数` との積で f64 の精度が失われる。
pub const MAX_BEARING_PRECISION: u32 = 15;
