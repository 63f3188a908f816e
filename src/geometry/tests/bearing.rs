#[cfg(test)]
mod tests {
    use crate::{
        GeoPoint, back_bearing, bearing,
        geometry::tests::{angular_distance, point},
    };
    use proptest::prelude::{ProptestConfig, prop_assert, prop_assume, proptest};

    ///赤道上を東へ進むケース
    #[test]
    fn due_east_along_equator() {
        let b = bearing(point(0.0, 0.0), point(0.0, 90.0));
        assert!((b - 90.0).abs() < 1e-9);
    }

    #[test]
    fn cardinal_directions() {
        let origin = point(0.0, 0.0);
        assert!(bearing(origin, point(10.0, 0.0)).abs() < 1e-9);
        assert!((bearing(origin, point(-10.0, 0.0)) - 180.0).abs() < 1e-9);
        assert!((bearing(origin, point(0.0, -10.0)) - 270.0).abs() < 1e-9);
    }

    ///ロンドンからパリ
    #[test]
    fn london_to_paris() {
        let london = point(51.5, -0.1);
        let paris = point(48.85, 2.35);

        let b = bearing(london, paris);
        assert!((b - 148.4226).abs() < 1e-3, "bearing was {b}");
        assert!((back_bearing(b) - 328.4226).abs() < 1e-3);

        //逆向きは子午線収差の分だけ180度からずれる
        let reverse = bearing(paris, london);
        assert!((reverse - 330.3049).abs() < 1e-3, "reverse was {reverse}");
    }

    #[test]
    fn identical_points_give_zero() {
        for p in [
            point(0.0, 0.0),
            point(51.5, -0.1),
            point(-33.9, 151.2),
            point(90.0, 0.0),
            point(-90.0, 180.0),
        ] {
            assert_eq!(bearing(p, p), 0.0);
        }
    }

    #[test]
    fn back_bearing_examples() {
        assert_eq!(back_bearing(0.0), 180.0);
        assert_eq!(back_bearing(180.0), 0.0);
        assert_eq!(back_bearing(359.0), 179.0);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn bearing_to_self_is_zero(p in GeoPoint::arb()) {
            prop_assert!(bearing(p, p) == 0.0);
        }

        #[test]
        fn bearing_is_normalized(a in GeoPoint::arb(), b in GeoPoint::arb()) {
            let result = bearing(a, b);
            prop_assert!((0.0..360.0).contains(&result), "bearing {} out of range", result);
        }

        #[test]
        fn back_bearing_is_involution(b in 0.0f64..360.0) {
            let back = back_bearing(b);
            prop_assert!((0.0..360.0).contains(&back));
            prop_assert!(angular_distance(back_bearing(back), b) < 1e-9);
        }

        #[test]
        fn reciprocal_along_equator(lon1 in -90.0f64..=90.0, lon2 in -90.0f64..=90.0) {
            prop_assume!((lon1 - lon2).abs() > 1e-6);
            let a = point(0.0, lon1);
            let b = point(0.0, lon2);
            let diff = angular_distance(bearing(a, b), bearing(b, a));
            prop_assert!((diff - 180.0).abs() < 1e-9, "diff was {}", diff);
        }

        #[test]
        fn reciprocal_along_meridian(
            lat1 in -80.0f64..=80.0,
            lat2 in -80.0f64..=80.0,
            lon in -180.0f64..=180.0
        ) {
            prop_assume!((lat1 - lat2).abs() > 1e-6);
            let a = point(lat1, lon);
            let b = point(lat2, lon);
            let diff = angular_distance(bearing(a, b), bearing(b, a));
            prop_assert!((diff - 180.0).abs() < 1e-9, "diff was {}", diff);
        }

        ///短い区間では子午線収差が小さく、ほぼ180度反対になる
        #[test]
        fn reciprocal_for_short_segments(
            origin in GeoPoint::arb_within(-60.0..=60.0, -170.0..=170.0),
            dlat in -0.01f64..=0.01,
            dlon in -0.01f64..=0.01
        ) {
            prop_assume!(dlat.abs().max(dlon.abs()) > 1e-5);
            let other = point(origin.as_latitude() + dlat, origin.as_longitude() + dlon);
            let diff = angular_distance(bearing(origin, other), bearing(other, origin));
            prop_assert!((diff - 180.0).abs() < 0.02, "diff was {}", diff);
        }
    }
}
