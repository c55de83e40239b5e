use chrono::{DateTime, Duration, FixedOffset, TimeZone, Utc};
use proptest::prelude::*;
use qtty::Days;
use astrometry::leap_seconds::{gps, leap_second_correction, tai, tt, LeapSecondTable};
use astrometry::{
    apparent_equatorial, correct_for_refraction, equatorial_to_horizontal,
    greenwich_sidereal_time, horizontal_to_equatorial, is_circumpolar, is_visible, julian_date,
    modified_julian_date, next_rise, next_rise_with, next_set, next_visibility_window, to_utc,
    transit_above, EquatorialCoordinate, GeographicCoordinate, HorizontalCoordinate, JulianDate,
    RiseSetEvent, SearchError, SearchOptions, MJD,
};

fn reference_night() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2021, 5, 14, 0, 0, 0).unwrap()
}

fn mauna_kea() -> GeographicCoordinate {
    GeographicCoordinate::new(19.820_611, -155.468_094)
}

fn betelgeuse() -> EquatorialCoordinate {
    EquatorialCoordinate::new(88.792_958_3, 7.407_063_9)
}

#[test]
fn betelgeuse_from_mauna_kea() {
    let dt = reference_night();
    assert_eq!(julian_date(&dt).value(), 2_459_348.5);
    assert!((greenwich_sidereal_time(&dt) - 15.463_990).abs() < 1e-6);

    let horizontal = equatorial_to_horizontal(&dt, &mauna_kea(), &betelgeuse()).expect("defined");
    assert!((horizontal.alt - 72.785_394).abs() < 1e-5, "alt = {}", horizontal.alt);
    assert!((horizontal.az - 134.448_779).abs() < 1e-5, "az = {}", horizontal.az);
}

#[test]
fn same_instant_in_another_zone_gives_the_same_answers() {
    let hst = FixedOffset::west_opt(10 * 3600).unwrap();
    let local = reference_night().with_timezone(&hst);
    assert_eq!(julian_date(&local), julian_date(&reference_night()));
    assert_eq!(
        equatorial_to_horizontal(&local, &mauna_kea(), &betelgeuse()),
        equatorial_to_horizontal(&reference_night(), &mauna_kea(), &betelgeuse())
    );
}

#[test]
fn pole_observer_yields_no_horizontal_position() {
    let north_pole = GeographicCoordinate::new(90.0, 0.0);
    let horizontal = equatorial_to_horizontal(&reference_night(), &north_pole, &betelgeuse());
    assert!(horizontal.is_none());
    assert_eq!(
        horizontal.unwrap_or(HorizontalCoordinate::POLE_SENTINEL),
        HorizontalCoordinate::new(-1.0, -1.0)
    );
}

#[test]
fn apparent_place_then_horizontal_roundtrip() {
    let dt = reference_night();
    let apparent = apparent_equatorial(&dt, &mauna_kea(), &betelgeuse());
    let horizontal = equatorial_to_horizontal(&dt, &mauna_kea(), &apparent).expect("defined");
    let back = horizontal_to_equatorial(&dt, &mauna_kea(), &horizontal).expect("defined");
    assert!((back.ra - apparent.ra).abs() < 1e-6);
    assert!((back.dec - apparent.dec).abs() < 1e-6);
}

#[test]
fn refraction_lifts_only_visible_targets() {
    let up = HorizontalCoordinate::new(0.5, 80.0);
    let down = HorizontalCoordinate::new(-0.5, 80.0);
    assert!(correct_for_refraction(&up, 283.15, 101_325.0).alt > up.alt);
    assert_eq!(correct_for_refraction(&down, 283.15, 101_325.0), down);
}

#[test]
fn atomic_scales_in_2021() {
    let dt = reference_night();
    assert_eq!((tai(&dt) - dt).num_seconds(), 37);
    assert_eq!((tt(&dt) - dt).num_milliseconds(), 69_184);
    assert_eq!((gps(&dt) - dt).num_seconds(), 18);

    let gps_epoch = Utc.with_ymd_and_hms(1980, 1, 6, 0, 0, 0).unwrap();
    assert_eq!(leap_second_correction(&dt, &gps_epoch), 18);
    assert_eq!(leap_second_correction(&gps_epoch, &dt), 0);
}

#[test]
fn leap_second_table_snapshot() {
    let table = LeapSecondTable::iers();
    assert_eq!(table.len(), 28);
    assert!(table.records().windows(2).all(|w| w[0].unix < w[1].unix));
    let last = table.records().last().expect("non-empty");
    assert_eq!(last.when(), Some(Utc.with_ymd_and_hms(2017, 1, 1, 0, 0, 0).unwrap()));
    assert_eq!(last.dtai, 37);
}

#[test]
fn rise_then_set_from_mauna_kea() {
    let dt = reference_night();
    let rise = match next_rise(&dt, &mauna_kea(), &betelgeuse(), 0.0) {
        Ok(RiseSetEvent::Event(rise)) => rise,
        other => panic!("expected a rise, got {other:?}"),
    };
    let set = match next_set(&rise.datetime, &mauna_kea(), &betelgeuse(), 0.0) {
        Ok(RiseSetEvent::Event(set)) => set,
        other => panic!("expected a set, got {other:?}"),
    };
    assert!(rise.datetime >= dt);
    assert!(rise.datetime - dt < Duration::days(1));
    assert!(set.datetime > rise.datetime);

    let window = next_visibility_window(&dt, &mauna_kea(), &betelgeuse(), 0.0)
        .expect("search")
        .expect("window");
    assert_eq!(window.start, rise.datetime);
    assert_eq!(window.end, set.datetime);
}

#[test]
fn high_declination_target_rises_above_raised_horizon() {
    let madrid = GeographicCoordinate::new(40.0, -3.7);
    let target = EquatorialCoordinate::new(150.0, 52.0);
    let dt = reference_night();
    assert!(!is_circumpolar(&madrid, &target, 5.0));
    assert!(is_visible(&madrid, &target, 5.0));
    assert!(transit_above(&madrid, &target, 5.0).is_some());

    let rise = match next_rise(&dt, &madrid, &target, 5.0) {
        Ok(RiseSetEvent::Event(rise)) => rise,
        other => panic!("expected a rise, got {other:?}"),
    };
    let expected = Utc.with_ymd_and_hms(2021, 5, 14, 8, 34, 28).unwrap();
    assert!((rise.datetime - expected).num_seconds().abs() < 60, "{}", rise.datetime);
    assert!((rise.az - 16.42).abs() < 0.01, "az = {}", rise.az);

    let alt = equatorial_to_horizontal(&rise.datetime, &madrid, &target)
        .expect("defined")
        .alt;
    assert!((alt - 5.0).abs() < 0.01, "alt = {alt}");
}

#[test]
fn tiny_search_cap_reports_exhaustion() {
    let evening = Utc.with_ymd_and_hms(2021, 5, 14, 20, 0, 0).unwrap();
    let options = SearchOptions { max_iterations: 1 };
    assert_eq!(
        next_rise_with(&evening, &mauna_kea(), &betelgeuse(), 0.0, &options),
        Err(SearchError::Exhausted { iterations: 1 })
    );
}

proptest! {
    #[test]
    fn to_utc_is_idempotent(millis in -2_000_000_000_000i64..4_000_000_000_000i64) {
        let dt = DateTime::from_timestamp_millis(millis).unwrap();
        let offset = FixedOffset::east_opt(3 * 3600).unwrap();
        let local = dt.with_timezone(&offset);
        prop_assert_eq!(to_utc(&to_utc(&local)), to_utc(&local));
    }

    #[test]
    fn mjd_is_jd_minus_offset(millis in -2_000_000_000_000i64..4_000_000_000_000i64) {
        let dt = DateTime::from_timestamp_millis(millis).unwrap();
        let jd: JulianDate = julian_date(&dt);
        let mjd = modified_julian_date(&dt);
        prop_assert_eq!(mjd.quantity(), jd.quantity() - Days::new(2_400_000.5));
        prop_assert_eq!(mjd, jd.to::<MJD>());
    }
}

#[cfg(feature = "serde")]
#[test]
fn serde_roundtrip_of_an_observation() {
    let observer = mauna_kea().with_elevation(4_205.0);
    let json = serde_json::to_string(&observer).unwrap();
    let back: GeographicCoordinate = serde_json::from_str(&json).unwrap();
    assert_eq!(back, observer);

    let rise = next_rise(&reference_night(), &mauna_kea(), &betelgeuse(), 0.0).unwrap();
    let json = serde_json::to_string(&rise).unwrap();
    assert!(json.contains("Event"));
    let back: RiseSetEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(back, rise);
}
