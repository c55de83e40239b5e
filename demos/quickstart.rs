use astrometry::leap_seconds::tt;
use astrometry::{
    apparent_equatorial, correct_for_conditions, equatorial_to_horizontal,
    greenwich_sidereal_time, horizon_dip, julian_date, local_sidereal_time, next_rise, next_set,
    EquatorialCoordinate, GeographicCoordinate, ObservingConditions, RiseSetEvent,
};
use chrono::{TimeZone, Utc};
use tracing_subscriber::EnvFilter;

fn describe(label: &str, event: &RiseSetEvent) {
    match event {
        RiseSetEvent::Event(e) => println!("{label}: {} (az {:.2}°)", e.datetime, e.az),
        RiseSetEvent::Circumpolar => println!("{label}: circumpolar"),
        RiseSetEvent::NeverVisible => println!("{label}: never visible"),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let dt = Utc.with_ymd_and_hms(2021, 5, 14, 0, 0, 0).unwrap();
    let mauna_kea = GeographicCoordinate::new(19.820_611, -155.468_094).with_elevation(4_205.0);
    let betelgeuse = EquatorialCoordinate::new(88.792_958_3, 7.407_063_9);

    println!("UTC:  {dt}");
    println!("TT:   {}", tt(&dt));
    println!("JD:   {}", julian_date(&dt));
    println!("GST:  {:.6} h", greenwich_sidereal_time(&dt));
    println!("LST:  {:.6} h", local_sidereal_time(&dt, mauna_kea.longitude));

    let apparent = apparent_equatorial(&dt, &mauna_kea, &betelgeuse);
    println!("apparent: ra {:.5}° dec {:.5}°", apparent.ra, apparent.dec);

    let conditions = ObservingConditions {
        horizon: -horizon_dip(&mauna_kea),
        ..ObservingConditions::default()
    };
    if let Some(horizontal) = equatorial_to_horizontal(&dt, &mauna_kea, &apparent) {
        let observed = correct_for_conditions(&horizontal, &conditions);
        println!("alt {:.5}° az {:.5}°", observed.alt, observed.az);
    }

    describe("next rise", &next_rise(&dt, &mauna_kea, &apparent, conditions.horizon)?);
    describe("next set", &next_set(&dt, &mauna_kea, &apparent, conditions.horizon)?);
    Ok(())
}
