/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use measures::{Angle, Area, Length, Measurement, Memory, Temperature, Time, Volume};

#[test]
fn length_km_to_inches() {
    let m = Measurement::<Length>::new(1.0, "km").unwrap();
    assert!((m.to("in").unwrap().value() - 39370.0787).abs() < 1e-3);
}

#[test]
fn temperature_kelvin_to_fahrenheit() {
    let m = Measurement::<Temperature>::new(0.0, "K").unwrap();
    assert!((m.to("F").unwrap().value() - (-459.67)).abs() < 1e-6);
}

#[test]
fn area_square_prefix_scaling() {
    let km2 = Measurement::<Area>::new(1.0, "km2").unwrap();
    assert!((km2.to("m2").unwrap().value() - 1e6).abs() < 1e-3);
    let cm2 = Measurement::<Area>::new(1.0, "cm2").unwrap();
    assert!((cm2.to("m2").unwrap().value() - 1e-4).abs() < 1e-12);
}

#[test]
fn memory_mixed_prefixes() {
    let gib = Measurement::<Memory>::new(1.0, "GiB").unwrap();
    assert_eq!(gib.to("B").unwrap().value(), 2f64.powi(30));
    let gb = Measurement::<Memory>::new(1.0, "GB").unwrap();
    assert_eq!(gb.to("B").unwrap().value(), 1e9);
    let gbit = Measurement::<Memory>::new(1.0, "Gb").unwrap();
    assert!((gbit.to("MB").unwrap().value() - 125.0).abs() < 1e-6);
}

#[test]
fn angle_dms_format() {
    use measures::kinds::angle::Angle as AngleKind;
    let m = Measurement::<Angle>::new(45.5042, "deg").unwrap();
    let breakdown = AngleKind::to_parts(&m, "arcsec", Some(1)).unwrap();
    assert_eq!(AngleKind::format_parts(&breakdown, Some(1), false), "45° 30′ 15.1″");
}

#[test]
fn time_from_parts_and_interval() {
    use measures::kinds::time::Time as TimeKind;
    let m = TimeKind::from_parts(0.0, 0.0, 1.0, 2.0, 3.0, 4.0).unwrap();
    assert_eq!(m.value(), 93784.0);
    assert_eq!(TimeKind::to_date_interval_specifier(&m).unwrap(), "P1DT2H3M4S");
}

#[test]
fn volume_gallon_to_litre() {
    let m = Measurement::<Volume>::new(1.0, "gal").unwrap();
    assert!((m.to("l").unwrap().value() - 3.785411784).abs() < 1e-9);
}
