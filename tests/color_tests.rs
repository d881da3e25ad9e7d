use swatch::{Color, ColorDatabase, ColorFormat, Rgba};

#[test]
fn get_set_packed_values() {
    let mut c = Color::default();
    c.set_packed_rgb(0x123456);

    assert_eq!(c.red(), 0x12);
    assert_eq!(c.green(), 0x34);
    assert_eq!(c.blue(), 0x56);
    assert_eq!(c.alpha(), 255);

    assert_eq!(c, Color::from_packed_rgb(0x123456));
    assert_eq!(c.packed_rgb(), 0x123456);

    c.set_packed_rgba(0xAABBCCDD);

    assert_eq!(c.red(), 0xBB);
    assert_eq!(c.green(), 0xCC);
    assert_eq!(c.blue(), 0xDD);
    assert_eq!(c.alpha(), 0xAA);

    assert_eq!(c.packed_rgb(), 0xBBCCDD);
    assert_eq!(c.packed_rgba(), 0xAABBCCDD);
}

#[test]
fn packed_constructors_disagree_only_on_alpha() {
    // The 24-bit form discards the high byte; the 32-bit form reads it as
    // alpha. Both interpretations are part of the contract.
    let rgb = Color::from_packed_rgb(0x80102030);
    let rgba = Color::from_packed_rgba(0x80102030);

    assert_eq!(rgb.packed_rgb(), rgba.packed_rgb());
    assert_eq!(rgb.alpha(), 255);
    assert_eq!(rgba.alpha(), 0x80);
}

#[test]
fn parse_from_strings() {
    let db = ColorDatabase::new();

    assert_eq!(db.parse("rgb(11, 22, 33)").unwrap(), Color::rgb(11, 22, 33));
    assert_eq!(
        db.parse("rgba(11, 22, 33, 0.5)").unwrap(),
        Color::rgba(11, 22, 33, 128)
    );
    assert_eq!(
        db.parse("rgba( 11, 22, 33, 0.5 )").unwrap(),
        Color::rgba(11, 22, 33, 128)
    );
    assert_eq!(db.parse("#aabbcc").unwrap(), Color::rgb(0xAA, 0xBB, 0xCC));
    assert_eq!(db.parse("red").unwrap(), Color::rgb(255, 0, 0));
}

#[test]
fn parse_failure_leaves_existing_value_alone() {
    let db = ColorDatabase::new();
    let mut color = db.parse("red").unwrap();

    for input in ["rgb(1, 2)", "rgba(1, 2, 3.456)", "rgba(1, 2, 3.456, foo)"] {
        if let Ok(parsed) = db.parse(input) {
            color = parsed;
        }
        assert_eq!(color, Color::rgb(255, 0, 0), "{input} must not parse");
    }
}

#[test]
fn format_as_string() {
    let db = ColorDatabase::new();

    assert_eq!(db.format(Color::default(), ColorFormat::Name), "");
    assert_eq!(db.format(Color::default(), ColorFormat::Css), "");
    assert_eq!(db.format(Color::default(), ColorFormat::Hex), "");

    let red = db.find("red");
    assert_eq!(db.format(red, ColorFormat::Name), "red");
    assert_eq!(db.format(red, ColorFormat::Css), "rgb(255, 0, 0)");
    assert_eq!(db.format(red, ColorFormat::Hex), "#FF0000");
}

#[test]
fn luminance() {
    assert_eq!(Color::rgb(0, 0, 0).luminance(), 0.0);
    assert_eq!(Color::rgb(255, 255, 255).luminance(), 1.0);

    let red = Color::rgb(255, 0, 0).luminance();
    assert!(red > 0.0);
    assert!(red < 1.0);
}

#[test]
fn opacity_classification() {
    assert!(Color::rgba(0, 0, 0, 0).is_transparent());
    assert!(!Color::rgba(0, 0, 0, 1).is_transparent());

    assert!(Color::rgba(0, 0, 0, 255).is_opaque());
    assert!(!Color::rgba(0, 0, 0, 1).is_opaque());

    assert!(Color::rgba(0, 0, 0, 254).is_translucent());
    assert!(Color::rgba(0, 0, 0, 10).is_translucent());
    assert!(!Color::rgba(0, 0, 0, 0).is_translucent());
    assert!(!Color::rgba(0, 0, 0, 255).is_translucent());
}

#[test]
fn rgba_channel_struct_round_trips_through_color() {
    let channels = Rgba::new(9, 8, 7, 6);
    let color = Color::from(channels);
    assert_eq!(color.channels(), Some(channels));
    assert_eq!(
        (color.red(), color.green(), color.blue(), color.alpha()),
        (9, 8, 7, 6)
    );
}
