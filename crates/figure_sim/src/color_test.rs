use super::*;

#[test]
fn hex_roundtrip() {
  for hex in [0x000000, 0xFFFFFF, 0xE30022, 0x228B22, 0x3B2F2F, 0x808080] {
    assert_eq!(Rgb::from_hex(hex).to_hex(), hex);
  }
}

#[test]
fn hex_string_format() {
  assert_eq!(Rgb::from_hex(0xFF0000).hex_string(), "#FF0000");
  assert_eq!(Rgb::from_hex(0x00FF7F).hex_string(), "#00FF7F");
  assert_eq!(Rgb::from_hex(0x000001).hex_string(), "#000001");
}

#[test]
fn parse_accepts_both_forms() {
  assert_eq!(Rgb::parse_hex("#FF0000"), Some(Rgb::from_hex(0xFF0000)));
  assert_eq!(Rgb::parse_hex("ff0000"), Some(Rgb::from_hex(0xFF0000)));
}

#[test]
fn parse_rejects_garbage() {
  assert_eq!(Rgb::parse_hex(""), None);
  assert_eq!(Rgb::parse_hex("#FFF"), None);
  assert_eq!(Rgb::parse_hex("#GGGGGG"), None);
  assert_eq!(Rgb::parse_hex("not a color"), None);
}

#[test]
fn distance_is_zero_for_identical() {
  let c = Rgb::from_hex(0xE30022);
  assert_eq!(c.distance(c), 0.0);
}

#[test]
fn distance_uses_luma_weights() {
  let black = Rgb::from_hex(0x000000);
  // A pure channel delta of 1.0 should come out as exactly the channel weight.
  assert!((Rgb::new(1.0, 0.0, 0.0).distance(black) - LUMA_R).abs() < 1e-6);
  assert!((Rgb::new(0.0, 1.0, 0.0).distance(black) - LUMA_G).abs() < 1e-6);
  assert!((Rgb::new(0.0, 0.0, 1.0).distance(black) - LUMA_B).abs() < 1e-6);
}

#[test]
fn green_weighs_more_than_blue() {
  let black = Rgb::from_hex(0x000000);
  let green = Rgb::new(0.0, 0.5, 0.0);
  let blue = Rgb::new(0.0, 0.0, 0.5);
  assert!(green.distance(black) > blue.distance(black));
}
