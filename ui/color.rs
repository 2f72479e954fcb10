//! Parsing and lightening of CSS colors.

use num_traits::ToPrimitive;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
}

/// A color in HSL space with all components in `[0, 1]`.
#[derive(Clone, Copy, Debug)]
struct Hsl {
	h: f64,
	s: f64,
	l: f64,
}

impl Color {
	/// Parse `#rgb`, `#rrggbb` or `rgb(r, g, b)`.
	pub fn parse(value: &str) -> Option<Color> {
		let value = value.trim();
		if let Some(hex) = value.strip_prefix('#') {
			Color::parse_hex(hex)
		} else if let Some(args) = value
			.strip_prefix("rgb(")
			.and_then(|value| value.strip_suffix(')'))
		{
			let mut channels = args.split(',').map(|channel| channel.trim().parse::<u8>());
			let r = channels.next()?.ok()?;
			let g = channels.next()?.ok()?;
			let b = channels.next()?.ok()?;
			if channels.next().is_some() {
				return None;
			}
			Some(Color { r, g, b })
		} else {
			None
		}
	}

	fn parse_hex(hex: &str) -> Option<Color> {
		let channel = |digits: &str| u8::from_str_radix(digits, 16).ok();
		match hex.len() {
			3 => {
				let mut digits = hex.chars().map(|digit| channel(&digit.to_string().repeat(2)));
				Some(Color {
					r: digits.next()??,
					g: digits.next()??,
					b: digits.next()??,
				})
			}
			6 => Some(Color {
				r: channel(hex.get(0..2)?)?,
				g: channel(hex.get(2..4)?)?,
				b: channel(hex.get(4..6)?)?,
			}),
			_ => None,
		}
	}

	/// Increase the lightness by `ratio` of its current value, so `0.1` makes the color 10% lighter.
	pub fn lighten(self, ratio: f64) -> Color {
		let mut hsl = self.to_hsl();
		hsl.l = (hsl.l + hsl.l * ratio).min(1.0).max(0.0);
		Color::from_hsl(hsl)
	}

	fn to_hsl(self) -> Hsl {
		let r = f64::from(self.r) / 255.0;
		let g = f64::from(self.g) / 255.0;
		let b = f64::from(self.b) / 255.0;
		let max = r.max(g).max(b);
		let min = r.min(g).min(b);
		let l = (max + min) / 2.0;
		if (max - min).abs() < f64::EPSILON {
			return Hsl { h: 0.0, s: 0.0, l };
		}
		let delta = max - min;
		let s = if l > 0.5 {
			delta / (2.0 - max - min)
		} else {
			delta / (max + min)
		};
		let h = if (max - r).abs() < f64::EPSILON {
			(g - b) / delta + if g < b { 6.0 } else { 0.0 }
		} else if (max - g).abs() < f64::EPSILON {
			(b - r) / delta + 2.0
		} else {
			(r - g) / delta + 4.0
		};
		Hsl { h: h / 6.0, s, l }
	}

	fn from_hsl(hsl: Hsl) -> Color {
		let Hsl { h, s, l } = hsl;
		let (r, g, b) = if s == 0.0 {
			(l, l, l)
		} else {
			let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
			let p = 2.0 * l - q;
			(
				hue_to_rgb(p, q, h + 1.0 / 3.0),
				hue_to_rgb(p, q, h),
				hue_to_rgb(p, q, h - 1.0 / 3.0),
			)
		};
		Color {
			r: to_channel(r),
			g: to_channel(g),
			b: to_channel(b),
		}
	}
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
	if t < 0.0 {
		t += 1.0;
	}
	if t > 1.0 {
		t -= 1.0;
	}
	if t < 1.0 / 6.0 {
		return p + (q - p) * 6.0 * t;
	}
	if t < 1.0 / 2.0 {
		return q;
	}
	if t < 2.0 / 3.0 {
		return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
	}
	p
}

fn to_channel(value: f64) -> u8 {
	(value * 255.0).round().to_u8().unwrap_or(u8::MAX)
}

impl fmt::Display for Color {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
	}
}

/// Lighten a CSS color string. Colors that cannot be parsed are returned unchanged.
pub fn lighten(color: &str, ratio: f64) -> String {
	match Color::parse(color) {
		Some(parsed) => parsed.lighten(ratio).to_string(),
		None => color.to_owned(),
	}
}

#[test]
fn test_parse() {
	assert_eq!(
		Color::parse("#ff0000"),
		Some(Color { r: 255, g: 0, b: 0 })
	);
	assert_eq!(
		Color::parse("#0f8"),
		Some(Color {
			r: 0,
			g: 255,
			b: 136
		})
	);
	assert_eq!(
		Color::parse("rgb(1, 2, 3)"),
		Some(Color { r: 1, g: 2, b: 3 })
	);
	assert_eq!(Color::parse("rebeccapurple"), None);
	assert_eq!(Color::parse("#12345"), None);
}

#[test]
fn test_lighten() {
	assert_eq!(lighten("#ff0000", 0.1), "rgb(255, 26, 26)");
	assert_eq!(lighten("#808080", 0.4), "rgb(179, 179, 179)");
	assert_eq!(lighten("#000000", 0.4), "rgb(0, 0, 0)");
	assert_eq!(lighten("#ffffff", 0.4), "rgb(255, 255, 255)");
	assert_eq!(lighten("var(--blue)", 0.1), "var(--blue)");
}
