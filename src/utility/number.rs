/// Abbreviates a number for compact display, e.g. `120`, `1.2K`, `45K`, `3.4M`, `1.25B`.
///
/// Values below one thousand are always floored. Above that, `floor` selects whether the
/// abbreviated value is rounded down or up at its displayed precision.
pub fn format_number(value: f64, floor: bool) -> String {
	if !value.is_finite() {
		return format_grouped(value);
	}
	let round = |v: f64| match floor {
		true => v.floor(),
		false => v.ceil(),
	};
	let scaled = |scale: f64, precision: i32| {
		let factor = 10f64.powi(precision);
		round(value / scale * factor) / factor
	};
	match value {
		v if v < 1_000.0 => format!("{}", v.floor() as i64),
		v if v < 10_000.0 => format!("{:.1}K", scaled(1e3, 1)),
		v if v < 1_000_000.0 => format!("{}K", round(v / 1e3) as i64),
		v if v < 1_000_000_000.0 => format!("{:.1}M", scaled(1e6, 1)),
		_ => format!("{:.2}B", scaled(1e9, 2)),
	}
}

/// Formats a number with thousands separators and at most three fraction digits,
/// e.g. `1234567.5` becomes `1,234,567.5`.
pub fn format_grouped(value: f64) -> String {
	if value.is_nan() {
		return "NaN".into();
	}
	if value.is_infinite() {
		return match value.is_sign_negative() {
			true => "-∞".into(),
			false => "∞".into(),
		};
	}

	// beyond 1e15, thousandths no longer fit in an f64
	let rounded = match value.abs() < 1e15 {
		true => (value.abs() * 1000.0).round() / 1000.0,
		false => value.abs(),
	};
	let whole = rounded.trunc();
	let fraction = ((rounded - whole) * 1000.0).round() as u64;

	let digits = format!("{whole:.0}");
	let mut text = String::with_capacity(digits.len() + digits.len() / 3 + 5);
	if value.is_sign_negative() && rounded > 0.0 {
		text.push('-');
	}
	for (idx, c) in digits.chars().enumerate() {
		if idx > 0 && (digits.len() - idx) % 3 == 0 {
			text.push(',');
		}
		text.push(c);
	}
	if fraction > 0 {
		let fraction = format!("{fraction:03}");
		text.push('.');
		text.push_str(fraction.trim_end_matches('0'));
	}
	text
}

#[cfg(test)]
mod test {
	use super::*;

	mod format_number {
		use super::*;

		#[test]
		fn below_thousand() {
			assert_eq!(format_number(0.0, true), "0");
			assert_eq!(format_number(120.0, true), "120");
			assert_eq!(format_number(999.9, true), "999");
		}

		#[test]
		fn thousands_one_decimal() {
			assert_eq!(format_number(1000.0, true), "1.0K");
			assert_eq!(format_number(1250.0, true), "1.2K");
			assert_eq!(format_number(9999.0, true), "9.9K");
		}

		#[test]
		fn thousands_ceil() {
			assert_eq!(format_number(1050.0, false), "1.1K");
		}

		#[test]
		fn tens_of_thousands() {
			assert_eq!(format_number(55_000.0, true), "55K");
			assert_eq!(format_number(55_300.0, true), "55K");
			assert_eq!(format_number(55_300.0, false), "56K");
		}

		#[test]
		fn millions() {
			assert_eq!(format_number(55_172_425.0, true), "55.1M");
		}

		#[test]
		fn billions() {
			assert_eq!(format_number(1_250_000_000.0, true), "1.25B");
		}

		#[test]
		fn not_finite() {
			assert_eq!(format_number(f64::NAN, true), "NaN");
			assert_eq!(format_number(f64::INFINITY, true), "∞");
		}
	}

	mod format_grouped {
		use super::*;

		#[test]
		fn small() {
			assert_eq!(format_grouped(0.0), "0");
			assert_eq!(format_grouped(999.0), "999");
		}

		#[test]
		fn grouped() {
			assert_eq!(format_grouped(1000.0), "1,000");
			assert_eq!(format_grouped(1_234_567.0), "1,234,567");
		}

		#[test]
		fn fraction() {
			assert_eq!(format_grouped(1234.5), "1,234.5");
			assert_eq!(format_grouped(0.12345), "0.123");
		}

		#[test]
		fn negative() {
			assert_eq!(format_grouped(-2500.0), "-2,500");
		}

		#[test]
		fn beyond_integer_range() {
			assert_eq!(format_grouped(1e20), "100,000,000,000,000,000,000");
		}

		#[test]
		fn infinite() {
			assert_eq!(format_grouped(f64::INFINITY), "∞");
		}
	}
}
