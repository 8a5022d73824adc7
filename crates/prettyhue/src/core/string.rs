use super::to_byte;
use crate::error::ColorFormatError;
use crate::Float;

/// Parse a color in hashed hexadecimal format.
///
/// The leading `#` is optional. The remaining string must consist of exactly
/// six or eight hexadecimal digits, for `rrggbb` or `rrggbbaa`, respectively.
/// If the alpha byte is missing, it defaults to 255. Letter case does not
/// matter. The caller is responsible for trimming white space.
pub(crate) fn parse_hex(s: &str) -> Result<[u8; 4], ColorFormatError> {
    let digits = s.strip_prefix('#').unwrap_or(s);
    if digits.is_empty() {
        return Err(ColorFormatError::Empty);
    } else if !digits.is_ascii() || (digits.len() != 6 && digits.len() != 8) {
        return Err(ColorFormatError::UnexpectedCharacters);
    } else if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        // from_str_radix accepts a leading sign
        return Err(ColorFormatError::MalformedHex);
    }

    fn parse_byte(s: &str, index: usize) -> Result<u8, ColorFormatError> {
        let t = s
            .get(2 * index..2 * (index + 1))
            .ok_or(ColorFormatError::UnexpectedCharacters)?;
        u8::from_str_radix(t, 16).map_err(|_| ColorFormatError::MalformedHex)
    }

    let r = parse_byte(digits, 0)?;
    let g = parse_byte(digits, 1)?;
    let b = parse_byte(digits, 2)?;
    let a = if digits.len() == 8 {
        parse_byte(digits, 3)?
    } else {
        255
    };

    Ok([r, g, b, a])
}

/// Format the channels in hashed hexadecimal format.
///
/// Digits are lowercase. The alpha byte is included only if it is not 255,
/// i.e., the color is not fully opaque.
pub(crate) fn format_hex(channels: &[Float; 4]) -> String {
    let [r, g, b, a] = channels.map(to_byte);
    if a == 255 {
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    } else {
        format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Parse a color in descriptive format.
///
/// The descriptive format optionally is enclosed in curly braces and contains
/// two, three, or four decimal numbers separated by commas, white space, or
/// both. Two numbers are white and alpha, three numbers are red, green, and
/// blue for an opaque color, and four numbers are red, green, blue, and alpha.
/// Numbers use unit range.
pub(crate) fn parse_descriptive(s: &str) -> Result<[Float; 4], ColorFormatError> {
    let s = s.trim();
    let body = match (s.strip_prefix('{'), s.ends_with('}')) {
        (Some(rest), true) => rest.strip_suffix('}').unwrap_or(rest),
        (None, false) => s,
        _ => return Err(ColorFormatError::UnbalancedBraces),
    };

    if body.trim().is_empty() {
        return Err(ColorFormatError::Empty);
    } else if body.contains(['{', '}']) {
        return Err(ColorFormatError::UnbalancedBraces);
    }

    let mut numbers = Vec::with_capacity(4);
    for field in body.split(',') {
        let mut empty = true;
        for token in field.split_whitespace() {
            empty = false;
            let number: Float = token
                .parse()
                .map_err(|_| ColorFormatError::MalformedFloat)?;
            if !number.is_finite() {
                return Err(ColorFormatError::MalformedFloat);
            }
            numbers.push(number);
        }

        // Two commas without a number in between
        if empty {
            return Err(ColorFormatError::MalformedFloat);
        }
    }

    match *numbers.as_slice() {
        [white, alpha] => Ok([white, white, white, alpha]),
        [r, g, b] => Ok([r, g, b, 1.0]),
        [r, g, b, a] => Ok([r, g, b, a]),
        _ => Err(ColorFormatError::WrongArity(numbers.len())),
    }
}

/// Format the channels in descriptive format.
///
/// This function writes `{r, g, b, a}` to the formatter. It respects the
/// formatter's precision, defaulting to 4 digits past the decimal.
pub(crate) fn format_descriptive(
    channels: &[Float; 4],
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    let precision = f.precision().unwrap_or(4);
    let [r, g, b, a] = *channels;
    f.write_fmt(format_args!(
        "{{{:.*}, {:.*}, {:.*}, {:.*}}}",
        precision, r, precision, g, precision, b, precision, a
    ))
}

// --------------------------------------------------------------------------------------------------------------------

/// Determine whether the string is a single hexadecimal token.
fn is_hex_token(s: &str) -> bool {
    let digits = s.strip_prefix('#').unwrap_or(s);
    s.starts_with('#')
        || ((digits.len() == 6 || digits.len() == 8)
            && digits.bytes().all(|b| b.is_ascii_hexdigit()))
}

/// Parse the string into channels.
///
/// This function trims leading and trailing white space. It then parses a
/// single hexadecimal token, with or without a leading `#`, as a hashed
/// hexadecimal color and everything else as a descriptive color.
pub(crate) fn parse(s: &str) -> Result<[Float; 4], ColorFormatError> {
    let s = s.trim();
    if s.is_empty() {
        Err(ColorFormatError::Empty)
    } else if is_hex_token(s) {
        let [r, g, b, a] = parse_hex(s)?;
        Ok([
            Float::from(r) / 255.0,
            Float::from(g) / 255.0,
            Float::from(b) / 255.0,
            Float::from(a) / 255.0,
        ])
    } else {
        parse_descriptive(s)
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{format_hex, parse, parse_descriptive, parse_hex, ColorFormatError};

    #[test]
    fn test_parse_hex() -> Result<(), ColorFormatError> {
        assert_eq!(parse_hex("#ff8000")?, [0xff_u8, 0x80, 0x00, 0xff]);
        assert_eq!(parse_hex("FF8000")?, [0xff_u8, 0x80, 0x00, 0xff]);
        assert_eq!(parse_hex("#ff800080")?, [0xff_u8, 0x80, 0x00, 0x80]);
        assert_eq!(parse_hex("#"), Err(ColorFormatError::Empty));
        assert_eq!(parse_hex("#fff"), Err(ColorFormatError::UnexpectedCharacters));
        assert_eq!(
            parse_hex("#ff80000"),
            Err(ColorFormatError::UnexpectedCharacters)
        );
        assert_eq!(
            parse_hex("#💩00"),
            Err(ColorFormatError::UnexpectedCharacters)
        );
        assert_eq!(parse_hex("#ff80g0"), Err(ColorFormatError::MalformedHex));
        assert_eq!(parse_hex("#+f+f+f"), Err(ColorFormatError::MalformedHex));
        assert_eq!(parse_hex("#+f+f+f+f"), Err(ColorFormatError::MalformedHex));
        assert_eq!(parse_hex("-f0000"), Err(ColorFormatError::MalformedHex));
        Ok(())
    }

    #[test]
    fn test_format_hex() {
        assert_eq!(format_hex(&[1.0, 0.0, 0.0, 1.0]), "#ff0000");
        assert_eq!(format_hex(&[1.0, 0.5, 0.0, 0.5]), "#ff800080");
        assert_eq!(format_hex(&[2.0, -1.0, 0.0, 7.0]), "#ff0000");
    }

    #[test]
    fn test_parse_descriptive() -> Result<(), ColorFormatError> {
        assert_eq!(parse_descriptive("{0.5, 1}")?, [0.5, 0.5, 0.5, 1.0]);
        assert_eq!(parse_descriptive("0.1 0.2 0.3")?, [0.1, 0.2, 0.3, 1.0]);
        assert_eq!(
            parse_descriptive("  {0.1,0.2 , 0.3,   0.4}  ")?,
            [0.1, 0.2, 0.3, 0.4]
        );
        assert_eq!(parse_descriptive("{}"), Err(ColorFormatError::Empty));
        assert_eq!(
            parse_descriptive("{0.1, 0.2, 0.3"),
            Err(ColorFormatError::UnbalancedBraces)
        );
        assert_eq!(
            parse_descriptive("0.1, 0.2}"),
            Err(ColorFormatError::UnbalancedBraces)
        );
        assert_eq!(
            parse_descriptive("{{0.1, 0.2}}"),
            Err(ColorFormatError::UnbalancedBraces)
        );
        assert_eq!(
            parse_descriptive("0.1"),
            Err(ColorFormatError::WrongArity(1))
        );
        assert_eq!(
            parse_descriptive("0.1 0.2 0.3 0.4 0.5"),
            Err(ColorFormatError::WrongArity(5))
        );
        assert_eq!(
            parse_descriptive("0.1, red, 0.3"),
            Err(ColorFormatError::MalformedFloat)
        );
        assert_eq!(
            parse_descriptive("0.1,, 0.3"),
            Err(ColorFormatError::MalformedFloat)
        );
        assert_eq!(
            parse_descriptive("0.1 inf 0.3"),
            Err(ColorFormatError::MalformedFloat)
        );
        Ok(())
    }

    #[test]
    fn test_parse() -> Result<(), ColorFormatError> {
        assert_eq!(parse("  #ff0000  ")?, [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(parse("00ff00")?, [0.0, 1.0, 0.0, 1.0]);
        assert_eq!(parse("{0, 0, 1}")?, [0.0, 0.0, 1.0, 1.0]);
        assert_eq!(parse("   "), Err(ColorFormatError::Empty));
        assert_eq!(parse("#12"), Err(ColorFormatError::UnexpectedCharacters));
        assert_eq!(parse("#+f+f+f"), Err(ColorFormatError::MalformedHex));
        Ok(())
    }
}
