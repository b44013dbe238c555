//! Runtime-checked, printf-style rendering of a format template and its [`Arg`]s.
//!
//! Supported verbs:
//! - `%v` the value in a default format, `%T` the argument's type name, `%%` a literal percent
//! - `%s` strings and `Display`/`Debug` values, `%q` a quoted and escaped string or char
//! - `%d` decimal, `%x`/`%X` hexadecimal (also for string bytes), `%o` octal, `%b` binary
//! - `%f`/`%F` fixed-point, `%e`/`%E` scientific, `%g`/`%G` shortest float representation
//! - `%t` bools, `%c` chars (or integer code points)
//!
//! Flags `-` (left-justify), `+` (always print a sign), ` ` (space for a sign), `0` (zero
//! padding) and `#` (alternate form) may precede a width and `.precision`.
//!
//! Mistakes in the template are rendered inline instead of failing:
//!
//! | Problem                   | Output                      |
//! |---------------------------|-----------------------------|
//! | Too few arguments         | `%!d(MISSING)`              |
//! | Wrong argument type       | `%!d(string=abc)`           |
//! | `%` at end of template    | `%!(NOVERB)`                |
//! | Too many arguments        | `%!(EXTRA int=1, string=a)` |
//! | Width above 1,000,000     | `%!(BADWIDTH)`              |
//! | Precision above 1,000,000 | `%!(BADPREC)`               |
//!
//! A rejected width or precision is reported, and the argument is then rendered as though it
//! had not been given.

use std::fmt::{Result as FmtResult, Write};

use crate::args::Arg;


/// Render `format` with `args` into a new `String`.
#[must_use]
pub fn sprintf(format: &str, args: &[Arg<'_>]) -> String {
    let mut out = String::with_capacity(format.len() + 8 * args.len());
    append(&mut out, format, args);
    out
}

/// Render `format` with `args`, appending the result to `out`.
pub fn append(out: &mut String, format: &str, args: &[Arg<'_>]) {
    let result = write_formatted(out, format, args);
    debug_assert!(result.is_ok(), "writing to a String cannot fail");
}

/// Render `format` with `args` into any [`std::fmt::Write`] sink.
///
/// The only errors returned are those of `out` itself.
pub fn write_formatted<W>(out: &mut W, format: &str, args: &[Arg<'_>]) -> FmtResult
where
    W: Write + ?Sized,
{
    let mut next_arg = 0;
    let mut rest = format;

    while let Some(percent) = rest.find('%') {
        out.write_str(&rest[..percent])?;

        let (spec, verb, after) = parse_directive(&rest[percent + 1..]);
        rest = after;

        if spec.bad_width {
            out.write_str("%!(BADWIDTH)")?;
        }
        if spec.bad_precision {
            out.write_str("%!(BADPREC)")?;
        }

        let Some(verb) = verb else {
            out.write_str("%!(NOVERB)")?;
            break;
        };

        if verb == '%' {
            out.write_char('%')?;
            continue;
        }

        if let Some(arg) = args.get(next_arg) {
            next_arg += 1;
            write_arg(out, &spec, verb, arg)?;
        } else {
            write!(out, "%!{verb}(MISSING)")?;
        }
    }

    out.write_str(rest)?;

    if let Some(extra) = args.get(next_arg..).filter(|extra| !extra.is_empty()) {
        out.write_str("%!(EXTRA ")?;
        for (idx, arg) in extra.iter().enumerate() {
            if idx != 0 {
                out.write_str(", ")?;
            }
            write!(out, "{}={arg}", arg.type_name())?;
        }
        out.write_char(')')?;
    }

    Ok(())
}

/// The largest width or precision accepted in a template.
const MAX_WIDTH_OR_PRECISION: usize = 1_000_000;

/// Every fractional digit of an `f64` past this many is zero, in both fixed-point and
/// scientific notation.
const MAX_EXACT_FRACTION_DIGITS: usize = 1074;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Spec {
    minus:         bool,
    plus:          bool,
    space:         bool,
    zero:          bool,
    sharp:         bool,
    width:         Option<usize>,
    precision:     Option<usize>,
    bad_width:     bool,
    bad_precision: bool,
}

/// Parse the flags, width, precision and verb following a `%`.
///
/// Returns the verb, if any, and the remainder of the template after the verb.
fn parse_directive(directive: &str) -> (Spec, Option<char>, &str) {
    let mut spec = Spec::default();
    let mut rest = directive;

    while let Some(flag) = rest.chars().next() {
        match flag {
            '-' => spec.minus = true,
            '+' => spec.plus = true,
            ' ' => spec.space = true,
            '0' => spec.zero = true,
            '#' => spec.sharp = true,
            _   => break,
        }
        rest = &rest[1..];
    }

    let (width, after_width) = parse_number(rest);
    match width {
        Some(width) if width > MAX_WIDTH_OR_PRECISION => spec.bad_width = true,
        _                                             => spec.width = width,
    }
    rest = after_width;

    if let Some(after_dot) = rest.strip_prefix('.') {
        let (precision, after_precision) = parse_number(after_dot);
        match precision.unwrap_or(0) {
            precision if precision > MAX_WIDTH_OR_PRECISION => spec.bad_precision = true,
            precision                                       => spec.precision = Some(precision),
        }
        rest = after_precision;
    }

    let mut chars = rest.chars();
    let verb = chars.next();
    (spec, verb, chars.as_str())
}

fn parse_number(text: &str) -> (Option<usize>, &str) {
    let digits = text.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return (None, text);
    }

    // Anything too long for a `usize` is far above `MAX_WIDTH_OR_PRECISION` anyway.
    let number = text[..digits].parse().unwrap_or(usize::MAX);
    (Some(number), &text[digits..])
}

fn write_arg<W: Write + ?Sized>(out: &mut W, spec: &Spec, verb: char, arg: &Arg<'_>) -> FmtResult {
    match (verb, *arg) {
        ('v', Arg::Int(n))   => write_signed(out, spec, 'd', n),
        ('v', Arg::Uint(n))  => write_unsigned(out, spec, 'd', false, n),
        ('v', Arg::Float(n)) => write_float(out, spec, 'g', n),
        ('v', Arg::Str(s)) if spec.sharp => write_padded(out, spec, &format!("{s:?}")),
        ('v', Arg::Debug(value)) if spec.sharp => write_padded(out, spec, &format!("{value:#?}")),
        ('v', _) => write_padded(out, spec, &arg.to_string()),

        ('T', _) => write_padded(out, spec, arg.type_name()),

        ('s', Arg::Str(s)) => write_truncated(out, spec, s),
        ('s', Arg::Display(value)) => write_truncated(out, spec, &value.to_string()),
        ('s', Arg::Debug(value)) => write_truncated(out, spec, &format!("{value:?}")),

        ('q', Arg::Str(s)) => write_padded(out, spec, &format!("{s:?}")),
        ('q', Arg::Display(value)) => write_padded(out, spec, &format!("{:?}", value.to_string())),
        ('q', Arg::Char(c)) => write_padded(out, spec, &format!("{c:?}")),

        ('d' | 'x' | 'X' | 'o' | 'b', Arg::Int(n)) => write_signed(out, spec, verb, n),
        ('d' | 'x' | 'X' | 'o' | 'b', Arg::Uint(n)) => write_unsigned(out, spec, verb, false, n),
        ('x' | 'X', Arg::Str(s)) => write_hex_bytes(out, spec, verb, s.as_bytes()),

        ('f' | 'F' | 'e' | 'E' | 'g' | 'G', Arg::Float(n)) => write_float(out, spec, verb, n),

        ('t', Arg::Bool(b)) => write_padded(out, spec, if b { "true" } else { "false" }),

        ('c', Arg::Char(c)) => write_padded(out, spec, c.encode_utf8(&mut [0; 4])),
        ('c', Arg::Int(_) | Arg::Uint(_)) => {
            let code_point = match *arg {
                Arg::Int(n)  => u32::try_from(n).ok(),
                Arg::Uint(n) => u32::try_from(n).ok(),
                _            => None,
            };
            let c = code_point
                .and_then(char::from_u32)
                .unwrap_or(char::REPLACEMENT_CHARACTER);
            write_padded(out, spec, c.encode_utf8(&mut [0; 4]))
        }

        _ => write!(out, "%!{verb}({}={arg})", arg.type_name()),
    }
}

fn write_repeated<W: Write + ?Sized>(out: &mut W, c: char, count: usize) -> FmtResult {
    for _ in 0..count {
        out.write_char(c)?;
    }
    Ok(())
}

fn write_padded<W: Write + ?Sized>(out: &mut W, spec: &Spec, body: &str) -> FmtResult {
    let padding = spec.width
        .unwrap_or(0)
        .saturating_sub(body.chars().count());

    if spec.minus {
        out.write_str(body)?;
        write_repeated(out, ' ', padding)
    } else {
        write_repeated(out, ' ', padding)?;
        out.write_str(body)
    }
}

/// `%s` treats the precision as a maximum number of chars.
fn write_truncated<W: Write + ?Sized>(out: &mut W, spec: &Spec, body: &str) -> FmtResult {
    match spec.precision.and_then(|max_chars| body.char_indices().nth(max_chars)) {
        Some((cutoff, _)) => write_padded(out, spec, &body[..cutoff]),
        None              => write_padded(out, spec, body),
    }
}

const fn sign(spec: &Spec, negative: bool) -> &'static str {
    if negative {
        "-"
    } else if spec.plus {
        "+"
    } else if spec.space {
        " "
    } else {
        ""
    }
}

/// Write a number split into its sign, radix prefix, and digits, so that zero padding lands
/// between the prefix and the digits.
fn write_number<W: Write + ?Sized>(
    out:       &mut W,
    spec:      &Spec,
    sign:      &str,
    prefix:    &str,
    digits:    &str,
    zero_pad:  bool,
) -> FmtResult {
    if zero_pad && !spec.minus {
        let len = sign.len() + prefix.len() + digits.chars().count();
        out.write_str(sign)?;
        out.write_str(prefix)?;
        write_repeated(out, '0', spec.width.unwrap_or(0).saturating_sub(len))?;
        out.write_str(digits)
    } else {
        write_padded(out, spec, &format!("{sign}{prefix}{digits}"))
    }
}

fn write_signed<W: Write + ?Sized>(out: &mut W, spec: &Spec, verb: char, n: i64) -> FmtResult {
    write_unsigned(out, spec, verb, n < 0, n.unsigned_abs())
}

fn write_unsigned<W: Write + ?Sized>(
    out:       &mut W,
    spec:      &Spec,
    verb:      char,
    negative:  bool,
    magnitude: u64,
) -> FmtResult {
    let (mut digits, prefix) = match verb {
        'x' => (format!("{magnitude:x}"), "0x"),
        'X' => (format!("{magnitude:X}"), "0X"),
        'o' => (format!("{magnitude:o}"), "0"),
        'b' => (format!("{magnitude:b}"), "0b"),
        _   => (magnitude.to_string(),    ""),
    };

    // An explicit precision is a minimum number of digits, and disables zero padding.
    if let Some(min_digits) = spec.precision {
        if digits.len() < min_digits {
            digits.insert_str(0, &"0".repeat(min_digits - digits.len()));
        }
    }

    let prefix = if spec.sharp { prefix } else { "" };
    let zero_pad = spec.zero && spec.precision.is_none();
    write_number(out, spec, sign(spec, negative), prefix, &digits, zero_pad)
}

fn write_hex_bytes<W: Write + ?Sized>(
    out:   &mut W,
    spec:  &Spec,
    verb:  char,
    bytes: &[u8],
) -> FmtResult {
    let mut hex = String::with_capacity(2 * bytes.len());
    for byte in bytes {
        if verb == 'X' {
            write!(hex, "{byte:02X}")?;
        } else {
            write!(hex, "{byte:02x}")?;
        }
    }
    write_padded(out, spec, &hex)
}

fn write_float<W: Write + ?Sized>(out: &mut W, spec: &Spec, verb: char, n: f64) -> FmtResult {
    if n.is_nan() {
        return write_padded(out, spec, "NaN");
    }

    let sign = sign(spec, n.is_sign_negative());
    if n.is_infinite() {
        // Zero padding an infinity would be nonsense.
        let sign = if sign.is_empty() { "+" } else { sign };
        return write_padded(out, spec, &format!("{sign}Inf"));
    }

    let magnitude = n.abs();
    let digits = match verb {
        'f' | 'F' => fixed_point(magnitude, spec.precision.unwrap_or(6)),
        'e' | 'E' => scientific(magnitude, spec.precision.unwrap_or(6), verb),
        _ => match spec.precision {
            Some(precision) => fixed_point(magnitude, precision),
            None            => magnitude.to_string(),
        },
    };

    write_number(out, spec, sign, "", &digits, spec.zero)
}

/// `std` cannot format with a precision above `u16::MAX`, so digits past the last nonzero one
/// are appended by hand.
fn fixed_point(magnitude: f64, precision: usize) -> String {
    let exact = precision.min(MAX_EXACT_FRACTION_DIGITS);
    let mut digits = format!("{magnitude:.exact$}");
    digits.extend(std::iter::repeat_n('0', precision - exact));
    digits
}

/// Rust prints `1.5e2`; C and Go print `1.5e+02`.
fn scientific(magnitude: f64, precision: usize, verb: char) -> String {
    let exact = precision.min(MAX_EXACT_FRACTION_DIGITS);
    let rust_style = format!("{magnitude:.exact$e}");

    let Some((mantissa, exponent)) = rust_style.split_once('e') else {
        return rust_style;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return rust_style;
    };

    let zeros = "0".repeat(precision - exact);
    let exponent_sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa}{zeros}{verb}{exponent_sign}{:02}", exponent.unsigned_abs())
}
