//! printf-style placeholder rendering for bundled roots

use serde_json::Value;
use std::fmt::Write;

/// Render `message` with positional `args`.
///
/// Supports `%s`, `%d`, `%i`, `%f`, `%j`, `%o`, `%O` and `%%`. Placeholders
/// without a matching argument are left verbatim; surplus arguments are
/// appended separated by spaces.
pub fn interpolate(message: &str, args: &[Value]) -> String {
    let mut out = String::with_capacity(message.len());
    let mut args = args.iter();
    let mut chars = message.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        let Some(&conv) = chars.peek() else {
            out.push(c);
            break;
        };
        if conv == '%' {
            chars.next();
            out.push('%');
            continue;
        }
        if !matches!(conv, 's' | 'd' | 'i' | 'f' | 'j' | 'o' | 'O') {
            out.push(c);
            continue;
        }
        chars.next();
        match args.next() {
            Some(arg) => render(&mut out, conv, arg),
            None => {
                out.push('%');
                out.push(conv);
            }
        }
    }

    for arg in args {
        out.push(' ');
        out.push_str(&display(arg));
    }

    out
}

fn render(out: &mut String, conv: char, arg: &Value) {
    match conv {
        's' => out.push_str(&display(arg)),
        'd' => out.push_str(&as_number(arg).map_or_else(|| "NaN".into(), format_number)),
        'i' => out.push_str(
            &as_number(arg).map_or_else(|| "NaN".into(), |n| format_number(n.trunc())),
        ),
        'f' => out.push_str(&as_number(arg).map_or_else(|| "NaN".into(), |n| n.to_string())),
        _ => {
            let _ = write!(out, "{arg}");
        }
    }
}

pub(crate) fn display(arg: &Value) -> String {
    match arg {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn as_number(arg: &Value) -> Option<f64> {
    match arg {
        Value::Number(n) => n.as_f64(),
        Value::Bool(b) => Some(f64::from(u8::from(*b))),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}
