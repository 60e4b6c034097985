use super::FieldEdit;
use crate::catalog::FieldKind;
use crate::step::ParamValue;

/// Converts a raw edit into the value type implied by `kind`.
///
/// * `Number`: trimmed text parsed as a finite number; blank or unparseable input is `0`.
/// * `Text`: kept verbatim. A toggle becomes `"true"`/`"false"`.
/// * `Boolean`: a toggle as is; text is read with [`truthy`].
pub fn coerce(kind: FieldKind, edit: FieldEdit) -> ParamValue {
    match (kind, edit) {
        (FieldKind::Number, FieldEdit::Text(raw)) => ParamValue::Number(parse_number(&raw)),
        (FieldKind::Number, FieldEdit::Toggle(on)) => ParamValue::Number(if on { 1.0 } else { 0.0 }),
        (FieldKind::Text, FieldEdit::Text(raw)) => ParamValue::Text(raw),
        (FieldKind::Text, FieldEdit::Toggle(on)) => ParamValue::Text(on.to_string()),
        (FieldKind::Boolean, FieldEdit::Toggle(on)) => ParamValue::Bool(on),
        (FieldKind::Boolean, FieldEdit::Text(raw)) => ParamValue::Bool(truthy(&raw)),
    }
}

fn parse_number(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .unwrap_or(0.0)
}

/// Reads text as a flag. Anything not recognisably "off" is on, matching the
/// enabled-by-default toggle.
pub(super) fn truthy(raw: &str) -> bool {
    !matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "false" | "0" | "off" | "no"
    )
}
