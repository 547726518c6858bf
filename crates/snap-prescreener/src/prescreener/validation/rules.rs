use super::super::fields::{
    FieldRegistry, HOUSEHOLD_SIZE, INELIGIBLE_DISQUALIFIED, INELIGIBLE_IMMIGRATION,
};
use super::super::snapshot::FormSnapshot;
use super::ValidationError;

pub const HOUSEHOLD_SIZE_ZERO: &str = "household_size_zero";

pub const HOUSEHOLD_SIZE_ZERO_MESSAGE: &str = "Step 1: Your current household size, adjusted for disqualifications, is zero. Please adjust your household size, number of lawfully present immigrants, or number of disqualified so that at least one household member is both 1) lawfully present in the U.S. and 2) not disqualified from food stamps for a drug felony or a program violation.";

pub const NUMBER_FORMAT_MESSAGE: &str =
    "You have entered letters in one or more answers that require a number value.";

/// One step of a validation pass, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Check {
    Required {
        field: &'static str,
        prompt: &'static str,
    },
    AdjustedHouseholdSize,
    NumberFormat {
        field: &'static str,
    },
}

/// Presence checks in form order (with the adjusted-size check directly after
/// household size), followed by number-format checks in field-list order.
pub(crate) fn plan(registry: &FieldRegistry) -> Vec<Check> {
    let mut checks = Vec::new();

    for spec in registry.required_in_form_order() {
        checks.push(Check::Required {
            field: spec.id,
            prompt: spec.prompt.unwrap_or(spec.id),
        });
        if spec.id == HOUSEHOLD_SIZE {
            checks.push(Check::AdjustedHouseholdSize);
        }
    }

    if !checks.contains(&Check::AdjustedHouseholdSize) {
        checks.push(Check::AdjustedHouseholdSize);
    }

    checks.extend(
        registry
            .numeric_fields()
            .map(|spec| Check::NumberFormat { field: spec.id }),
    );

    checks
}

pub(crate) fn run(check: Check, snapshot: &FormSnapshot) -> Option<ValidationError> {
    match check {
        Check::Required { field, prompt } => {
            let missing = snapshot.get(field).map(str::is_empty).unwrap_or(true);
            missing.then_some(ValidationError {
                field_name: field,
                message: prompt,
            })
        }
        Check::AdjustedHouseholdSize => {
            (adjusted_household_size(snapshot) < 1.0).then_some(ValidationError {
                field_name: HOUSEHOLD_SIZE_ZERO,
                message: HOUSEHOLD_SIZE_ZERO_MESSAGE,
            })
        }
        Check::NumberFormat { field } => {
            (!number_field_valid(snapshot.text(field))).then_some(ValidationError {
                field_name: field,
                message: NUMBER_FORMAT_MESSAGE,
            })
        }
    }
}

/// `size - (size - immigration) - disqualified`, evaluated with numeric
/// coercion of the raw strings.
///
/// The disqualified count is hidden only when nobody is disqualified, so an
/// absent value counts as 0. The immigration count is hidden for all-citizen
/// households; it stays NaN there, and a NaN result never compares below one.
pub fn adjusted_household_size(snapshot: &FormSnapshot) -> f64 {
    let household_size = coerce_number(snapshot.get(HOUSEHOLD_SIZE));
    let ineligible_immigration = coerce_number(snapshot.get(INELIGIBLE_IMMIGRATION));
    let ineligible_disqualified =
        coerce_number(Some(snapshot.get(INELIGIBLE_DISQUALIFIED).unwrap_or("")));

    // Kept in its original un-simplified shape; Infinity and NaN operands make
    // it differ from `immigration - disqualified`.
    household_size - (household_size - ineligible_immigration) - ineligible_disqualified
}

/// String-to-number coercion as a browser applies it to arithmetic operands.
///
/// Blank values become `0` and absent ones NaN. Anything that is not a complete
/// numeric literal (decimal, exponent, `Infinity`, or `0x`/`0o`/`0b` integer)
/// also becomes NaN.
pub fn coerce_number(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        return f64::NAN;
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = trimmed.strip_prefix(prefix) {
            return parse_radix(digits, radix);
        }
    }

    let (sign, unsigned) = match trimmed.as_bytes()[0] {
        b'-' => (-1.0, &trimmed[1..]),
        b'+' => (1.0, &trimmed[1..]),
        _ => (1.0, trimmed),
    };
    if unsigned == "Infinity" {
        return sign * f64::INFINITY;
    }

    let literal = unsigned
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if !literal || !unsigned.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return f64::NAN;
    }

    unsigned
        .parse::<f64>()
        .map(|value| sign * value)
        .unwrap_or(f64::NAN)
}

fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix).map(|digit| acc * f64::from(radix) + f64::from(digit))
    })
    .unwrap_or(f64::NAN)
}

/// A number field is valid when blank, or when it holds a whole number with an
/// optional decimal part (`42`, `-3`, `12.50`). Trailing letters are rejected.
pub fn number_field_valid(value: &str) -> bool {
    if value.is_empty() {
        return true;
    }

    let trimmed = value.trim();
    let unsigned = trimmed
        .strip_prefix('-')
        .or_else(|| trimmed.strip_prefix('+'))
        .unwrap_or(trimmed);

    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (unsigned, None),
    };

    !whole.is_empty()
        && whole.chars().all(|c| c.is_ascii_digit())
        && fraction
            .map(|digits| digits.chars().all(|c| c.is_ascii_digit()))
            .unwrap_or(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coercion_treats_blank_as_zero_and_absent_as_nan() {
        assert!(coerce_number(None).is_nan());
        assert_eq!(coerce_number(Some("")), 0.0);
        assert_eq!(coerce_number(Some("   ")), 0.0);
        assert_eq!(coerce_number(Some(" 7 ")), 7.0);
        assert_eq!(coerce_number(Some("-2.5")), -2.5);
        assert_eq!(coerce_number(Some("1e2")), 100.0);
        assert_eq!(coerce_number(Some("0x1f")), 31.0);
        assert_eq!(coerce_number(Some("Infinity")), f64::INFINITY);
    }

    #[test]
    fn coercion_rejects_partial_numbers() {
        assert!(coerce_number(Some("4a")).is_nan());
        assert!(coerce_number(Some("abc")).is_nan());
        assert!(coerce_number(Some("inf")).is_nan());
        assert!(coerce_number(Some("NaN")).is_nan());
        assert!(coerce_number(Some("0x")).is_nan());
        assert!(coerce_number(Some("1,200")).is_nan());
    }

    #[test]
    fn number_fields_accept_blank_and_whole_numbers() {
        assert!(number_field_valid(""));
        assert!(number_field_valid("42"));
        assert!(number_field_valid(" 42 "));
        assert!(number_field_valid("-3"));
        assert!(number_field_valid("1200.50"));
        assert!(number_field_valid("7."));
    }

    #[test]
    fn number_fields_reject_letters() {
        assert!(!number_field_valid("abc"));
        assert!(!number_field_valid("4a"));
        assert!(!number_field_valid(".5"));
        assert!(!number_field_valid("-"));
        assert!(!number_field_valid("   "));
        assert!(!number_field_valid("1.2.3"));
    }
}
