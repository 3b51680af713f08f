//! Field rules for item drafts.
//!
//! These mirror the registry's input formats: codes like `2024-MAT-001`,
//! procurement processes like `PREGÃO 001/2024`, and six-digit budget and
//! funding identifiers. Optional fields are only checked when non-empty.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

use crate::{Error, ItemDraft, Result};

/// `YYYY-ACRONYM-NNN`
pub static CODE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-[A-Z]{3,5}-\d{3,6}$").expect("valid code pattern"));

/// `KIND NNN/YYYY`, kind is case-insensitive
pub static PROCESS_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(PREGÃO|DISPENSA|INEXIGIBILIDADE|CONCORRÊNCIA)\s+\d{1,6}/\d{4}$")
        .expect("valid process pattern")
});

/// `NNNNN-NN.NNNN.N.NN.NN.NN`
pub static PROCESS_NUMBER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{5,11}-\d{2}\.\d{4}\.\d\.\d{2}\.\d{2}\.\d{2}$")
        .expect("valid process number pattern")
});

pub static SIX_DIGITS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{6}$").expect("valid six digit pattern"));

pub const CODE_MAX_LEN: usize = 20;
pub const DESCRIPTION_MIN_LEN: usize = 10;
pub const DESCRIPTION_MAX_LEN: usize = 200;
pub const PROCESS_MAX_LEN: usize = 50;
pub const PROCESS_NUMBER_MAX_LEN: usize = 30;
pub const UNIT_VALUE_MIN: f64 = 0.01;
pub const UNIT_VALUE_MAX: f64 = 9_999_999.99;
pub const QUANTITY_MIN: u32 = 1;
pub const QUANTITY_MAX: u32 = 999_999;
pub const FISCAL_YEAR_MIN: i32 = 2000;
pub const FISCAL_YEAR_MAX: i32 = 2050;

/// A single failed rule on a draft field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Wire name of the field (e.g. `codigo`)
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Check every rule and collect all failures.
pub fn validate_draft(draft: &ItemDraft) -> Vec<FieldError> {
    let mut errors = Vec::new();

    check_required_text(
        &mut errors,
        "codigo",
        &draft.code,
        Some(CODE_MAX_LEN),
        Some((&CODE_PATTERN, "expected YYYY-ACRONYM-NNN (e.g. 2024-MAT-001)")),
    );

    let description_len = draft.description.trim().chars().count();
    if description_len == 0 {
        errors.push(FieldError::new("descricao", "required"));
    } else if description_len < DESCRIPTION_MIN_LEN {
        errors.push(FieldError::new(
            "descricao",
            format!("at least {} characters", DESCRIPTION_MIN_LEN),
        ));
    } else if description_len > DESCRIPTION_MAX_LEN {
        errors.push(FieldError::new(
            "descricao",
            format!("at most {} characters", DESCRIPTION_MAX_LEN),
        ));
    }

    if !draft.unit_value.is_finite() || draft.unit_value < UNIT_VALUE_MIN {
        errors.push(FieldError::new(
            "valorUnitario",
            format!("minimum value is {:.2}", UNIT_VALUE_MIN),
        ));
    } else if draft.unit_value > UNIT_VALUE_MAX {
        errors.push(FieldError::new(
            "valorUnitario",
            format!("maximum value is {:.2}", UNIT_VALUE_MAX),
        ));
    }

    if draft.quantity < QUANTITY_MIN {
        errors.push(FieldError::new(
            "quantidade",
            format!("minimum quantity is {}", QUANTITY_MIN),
        ));
    } else if draft.quantity > QUANTITY_MAX {
        errors.push(FieldError::new(
            "quantidade",
            format!("maximum quantity is {}", QUANTITY_MAX),
        ));
    }

    if draft.department.trim().is_empty() {
        errors.push(FieldError::new("orgaoResponsavel", "required"));
    }

    check_required_text(
        &mut errors,
        "processo",
        &draft.process,
        Some(PROCESS_MAX_LEN),
        Some((&PROCESS_PATTERN, "expected KIND NNN/YYYY (e.g. PREGÃO 001/2024)")),
    );

    if let Some(number) = non_empty(draft.process_number.as_deref()) {
        if number.chars().count() > PROCESS_NUMBER_MAX_LEN {
            errors.push(FieldError::new(
                "numeroProcesso",
                format!("at most {} characters", PROCESS_NUMBER_MAX_LEN),
            ));
        } else if !PROCESS_NUMBER_PATTERN.is_match(number) {
            errors.push(FieldError::new(
                "numeroProcesso",
                "expected NNNNN-NN.NNNN.N.NN.NN.NN",
            ));
        }
    }

    match draft.fiscal_year {
        None => errors.push(FieldError::new("exercicioFiscal", "required")),
        Some(year) if !(FISCAL_YEAR_MIN..=FISCAL_YEAR_MAX).contains(&year) => {
            errors.push(FieldError::new(
                "exercicioFiscal",
                format!("must be between {} and {}", FISCAL_YEAR_MIN, FISCAL_YEAR_MAX),
            ));
        }
        Some(_) => {}
    }

    for (field, value) in [
        ("unidadeOrcamentaria", draft.budget_unit.as_deref()),
        ("fonteRecurso", draft.funding_source.as_deref()),
    ] {
        if let Some(value) = non_empty(value)
            && !SIX_DIGITS_PATTERN.is_match(value)
        {
            errors.push(FieldError::new(field, "expected 6 digits"));
        }
    }

    errors
}

impl ItemDraft {
    /// Fail with every broken rule, or succeed when the draft can be sent.
    pub fn validate(&self) -> Result<()> {
        let errors = validate_draft(self);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(Error::Validation(errors))
        }
    }
}

fn check_required_text(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: &str,
    max_len: Option<usize>,
    pattern: Option<(&Regex, &str)>,
) {
    let value = value.trim();
    if value.is_empty() {
        errors.push(FieldError::new(field, "required"));
        return;
    }

    if let Some(max) = max_len
        && value.chars().count() > max
    {
        errors.push(FieldError::new(field, format!("at most {} characters", max)));
        return;
    }

    if let Some((regex, hint)) = pattern
        && !regex.is_match(value)
    {
        errors.push(FieldError::new(field, hint));
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
