use crate::prediction::{PredictionRequest, SpendInputs, StartupState};
use thiserror::Error;

/// Message shown when any of the numeric fields does not hold a number.
pub const INVALID_NUMBER_MESSAGE: &str = "Please enter valid numeric values.";

/// Numeric field of the prediction form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpendField {
    RdSpend,
    Administration,
    MarketingSpend,
}

impl SpendField {
    /// Form control name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::RdSpend => "rd",
            Self::Administration => "admin",
            Self::MarketingSpend => "market",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::RdSpend => "R&D Spend",
            Self::Administration => "Administration",
            Self::MarketingSpend => "Marketing Spend",
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum FormError {
    #[error("{} is not a valid number: {:?}", .field.label(), .value)]
    InvalidNumber { field: SpendField, value: String },
    #[error("{0}")]
    InvalidState(String),
}

impl FormError {
    /// Text for the blocking alert shown to the user.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidNumber { .. } => INVALID_NUMBER_MESSAGE,
            Self::InvalidState(_) => "Please select a valid state.",
        }
    }
}

/// Raw values read from the prediction form controls.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PredictionForm {
    pub rd: String,
    pub admin: String,
    pub market: String,
    pub state: String,
}

impl PredictionForm {
    /// Validate the raw field values and build the request payload.
    pub fn to_request(&self) -> Result<PredictionRequest, FormError> {
        let inputs = SpendInputs {
            rd_spend: parse_amount(SpendField::RdSpend, &self.rd)?,
            administration: parse_amount(SpendField::Administration, &self.admin)?,
            marketing_spend: parse_amount(SpendField::MarketingSpend, &self.market)?,
        };

        let state = if self.state.trim().is_empty() {
            StartupState::default()
        } else {
            self.state.parse::<StartupState>().map_err(FormError::InvalidState)?
        };

        Ok(PredictionRequest::new(inputs, state))
    }
}

/// Parse a spend field. Surrounding whitespace is ignored; the rest must be a finite number.
pub fn parse_amount(field: SpendField, raw: &str) -> Result<f64, FormError> {
    let invalid = || FormError::InvalidNumber {
        field,
        value: raw.to_string(),
    };

    let value = raw.trim().parse::<f64>().map_err(|_| invalid())?;
    if !value.is_finite() {
        return Err(invalid());
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(rd: &str, admin: &str, market: &str) -> PredictionForm {
        PredictionForm {
            rd: rd.to_string(),
            admin: admin.to_string(),
            market: market.to_string(),
            state: "Florida".to_string(),
        }
    }

    #[test]
    fn valid_form_builds_request() {
        let request = form("1000", " 2500.5 ", "0").to_request().unwrap();
        assert_eq!(request.rd_spend, 1000.0);
        assert_eq!(request.administration, 2500.5);
        assert_eq!(request.marketing_spend, 0.0);
        assert_eq!(request.state, StartupState::Florida);
    }

    #[test]
    fn first_invalid_field_is_reported() {
        let err = form("1000", "abc", "").to_request().unwrap_err();
        assert_eq!(
            err,
            FormError::InvalidNumber {
                field: SpendField::Administration,
                value: "abc".to_string()
            }
        );
        assert_eq!(err.user_message(), INVALID_NUMBER_MESSAGE);
    }

    #[test]
    fn empty_and_non_finite_values_are_rejected() {
        for raw in ["", "   ", "NaN", "inf", "-infinity", "12abc"] {
            assert!(
                parse_amount(SpendField::RdSpend, raw).is_err(),
                "{:?} should be rejected",
                raw
            );
        }
    }

    #[test]
    fn negative_and_exponent_values_are_numbers() {
        assert_eq!(parse_amount(SpendField::MarketingSpend, "-5").unwrap(), -5.0);
        assert_eq!(parse_amount(SpendField::MarketingSpend, "1e3").unwrap(), 1000.0);
    }

    #[test]
    fn blank_state_defaults_to_new_york() {
        let mut f = form("1", "2", "3");
        f.state = String::new();
        assert_eq!(f.to_request().unwrap().state, StartupState::NewYork);

        f.state = "Ohio".to_string();
        assert!(matches!(f.to_request(), Err(FormError::InvalidState(_))));
    }
}
