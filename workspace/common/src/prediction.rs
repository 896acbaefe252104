use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// US state a startup operates in. These are the categories the model was trained on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq, Default)]
pub enum StartupState {
    #[default]
    #[serde(rename = "New York")]
    NewYork,
    California,
    Florida,
}

impl StartupState {
    pub const ALL: [StartupState; 3] = [Self::NewYork, Self::California, Self::Florida];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NewYork => "New York",
            Self::California => "California",
            Self::Florida => "Florida",
        }
    }
}

impl fmt::Display for StartupState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StartupState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|state| state.as_str() == s.trim())
            .ok_or_else(|| format!("Unknown state: {}", s))
    }
}

/// The three spend figures a prediction is made from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SpendInputs {
    pub rd_spend: f64,
    pub administration: f64,
    pub marketing_spend: f64,
}

impl SpendInputs {
    /// Sum of all spend figures, shown as "Expenses" next to the predicted profit.
    pub fn total(&self) -> f64 {
        self.rd_spend + self.administration + self.marketing_spend
    }
}

/// Body of `POST /predict`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct PredictionRequest {
    pub rd_spend: f64,
    pub administration: f64,
    pub marketing_spend: f64,
    pub state: StartupState,
}

impl PredictionRequest {
    pub fn new(inputs: SpendInputs, state: StartupState) -> Self {
        Self {
            rd_spend: inputs.rd_spend,
            administration: inputs.administration,
            marketing_spend: inputs.marketing_spend,
            state,
        }
    }

    pub fn inputs(&self) -> SpendInputs {
        SpendInputs {
            rd_spend: self.rd_spend,
            administration: self.administration,
            marketing_spend: self.marketing_spend,
        }
    }
}

/// Successful response of `POST /predict`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct PredictionResponse {
    pub prediction: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_serializes_with_service_field_names() {
        let request = PredictionRequest::new(
            SpendInputs {
                rd_spend: 165349.2,
                administration: 136897.8,
                marketing_spend: 471784.1,
            },
            StartupState::NewYork,
        );

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "rd_spend": 165349.2,
                "administration": 136897.8,
                "marketing_spend": 471784.1,
                "state": "New York"
            })
        );
    }

    #[test]
    fn state_parses_from_select_values() {
        assert_eq!("California".parse::<StartupState>(), Ok(StartupState::California));
        assert_eq!(" Florida ".parse::<StartupState>(), Ok(StartupState::Florida));
        assert!("Texas".parse::<StartupState>().is_err());
    }

    #[test]
    fn total_adds_all_three_spends() {
        let inputs = SpendInputs {
            rd_spend: 100.0,
            administration: 50.5,
            marketing_spend: 25.25,
        };
        assert_eq!(inputs.total(), 175.75);
    }

    #[test]
    fn response_ignores_extra_fields() {
        let response: PredictionResponse =
            serde_json::from_str(r#"{"prediction": 191792.06, "model": "rf"}"#).unwrap();
        assert_eq!(response.prediction, 191792.06);
    }
}
