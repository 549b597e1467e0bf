use serde::{Deserialize, Serialize};

/// One row of the comparative validation table on the reporting surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelAccuracyEntry {
    pub model: String,
    pub accuracy_pct: f64,
}

/// Hyperparameter card displayed alongside the inference panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelCard {
    pub architecture: String,
    pub hidden_layers: Vec<u32>,
    pub activations: Vec<String>,
    pub optimizer: String,
    pub learning_rate: f64,
    pub loss_function: String,
}

/// Static payload backing the reporting surface.
///
/// Every figure here is an illustrative display constant; nothing is computed
/// from evaluations, and the reporting surface requires no further interface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub entries: Vec<ModelAccuracyEntry>,
    pub accuracy_curve: Vec<f64>,
    pub model_card: ModelCard,
}

impl ValidationReport {
    pub fn standard() -> Self {
        Self {
            entries: vec![
                ModelAccuracyEntry {
                    model: "Traditional statistics".to_string(),
                    accuracy_pct: 72.4,
                },
                ModelAccuracyEntry {
                    model: "MLP baseline".to_string(),
                    accuracy_pct: 84.1,
                },
                ModelAccuracyEntry {
                    model: "MLP + genetic".to_string(),
                    accuracy_pct: 91.3,
                },
            ],
            accuracy_curve: vec![0.5, 0.7, 0.85, 0.91],
            model_card: ModelCard {
                architecture: "MLP (feed-forward)".to_string(),
                hidden_layers: vec![64, 32],
                activations: vec!["ReLU".to_string(), "Sigmoid".to_string()],
                optimizer: "Adam".to_string(),
                learning_rate: 0.001,
                loss_function: "Binary cross-entropy".to_string(),
            },
        }
    }
}
