use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RsiIndicator {
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacdIndicator {
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
    /// Histogram one bar earlier, kept for slope classification.
    pub prev_histogram: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<(u32, u32, u32)>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdxIndicator {
    pub value: f64,
    pub plus_di: f64,
    pub minus_di: f64,
    pub period: u32,
}

/// Pivot formula variants computed from the prior completed bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PivotKind {
    Traditional,
    Fibonacci,
    Woodie,
    Camarilla,
}

impl PivotKind {
    pub fn all() -> [PivotKind; 4] {
        [
            PivotKind::Traditional,
            PivotKind::Fibonacci,
            PivotKind::Woodie,
            PivotKind::Camarilla,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            PivotKind::Traditional => "Traditional",
            PivotKind::Fibonacci => "Fibonacci",
            PivotKind::Woodie => "Woodie",
            PivotKind::Camarilla => "Camarilla",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PivotLevels {
    pub kind: PivotKind,
    pub pp: f64,
    pub r1: f64,
    pub r2: f64,
    pub r3: f64,
    pub s1: f64,
    pub s2: f64,
    pub s3: f64,
}
