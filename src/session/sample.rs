use std::fmt;

/// Ground-truth or predicted class of a cell sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellLabel {
    Benign,
    Malignant,
    /// Placeholder while a batch is still loading.
    Unknown,
}

impl CellLabel {
    /// Map a service class index (`0` benign, `1` malignant).
    pub fn from_class(class: u8) -> Self {
        match class {
            0 => Self::Benign,
            1 => Self::Malignant,
            _ => Self::Unknown,
        }
    }

    pub fn class(self) -> Option<u8> {
        match self {
            Self::Benign => Some(0),
            Self::Malignant => Some(1),
            Self::Unknown => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Benign => "benign",
            Self::Malignant => "malignant",
            Self::Unknown => "loading",
        }
    }
}

impl fmt::Display for CellLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One labeled record: measured features in service order plus its true class.
#[derive(Clone, Debug, PartialEq)]
pub struct Sample {
    features: Vec<f64>,
    label: CellLabel,
}

impl Sample {
    pub fn new(features: Vec<f64>, label: CellLabel) -> Self {
        Self { features, label }
    }

    pub fn features(&self) -> &[f64] {
        &self.features
    }

    pub fn label(&self) -> CellLabel {
        self.label
    }
}

/// Raw output pair of the network; not guaranteed to sum to one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RawScores {
    pub benign: f64,
    pub malignant: f64,
}

/// Result returned by the classification endpoint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Classification {
    pub predicted_class: u8,
    pub raw: RawScores,
}

impl Classification {
    pub fn predicted_label(&self) -> CellLabel {
        CellLabel::from_class(self.predicted_class)
    }

    /// Whether the prediction matches the sample's ground truth.
    pub fn matches(&self, sample: &Sample) -> bool {
        sample.label().class() == Some(self.predicted_class)
    }
}
