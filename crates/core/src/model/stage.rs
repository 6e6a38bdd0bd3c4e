use crate::config::LoaderConfigError;

/// Labels shown while a recommendation request is outstanding.
pub const DEFAULT_STAGE_LABELS: [&str; 4] = [
    "Sending your data to the cloud",
    "Performing preprocessing operations",
    "Executing a semantic search using vector database",
    "Prompting LLM using search results from vector database",
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressStage {
    label: String,
}

impl ProgressStage {
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Ordered, non-empty list of progress stages.
///
/// Fixed once built; the animator only ever reads it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StageSequence {
    stages: Vec<ProgressStage>,
}

impl StageSequence {
    /// Builds a sequence from labels.
    ///
    /// # Errors
    ///
    /// Returns `LoaderConfigError::EmptyStages` when no labels are given and
    /// `LoaderConfigError::BlankLabel` when a label is blank.
    pub fn new<I, S>(labels: I) -> Result<Self, LoaderConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stages = labels
            .into_iter()
            .enumerate()
            .map(|(index, label)| {
                let label = label.into().trim().to_string();
                if label.is_empty() {
                    return Err(LoaderConfigError::BlankLabel(index));
                }
                Ok(ProgressStage { label })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if stages.is_empty() {
            return Err(LoaderConfigError::EmptyStages);
        }
        Ok(Self { stages })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    #[must_use]
    pub fn last_index(&self) -> usize {
        self.stages.len() - 1
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ProgressStage> {
        self.stages.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProgressStage> {
        self.stages.iter()
    }
}

impl Default for StageSequence {
    fn default() -> Self {
        Self {
            stages: DEFAULT_STAGE_LABELS
                .iter()
                .map(|label| ProgressStage {
                    label: (*label).to_string(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_sequence() {
        let err = StageSequence::new(Vec::<String>::new()).unwrap_err();
        assert_eq!(err, LoaderConfigError::EmptyStages);
    }

    #[test]
    fn rejects_blank_label() {
        let err = StageSequence::new(["Upload", "  "]).unwrap_err();
        assert_eq!(err, LoaderConfigError::BlankLabel(1));
    }

    #[test]
    fn default_has_four_pipeline_stages() {
        let stages = StageSequence::default();
        assert_eq!(stages.len(), 4);
        assert_eq!(stages.last_index(), 3);
        assert_eq!(
            stages.get(2).map(ProgressStage::label),
            Some("Executing a semantic search using vector database")
        );
    }
}
