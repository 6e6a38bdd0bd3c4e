use advisor_core::model::{LoaderSession, StageSequence};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StageStatus {
    Done,
    Active,
    Pending,
}

impl StageStatus {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Done => "loader-step done",
            Self::Active => "loader-step active",
            Self::Pending => "loader-step",
        }
    }

    #[must_use]
    pub fn marker(self) -> &'static str {
        match self {
            Self::Done => "✓",
            Self::Active => "●",
            Self::Pending => "○",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StageRowVm {
    pub label: String,
    pub status: StageStatus,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoaderVm {
    pub visible: bool,
    pub rows: Vec<StageRowVm>,
}

#[must_use]
pub fn map_loader(stages: &StageSequence, session: &LoaderSession) -> LoaderVm {
    if !session.is_active() {
        return LoaderVm {
            visible: false,
            rows: Vec::new(),
        };
    }

    let current = session.current_index();
    let rows = stages
        .iter()
        .enumerate()
        .map(|(index, stage)| StageRowVm {
            label: stage.label().to_string(),
            status: match index.cmp(&current) {
                std::cmp::Ordering::Less => StageStatus::Done,
                std::cmp::Ordering::Equal => StageStatus::Active,
                std::cmp::Ordering::Greater => StageStatus::Pending,
            },
        })
        .collect();

    LoaderVm {
        visible: true,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_when_session_inactive() {
        let vm = map_loader(&StageSequence::default(), &LoaderSession::idle());
        assert!(!vm.visible);
        assert!(vm.rows.is_empty());
    }

    #[test]
    fn marks_stages_relative_to_current_index() {
        let stages = StageSequence::default();
        let mut session = LoaderSession::started(1);
        session.advance(stages.last_index(), false);
        session.advance(stages.last_index(), false);

        let vm = map_loader(&stages, &session);
        let statuses: Vec<_> = vm.rows.iter().map(|row| row.status).collect();
        assert!(vm.visible);
        assert_eq!(
            statuses,
            [
                StageStatus::Done,
                StageStatus::Done,
                StageStatus::Active,
                StageStatus::Pending,
            ]
        );
        assert_eq!(vm.rows[0].label, "Sending your data to the cloud");
    }
}
