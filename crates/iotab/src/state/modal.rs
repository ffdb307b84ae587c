/// Enlarged-chart modal state for the initial-analysis screen.

/// The chart views that can be enlarged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    OutputPerSektor,
    KomposisiEkonomi,
}

impl ChartKind {
    pub fn title(&self) -> &'static str {
        match self {
            ChartKind::OutputPerSektor => "Output per Sektor",
            ChartKind::KomposisiEkonomi => "Komposisi Ekonomi",
        }
    }
}

/// Which, if any, enlarged chart is presented over the screen.
///
/// Opening while already open replaces the variant; closing from any state
/// yields `Closed` and is idempotent. Reset to `Closed` on navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartModal {
    #[default]
    Closed,
    Open(ChartKind),
}

impl ChartModal {
    pub fn open(&mut self, kind: ChartKind) {
        *self = ChartModal::Open(kind);
    }

    pub fn close(&mut self) {
        *self = ChartModal::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, ChartModal::Open(_))
    }

    pub fn kind(&self) -> Option<ChartKind> {
        match self {
            ChartModal::Closed => None,
            ChartModal::Open(kind) => Some(*kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        assert_eq!(ChartModal::default(), ChartModal::Closed);
    }

    #[test]
    fn test_open_replaces_variant() {
        let mut modal = ChartModal::default();
        modal.open(ChartKind::OutputPerSektor);
        assert_eq!(modal.kind(), Some(ChartKind::OutputPerSektor));

        // Re-opening with another variant replaces it, never stacks.
        modal.open(ChartKind::KomposisiEkonomi);
        assert_eq!(modal, ChartModal::Open(ChartKind::KomposisiEkonomi));
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut modal = ChartModal::Open(ChartKind::KomposisiEkonomi);
        modal.close();
        assert_eq!(modal, ChartModal::Closed);
        assert_eq!(modal.kind(), None);

        modal.close();
        assert_eq!(modal, ChartModal::Closed);
    }
}
