/// Route identifiers for the navigable views.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Upload,
    AnalysisInitial,
    AnalysisMultiplier,
    AnalysisShock,
    AnalysisFinal,
    /// Fallback for unrecognized paths.
    NotFound,
}

impl Route {
    /// The five analysis steps, in flow order.
    pub const STEPS: [Route; 5] = [
        Route::Upload,
        Route::AnalysisInitial,
        Route::AnalysisMultiplier,
        Route::AnalysisShock,
        Route::AnalysisFinal,
    ];

    /// Parse a path-like identifier; anything unrecognized falls back to
    /// the not-found view.
    pub fn parse(path: &str) -> Self {
        match path.trim().trim_end_matches('/') {
            "" | "/" => Route::Home,
            "/upload" => Route::Upload,
            "/analysis-initial" => Route::AnalysisInitial,
            "/analysis-multiplier" => Route::AnalysisMultiplier,
            "/analysis-shock" => Route::AnalysisShock,
            "/analysis-final" => Route::AnalysisFinal,
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Upload => "/upload",
            Route::AnalysisInitial => "/analysis-initial",
            Route::AnalysisMultiplier => "/analysis-multiplier",
            Route::AnalysisShock => "/analysis-shock",
            Route::AnalysisFinal => "/analysis-final",
            Route::NotFound => "/404",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Beranda",
            Route::Upload => "Upload Tabel",
            Route::AnalysisInitial => "Analisis Awal",
            Route::AnalysisMultiplier => "Analisis Multiplier",
            Route::AnalysisShock => "Analisis Shock",
            Route::AnalysisFinal => "Analisis Akhir",
            Route::NotFound => "Halaman Tidak Ditemukan",
        }
    }

    /// Position within the guided flow, if this route is one of the steps.
    pub fn step_index(&self) -> Option<usize> {
        Route::STEPS.iter().position(|r| r == self)
    }

    pub fn next_step(&self) -> Option<Route> {
        let idx = self.step_index()?;
        Route::STEPS.get(idx + 1).copied()
    }

    pub fn prev_step(&self) -> Option<Route> {
        match self.step_index()? {
            0 => None,
            idx => Route::STEPS.get(idx - 1).copied(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_paths() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/upload"), Route::Upload);
        assert_eq!(Route::parse("/analysis-shock/"), Route::AnalysisShock);
        for route in Route::STEPS {
            assert_eq!(Route::parse(route.path()), route);
        }
    }

    #[test]
    fn test_unrecognized_path_falls_back() {
        assert_eq!(Route::parse("/does-not-exist"), Route::NotFound);
        assert_eq!(Route::parse("/upload/extra"), Route::NotFound);
    }

    #[test]
    fn test_step_order() {
        assert_eq!(Route::Upload.next_step(), Some(Route::AnalysisInitial));
        assert_eq!(Route::Upload.prev_step(), None);
        assert_eq!(Route::AnalysisFinal.next_step(), None);
        assert_eq!(
            Route::AnalysisShock.prev_step(),
            Some(Route::AnalysisMultiplier)
        );
        assert_eq!(Route::Home.step_index(), None);
    }
}
