//! Enlarged chart overlay for the initial-analysis screen.

use ratatui::{Frame, layout::Constraint, style::Color};

use iotab_core::dataset;

use crate::components::charts::{self, BarSpec, SECTOR_COLORS};
use crate::state::ChartKind;
use crate::util::format::format_thousands;

use super::{HelpText, render_modal_frame};

/// Render the chosen chart nearly full-screen.
pub fn render_chart_modal(frame: &mut Frame, kind: ChartKind) {
    let area = frame.area();
    let width = area.width.saturating_sub(8).max(40);
    let height = area.height.saturating_sub(4).max(12);

    let mf = render_modal_frame(
        frame,
        kind.title(),
        width,
        height,
        Color::Cyan,
        &[
            Constraint::Min(1),    // Chart
            Constraint::Length(1), // Help text
        ],
    );

    match kind {
        ChartKind::OutputPerSektor => {
            let bars: Vec<BarSpec> = dataset::sector_outputs()
                .iter()
                .enumerate()
                .map(|(idx, s)| BarSpec {
                    label: s.sector.to_string(),
                    value: s.output,
                    text: format_thousands(s.output),
                    color: SECTOR_COLORS[idx % SECTOR_COLORS.len()],
                })
                .collect();
            charts::render_bar_chart(frame, mf.chunks[0], "Distribusi output ekonomi", &bars, 0.001);
        }
        ChartKind::KomposisiEkonomi => {
            let entries: Vec<(String, f64)> = dataset::sector_outputs()
                .iter()
                .map(|s| (s.sector.to_string(), s.share))
                .collect();
            charts::render_composition(
                frame,
                mf.chunks[0],
                "Persentase kontribusi setiap sektor",
                &entries,
            );
        }
    }

    let help = HelpText::new()
        .key("[o/c]", Color::Cyan, "ganti grafik")
        .key("[Esc]", Color::Yellow, "tutup")
        .build();
    frame.render_widget(help, mf.chunks[1]);
}
