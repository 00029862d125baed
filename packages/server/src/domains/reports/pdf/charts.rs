//! Statistics report: summary figures and one bar chart page per breakdown.

use super::layout::{text_width, Canvas, FontWeight, Rgb8, PAGE_WIDTH};
use crate::domains::reports::statistics::ReportSummary;

pub const REPORT_TITLE: &str = "Relatório da Pastoral Familiar";
pub const MARITAL_CHART_TITLE: &str = "Distribuição por Estado Civil";
pub const SECTOR_CHART_TITLE: &str = "Agentes por Setor";
pub const NO_DATA: &str = "Nenhum dado disponível.";

const MARGIN: f32 = 10.0;
const BAR_HEIGHT: f32 = 10.0;
const BAR_GAP: f32 = 6.0;
const LABEL_COLUMN: f32 = 55.0;
const VALUE_COLUMN: f32 = 25.0;

/// Chart palette, cycled per bar
const PALETTE: [Rgb8; 5] = [
    Rgb8(0, 136, 254),
    Rgb8(0, 196, 159),
    Rgb8(255, 187, 40),
    Rgb8(255, 128, 66),
    Rgb8(136, 132, 216),
];

pub fn statistics_layout(summary: &ReportSummary) -> Canvas {
    let mut canvas = Canvas::new(REPORT_TITLE);

    canvas.centered_text(PAGE_WIDTH / 2.0, 20.0, 20.0, FontWeight::Bold, REPORT_TITLE);
    canvas.text(
        MARGIN,
        32.0,
        12.0,
        FontWeight::Regular,
        format!("Total de Agentes: {}", summary.total),
    );
    canvas.text(
        MARGIN + 95.0,
        32.0,
        12.0,
        FontWeight::Regular,
        format!("Média de Agentes por Setor: {}", summary.average_label()),
    );

    let marital: Vec<(&str, usize)> = summary
        .by_marital_status
        .iter()
        .map(|(status, n)| (status.label(), *n))
        .collect();
    bar_chart(&mut canvas, 45.0, MARITAL_CHART_TITLE, &marital, summary);

    canvas.add_page();
    let sectors: Vec<(&str, usize)> = summary
        .by_sector
        .iter()
        .map(|(sector, n)| (sector.label(), *n))
        .collect();
    bar_chart(&mut canvas, 20.0, SECTOR_CHART_TITLE, &sectors, summary);

    canvas
}

/// Horizontal bars scaled to the largest count
fn bar_chart(canvas: &mut Canvas, top: f32, title: &str, data: &[(&str, usize)], summary: &ReportSummary) {
    canvas.text(MARGIN, top, 14.0, FontWeight::Bold, title);
    canvas.line(MARGIN, top + 3.0, PAGE_WIDTH - MARGIN, top + 3.0, Rgb8::GREY);

    if data.is_empty() {
        canvas.text(MARGIN, top + 15.0, 10.0, FontWeight::Regular, NO_DATA);
        return;
    }

    let max = data.iter().map(|(_, n)| *n).max().unwrap_or(1).max(1);
    let bars_x = MARGIN + LABEL_COLUMN;
    let bars_width = PAGE_WIDTH - MARGIN - VALUE_COLUMN - bars_x;

    let mut y = top + 12.0;
    for (i, (label, count)) in data.iter().enumerate() {
        let text_y = y + BAR_HEIGHT / 2.0 + 1.5;
        let label_x = bars_x - 3.0 - text_width(label, 10.0, FontWeight::Regular);
        canvas.text(label_x.max(MARGIN), text_y, 10.0, FontWeight::Regular, *label);

        let width = bars_width * (*count as f32) / (max as f32);
        canvas.fill_rect(bars_x, y, width, BAR_HEIGHT, PALETTE[i % PALETTE.len()]);
        canvas.text(
            bars_x + width + 3.0,
            text_y,
            10.0,
            FontWeight::Regular,
            format!("{} ({}%)", count, summary.percent(*count)),
        );

        y += BAR_HEIGHT + BAR_GAP;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::member::models::member::fixtures::sample_member;
    use crate::domains::member::models::{MaritalStatus, Sector};
    use crate::domains::reports::pdf::layout::DrawOp;

    #[test]
    fn test_statistics_pages() {
        let mut casado = sample_member("B", "Bruno");
        casado.marital_status = MaritalStatus::Casado;
        casado.sector = Sector::ServicoAVida;
        let summary = ReportSummary::from_members(&[sample_member("A", "Ana"), casado]);

        let canvas = statistics_layout(&summary);
        assert_eq!(canvas.page_count(), 2);

        let first = &canvas.pages[0];
        assert!(first.has_text(REPORT_TITLE));
        assert!(first.has_text("Total de Agentes: 2"));
        assert!(first.has_text("Média de Agentes por Setor: 1.0"));
        assert!(first.has_text("Casado(a)"));
        assert!(first.has_text("1 (50%)"));

        let second = &canvas.pages[1];
        assert!(second.has_text(SECTOR_CHART_TITLE));
        assert!(second.has_text("Serviço à Vida"));
        let bars = second
            .ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Rect { fill: Some(_), .. }))
            .count();
        assert_eq!(bars, 2);
    }

    #[test]
    fn test_empty_statistics() {
        let canvas = statistics_layout(&ReportSummary::from_members(&[]));
        assert!(canvas.pages[0].has_text(NO_DATA));
        assert!(canvas.pages[1].has_text(NO_DATA));
        assert!(canvas.pages[0].has_text("Média de Agentes por Setor: 0"));
    }
}
