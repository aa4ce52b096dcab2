//! Deterministic layout arithmetic for the wallpaper composition.
//!
//! All geometry derives from the device width/height and the size-scale
//! factor. The month grid is 3 columns by 4 rows; each grid row is as tall as
//! its tallest month block, and the whole column (year label, grid, footer)
//! is centered vertically on the canvas.

use crate::calendar::YearCalendar;
use crate::params::{CalendarSize, Style};

fn round(v: f64) -> u32 {
    v.round() as u32
}

/// Pixel sizes shared by every shape and label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metrics {
    pub width: u32,
    pub height: u32,
    pub base_px: u32,
    /// Base cell shape size everything else scales from.
    pub dot: u32,
    /// Gap between cells within a month block.
    pub gap: u32,
    /// Uniform cell slot; shapes are centered inside it.
    pub slot_w: u32,
    pub slot_h: u32,
    pub month_label_font: u32,
    pub year_font: u32,
    pub footer_font: u32,
    /// Gap between month blocks, both axes.
    pub block_gap: u32,
    pub year_margin: u32,
    pub footer_margin: u32,
}

impl Metrics {
    pub fn new(width: u32, height: u32, size: CalendarSize, style: Style) -> Self {
        let base_px = round(width as f64 / 30.0 * size.scale());
        let dot = round(base_px as f64 * 0.55).max(8);
        let gap = round(dot as f64 * 0.35).max(4);

        let (slot_w, slot_h) = match style {
            Style::Numbers | Style::NumbersBold => (dot + 6, dot + 6),
            Style::Bars => (dot + 4, dot),
            _ => (dot, dot),
        };

        Self {
            width,
            height,
            base_px,
            dot,
            gap,
            slot_w,
            slot_h,
            month_label_font: round(base_px as f64 * 0.45),
            year_font: round(width as f64 * 0.08),
            footer_font: round(width as f64 * 0.035),
            block_gap: round(width as f64 * 0.05),
            year_margin: round(height as f64 * 0.04),
            footer_margin: round(height as f64 * 0.05),
        }
    }

    pub fn month_width(&self) -> u32 {
        7 * self.slot_w + 6 * self.gap
    }

    /// Label line plus its spacing above the week rows.
    pub fn label_block(&self) -> u32 {
        self.month_label_font + self.gap
    }

    pub fn month_height(&self, rows: u32) -> u32 {
        self.label_block() + rows * self.slot_h + rows.saturating_sub(1) * self.gap
    }
}

/// Placement of one month block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthBox {
    pub x: f64,
    pub y: f64,
    pub label_center_y: f64,
    pub grid_top: f64,
}

impl MonthBox {
    /// Center of cell slot `index` (row-major, 7 per row).
    pub fn cell_center(&self, metrics: &Metrics, index: usize) -> (f64, f64) {
        let row = (index / 7) as f64;
        let col = (index % 7) as f64;
        let x = self.x + col * (metrics.slot_w + metrics.gap) as f64 + metrics.slot_w as f64 / 2.0;
        let y =
            self.grid_top + row * (metrics.slot_h + metrics.gap) as f64 + metrics.slot_h as f64 / 2.0;
        (x, y)
    }
}

/// Full placement of the composition on the canvas.
#[derive(Debug, Clone)]
pub struct Layout {
    pub metrics: Metrics,
    pub year_center: (f64, f64),
    pub months: Vec<MonthBox>,
    pub footer_center: Option<(f64, f64)>,
}

impl Layout {
    pub fn compute(metrics: Metrics, calendar: &YearCalendar, has_footer: bool) -> Self {
        let rows: Vec<u32> = calendar.months.iter().map(|m| m.rows()).collect();

        let month_w = metrics.month_width() as f64;
        let grid_w = 3.0 * month_w + 2.0 * metrics.block_gap as f64;
        let grid_left = (metrics.width as f64 - grid_w) / 2.0;

        // Each of the four grid rows is as tall as its tallest month.
        let row_heights: Vec<f64> = rows
            .chunks(3)
            .map(|chunk| {
                chunk
                    .iter()
                    .map(|&r| metrics.month_height(r))
                    .max()
                    .unwrap_or(0) as f64
            })
            .collect();
        let grid_h: f64 =
            row_heights.iter().sum::<f64>() + (row_heights.len().saturating_sub(1)) as f64 * metrics.block_gap as f64;

        let year_h = metrics.year_font as f64;
        let footer_h = if has_footer {
            (metrics.footer_margin + metrics.footer_font) as f64
        } else {
            0.0
        };
        let total_h = year_h + metrics.year_margin as f64 + grid_h + footer_h;
        let top = (metrics.height as f64 - total_h) / 2.0;

        let year_center = (metrics.width as f64 / 2.0, top + year_h / 2.0);

        let grid_top = top + year_h + metrics.year_margin as f64;
        let mut months = Vec::with_capacity(12);
        for (index, _) in rows.iter().enumerate() {
            let grid_row = index / 3;
            let col = index % 3;
            let x = grid_left + col as f64 * (month_w + metrics.block_gap as f64);
            let y = grid_top
                + row_heights[..grid_row].iter().sum::<f64>()
                + grid_row as f64 * metrics.block_gap as f64;
            months.push(MonthBox {
                x,
                y,
                label_center_y: y + metrics.month_label_font as f64 / 2.0,
                grid_top: y + metrics.label_block() as f64,
            });
        }

        let footer_center = has_footer.then(|| {
            (
                metrics.width as f64 / 2.0,
                top + total_h - metrics.footer_font as f64 / 2.0,
            )
        });

        Self {
            metrics,
            year_center,
            months,
            footer_center,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn calendar() -> YearCalendar {
        YearCalendar::new(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap())
    }

    #[test]
    fn test_metrics_for_default_device() {
        let m = Metrics::new(1179, 2556, CalendarSize::Standard, Style::Dots);
        assert_eq!(m.base_px, 39);
        assert_eq!(m.dot, 21);
        assert_eq!(m.gap, 7);
        assert_eq!(m.slot_w, 21);
        assert_eq!(m.year_font, 94);
        assert_eq!(m.block_gap, 59);
    }

    #[test]
    fn test_large_size_scales_dot_by_1_3() {
        let standard = Metrics::new(1179, 2556, CalendarSize::Standard, Style::Dots);
        let large = Metrics::new(1179, 2556, CalendarSize::Large, Style::Dots);
        assert_eq!(standard.dot, 21);
        assert_eq!(large.dot, 28);
        let ratio = large.dot as f64 / standard.dot as f64;
        assert!((ratio - 1.3).abs() < 0.05);
    }

    #[test]
    fn test_dot_and_gap_floors() {
        // A tiny canvas still gets the minimum shape sizes.
        let m = Metrics::new(200, 400, CalendarSize::Small, Style::Dots);
        assert!(m.dot >= 8);
        assert!(m.gap >= 4);
    }

    #[test]
    fn test_slot_tracks_style() {
        let numbers = Metrics::new(1179, 2556, CalendarSize::Standard, Style::Numbers);
        assert_eq!(numbers.slot_w, numbers.dot + 6);
        let bars = Metrics::new(1179, 2556, CalendarSize::Standard, Style::Bars);
        assert_eq!(bars.slot_w, bars.dot + 4);
        assert_eq!(bars.slot_h, bars.dot);
    }

    #[test]
    fn test_three_by_four_month_placement() {
        let metrics = Metrics::new(1179, 2556, CalendarSize::Standard, Style::Dots);
        let layout = Layout::compute(metrics, &calendar(), true);
        assert_eq!(layout.months.len(), 12);

        // Columns repeat every three months.
        assert_eq!(layout.months[0].x, layout.months[3].x);
        assert_eq!(layout.months[1].x, layout.months[4].x);
        assert!(layout.months[1].x > layout.months[0].x);

        // Rows step downward.
        assert_eq!(layout.months[0].y, layout.months[2].y);
        assert!(layout.months[3].y > layout.months[0].y);
        assert!(layout.months[9].y > layout.months[6].y);
    }

    #[test]
    fn test_grid_fits_canvas_width() {
        for size in [CalendarSize::Small, CalendarSize::Standard, CalendarSize::Large] {
            let metrics = Metrics::new(750, 1334, size, Style::Numbers);
            let layout = Layout::compute(metrics, &calendar(), true);
            let rightmost = layout.months[2].x + metrics.month_width() as f64;
            assert!(rightmost <= 750.0, "grid overflows at {size:?}");
            assert!(layout.months[0].x >= 0.0);
        }
    }

    #[test]
    fn test_footer_omitted_when_disabled() {
        let metrics = Metrics::new(1179, 2556, CalendarSize::Standard, Style::Dots);
        let with = Layout::compute(metrics, &calendar(), true);
        let without = Layout::compute(metrics, &calendar(), false);
        assert!(with.footer_center.is_some());
        assert!(without.footer_center.is_none());
        // Without a footer the column re-centers slightly lower.
        assert!(without.year_center.1 > with.year_center.1);
    }

    #[test]
    fn test_cell_centers_step_by_slot_and_gap() {
        let metrics = Metrics::new(1179, 2556, CalendarSize::Standard, Style::Dots);
        let layout = Layout::compute(metrics, &calendar(), true);
        let month = &layout.months[0];
        let (x0, y0) = month.cell_center(&metrics, 0);
        let (x1, _) = month.cell_center(&metrics, 1);
        let (_, y7) = month.cell_center(&metrics, 7);
        assert_eq!(x1 - x0, (metrics.slot_w + metrics.gap) as f64);
        assert_eq!(y7 - y0, (metrics.slot_h + metrics.gap) as f64);
    }
}
