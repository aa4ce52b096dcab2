//! Wallpaper composition: per-cell color rules, per-style shapes, footer
//! text, and assembly of the whole image as an SVG document for the
//! rasterizer.

use std::fmt::Write;

use crate::calendar::{self, DayState, YearCalendar};
use crate::layout::{Layout, Metrics, MonthBox};
use crate::params::{FooterKind, Style, WallpaperConfig, WeekendMode};

/// Resolved fill color for one cell.
///
/// Weekend emphasis reuses the today/future colors with a fixed alpha suffix
/// (`66` on past weekends, `aa` on future weekends in `all` mode).
pub fn cell_color(
    config: &WallpaperConfig,
    state: DayState,
    weekend: bool,
) -> String {
    let theme = &config.theme;
    match state {
        DayState::Today => theme.today.to_string(),
        DayState::Past => {
            if config.weekend_mode != WeekendMode::None && weekend {
                format!("{}66", theme.today)
            } else {
                theme.past.to_string()
            }
        }
        DayState::Future => {
            if config.weekend_mode == WeekendMode::All && weekend {
                format!("{}aa", theme.future)
            } else {
                theme.future.to_string()
            }
        }
    }
}

/// Footer line for the chosen variant, `None` for `FooterKind::None`.
///
/// Wording is fixed to the uk strings regardless of the display language;
/// the upstream design ships it that way for every locale.
pub fn footer_text(kind: FooterKind, calendar: &YearCalendar) -> Option<String> {
    let facts = &calendar.facts;
    match kind {
        FooterKind::None => None,
        FooterKind::DaysLeft => Some(format!("{} днів залишилось", facts.days_left)),
        FooterKind::DaysPassed => Some(format!("{} днів пройдено", facts.day_of_year)),
        FooterKind::PercentLeft => Some(format!("{}% залишилось", facts.percent_left)),
        FooterKind::PercentPassed => Some(format!("{}% пройдено", facts.percent_passed)),
        FooterKind::DaysLeftPercentLeft => Some(format!(
            "{} днів · {}% залишилось",
            facts.days_left, facts.percent_left
        )),
    }
}

fn push_text(
    svg: &mut String,
    x: f64,
    y: f64,
    font_size: u32,
    weight: u32,
    fill: &str,
    opacity: f64,
    letter_spacing_em: f64,
    anchor: &str,
    content: &str,
) {
    let spacing = letter_spacing_em * font_size as f64;
    let _ = write!(
        svg,
        r#"<text x="{x:.1}" y="{y:.1}" font-size="{font_size}" font-weight="{weight}" fill="{fill}" opacity="{opacity}" letter-spacing="{spacing:.1}" text-anchor="{anchor}" dominant-baseline="middle">{content}</text>"#
    );
}

fn push_centered_rect(svg: &mut String, cx: f64, cy: f64, w: f64, h: f64, rx: f64, fill: &str) {
    let _ = write!(
        svg,
        r#"<rect x="{:.1}" y="{:.1}" width="{w:.1}" height="{h:.1}" rx="{rx:.1}" fill="{fill}"/>"#,
        cx - w / 2.0,
        cy - h / 2.0,
    );
}

fn push_outlined_rect(svg: &mut String, cx: f64, cy: f64, w: f64, h: f64, rx: f64, stroke: &str) {
    let _ = write!(
        svg,
        r#"<rect x="{:.1}" y="{:.1}" width="{w:.1}" height="{h:.1}" rx="{rx:.1}" fill="none" stroke="{stroke}" stroke-width="1"/>"#,
        cx - w / 2.0,
        cy - h / 2.0,
    );
}

/// Emit one day cell centered at (cx, cy).
fn push_cell(
    svg: &mut String,
    config: &WallpaperConfig,
    metrics: &Metrics,
    cx: f64,
    cy: f64,
    day: u32,
    state: DayState,
    weekend: bool,
) {
    let color = cell_color(config, state, weekend);
    let is_today = state == DayState::Today;
    let is_future = state == DayState::Future;
    let dot = metrics.dot as f64;
    let future_col = config.theme.future;

    match config.style {
        Style::Numbers | Style::NumbersBold => {
            if is_today {
                let r = (metrics.dot + 6) as f64 / 2.0;
                let _ = write!(
                    svg,
                    r#"<circle cx="{cx:.1}" cy="{cy:.1}" r="{r:.1}" fill="{color}20"/>"#
                );
            }
            let weight = if config.style == Style::NumbersBold {
                700
            } else {
                400
            };
            let font = (dot * 0.7).round() as u32;
            push_text(svg, cx, cy, font, weight, &color, 1.0, 0.0, "middle", &day.to_string());
        }
        Style::Squares | Style::SquaresRounded => {
            let side = if is_today { dot * 1.2 } else { dot };
            let rx = if config.style == Style::SquaresRounded {
                (dot * 0.25).round()
            } else {
                2.0
            };
            if is_future {
                push_outlined_rect(svg, cx, cy, side, side, rx, future_col);
            } else {
                push_centered_rect(svg, cx, cy, side, side, rx, &color);
            }
        }
        Style::Lines => {
            let w = (dot * 0.25).round();
            let h = if is_today { dot * 1.3 } else { dot };
            let fill = if is_future { future_col } else { color.as_str() };
            push_centered_rect(svg, cx, cy, w, h, 2.0, fill);
        }
        Style::Bars => {
            let w = dot + 4.0;
            let h = (dot * 0.5).round();
            let fill = if is_future { future_col } else { color.as_str() };
            push_centered_rect(svg, cx, cy, w, h, 3.0, fill);
        }
        Style::Dots | Style::DotsMini => {
            let base = if config.style == Style::DotsMini {
                (dot * 0.7).round()
            } else {
                dot
            };
            let r = if is_today { base * 1.25 } else { base } / 2.0;
            if is_future {
                let _ = write!(
                    svg,
                    r#"<circle cx="{cx:.1}" cy="{cy:.1}" r="{r:.1}" fill="none" stroke="{future_col}" stroke-width="1"/>"#
                );
            } else {
                let _ = write!(
                    svg,
                    r#"<circle cx="{cx:.1}" cy="{cy:.1}" r="{r:.1}" fill="{color}"/>"#
                );
            }
        }
    }
}

fn push_month(
    svg: &mut String,
    config: &WallpaperConfig,
    calendar: &YearCalendar,
    metrics: &Metrics,
    month_box: &MonthBox,
    month0: u32,
) {
    let facts = &calendar.facts;
    let grid = &calendar.months[month0 as usize];

    let is_current = month0 == facts.month0;
    let (label_fill, label_opacity) = if is_current {
        (config.theme.today, 1.0)
    } else {
        (config.theme.text, 0.4)
    };
    let label = config.locale.months[month0 as usize].to_uppercase();
    push_text(
        svg,
        month_box.x,
        month_box.label_center_y,
        metrics.month_label_font,
        600,
        label_fill,
        label_opacity,
        0.08,
        "start",
        &label,
    );

    for (index, cell) in grid.cells.iter().enumerate() {
        let Some(day) = cell else { continue };
        let (cx, cy) = month_box.cell_center(metrics, index);
        let state = facts.day_state(month0, *day);
        let weekend = calendar::is_weekend(facts.year, month0, *day);
        push_cell(svg, config, metrics, cx, cy, *day, state, weekend);
    }
}

/// Assemble the whole wallpaper as an SVG document.
pub fn build_svg(config: &WallpaperConfig, calendar: &YearCalendar) -> String {
    let metrics = Metrics::new(
        config.device.width,
        config.device.height,
        config.size,
        config.style,
    );
    let has_footer = config.footer != FooterKind::None;
    let layout = Layout::compute(metrics, calendar, has_footer);

    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = metrics.width,
        h = metrics.height,
    );

    // An opacity override replaces the theme background with translucent
    // black; alpha 1 - opacity/100, matching the documented behavior.
    if config.opacity > 0 {
        let alpha = 1.0 - config.opacity as f64 / 100.0;
        let _ = write!(
            svg,
            r##"<rect width="{w}" height="{h}" fill="#000000" fill-opacity="{alpha:.2}"/>"##,
            w = metrics.width,
            h = metrics.height,
        );
    } else {
        let _ = write!(
            svg,
            r#"<rect width="{w}" height="{h}" fill="{bg}"/>"#,
            w = metrics.width,
            h = metrics.height,
            bg = config.theme.bg,
        );
    }

    let (year_x, year_y) = layout.year_center;
    push_text(
        &mut svg,
        year_x,
        year_y,
        metrics.year_font,
        700,
        config.theme.text,
        0.15,
        0.1,
        "middle",
        &calendar.facts.year.to_string(),
    );

    for month0 in 0..12u32 {
        push_month(
            &mut svg,
            config,
            calendar,
            &metrics,
            &layout.months[month0 as usize],
            month0,
        );
    }

    if let (Some((fx, fy)), Some(text)) = (
        layout.footer_center,
        footer_text(config.footer, calendar),
    ) {
        push_text(
            &mut svg,
            fx,
            fy,
            metrics.footer_font,
            300,
            config.theme.text,
            0.5,
            0.06,
            "middle",
            &text,
        );
    }

    svg.push_str("</svg>");
    svg
}
