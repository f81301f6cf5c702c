//! UI rendering helpers for the terminal user interface.
//!
//! This module draws one playback frame with `ratatui`: the timestamp header,
//! the HRV chart (axes, cursor, two glowing traces), the speed gauge and the
//! controls footer.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Style, Stylize},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, Gauge, GraphType, Padding, Paragraph, Wrap},
};
use std::time::{Duration, Instant};

use crate::app::App;
use crate::config::{ChartSettings, UiSettings};
use crate::session::format_mmss;

/// Upper bound on y-axis labels, whatever the configured tick step.
const MAX_HRV_LABELS: u32 = 101;

/// Key help, in display order.
const CONTROLS: &[(&str, &str)] = &[
    ("+/l/→", "faster"),
    ("-/h/←", "slower"),
    ("0", "normal speed"),
    ("q/esc", "quit"),
];

fn controls_text() -> String {
    CONTROLS
        .iter()
        .map(|(k, v)| format!("[{k}] {v}"))
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Convert an HSB color (hue 0-360, saturation and brightness 0-100) to RGB.
pub fn hsb_to_rgb(hue: f64, saturation: f64, brightness: f64) -> Color {
    let h = hue.rem_euclid(360.0) / 60.0;
    let s = (saturation / 100.0).clamp(0.0, 1.0);
    let v = (brightness / 100.0).clamp(0.0, 1.0);

    let c = v * s;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    let to_u8 = |f: f64| ((f + m) * 255.0).round() as u8;
    Color::Rgb(to_u8(r), to_u8(g), to_u8(b))
}

/// Trace brightness for the pulsing glow, in `[glow_min, glow_max]`.
pub fn glow_brightness(since_launch: Duration, chart: &ChartSettings) -> f64 {
    let ms = since_launch.as_secs_f64() * 1000.0;
    let phase = (ms / chart.glow_period_ms).sin().abs();
    chart.glow_min + phase * (chart.glow_max - chart.glow_min)
}

/// Time-axis labels. `ratatui` spaces labels evenly, so the label times are
/// chosen to be evenly spaced across `0..=duration`, roughly every
/// `tick_seconds`, with at most `max_labels` entries.
fn time_labels(duration: u32, tick_seconds: u32, max_labels: usize) -> Vec<String> {
    if duration == 0 {
        return vec![format_mmss(0)];
    }

    let max_intervals = u32::try_from(max_labels.saturating_sub(1))
        .unwrap_or(u32::MAX)
        .max(1);
    let intervals = (duration / tick_seconds.max(1)).clamp(1, max_intervals);

    (0..=intervals)
        .map(|i| {
            let t = (f64::from(duration) * f64::from(i) / f64::from(intervals)).round();
            format_mmss(t as u64)
        })
        .collect()
}

/// HRV-axis labels from 0 to `max_hrv` every `step`, at most
/// `MAX_HRV_LABELS` of them.
fn hrv_labels(max_hrv: f64, step: f64) -> Vec<String> {
    let mut labels = Vec::new();
    let mut i = 0u32;
    while i < MAX_HRV_LABELS {
        let v = f64::from(i) * step;
        if v > max_hrv + 1e-9 {
            break;
        }
        if v.fract() == 0.0 {
            labels.push(format!("{v:.0}"));
        } else {
            labels.push(format!("{v:.1}"));
        }
        i += 1;
    }
    labels
}

/// Render one frame with the cursor at `elapsed`.
pub fn draw(
    frame: &mut Frame,
    app: &App,
    elapsed: u64,
    now: Instant,
    chart_settings: &ChartSettings,
    ui_settings: &UiSettings,
) {
    let mut constraints = vec![
        Constraint::Length(3),
        Constraint::Min(8),
        Constraint::Length(3),
    ];
    if ui_settings.show_controls {
        constraints.push(Constraint::Length(3));
    }
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.area());

    // Header: playback position
    let header = Paragraph::new(format_mmss(elapsed))
        .bold()
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(ui_settings.header_text.as_str())
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    // Chart
    {
        let ceiling = chart_settings.max_hrv;
        let glow = glow_brightness(app.since_launch(now), chart_settings);
        let solo_color = hsb_to_rgb(chart_settings.solo_hue, chart_settings.saturation, glow);
        let group_color = hsb_to_rgb(chart_settings.group_hue, chart_settings.saturation, glow);

        let solo_points = app.solo_trace.points(elapsed, ceiling);
        let group_points = app.group_trace.points(elapsed, ceiling);
        let x = elapsed as f64;
        let cursor_points = [(x, 0.0), (x, ceiling)];

        let solo_now = app.solo_trace.value_at(elapsed).unwrap_or(0.0);
        let group_now = app.group_trace.value_at(elapsed).unwrap_or(0.0);

        // Cursor first so the traces draw over it.
        let datasets = vec![
            Dataset::default()
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(hsb_to_rgb(0.0, 0.0, 60.0)))
                .data(&cursor_points),
            Dataset::default()
                .name(format!("{} {solo_now:.1}", app.sessions.solo.name))
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(solo_color))
                .data(&solo_points),
            Dataset::default()
                .name(format!("{} {group_now:.1}", app.sessions.group.name))
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(group_color))
                .data(&group_points),
        ];

        let chart = Chart::new(datasets)
            .block(Block::default().borders(Borders::ALL).title(" HRV proxy |ΔBPM| "))
            .x_axis(
                Axis::default()
                    .title("Time →".dark_gray())
                    .bounds([0.0, f64::from(app.duration)])
                    .labels(time_labels(
                        app.duration,
                        chart_settings.time_tick_seconds,
                        chart_settings.max_time_labels,
                    )),
            )
            .y_axis(
                Axis::default()
                    .bounds([0.0, ceiling])
                    .labels(hrv_labels(ceiling, chart_settings.hrv_tick_step)),
            );
        frame.render_widget(chart, chunks[1]);
    }

    // Speed control
    let speed = app.speed();
    let gauge = Gauge::default()
        .block(Block::bordered().title(" speed "))
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(speed.ratio())
        .label(format!("Speed {:.1}x", speed.value()));
    frame.render_widget(gauge, chunks[2]);

    if ui_settings.show_controls {
        let footer = Paragraph::new(controls_text())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" controls ")
                    .padding(Padding {
                        left: 1,
                        right: 0,
                        top: 0,
                        bottom: 0,
                    }),
            )
            .wrap(Wrap { trim: true });
        frame.render_widget(footer, chunks[3]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PlaybackSettings, Settings};
    use crate::session::{Sample, Series, Sessions, Timestamp};
    use ratatui::{Terminal, backend::TestBackend};

    fn app(now: Instant) -> App {
        app_named(now, "solo", "group")
    }

    fn app_named(now: Instant, solo: &str, group: &str) -> App {
        let sample = |t: u32, bpm: f64| Sample::new(Timestamp::from_secs(t), Some(bpm));
        let sessions = Sessions {
            solo: Series::new(solo, (0..=20).map(|t| sample(t, 60.0 + f64::from(t % 3))).collect()),
            group: Series::new(group, (0..=20).map(|t| sample(t, 70.0 + f64::from(t % 5))).collect()),
        };
        App::new(sessions, &PlaybackSettings::default(), now)
    }

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn hsb_to_rgb_primary_and_grey() {
        assert_eq!(hsb_to_rgb(0.0, 100.0, 100.0), Color::Rgb(255, 0, 0));
        assert_eq!(hsb_to_rgb(120.0, 100.0, 100.0), Color::Rgb(0, 255, 0));
        assert_eq!(hsb_to_rgb(240.0, 100.0, 100.0), Color::Rgb(0, 0, 255));
        assert_eq!(hsb_to_rgb(360.0, 100.0, 100.0), Color::Rgb(255, 0, 0));
        assert_eq!(hsb_to_rgb(0.0, 0.0, 60.0), Color::Rgb(153, 153, 153));
        assert_eq!(hsb_to_rgb(210.0, 80.0, 0.0), Color::Rgb(0, 0, 0));
    }

    #[test]
    fn glow_stays_within_configured_range() {
        let chart = ChartSettings::default();
        assert_eq!(glow_brightness(Duration::ZERO, &chart), chart.glow_min);
        for ms in (0..5_000).step_by(37) {
            let g = glow_brightness(Duration::from_millis(ms), &chart);
            assert!(g >= chart.glow_min && g <= chart.glow_max, "{g} at {ms}ms");
        }
    }

    #[test]
    fn time_labels_follow_tick_spacing() {
        assert_eq!(time_labels(15, 5, 12), vec!["00:00", "00:05", "00:10", "00:15"]);
        assert_eq!(time_labels(12, 5, 12), vec!["00:00", "00:06", "00:12"]);
        assert_eq!(time_labels(3, 5, 12), vec!["00:00", "00:03"]);
        assert_eq!(time_labels(0, 5, 12), vec!["00:00"]);
    }

    #[test]
    fn time_labels_are_thinned_for_long_recordings() {
        let labels = time_labels(600, 5, 5);
        assert_eq!(labels, vec!["00:00", "02:30", "05:00", "07:30", "10:00"]);
    }

    #[test]
    fn time_labels_survive_huge_label_limits() {
        let labels = time_labels(20, 5, usize::MAX);
        assert_eq!(labels, vec!["00:00", "00:05", "00:10", "00:15", "00:20"]);
        assert_eq!(time_labels(20, 5, usize::MAX - 1).len(), 5);
    }

    #[test]
    fn hrv_labels_are_capped_for_tiny_steps() {
        let labels = hrv_labels(10.0, 1e-12);
        assert_eq!(labels.len(), MAX_HRV_LABELS as usize);
        assert_eq!(labels[0], "0");
    }

    #[test]
    fn hrv_labels_step_to_ceiling() {
        assert_eq!(hrv_labels(10.0, 2.0), vec!["0", "2", "4", "6", "8", "10"]);
        assert_eq!(hrv_labels(1.0, 0.5), vec!["0", "0.5", "1"]);
        assert_eq!(hrv_labels(5.0, 2.0), vec!["0", "2", "4"]);
    }

    #[test]
    fn draw_shows_timestamp_speed_and_legend() {
        let now = Instant::now();
        let app = app(now);
        let settings = Settings::default();

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|f| ui_draw(f, &app, 7, now, &settings))
            .unwrap();

        let text = screen(&terminal);
        assert!(text.contains("00:07"));
        assert!(text.contains("Speed 1.0x"));
        assert!(text.contains("solo"));
        assert!(text.contains("group"));
        assert!(text.contains("quit"));
    }

    #[test]
    fn legend_uses_series_names_and_current_values() {
        let now = Instant::now();
        let app = app_named(now, "rest", "choir");
        let settings = Settings::default();

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|f| ui_draw(f, &app, 7, now, &settings))
            .unwrap();

        let text = screen(&terminal);
        assert!(text.contains("rest 1.0"));
        assert!(text.contains("choir 1.0"));
    }

    #[test]
    fn draw_without_controls_fits_small_terminals() {
        let now = Instant::now();
        let app = app(now);
        let mut settings = Settings::default();
        settings.ui.show_controls = false;

        let mut terminal = Terminal::new(TestBackend::new(40, 14)).unwrap();
        terminal
            .draw(|f| ui_draw(f, &app, 20, now, &settings))
            .unwrap();

        let text = screen(&terminal);
        assert!(text.contains("00:20"));
        assert!(!text.contains("quit"));
    }

    fn ui_draw(f: &mut Frame, app: &App, elapsed: u64, now: Instant, settings: &Settings) {
        draw(f, app, elapsed, now, &settings.chart, &settings.ui);
    }
}
