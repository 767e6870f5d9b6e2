//! Story viewer rendering
//!
//! Layout, top to bottom: segmented progress bar, header (user, age,
//! hold badge), story card, key hints.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
    Frame,
};

use super::media::VideoClock;
use super::theme::{current_theme, Theme};
use crate::player::render::{build_segment_bar, segment_fills, FILLED};
use crate::story::{Media, StoryItem};
use crate::viewer::StoriesViewer;

/// Key hints shown in the footer.
const FOOTER_KEYS: &[(&str, &str)] = &[
    ("←/→", "story"),
    ("↑/↓", "user"),
    ("space", "hold"),
    ("q", "close"),
];

/// Segmented progress bar widget.
pub struct SegmentBar<'a> {
    fills: &'a [f64],
    theme: &'a Theme,
}

impl<'a> SegmentBar<'a> {
    pub fn new(fills: &'a [f64], theme: &'a Theme) -> Self {
        Self { fills, theme }
    }
}

impl Widget for SegmentBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bar = build_segment_bar(area.width as usize, self.fills);
        Line::from(segment_spans(&bar, self.theme)).render(area, buf);
    }
}

/// Split a segment bar into styled runs (filled = accent, rest = dim).
fn segment_spans(bar: &str, theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut run = String::new();
    let mut run_filled = false;
    for ch in bar.chars() {
        let filled = ch == FILLED;
        if filled != run_filled && !run.is_empty() {
            spans.push(styled_run(std::mem::take(&mut run), run_filled, theme));
        }
        run_filled = filled;
        run.push(ch);
    }
    if !run.is_empty() {
        spans.push(styled_run(run, run_filled, theme));
    }
    spans
}

fn styled_run(text: String, filled: bool, theme: &Theme) -> Span<'static> {
    let style = if filled {
        theme.accent_style()
    } else {
        theme.text_secondary_style()
    };
    Span::styled(text, style)
}

/// Format a position in seconds as MM:SS.
pub fn format_clock(seconds: f64) -> String {
    let total_secs = seconds.max(0.0) as u64;
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}

/// Draw the whole viewer.
pub fn draw(frame: &mut Frame, viewer: &StoriesViewer, video: Option<&VideoClock>) {
    let theme = current_theme();
    let area = frame.area();

    let (Some(group), Some(engine)) = (viewer.current_group(), viewer.engine()) else {
        let empty = Paragraph::new("No stories")
            .style(theme.text_secondary_style())
            .alignment(Alignment::Center);
        frame.render_widget(empty, centered_rect(50, 20, area));
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    let state = engine.state();
    let fills = segment_fills(engine.items().len(), state);
    frame.render_widget(SegmentBar::new(&fills, &theme), rows[0]);

    let item = engine.current_item();
    frame.render_widget(
        Paragraph::new(header_line(&group.user.username, item, state.paused, &theme)),
        rows[1],
    );

    render_story(frame, rows[2], item, video, &theme);

    let footer = Paragraph::new(Line::from(build_footer_spans(FOOTER_KEYS, &theme)))
        .alignment(Alignment::Center);
    frame.render_widget(footer, rows[3]);
}

fn header_line(username: &str, item: &StoryItem, paused: bool, theme: &Theme) -> Line<'static> {
    let mut spans = vec![
        Span::raw(" "),
        Span::styled(format!("@{}", username), theme.accent_bold_style()),
    ];
    if !item.time_ago.is_empty() {
        spans.push(Span::styled(
            format!(" · {}", item.time_ago),
            theme.text_secondary_style(),
        ));
    }
    if paused {
        spans.push(Span::styled("  ⏸ held", theme.paused_style()));
    }
    Line::from(spans)
}

fn render_story(
    frame: &mut Frame,
    area: Rect,
    item: &StoryItem,
    video: Option<&VideoClock>,
    theme: &Theme,
) {
    match &item.media {
        Media::Text { background_color } => {
            let background = theme.story_background(background_color.as_deref());
            frame.render_widget(Block::default().style(Style::default().bg(background)), area);
            let caption = Paragraph::new(item.caption.clone())
                .style(theme.text_style().bg(background))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            frame.render_widget(caption, centered_rect(80, 40, area));
        }
        Media::Image { url } => {
            let lines = media_lines("image", url.as_deref(), None, &item.caption, theme);
            render_card(frame, area, lines);
        }
        Media::Video { url, .. } => {
            let clock = video.map(|v| (v.position(), v.duration(), v.is_playing()));
            let lines = media_lines("video", url.as_deref(), clock, &item.caption, theme);
            render_card(frame, area, lines);
        }
    }
}

fn media_lines(
    kind: &str,
    url: Option<&str>,
    clock: Option<(f64, f64, bool)>,
    caption: &str,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let mut lines = vec![Line::styled(format!("[{}]", kind), theme.accent_style())];
    lines.push(Line::styled(
        url.unwrap_or("(no media)").to_string(),
        theme.text_secondary_style(),
    ));
    if let Some((position, duration, playing)) = clock {
        let icon = if playing { '▶' } else { '⏸' };
        lines.push(Line::styled(
            format!(
                "{} {} / {}",
                icon,
                format_clock(position),
                format_clock(duration)
            ),
            theme.text_secondary_style(),
        ));
    }
    if !caption.is_empty() {
        lines.push(Line::raw(""));
        lines.push(Line::styled(caption.to_string(), theme.text_style()));
    }
    lines
}

fn render_card(frame: &mut Frame, area: Rect, lines: Vec<Line<'static>>) {
    let card = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(card, centered_rect(80, 60, area));
}

/// Build styled spans for footer keybinding hints.
///
/// Keys use the accent color, descriptions the secondary color, and
/// entries are separated by " | ".
fn build_footer_spans(keys: &[(&str, &str)], theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(keys.len() * 3);
    for (i, (key, desc)) in keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", theme.text_secondary_style()));
        }
        spans.push(Span::styled(key.to_string(), theme.accent_style()));
        spans.push(Span::styled(
            format!(": {}", desc),
            theme.text_secondary_style(),
        ));
    }
    spans
}

/// Create a centered layout with the given constraints.
///
/// Returns the center area that can be used for content.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical_layout[1])[1]
}
