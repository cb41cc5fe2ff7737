//! Terminal rendering - a pure function of `RenderState`

use ratatui::{prelude::*, widgets::*};

use crate::constants::{APP_NAME, APP_VERSION};
use crate::messages::ui_events::{Focus, InputMode};
use crate::messages::RenderState;
use crate::models::Poll;

/// Width of the proportional vote bar, in cells
const BAR_WIDTH: usize = 20;
/// Longest option label before truncation in the poll list
const MAX_LABEL_WIDTH: usize = 30;

pub fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let banner_height = if state.error.is_some() { 3 } else { 0 };
    // question + options + spacer + buttons + borders
    let form_height = (state.draft.options.len() as u16 + 5).min(area.height / 2);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(banner_height), // Error banner
            Constraint::Length(form_height),   // Create poll
            Constraint::Min(3),                // Poll list
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    if let Some(error) = state.error {
        draw_error_banner(f, &error.to_string(), chunks[0]);
    }
    draw_create_panel(f, state, chunks[1]);
    draw_poll_list(f, state, chunks[2]);
    draw_status_bar(f, state, chunks[3]);

    if state.show_help {
        draw_help_popup(f, area);
    }
    if let Some(notice) = &state.notice {
        draw_notice_popup(f, notice, area);
    }
}

fn draw_error_banner(f: &mut Frame, message: &str, area: Rect) {
    let banner = Paragraph::new(message.to_string())
        .style(Style::default().fg(Color::Red))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title(" Error "),
        );
    f.render_widget(banner, area);
}

fn field_style(state: &RenderState, field: Focus) -> Style {
    if state.is_submitting {
        Style::default().fg(Color::DarkGray)
    } else if state.focus == field && state.input_mode == InputMode::Editing {
        Style::default().fg(Color::Yellow)
    } else if state.focus == field {
        Style::default().fg(Color::Cyan).bold()
    } else {
        Style::default()
    }
}

fn field_line<'a>(label: String, value: &'a str, placeholder: &'a str, style: Style) -> Line<'a> {
    let value_span = if value.is_empty() {
        Span::styled(placeholder, Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(value, style)
    };
    Line::from(vec![Span::styled(label, style), value_span])
}

fn draw_create_panel(f: &mut Frame, state: &RenderState, area: Rect) {
    let draft = &state.draft;
    let mut lines: Vec<Line> = Vec::with_capacity(draft.options.len() + 3);

    lines.push(field_line(
        String::from("Question: "),
        &draft.question,
        "Enter your question",
        field_style(state, Focus::Question),
    ));
    for (i, option) in draft.options.iter().enumerate() {
        lines.push(field_line(
            format!("Option {}: ", i + 1),
            option,
            "",
            field_style(state, Focus::Option(i)),
        ));
    }
    lines.push(Line::raw(""));

    let submit = if state.is_submitting { "Creating..." } else { "Create Poll" };
    let button_style = if state.is_submitting {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Blue).bold()
    };
    lines.push(Line::from(vec![
        Span::styled("[a] Add Option", button_style),
        Span::raw("   "),
        Span::styled(format!("[s] {}", submit), button_style),
    ]));

    let border_style = if state.focus.is_form_field() {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    // Keep the focused field visible when the form is taller than the panel
    let focused_row = match state.focus {
        Focus::Question | Focus::Polls => 0,
        Focus::Option(i) => i + 1,
    };
    let inner_height = area.height.saturating_sub(2) as usize;
    let scroll = (focused_row + 1).saturating_sub(inner_height) as u16;

    // Column just past the focused value, relative to the panel's inner area
    let cursor_col = if state.input_mode == InputMode::Editing {
        match state.focus {
            Focus::Question => Some(("Question: ".len(), draft.question.as_str())),
            Focus::Option(i) => draft
                .options
                .get(i)
                .map(|o| (format!("Option {}: ", i + 1).len(), o.as_str())),
            Focus::Polls => None,
        }
        .map(|(label, value)| (label + Span::raw(value).width()) as u16)
    } else {
        None
    };

    let form = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(" Create New Poll "),
        )
        .scroll((scroll, 0));
    f.render_widget(form, area);

    if let Some(col) = cursor_col {
        let max_x = area.x + area.width.saturating_sub(2);
        let cursor_x = (area.x + 1 + col).min(max_x);
        let cursor_y = area.y + 1 + (focused_row as u16).saturating_sub(scroll);
        f.set_cursor_position(Position::new(cursor_x, cursor_y));
    }
}

/// Filled/empty bar for a percentage in 0..=100
pub fn vote_bar(percent: f64, width: usize) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

fn display_width(text: &str) -> usize {
    Span::raw(text).width()
}

/// Pad or cut `text` to exactly `width` terminal cells
fn truncate(text: &str, width: usize) -> String {
    let text_width = display_width(text);
    if text_width <= width {
        return format!("{}{}", text, " ".repeat(width - text_width));
    }

    let mut cut = String::new();
    let mut used = 0;
    let mut buf = [0u8; 4];
    for c in text.chars() {
        let w = display_width(c.encode_utf8(&mut buf));
        if used + w > width.saturating_sub(1) {
            break;
        }
        cut.push(c);
        used += w;
    }
    // Wide glyphs can leave a gap before the ellipsis
    let pad = width.saturating_sub(used + 1);
    format!("{}{}…", cut, " ".repeat(pad))
}

/// Lines for one poll card. `selected` is the highlighted option, if any.
pub fn poll_card_lines(poll: &Poll, selected: Option<usize>) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(poll.options.len() + 3);
    lines.push(Line::from(Span::styled(
        poll.question.clone(),
        Style::default().bold(),
    )));

    let label_width = poll
        .options
        .iter()
        .map(|o| display_width(&o.text))
        .max()
        .unwrap_or(0)
        .min(MAX_LABEL_WIDTH);

    for (i, option) in poll.options.iter().enumerate() {
        let is_selected = selected == Some(i);
        let marker = if is_selected { "▶ " } else { "  " };
        let text_style = if is_selected {
            Style::default().fg(Color::Yellow).bold()
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::Yellow)),
            Span::styled(truncate(&option.text, label_width), text_style),
            Span::raw(" "),
            Span::styled(
                vote_bar(poll.option_percent(i), BAR_WIDTH),
                Style::default().fg(Color::Blue),
            ),
            Span::raw(format!(
                " {} ({} votes)",
                poll.percent_label(i),
                option.votes
            )),
        ]));
    }

    lines.push(Line::from(Span::styled(
        format!(
            "Total votes: {} | Created: {}",
            poll.total_votes,
            poll.created_date()
        ),
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::raw(""));
    lines
}

fn draw_poll_list(f: &mut Frame, state: &RenderState, area: Rect) {
    let is_focused = state.focus == Focus::Polls;
    let border_style = if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(" Polls ({}) ", state.polls.len()));

    if state.polls.is_empty() {
        let empty = Paragraph::new("No polls yet. Create one above!")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    let mut selected_line = 0;
    for (index, poll) in state.polls.iter().enumerate() {
        let selected = if is_focused && index == state.selected_poll {
            selected_line = lines.len() + 1 + state.selected_option;
            Some(state.selected_option)
        } else {
            None
        };
        lines.extend(poll_card_lines(poll, selected));
    }

    let inner_height = area.height.saturating_sub(2) as usize;
    let scroll = (selected_line + 2).saturating_sub(inner_height) as u16;

    let list = Paragraph::new(lines).block(block).scroll((scroll, 0));
    f.render_widget(list, area);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let hints = if state.is_submitting {
        " Creating poll... "
    } else if state.input_mode == InputMode::Editing {
        " ESC:stop editing | Tab:next field "
    } else if state.focus == Focus::Polls {
        " ↑/↓:select | Enter:vote | r:refresh | Tab:form | ?:help | q:quit "
    } else {
        " Tab:field | e:edit | a:add option | s:create | r:refresh | ?:help | q:quit "
    };

    let refreshed = state
        .last_refreshed
        .map(|t| format!("updated {} ", t.format("%H:%M:%S")))
        .unwrap_or_else(|| String::from("not loaded yet "));

    let bar = Paragraph::new(Line::from(vec![
        Span::raw(hints),
        Span::raw(" "),
        Span::raw(refreshed),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = format!(
        r#"
 {} {} - Keyboard Shortcuts

 CREATE POLL
   Tab / Shift+Tab    Move between fields and the poll list
   e / Enter          Edit focused field
   Esc                Stop editing
   a                  Add an option
   s                  Create poll

 POLLS
   ↑ / ↓              Select option
   Enter / v          Vote for selected option
   r                  Refresh now

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#,
        APP_NAME, APP_VERSION
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn draw_notice_popup(f: &mut Frame, notice: &str, area: Rect) {
    let popup_area = centered_rect(50, 20, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(" Notice (any key to close) ")
        .style(Style::default().bg(Color::Black));

    let text = Paragraph::new(notice.to_string())
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, popup_area);
    f.render_widget(text, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PollError;
    use crate::models::fixtures::poll;
    use ratatui::backend::TestBackend;
    use std::sync::Arc;

    fn render(state: &RenderState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| draw_ui(f, state)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_vote_bar_bounds() {
        assert_eq!(vote_bar(0.0, 4), "░░░░");
        assert_eq!(vote_bar(50.0, 4), "██░░");
        assert_eq!(vote_bar(100.0, 4), "████");
        assert_eq!(vote_bar(250.0, 4), "████");
    }

    #[test]
    fn test_truncate_uses_display_width() {
        assert_eq!(display_width(&truncate("寿司", 6)), 6);
        assert_eq!(display_width(&truncate("ラーメン屋さん", 6)), 6);
        assert_eq!(display_width(&truncate("tea", 6)), 6);
    }

    #[test]
    fn test_wide_option_text_keeps_bars_aligned() {
        let mut card = poll("A", &[1, 1]);
        card.options[0].text = String::from("寿司");
        card.options[1].text = String::from("Pizza");
        let lines = poll_card_lines(&card, None);
        let bar_col = |line: &Line| {
            let text = line_text(line);
            let prefix = &text[..text.find('█').unwrap()];
            display_width(prefix)
        };
        assert_eq!(bar_col(&lines[1]), bar_col(&lines[2]));
    }

    #[test]
    fn test_card_without_votes_shows_zero_percent() {
        let lines = poll_card_lines(&poll("A", &[0, 0]), None);
        let row = line_text(&lines[1]);
        assert!(row.contains("0% (0 votes)"), "{}", row);
        assert!(!row.contains("NaN"));
        assert!(row.contains(&"░".repeat(BAR_WIDTH)));
    }

    #[test]
    fn test_card_rows_and_footer() {
        let lines = poll_card_lines(&poll("A", &[1, 3]), Some(1));
        assert_eq!(lines.len(), 5);
        assert!(line_text(&lines[1]).contains("25.0% (1 votes)"));
        let selected = line_text(&lines[2]);
        assert!(selected.starts_with("▶ "));
        assert!(selected.contains("75.0% (3 votes)"));
        assert!(line_text(&lines[3]).starts_with("Total votes: 4 | Created: "));
    }

    #[test]
    fn test_error_banner_only_when_set() {
        let mut state = RenderState::default();
        assert!(!render(&state).contains("Failed to"));

        state.error = Some(PollError::Vote);
        assert!(render(&state).contains("Failed to vote"));
    }

    #[test]
    fn test_submit_label_while_creating() {
        let mut state = RenderState::default();
        assert!(render(&state).contains("[s] Create Poll"));
        state.is_submitting = true;
        assert!(render(&state).contains("[s] Creating..."));
    }

    #[test]
    fn test_polls_render_in_store_order() {
        let state = RenderState {
            polls: vec![Arc::new(poll("first", &[1])), Arc::new(poll("second", &[0]))],
            ..RenderState::default()
        };
        let screen = render(&state);
        let first = screen.find("Question first?").unwrap();
        let second = screen.find("Question second?").unwrap();
        assert!(first < second);
        assert!(screen.contains("Polls (2)"));
    }

    #[test]
    fn test_draft_fields_rendered() {
        let mut state = RenderState::default();
        state.draft.set_question("Where to eat?");
        state.draft.add_option();
        state.draft.set_option(2, "Tacos");
        let screen = render(&state);
        assert!(screen.contains("Question: Where to eat?"));
        assert!(screen.contains("Option 3: Tacos"));
    }

    #[test]
    fn test_notice_popup() {
        let state = RenderState {
            notice: Some(String::from("Please fill in all fields")),
            ..RenderState::default()
        };
        assert!(render(&state).contains("Please fill in all fields"));
    }
}
