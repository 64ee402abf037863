use super::theme::UiTheme;
use crate::kernel::list::FilterState;
use crate::kernel::{AppState, EntryKind, ErrorNotice};
use ratatui::layout::{Constraint, Layout, Margin, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const BROWSE_HELP: &str =
    "Press a to add note, b for bookmark, e to edit, v to view, / to filter, q to quit";
const FILTER_HELP: &str = "Type to filter, Enter to apply, Esc to clear";
const ENTRY_HELP: &str = "Press Enter to save, Esc to cancel";
const ERROR_HELP: &str = "Press Enter or Esc to dismiss";
const INPUT_PROMPT: &str = "> ";
const INPUT_WIDTH: u16 = 50;
const SELECTED_MARK: &str = "│ ";
const UNSELECTED_MARK: &str = "  ";

pub(crate) struct ScreenLayout {
    pub header: Rect,
    pub body: Rect,
    pub status: Rect,
    pub help: Rect,
}

/// Header, spacer, body, status line and help line inside a 1x2 margin.
pub(crate) fn screen_layout(area: Rect) -> ScreenLayout {
    let inner = area.inner(Margin::new(2, 1));
    let [header, _, body, status, help] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);
    ScreenLayout {
        header,
        body,
        status,
        help,
    }
}

pub(super) fn render(state: &AppState, theme: &UiTheme, frame: &mut Frame) {
    let layout = screen_layout(frame.area());

    if let Some(error) = &state.error {
        render_error(error, theme, frame, &layout);
        return;
    }

    match state.mode.entry_kind() {
        Some(kind) => render_entry(state, kind, theme, frame, &layout),
        None => render_browse(state, theme, frame, &layout),
    }
}

fn header(text: &str, style: ratatui::style::Style) -> Paragraph<'static> {
    Paragraph::new(Line::from(Span::styled(format!(" {text} "), style)))
}

fn render_error(
    error: &ErrorNotice,
    theme: &UiTheme,
    frame: &mut Frame,
    layout: &ScreenLayout,
) {
    frame.render_widget(header("Error", theme.error_header_style()), layout.header);
    frame.render_widget(
        Paragraph::new(error.message.as_str())
            .style(theme.title_style())
            .wrap(Wrap { trim: false }),
        layout.body,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(ERROR_HELP, theme.help_style())),
        layout.help,
    );
}

fn render_entry(
    state: &AppState,
    kind: EntryKind,
    theme: &UiTheme,
    frame: &mut Frame,
    layout: &ScreenLayout,
) {
    frame.render_widget(header(kind.heading(), theme.header_style()), layout.header);

    let input = &state.input;
    let field_width = usize::from(
        INPUT_WIDTH.min(layout.body.width.saturating_sub(INPUT_PROMPT.width() as u16)),
    );
    let mut spans = vec![Span::styled(INPUT_PROMPT, theme.header_style())];
    let (visible, cursor_cells) = if input.value().is_empty() {
        spans.push(Span::styled(
            truncate(input.placeholder(), field_width),
            theme.desc_style(),
        ));
        ("", 0)
    } else {
        let start = window_start(input.value(), input.cursor(), field_width);
        let visible = input.value().get(start..).unwrap_or_default();
        let cells = input
            .value()
            .get(start..input.cursor())
            .map(UnicodeWidthStr::width)
            .unwrap_or(0);
        (visible, cells)
    };
    if !visible.is_empty() {
        spans.push(Span::styled(
            truncate(visible, field_width),
            theme.title_style(),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), layout.body);

    if input.is_focused() && layout.body.height > 0 {
        let x = layout.body.x + INPUT_PROMPT.width() as u16 + cursor_cells as u16;
        frame.set_cursor_position((
            x.min(layout.body.right().saturating_sub(1)),
            layout.body.y,
        ));
    }

    frame.render_widget(
        Paragraph::new(Span::styled(ENTRY_HELP, theme.help_style())),
        layout.help,
    );
}

fn render_browse(state: &AppState, theme: &UiTheme, frame: &mut Frame, layout: &ScreenLayout) {
    let title = format!("Notes in {}", state.notebook_dir.display());
    let title = truncate(&title, usize::from(layout.header.width).saturating_sub(2));
    frame.render_widget(header(&title, theme.header_style()), layout.header);

    let list = &state.list;
    let width =
        usize::from(list.width().min(layout.body.width)).saturating_sub(SELECTED_MARK.width());
    let mut lines = Vec::new();
    for (pos, item) in list.page() {
        let selected = list.selected_index() == Some(pos);
        let (mark, title_style, desc_style) = if selected {
            let accent = theme.selected_title_style();
            (SELECTED_MARK, accent, accent)
        } else {
            (UNSELECTED_MARK, theme.title_style(), theme.desc_style())
        };
        let path = item.path.to_string_lossy();
        lines.push(Line::from(vec![
            Span::styled(mark, title_style),
            Span::styled(truncate(&item.title, width), title_style),
        ]));
        lines.push(Line::from(vec![
            Span::styled(mark, desc_style),
            Span::styled(truncate(&path, width), theme.desc_style()),
        ]));
        lines.push(Line::raw(""));
    }
    if lines.is_empty() {
        let empty = if list.query().is_empty() {
            "No notes."
        } else {
            "No matches."
        };
        lines.push(Line::from(Span::styled(
            format!("{UNSELECTED_MARK}{empty}"),
            theme.desc_style(),
        )));
    }
    frame.render_widget(Paragraph::new(lines), layout.body);

    match list.filter_state() {
        FilterState::Unfiltered => {}
        FilterState::Filtering => {
            let prompt = "Filter: ";
            let line = Line::from(vec![
                Span::styled(prompt, theme.header_style()),
                Span::styled(list.query(), theme.title_style()),
            ]);
            frame.render_widget(Paragraph::new(line), layout.status);
            let x = layout.status.x + (prompt.width() + list.query().width()) as u16;
            frame.set_cursor_position((
                x.min(layout.status.right().saturating_sub(1)),
                layout.status.y,
            ));
        }
        FilterState::FilterApplied => {
            let text = format!(
                "Filter: {} ({} of {})",
                list.query(),
                list.visible_len(),
                list.items().len()
            );
            frame.render_widget(
                Paragraph::new(Span::styled(text, theme.desc_style())),
                layout.status,
            );
        }
    }

    let help = if list.is_filtering() {
        FILTER_HELP
    } else {
        BROWSE_HELP
    };
    frame.render_widget(
        Paragraph::new(Span::styled(help, theme.help_style())),
        layout.help,
    );
}

/// Cuts `text` to `width` terminal cells, marking the cut with an ellipsis.
pub(crate) fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// First byte of `text` to show so the cursor stays inside `width` cells.
pub(crate) fn window_start(text: &str, cursor: usize, width: usize) -> usize {
    if width == 0 {
        return cursor;
    }
    let mut start = 0;
    while start < cursor && text[start..cursor].width() >= width {
        start += text[start..]
            .chars()
            .next()
            .map(char::len_utf8)
            .unwrap_or(1);
    }
    start
}

#[cfg(test)]
#[path = "../../tests/unit/app/render.rs"]
mod tests;
