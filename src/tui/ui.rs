use crate::tui::app::{App, Focus};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

const INPUT_PLACEHOLDER: &str = "Add Item...";
const EMPTY_LIST_PLACEHOLDER: &str = "No todos yet...";

pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Input
            Constraint::Min(0),    // List
            Constraint::Length(3), // Footer
        ])
        .split(frame.size());

    draw_header(frame, chunks[0]);
    draw_input(frame, chunks[1], app);
    draw_todo_list(frame, chunks[2], app);
    draw_footer(frame, chunks[3], app);

    if app.help_mode {
        draw_help_window(frame);
    }
}

fn focused_block(title: &str, focused: bool) -> Block<'_> {
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title)
}

fn draw_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new("Todo List")
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    frame.render_widget(header, area);
}

fn draw_input(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::Input && !app.help_mode;

    let line = if app.input.is_empty() {
        let mut spans = Vec::new();
        if focused {
            spans.push(Span::raw("█"));
        }
        spans.push(Span::styled(INPUT_PLACEHOLDER, Style::default().fg(Color::DarkGray)));
        Line::from(spans)
    } else if focused {
        let (before_cursor, after_cursor) = app.input.split_at_cursor();
        Line::from(format!("{}█{}", before_cursor, after_cursor))
    } else {
        Line::from(app.input.buffer.as_str())
    };

    let input = Paragraph::new(line).block(focused_block("New todo", focused));
    frame.render_widget(input, area);
}

fn draw_todo_list(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::List && !app.help_mode;
    let block = focused_block("Items", focused);

    if app.state().is_empty() {
        let placeholder = Paragraph::new(EMPTY_LIST_PLACEHOLDER)
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(placeholder, area);
        return;
    }

    let items: Vec<ListItem> = app
        .state()
        .iter()
        .map(|todo| {
            let checkbox = if todo.is_completed() { "☑" } else { "☐" };
            let style = if todo.is_completed() {
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(vec![
                Span::raw(format!("{} ", checkbox)),
                Span::styled(todo.text(), style),
            ]))
        })
        .collect();

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .bg(Color::Yellow)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
    );

    // Only show the highlight while the list has focus
    let mut list_state = ListState::default();
    if focused {
        list_state.select(Some(app.selected_index));
    }

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let hints = match app.focus {
        Focus::Input => "Enter: add | Tab/Esc: list | Ctrl+C: quit",
        Focus::List => "↑↓/j/k: navigate | Enter/Space: toggle | d: delete | Tab: input | ?: help | q: quit",
    };
    let footer_text = format!(
        "Items: {} | Completed: {} | {}",
        app.total_items(),
        app.completed_items(),
        hints
    );

    let footer = Paragraph::new(footer_text)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Yellow));

    frame.render_widget(footer, area);
}

fn draw_help_window(frame: &mut Frame) {
    let help_text = [
        "Todo List - Keyboard Commands",
        "",
        "INPUT:",
        "  Enter             Add the typed todo",
        "  ←→ / Home / End   Move cursor",
        "  Ctrl+W            Delete previous word",
        "  Tab / Esc         Focus the list",
        "",
        "LIST:",
        "  ↑↓ / j/k          Navigate up/down",
        "  Enter / Space     Toggle completion",
        "  d / Delete        Delete item",
        "  Tab / i / a       Focus the input",
        "",
        "OTHER:",
        "  ?                 Show this help",
        "  q / Ctrl+C        Quit application",
        "",
        "Press ? or Esc to close this help window",
    ];

    let help_paragraph = Paragraph::new(help_text.join("\n"))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help - Keyboard Commands ")
                .style(Style::default().fg(Color::Yellow)),
        )
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: false });

    let area = centered_rect(80, 70, frame.size());

    frame.render_widget(Clear, area);
    frame.render_widget(help_paragraph, area);
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
