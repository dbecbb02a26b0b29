use crate::{
    app::App,
    colors::*,
    utils::{format_size, percent_of, render_bar},
};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};

pub fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Length(2), // Folder info, below a border line
            Constraint::Min(0),    // List
            Constraint::Length(1), // Footer
        ])
        .split(f.area());

    let [title_area, info_area, list_area, footer_area] = *chunks else {
        return;
    };

    render_title_bar(f, title_area);
    render_folder_info(f, app, info_area);
    render_component_list(f, app, list_area);
    render_footer(f, app, footer_area);

    if app.show_help {
        render_help_overlay(f);
    }
}

fn render_title_bar(f: &mut Frame, area: Rect) {
    let version = env!("CARGO_PKG_VERSION");
    let left = format!(" comptree v{}    (press ", version);
    let right = " for help)";
    let used = left.chars().count() + 1 + right.len();
    let padding = (f.area().width as usize).saturating_sub(used);

    let title_bar = Paragraph::new(Line::from(vec![
        Span::raw(left),
        Span::styled("?", Style::default().fg(COLOR_BAR_FG).add_modifier(Modifier::BOLD)),
        Span::raw(right),
        Span::raw(" ".repeat(padding)),
    ]))
    .style(Style::default().fg(COLOR_BAR_FG).bg(COLOR_BAR_BG));
    f.render_widget(title_bar, area);
}

fn render_folder_info(f: &mut Frame, app: &App, area: Rect) {
    let info = format!(
        " {} ({} entries, {})",
        app.current_trail(),
        app.current_children().len(),
        format_size(app.current_total_size())
    );
    let info_line = Paragraph::new(Line::from(vec![Span::styled(
        info,
        Style::default().fg(COLOR_TRAIL),
    )]))
    .block(Block::default().borders(Borders::TOP | Borders::LEFT | Borders::RIGHT));
    f.render_widget(info_line, area);
}

fn render_component_list(f: &mut Frame, app: &mut App, area: Rect) {
    let total = app.current_total_size();

    let items: Vec<ListItem> = app
        .current_children()
        .iter()
        .map(|component| {
            let size = component.size();
            let percent = percent_of(size, total);
            let bar = render_bar(percent, 10);

            let (prefix, name_color) = if component.is_folder() {
                ("/", COLOR_FOLDER)
            } else {
                (" ", COLOR_FILE)
            };

            ListItem::new(Line::from(vec![
                Span::styled(format!("{:>10}", format_size(size)), Style::default().fg(COLOR_SIZE)),
                Span::raw(" | "),
                Span::styled(format!("{:>5.1}%", percent), Style::default().fg(COLOR_PERCENT)),
                Span::raw(" | "),
                Span::styled(format!("{:10}", bar), Style::default().fg(COLOR_PERCENT)),
                Span::raw(" | "),
                Span::styled(
                    format!("{}{}", prefix, component.name()),
                    Style::default().fg(name_color),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::LEFT | Borders::RIGHT | Borders::BOTTOM))
        .highlight_style(Style::default().bg(COLOR_SELECTED_BG).fg(COLOR_SELECTED_FG));

    f.render_stateful_widget(list, area, &mut app.state);
}

fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    let width = f.area().width as usize;
    let order = if app.sort_ascending { "ascending" } else { "descending" };
    let left = format!(
        "Sort mode: {} {}  Total size: {}",
        app.sort_mode.name(),
        order,
        format_size(app.current_total_size())
    );
    let right = app
        .status_message
        .as_deref()
        .map(|msg| format!("  {}", msg))
        .unwrap_or_default();
    let padding = width.saturating_sub(left.chars().count() + right.chars().count());
    let text = format!("{}{:padding$}{}", left, "", right, padding = padding);

    let footer = Paragraph::new(text).style(Style::default().fg(COLOR_BAR_FG).bg(COLOR_BAR_BG));
    f.render_widget(footer, area);
}

fn help_section(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {}:", title),
        Style::default().fg(COLOR_HELP_SECTION).add_modifier(Modifier::BOLD),
    ))
}

fn render_help_overlay(f: &mut Frame) {
    let help_text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  comptree - composite size browser",
            Style::default().fg(COLOR_HELP_TITLE).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        help_section("Navigation"),
        Line::from("    j / ↓           Move down 1 item"),
        Line::from("    k / ↑           Move up 1 item"),
        Line::from("    Ctrl+d / PgDn   Move down 10 items"),
        Line::from("    Ctrl+u / PgUp   Move up 10 items"),
        Line::from("    H / Home        Go to first item"),
        Line::from("    G / End         Go to last item"),
        Line::from(""),
        help_section("Actions"),
        Line::from("    o / l / Enter   Enter folder"),
        Line::from("    u / h / Bksp    Go up one level"),
        Line::from("    x / Del         Remove entry (memory only)"),
        Line::from("    r               Reload source"),
        Line::from(""),
        help_section("Display"),
        Line::from("    s               Toggle sort by size"),
        Line::from("    n               Toggle sort by name"),
        Line::from("    c               Toggle sort by count"),
        Line::from("    Tab             Next sort mode"),
        Line::from(""),
        help_section("Other"),
        Line::from("    ?               Toggle this help"),
        Line::from("    q / Esc         Quit"),
        Line::from(""),
        Line::from(Span::styled("  Press any key to close", Style::default().fg(COLOR_HELP_HINT))),
        Line::from(""),
    ];

    let help_height = help_text.len() as u16 + 2;
    let help_width = 46;
    let area = f.area();
    let help_area = Rect {
        x: area.width.saturating_sub(help_width) / 2,
        y: area.height.saturating_sub(help_height) / 2,
        width: help_width.min(area.width),
        height: help_height.min(area.height),
    };

    f.render_widget(Clear, help_area);
    let help_block = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help ")
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::default().fg(Color::White).bg(Color::Black));
    f.render_widget(help_block, help_area);
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::source::Source;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_demo_tree() {
        let loaded = Source::Demo.load().unwrap();
        let mut app = App::new(Source::Demo, loaded);
        let text = screen_text(&mut app);

        assert!(text.contains("My Folder (3 entries, 2.4 KiB)"));
        assert!(text.contains("file3.txt"));
        assert!(text.contains("48.0%"));
        assert!(text.contains("Total size: 2.4 KiB"));
    }

    #[test]
    fn test_help_overlay() {
        let loaded = Source::Demo.load().unwrap();
        let mut app = App::new(Source::Demo, loaded);
        app.show_help = true;
        let text = screen_text(&mut app);
        assert!(text.contains("Reload source"));
    }
}
