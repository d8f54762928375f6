use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::app::{App, Screen};
use crate::ui::home::{ArticleUiModel, HomeState};
use crate::ui::layout::layout_regions;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, DIM_TEXT, GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR,
};

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let (header, body, footer) = layout_regions(frame.area());

    draw_header(frame, app, header);
    match app.screen() {
        Screen::Home => draw_home(frame, app, body),
        Screen::Details(article) => draw_details(frame, article, body),
    }
    draw_footer(frame, app, footer);
}

fn draw_header(frame: &mut Frame<'_>, app: &App, area: ratatui::layout::Rect) {
    let state = app.state();
    let title = match state.title() {
        "" => "newsdeck".to_string(),
        source => format!("newsdeck — {}", source),
    };
    let widget = Paragraph::new(Line::from(Span::styled(
        title,
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(GLOBAL_BORDER)));
    frame.render_widget(widget, area);
}

fn draw_home(frame: &mut Frame<'_>, app: &App, area: ratatui::layout::Rect) {
    let state = app.state();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    match &state {
        HomeState::Idle => {
            frame.render_widget(placeholder("Starting up...", block), area);
        }
        HomeState::Loading => {
            frame.render_widget(placeholder("Loading headlines...", block), area);
        }
        HomeState::Empty => {
            frame.render_widget(placeholder("No articles available.", block), area);
        }
        HomeState::Success { page, .. } => {
            let items: Vec<ListItem<'_>> = page
                .items
                .iter()
                .map(|article| {
                    let meta = format!("{}  {}", article.source_name, article.published_at);
                    ListItem::new(vec![
                        Line::from(Span::styled(
                            article.title.clone(),
                            Style::default().fg(HEADER_TEXT),
                        )),
                        Line::from(Span::styled(meta, Style::default().fg(DIM_TEXT))),
                    ])
                })
                .collect();

            let list = List::new(items)
                .block(block.title(format!(
                    " {} of {} articles, page {} ",
                    page.len(),
                    page.total,
                    page.current_page
                )))
                .highlight_style(
                    Style::default()
                        .bg(ACTIVE_HIGHLIGHT)
                        .fg(ACCENT)
                        .add_modifier(Modifier::BOLD),
                )
                .highlight_symbol("> ");

            let mut list_state = ListState::default();
            list_state.select(Some(app.selected().min(page.len().saturating_sub(1))));
            frame.render_stateful_widget(list, area, &mut list_state);
        }
    }
}

fn draw_details(frame: &mut Frame<'_>, article: &ArticleUiModel, area: ratatui::layout::Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            article.title.clone(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{}  {}", article.source_name, article.published_at),
            Style::default().fg(DIM_TEXT),
        )),
        Line::default(),
    ];
    if !article.author.is_empty() {
        lines.push(Line::from(format!("By {}", article.author)));
        lines.push(Line::default());
    }
    if !article.description.is_empty() {
        lines.push(Line::from(article.description.clone()));
        lines.push(Line::default());
    }
    if !article.content.is_empty() {
        lines.push(Line::from(article.content.clone()));
        lines.push(Line::default());
    }
    lines.push(Line::from(Span::styled(
        article.url.clone(),
        Style::default().fg(ACCENT),
    )));

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER))
                .title(" article "),
        );
    frame.render_widget(widget, area);
}

fn draw_footer(frame: &mut Frame<'_>, app: &App, area: ratatui::layout::Rect) {
    let line = match app.status() {
        Some(message) => Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(STATUS_ERROR),
        )),
        None => {
            let hints = match app.screen() {
                Screen::Home => "j/k move  Enter open  r refresh  q quit",
                Screen::Details(_) => "Esc back  q quit",
            };
            Line::from(Span::styled(hints, Style::default().fg(DIM_TEXT)))
        }
    };

    let widget = Paragraph::new(line).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(widget, area);
}

fn placeholder<'a>(text: &'a str, block: Block<'a>) -> Paragraph<'a> {
    Paragraph::new(Line::from(Span::styled(
        text,
        Style::default().fg(DIM_TEXT),
    )))
    .alignment(Alignment::Center)
    .block(block)
}
