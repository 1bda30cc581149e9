use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use log::{info, warn};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};
use ratatui::Frame;

use crate::catalog::Catalog;
use crate::mail::{MailComposer, MailRequest};
use crate::models::CatalogEntry;
use crate::router::{Route, Router};

use super::helpers::{
    build_photo_lines, ellipsize_lines, rect_contains, surface_error, wrap_sentence,
};
use super::screens::ListScreen;

/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;
/// Title, subtitle and a blank spacer line above the list.
const HEADER_HEIGHT: u16 = 3;
/// Height of one list row including its border.
const ROW_HEIGHT: u16 = 4;
/// Width of the thumbnail inside a list row.
const THUMB_WIDTH: u16 = 8;
/// Height of the photo block on the detail page.
const PHOTO_HEIGHT: u16 = 10;
const ADOPT_BUTTON_WIDTH: u16 = 13;
/// Rows moved by PageUp/PageDown.
const PAGE_STEP: isize = 5;

const TITLE: &str = "Shibadoption";
const SUBTITLE: &str = "わんわん！🐶";

/// Everything a view can ask the application to do. Views never touch the
/// router directly; they hand one of these to [`App::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEvent {
    Navigate(Route),
    Back,
    Adopt { id: usize },
    Quit,
}

/// Screen region that turns a left click into an event.
struct HitTarget {
    area: Rect,
    event: ViewEvent,
}

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// Central application state shared across the TUI.
pub struct App {
    catalog: Catalog,
    router: Router,
    list: ListScreen,
    composer: Box<dyn MailComposer>,
    status: Option<StatusMessage>,
    hit_targets: Vec<HitTarget>,
}

impl App {
    pub fn new(catalog: Catalog, composer: Box<dyn MailComposer>) -> Self {
        let list = ListScreen::new(catalog.len());
        Self {
            catalog,
            router: Router::new(),
            list,
            composer,
            status: None,
            hit_targets: Vec::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Translate a key press into a view event and apply it. Returns `true`
    /// when the application should exit.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        match self.key_event(code) {
            Some(event) => self.apply(event),
            None => false,
        }
    }

    /// Left clicks activate whatever was drawn under the cursor; the wheel
    /// scrolls the list.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> bool {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let event = self
                    .hit_targets
                    .iter()
                    .find(|target| rect_contains(target.area, mouse.column, mouse.row))
                    .map(|target| target.event);
                match event {
                    Some(event) => self.apply(event),
                    None => false,
                }
            }
            MouseEventKind::ScrollDown if self.router.current() == Route::List => {
                self.list.move_selection(1);
                false
            }
            MouseEventKind::ScrollUp if self.router.current() == Route::List => {
                self.list.move_selection(-1);
                false
            }
            _ => false,
        }
    }

    fn key_event(&mut self, code: KeyCode) -> Option<ViewEvent> {
        if code == KeyCode::Char('q') {
            return Some(ViewEvent::Quit);
        }

        match self.router.current() {
            Route::List => match code {
                KeyCode::Esc => Some(ViewEvent::Back),
                KeyCode::Up | KeyCode::Char('k') => {
                    self.list.move_selection(-1);
                    None
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.list.move_selection(1);
                    None
                }
                KeyCode::PageUp => {
                    self.list.move_selection(-PAGE_STEP);
                    None
                }
                KeyCode::PageDown => {
                    self.list.move_selection(PAGE_STEP);
                    None
                }
                KeyCode::Home => {
                    self.list.select_first();
                    None
                }
                KeyCode::End => {
                    self.list.select_last();
                    None
                }
                KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => self
                    .catalog
                    .entries()
                    .get(self.list.selected)
                    .map(|entry| ViewEvent::Navigate(Route::Details { id: entry.id })),
                _ => None,
            },
            Route::Details { id } => match code {
                KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h') => {
                    Some(ViewEvent::Back)
                }
                KeyCode::Enter | KeyCode::Char('a') | KeyCode::Char('A') => {
                    Some(ViewEvent::Adopt { id })
                }
                _ => None,
            },
        }
    }

    /// Apply a view event. Returns `true` when the application should exit.
    pub fn apply(&mut self, event: ViewEvent) -> bool {
        match event {
            ViewEvent::Navigate(route) => {
                if let Route::Details { id } = route {
                    if let Some(index) = self.catalog.iter().position(|entry| entry.id == id) {
                        self.list.select(index);
                    }
                }
                self.clear_status();
                self.router.navigate(route);
                false
            }
            ViewEvent::Back => match self.router.back() {
                Some(_) => {
                    self.clear_status();
                    false
                }
                None => {
                    info!("back pressed on the first screen, exiting");
                    true
                }
            },
            ViewEvent::Adopt { id } => {
                self.adopt(id);
                false
            }
            ViewEvent::Quit => true,
        }
    }

    fn adopt(&mut self, id: usize) {
        let entry = self.resolve_details(id);
        let request = MailRequest::adoption(entry);
        let name = entry.name.clone();
        info!("adoption request for {name} (id {id})");

        match self.composer.compose(&request) {
            Ok(()) => {
                self.set_status(format!("Opening mail composer for {name}."), StatusKind::Info)
            }
            Err(err) => {
                warn!("mail composer failed: {err:#}");
                let message = format!("Failed to open mail composer: {}", surface_error(&err));
                self.set_status(message, StatusKind::Error);
            }
        }
    }

    /// Look up the entry behind a detail route.
    ///
    /// # Panics
    ///
    /// Panics when `id` is not in the catalog. Detail routes are only built
    /// from live catalog entries, so reaching this is a navigation bug.
    fn resolve_details(&self, id: usize) -> &CatalogEntry {
        match self.catalog.get(id) {
            Ok(entry) => entry,
            Err(err) => panic!("detail view reached with an invalid route: {err}"),
        }
    }

    pub(crate) fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let footer_height = FOOTER_HEIGHT.min(area.height);
        self.hit_targets.clear();

        let (content_area, footer_area) = if area.height > footer_height {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(footer_height)])
                .split(area);
            (chunks[0], chunks[1])
        } else {
            (area, area)
        };

        match self.router.current() {
            Route::List => self.draw_list(frame, content_area),
            Route::Details { id } => self.draw_details(frame, content_area, id),
        }

        if area.height > footer_height {
            self.draw_footer(frame, footer_area);
        }
    }

    fn draw_list(&mut self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)])
            .split(area);

        let header = Paragraph::new(vec![
            Line::from(Span::styled(
                TITLE,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(SUBTITLE, Style::default().fg(Color::Gray))),
        ])
        .block(Block::default().padding(Padding::horizontal(1)));
        frame.render_widget(header, chunks[0]);

        let list_area = chunks[1];
        if self.catalog.is_empty() {
            let message = Paragraph::new("No shibas to adopt right now.")
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(message, list_area);
            return;
        }
        if list_area.height == 0 {
            return;
        }

        let capacity = (list_area.height / ROW_HEIGHT).max(1) as usize;
        let (start, end) = self.list.visible_range(capacity);
        let constraints: Vec<Constraint> = (start..end)
            .map(|_| Constraint::Length(ROW_HEIGHT))
            .collect();
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(list_area);

        for (row, index) in rows.iter().zip(start..end) {
            if row.height == 0 {
                continue;
            }
            let entry = &self.catalog.entries()[index];
            let selected = index == self.list.selected;
            render_row(frame, *row, entry, selected);
            self.hit_targets.push(HitTarget {
                area: *row,
                event: ViewEvent::Navigate(Route::Details { id: entry.id }),
            });
        }
    }

    fn draw_details(&mut self, frame: &mut Frame, area: Rect, id: usize) {
        let entry = self.resolve_details(id);

        let page = Block::default().padding(Padding::uniform(1));
        let inner = page.inner(area);
        frame.render_widget(page, area);

        let summary_lines = wrap_sentence(&entry.summary(), inner.width as usize);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(PHOTO_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(2),
                Constraint::Length(summary_lines.len().max(1) as u16),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(inner);

        let photo_block = Block::default().borders(Borders::ALL);
        let photo_inner = photo_block.inner(chunks[0]);
        let photo = Paragraph::new(build_photo_lines(
            entry.image,
            photo_inner.width,
            photo_inner.height,
            true,
        ))
        .block(photo_block);
        frame.render_widget(photo, chunks[0]);

        let name_lines: Vec<Line> = ellipsize_lines(&entry.name, chunks[2].width as usize, 2)
            .into_iter()
            .map(|line| {
                Line::from(Span::styled(
                    line,
                    Style::default().add_modifier(Modifier::BOLD),
                ))
            })
            .collect();
        frame.render_widget(Paragraph::new(name_lines), chunks[2]);

        let summary: Vec<Line> = summary_lines.into_iter().map(Line::from).collect();
        frame.render_widget(Paragraph::new(summary), chunks[3]);

        let button_area = Rect {
            width: ADOPT_BUTTON_WIDTH.min(chunks[4].width),
            ..chunks[4]
        };
        let button = Paragraph::new(Span::styled(
            "Adopt",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(button, button_area);

        self.hit_targets.push(HitTarget {
            area: button_area,
            event: ViewEvent::Adopt { id },
        });
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };

        let paragraph = Paragraph::new(vec![status_line, self.footer_instructions()])
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        match self.router.current() {
            Route::List => Line::from(vec![
                Span::styled("[↑↓]", key_style),
                Span::raw(" Select   "),
                Span::styled("[Enter]", key_style),
                Span::raw(" Open   "),
                Span::styled("[q]", key_style),
                Span::raw(" Quit"),
            ]),
            Route::Details { .. } => Line::from(vec![
                Span::styled("[Enter]", key_style),
                Span::raw(" Adopt   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Back   "),
                Span::styled("[q]", key_style),
                Span::raw(" Quit"),
            ]),
        }
    }

    fn set_status<S: Into<String>>(&mut self, text: S, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }
}

/// One catalog row: thumbnail, name, age and the `>` affordance.
fn render_row(frame: &mut Frame, area: Rect, entry: &CatalogEntry, selected: bool) {
    let mut block = Block::default().borders(Borders::ALL);
    if selected {
        block = block.style(Style::default().fg(Color::Yellow));
    }
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(THUMB_WIDTH),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(inner);

    let thumb = Paragraph::new(build_photo_lines(
        entry.image,
        columns[0].width,
        columns[0].height,
        selected,
    ));
    frame.render_widget(thumb, columns[0]);

    let name = if selected {
        format!("▶ {}", entry.name)
    } else {
        entry.name.clone()
    };
    let text = Paragraph::new(vec![
        Line::from(Span::styled(
            name,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            entry.age_label(),
            Style::default().fg(Color::Gray),
        )),
    ]);
    frame.render_widget(text, columns[2]);

    let affordance = Paragraph::new(">").alignment(Alignment::Center);
    frame.render_widget(affordance, columns[3]);
}
