use anyhow::Result;
use chrono::NaiveDate;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use portfolio_site::charts::figure::{MarkerColor, Orientation, Values};
use portfolio_site::contact::{self, ContactSubmission};
use portfolio_site::html::{Chrome, LinkStyle};
use portfolio_site::views::{ContactFormView, Hero};
use portfolio_site::{Card, ChartBlock, Figure, Page, Section, Site, Trace, View, ViewState};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Line as CanvasLine, Rectangle},
        Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, Paragraph, Wrap,
    },
    Frame, Terminal,
};
use std::io;

const PRIMARY: Color = Color::Rgb(0x2c, 0x53, 0x64);

pub struct App {
    site: Site,
    chrome: Chrome,
    pub state: ViewState,
    pub view: View,
    pub scroll: usize,
    pub form: ContactSubmission,
    pub focused_field: usize,
}

impl App {
    pub fn new(site: Site, today: NaiveDate) -> Self {
        let chrome = site.chrome(today, LinkStyle::Server);
        let state = ViewState::default();
        let view = site.render(&state);

        Self {
            site,
            chrome,
            state,
            view,
            scroll: 0,
            form: ContactSubmission::default(),
            focused_field: 0,
        }
    }

    /// Select a page and re-render it from scratch.
    pub fn navigate(&mut self, page: Page) {
        self.state = ViewState::new(page);
        self.view = self.site.render(&self.state);
        self.scroll = 0;
    }

    pub fn next_page(&mut self) {
        self.navigate(self.state.page.next());
    }

    pub fn previous_page(&mut self) {
        self.navigate(self.state.page.previous());
    }

    pub fn scroll_down(&mut self) {
        let last = self.view.sections.len().saturating_sub(1);
        if self.scroll < last {
            self.scroll += 1;
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn submit_contact(&mut self) {
        self.state = self.state.with_contact(contact::submit(&self.form));
        self.view = self.site.render(&self.state);
    }

    /// Returns true when the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc => return true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return true,
            KeyCode::BackTab => self.previous_page(),
            KeyCode::Tab => {
                if key.modifiers.contains(KeyModifiers::SHIFT) {
                    self.previous_page();
                } else {
                    self.next_page();
                }
            }
            _ if self.state.page == Page::Contact => self.handle_form_key(key),
            KeyCode::Char('q') => return true,
            KeyCode::Char(c @ '1'..='5') => {
                let index = c as usize - '1' as usize;
                self.navigate(Page::ALL[index]);
            }
            KeyCode::Right | KeyCode::Char('l') => self.next_page(),
            KeyCode::Left | KeyCode::Char('h') => self.previous_page(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_down(),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_up(),
            KeyCode::Home => self.scroll = 0,
            _ => {}
        }
        false
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let fields = contact::FIELDS.len();
        match key.code {
            KeyCode::Up => self.focused_field = (self.focused_field + fields - 1) % fields,
            KeyCode::Down => self.focused_field = (self.focused_field + 1) % fields,
            KeyCode::PageDown => self.scroll_down(),
            KeyCode::PageUp => self.scroll_up(),
            KeyCode::Enter => self.submit_contact(),
            KeyCode::Backspace => {
                self.form.field_mut(self.focused_field).pop();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.form.field_mut(self.focused_field).push(c);
            }
            _ => {}
        }
    }
}

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res?;
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && app.handle_key(key) {
                return Ok(());
            }
        }
    }
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with navigation
            Constraint::Min(0),    // Sidebar + content
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_header(f, chunks[0], app);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(28), Constraint::Min(0)])
        .split(chunks[1]);

    render_sidebar(f, body[0], app);
    render_content(f, body[1], app);
    render_status_bar(f, chunks[2], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let mut tab_spans = vec![];
    for (i, (page, label)) in app.chrome.nav.iter().enumerate() {
        if i > 0 {
            tab_spans.push(Span::raw(" │ "));
        }

        let style = if *page == app.state.page {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        tab_spans.push(Span::styled(label.clone(), style));
    }

    let header = Paragraph::new(Line::from(tab_spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(format!(" {} ", app.chrome.site_title)),
    );

    f.render_widget(header, area);
}

fn render_sidebar(f: &mut Frame, area: Rect, app: &App) {
    let mut lines = vec![
        Line::from(Span::styled(
            " Navigation",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (i, (page, label)) in app.chrome.nav.iter().enumerate() {
        let selected = *page == app.state.page;
        let marker = if selected { "→ " } else { "  " };
        let style = if selected {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(vec![
            Span::raw(marker),
            Span::styled(format!("{}", i + 1), Style::default().fg(Color::Yellow)),
            Span::raw(". "),
            Span::styled(label.clone(), style),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " Quick Links",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )));
    for link in &app.chrome.quick_links {
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(link.label.clone(), Style::default().fg(Color::White)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", link.url),
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(" Last updated: {}", app.chrome.last_updated),
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
    )));

    let sidebar = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::White)));

    f.render_widget(sidebar, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Yellow));

    let mut status_spans = vec![Span::styled(
        format!(" Section: {}/{} ", app.scroll + 1, app.view.sections.len()),
        Style::default().fg(Color::Cyan),
    )];
    status_spans.push(Span::raw(" | "));
    status_spans.push(key("Tab"));
    status_spans.push(Span::raw(" Page | "));

    if app.state.page == Page::Contact {
        status_spans.push(key("↑/↓"));
        status_spans.push(Span::raw(" Field | "));
        status_spans.push(key("Enter"));
        status_spans.push(Span::raw(" Send | "));
        status_spans.push(key("PgUp/PgDn"));
        status_spans.push(Span::raw(" Scroll | "));
        status_spans.push(Span::styled("Esc", Style::default().fg(Color::Red)));
    } else {
        status_spans.push(key("1-5"));
        status_spans.push(Span::raw(" Jump | "));
        status_spans.push(key("↑/↓"));
        status_spans.push(Span::raw(" Scroll | "));
        status_spans.push(Span::styled("q", Style::default().fg(Color::Red)));
    }
    status_spans.push(Span::raw(" Quit"));

    let status_bar = Paragraph::new(Line::from(status_spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    f.render_widget(status_bar, area);
}

// ============================================================================
// CONTENT
// ============================================================================

fn render_content(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White))
        .title(format!(" {} ", app.view.title));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut y = inner.y;
    let bottom = inner.y + inner.height;

    for section in app.view.sections.iter().skip(app.scroll) {
        if y >= bottom {
            break;
        }
        let height = section_height(section, inner.width).min(bottom - y);
        let rect = Rect::new(inner.x, y, inner.width, height);
        render_section(f, rect, section, app);
        y += height;
    }

    // Footer goes after the last section when it fits
    if y < bottom {
        let footer = Paragraph::new(Line::from(Span::styled(
            app.chrome.footer.clone(),
            Style::default().fg(Color::DarkGray),
        )))
        .alignment(Alignment::Center);
        f.render_widget(footer, Rect::new(inner.x, y, inner.width, 1));
    }
}

fn wrapped_height(text: &str, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let chars = text.chars().count();
    chars.div_ceil(width).max(1) as u16
}

fn card_height(card: &Card, width: u16) -> u16 {
    let inner = width.saturating_sub(2);
    let body: u16 = card.body.iter().map(|l| wrapped_height(l, inner)).sum();
    2 + body + card.links.len() as u16
}

fn section_height(section: &Section, width: u16) -> u16 {
    match section {
        Section::Hero(hero) => {
            let inner = width.saturating_sub(2);
            let bio: u16 = hero.bio.iter().map(|p| wrapped_height(p, inner)).sum();
            2 + 3 + bio + wrapped_height(&hero.badges.join(" · "), inner)
        }
        Section::Metrics { .. } => 4,
        Section::Header { .. } => 2,
        Section::Subheading { .. } => 1,
        Section::Timeline { entries } => entries
            .iter()
            .map(|e| 3 + u16::from(e.detail.is_some()))
            .sum(),
        Section::Tags { tags } => {
            let text: String = tags.iter().map(|t| format!("[{t}] ")).collect();
            wrapped_height(&text, width)
        }
        Section::Cards { cards } => cards.iter().map(|c| card_height(c, width)).sum(),
        Section::Columns { columns } => {
            let count = columns.len().max(1) as u16;
            columns
                .iter()
                .map(|col| col.iter().map(|c| card_height(c, width / count)).sum::<u16>())
                .max()
                .unwrap_or(0)
        }
        Section::Chart(chart) => (chart.figure.layout.height / 24).max(8) as u16,
        Section::Divider => 1,
        Section::ContactForm(form) => {
            let fields: u16 = form.fields.iter().map(|f| if f.multiline { 5 } else { 3 }).sum();
            fields + 1 + u16::from(form.acknowledgement.is_some())
        }
    }
}

fn render_section(f: &mut Frame, area: Rect, section: &Section, app: &App) {
    match section {
        Section::Hero(hero) => render_hero(f, area, hero),
        Section::Metrics { tiles } => {
            let constraints = vec![Constraint::Ratio(1, tiles.len().max(1) as u32); tiles.len()];
            let cells = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(constraints)
                .split(area);
            for (tile, cell) in tiles.iter().zip(cells.iter()) {
                let text = vec![
                    Line::from(Span::styled(
                        tile.value.clone(),
                        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(
                        tile.label.to_uppercase(),
                        Style::default().fg(Color::DarkGray),
                    )),
                ];
                let card = Paragraph::new(text)
                    .alignment(Alignment::Center)
                    .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::DarkGray)));
                f.render_widget(card, *cell);
            }
        }
        Section::Header { text } => {
            let lines = vec![
                Line::from(Span::styled(
                    text.clone(),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    "━".repeat(usize::from(area.width)),
                    Style::default().fg(PRIMARY),
                )),
            ];
            f.render_widget(Paragraph::new(lines), area);
        }
        Section::Subheading { text } => {
            let line = Line::from(Span::styled(
                text.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ));
            f.render_widget(Paragraph::new(line), area);
        }
        Section::Timeline { entries } => {
            let mut lines = vec![];
            for entry in entries {
                lines.push(Line::from(vec![
                    Span::styled("● ", Style::default().fg(Color::Cyan)),
                    Span::styled(entry.year.to_uppercase(), Style::default().fg(Color::Cyan)),
                ]));
                lines.push(Line::from(Span::styled(
                    format!("│ {}", entry.title),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::from(Span::styled(
                    format!("│ {}", entry.subtitle),
                    Style::default().fg(Color::DarkGray),
                )));
                if let Some(detail) = &entry.detail {
                    lines.push(Line::from(Span::styled(
                        format!("│ {detail}"),
                        Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
                    )));
                }
            }
            f.render_widget(Paragraph::new(lines), area);
        }
        Section::Tags { tags } => {
            let mut spans = vec![];
            for tag in tags {
                spans.push(Span::styled(format!("[{tag}]"), Style::default().fg(Color::Cyan)));
                spans.push(Span::raw(" "));
            }
            f.render_widget(Paragraph::new(Line::from(spans)).wrap(Wrap { trim: true }), area);
        }
        Section::Cards { cards } => render_cards(f, area, cards),
        Section::Columns { columns } => {
            let count = columns.len().max(1) as u32;
            let cells = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Ratio(1, count); columns.len()])
                .split(area);
            for (column, cell) in columns.iter().zip(cells.iter()) {
                render_cards(f, *cell, column);
            }
        }
        Section::Chart(chart) => render_chart(f, area, chart),
        Section::Divider => {
            let rule = Line::from(Span::styled(
                "─".repeat(usize::from(area.width)),
                Style::default().fg(Color::DarkGray),
            ));
            f.render_widget(Paragraph::new(rule), area);
        }
        Section::ContactForm(form) => render_form(f, area, form, app),
    }
}

fn render_hero(f: &mut Frame, area: Rect, hero: &Hero) {
    let mut lines = vec![
        Line::from(Span::styled(
            hero.name.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(hero.title.clone(), Style::default().fg(Color::LightBlue))),
        Line::from(""),
    ];
    for paragraph in &hero.bio {
        lines.push(Line::from(Span::styled(paragraph.clone(), Style::default().fg(Color::Gray))));
    }
    lines.push(Line::from(Span::styled(
        hero.badges.join(" · "),
        Style::default().fg(Color::LightBlue).add_modifier(Modifier::ITALIC),
    )));

    let hero = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(PRIMARY)));
    f.render_widget(hero, area);
}

fn render_cards(f: &mut Frame, area: Rect, cards: &[Card]) {
    let mut y = area.y;
    let bottom = area.y + area.height;

    for card in cards {
        if y >= bottom {
            break;
        }
        let height = card_height(card, area.width).min(bottom - y);

        let mut lines: Vec<Line> = card
            .body
            .iter()
            .map(|l| Line::from(Span::styled(l.clone(), Style::default().fg(Color::Gray))))
            .collect();
        for link in &card.links {
            lines.push(Line::from(vec![
                Span::styled(link.label.clone(), Style::default().fg(Color::White)),
                Span::styled(format!(" <{}>", link.url), Style::default().fg(Color::DarkGray)),
            ]));
        }

        let widget = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(PRIMARY))
                .title(Span::styled(
                    format!(" {} ", card.title),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                )),
        );
        f.render_widget(widget, Rect::new(area.x, y, area.width, height));
        y += height;
    }
}

fn render_form(f: &mut Frame, area: Rect, form: &ContactFormView, app: &App) {
    let mut constraints: Vec<Constraint> = form
        .fields
        .iter()
        .map(|field| Constraint::Length(if field.multiline { 5 } else { 3 }))
        .collect();
    constraints.push(Constraint::Length(1));
    constraints.push(Constraint::Min(0));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (i, field) in form.fields.iter().enumerate() {
        let focused = i == app.focused_field;
        let mut value = app.form.field(i).to_string();
        if focused {
            value.push('▏');
        }
        let border = if focused { Color::Yellow } else { Color::DarkGray };

        let input = Paragraph::new(value).wrap(Wrap { trim: false }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .title(format!(" {} ", field.label)),
        );
        f.render_widget(input, rows[i]);
    }

    let n = form.fields.len();
    let button = Line::from(vec![
        Span::styled(
            format!("[ {} ]", form.submit_label),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  press Enter", Style::default().fg(Color::DarkGray)),
    ]);
    f.render_widget(Paragraph::new(button), rows[n]);

    if let Some(ack) = &form.acknowledgement {
        let ack = Paragraph::new(Line::from(Span::styled(
            format!("✓ {ack}"),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )));
        f.render_widget(ack, rows[n + 1]);
    }
}

// ============================================================================
// CHARTS
// ============================================================================

fn hex_color(value: &str) -> Color {
    let hex = value.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return Color::Gray;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    match (channel(0), channel(2), channel(4)) {
        (Some(r), Some(g), Some(b)) => Color::Rgb(r, g, b),
        _ => Color::Gray,
    }
}

fn trace_color(trace: &Trace) -> Color {
    match trace {
        Trace::Bar(bar) => match &bar.marker.color {
            Some(MarkerColor::Single(c)) => hex_color(c),
            _ => PRIMARY,
        },
        Trace::Scatter(scatter) => hex_color(&scatter.line.color),
        Trace::Scatterpolar(polar) => hex_color(&polar.line.color),
    }
}

fn render_chart(f: &mut Frame, area: Rect, chart: &ChartBlock) {
    let figure = &chart.figure;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if !figure.layout.shapes.is_empty() {
        render_diagram(f, area, figure, block);
    } else if matches!(figure.data.first(), Some(Trace::Scatterpolar(_))) {
        render_radar(f, area, figure, block);
    } else if figure.data.iter().all(|t| {
        matches!(t, Trace::Bar(b) if b.orientation == Some(Orientation::Horizontal))
    }) {
        render_horizontal_bars(f, area, figure, block);
    } else {
        render_series(f, area, figure, block);
    }
}

fn render_diagram(f: &mut Frame, area: Rect, figure: &Figure, block: Block) {
    let inner = block.inner(area);
    let cell_w = 1.0 / f64::from(inner.width.max(1));
    let cell_h = 1.0 / f64::from(inner.height.max(1));

    let canvas = Canvas::default()
        .block(block)
        .x_bounds([0.0, 1.0])
        .y_bounds([0.0, 1.0])
        .paint(|ctx| {
            for shape in figure.rectangles() {
                ctx.draw(&Rectangle {
                    x: shape.x0,
                    y: shape.y0,
                    width: shape.x1 - shape.x0,
                    height: shape.y1 - shape.y0,
                    color: hex_color(&shape.fillcolor),
                });
            }
            for arrow in figure.arrows() {
                let (x0, y0) = (arrow.ax.unwrap_or(arrow.x), arrow.ay.unwrap_or(arrow.y));
                let color = Color::Gray;
                ctx.draw(&CanvasLine { x1: x0, y1: y0, x2: arrow.x, y2: arrow.y, color });

                // Two short strokes for the head
                let (dx, dy) = (arrow.x - x0, arrow.y - y0);
                let len = (dx * dx + dy * dy).sqrt();
                if len > 0.0 {
                    let (ux, uy) = (dx / len, dy / len);
                    for side in [-1.0, 1.0] {
                        let hx = arrow.x - 0.02 * (ux * 0.866 - side * uy * 0.5);
                        let hy = arrow.y - 0.02 * (uy * 0.866 + side * ux * 0.5);
                        ctx.draw(&CanvasLine { x1: arrow.x, y1: arrow.y, x2: hx, y2: hy, color });
                    }
                }
            }
            ctx.layer();
            for label in figure.text_annotations() {
                let text = label.text.as_deref().unwrap_or_default();
                let lines: Vec<&str> = text.split("<br>").collect();
                let top = label.y + (lines.len() as f64 - 1.0) * cell_h / 2.0;
                for (i, line) in lines.iter().enumerate() {
                    let x = label.x - line.chars().count() as f64 * cell_w / 2.0;
                    ctx.print(
                        x,
                        top - i as f64 * cell_h,
                        Span::styled(line.to_string(), Style::default().fg(Color::White)),
                    );
                }
            }
        });

    f.render_widget(canvas, area);
}

fn render_radar(f: &mut Frame, area: Rect, figure: &Figure, block: Block) {
    let Some(Trace::Scatterpolar(polar)) = figure.data.first() else {
        return;
    };
    // The polygon is closed, so the last point repeats the first.
    let axes = polar.r.len().saturating_sub(1).max(1);
    let point = |i: usize, radius: f64| {
        let angle = std::f64::consts::FRAC_PI_2 - std::f64::consts::TAU * i as f64 / axes as f64;
        (radius * angle.cos(), radius * angle.sin())
    };
    let color = hex_color(&polar.line.color);

    let canvas = Canvas::default()
        .block(block)
        .x_bounds([-1.6, 1.6])
        .y_bounds([-1.2, 1.2])
        .paint(|ctx| {
            for ring in [0.25, 0.5, 0.75, 1.0] {
                for i in 0..axes {
                    let (x1, y1) = point(i, ring);
                    let (x2, y2) = point(i + 1, ring);
                    ctx.draw(&CanvasLine { x1, y1, x2, y2, color: Color::DarkGray });
                }
            }
            for i in 0..axes {
                let (x2, y2) = point(i, 1.0);
                ctx.draw(&CanvasLine { x1: 0.0, y1: 0.0, x2, y2, color: Color::DarkGray });
            }
            for (i, pair) in polar.r.windows(2).enumerate() {
                let (x1, y1) = point(i, pair[0] / 100.0);
                let (x2, y2) = point(i + 1, pair[1] / 100.0);
                ctx.draw(&CanvasLine { x1, y1, x2, y2, color });
            }
            ctx.layer();
            for (i, (theta, r)) in polar.theta.iter().zip(&polar.r).take(axes).enumerate() {
                let (x, y) = point(i, 1.1);
                ctx.print(
                    x - 0.15,
                    y,
                    Span::styled(format!("{theta} ({r:.0})"), Style::default().fg(Color::Gray)),
                );
            }
        });

    f.render_widget(canvas, area);
}

fn render_horizontal_bars(f: &mut Frame, area: Rect, figure: &Figure, block: Block) {
    let mut bars = vec![];
    for trace in &figure.data {
        let Trace::Bar(bar) = trace else { continue };
        let (Some(values), Some(labels)) = (bar.x.numbers(), bar.y.labels()) else {
            continue;
        };
        let color = trace_color(trace);
        for (value, label) in values.iter().zip(labels) {
            bars.push(
                Bar::default()
                    .value(value.round().max(0.0) as u64)
                    .label(Line::from(label.clone()))
                    .text_value(format!("{value:.0}"))
                    .style(Style::default().fg(color)),
            );
        }
    }

    let chart = BarChart::default()
        .block(block)
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .max(100)
        .data(BarGroup::default().bars(&bars));

    f.render_widget(chart, area);
}

/// Category or numeric x values mapped onto a numeric axis.
fn x_positions(values: &Values) -> Vec<f64> {
    match values {
        Values::Numbers(v) => v.clone(),
        Values::Labels(v) => (0..v.len()).map(|i| i as f64).collect(),
    }
}

fn render_series(f: &mut Frame, area: Rect, figure: &Figure, block: Block) {
    let mut series: Vec<(String, Vec<(f64, f64)>, Color, bool)> = vec![];
    let mut categories: Vec<String> = vec![];

    for trace in &figure.data {
        let (name, x, y, is_bar) = match trace {
            Trace::Bar(b) => (b.name.clone().unwrap_or_default(), &b.x, &b.y, true),
            Trace::Scatter(s) => (s.name.clone(), &s.x, &s.y, false),
            Trace::Scatterpolar(_) => continue,
        };
        if categories.is_empty() {
            if let Some(labels) = x.labels() {
                categories = labels.to_vec();
            }
        }
        let Some(ys) = y.numbers() else { continue };
        let points = x_positions(x).into_iter().zip(ys.iter().copied()).collect();
        series.push((name, points, trace_color(trace), is_bar));
    }

    let (mut x_min, mut x_max, mut y_max) = (f64::MAX, f64::MIN, 0.0_f64);
    for (_, points, _, _) in &series {
        for (x, y) in points {
            x_min = x_min.min(*x);
            x_max = x_max.max(*x);
            y_max = y_max.max(*y);
        }
    }
    if x_min > x_max {
        (x_min, x_max) = (0.0, 1.0);
    }
    let y_max = (y_max * 1.1).max(1.0);

    let datasets: Vec<Dataset> = series
        .iter()
        .map(|(name, points, color, is_bar)| {
            let (marker, graph) = if *is_bar {
                (symbols::Marker::Block, GraphType::Scatter)
            } else {
                (symbols::Marker::Braille, GraphType::Line)
            };
            Dataset::default()
                .name(name.clone())
                .marker(marker)
                .graph_type(graph)
                .style(Style::default().fg(*color))
                .data(points)
        })
        .collect();

    let x_labels: Vec<Span> = if categories.is_empty() {
        vec![
            Span::raw(format!("{x_min:.0}")),
            Span::raw(format!("{x_max:.0}")),
        ]
    } else {
        let last = categories.len() - 1;
        vec![
            Span::raw(categories[0].clone()),
            Span::raw(categories[last / 2].clone()),
            Span::raw(categories[last].clone()),
        ]
    };

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .bounds([x_min, x_max])
                .labels(x_labels)
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds([0.0, y_max])
                .labels(vec![
                    Span::raw("0"),
                    Span::raw(format!("{:.0}", y_max / 2.0)),
                    Span::raw(format!("{y_max:.0}")),
                ])
                .style(Style::default().fg(Color::DarkGray)),
        );

    f.render_widget(chart, area);
}
