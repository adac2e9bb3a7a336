use crate::config::Config;
use crate::i18n::I18n;
use crate::locale::Locale;
use crate::page::{self, PageModel};
use crate::reward::Reward;
use crate::sequence::{KeyInput, SequenceDetector};
use crate::surface::Hook;
use crate::switcher::LocaleSwitcher;
use crate::translations::TranslationTable;
use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute, terminal,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io::{self, Write};
use std::sync::Once;
use std::time::Instant;
use tracing::{error, info};

const ACCENT: Color = Color::Rgb(0, 212, 255);
const HIGHLIGHT: Color = Color::Rgb(255, 107, 53);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Continue,
    Quit,
}

/// Page state plus the two key-driven components.
pub struct App {
    page: PageModel,
    switcher: LocaleSwitcher,
    detector: SequenceDetector,
    reward: Reward,
    i18n: I18n,
    easter_egg: bool,
}

impl App {
    pub fn new(config: &Config, initial: Locale) -> crate::error::Result<Self> {
        let mut page = PageModel::new(&config.page.brand, config.page.show_year);
        let mut switcher = LocaleSwitcher::new(TranslationTable::builtin(), initial)?;
        switcher.apply_locale(initial, &mut page)?;
        Ok(Self {
            page,
            switcher,
            detector: SequenceDetector::konami(),
            reward: Reward::new(config.easter_egg.notice_duration()),
            i18n: I18n::new(initial),
            easter_egg: config.easter_egg.enabled,
        })
    }

    pub fn handle_key(&mut self, key: &KeyEvent, now: Instant) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Action::Quit;
        }
        let Some(input) = KeyInput::from_key_event(key) else {
            return Action::Continue;
        };

        if self.easter_egg && self.detector.feed(input) {
            self.reward.activate(now);
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Tab => {
                self.toggle();
                Action::Continue
            }
            _ => Action::Continue,
        }
    }

    fn toggle(&mut self) {
        match self.switcher.toggle_locale(&mut self.page) {
            Ok(locale) => self.i18n.set_lang(locale),
            Err(e) => error!(error = %e, "{}", self.i18n.t("error_toggle")),
        }
    }

    /// Timer work for one loop turn.
    pub fn tick(&mut self, now: Instant) {
        self.reward.expire(now);
    }

    pub fn page(&self) -> &PageModel {
        &self.page
    }

    pub fn locale(&self) -> Locale {
        self.switcher.active()
    }

    pub fn reward(&self) -> &Reward {
        &self.reward
    }

    #[cfg(test)]
    pub fn detector(&self) -> &SequenceDetector {
        &self.detector
    }
}

/// Leaves raw mode and the alternate screen when dropped.
struct TerminalGuard {
    alt_screen: bool,
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal(self.alt_screen);
    }
}

pub fn restore_terminal(alt_screen: bool) {
    let _ = terminal::disable_raw_mode();
    let mut stdout = io::stdout();
    if alt_screen {
        let _ = execute!(stdout, terminal::LeaveAlternateScreen);
    }
    let _ = execute!(stdout, cursor::Show);
    let _ = stdout.flush();
}

/// Run the interactive page until the user quits. Falls back to a one-shot
/// print when the terminal cannot enter raw mode.
pub fn run(config: &Config, initial: Locale) -> Result<()> {
    let mut app = App::new(config, initial)?;
    let alt_screen = config.use_alt_screen();

    static INIT_CTRL_C: Once = Once::new();
    INIT_CTRL_C.call_once(|| {
        let _ = ctrlc::set_handler(move || {
            // Best-effort restore terminal state and exit with 130
            restore_terminal(alt_screen);
            std::process::exit(130);
        });
    });

    if terminal::enable_raw_mode().is_err() {
        println!("{}", app.i18n.t("warning_interactive_failed"));
        return page::print_page(config, initial, false);
    }
    let _guard = TerminalGuard { alt_screen };

    let mut stdout = io::stdout();
    if alt_screen {
        execute!(stdout, terminal::EnterAlternateScreen)?;
    }
    execute!(stdout, cursor::Hide)?;

    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.clear()?;
    info!(locale = %app.locale(), "interactive page started");

    event_loop(&mut terminal, &mut app, config)?;

    info!(
        locale = %app.locale(),
        activations = app.reward().activations(),
        "interactive page closed"
    );
    Ok(())
}

fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App, config: &Config) -> Result<()> {
    let tick = config.tick();
    loop {
        let now = Instant::now();
        app.tick(now);
        terminal.draw(|frame| draw(frame, app, now))?;

        if event::poll(tick)? {
            if let Event::Key(key) = event::read()? {
                if app.handle_key(&key, Instant::now()) == Action::Quit {
                    return Ok(());
                }
            }
        }
    }
}

pub fn draw(frame: &mut Frame, app: &App, now: Instant) {
    let area = frame.size();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let page = app.page();
    let logo_color = app
        .reward
        .logo_hue(now)
        .map(hue_to_color)
        .unwrap_or(ACCENT);
    let header = Line::from(vec![
        Span::styled(
            format!(" {} ", page.brand()),
            Style::default().fg(logo_color).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            format!("[{}]", app.i18n.t_format("language_button", &[page.text(Hook::LanguageIndicator)])),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(header), chunks[0]);

    let mut lines = vec![
        Line::from(Span::styled(
            page.text(Hook::Title).to_string(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::raw(page.text(Hook::Description).to_string()),
        Line::raw(""),
        Line::raw(page.text(Hook::Description2).to_string()),
        Line::raw(""),
        Line::from(Span::styled(
            app.i18n.t("features_heading"),
            Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD),
        )),
    ];
    lines.push(Line::raw(page.feature_titles().join("  ·  ")));
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        page.text(Hook::ProgressLabel).to_string(),
        Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
    )));
    lines.push(Line::from(Span::styled(
        page.text(Hook::Cta).to_string(),
        Style::default().fg(HIGHLIGHT),
    )));
    if let Some(footer) = page.footer(&app.i18n) {
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(footer, Style::default().fg(Color::DarkGray))));
    }

    let body = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", page.text(Hook::RootLang))),
        );
    frame.render_widget(body, chunks[1]);

    frame.render_widget(
        Paragraph::new(app.i18n.t("navigate_hint")).style(Style::default().fg(Color::DarkGray)),
        chunks[2],
    );

    if let Some(notice) = app.reward.visible_notice(now) {
        let popup = centered_rect(40, 5, area);
        frame.render_widget(Clear, popup);
        frame.render_widget(
            Paragraph::new(vec![Line::raw(""), Line::raw(notice.text.clone())])
                .alignment(Alignment::Center)
                .style(Style::default().bg(ACCENT).fg(Color::Black).add_modifier(Modifier::BOLD))
                .block(Block::default().borders(Borders::ALL)),
            popup,
        );
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Fully saturated color for a hue in degrees.
fn hue_to_color(hue: f32) -> Color {
    let h = hue.rem_euclid(360.0) / 60.0;
    let x = 1.0 - (h % 2.0 - 1.0).abs();
    let (r, g, b) = match h as u32 {
        0 => (1.0, x, 0.0),
        1 => (x, 1.0, 0.0),
        2 => (0.0, 1.0, x),
        3 => (0.0, x, 1.0),
        4 => (x, 0.0, 1.0),
        _ => (1.0, 0.0, x),
    };
    Color::Rgb((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
}
