//! Drive a `ReaderApp` against an in-memory terminal

use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use customizer::app::ReaderApp;
use customizer::article::Article;
use customizer::config::Config;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

/// Test harness wrapping the reader and a `TestBackend` terminal
pub struct ReaderTestHarness {
    app: ReaderApp,
    terminal: Terminal<TestBackend>,
}

impl ReaderTestHarness {
    /// Reader with the default config and the sample article
    pub fn new(width: u16, height: u16) -> anyhow::Result<Self> {
        Self::with_config(Config::default(), width, height)
    }

    pub fn with_config(config: Config, width: u16, height: u16) -> anyhow::Result<Self> {
        super::tracing::init_tracing_from_env();
        let app = ReaderApp::new(config, Article::sample())?;
        let terminal = Terminal::new(TestBackend::new(width, height))?;
        Ok(Self { app, terminal })
    }

    pub fn app(&self) -> &ReaderApp {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut ReaderApp {
        &mut self.app
    }

    pub fn render(&mut self) -> anyhow::Result<()> {
        let app = &mut self.app;
        self.terminal.draw(|frame| app.render(frame))?;
        Ok(())
    }

    /// Send a key and re-render
    pub fn send_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> anyhow::Result<()> {
        self.app.handle_key(KeyEvent::new(code, modifiers));
        self.render()
    }

    pub fn press(&mut self, code: KeyCode) -> anyhow::Result<()> {
        self.send_key(code, KeyModifiers::NONE)
    }

    fn mouse(&mut self, kind: MouseEventKind, column: u16, row: u16) -> anyhow::Result<()> {
        self.app.handle_mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
        self.render()
    }

    pub fn mouse_down(&mut self, column: u16, row: u16) -> anyhow::Result<()> {
        self.mouse(MouseEventKind::Down(MouseButton::Left), column, row)
    }

    pub fn mouse_up(&mut self, column: u16, row: u16) -> anyhow::Result<()> {
        self.mouse(MouseEventKind::Up(MouseButton::Left), column, row)
    }

    pub fn mouse_move(&mut self, column: u16, row: u16) -> anyhow::Result<()> {
        self.mouse(MouseEventKind::Moved, column, row)
    }

    /// Press and release at the same cell
    pub fn click(&mut self, column: u16, row: u16) -> anyhow::Result<()> {
        self.mouse_down(column, row)?;
        self.mouse_up(column, row)
    }

    /// Click the first cell showing `text`
    pub fn click_text(&mut self, text: &str) -> anyhow::Result<()> {
        let Some((column, row)) = self.find_text(text) else {
            anyhow::bail!("{text:?} not on screen:\n{}", self.screen_to_string());
        };
        self.click(column, row)
    }

    /// Screen rows as strings
    pub fn screen_rows(&self) -> Vec<String> {
        let buffer = self.terminal.backend().buffer();
        let area = buffer.area;
        (area.y..area.y + area.height)
            .map(|y| {
                (area.x..area.x + area.width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect()
            })
            .collect()
    }

    pub fn screen_to_string(&self) -> String {
        self.screen_rows().join("\n")
    }

    /// Position of the first occurrence of `text`, scanning rows top to bottom
    pub fn find_text(&self, text: &str) -> Option<(u16, u16)> {
        self.screen_rows().iter().enumerate().find_map(|(row, line)| {
            line.find(text).map(|byte| {
                // Columns count cells, not bytes
                let column = line[..byte].chars().count();
                (column as u16, row as u16)
            })
        })
    }

    pub fn assert_screen_contains(&self, text: &str) {
        let screen = self.screen_to_string();
        assert!(
            screen.contains(text),
            "Expected screen to contain {text:?}\nScreen:\n{screen}"
        );
    }

    pub fn assert_screen_not_contains(&self, text: &str) {
        let screen = self.screen_to_string();
        assert!(
            !screen.contains(text),
            "Expected screen not to contain {text:?}\nScreen:\n{screen}"
        );
    }
}
