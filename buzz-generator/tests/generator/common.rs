//! Common test utilities for generator tests

use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::collections::{HashMap, HashSet};
use std::ops::Range;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use buzz_generator::generator::{
    ContentProvider, ErrorPolicy, Language, Platform, ProviderResult,
};
use buzz_generator::models::App;
use buzz_generator::provider::ProviderFactory;

/// Scripted provider that records every prompt it receives
#[derive(Default)]
pub struct FakeProvider {
    pub prompts: Mutex<Vec<String>>,
    pub failing_platforms: HashSet<Platform>,
    pub fail_image: bool,
    pub no_image_url: bool,
    /// Replies used instead of the default short post
    pub posts: HashMap<Platform, String>,
    pub image_url: Option<String>,
    /// Delay before every answer, to observe a run in flight
    pub delay: Option<Duration>,
}

impl FakeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(mut self, platform: Platform) -> Self {
        self.failing_platforms.insert(platform);
        self
    }

    pub fn failing_image(mut self) -> Self {
        self.fail_image = true;
        self
    }

    pub fn without_image_url(mut self) -> Self {
        self.no_image_url = true;
        self
    }

    pub fn with_post(mut self, platform: Platform, text: impl Into<String>) -> Self {
        self.posts.insert(platform, text.into());
        self
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn recorded(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    fn platform_of(prompt: &str) -> Option<Platform> {
        Platform::ALL
            .into_iter()
            .find(|p| prompt.contains(&format!("Format it for {},", p)))
    }
}

#[async_trait]
impl ContentProvider for FakeProvider {
    async fn complete(&self, prompt: &str) -> ProviderResult<String> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.prompts.lock().unwrap().push(prompt.to_string());

        let platform = Self::platform_of(prompt).ok_or("prompt names no platform")?;
        if self.failing_platforms.contains(&platform) {
            return Err(format!("{} quota exceeded", platform).into());
        }
        if let Some(text) = self.posts.get(&platform) {
            return Ok(text.clone());
        }
        Ok(format!("\n  {} post about the launch  \n", platform))
    }

    async fn illustrate(&self, prompt: &str) -> ProviderResult<Option<String>> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.prompts.lock().unwrap().push(prompt.to_string());

        if self.fail_image {
            return Err("content policy violation".into());
        }
        if self.no_image_url {
            return Ok(None);
        }
        Ok(Some(self.image_url.clone().unwrap_or_else(|| {
            "https://images.example.com/launch.png".to_string()
        })))
    }
}

/// Factory handing out the same fake for every key
pub fn fake_factory(provider: Arc<FakeProvider>) -> ProviderFactory {
    Arc::new(move |_api_key: &str| -> ProviderResult<Arc<dyn ContentProvider>> {
        Ok(provider.clone() as Arc<dyn ContentProvider>)
    })
}

/// App wired to a fake provider on the current tokio runtime
pub fn test_app(provider: Arc<FakeProvider>, api_key: &str, policy: ErrorPolicy) -> App {
    App::new(
        api_key.to_string(),
        Language::English,
        policy,
        fake_factory(provider),
        tokio::runtime::Handle::current(),
    )
}

/// Poll until the running generation has been collected
pub async fn wait_for_generation(app: &mut App) {
    for _ in 0..500 {
        app.poll_generation();
        if !app.is_generating() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("generation did not finish in time");
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key(key(KeyCode::Char(c)));
    }
}

/// Render one frame and return the given columns of every row
pub fn render_columns(app: &App, width: u16, height: u16, columns: Range<u16>) -> Vec<String> {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| buzz_generator::ui::ui(f, app)).unwrap();

    let buffer = terminal.backend().buffer();
    let end = columns.end.min(buffer.area.width);
    (0..buffer.area.height)
        .map(|y| {
            (columns.start..end)
                .map(|x| buffer.content[(y * buffer.area.width + x) as usize].symbol())
                .collect::<String>()
        })
        .collect()
}

/// Render one frame and return the screen as text, one line per row
pub fn render_to_string(app: &App, width: u16, height: u16) -> String {
    render_columns(app, width, height, 0..width).join("\n")
}

/// Rows of a rendered region with borders and padding removed, glued together
///
/// Text wrapped over several rows (such as a long URL) reads back contiguous.
pub fn squash_rows(rows: &[String]) -> String {
    rows.iter()
        .map(|row| row.replace('│', "").trim().to_string())
        .collect()
}
