//! Story viewer application loop.
//!
//! Glues the [`StoriesViewer`] to the terminal: feeds it clock updates,
//! drives the video stand-in, maps input to viewer actions and redraws.

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use super::input::{self, InputAction, PointerTracker};
use super::media::VideoClock;
use super::ui;
use crate::config::PlaybackConfig;
use crate::player::MediaCommand;
use crate::story::Media;
use crate::viewer::{StoriesViewer, ViewerEvent};

/// Longest wait between redraws (also the video position update cadence).
const FRAME: Duration = Duration::from_millis(100);

/// Terminal viewer around a [`StoriesViewer`].
pub struct ViewerApp {
    viewer: StoriesViewer,
    pointer: PointerTracker,
    video: Option<VideoClock>,
    /// (group, story) the video stand-in was started for
    media_key: Option<(usize, usize)>,
    video_fallback_secs: f64,
}

impl ViewerApp {
    pub fn new(viewer: StoriesViewer, config: &PlaybackConfig) -> Self {
        Self {
            viewer,
            pointer: PointerTracker::new(Duration::from_millis(config.hold_threshold_ms)),
            video: None,
            media_key: None,
            video_fallback_secs: config.video_fallback_secs,
        }
    }

    pub fn viewer(&self) -> &StoriesViewer {
        &self.viewer
    }

    pub fn video(&self) -> Option<&VideoClock> {
        self.video.as_ref()
    }

    /// Advance media and timers to `now`.
    pub fn step(&mut self, now: Instant) -> ViewerEvent {
        self.sync_media(now);
        if let Some(clock) = self.video.as_mut() {
            let position = clock.advance(now);
            let duration = clock.duration();
            let ended = clock.take_ended();
            self.viewer.on_time_update(position, duration);
            if ended {
                let event = self.viewer.on_ended(now);
                self.after(event, now);
                if event != ViewerEvent::Continue {
                    return event;
                }
            }
        }
        let event = self.viewer.poll(now);
        self.after(event, now);
        event
    }

    /// Apply an input action. Returns false when the viewer should close.
    pub fn handle_action(&mut self, action: InputAction, now: Instant) -> bool {
        let event = match action {
            InputAction::None => ViewerEvent::Continue,
            InputAction::Press => {
                let command = self.viewer.press();
                self.apply_media(command, now);
                ViewerEvent::Continue
            }
            InputAction::Release => {
                let command = self.viewer.release(now);
                self.apply_media(command, now);
                ViewerEvent::Continue
            }
            InputAction::ToggleHold => {
                let held = self
                    .viewer
                    .engine()
                    .is_some_and(|engine| engine.state().paused);
                let command = if held {
                    self.viewer.release(now)
                } else {
                    self.viewer.press()
                };
                self.apply_media(command, now);
                ViewerEvent::Continue
            }
            InputAction::Tap(zone) => {
                let command = self.viewer.release(now);
                self.apply_media(command, now);
                self.viewer.tap(zone, now)
            }
            InputAction::PrevUser => self.viewer.prev_user(now),
            InputAction::NextUser => self.viewer.next_user(now),
            InputAction::Close => {
                self.viewer.close();
                ViewerEvent::Closed
            }
        };
        self.after(event, now);
        event != ViewerEvent::Closed
    }

    /// Time to wait for input before the next step.
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.viewer
            .engine()
            .and_then(|engine| engine.next_deadline())
            .map(|due| due.saturating_duration_since(now))
            .unwrap_or(FRAME)
            .min(FRAME)
    }

    /// Run the viewer in the terminal until it closes.
    #[cfg(not(tarpaulin_include))]
    pub fn run(mut self) -> Result<()> {
        let mut session = TerminalSession::enter()?;
        loop {
            if self.step(Instant::now()) == ViewerEvent::Closed {
                break;
            }
            session
                .terminal
                .draw(|frame| ui::draw(frame, &self.viewer, self.video.as_ref()))?;

            if event::poll(self.poll_timeout(Instant::now()))? {
                let width = session.terminal.size()?.width;
                let action =
                    input::handle_event(event::read()?, &mut self.pointer, width, Instant::now());
                if !self.handle_action(action, Instant::now()) {
                    break;
                }
            }
        }
        Ok(())
    }

    fn apply_media(&mut self, command: Option<MediaCommand>, now: Instant) {
        if let (Some(command), Some(clock)) = (command, self.video.as_mut()) {
            clock.apply(command, now);
        }
    }

    fn after(&mut self, event: ViewerEvent, now: Instant) {
        match event {
            ViewerEvent::StoryChanged | ViewerEvent::GroupChanged => {
                // Restarts keep the same key, so force a fresh media element.
                self.media_key = None;
                self.sync_media(now);
            }
            ViewerEvent::Closed => {
                self.video = None;
                self.media_key = None;
            }
            ViewerEvent::Continue => {}
        }
    }

    /// Start or stop the video stand-in to match the story on screen.
    fn sync_media(&mut self, now: Instant) {
        let (Some(group), Some(engine)) = (self.viewer.group_index(), self.viewer.engine()) else {
            self.video = None;
            self.media_key = None;
            return;
        };
        let key = (group, engine.state().current_index);
        if self.media_key == Some(key) {
            return;
        }
        self.media_key = Some(key);
        self.video = match &engine.current_item().media {
            Media::Video { duration_secs, .. } => Some(VideoClock::start(
                duration_secs.unwrap_or(self.video_fallback_secs),
                now,
            )),
            Media::Image { .. } | Media::Text { .. } => None,
        };
    }
}

/// Raw-mode alternate screen with mouse capture, restored on drop.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    #[cfg(not(tarpaulin_include))]
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}
