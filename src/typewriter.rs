//! Looping typewriter for the hero subtitle.
//!
//! [`Typewriter`] is the pure state machine: it types a phrase one character
//! at a time, holds it, deletes it, holds the empty line, and moves on to the
//! next phrase, forever. Each [`Typewriter::tick`] applies exactly one
//! transition and reports how long to wait before the next one.
//!
//! [`Animator`] pairs the machine with a [`TextSurface`] and, in the browser,
//! drives it from a single timer chain that can be stopped through the
//! returned [`AnimatorHandle`].

#[cfg(test)]
#[path = "typewriter_test.rs"]
mod typewriter_test;

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::{DELETE_DELAY_MS, EMPTY_PAUSE_MS, FULL_PAUSE_MS, TYPE_DELAY_MS};
use crate::error::{FxError, Result};

/// Typewriter cadence, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypewriterTiming {
    pub type_delay_ms: u64,
    pub full_pause_ms: u64,
    pub delete_delay_ms: u64,
    pub empty_pause_ms: u64,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            type_delay_ms: TYPE_DELAY_MS,
            full_pause_ms: FULL_PAUSE_MS,
            delete_delay_ms: DELETE_DELAY_MS,
            empty_pause_ms: EMPTY_PAUSE_MS,
        }
    }
}

impl TypewriterTiming {
    /// Reject zero delays. A zero anywhere would let [`Animator::step`] spin
    /// without ever yielding to the event loop.
    pub fn validate(&self) -> Result<()> {
        let delays = [
            ("typeDelayMs", self.type_delay_ms),
            ("fullPauseMs", self.full_pause_ms),
            ("deleteDelayMs", self.delete_delay_ms),
            ("emptyPauseMs", self.empty_pause_ms),
        ];
        for (name, value) in delays {
            if value == 0 {
                return Err(FxError::InvalidConfig(format!("{name} must be greater than zero")));
            }
        }
        Ok(())
    }
}

/// Which transition the next tick performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Adding characters until the phrase is complete.
    #[default]
    Typing,
    /// Holding the complete phrase.
    PausedFull,
    /// Removing characters until the line is empty.
    Deleting,
    /// Holding the empty line before the next phrase.
    PausedEmpty,
}

/// Typewriter state: the phrase list and the visible prefix.
///
/// `char_count` counts Unicode scalar values and never exceeds the length of
/// the current phrase.
#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<String>,
    phrase_index: usize,
    char_count: usize,
    mode: Mode,
    timing: TypewriterTiming,
}

impl Typewriter {
    /// Start at the first phrase, empty, typing.
    pub fn new(phrases: Vec<String>, timing: TypewriterTiming) -> Result<Self> {
        if phrases.is_empty() {
            return Err(FxError::EmptyPhrases);
        }
        timing.validate()?;
        Ok(Self { phrases, phrase_index: 0, char_count: 0, mode: Mode::Typing, timing })
    }

    /// Apply one transition and return the delay before the next tick.
    ///
    /// Leaving a paused state returns [`Duration::ZERO`]: the pause was
    /// already spent waiting for this tick.
    pub fn tick(&mut self) -> Duration {
        let len = self.phrase_len();
        match self.mode {
            Mode::Typing if self.char_count < len => {
                self.char_count += 1;
                Duration::from_millis(self.timing.type_delay_ms)
            }
            Mode::Typing => {
                self.mode = Mode::PausedFull;
                Duration::from_millis(self.timing.full_pause_ms)
            }
            Mode::PausedFull => {
                self.mode = Mode::Deleting;
                Duration::ZERO
            }
            Mode::Deleting if self.char_count > 0 => {
                self.char_count -= 1;
                Duration::from_millis(self.timing.delete_delay_ms)
            }
            Mode::Deleting => {
                self.mode = Mode::PausedEmpty;
                Duration::from_millis(self.timing.empty_pause_ms)
            }
            Mode::PausedEmpty => {
                self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
                self.mode = Mode::Typing;
                Duration::ZERO
            }
        }
    }

    /// The visible prefix of the current phrase.
    #[must_use]
    pub fn text(&self) -> &str {
        let phrase = self.phrase();
        let end = phrase.char_indices().nth(self.char_count).map_or(phrase.len(), |(i, _)| i);
        &phrase[..end]
    }

    #[must_use]
    pub fn phrase(&self) -> &str {
        &self.phrases[self.phrase_index]
    }

    #[must_use]
    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    #[must_use]
    pub fn char_count(&self) -> usize {
        self.char_count
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    fn phrase_len(&self) -> usize {
        self.phrase().chars().count()
    }
}

/// Where the typewriter draws.
///
/// `render` replaces the visible text with `text` and leaves exactly one
/// cursor marker after it.
pub trait TextSurface {
    fn render(&mut self, text: &str);
}

/// A [`Typewriter`] bound to the surface it renders on.
pub struct Animator<S> {
    typewriter: Typewriter,
    surface: S,
}

impl<S: TextSurface> Animator<S> {
    pub fn new(typewriter: Typewriter, surface: S) -> Self {
        Self { typewriter, surface }
    }

    /// Draw the current prefix without advancing.
    pub fn render_current(&mut self) {
        self.surface.render(self.typewriter.text());
    }

    /// Tick until a real delay comes up, rendering after every tick.
    ///
    /// Always terminates: every cycle through the machine passes at least one
    /// non-zero delay, and [`TypewriterTiming::validate`] rules out zeros.
    pub fn step(&mut self) -> Duration {
        loop {
            let delay = self.typewriter.tick();
            self.surface.render(self.typewriter.text());
            if !delay.is_zero() {
                return delay;
            }
        }
    }

    /// How long the first (empty) frame stays up before typing begins: one
    /// typing beat, the same as between any two typed characters.
    #[must_use]
    pub fn initial_delay(&self) -> Duration {
        Duration::from_millis(self.typewriter.timing.type_delay_ms)
    }

    #[must_use]
    pub fn typewriter(&self) -> &Typewriter {
        &self.typewriter
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }
}

#[cfg(feature = "web")]
impl<S: TextSurface + 'static> Animator<S> {
    /// Render the empty frame immediately, then keep stepping on a single
    /// timer chain starting after [`Animator::initial_delay`].
    ///
    /// Only one sleep is ever pending. Stopping (or dropping) the handle
    /// resolves the stop signal, which wins the race against that sleep and
    /// ends the chain.
    pub fn start(mut self) -> AnimatorHandle {
        use futures::channel::oneshot;
        use futures::future::{Either, select};

        let (stop_tx, mut stop_rx) = oneshot::channel::<()>();
        self.render_current();
        let mut delay = self.initial_delay();
        wasm_bindgen_futures::spawn_local(async move {
            loop {
                let sleep = Box::pin(gloo_timers::future::sleep(delay));
                if let Either::Right(_) = select(sleep, &mut stop_rx).await {
                    break;
                }
                delay = self.step();
            }
            log::debug!("typewriter stopped");
        });
        AnimatorHandle { stop: Some(stop_tx) }
    }
}

/// Stop switch for a running [`Animator`].
#[cfg(feature = "web")]
pub struct AnimatorHandle {
    stop: Option<futures::channel::oneshot::Sender<()>>,
}

#[cfg(feature = "web")]
impl AnimatorHandle {
    pub fn stop(&mut self) {
        if let Some(tx) = self.stop.take() {
            if tx.send(()).is_err() {
                log::debug!("typewriter already stopped");
            }
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.stop.as_ref().is_some_and(|tx| !tx.is_canceled())
    }
}

#[cfg(feature = "web")]
impl Drop for AnimatorHandle {
    fn drop(&mut self) {
        self.stop();
    }
}
