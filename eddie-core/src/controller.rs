//! Display controller
//!
//! The controller is the single consumer of the command queue. It:
//! - Owns the display, the indicator and the session state
//! - Applies one command at a time, in arrival order
//! - Runs the start-up greeting and the shutdown sequence
//!
//! Display failures while rendering are returned as errors; the caller
//! treats them as fatal. A failed scroll step is reported in the outcome
//! and the session still moves on.

use core::fmt;

use eddie_display::glyph::{SLOT_HEART, SLOT_SMILEY};
use eddie_display::{CharacterDisplay, DisplayError, Rgb, ScrollDirection, GLYPHS};
use embedded_hal_async::delay::DelayNs;
use rand::RngCore;

use crate::command::Command;
use crate::policy::{PolicyError, Reason, Selection, SelectionPolicy, DEFAULT_SENTENCE_AFTER};
use crate::session::Session;
use crate::state::{Event, State};
use crate::traits::{Indicator, IndicatorError};
use crate::vocabulary::{self, Item, RenderedText, Vocabulary, VocabularyError};

/// Rotary movement ignored as noise
pub const DEFAULT_DEAD_ZONE: u16 = 5;

/// Pause after clearing the display at shutdown
pub const QUIT_CLEAR_DELAY_MS: u32 = 2;

/// Pause after the final backlight change at shutdown
pub const QUIT_COLOR_DELAY_MS: u32 = 50;

/// Controller tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControllerConfig {
    /// Largest rotary change that does not scroll
    pub dead_zone: u16,
    /// Word advances before a sentence
    pub sentence_after: u16,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            dead_zone: DEFAULT_DEAD_ZONE,
            sentence_after: DEFAULT_SENTENCE_AFTER,
        }
    }
}

/// Start-up greeting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Greeting<'a> {
    pub name: &'a str,
    pub color: Rgb,
}

impl Default for Greeting<'_> {
    fn default() -> Self {
        Self {
            name: "Giana",
            color: Rgb::GREETING,
        }
    }
}

impl Greeting<'_> {
    /// Display bytes: name and a heart on line one, a smiley on line two
    pub fn render(&self) -> Result<RenderedText, VocabularyError> {
        let name = vocabulary::render(self.name)?;
        let mut out = RenderedText::new();
        let parts: [&[u8]; 6] = [
            b"Hola ",
            &name,
            b" ",
            &[SLOT_HEART],
            b"\nHave fun!  ",
            &[SLOT_SMILEY],
        ];
        let len: usize = parts.iter().map(|part| part.len()).sum();
        for part in parts {
            out.extend_from_slice(part)
                .map_err(|_| VocabularyError::TooLong { len })?;
        }
        Ok(out)
    }
}

/// Result of applying one command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    /// A new item is on the display
    Rendered(Selection),
    /// Feedback given; `item` is what was flagged, if anything was shown
    Marked { item: Option<Item> },
    /// One scroll step issued
    Scrolled(ScrollDirection),
    /// The scroll step failed; the position was still updated
    ScrollFailed {
        direction: ScrollDirection,
        error: DisplayError,
    },
    /// Nothing to do
    Ignored,
    /// Shutdown must run next
    QuitRequested,
}

/// Fatal controller errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControllerError {
    Display(DisplayError),
    Indicator(IndicatorError),
    Vocabulary(VocabularyError),
}

impl From<DisplayError> for ControllerError {
    fn from(e: DisplayError) -> Self {
        ControllerError::Display(e)
    }
}

impl From<IndicatorError> for ControllerError {
    fn from(e: IndicatorError) -> Self {
        ControllerError::Indicator(e)
    }
}

impl From<VocabularyError> for ControllerError {
    fn from(e: VocabularyError) -> Self {
        ControllerError::Vocabulary(e)
    }
}

impl fmt::Display for ControllerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControllerError::Display(e) => write!(f, "display: {}", e),
            ControllerError::Indicator(e) => write!(f, "indicator: {}", e),
            ControllerError::Vocabulary(e) => write!(f, "vocabulary: {}", e),
        }
    }
}

/// Display controller
pub struct Controller<D, I, R> {
    display: D,
    indicator: I,
    policy: SelectionPolicy<R>,
    session: Session,
    state: State,
    config: ControllerConfig,
}

impl<D, I, R> Controller<D, I, R>
where
    D: CharacterDisplay,
    I: Indicator,
    R: RngCore,
{
    /// Create a controller with a fresh session
    pub fn new(
        display: D,
        indicator: I,
        vocabulary: Vocabulary,
        rng: R,
        config: ControllerConfig,
    ) -> Self {
        Self {
            display,
            indicator,
            policy: SelectionPolicy::new(vocabulary, rng, config.sentence_after),
            session: Session::new(),
            state: State::Idle,
            config,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn indicator(&self) -> &I {
        &self.indicator
    }

    /// Load the custom glyphs and show the greeting
    ///
    /// The greeting is not a render: scrolling stays disabled and the
    /// session has no current item until the first advance.
    pub fn greet(&mut self, greeting: &Greeting<'_>) -> Result<(), ControllerError> {
        for (slot, glyph) in GLYPHS.iter().enumerate() {
            self.display.define_glyph(slot as u8, glyph)?;
        }
        self.display.clear()?;
        self.display.set_color(greeting.color)?;
        let text = greeting.render()?;
        self.display.write(&text)?;
        Ok(())
    }

    /// Apply one command
    ///
    /// `Quit` only moves the state machine; the caller then runs
    /// [`Controller::shutdown`]. Commands after `Quit` are ignored.
    pub fn apply(&mut self, command: Command) -> Result<Outcome, ControllerError> {
        if !self.state.accepts_commands() {
            return Ok(Outcome::Ignored);
        }

        match command {
            Command::Advance => self.advance(),
            Command::MarkMissed => self.mark_missed(),
            Command::Scroll(reading) => Ok(self.scroll(reading)),
            Command::Quit => {
                self.state = self.state.transition(Event::QuitReceived);
                Ok(Outcome::QuitRequested)
            }
        }
    }

    /// Run the shutdown sequence
    ///
    /// Clear, pause, white backlight, pause. Every step runs even if an
    /// earlier one failed; the first failure is returned. The state is
    /// `Stopped` afterwards either way.
    pub async fn shutdown<Dl: DelayNs>(&mut self, delay: &mut Dl) -> Result<(), ControllerError> {
        if self.state == State::Stopped {
            return Ok(());
        }
        self.state = self.state.transition(Event::QuitReceived);

        let cleared = self.display.clear();
        delay.delay_ms(QUIT_CLEAR_DELAY_MS).await;
        let colored = self.display.set_color(Rgb::WHITE);
        delay.delay_ms(QUIT_COLOR_DELAY_MS).await;

        self.state = self.state.transition(Event::ShutdownComplete);
        cleared.and(colored).map_err(ControllerError::from)
    }

    fn advance(&mut self) -> Result<Outcome, ControllerError> {
        self.session.advance_counter = self.session.advance_counter.saturating_add(1);

        let color = self.policy.random_color();
        self.display.set_color(color)?;
        self.display.home()?;
        self.display.clear()?;

        let selection = match self.policy.next(&mut self.session) {
            Ok(selection) => selection,
            Err(PolicyError::NoAlternative { word }) => Selection {
                item: word,
                reason: Reason::Repeat,
            },
        };
        let text = self.policy.vocabulary().render(&selection.item)?;
        self.display.write(&text)?;

        self.session.show(selection.item);
        self.session.displaying = true;
        self.indicator.off()?;
        self.state = self.state.transition(Event::Rendered);

        Ok(Outcome::Rendered(selection))
    }

    fn mark_missed(&mut self) -> Result<Outcome, ControllerError> {
        let item = self.session.mark_last_word();

        let color = self.policy.random_color();
        self.display.set_color(color)?;
        self.indicator.on()?;

        Ok(Outcome::Marked { item })
    }

    fn scroll(&mut self, reading: u16) -> Outcome {
        if !self.session.displaying {
            return Outcome::Ignored;
        }

        let previous = self.session.scroll_position;
        if reading.abs_diff(previous) <= self.config.dead_zone {
            return Outcome::Ignored;
        }
        // Direction from the raw positions, not the filtered magnitude
        let Some(direction) = ScrollDirection::between(i32::from(previous), i32::from(reading))
        else {
            return Outcome::Ignored;
        };

        let result = self.display.scroll(direction);
        self.session.scroll_position = reading;

        match result {
            Ok(()) => Outcome::Scrolled(direction),
            Err(error) => Outcome::ScrollFailed { direction, error },
        }
    }
}

#[cfg(test)]
mod tests {
    use embassy_futures::block_on;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::testing::{FakeDisplay, FakeIndicator, Op, RecordingDelay};
    use crate::vocabulary::ItemKind;

    const WORDS: &[&str] = &["gato", "perro", "árbol", "uña"];
    const SENTENCES: &[&str] = &["Yo no sé.", "Hasta caer al suelo."];

    type TestController = Controller<FakeDisplay, FakeIndicator, ChaCha8Rng>;

    fn controller(seed: u64) -> TestController {
        Controller::new(
            FakeDisplay::default(),
            FakeIndicator::default(),
            Vocabulary::new(WORDS, SENTENCES).unwrap(),
            ChaCha8Rng::seed_from_u64(seed),
            ControllerConfig::default(),
        )
    }

    fn rendered(outcome: Outcome) -> Selection {
        match outcome {
            Outcome::Rendered(selection) => selection,
            other => panic!("expected a render, got {:?}", other),
        }
    }

    #[test]
    fn test_greeting() {
        let mut controller = controller(0);
        controller.greet(&Greeting::default()).unwrap();

        let ops = &controller.display().ops;
        let glyphs: Vec<Op> = (0..8).map(Op::Glyph).collect();
        assert_eq!(&ops[..8], &glyphs[..]);
        assert_eq!(ops[8], Op::Clear);
        assert_eq!(ops[9], Op::Color(Rgb::new(20, 255, 0)));
        assert_eq!(
            ops[10],
            Op::Write(b"Hola Giana \x00\nHave fun!  \x06".to_vec())
        );

        // Not a render
        assert_eq!(controller.state(), State::Idle);
        assert!(!controller.session().displaying);
        assert_eq!(controller.session().current, None);
    }

    #[test]
    fn test_greeting_name_is_remapped() {
        let greeting = Greeting {
            name: "Adrían",
            color: Rgb::GREETING,
        };
        let text = greeting.render().unwrap();
        assert_eq!(&text[..11], b"Hola Adr\x04an");
    }

    #[test]
    fn test_advance_sequence() {
        let mut controller = controller(1);
        let selection = rendered(controller.apply(Command::Advance).unwrap());

        let ops = &controller.display().ops;
        assert!(matches!(ops[0], Op::Color(_)));
        assert_eq!(ops[1], Op::Home);
        assert_eq!(ops[2], Op::Clear);
        let expected = vocabulary::render(selection.item.text).unwrap();
        assert_eq!(ops[3], Op::Write(expected.to_vec()));

        assert_eq!(selection.reason, Reason::Word);
        assert_eq!(controller.state(), State::Rendering);
        assert_eq!(controller.session().current, Some(selection.item));
        assert_eq!(controller.session().advance_counter, 1);
        assert!(controller.session().displaying);
        assert!(!controller.indicator().is_on());
    }

    #[test]
    fn test_accented_word_uses_glyph_slots() {
        let mut controller = Controller::new(
            FakeDisplay::default(),
            FakeIndicator::default(),
            Vocabulary::new(&["uña", "árbol"], SENTENCES).unwrap(),
            ChaCha8Rng::seed_from_u64(5),
            ControllerConfig::default(),
        );
        let selection = rendered(controller.apply(Command::Advance).unwrap());
        let written = controller.display().last_write().unwrap();
        match selection.item.text {
            "uña" => assert_eq!(written, b"u\x02a"),
            _ => assert_eq!(written, b"\x05rbol"),
        }
    }

    #[test]
    fn test_mark_missed_before_first_render() {
        let mut controller = controller(2);
        let outcome = controller.apply(Command::MarkMissed).unwrap();

        assert_eq!(outcome, Outcome::Marked { item: None });
        assert_eq!(controller.session().missed, None);
        // Feedback still given
        assert!(matches!(controller.display().ops.as_slice(), [Op::Color(_)]));
        assert!(controller.indicator().is_on());
        assert_eq!(controller.state(), State::Idle);
    }

    #[test]
    fn test_mark_missed_keeps_content_and_lights_indicator() {
        let mut controller = controller(3);
        let shown = rendered(controller.apply(Command::Advance).unwrap()).item;
        let ops_before = controller.display().ops.len();

        let outcome = controller.apply(Command::MarkMissed).unwrap();
        assert_eq!(outcome, Outcome::Marked { item: Some(shown) });

        let new_ops = &controller.display().ops[ops_before..];
        assert!(matches!(new_ops, [Op::Color(_)]));
        assert!(controller.indicator().is_on());

        let missed = controller.session().missed.unwrap();
        assert_eq!(missed.item, shown);
        assert_eq!(missed.position, 1);

        // The next advance turns the indicator off again
        controller.apply(Command::Advance).unwrap();
        assert!(!controller.indicator().is_on());
    }

    #[test]
    fn test_missed_item_replays_when_counter_returns() {
        let mut controller = controller(4);
        controller.apply(Command::Advance).unwrap();
        controller.apply(Command::Advance).unwrap();
        let missed = controller.session().last_word.unwrap();
        controller.apply(Command::MarkMissed).unwrap();

        let mut replayed = Vec::new();
        for _ in 0..22 {
            let selection = rendered(controller.apply(Command::Advance).unwrap());
            if selection.reason == Reason::Replay {
                replayed.push((selection.item, controller.session().advance_counter));
            }
        }
        assert_eq!(replayed, [(missed, 2)]);
        assert_eq!(controller.session().missed, None);
    }

    #[test]
    fn test_mark_during_sentence_flags_last_word() {
        let mut controller = controller(13);
        for _ in 0..10 {
            controller.apply(Command::Advance).unwrap();
        }
        let word = controller.session().last_word.unwrap();

        let sentence = rendered(controller.apply(Command::Advance).unwrap());
        assert_eq!(sentence.reason, Reason::Sentence);
        assert_eq!(controller.session().current, Some(sentence.item));

        let outcome = controller.apply(Command::MarkMissed).unwrap();
        assert_eq!(outcome, Outcome::Marked { item: Some(word) });
        let missed = controller.session().missed.unwrap();
        assert_eq!(missed.item.kind, ItemKind::Word);
        assert_eq!(missed.position, 0);

        // The word after the sentence still differs from the one before it
        let next = rendered(controller.apply(Command::Advance).unwrap());
        assert_eq!(next.reason, Reason::Word);
        assert_ne!(next.item, word);
    }

    #[test]
    fn test_scroll_ignored_before_first_render() {
        let mut controller = controller(5);
        assert_eq!(
            controller.apply(Command::Scroll(500)).unwrap(),
            Outcome::Ignored
        );
        assert!(controller.display().ops.is_empty());
        assert_eq!(controller.session().scroll_position, 0);
    }

    #[test]
    fn test_scroll_dead_zone() {
        let mut controller = controller(6);
        controller.apply(Command::Advance).unwrap();

        assert_eq!(controller.apply(Command::Scroll(5)).unwrap(), Outcome::Ignored);
        assert_eq!(controller.session().scroll_position, 0);

        assert_eq!(
            controller.apply(Command::Scroll(6)).unwrap(),
            Outcome::Scrolled(ScrollDirection::Right)
        );
        assert_eq!(controller.session().scroll_position, 6);

        assert_eq!(controller.apply(Command::Scroll(1)).unwrap(), Outcome::Ignored);
        assert_eq!(controller.session().scroll_position, 6);
    }

    #[test]
    fn test_scroll_one_step_per_event() {
        let mut controller = controller(7);
        controller.apply(Command::Advance).unwrap();

        controller.apply(Command::Scroll(1000)).unwrap();
        controller.apply(Command::Scroll(100)).unwrap();

        assert_eq!(
            controller.display().scrolls(),
            [ScrollDirection::Right, ScrollDirection::Left]
        );
        assert_eq!(controller.session().scroll_position, 100);
    }

    #[test]
    fn test_scroll_failure_is_not_fatal() {
        let mut controller = controller(8);
        controller.apply(Command::Advance).unwrap();
        controller.display.fail_scroll = true;

        let outcome = controller.apply(Command::Scroll(40)).unwrap();
        assert_eq!(
            outcome,
            Outcome::ScrollFailed {
                direction: ScrollDirection::Right,
                error: DisplayError::Communication,
            }
        );
        assert_eq!(controller.session().scroll_position, 40);
        assert_eq!(controller.state(), State::Rendering);
    }

    #[test]
    fn test_render_failure_is_fatal() {
        let mut controller = controller(9);
        controller.display.fail_writes = true;
        assert_eq!(
            controller.apply(Command::Advance),
            Err(ControllerError::Display(DisplayError::Communication))
        );
        assert!(!controller.session().displaying);
    }

    #[test]
    fn test_indicator_failure_is_fatal() {
        let mut controller = controller(10);
        controller.indicator.fail = true;
        assert_eq!(
            controller.apply(Command::MarkMissed),
            Err(ControllerError::Indicator(IndicatorError::Communication))
        );
    }

    #[test]
    fn test_sole_word_shown_again() {
        let mut controller = Controller::new(
            FakeDisplay::default(),
            FakeIndicator::default(),
            Vocabulary::new(&["pavo"], SENTENCES).unwrap(),
            ChaCha8Rng::seed_from_u64(0),
            ControllerConfig::default(),
        );
        let first = rendered(controller.apply(Command::Advance).unwrap());
        assert_eq!(first.reason, Reason::Word);

        let second = rendered(controller.apply(Command::Advance).unwrap());
        assert_eq!(second.reason, Reason::Repeat);
        assert_eq!(second.item, Item::word("pavo"));
        assert_eq!(controller.display().last_write(), Some(&b"pavo"[..]));
    }

    #[test]
    fn test_quit_sequence() {
        let mut controller = controller(11);
        controller.apply(Command::Advance).unwrap();
        let ops_before = controller.display().ops.len();

        assert_eq!(
            controller.apply(Command::Quit).unwrap(),
            Outcome::QuitRequested
        );
        assert_eq!(controller.state(), State::ShuttingDown);
        // Pending commands are abandoned
        assert_eq!(controller.apply(Command::Advance).unwrap(), Outcome::Ignored);

        let mut delay = RecordingDelay::default();
        block_on(controller.shutdown(&mut delay)).unwrap();

        assert_eq!(
            &controller.display().ops[ops_before..],
            &[Op::Clear, Op::Color(Rgb::WHITE)]
        );
        assert_eq!(delay.delays_ns, [2_000_000, 50_000_000]);
        assert_eq!(controller.state(), State::Stopped);
    }

    #[test]
    fn test_shutdown_is_best_effort() {
        let mut controller = controller(12);
        controller.display.fail_all = true;

        let mut delay = RecordingDelay::default();
        let result = block_on(controller.shutdown(&mut delay));

        assert_eq!(
            result,
            Err(ControllerError::Display(DisplayError::Communication))
        );
        assert_eq!(delay.delays_ns.len(), 2);
        assert_eq!(controller.state(), State::Stopped);

        // A second shutdown is a no-op
        block_on(controller.shutdown(&mut delay)).unwrap();
        assert_eq!(delay.delays_ns.len(), 2);
    }

    fn command() -> impl Strategy<Value = Command> {
        prop_oneof![
            4 => Just(Command::Advance),
            1 => Just(Command::MarkMissed),
            3 => (0u16..1024).prop_map(Command::Scroll),
        ]
    }

    proptest! {
        #[test]
        fn prop_command_sequences_hold_invariants(
            seed in any::<u64>(),
            commands in proptest::collection::vec(command(), 1..120),
        ) {
            let mut controller = controller(seed);
            let mut last_shown: Option<Item> = None;

            for command in commands {
                let before = controller.session().clone();
                let outcome = controller.apply(command).unwrap();

                match (command, outcome) {
                    (Command::Advance, Outcome::Rendered(selection)) => {
                        if selection.reason == Reason::Word {
                            prop_assert_ne!(Some(selection.item), before.last_word);
                            prop_assert_eq!(selection.item.kind, ItemKind::Word);
                        }
                        if selection.reason == Reason::Sentence {
                            prop_assert_eq!(controller.session().advance_counter, 0);
                        }
                        last_shown = Some(selection.item);
                    }
                    (Command::Scroll(reading), Outcome::Scrolled(direction)) => {
                        prop_assert!(before.displaying);
                        prop_assert!(reading.abs_diff(before.scroll_position) > DEFAULT_DEAD_ZONE);
                        let expected = if reading > before.scroll_position {
                            ScrollDirection::Right
                        } else {
                            ScrollDirection::Left
                        };
                        prop_assert_eq!(direction, expected);
                        prop_assert_eq!(controller.session().scroll_position, reading);
                    }
                    (Command::Scroll(_), Outcome::Ignored) => {
                        prop_assert_eq!(
                            controller.session().scroll_position,
                            before.scroll_position
                        );
                    }
                    (Command::MarkMissed, Outcome::Marked { item }) => {
                        prop_assert_eq!(item, before.last_word);
                    }
                    (command, outcome) => {
                        prop_assert!(false, "{:?} produced {:?}", command, outcome);
                    }
                }

                prop_assert!(controller.session().advance_counter <= 10);
            }

            prop_assert_eq!(controller.session().current, last_shown);
        }
    }
}
