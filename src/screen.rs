/// Top-level screens sequenced by the outer loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Screen {
    /// A round is running (possibly paused).
    Playing,
    /// The round finished; final score and menu actions are shown.
    RoundEnded,
    /// The stored high score is displayed.
    ShowHighScore,
}

/// Triggers that move the screen machine.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ScreenEvent {
    /// The simulation returned a terminal tick.
    RoundOver,
    /// "Play Again" chosen on the round-ended screen.
    Replay,
    /// "High Scores" chosen on the round-ended screen.
    ViewHighScore,
    /// "Back" chosen on the high-score screen.
    Back,
    /// Global quit signal (key, Ctrl-C, or the quit button).
    Quit,
}

/// Result of feeding one event to the machine.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Transition {
    Stay,
    SwitchTo(Screen),
    Terminate,
}

/// The complete transition table.
///
/// `Quit` terminates from any screen. Every other event is only meaningful on
/// the screen that can produce it; elsewhere it is a no-op.
#[must_use]
pub fn transition(screen: Screen, event: ScreenEvent) -> Transition {
    match (screen, event) {
        (_, ScreenEvent::Quit) => Transition::Terminate,
        (Screen::Playing, ScreenEvent::RoundOver) => Transition::SwitchTo(Screen::RoundEnded),
        (Screen::RoundEnded, ScreenEvent::Replay) => Transition::SwitchTo(Screen::Playing),
        (Screen::RoundEnded, ScreenEvent::ViewHighScore) => {
            Transition::SwitchTo(Screen::ShowHighScore)
        }
        (Screen::ShowHighScore, ScreenEvent::Back) => Transition::SwitchTo(Screen::RoundEnded),
        _ => Transition::Stay,
    }
}
