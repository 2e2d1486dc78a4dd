use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// Fixed-rate tick driving animations, toast expiry, and pending ops
    Tick,
}
