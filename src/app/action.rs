/// Side effects the handler asks the main loop to perform.
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    /// Record a created skill offer in the activity log. Logging is the
    /// entire persistence story for posted offers.
    LogCreatedOffer {
        skill: String,
        category: String,
        description: String,
    },
    Quit,
}
