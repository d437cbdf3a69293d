#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    BlockTime,
    ViewSchedule,
    DeleteEvent,
    AddRecurring,
    Quit,
}
