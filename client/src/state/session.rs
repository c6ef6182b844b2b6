//! What the warning dialog currently shows.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionView {
    pub visible: bool,
    pub remaining_secs: u64,
}
