/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// Milestones only: stage sizes, matches.
    #[default]
    Default,
    /// `-v`: adds per-state detail and scanner resets.
    Verbose,
    /// `-vv`: everything, down to individual transitions.
    VeryVerbose,
}

impl Verbosity {
    /// Maps a `-v` repeat count to a level.
    pub fn from_count(count: u8) -> Self {
        match count {
            0 => Self::Default,
            1 => Self::Verbose,
            _ => Self::VeryVerbose,
        }
    }
}
