//! Analysis of instruction control flow

/// Indicates what a decoded instruction means for the current straight-line
/// trace.
///
/// Branches and calls register their targets through `Reference`s and are
/// deliberately *not* block terminators: tracing runs on past them until a
/// return is reached, so the instructions between an unconditional jump and
/// the following `ret` still appear in the listing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    /// Control continues with the following instruction.
    Continuing,

    /// `ret`/`reti`; straight-line decoding stops here.
    Returning,

    /// The byte at this location is not a recognized encoding. Rendered as
    /// a comment and treated conservatively as a block end, since nothing
    /// past it can be trusted to decode sensibly.
    Illegal,
}

impl Flow {
    pub fn is_block_end(self) -> bool {
        match self {
            Flow::Continuing => false,
            Flow::Returning | Flow::Illegal => true,
        }
    }
}
