//! References from decoded instructions to other locations

use crate::memory::LinkerAddress;

/// Classification of a discovered control-flow edge.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ReferenceKind {
    /// PC-relative branch (`jr`).
    Branch { conditional: bool },

    /// Absolute jump (`jp nn`).
    Jump { conditional: bool },

    /// Subroutine call (`call nn`).
    Call { conditional: bool },

    /// Restart vector (`rst`); always lands in the fixed region.
    Vector,
}

/// A statically known control-flow target discovered while decoding one
/// instruction.
///
/// Indirect jumps (`jp [hl]`) have no statically known target and produce
/// no reference at all.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Reference {
    target: LinkerAddress,
    kind: ReferenceKind,
}

impl Reference {
    pub fn branch(target: LinkerAddress, conditional: bool) -> Reference {
        Reference {
            target,
            kind: ReferenceKind::Branch { conditional },
        }
    }

    pub fn jump(target: LinkerAddress, conditional: bool) -> Reference {
        Reference {
            target,
            kind: ReferenceKind::Jump { conditional },
        }
    }

    pub fn call(target: LinkerAddress, conditional: bool) -> Reference {
        Reference {
            target,
            kind: ReferenceKind::Call { conditional },
        }
    }

    pub fn vector(target: LinkerAddress) -> Reference {
        Reference {
            target,
            kind: ReferenceKind::Vector,
        }
    }

    pub fn target(&self) -> LinkerAddress {
        self.target
    }

    pub fn kind(&self) -> ReferenceKind {
        self.kind
    }

    /// True for unconditional absolute jumps and calls, the two forms the
    /// bank-switch hook heuristic applies to.
    pub fn is_hook_candidate(&self) -> bool {
        matches!(
            self.kind,
            ReferenceKind::Jump { conditional: false } | ReferenceKind::Call { conditional: false }
        )
    }

    /// Restart vectors are queued for tracing but never receive a lazily
    /// inserted mid-block label.
    pub fn wants_lazy_label(&self) -> bool {
        !matches!(self.kind, ReferenceKind::Vector)
    }
}
