//
// ─── PARTIAL SLOTS ─────────────────────────────────────────────────────────────
//

/// One of the three terms of the expanded square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PartialSlot {
    /// `tens × tens`
    TensSquared,
    /// `tens × ones × 2`
    CrossTerm,
    /// `ones × ones`
    OnesSquared,
}

impl PartialSlot {
    pub const ALL: [Self; 3] = [Self::TensSquared, Self::CrossTerm, Self::OnesSquared];

    /// Position of the slot in the answer row (0, 1 or 2).
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            PartialSlot::TensSquared => 0,
            PartialSlot::CrossTerm => 1,
            PartialSlot::OnesSquared => 2,
        }
    }

    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The slot answered after this one, if any.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }
}

//
// ─── STAGES ────────────────────────────────────────────────────────────────────
//

/// A stage in which the learner is answering something about a committed number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnswerStep {
    Partial(PartialSlot),
    Sum,
}

impl AnswerStep {
    pub const FIRST: Self = Self::Partial(PartialSlot::TensSquared);

    /// The step that follows a correct answer, or `None` after the sum.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        match self {
            AnswerStep::Partial(slot) => Some(slot.next().map_or(Self::Sum, Self::Partial)),
            AnswerStep::Sum => None,
        }
    }
}

/// Where the practice currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Input,
    PartialAnswer(PartialSlot),
    SumAnswer,
}

impl Stage {
    #[must_use]
    pub fn is_input(self) -> bool {
        matches!(self, Stage::Input)
    }

    #[must_use]
    pub fn partial_slot(self) -> Option<PartialSlot> {
        match self {
            Stage::PartialAnswer(slot) => Some(slot),
            Stage::Input | Stage::SumAnswer => None,
        }
    }
}

impl From<AnswerStep> for Stage {
    fn from(step: AnswerStep) -> Self {
        match step {
            AnswerStep::Partial(slot) => Stage::PartialAnswer(slot),
            AnswerStep::Sum => Stage::SumAnswer,
        }
    }
}
