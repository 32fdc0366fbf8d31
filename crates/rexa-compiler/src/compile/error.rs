use rexa_core::DfaTableError;

/// Postfix that does not reduce to exactly one automaton, or a DFA table
/// that could not be sealed.
///
/// Validated patterns never produce these; they indicate a defect upstream
/// or a hand-edited snapshot.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConstructionError {
    #[error("operator '{token}' at position {position} is missing an operand")]
    OperandUnderflow { token: char, position: usize },

    #[error("postfix left {count} operands on the stack")]
    LeftoverOperands { count: usize },

    #[error("postfix is empty")]
    EmptyPostfix,

    #[error("unknown postfix token '{token}' at position {position}")]
    UnknownToken { token: char, position: usize },

    #[error(transparent)]
    Table(#[from] DfaTableError),
}
