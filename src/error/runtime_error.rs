#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
///
/// Evaluation aborts on the first error; there is no recovery. The `Display`
/// texts are part of the language's interface and are matched verbatim by
/// the test suite.
pub enum RuntimeError {
    /// A call received the wrong number of arguments.
    WrongArgumentCount {
        /// How many arguments were supplied.
        got:  usize,
        /// The rendered clause describing the accepted count, such as
        /// `want=2`, `want>0` or `want=1 or 2`.
        want: String,
    },
    /// A builtin required an array argument and received something else.
    BadArrayArgument {
        /// The builtin's name.
        function: &'static str,
        /// The kind of the value that was supplied.
        got:      &'static str,
    },
    /// `len` received a value it cannot measure.
    LenUnsupported {
        /// The kind of the value that was supplied.
        got: &'static str,
    },
    /// A name was referenced but never declared.
    NameNotDefined {
        /// The undefined name.
        name: String,
    },
    /// A name was declared twice in the same scope.
    AlreadyDeclared {
        /// The redeclared name.
        name: String,
    },
    /// A binary operator was applied to operand kinds it does not combine.
    OperandMismatch {
        /// The operator symbol.
        operator: String,
        /// The kind of the left operand.
        left:     &'static str,
        /// The kind of the right operand.
        right:    &'static str,
    },
    /// An operator symbol has no entry in the dispatch tables.
    UnknownOperator {
        /// The operator symbol.
        operator: String,
    },
    /// A unary operator was applied to a kind it does not accept.
    BadUnaryOperand {
        /// The operator symbol.
        operator: String,
        /// The kind of the operand.
        operand:  &'static str,
    },
    /// Division with a zero divisor.
    DivisionByZero,
    /// Modulo with a zero divisor.
    ModuloByZero,
    /// A shift by a negative amount.
    NegativeShift,
    /// An array access outside the valid index range.
    IndexOutOfRange,
    /// An array index of a non-integer kind.
    BadIndexType {
        /// The kind of the index value.
        got: &'static str,
    },
    /// An index operation on a value that is not an array.
    NotIndexable {
        /// The kind of the indexed value.
        got: &'static str,
    },
    /// A call whose callee is neither a function nor a builtin.
    NotAFunction {
        /// The kind of the called value.
        got: &'static str,
    },
    /// `pop` on an empty array.
    PopFromEmptyArray,
    /// A multi-target assignment whose value count does not match its
    /// target count.
    UnpackMismatch {
        /// How many values the right-hand side produced.
        got:  usize,
        /// How many targets the left-hand side named.
        want: usize,
    },
    /// An assignment target that is not an identifier, an index expression,
    /// or a list of those.
    CannotAssign,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WrongArgumentCount { got, want } => {
                write!(f, "wrong number of arguments: got={got}, {want}")
            },
            Self::BadArrayArgument { function, got } => {
                write!(f, "argument to '{function}' must be 'ARRAY', got '{got}'")
            },
            Self::LenUnsupported { got } => {
                write!(f, "argument to 'len' not supported, got '{got}'")
            },
            Self::NameNotDefined { name } => write!(f, "name '{name}' is not defined"),
            Self::AlreadyDeclared { name } => {
                write!(f, "identifier '{name}' has already been declared")
            },
            Self::OperandMismatch { operator, left, right } => {
                write!(f, "'{operator}' not supported between '{left}' and '{right}'")
            },
            Self::UnknownOperator { operator } => write!(f, "unknown operator: '{operator}'"),
            Self::BadUnaryOperand { operator, operand } => {
                write!(f, "bad operand type for unary {operator}: '{operand}'")
            },
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::ModuloByZero => write!(f, "integer division or modulo by zero"),
            Self::NegativeShift => write!(f, "negative shift amount"),
            Self::IndexOutOfRange => write!(f, "array index out of range"),
            Self::BadIndexType { got } => {
                write!(f, "array indices must be integers, not '{got}'")
            },
            Self::NotIndexable { got } => write!(f, "index operator not supported: '{got}'"),
            Self::NotAFunction { got } => write!(f, "not a function: '{got}'"),
            Self::PopFromEmptyArray => write!(f, "pop from empty array"),
            Self::UnpackMismatch { got, want } => {
                write!(f, "wrong number of values to unpack: got={got}, want={want}")
            },
            Self::CannotAssign => write!(f, "cannot assign to literal"),
        }
    }
}

impl std::error::Error for RuntimeError {}
