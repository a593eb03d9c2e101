/// Represents a unary operator.
///
/// Unary operators pop a single operand from the evaluation stack and push
/// one result back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// Unary plus: `$`. Returns its operand unchanged.
    Identity,
    /// Arithmetic negation: `~`.
    Negate,
}

/// Represents a binary operator.
///
/// Binary operators pop two operands; the value pushed earlier is the
/// left-hand side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition: `+`
    Add,
    /// Subtraction: `-`
    Sub,
    /// Multiplication: `*`
    Mul,
    /// Division: `/`
    Div,
    /// Exponentiation: `**`
    Pow,
    /// Integer (truncating) division: `//`
    IntDiv,
    /// Integer (floored) remainder: `%`
    Mod,
}

/// Any operator that may appear in an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// A one-operand operator.
    Unary(UnaryOperator),
    /// A two-operand operator.
    Binary(BinaryOperator),
}

/// Constant facts about one operator.
///
/// This is the process-wide operator table entry: the source symbol, how many
/// operands the operator consumes, and whether it is restricted to integral
/// operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorDescriptor {
    /// The symbol as written in an expression.
    pub symbol:            &'static str,
    /// Number of operands popped from the stack.
    pub arity:             usize,
    /// Whether every operand must be an integral value.
    pub integral_operands: bool,
}

impl UnaryOperator {
    /// Returns the constant descriptor of this operator.
    #[must_use]
    pub const fn descriptor(self) -> OperatorDescriptor {
        let symbol = match self {
            Self::Identity => "$",
            Self::Negate => "~",
        };
        OperatorDescriptor { symbol,
                             arity: 1,
                             integral_operands: false }
    }
}

impl BinaryOperator {
    /// Returns the constant descriptor of this operator.
    #[must_use]
    pub const fn descriptor(self) -> OperatorDescriptor {
        let (symbol, integral_operands) = match self {
            Self::Add => ("+", false),
            Self::Sub => ("-", false),
            Self::Mul => ("*", false),
            Self::Div => ("/", false),
            Self::Pow => ("**", false),
            Self::IntDiv => ("//", true),
            Self::Mod => ("%", true),
        };
        OperatorDescriptor { symbol,
                             arity: 2,
                             integral_operands }
    }
}

impl Operator {
    /// Every operator understood by the evaluator.
    pub const ALL: [Self; 9] = [Self::Binary(BinaryOperator::Add),
                                Self::Binary(BinaryOperator::Sub),
                                Self::Binary(BinaryOperator::Mul),
                                Self::Binary(BinaryOperator::Div),
                                Self::Binary(BinaryOperator::Pow),
                                Self::Binary(BinaryOperator::IntDiv),
                                Self::Binary(BinaryOperator::Mod),
                                Self::Unary(UnaryOperator::Identity),
                                Self::Unary(UnaryOperator::Negate)];

    /// Returns the constant descriptor of this operator.
    #[must_use]
    pub const fn descriptor(self) -> OperatorDescriptor {
        match self {
            Self::Unary(op) => op.descriptor(),
            Self::Binary(op) => op.descriptor(),
        }
    }

    /// Looks up an operator by its exact symbol.
    ///
    /// # Example
    /// ```
    /// use rpncalc::operator::{BinaryOperator, Operator};
    ///
    /// assert_eq!(Operator::from_symbol("//"), Some(Operator::Binary(BinaryOperator::IntDiv)));
    /// assert_eq!(Operator::from_symbol("^"), None);
    /// ```
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter()
                 .find(|op| op.descriptor().symbol == symbol)
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.descriptor().symbol)
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.descriptor().symbol)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.descriptor().symbol)
    }
}
