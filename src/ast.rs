use crate::interpreter::lexer::Token;

/// A complete parsed program: a sequence of statements.
///
/// The program owns its AST. Rendering a program with `Display` produces
/// source text that parses back into an equivalently evaluating program.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// The top-level statements in source order.
    pub statements: Vec<Statement>,
}

/// An abstract syntax tree node representing a statement.
///
/// Each variant carries the token that introduced it, which keeps the
/// original source text available for diagnostics and rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A declaration statement: `let <target>;` or `let <target> = <value>;`.
    ///
    /// The target is kept as a plain expression. The evaluator restricts it
    /// to an identifier, an identifier list, or either of those with an
    /// initializing assignment.
    Let {
        /// The `let` token.
        token:  Token,
        /// The declaration target, possibly containing an initializer.
        target: Expression,
    },
    /// A `return` statement with an optional payload.
    Return {
        /// The `return` token.
        token: Token,
        /// The returned expression. A missing payload returns `null`.
        value: Option<Expression>,
    },
    /// A bare expression evaluated for its value.
    Expression {
        /// The first token of the expression.
        token:      Token,
        /// The expression itself.
        expression: Expression,
    },
    /// A `{ ... }` statement sequence.
    ///
    /// Blocks do not open a scope by themselves; only function calls and
    /// `for` statements do.
    Block {
        /// The `{` token.
        token:      Token,
        /// The statements inside the braces.
        statements: Vec<Statement>,
    },
    /// A C-style loop: `for (init; condition; update) { body }`.
    ///
    /// All three header clauses are optional.
    ForLoop {
        /// The `for` token.
        token:     Token,
        /// The once-evaluated initializer statement.
        init:      Option<Box<Statement>>,
        /// The per-iteration condition. A missing condition loops forever.
        condition: Option<Expression>,
        /// The per-iteration update expression.
        update:    Option<Expression>,
        /// The loop body, always a [`Statement::Block`].
        body:      Box<Statement>,
    },
}

/// An abstract syntax tree node representing an expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// A reference to a name.
    Identifier {
        /// The identifier token.
        token: Token,
        /// The referenced name.
        name:  String,
    },
    /// A 64-bit integer literal.
    IntegerLiteral {
        /// The integer token.
        token: Token,
        /// The parsed value.
        value: i64,
    },
    /// A string literal. The value is the literal text between the quotes.
    StringLiteral {
        /// The string token.
        token: Token,
        /// The literal text.
        value: String,
    },
    /// A boolean literal: `true` or `false`.
    BooleanLiteral {
        /// The keyword token.
        token: Token,
        /// The literal value.
        value: bool,
    },
    /// A prefix operator applied to an operand, such as `-x` or `!ok`.
    Prefix {
        /// The operator token.
        token:    Token,
        /// The operator symbol.
        operator: String,
        /// The operand.
        right:    Box<Expression>,
    },
    /// A binary operator applied to two operands.
    Infix {
        /// The operator token.
        token:    Token,
        /// The operator symbol.
        operator: String,
        /// The left operand.
        left:     Box<Expression>,
        /// The right operand.
        right:    Box<Expression>,
    },
    /// A short-circuiting `&&` or `||`.
    ///
    /// Kept separate from [`Expression::Infix`] because the right operand
    /// must not be evaluated eagerly.
    ShortCircuit {
        /// The operator token.
        token:    Token,
        /// The operator symbol, `&&` or `||`.
        operator: String,
        /// The left operand, always evaluated.
        left:     Box<Expression>,
        /// The right operand, evaluated only when the left does not decide.
        right:    Box<Expression>,
    },
    /// An assignment. The left side is treated as a write target, not a
    /// value, so this is its own form rather than an infix operator.
    Assignment {
        /// The `=` token.
        token: Token,
        /// The write target: identifier, index expression, or a list of
        /// those.
        left:  Box<Expression>,
        /// The assigned value.
        right: Box<Expression>,
    },
    /// A conditional expression with a parenthesized condition.
    If {
        /// The `if` token.
        token:       Token,
        /// The condition.
        condition:   Box<Expression>,
        /// The block evaluated when the condition is truthy.
        consequence: Box<Statement>,
        /// The optional `else` block.
        alternative: Option<Box<Statement>>,
    },
    /// A function literal: `fn(a, b) { ... }`.
    FunctionLiteral {
        /// The `fn` token.
        token:      Token,
        /// The parameter names.
        parameters: Vec<String>,
        /// The body, always a [`Statement::Block`].
        body:       Box<Statement>,
    },
    /// A call expression applying a callee to arguments.
    Call {
        /// The `(` token.
        token:     Token,
        /// The called expression.
        callee:    Box<Expression>,
        /// The argument expressions.
        arguments: Vec<Expression>,
    },
    /// An array literal: `[e1, e2, ...]`.
    ArrayLiteral {
        /// The `[` token.
        token:    Token,
        /// The element expressions.
        elements: Vec<Expression>,
    },
    /// An index expression: `left[index]`.
    Index {
        /// The `[` token.
        token: Token,
        /// The indexed expression.
        left:  Box<Expression>,
        /// The index expression.
        index: Box<Expression>,
    },
    /// A comma-joined expression list, the tuple form used by multi-target
    /// assignment: `a, b = 1, 2`.
    ExprList {
        /// The `,` token.
        token:    Token,
        /// The listed expressions.
        elements: Vec<Expression>,
    },
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", render_statements(&self.statements))
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Let { target, .. } => write!(f, "let {target};"),
            Self::Return { value: Some(value), .. } => write!(f, "return {value};"),
            Self::Return { value: None, .. } => write!(f, "return;"),
            Self::Expression { expression, .. } => write!(f, "{expression};"),
            Self::Block { statements, .. } => write!(f, "{}", render_statements(statements)),
            Self::ForLoop { init,
                            condition,
                            update,
                            body,
                            .. } => {
                write!(f, "for (")?;
                match init {
                    Some(init) => write!(f, "{init}")?,
                    None => write!(f, ";")?,
                }
                write!(f, " ")?;
                if let Some(condition) = condition {
                    write!(f, "{condition}")?;
                }
                write!(f, "; ")?;
                if let Some(update) = update {
                    write!(f, "{update}")?;
                }
                write!(f, ") {{\n{body}\n}}")
            },
        }
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identifier { name, .. } => write!(f, "{name}"),
            Self::IntegerLiteral { value, .. } => write!(f, "{value}"),
            Self::StringLiteral { value, .. } => write!(f, "\"{value}\""),
            Self::BooleanLiteral { value, .. } => write!(f, "{value}"),
            Self::Prefix { operator, right, .. } => write!(f, "({operator}{right})"),
            Self::Infix { operator, left, right, .. }
            | Self::ShortCircuit { operator, left, right, .. } => {
                write!(f, "({left} {operator} {right})")
            },
            Self::Assignment { left, right, .. } => write!(f, "{left} = {right}"),
            Self::If { condition,
                       consequence,
                       alternative,
                       .. } => {
                write!(f, "if ({condition}) {{\n{consequence}\n}}")?;
                if let Some(alternative) = alternative {
                    write!(f, " else {{\n{alternative}\n}}")?;
                }
                Ok(())
            },
            Self::FunctionLiteral { parameters, body, .. } => {
                write!(f, "fn({}) {{\n{body}\n}}", parameters.join(", "))
            },
            Self::Call { callee, arguments, .. } => {
                write!(f, "{callee}({})", render_expressions(arguments))
            },
            Self::ArrayLiteral { elements, .. } => {
                write!(f, "[{}]", render_expressions(elements))
            },
            Self::Index { left, index, .. } => write!(f, "({left}[{index}])"),
            Self::ExprList { elements, .. } => write!(f, "{}", render_expressions(elements)),
        }
    }
}

/// Joins rendered statements with newlines.
fn render_statements(statements: &[Statement]) -> String {
    statements.iter()
              .map(ToString::to_string)
              .collect::<Vec<_>>()
              .join("\n")
}

/// Joins rendered expressions with `, `.
fn render_expressions(expressions: &[Expression]) -> String {
    expressions.iter()
               .map(ToString::to_string)
               .collect::<Vec<_>>()
               .join(", ")
}
