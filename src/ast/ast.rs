use crate::Span;

use super::operators::BinaryOperator;

/// Expression Types
///
/// A payload-free tag for each node kind, used in logs and diagnostics.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ExprType {
    Number,
    String,
    Variable,
    Binary,
    If,
    Block,
    ArrayAccess,
    ArrayDeclaration,
    VariableAssignment,
    VariableDeclaration,
    While,
    Print,
    Endl,
    Input,
}

/// A node of the syntax tree.
///
/// Every construct of the language is an expression: statements such as
/// declarations, loops and `print` also evaluate to a value. Children are
/// owned, so a parsed statement is a self-contained tree.
#[derive(Debug, Clone)]
pub enum Expr {
    /// Numeric literal.
    Number { value: f64, span: Span },
    /// String literal; evaluating it writes the text to the output.
    String { value: String, span: Span },
    /// Read of a scalar variable.
    Variable { name: String, span: Span },
    Binary {
        operator: BinaryOperator,
        left: Box<Expr>,
        right: Box<Expr>,
        /// Height of this subtree, see [`Expr::depth`].
        depth: usize,
        span: Span,
    },
    /// `if (condition) { ... }`, there is no else branch.
    If {
        condition: Box<Expr>,
        then_body: Box<Expr>,
        span: Span,
    },
    /// Two or more statements, or none. Single statement blocks are unwrapped
    /// by the parser.
    Block { body: Vec<Expr>, span: Span },
    ArrayAccess {
        name: String,
        index: Box<Expr>,
        span: Span,
    },
    /// `int name[size]`
    ArrayDeclaration {
        name: String,
        size: usize,
        span: Span,
    },
    /// `name = value` or `name[index] = value`.
    VariableAssignment {
        name: String,
        index: Option<Box<Expr>>,
        value: Box<Expr>,
        span: Span,
    },
    /// `int name = value`
    VariableDeclaration {
        name: String,
        value: Box<Expr>,
        span: Span,
    },
    While {
        condition: Box<Expr>,
        body: Box<Expr>,
        span: Span,
    },
    Print { value: Box<Expr>, span: Span },
    Endl { span: Span },
    /// `read name`
    Input { name: String, span: Span },
}

impl Expr {
    /// Returns the expression type of the expression.
    pub fn get_expr_type(&self) -> ExprType {
        match self {
            Expr::Number { .. } => ExprType::Number,
            Expr::String { .. } => ExprType::String,
            Expr::Variable { .. } => ExprType::Variable,
            Expr::Binary { .. } => ExprType::Binary,
            Expr::If { .. } => ExprType::If,
            Expr::Block { .. } => ExprType::Block,
            Expr::ArrayAccess { .. } => ExprType::ArrayAccess,
            Expr::ArrayDeclaration { .. } => ExprType::ArrayDeclaration,
            Expr::VariableAssignment { .. } => ExprType::VariableAssignment,
            Expr::VariableDeclaration { .. } => ExprType::VariableDeclaration,
            Expr::While { .. } => ExprType::While,
            Expr::Print { .. } => ExprType::Print,
            Expr::Endl { .. } => ExprType::Endl,
            Expr::Input { .. } => ExprType::Input,
        }
    }

    /// Height of the tree rooted here, a leaf being 1.
    ///
    /// Binary nodes store their height when built, so long operator chains
    /// are answered without walking them.
    pub fn depth(&self) -> usize {
        match self {
            Expr::Binary { depth, .. } => *depth,
            Expr::If {
                condition,
                then_body: body,
                ..
            }
            | Expr::While {
                condition, body, ..
            } => 1 + condition.depth().max(body.depth()),
            Expr::Block { body, .. } => 1 + body.iter().map(Expr::depth).max().unwrap_or(0),
            Expr::ArrayAccess { index, .. } => 1 + index.depth(),
            Expr::VariableAssignment { index, value, .. } => {
                1 + value.depth().max(index.as_ref().map_or(0, |index| index.depth()))
            }
            Expr::VariableDeclaration { value, .. } | Expr::Print { value, .. } => {
                1 + value.depth()
            }
            Expr::Number { .. }
            | Expr::String { .. }
            | Expr::Variable { .. }
            | Expr::ArrayDeclaration { .. }
            | Expr::Endl { .. }
            | Expr::Input { .. } => 1,
        }
    }

    /// Returns the span of the expression.
    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Number { span, .. }
            | Expr::String { span, .. }
            | Expr::Variable { span, .. }
            | Expr::Binary { span, .. }
            | Expr::If { span, .. }
            | Expr::Block { span, .. }
            | Expr::ArrayAccess { span, .. }
            | Expr::ArrayDeclaration { span, .. }
            | Expr::VariableAssignment { span, .. }
            | Expr::VariableDeclaration { span, .. }
            | Expr::While { span, .. }
            | Expr::Print { span, .. }
            | Expr::Endl { span }
            | Expr::Input { span, .. } => span,
        }
    }
}
