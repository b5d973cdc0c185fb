use std::rc::Rc;

use crate::interpreter::lexer::Location;

/// Represents a literal value in the language.
///
/// `LiteralValue` covers the raw, constant values that can appear directly in
/// source code: sigil-prefixed numbers and quoted strings.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A numeric literal such as `'5`.
    Number(f64),
    /// A string literal such as `"hello"`.
    Str(String),
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Expressions produce a value when evaluated and never change the
/// environment.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (number or string).
    Literal {
        /// The constant value.
        value:    LiteralValue,
        /// Location in the source code.
        location: Location,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name:     String,
        /// Location in the source code.
        location: Location,
    },
    /// A unary operation (e.g. negation).
    UnaryOp {
        /// The unary operator to apply.
        op:       UnaryOperator,
        /// The operand expression.
        expr:     Box<Self>,
        /// Location in the source code.
        location: Location,
    },
    /// A binary operation (addition, comparison, etc.).
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Location of the operator in the source code.
        location: Location,
    },
}

impl Expr {
    /// Gets the source location from `self`.
    /// ## Example
    /// ```
    /// use sunum::{ast::Expr, interpreter::lexer::Location};
    ///
    /// let expr = Expr::Variable { name:     "x".to_string(),
    ///                             location: Location::new(5, 2), };
    ///
    /// assert_eq!(expr.location(), Location::new(5, 2));
    /// ```
    #[must_use]
    pub const fn location(&self) -> Location {
        match self {
            Self::Literal { location, .. }
            | Self::Variable { location, .. }
            | Self::UnaryOp { location, .. }
            | Self::BinaryOp { location, .. } => *location,
        }
    }
}

/// A named, parameterless group of statements declared with `func`.
///
/// The body is reference counted: executing the definition hands a second
/// handle to the category registry, so the registered statements stay alive
/// after the statement that declared them has been dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryDef {
    /// The name the category is registered under.
    pub name:     String,
    /// The statements executed by `run`.
    pub body:     Rc<[Statement]>,
    /// Location in the source code.
    pub location: Location,
}

/// Represents a statement.
///
/// Statements have no value; they act on the environment or produce output.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `write <expr>`: prints the value of an expression.
    Write {
        /// The expression to print.
        expr:     Expr,
        /// Location in the source code.
        location: Location,
    },
    /// `num write <name>`: prints a variable by name.
    WriteVariable {
        /// The name of the variable.
        name:     String,
        /// Location in the source code.
        location: Location,
    },
    /// `name = <expr>`: creates or overwrites a local binding.
    Assignment {
        /// The name of the variable.
        name:     String,
        /// The value which is being assigned.
        value:    Expr,
        /// Location in the source code.
        location: Location,
    },
    /// `re name <expr>`: overwrites an existing binding in place.
    Reassignment {
        /// The name of the variable.
        name:     String,
        /// The new value.
        value:    Expr,
        /// Location in the source code.
        location: Location,
    },
    /// `sunum name`: copies a local binding into the shared table.
    MarkShared {
        /// The name of the variable.
        name:     String,
        /// Location in the source code.
        location: Location,
    },
    /// `<condition> ? <then> ! <else>`
    If {
        /// The branch condition.
        condition:   Expr,
        /// Statement executed if the condition is truthy.
        then_branch: Box<Self>,
        /// Statement executed otherwise, if present.
        else_branch: Option<Box<Self>>,
        /// Location in the source code.
        location:    Location,
    },
    /// Statements chained with `;`, in order.
    Compound {
        /// The chained statements. Never nested compounds of the same chain.
        statements: Vec<Self>,
        /// Location in the source code.
        location:   Location,
    },
    /// `func name() ... end`
    Category(CategoryDef),
    /// `run name`
    Run {
        /// The category to execute.
        name:     String,
        /// Location in the source code.
        location: Location,
    },
    /// `call <language> "<code>"`
    Call {
        /// The language tag.
        language: String,
        /// The foreign source text.
        code:     String,
        /// Location in the source code.
        location: Location,
    },
}

impl Statement {
    /// Gets the source location of the statement's first token.
    #[must_use]
    pub const fn location(&self) -> Location {
        match self {
            Self::Write { location, .. }
            | Self::WriteVariable { location, .. }
            | Self::Assignment { location, .. }
            | Self::Reassignment { location, .. }
            | Self::MarkShared { location, .. }
            | Self::If { location, .. }
            | Self::Compound { location, .. }
            | Self::Run { location, .. }
            | Self::Call { location, .. } => *location,
            Self::Category(def) => def.location,
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition or concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`@`, `+*`)
    Mul,
    /// Division (`\`, `-*`)
    Div,
    /// Division, yen-sign spelling (`¥`)
    YenDiv,
    /// Floating remainder (`%`)
    Mod,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Logical and (`&`)
    And,
    /// Logical or (`|`)
    Or,
}

impl BinaryOperator {
    /// Returns `true` for the six comparison operators.
    #[must_use]
    pub const fn is_comparison(self) -> bool {
        matches!(self,
                 Self::Less
                 | Self::Greater
                 | Self::LessEqual
                 | Self::GreaterEqual
                 | Self::Equal
                 | Self::NotEqual)
    }
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Identity (e.g. `+x`).
    Plus,
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (e.g. `~x`).
    Not,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Or,
            Sub, YenDiv,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "@",
            Div => "\\",
            YenDiv => "¥",
            Mod => "%",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
            And => "&",
            Or => "|",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Plus => "+",
            Self::Negate => "-",
            Self::Not => "~",
        };
        write!(f, "{operator}")
    }
}
