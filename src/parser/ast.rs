// AST (Abstract Syntax Tree) definitions for the pain language

use std::fmt;

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Binary operators
///
/// Precedence and associativity live in [`super::operators`], not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    // Logical
    Or,
    And,
    Not,
    // Comparison
    Eq,
    Lt,
    Le,
    Gt,
    Ge,
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinaryOperator {
    /// The source spelling of the operator.
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOperator::Or => "or",
            BinaryOperator::And => "and",
            BinaryOperator::Not => "not",
            BinaryOperator::Eq => "==",
            BinaryOperator::Lt => "<",
            BinaryOperator::Le => "<=",
            BinaryOperator::Gt => ">",
            BinaryOperator::Ge => ">=",
            BinaryOperator::Add => "+",
            BinaryOperator::Sub => "-",
            BinaryOperator::Mul => "*",
            BinaryOperator::Div => "/",
            BinaryOperator::Pow => "^",
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// AST nodes representing statements and expressions
///
/// Every child is owned by exactly one parent, so a tree never shares
/// subtrees and never cycles.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    // Expressions
    IntLiteral(i64),
    FloatLiteral(f64),
    StringLiteral(String),
    Identifier(String),
    BinaryExpression {
        left: Box<Node>,
        op: BinaryOperator,
        right: Box<Node>,
    },

    // Statements
    Block(Vec<Node>),
    VarDeclaration {
        name: String,
        value: Box<Node>,
    },
    ConstDeclaration {
        name: String,
        value: Box<Node>,
    },
    FunctionDeclaration {
        name: String,
        params: Vec<String>,
        body: Vec<Node>,
    },
    ReturnStatement(Box<Node>),
}

impl Node {
    pub fn binary(left: Node, op: BinaryOperator, right: Node) -> Self {
        Node::BinaryExpression {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, nodes: &[Node]) -> fmt::Result {
    write!(f, "[")?;
    for (i, node) in nodes.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", node)?;
    }
    write!(f, "]")
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::IntLiteral(n) => write!(f, "IntLiteral({})", n),
            Node::FloatLiteral(x) => write!(f, "FloatLiteral({:?})", x),
            Node::StringLiteral(s) => write!(f, "StringLiteral({:?})", s),
            Node::Identifier(name) => write!(f, "Identifier({})", name),
            Node::BinaryExpression { left, op, right } => {
                write!(f, "BinaryExpression({}, {}, {})", op, left, right)
            }
            Node::Block(nodes) => {
                write!(f, "Block(")?;
                write_list(f, nodes)?;
                write!(f, ")")
            }
            Node::VarDeclaration { name, value } => {
                write!(f, "VarDeclaration({}, {})", name, value)
            }
            Node::ConstDeclaration { name, value } => {
                write!(f, "ConstDeclaration({}, {})", name, value)
            }
            Node::FunctionDeclaration { name, params, body } => {
                write!(f, "FunctionDeclaration({}, [{}], Block(", name, params.join(", "))?;
                write_list(f, body)?;
                write!(f, "))")
            }
            Node::ReturnStatement(expr) => write!(f, "ReturnStatement({})", expr),
        }
    }
}

/// Top-level program structure
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub nodes: Vec<Node>, // Top-level trees in source order
}

impl Program {
    pub fn new() -> Self {
        Program::default()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", node)?;
        }
        Ok(())
    }
}
