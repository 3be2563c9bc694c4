// AST (Abstract Syntax Tree) definitions for the TyC front end

/// Source position for error reporting: 1-based line, 0-based column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    // Comparison
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    // Logical
    And,
    Or,
}

/// Prefix unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnOp {
    Plus,  // +x
    Minus, // -x
    Not,   // !x
    Inc,   // ++x
    Dec,   // --x
}

/// Postfix operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostfixOp {
    Inc, // x++
    Dec, // x--
}

/// Struct field: type name and field name, both left unresolved.
#[derive(Debug, Clone)]
pub struct Field {
    pub type_name: String,
    pub name: String,
    pub position: Position,
}

/// Function parameter
#[derive(Debug, Clone)]
pub struct Param {
    pub type_name: String,
    pub name: String,
    pub position: Position,
}

/// Struct declaration: `struct Name { fields };`
///
/// Field type names are stored as plain text; forward references and
/// duplicate names are legal at this layer and left for semantic analysis.
#[derive(Debug, Clone)]
pub struct StructDecl {
    pub name: String,
    pub fields: Vec<Field>,
    pub position: Position,
}

/// Function declaration. `return_type` is `None` for the inferred-return
/// form (`name(params) { ... }` with no leading type keyword).
#[derive(Debug, Clone)]
pub struct FunctionDecl {
    pub return_type: Option<String>,
    pub name: String,
    pub params: Vec<Param>,
    pub body: Block,
    pub position: Position,
}

/// One declared name with its optional initializer.
#[derive(Debug, Clone)]
pub struct Declarator {
    pub name: String,
    pub init: Option<Expr>,
    pub position: Position,
}

/// Variable declaration: one type shared by one or more declarators.
#[derive(Debug, Clone)]
pub struct VarDecl {
    pub type_name: String,
    pub declarators: Vec<Declarator>,
    pub position: Position,
}

/// Assignment statement. `lhs` is an lvalue-shaped chain; chained
/// assignments nest right-associatively inside `rhs`.
#[derive(Debug, Clone)]
pub struct AssignStmt {
    pub lhs: Expr,
    pub rhs: Expr,
    pub position: Position,
}

/// Braced statement sequence.
#[derive(Debug, Clone)]
pub struct Block {
    pub statements: Vec<Stmt>,
    pub position: Position,
}

/// One arm of a switch statement. `label` is `None` for `default`.
#[derive(Debug, Clone)]
pub struct SwitchCase {
    pub label: Option<Expr>,
    pub statements: Vec<Stmt>,
    pub position: Position,
}

/// Top-level program items, in source order.
#[derive(Debug, Clone)]
pub enum Item {
    Struct(StructDecl),
    Function(FunctionDecl),
    Var(VarDecl),
    Assign(AssignStmt),
}

/// Statements inside function bodies.
#[derive(Debug, Clone)]
pub enum Stmt {
    VarDecl(VarDecl),
    Assign(AssignStmt),
    Expr {
        expr: Expr,
        position: Position,
    },
    If {
        cond: Expr,
        then_block: Block,
        /// `Stmt::Block` for a plain `else`, `Stmt::If` for `else if`.
        else_branch: Option<Box<Stmt>>,
        position: Position,
    },
    While {
        cond: Expr,
        body: Block,
        position: Position,
    },
    For {
        init: Option<Box<Stmt>>,
        cond: Option<Expr>,
        post: Option<Expr>,
        body: Block,
        position: Position,
    },
    Switch {
        scrutinee: Expr,
        cases: Vec<SwitchCase>,
        position: Position,
    },
    Break {
        position: Position,
    },
    Continue {
        position: Position,
    },
    Return {
        value: Option<Expr>,
        position: Position,
    },
    Block(Block),
}

/// Expressions. Literal nodes keep the lexeme verbatim: no numeric
/// normalization and no escape decoding happens at this layer.
#[derive(Debug, Clone)]
pub enum Expr {
    IntLit {
        value: String,
        position: Position,
    },
    FloatLit {
        value: String,
        position: Position,
    },
    StringLit {
        value: String,
        position: Position,
    },
    Ident {
        name: String,
        position: Position,
    },
    Unary {
        op: UnOp,
        operand: Box<Expr>,
        prefix: bool,
        position: Position,
    },
    Binary {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
        position: Position,
    },
    /// Right-associative, chainable: `x = y = 5`.
    Assign {
        target: Box<Expr>,
        value: Box<Expr>,
        position: Position,
    },
    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
        position: Position,
    },
    Member {
        base: Box<Expr>,
        field: String,
        position: Position,
    },
    Postfix {
        op: PostfixOp,
        operand: Box<Expr>,
        position: Position,
    },
}

impl Item {
    /// Get the source position of this item
    pub fn position(&self) -> Position {
        match self {
            Item::Struct(decl) => decl.position,
            Item::Function(decl) => decl.position,
            Item::Var(decl) => decl.position,
            Item::Assign(stmt) => stmt.position,
        }
    }
}

impl Stmt {
    /// Get the source position of this statement
    pub fn position(&self) -> Position {
        match self {
            Stmt::VarDecl(decl) => decl.position,
            Stmt::Assign(stmt) => stmt.position,
            Stmt::Expr { position, .. } => *position,
            Stmt::If { position, .. } => *position,
            Stmt::While { position, .. } => *position,
            Stmt::For { position, .. } => *position,
            Stmt::Switch { position, .. } => *position,
            Stmt::Break { position } => *position,
            Stmt::Continue { position } => *position,
            Stmt::Return { position, .. } => *position,
            Stmt::Block(block) => block.position,
        }
    }
}

impl Expr {
    /// Get the source position of this expression
    pub fn position(&self) -> Position {
        match self {
            Expr::IntLit { position, .. } => *position,
            Expr::FloatLit { position, .. } => *position,
            Expr::StringLit { position, .. } => *position,
            Expr::Ident { position, .. } => *position,
            Expr::Unary { position, .. } => *position,
            Expr::Binary { position, .. } => *position,
            Expr::Assign { position, .. } => *position,
            Expr::Call { position, .. } => *position,
            Expr::Member { position, .. } => *position,
            Expr::Postfix { position, .. } => *position,
        }
    }

    /// Whether this expression may stand on the left of an assignment.
    /// The base of a member access may itself be any postfix chain, so
    /// `foo().x` is an assignment target while `foo()` is not.
    pub fn is_lvalue(&self) -> bool {
        matches!(self, Expr::Ident { .. } | Expr::Member { .. })
    }
}

/// Top-level program structure
#[derive(Debug, Clone, Default)]
pub struct Program {
    pub items: Vec<Item>,
}

impl Program {
    pub fn new() -> Self {
        Program::default()
    }
}
