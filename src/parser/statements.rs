//! Statement parsing implementation
//!
//! This module handles the statement forms allowed inside function bodies:
//!
//! - Variable declarations: `int x = 42;`
//! - Assignments and bare expression statements: `x = 5;`, `foo();`
//! - Control flow: `if`, `while`, `for`, `switch` (bodies are braced blocks)
//! - Jump statements: `return`, `break`, `continue`
//! - Nested blocks: `{ ... }`
//!
//! # Grammar
//!
//! ```text
//! statement ::= var_decl | if_stmt | while_stmt | for_stmt | switch_stmt
//!             | return_stmt | break_stmt | continue_stmt | block | expr_stmt
//! ```
//!
//! All parsing methods are implemented as `pub(crate)` methods on the
//! [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{CompileError, Parser};

/// An expression in statement position. A top-most assignment becomes an
/// assignment statement; everything else is a bare expression statement.
fn into_statement(expr: Expr) -> Stmt {
    match expr {
        Expr::Assign {
            target,
            value,
            position,
        } => Stmt::Assign(AssignStmt {
            lhs: *target,
            rhs: *value,
            position,
        }),
        expr => {
            let position = expr.position();
            Stmt::Expr { expr, position }
        }
    }
}

impl Parser {
    /// Parse a braced block: `{ statement* }`.
    pub(crate) fn parse_block(&mut self) -> Result<Block, CompileError> {
        let open = self.expect(TokenKind::LBrace)?;

        let mut statements = Vec::new();
        while !self.check(TokenKind::RBrace)? && !self.at_eof()? {
            statements.push(self.parse_statement()?);
        }

        self.expect(TokenKind::RBrace)?;

        Ok(Block {
            statements,
            position: open.position(),
        })
    }

    /// Parse a statement
    pub(crate) fn parse_statement(&mut self) -> Result<Stmt, CompileError> {
        match self.peek_kind()? {
            TokenKind::If => self.parse_if_statement(),
            TokenKind::While => self.parse_while_statement(),
            TokenKind::For => self.parse_for_statement(),
            TokenKind::Switch => self.parse_switch_statement(),

            TokenKind::Break => {
                let keyword = self.advance()?;
                self.expect(TokenKind::Semi)?;
                Ok(Stmt::Break {
                    position: keyword.position(),
                })
            }
            TokenKind::Continue => {
                let keyword = self.advance()?;
                self.expect(TokenKind::Semi)?;
                Ok(Stmt::Continue {
                    position: keyword.position(),
                })
            }
            TokenKind::Return => {
                let keyword = self.advance()?;
                let value = if self.check(TokenKind::Semi)? {
                    None
                } else {
                    Some(self.parse_expression()?)
                };
                self.expect(TokenKind::Semi)?;
                Ok(Stmt::Return {
                    value,
                    position: keyword.position(),
                })
            }

            TokenKind::LBrace => Ok(Stmt::Block(self.parse_block()?)),

            // Declarations: a type keyword, or two identifiers in a row
            // (`Point p`). A lone identifier falls through to the
            // expression path.
            TokenKind::Int | TokenKind::Float | TokenKind::String | TokenKind::Auto => {
                Ok(Stmt::VarDecl(self.parse_var_decl(false)?))
            }
            TokenKind::Ident => {
                if self.kind_at(1)? == TokenKind::Ident {
                    Ok(Stmt::VarDecl(self.parse_var_decl(false)?))
                } else {
                    self.parse_expression_statement()
                }
            }

            _ => self.parse_expression_statement(),
        }
    }

    /// An expression followed by `;`: an assignment statement when the
    /// top-most node is an assignment, a bare expression statement otherwise.
    fn parse_expression_statement(&mut self) -> Result<Stmt, CompileError> {
        let expr = self.parse_expression()?;
        self.expect(TokenKind::Semi)?;
        Ok(into_statement(expr))
    }

    /// Parse an if statement: `if (cond) { ... }` with an optional `else`
    /// arm that is either a block or another `if`.
    fn parse_if_statement(&mut self) -> Result<Stmt, CompileError> {
        let keyword = self.expect(TokenKind::If)?;

        self.expect(TokenKind::LParen)?;
        let cond = self.parse_expression()?;
        self.expect(TokenKind::RParen)?;

        let then_block = self.parse_block()?;

        let else_branch = if self.match_kind(TokenKind::Else)? {
            if self.check(TokenKind::If)? {
                Some(Box::new(self.parse_if_statement()?))
            } else {
                Some(Box::new(Stmt::Block(self.parse_block()?)))
            }
        } else {
            None
        };

        Ok(Stmt::If {
            cond,
            then_block,
            else_branch,
            position: keyword.position(),
        })
    }

    /// Parse a while statement: `while (cond) { ... }`.
    fn parse_while_statement(&mut self) -> Result<Stmt, CompileError> {
        let keyword = self.expect(TokenKind::While)?;

        self.expect(TokenKind::LParen)?;
        let cond = self.parse_expression()?;
        self.expect(TokenKind::RParen)?;

        let body = self.parse_block()?;

        Ok(Stmt::While {
            cond,
            body,
            position: keyword.position(),
        })
    }

    /// Parse a for statement: `for (init? ; cond? ; post?) { ... }` with
    /// each clause optional. The init clause may be a declaration or an
    /// expression statement; the post clause is a bare expression.
    fn parse_for_statement(&mut self) -> Result<Stmt, CompileError> {
        let keyword = self.expect(TokenKind::For)?;
        self.expect(TokenKind::LParen)?;

        let init = if self.match_kind(TokenKind::Semi)? {
            None
        } else if self.starts_declaration()? {
            // The declaration consumes its own semicolon.
            Some(Box::new(Stmt::VarDecl(self.parse_var_decl(false)?)))
        } else {
            let expr = self.parse_expression()?;
            self.expect(TokenKind::Semi)?;
            Some(Box::new(into_statement(expr)))
        };

        let cond = if self.check(TokenKind::Semi)? {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.expect(TokenKind::Semi)?;

        let post = if self.check(TokenKind::RParen)? {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.expect(TokenKind::RParen)?;

        let body = self.parse_block()?;

        Ok(Stmt::For {
            init,
            cond,
            post,
            body,
            position: keyword.position(),
        })
    }

    /// Parse a switch statement: `switch (expr) { case lit: ... default: ... }`.
    /// Case labels are single literal tokens; `default` carries no label.
    fn parse_switch_statement(&mut self) -> Result<Stmt, CompileError> {
        let keyword = self.expect(TokenKind::Switch)?;

        self.expect(TokenKind::LParen)?;
        let scrutinee = self.parse_expression()?;
        self.expect(TokenKind::RParen)?;
        self.expect(TokenKind::LBrace)?;

        let mut cases = Vec::new();
        while !self.check(TokenKind::RBrace)? && !self.at_eof()? {
            if self.check(TokenKind::Case)? {
                let case_keyword = self.advance()?;
                let label = self.parse_literal()?;
                self.expect(TokenKind::Colon)?;
                let statements = self.parse_case_statements()?;
                cases.push(SwitchCase {
                    label: Some(label),
                    statements,
                    position: case_keyword.position(),
                });
            } else if self.check(TokenKind::Default)? {
                let default_keyword = self.advance()?;
                self.expect(TokenKind::Colon)?;
                let statements = self.parse_case_statements()?;
                cases.push(SwitchCase {
                    label: None,
                    statements,
                    position: default_keyword.position(),
                });
            } else {
                return Err(self.error_here());
            }
        }

        self.expect(TokenKind::RBrace)?;

        Ok(Stmt::Switch {
            scrutinee,
            cases,
            position: keyword.position(),
        })
    }

    /// Statements of one switch arm: up to the next `case`, `default`, or
    /// the closing brace.
    fn parse_case_statements(&mut self) -> Result<Vec<Stmt>, CompileError> {
        let mut statements = Vec::new();
        while !self.check(TokenKind::Case)?
            && !self.check(TokenKind::Default)?
            && !self.check(TokenKind::RBrace)?
            && !self.at_eof()?
        {
            statements.push(self.parse_statement()?);
        }
        Ok(statements)
    }

    /// Whether the cursor sits on a variable declaration: a type keyword,
    /// or a struct type name followed by the declared name.
    fn starts_declaration(&mut self) -> Result<bool, CompileError> {
        Ok(match self.peek_kind()? {
            TokenKind::Int | TokenKind::Float | TokenKind::String | TokenKind::Auto => true,
            TokenKind::Ident => self.kind_at(1)? == TokenKind::Ident,
            _ => false,
        })
    }
}
