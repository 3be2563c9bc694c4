//! Top-level item parsing
//!
//! This module handles the four item forms allowed at global scope:
//!
//! - Struct declarations: `struct Name { fields };`
//! - Function declarations: `type name(params) { ... }` or the
//!   inferred-return form `name(params) { ... }`
//! - Variable declarations: `type a, b = 2, c;`
//! - Assignment statements: `x = y = expr;`
//!
//! Bare expression statements are not items: a top-level token that starts
//! none of the forms above is a syntax error at that token.
//!
//! # Grammar
//!
//! ```text
//! item        ::= struct_decl | function_decl | var_decl | assign_stmt
//! struct_decl ::= "struct" identifier "{" (type_name identifier ";")* "}" ";"
//! function_decl ::= ("void"|"int"|"float"|"string")? identifier "(" params ")" block
//! var_decl    ::= type_name declarator ("," declarator)* ";"
//! declarator  ::= identifier ("=" expression)?
//! assign_stmt ::= postfix_chain "=" expression ";"
//! ```
//!
//! All parsing methods are implemented as `pub(crate)` methods on the
//! [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::lexer::{Token, TokenKind};
use crate::parser::parse::{CompileError, Parser, SyntaxError};

impl Parser {
    /// Parse one top-level item.
    pub(crate) fn parse_item(&mut self) -> Result<Item, CompileError> {
        match self.peek_kind()? {
            TokenKind::Struct => Ok(Item::Struct(self.parse_struct_decl()?)),

            // `void` can only open a function declaration.
            TokenKind::Void => {
                let ret = self.advance()?;
                Ok(Item::Function(self.parse_function_decl(Some(ret))?))
            }

            // `int x(` opens a function, `int x` anything else a variable.
            TokenKind::Int | TokenKind::Float | TokenKind::String => {
                if self.kind_at(2)? == TokenKind::LParen {
                    let ret = self.advance()?;
                    Ok(Item::Function(self.parse_function_decl(Some(ret))?))
                } else {
                    Ok(Item::Var(self.parse_var_decl(true)?))
                }
            }

            TokenKind::Auto => Ok(Item::Var(self.parse_var_decl(true)?)),

            TokenKind::Ident => match self.kind_at(1)? {
                // `Point p` declares a struct-typed variable.
                TokenKind::Ident => Ok(Item::Var(self.parse_var_decl(true)?)),
                // `name(` is either an inferred-return function or an
                // assignment whose left side starts with a call.
                TokenKind::LParen => {
                    if self.function_follows()? {
                        Ok(Item::Function(self.parse_function_decl(None)?))
                    } else {
                        Ok(Item::Assign(self.parse_top_level_assign()?))
                    }
                }
                _ => Ok(Item::Assign(self.parse_top_level_assign()?)),
            },

            _ => Err(self.error_here()),
        }
    }

    /// Decide between `name(params) { ... }` and an assignment like
    /// `name(args).field = ...` by scanning ahead to the parenthesis that
    /// matches the one after the name: a function body brace follows it.
    fn function_follows(&mut self) -> Result<bool, CompileError> {
        // Cursor sits on the name; offset 1 is the open parenthesis.
        let mut n = 2;
        let mut depth = 1usize;
        loop {
            match self.kind_at(n)? {
                TokenKind::LParen => depth += 1,
                TokenKind::RParen => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(self.kind_at(n + 1)? == TokenKind::LBrace);
                    }
                }
                TokenKind::Eof => return Ok(false),
                _ => {}
            }
            n += 1;
        }
    }

    /// Parse a struct declaration: `struct Name { fields };`
    ///
    /// Each field is `type_name identifier ;`. An `auto` field type and a
    /// nested `struct` declaration are syntax errors at the offending token,
    /// which `parse_type_name` reports for both.
    fn parse_struct_decl(&mut self) -> Result<StructDecl, CompileError> {
        let keyword = self.expect(TokenKind::Struct)?;
        let name = self.expect_identifier()?;
        self.expect(TokenKind::LBrace)?;

        let mut fields = Vec::new();
        while !self.check(TokenKind::RBrace)? && !self.at_eof()? {
            let field_type = self.parse_type_name(false)?;
            let field_name = self.expect_identifier()?;
            self.expect(TokenKind::Semi)?;

            let position = field_type.position();
            fields.push(Field {
                type_name: field_type.lexeme,
                name: field_name.lexeme,
                position,
            });
        }

        self.expect(TokenKind::RBrace)?;
        self.expect(TokenKind::Semi)?;

        Ok(StructDecl {
            name: name.lexeme,
            fields,
            position: keyword.position(),
        })
    }

    /// Parse a function declaration after its optional return-type keyword
    /// has been consumed by the caller (`None` means inferred return type).
    fn parse_function_decl(
        &mut self,
        return_type: Option<Token>,
    ) -> Result<FunctionDecl, CompileError> {
        let name = self.expect_identifier()?;
        let position = return_type
            .as_ref()
            .map(|t| t.position())
            .unwrap_or_else(|| name.position());

        self.expect(TokenKind::LParen)?;

        // `main` takes no parameters; the report lands on the first
        // parameter token.
        if name.lexeme == "main" && !self.check(TokenKind::RParen)? {
            return Err(self.error_here());
        }

        let params = self.parse_param_list()?;
        self.expect(TokenKind::RParen)?;
        let body = self.parse_block()?;

        Ok(FunctionDecl {
            return_type: return_type.map(|t| t.lexeme),
            name: name.lexeme,
            params,
            body,
            position,
        })
    }

    /// Parse a parameter list: `(type name, type name, ...)`.
    fn parse_param_list(&mut self) -> Result<Vec<Param>, CompileError> {
        let mut params = Vec::new();

        if self.check(TokenKind::RParen)? {
            return Ok(params);
        }

        loop {
            let param_type = self.parse_type_name(true)?;
            let param_name = self.expect_identifier()?;
            let position = param_type.position();
            params.push(Param {
                type_name: param_type.lexeme,
                name: param_name.lexeme,
                position,
            });

            if !self.match_kind(TokenKind::Comma)? {
                break;
            }
        }

        Ok(params)
    }

    /// Parse a variable declaration: `type a, b = 2, c;` with one shared
    /// type and an optional initializer per declarator. At top level the
    /// terminating semicolon may be replaced by end of input.
    pub(crate) fn parse_var_decl(&mut self, top_level: bool) -> Result<VarDecl, CompileError> {
        let type_token = self.parse_type_name(true)?;

        let mut declarators = Vec::new();
        loop {
            let name = self.expect_identifier()?;
            let init = if self.match_kind(TokenKind::Assign)? {
                Some(self.parse_assignment_expr()?)
            } else {
                None
            };
            let position = name.position();
            declarators.push(Declarator {
                name: name.lexeme,
                init,
                position,
            });

            if !self.match_kind(TokenKind::Comma)? {
                break;
            }
        }

        if top_level {
            self.expect_semi_or_eof()?;
        } else {
            self.expect(TokenKind::Semi)?;
        }

        let position = type_token.position();
        Ok(VarDecl {
            type_name: type_token.lexeme,
            declarators,
            position,
        })
    }

    /// Parse a top-level assignment: lvalue chain, `=`, right-associative
    /// value, terminator. The left side is parsed as a postfix chain so
    /// member and call postfixes are allowed, but the result must still be
    /// lvalue-shaped.
    fn parse_top_level_assign(&mut self) -> Result<AssignStmt, CompileError> {
        let lhs = self.parse_postfix_expr()?;
        let eq = self.expect(TokenKind::Assign)?;
        if !lhs.is_lvalue() {
            return Err(SyntaxError::at(&eq).into());
        }
        let rhs = self.parse_assignment_expr()?;
        self.expect_semi_or_eof()?;

        Ok(AssignStmt {
            position: lhs.position(),
            lhs,
            rhs,
        })
    }

    /// A type name: `int`, `float`, `string`, or a (possibly undeclared,
    /// possibly forward-referenced) struct identifier. `auto` is accepted
    /// only where the caller allows inference; any other token is a syntax
    /// error reported at that token.
    pub(crate) fn parse_type_name(&mut self, allow_auto: bool) -> Result<Token, CompileError> {
        match self.peek_kind()? {
            TokenKind::Int | TokenKind::Float | TokenKind::String | TokenKind::Ident => {
                self.advance()
            }
            TokenKind::Auto if allow_auto => self.advance(),
            _ => Err(self.error_here()),
        }
    }
}
