//! Parser for the Lak programming language.
//!
//! This module provides the [`Parser`] struct which transforms a token stream
//! into an Abstract Syntax Tree ([`Program`]).
//!
//! # Overview
//!
//! The parser implements a recursive descent parsing strategy. It consumes
//! tokens produced by the [`crate::lexer`] and builds an AST suitable for
//! code generation.
//!
//! # Grammar
//!
//! The current Lak grammar:
//!
//! ```text
//! program     → fn_def* EOF
//! fn_def      → "fn" IDENTIFIER "(" ")" "->" IDENTIFIER "{" stmt* "}"
//! stmt        → let_stmt | expr_stmt
//! let_stmt    → "let" IDENTIFIER ":" type "=" expr
//! type        → "i32" | "i64"
//! expr_stmt   → expr
//! expr        → call | IDENTIFIER | STRING | INT
//! call        → IDENTIFIER "(" arguments? ")"
//! arguments   → expr ("," expr)*
//! ```
//!
//! # Examples
//!
//! ```
//! use lak::lexer::Lexer;
//! use lak::parser::Parser;
//!
//! let mut lexer = Lexer::new("fn main() -> void { println(\"hello\") }");
//! let tokens = lexer.tokenize().unwrap();
//!
//! let mut parser = Parser::new(tokens);
//! let program = parser.parse().unwrap();
//!
//! assert_eq!(program.functions.len(), 1);
//! assert_eq!(program.functions[0].name, "main");
//! ```
//!
//! # See Also
//!
//! * [`crate::lexer`] - Produces the token stream consumed by the parser
//! * [`crate::ast`] - Defines the AST types produced by the parser
//! * [`crate::codegen`] - Consumes the AST to generate LLVM IR

use crate::ast::{Expr, ExprKind, FnDef, Program, Stmt, StmtKind, Type};
use crate::token::{Span, Token, TokenKind};

/// A recursive descent parser for the Lak language.
///
/// The parser maintains a position within the token stream and provides
/// methods to parse various grammar productions.
///
/// # Usage
///
/// Create a parser with [`Parser::new`], then call [`Parser::parse`] to
/// produce an AST.
pub struct Parser {
    /// The token stream to parse.
    tokens: Vec<Token>,
    /// Current position in the token stream.
    pos: usize,
}

/// An error that occurred during parsing.
///
/// `ParseError` contains a human-readable message and the source location
/// where the error occurred, enabling rich error reporting.
///
/// # See Also
///
/// * [`crate::lexer::LexError`] - Similar error type for lexical errors
#[derive(Debug)]
pub struct ParseError {
    /// A human-readable description of the error.
    pub message: String,
    /// The source location where the error occurred.
    pub span: Span,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {}",
            self.span.line, self.span.column, self.message
        )
    }
}

impl Parser {
    /// Creates a new parser from a token list.
    ///
    /// # Panics
    /// Panics if the token list is empty. The lexer should always
    /// produce at least an Eof token.
    pub fn new(tokens: Vec<Token>) -> Self {
        assert!(!tokens.is_empty(), "Token list must not be empty");
        Parser { tokens, pos: 0 }
    }

    /// Parses the entire token stream into a [`Program`].
    ///
    /// This is the main entry point for parsing. It repeatedly parses
    /// function definitions until the end of file is reached.
    ///
    /// # Returns
    ///
    /// * `Ok(Program)` - The parsed program AST
    /// * `Err(ParseError)` - If a syntax error is encountered
    ///
    /// # Errors
    ///
    /// Returns an error if any function definition fails to parse. Common causes:
    /// - Missing `fn` keyword at top level
    /// - Malformed function signature
    /// - Syntax errors in function body
    pub fn parse(&mut self) -> Result<Program, ParseError> {
        let mut functions = Vec::new();

        while !self.is_eof() {
            let fn_def = self.parse_fn_def()?;
            functions.push(fn_def);
        }

        Ok(Program { functions })
    }

    /// Parses a function definition.
    ///
    /// # Grammar
    ///
    /// ```text
    /// fn_def → "fn" IDENTIFIER "(" ")" "->" IDENTIFIER "{" stmt* "}"
    /// ```
    ///
    /// Currently only parameterless functions are supported.
    fn parse_fn_def(&mut self) -> Result<FnDef, ParseError> {
        // Expect `fn` keyword
        self.expect(&TokenKind::Fn)?;

        // Expect function name (identifier)
        let name = self.expect_identifier()?;

        // Expect `(` `)`
        self.expect(&TokenKind::LeftParen)?;
        self.expect(&TokenKind::RightParen)?;

        // Expect `->` return_type
        self.expect(&TokenKind::Arrow)?;
        let return_type = self.expect_identifier()?;

        // Expect `{` body `}`
        self.expect(&TokenKind::LeftBrace)?;

        let mut body = Vec::new();
        while !matches!(self.current_kind(), TokenKind::RightBrace) && !self.is_eof() {
            let stmt = self.parse_stmt()?;
            body.push(stmt);
        }

        self.expect(&TokenKind::RightBrace)?;

        Ok(FnDef {
            name,
            return_type,
            body,
        })
    }

    /// Expects an identifier token and returns its name.
    fn expect_identifier(&mut self) -> Result<String, ParseError> {
        match self.current_kind().clone() {
            TokenKind::Identifier(name) => {
                self.advance();
                Ok(name)
            }
            _ => Err(ParseError {
                message: format!(
                    "Expected identifier, found {}",
                    Self::token_kind_display(self.current_kind())
                ),
                span: self.current_span(),
            }),
        }
    }

    /// Returns a user-friendly display string for a token kind.
    fn token_kind_display(kind: &TokenKind) -> String {
        match kind {
            TokenKind::Fn => "'fn' keyword".to_string(),
            TokenKind::LeftBrace => "'{'".to_string(),
            TokenKind::RightBrace => "'}'".to_string(),
            TokenKind::LeftParen => "'('".to_string(),
            TokenKind::RightParen => "')'".to_string(),
            TokenKind::Arrow => "'->'".to_string(),
            TokenKind::Comma => "','".to_string(),
            TokenKind::Identifier(s) => format!("identifier '{}'", s),
            TokenKind::StringLiteral(s) => {
                if s.len() > 20 {
                    format!("string \"{}...\"", &s[..20])
                } else {
                    format!("string \"{}\"", s)
                }
            }
            TokenKind::Eof => "end of file".to_string(),
            TokenKind::Let => "'let' keyword".to_string(),
            TokenKind::Colon => "':'".to_string(),
            TokenKind::Equals => "'='".to_string(),
            TokenKind::IntLiteral(n) => format!("integer '{}'", n),
        }
    }

    /// Returns a reference to the current token.
    ///
    /// This method is safe to call at any time - if the position is past
    /// the end, it returns the last token (which should be `Eof`).
    fn current(&self) -> &Token {
        // new() ensures tokens is non-empty (len >= 1)
        // advance() doesn't increment pos past Eof
        // Therefore idx is always valid: 0 <= idx < tokens.len()
        let idx = self.pos.min(self.tokens.len() - 1);
        &self.tokens[idx]
    }

    /// Returns the kind of the current token.
    fn current_kind(&self) -> &TokenKind {
        &self.current().kind
    }

    /// Returns the span of the current token.
    fn current_span(&self) -> Span {
        self.current().span
    }

    /// Returns `true` if the current token is `Eof`.
    fn is_eof(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// Advances to the next token.
    ///
    /// Does nothing if already at `Eof`.
    fn advance(&mut self) {
        if !self.is_eof() {
            self.pos += 1;
        }
    }

    /// Expects the current token to match `expected` and advances.
    ///
    /// # Arguments
    ///
    /// * `expected` - The expected token kind
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the current token matches and was consumed
    /// * `Err(ParseError)` - If the current token does not match
    fn expect(&mut self, expected: &TokenKind) -> Result<(), ParseError> {
        if self.current_kind() == expected {
            self.advance();
            Ok(())
        } else {
            Err(ParseError {
                message: format!(
                    "Expected {}, found {}",
                    Self::token_kind_display(expected),
                    Self::token_kind_display(self.current_kind())
                ),
                span: self.current_span(),
            })
        }
    }

    /// Parses a single statement.
    ///
    /// # Grammar
    ///
    /// ```text
    /// stmt → let_stmt | expr_stmt
    /// ```
    fn parse_stmt(&mut self) -> Result<Stmt, ParseError> {
        match self.current_kind() {
            TokenKind::Let => self.parse_let_stmt(),
            _ => {
                let expr = self.parse_expr()?;
                let span = expr.span;
                Ok(Stmt::new(StmtKind::Expr(expr), span))
            }
        }
    }

    /// Parses a let statement.
    ///
    /// # Grammar
    ///
    /// ```text
    /// let_stmt → "let" IDENTIFIER ":" type "=" expr
    /// type → "i32" | "i64"
    /// ```
    fn parse_let_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.current_span();

        // Expect `let`
        self.expect(&TokenKind::Let)?;

        // Expect variable name
        let name = self.expect_identifier()?;

        // Expect `:` type annotation
        self.expect(&TokenKind::Colon)?;
        let ty = self.parse_type()?;

        // Expect `=` initializer
        self.expect(&TokenKind::Equals)?;
        let init = self.parse_expr()?;

        // Span covers from 'let' to end of initializer expression
        let span = Span::new(
            start_span.start,
            init.span.end,
            start_span.line,
            start_span.column,
        );

        Ok(Stmt::new(StmtKind::Let { name, ty, init }, span))
    }

    /// Parses a type annotation.
    ///
    /// # Grammar
    ///
    /// ```text
    /// type → "i32" | "i64"
    /// ```
    fn parse_type(&mut self) -> Result<Type, ParseError> {
        let type_span = self.current_span();
        let name = self.expect_identifier()?;
        match name.as_str() {
            "i32" => Ok(Type::I32),
            "i64" => Ok(Type::I64),
            _ => Err(ParseError {
                message: format!("Unknown type: '{}'. Expected 'i32' or 'i64'", name),
                span: type_span,
            }),
        }
    }

    /// Parses an expression.
    ///
    /// Handles identifiers (function calls or variable references),
    /// string literals, and integer literals.
    ///
    /// # Grammar
    ///
    /// ```text
    /// expr → call | IDENTIFIER | STRING | INT
    /// call → IDENTIFIER "(" arguments? ")"
    /// ```
    fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        let token = self.current().clone();
        let start_span = token.span;

        match &token.kind {
            TokenKind::Identifier(name) => {
                let name = name.clone();
                self.advance();
                if matches!(self.current_kind(), TokenKind::LeftParen) {
                    self.parse_call(name, start_span)
                } else {
                    // Variable reference
                    Ok(Expr::new(ExprKind::Identifier(name), start_span))
                }
            }
            TokenKind::StringLiteral(value) => {
                let value = value.clone();
                self.advance();
                Ok(Expr::new(ExprKind::StringLiteral(value), start_span))
            }
            TokenKind::IntLiteral(value) => {
                let value = *value;
                self.advance();
                Ok(Expr::new(ExprKind::IntLiteral(value), start_span))
            }
            _ => Err(ParseError {
                message: format!(
                    "Unexpected token: {}",
                    Self::token_kind_display(&token.kind)
                ),
                span: token.span,
            }),
        }
    }

    /// Parses a function call expression.
    ///
    /// The callee identifier has already been consumed. This method parses
    /// the argument list within parentheses.
    ///
    /// # Arguments
    ///
    /// * `callee` - The name of the function being called
    /// * `start_span` - The span of the callee identifier
    ///
    /// # Grammar
    ///
    /// ```text
    /// call → IDENTIFIER "(" arguments? ")"
    /// arguments → expr ("," expr)*
    /// ```
    fn parse_call(&mut self, callee: String, start_span: Span) -> Result<Expr, ParseError> {
        self.expect(&TokenKind::LeftParen)?;

        let mut args = Vec::new();

        if !matches!(self.current_kind(), TokenKind::RightParen) {
            loop {
                let arg = self.parse_expr()?;
                args.push(arg);

                if matches!(self.current_kind(), TokenKind::Comma) {
                    self.advance();
                } else {
                    break;
                }
            }
        }

        let end_span = self.current_span();
        self.expect(&TokenKind::RightParen)?;

        // Span covers from callee to closing paren
        let span = Span::new(
            start_span.start,
            end_span.end,
            start_span.line,
            start_span.column,
        );

        Ok(Expr::new(ExprKind::Call { callee, args }, span))
    }
}
