//! Token kinds for the Lak lexer.
//!
//! This module defines the [`TokenKind`] enum representing all possible
//! token types in the Lak language.

/// The kind of token recognized by the lexer.
///
/// This enum represents all possible token types in the Lak language.
/// Each variant may carry associated data (e.g., the actual string value
/// for identifiers and string literals).
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// An identifier (function name, variable name, etc.).
    ///
    /// Identifiers start with an ASCII alphabetic character (a-z, A-Z) or underscore,
    /// followed by any number of ASCII alphanumeric characters (a-z, A-Z, 0-9) or underscores.
    /// Non-ASCII Unicode characters are explicitly rejected by the lexer.
    Identifier(String),

    /// A string literal enclosed in double quotes.
    ///
    /// The contained `String` is the unescaped value (escape sequences
    /// like `\n` are already converted to their actual characters).
    StringLiteral(String),

    /// The `fn` keyword for function definitions.
    Fn,

    /// The `let` keyword for variable declarations.
    Let,

    /// The `mut` keyword for mutable variable declarations.
    Mut,

    /// The `if` keyword for conditional branching.
    If,

    /// The `else` keyword for alternate conditional branch.
    Else,

    /// The `return` keyword for returning from functions.
    Return,

    /// The `while` keyword for loop statements.
    While,

    /// The `break` keyword for exiting loops.
    Break,

    /// The `continue` keyword for continuing to the next loop iteration.
    Continue,

    /// The `pub` keyword for public visibility.
    Pub,

    /// The `import` keyword for module imports.
    Import,

    /// The `as` keyword for import aliases.
    As,

    /// A left parenthesis `(`.
    LeftParen,

    /// A right parenthesis `)`.
    RightParen,

    /// A left brace `{`.
    LeftBrace,

    /// A right brace `}`.
    RightBrace,

    /// An arrow `->` for return type annotation.
    Arrow,

    /// A comma `,`.
    Comma,

    /// A colon `:` for type annotation.
    Colon,

    /// A dot `.` for member access.
    Dot,

    /// An equals sign `=` for variable initialization in let statements.
    Equals,

    /// A plus sign `+` for addition.
    Plus,

    /// A minus sign `-` for subtraction.
    Minus,

    /// An asterisk `*` for multiplication.
    Star,

    /// A forward slash `/` for division.
    Slash,

    /// A percent sign `%` for modulo.
    Percent,

    /// A bang (exclamation mark) `!`.
    Bang,

    /// Double ampersand `&&` for logical AND.
    AndAnd,

    /// Double pipe `||` for logical OR.
    OrOr,

    /// Double equals `==` for equality comparison.
    EqualEqual,

    /// Not equals `!=` for inequality comparison.
    BangEqual,

    /// Less than `<` for comparison.
    LessThan,

    /// Greater than `>` for comparison.
    GreaterThan,

    /// Less than or equal `<=` for comparison.
    LessEqual,

    /// Greater than or equal `>=` for comparison.
    GreaterEqual,

    /// An integer literal (e.g., 42, 100).
    IntLiteral(u64),

    /// A boolean literal (`true` or `false`).
    BoolLiteral(bool),

    /// A newline that acts as a statement terminator.
    ///
    /// Only emitted after certain tokens (identifiers, literals, `return`,
    /// `break`, `continue`, `)`, `}`) following Go-style automatic semicolon
    /// insertion rules. Newlines in other contexts are skipped and do not
    /// produce tokens.
    Newline,

    /// End of file marker.
    ///
    /// The lexer always appends this as the final token, ensuring
    /// the token vector is never empty.
    Eof,
}
