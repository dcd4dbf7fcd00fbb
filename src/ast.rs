//! Abstract Syntax Tree definitions for the Lak programming language.
//!
//! This module defines the data structures that represent parsed Lak programs.
//! The AST is produced by the [`crate::parser`] and consumed by the [`crate::codegen`].
//!
//! # Structure
//!
//! The AST has a hierarchical structure:
//! - [`Program`] - The root node containing all function definitions
//! - [`FnDef`] - A function definition with name, return type, and body
//! - [`Stmt`] - Individual statements (currently only expression statements)
//! - [`Expr`] - Expressions (string literals and function calls)
//!
//! # See Also
//!
//! * [`crate::parser`] - Produces the AST from tokens
//! * [`crate::codegen`] - Generates LLVM IR from the AST

/// An expression in the Lak language.
///
/// Expressions are the building blocks of Lak programs. They can be
/// evaluated to produce values or trigger side effects (in the case
/// of function calls).
#[derive(Debug, Clone)]
pub enum Expr {
    /// A string literal value.
    ///
    /// The contained `String` is the unescaped content of the literal
    /// (escape sequences have already been processed by the lexer).
    StringLiteral(String),

    /// A function call expression.
    ///
    /// # Fields
    ///
    /// * `callee` - The name of the function being called
    /// * `args` - The list of argument expressions passed to the function
    Call {
        /// The name of the function being called.
        callee: String,
        /// The arguments passed to the function.
        args: Vec<Expr>,
    },
}

/// A statement in the Lak language.
///
/// Statements are constructs within function bodies.
/// Currently, Lak only supports expression statements, but this enum
/// provides a foundation for adding more statement types in the future
/// (e.g., variable declarations, control flow).
#[derive(Debug, Clone)]
pub enum Stmt {
    /// An expression statement.
    ///
    /// Evaluates the expression for its side effects. The result value
    /// (if any) is discarded.
    Expr(Expr),
}

/// A function definition in the Lak language.
///
/// Functions are the primary organizational unit in Lak. Every program
/// must have a `main` function as its entry point.
///
/// # Examples
///
/// ```text
/// fn main() -> void {
///     println("Hello, world!")
/// }
/// ```
#[derive(Debug, Clone)]
pub struct FnDef {
    /// The name of the function.
    pub name: String,
    /// The return type of the function (e.g., "void", "int").
    pub return_type: String,
    /// The statements that make up the function body.
    pub body: Vec<Stmt>,
}

/// The root node of a Lak program's AST.
///
/// A `Program` contains a collection of function definitions.
/// Every valid program must have at least a `main` function.
///
/// # Examples
///
/// A simple program with a `main` function:
///
/// ```text
/// // Lak source code:
/// fn main() -> void {
///     println("Hello, world!")
/// }
///
/// // Corresponding AST:
/// Program {
///     functions: vec![
///         FnDef {
///             name: "main".to_string(),
///             return_type: "void".to_string(),
///             body: vec![
///                 Stmt::Expr(Expr::Call {
///                     callee: "println".to_string(),
///                     args: vec![Expr::StringLiteral("Hello, world!".to_string())],
///                 }),
///             ],
///         },
///     ],
/// }
/// ```
#[derive(Debug)]
pub struct Program {
    /// The function definitions in this program.
    pub functions: Vec<FnDef>,
}
