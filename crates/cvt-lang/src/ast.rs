//! IR de pipelines.
//!
//! `ArtifactFactory.create(T, e)` se baja a `Call { function: "T", args: [e] }`,
//! de modo que la IR sólo conoce llamadas, variables, literales, listas y
//! comparaciones.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Script {
    pub statements: Vec<Statement>,
}

impl Script {
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Assign { name: String, value: Expr },
    Print(Expr),
    Eval(Expr),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpOp {
    Eq,
    Ne,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Str(String),
    Var(String),
    List(Vec<Expr>),
    Call { function: String, args: Vec<Expr> },
    Compare { op: CmpOp, left: Box<Expr>, right: Box<Expr> },
}

impl Expr {
    pub fn call(function: impl Into<String>, args: Vec<Expr>) -> Self {
        Expr::Call { function: function.into(),
                     args }
    }

    pub fn str(value: impl Into<String>) -> Self {
        Expr::Str(value.into())
    }

    pub fn var(name: impl Into<String>) -> Self {
        Expr::Var(name.into())
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            writeln!(f, "{stmt}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Assign { name, value } => write!(f, "{name} = {value}"),
            Statement::Print(e) => write!(f, "print({e})"),
            Statement::Eval(e) => write!(f, "{e}"),
        }
    }
}

impl fmt::Display for CmpOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
                        CmpOp::Eq => "==",
                        CmpOp::Ne => "!=",
                    })
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Str(s) => write_quoted(f, s),
            Expr::Var(name) => f.write_str(name),
            Expr::List(items) => {
                f.write_str("[")?;
                write_joined(f, items)?;
                f.write_str("]")
            }
            Expr::Call { function, args } => {
                write!(f, "{function}(")?;
                write_joined(f, args)?;
                f.write_str(")")
            }
            Expr::Compare { op, left, right } => write!(f, "{left} {op} {right}"),
        }
    }
}

// Se prefiere la comilla que no aparece en el texto; la elegida y `\` se escapan.
fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    let quote = if s.contains('"') && !s.contains('\'') { '\'' } else { '"' };
    write!(f, "{quote}")?;
    for c in s.chars() {
        if c == quote || c == '\\' {
            write!(f, "\\")?;
        }
        write!(f, "{c}")?;
    }
    write!(f, "{quote}")
}

fn write_joined(f: &mut fmt::Formatter<'_>, items: &[Expr]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}
