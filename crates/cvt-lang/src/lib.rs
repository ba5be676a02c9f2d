//! cvt-lang: traductor de CoVeriLang a una IR tipada.
//!
//! El código fuente de un pipeline se analiza con una gramática pest y se
//! baja a `Script`, que el intérprete de `cvt-engine` ejecuta directamente.
//! `Script` implementa `Display`: la IR renderizada es lo que imprime
//! `--gen-code`.
pub mod ast;
pub mod errors;
pub mod parser;

pub use ast::{CmpOp, Expr, Script, Statement};
pub use errors::TranslateError;
pub use parser::{CoVeriLangTranslator, Translator};
