use log::debug;
use pest::error::LineColLocation;
use pest::Parser;
use pest_derive::Parser;

use crate::ast::{CmpOp, Expr, Script, Statement};
use crate::errors::TranslateError;

#[derive(Parser)]
#[grammar = "grammar.pest"]
struct CoVeriLangParser;

type Pair<'a> = pest::iterators::Pair<'a, Rule>;

/// Traduce código fuente de pipelines a IR.
pub trait Translator {
    fn translate(&self, source: &str) -> Result<Script, TranslateError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CoVeriLangTranslator;

impl Translator for CoVeriLangTranslator {
    fn translate(&self, source: &str) -> Result<Script, TranslateError> {
        let mut pairs = CoVeriLangParser::parse(Rule::program, source).map_err(from_pest)?;
        let program = pairs.next().ok_or_else(|| TranslateError::syntax("empty parse tree", 1, 1))?;

        let mut statements = Vec::new();
        for pair in program.into_inner() {
            if pair.as_rule() == Rule::EOI {
                continue;
            }
            statements.push(parse_statement(pair)?);
        }
        debug!("translate:done statements={}", statements.len());
        Ok(Script { statements })
    }
}

fn from_pest(e: pest::error::Error<Rule>) -> TranslateError {
    let (line, col) = match e.line_col {
        LineColLocation::Pos(pos) => pos,
        LineColLocation::Span(start, _) => start,
    };
    let e = e.renamed_rules(describe_rule);
    TranslateError::syntax(e.variant.message().into_owned(), line, col)
}

fn describe_rule(rule: &Rule) -> String {
    let name = match rule {
        Rule::EOI => "end of input",
        Rule::ident => "identifier",
        Rule::string => "string",
        Rule::expr => "expression",
        Rule::cmp_op => "'==' or '!='",
        Rule::print_stmt | Rule::assign_stmt | Rule::eval_stmt => "statement",
        Rule::call | Rule::factory => "call",
        Rule::list => "list",
        _ => return format!("{rule:?}"),
    };
    name.to_string()
}

fn syntax_error_at(pair: &Pair<'_>, message: impl Into<String>) -> TranslateError {
    let (line, col) = pair.as_span().start_pos().line_col();
    TranslateError::syntax(message, line, col)
}

fn child<'a>(parent: &Pair<'a>, next: Option<Pair<'a>>) -> Result<Pair<'a>, TranslateError> {
    next.ok_or_else(|| syntax_error_at(parent, format!("incomplete {}", describe_rule(&parent.as_rule()))))
}

fn parse_statement(pair: Pair<'_>) -> Result<Statement, TranslateError> {
    let outer = pair.clone();
    let mut inner = pair.into_inner();
    match outer.as_rule() {
        Rule::print_stmt => Ok(Statement::Print(parse_expr(child(&outer, inner.next())?)?)),
        Rule::assign_stmt => {
            let name = child(&outer, inner.next())?.as_str().to_string();
            let value = parse_expr(child(&outer, inner.next())?)?;
            Ok(Statement::Assign { name, value })
        }
        Rule::eval_stmt => Ok(Statement::Eval(parse_expr(child(&outer, inner.next())?)?)),
        other => Err(syntax_error_at(&outer, format!("unexpected {}", describe_rule(&other)))),
    }
}

fn parse_expr(pair: Pair<'_>) -> Result<Expr, TranslateError> {
    let outer = pair.clone();
    let mut inner = pair.into_inner();
    let left = parse_operand(child(&outer, inner.next())?)?;
    let Some(op) = inner.next() else {
        return Ok(left);
    };
    let op = if op.as_str() == "==" { CmpOp::Eq } else { CmpOp::Ne };
    let right = parse_operand(child(&outer, inner.next())?)?;
    Ok(Expr::Compare { op,
                       left: Box::new(left),
                       right: Box::new(right) })
}

fn parse_operand(pair: Pair<'_>) -> Result<Expr, TranslateError> {
    let outer = pair.clone();
    match outer.as_rule() {
        Rule::ident => Ok(Expr::Var(outer.as_str().to_string())),
        Rule::string => {
            let text = pair.into_inner().next().map(|p| p.as_str()).unwrap_or("");
            Ok(Expr::Str(unescape(text)))
        }
        Rule::list => Ok(Expr::List(parse_args(pair)?)),
        Rule::call => {
            let mut inner = pair.into_inner();
            let function = child(&outer, inner.next())?.as_str().to_string();
            let args = inner.map(parse_expr).collect::<Result<Vec<_>, _>>()?;
            Ok(Expr::Call { function, args })
        }
        Rule::factory => {
            let mut inner = pair.into_inner();
            let kind = child(&outer, inner.next())?.as_str().to_string();
            let arg = parse_expr(child(&outer, inner.next())?)?;
            Ok(Expr::Call { function: kind,
                            args: vec![arg] })
        }
        Rule::expr => parse_expr(pair),
        other => Err(syntax_error_at(&outer, format!("unexpected {}", describe_rule(&other)))),
    }
}

// Sólo `\\`, `\"` y `\'` son escapes; cualquier otra barra es literal.
fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(&next) = chars.peek() {
                if matches!(next, '\\' | '"' | '\'') {
                    out.push(next);
                    chars.next();
                    continue;
                }
            }
        }
        out.push(c);
    }
    out
}

fn parse_args(pair: Pair<'_>) -> Result<Vec<Expr>, TranslateError> {
    pair.into_inner().map(parse_expr).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translate(src: &str) -> Script {
        CoVeriLangTranslator.translate(src).unwrap()
    }

    #[test]
    fn semicolons_are_optional() {
        let a = translate("p = Program(\"foo.c\"); s = Verdict(\"TRUE\");");
        let b = translate("p = Program(\"foo.c\")\ns = Verdict(\"TRUE\")\n");
        assert_eq!(a, b);
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn escapes_inside_strings() {
        let s = translate(r#"a = "it's \"x\" \\ \n"; b = 'o\'k'"#);
        assert_eq!(s.statements,
                   vec![Statement::Assign { name: "a".into(),
                                            value: Expr::str(r#"it's "x" \ \n"#) },
                        Statement::Assign { name: "b".into(),
                                            value: Expr::str("o'k") }]);
        assert_eq!(translate(&s.to_string()), s);
    }

    #[test]
    fn factory_lowers_to_call() {
        let s = translate("g = ArtifactFactory.create(TestGoal, 'goal.prp')");
        assert_eq!(s.statements,
                   vec![Statement::Assign { name: "g".into(),
                                            value: Expr::call("TestGoal", vec![Expr::str("goal.prp")]) }]);
    }

    #[test]
    fn comparison_is_not_an_assignment() {
        let s = translate("a == b");
        assert!(matches!(&s.statements[0], Statement::Eval(Expr::Compare { op: CmpOp::Eq, .. })));
    }
}
