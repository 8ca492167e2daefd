//! Recursive-descent parser from canonicalized tokens to [`Expr`].
//!
//! Precedence, loosest first:
//! `or`, `and`, `not`, comparisons (chainable), `+ -`, `* / // %`,
//! unary sign, `**` (right-associative), atoms.

use super::ConditionError;
use super::alias::Stat;
use super::ast::{ArithOp, CmpOp, Expr, Logic, UnaryOp};
use super::lexer::{Spanned, Token};

/// Most tokens one condition may hold. Left-associative chains such as
/// `a + a + ...` become trees as deep as they are long, and evaluation walks
/// them recursively.
pub const MAX_TOKENS: usize = 1024;

/// Deepest nesting of parentheses, `not`, unary signs and `**` exponents.
pub const MAX_DEPTH: usize = 64;

pub fn parse(tokens: &[Spanned]) -> Result<Expr, ConditionError> {
    if tokens.is_empty() {
        return Err(ConditionError::Empty);
    }
    if tokens.len() > MAX_TOKENS {
        return Err(ConditionError::TooLong { len: tokens.len(), limit: MAX_TOKENS });
    }
    let mut p = Parser { tokens, pos: 0, depth: 0 };
    let expr = p.or()?;
    match p.peek() {
        None => Ok(expr),
        Some(_) => Err(p.unexpected("end of condition")),
    }
}

struct Parser<'t> {
    tokens: &'t [Spanned],
    pos: usize,
    depth: usize,
}

impl<'t> Parser<'t> {
    fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.pos).map(|(t, _)| t)
    }

    fn bump(&mut self) -> Option<&'t Spanned> {
        let t = self.tokens.get(self.pos);
        self.pos += 1;
        t
    }

    fn eat(&mut self, tok: &Token) -> bool {
        if self.peek() == Some(tok) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Runs `f` one nesting level deeper, refusing past [`MAX_DEPTH`].
    fn nested<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, ConditionError>,
    ) -> Result<T, ConditionError> {
        if self.depth >= MAX_DEPTH {
            let pos = self.tokens.get(self.pos.saturating_sub(1)).map_or(0, |(_, p)| *p);
            return Err(ConditionError::TooDeep { limit: MAX_DEPTH, pos });
        }
        self.depth += 1;
        let out = f(self);
        self.depth -= 1;
        out
    }

    fn unexpected(&self, expected: &'static str) -> ConditionError {
        match self.tokens.get(self.pos) {
            Some((tok, pos)) => ConditionError::UnexpectedToken {
                found: describe(tok),
                expected,
                pos: *pos,
            },
            None => ConditionError::UnexpectedEnd { expected },
        }
    }

    fn or(&mut self) -> Result<Expr, ConditionError> {
        let mut lhs = self.and()?;
        while self.eat(&Token::Or) {
            let rhs = self.and()?;
            lhs = Expr::Logic(Logic::Or, Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    fn and(&mut self) -> Result<Expr, ConditionError> {
        let mut lhs = self.not()?;
        while self.eat(&Token::And) {
            let rhs = self.not()?;
            lhs = Expr::Logic(Logic::And, Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    fn not(&mut self) -> Result<Expr, ConditionError> {
        if self.eat(&Token::Not) {
            let inner = self.nested(Self::not)?;
            return Ok(Expr::Unary(UnaryOp::Not, Box::new(inner)));
        }
        self.comparison()
    }

    fn comparison(&mut self) -> Result<Expr, ConditionError> {
        let first = self.sum()?;
        let mut rest = Vec::new();
        while let Some(op) = self.peek().and_then(cmp_op) {
            self.pos += 1;
            rest.push((op, self.sum()?));
        }
        if rest.is_empty() {
            Ok(first)
        } else {
            Ok(Expr::Compare(Box::new(first), rest))
        }
    }

    fn sum(&mut self) -> Result<Expr, ConditionError> {
        let mut lhs = self.term()?;
        loop {
            let op = match self.peek() {
                Some(Token::Plus) => ArithOp::Add,
                Some(Token::Minus) => ArithOp::Sub,
                _ => return Ok(lhs),
            };
            self.pos += 1;
            let rhs = self.term()?;
            lhs = Expr::Arith(op, Box::new(lhs), Box::new(rhs));
        }
    }

    fn term(&mut self) -> Result<Expr, ConditionError> {
        let mut lhs = self.unary()?;
        loop {
            let op = match self.peek() {
                Some(Token::Star) => ArithOp::Mul,
                Some(Token::Slash) => ArithOp::Div,
                Some(Token::SlashSlash) => ArithOp::FloorDiv,
                Some(Token::Percent) => ArithOp::Rem,
                _ => return Ok(lhs),
            };
            self.pos += 1;
            let rhs = self.unary()?;
            lhs = Expr::Arith(op, Box::new(lhs), Box::new(rhs));
        }
    }

    fn unary(&mut self) -> Result<Expr, ConditionError> {
        if self.eat(&Token::Minus) {
            let inner = self.nested(Self::unary)?;
            return Ok(Expr::Unary(UnaryOp::Neg, Box::new(inner)));
        }
        if self.eat(&Token::Plus) {
            return self.nested(Self::unary);
        }
        self.power()
    }

    fn power(&mut self) -> Result<Expr, ConditionError> {
        let base = self.atom()?;
        if self.eat(&Token::StarStar) {
            // -x ** 2 binds as -(x ** 2); 2 ** -1 is allowed.
            let exp = self.nested(Self::unary)?;
            return Ok(Expr::Arith(ArithOp::Pow, Box::new(base), Box::new(exp)));
        }
        Ok(base)
    }

    fn atom(&mut self) -> Result<Expr, ConditionError> {
        let Some((tok, pos)) = self.bump() else {
            return Err(ConditionError::UnexpectedEnd { expected: "a value" });
        };
        match tok {
            Token::Num(v) => Ok(Expr::Lit(*v)),
            Token::Ident(name) => match Stat::from_name(name) {
                Some(stat) => Ok(Expr::Var(stat)),
                None => Err(ConditionError::UnknownVariable {
                    name: name.clone(),
                    pos: *pos,
                }),
            },
            Token::LParen => {
                let inner = self.nested(Self::or)?;
                if self.eat(&Token::RParen) {
                    Ok(inner)
                } else {
                    Err(self.unexpected("')'"))
                }
            }
            _ => {
                self.pos -= 1;
                Err(self.unexpected("a value"))
            }
        }
    }
}

fn cmp_op(tok: &Token) -> Option<CmpOp> {
    Some(match tok {
        Token::Lt => CmpOp::Lt,
        Token::Le => CmpOp::Le,
        Token::Gt => CmpOp::Gt,
        Token::Ge => CmpOp::Ge,
        Token::EqEq => CmpOp::Eq,
        Token::Ne => CmpOp::Ne,
        _ => return None,
    })
}

fn describe(tok: &Token) -> String {
    match tok {
        Token::Num(v) => format!("number {v}"),
        Token::Ident(name) => format!("name {name:?}"),
        other => format!("{other:?}"),
    }
}
