use super::ConditionError;
use super::alias::{is_ident_continue, is_ident_start};

#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    Num(f64),
    Ident(String),
    LParen,
    RParen,
    Plus,
    Minus,
    Star,
    Slash,
    SlashSlash,
    Percent,
    StarStar,
    Lt,
    Le,
    Gt,
    Ge,
    EqEq,
    Ne,
    And,
    Or,
    Not,
}

/// A token and the byte offset it starts at.
pub type Spanned = (Token, usize);

pub fn tokenize(src: &str) -> Result<Vec<Spanned>, ConditionError> {
    let bytes = src.as_bytes();
    let mut out = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        let c = bytes[i] as char;
        if c.is_ascii_whitespace() {
            i += 1;
            continue;
        }
        let start = i;
        let peek = bytes.get(i + 1).map(|b| *b as char);
        let (tok, len) = match c {
            '(' => (Token::LParen, 1),
            ')' => (Token::RParen, 1),
            '+' => (Token::Plus, 1),
            '-' => (Token::Minus, 1),
            '*' if peek == Some('*') => (Token::StarStar, 2),
            '*' => (Token::Star, 1),
            '/' if peek == Some('/') => (Token::SlashSlash, 2),
            '/' => (Token::Slash, 1),
            '%' => (Token::Percent, 1),
            '<' if peek == Some('=') => (Token::Le, 2),
            '<' => (Token::Lt, 1),
            '>' if peek == Some('=') => (Token::Ge, 2),
            '>' => (Token::Gt, 1),
            '=' if peek == Some('=') => (Token::EqEq, 2),
            '!' if peek == Some('=') => (Token::Ne, 2),
            '!' => (Token::Not, 1),
            '&' if peek == Some('&') => (Token::And, 2),
            '|' if peek == Some('|') => (Token::Or, 2),
            _ if c.is_ascii_digit() || c == '.' => {
                let len = src[start..]
                    .find(|ch: char| !(ch.is_ascii_digit() || ch == '.' || ch == '_'))
                    .unwrap_or(src.len() - start);
                let text = &src[start..start + len];
                let value = text
                    .replace('_', "")
                    .parse::<f64>()
                    .map_err(|_| ConditionError::InvalidNumber {
                        text: text.to_string(),
                        pos: start,
                    })?;
                (Token::Num(value), len)
            }
            _ if is_ident_start(c) => {
                let len = src[start..]
                    .find(|ch: char| !is_ident_continue(ch))
                    .unwrap_or(src.len() - start);
                let word = &src[start..start + len];
                let tok = match word.to_ascii_lowercase().as_str() {
                    "and" => Token::And,
                    "or" => Token::Or,
                    "not" => Token::Not,
                    "true" => Token::Num(1.0),
                    "false" => Token::Num(0.0),
                    _ => Token::Ident(word.to_string()),
                };
                (tok, len)
            }
            _ => {
                let ch = src[start..].chars().next().unwrap_or(c);
                return Err(ConditionError::UnexpectedChar { ch, pos: start });
            }
        };
        out.push((tok, start));
        i += len;
    }
    Ok(out)
}
