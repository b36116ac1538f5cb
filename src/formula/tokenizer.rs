use crate::formula::{Literal, Token};

/// Splits `text` into tokens in a single left-to-right pass.
///
/// Never fails: characters outside the alphabet become [`Token::Unknown`] and are reported by the
/// evaluator if it ever reaches them.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = vec![];
    let mut chars = text.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        let token = match c {
            c if c.is_whitespace() => continue,
            '&' => Token::And,
            '|' => Token::Or,
            '~' => Token::Not,
            '(' => Token::OpenBracket,
            ')' => Token::CloseBracket,
            c if c.is_ascii_alphabetic() => {
                // maximal munch over letters and digits
                let mut end = start + c.len_utf8();
                while let Some(&(i, next)) = chars.peek() {
                    if !next.is_ascii_alphanumeric() {
                        break;
                    }
                    end = i + next.len_utf8();
                    chars.next();
                }
                Token::Literal(Literal::new(&text[start..end]))
            }
            c => Token::Unknown(c),
        };
        tokens.push(token);
    }

    tokens
}
