use super::ParseError;

/// Lexical token of a single DOT line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Contents of a double-quoted string, without the quotes. Escapes are left as written.
    Quoted(&'a str),
    /// Any bare run of characters: keywords, attribute names, unquoted ids, numbers.
    Word(&'a str),
    Arrow,
    Equals,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Semi,
    Comma,
}

fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || matches!(c, '"' | '[' | ']' | '{' | '}' | '=' | ';' | ',')
}

/// Split one line into tokens.
///
/// `//` starts a comment anywhere outside a quoted string; `#` does so only as
/// the first non-blank character. Strings must close on the line they open.
pub fn tokenize(line: &str, line_number: usize) -> Result<Vec<Token<'_>>, ParseError> {
    let mut tokens = Vec::new();
    let mut chars = line.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        let next = chars.peek().map(|&(_, n)| n);
        match c {
            c if c.is_whitespace() => {}
            '#' if tokens.is_empty() => break,
            '/' if next == Some('/') => break,
            '-' if next == Some('>') => {
                chars.next();
                tokens.push(Token::Arrow);
            }
            '"' => {
                let mut escaped = false;
                let mut end = None;
                for (i, ch) in chars.by_ref() {
                    if escaped {
                        escaped = false;
                    } else if ch == '\\' {
                        escaped = true;
                    } else if ch == '"' {
                        end = Some(i);
                        break;
                    }
                }
                let end = end.ok_or(ParseError::UnterminatedString { line: line_number })?;
                tokens.push(Token::Quoted(&line[start + 1..end]));
            }
            '[' => tokens.push(Token::LBracket),
            ']' => tokens.push(Token::RBracket),
            '{' => tokens.push(Token::LBrace),
            '}' => tokens.push(Token::RBrace),
            '=' => tokens.push(Token::Equals),
            ';' => tokens.push(Token::Semi),
            ',' => tokens.push(Token::Comma),
            _ => {
                let mut end = start + c.len_utf8();
                while let Some(&(i, ch)) = chars.peek() {
                    if is_delimiter(ch) {
                        break;
                    }
                    let rest = &line[i..];
                    if rest.starts_with("->") || rest.starts_with("//") {
                        break;
                    }
                    end = i + ch.len_utf8();
                    chars.next();
                }
                tokens.push(Token::Word(&line[start..end]));
            }
        }
    }

    Ok(tokens)
}
