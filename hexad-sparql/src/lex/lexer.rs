//! SPARQL lexer built on winnow.
//!
//! Tokenizes query text into a stream of spanned tokens. Unknown input does
//! not abort the lexer: an `Error` token is emitted for the offending
//! character and lexing continues, so the parser can report every problem.

use std::sync::Arc;

use winnow::ascii::digit1;
use winnow::combinator::{alt, delimited, opt, peek, preceded};
use winnow::error::ContextError;
use winnow::stream::{Location, Stream};
use winnow::token::{any, one_of, take_till, take_while};
use winnow::{LocatingSlice, ModalResult, Parser};

use super::chars::*;
use super::token::{keyword_from_str, Token, TokenKind};
use crate::span::SourceSpan;

/// Input type for the lexer; tracks position for spans.
type Input<'a> = LocatingSlice<&'a str>;

/// Tokenize a SPARQL query string.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut input = LocatingSlice::new(source);

    loop {
        skip_ws_and_comments(&mut input);

        if input.is_empty() {
            let pos = input.current_token_start();
            tokens.push(Token::new(TokenKind::Eof, SourceSpan::point(pos)));
            break;
        }

        let start = input.current_token_start();
        match next_token(&mut input) {
            Ok(kind) => {
                let end = input.current_token_start();
                tokens.push(Token::new(kind, SourceSpan::new(start, end)));
            }
            Err(_) => {
                // Skip one character and keep lexing.
                let c = any::<_, ContextError>.parse_next(&mut input).unwrap_or('?');
                let end = input.current_token_start();
                tokens.push(Token::new(
                    TokenKind::Error(Arc::from(format!("unexpected character: '{c}'"))),
                    SourceSpan::new(start, end),
                ));
            }
        }
    }

    tokens
}

/// Skip whitespace and `#` line comments.
fn skip_ws_and_comments(input: &mut Input<'_>) {
    loop {
        let _: ModalResult<&str, ContextError> = take_while(0.., is_ws).parse_next(input);

        if input.starts_with('#') {
            let _: ModalResult<&str, ContextError> =
                take_till(0.., |c| c == '\n' || c == '\r').parse_next(input);
        } else {
            break;
        }
    }
}

/// Parse the next token.
fn next_token(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    alt((
        // Multi-char operators must come before single-char fallbacks
        parse_double_caret,
        parse_double_pipe,
        parse_double_amp,
        parse_ne,
        parse_le,
        parse_ge,
        parse_iri_ref,
        parse_default_prefix,
        parse_word_or_keyword,
        parse_variable,
        parse_string_literal,
        parse_number,
        parse_lang_tag,
        parse_punctuation,
    ))
    .parse_next(input)
}

// =============================================================================
// IRIs
// =============================================================================

/// Parse an IRI reference: `<...>`
fn parse_iri_ref(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    delimited('<', take_while(1.., is_iri_char), '>')
        .map(|s: &str| TokenKind::Iri(Arc::from(s)))
        .parse_next(input)
}

// =============================================================================
// Prefixed names and keywords
// =============================================================================

/// Parse a default-prefix name (`:local`) or default namespace (`:`).
fn parse_default_prefix(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    ':'.parse_next(input)?;
    let local = opt(parse_pn_local).parse_next(input)?;
    match local {
        Some(local) => Ok(TokenKind::PrefixedName {
            prefix: Arc::from(""),
            local: Arc::from(local),
        }),
        None => Ok(TokenKind::PrefixedNameNs(Arc::from(""))),
    }
}

/// Parse a word that is either a keyword, a prefixed name, or a prefix
/// namespace.
///
/// The prefix of a prefixed name must start with PN_CHARS_BASE; keywords are
/// plain alphabetic words. The overlap (e.g. `a`) is resolved by checking
/// for a following colon first.
fn parse_word_or_keyword(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    let start = input.checkpoint();

    let first = input
        .chars()
        .next()
        .ok_or_else(|| winnow::error::ErrMode::Backtrack(ContextError::new()))?;
    if !is_pn_chars_base(first) {
        return Err(winnow::error::ErrMode::Backtrack(ContextError::new()));
    }

    let word: &str = take_while(1.., is_pn_chars).parse_next(input)?;

    if peek(opt(':')).parse_next(input)?.is_some() {
        let word = word.to_string();
        ':'.parse_next(input)?;
        let local = opt(parse_pn_local).parse_next(input)?;
        return match local {
            Some(local) => Ok(TokenKind::PrefixedName {
                prefix: Arc::from(word.as_str()),
                local: Arc::from(local),
            }),
            None => Ok(TokenKind::PrefixedNameNs(Arc::from(word.as_str()))),
        };
    }

    match keyword_from_str(word) {
        Some(kw) => Ok(kw),
        None => {
            input.reset(&start);
            Err(winnow::error::ErrMode::Backtrack(ContextError::new()))
        }
    }
}

/// Parse the local part of a prefixed name (after the colon).
///
/// Dots are allowed in the middle of a local name but not at the end, so
/// `ex:foo.` lexes as `ex:foo` followed by `.`.
fn parse_pn_local(input: &mut Input<'_>) -> ModalResult<String> {
    let first = input
        .chars()
        .next()
        .ok_or_else(|| winnow::error::ErrMode::Backtrack(ContextError::new()))?;
    if !is_pn_chars_u(first) && !first.is_ascii_digit() {
        return Err(winnow::error::ErrMode::Backtrack(ContextError::new()));
    }

    let mut result = String::new();
    loop {
        let chunk: &str = take_while(0.., is_pn_chars).parse_next(input)?;
        result.push_str(chunk);

        if input.starts_with('.') {
            let rest = &input.as_ref()[1..];
            if rest.chars().next().map_or(false, is_pn_chars) {
                '.'.parse_next(input)?;
                result.push('.');
                continue;
            }
        }
        break;
    }

    if result.is_empty() {
        return Err(winnow::error::ErrMode::Backtrack(ContextError::new()));
    }
    Ok(result)
}

// =============================================================================
// Variables
// =============================================================================

/// Parse a variable: `?name` or `$name`
fn parse_variable(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    preceded(one_of(['?', '$']), parse_varname)
        .map(|name: &str| TokenKind::Var(Arc::from(name)))
        .parse_next(input)
}

fn parse_varname<'a>(input: &mut Input<'a>) -> ModalResult<&'a str> {
    (
        take_while(1, is_varname_start),
        take_while(0.., is_varname_char),
    )
        .take()
        .parse_next(input)
}

// =============================================================================
// String literals
// =============================================================================

/// Parse a double-quoted string literal with escapes.
fn parse_string_literal(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    delimited('"', parse_string_content, '"')
        .map(|s| TokenKind::String(Arc::from(s)))
        .parse_next(input)
}

fn parse_string_content(input: &mut Input<'_>) -> ModalResult<String> {
    let mut result = String::new();

    loop {
        let chunk: &str = take_while(0.., |c| c != '"' && c != '\\' && c != '\n' && c != '\r')
            .parse_next(input)?;
        result.push_str(chunk);

        if input.is_empty() || input.starts_with('"') {
            break;
        }

        if input.starts_with('\\') {
            '\\'.parse_next(input)?;
            let escaped = parse_escape_char(input)?;
            result.push(escaped);
        } else {
            // Bare newline inside a short string
            return Err(winnow::error::ErrMode::Backtrack(ContextError::new()));
        }
    }

    Ok(result)
}

/// Parse an escape character after a backslash.
fn parse_escape_char(input: &mut Input<'_>) -> ModalResult<char> {
    let c: char = any.parse_next(input)?;
    match c {
        '"' => Ok('"'),
        '\\' => Ok('\\'),
        'n' => Ok('\n'),
        'r' => Ok('\r'),
        't' => Ok('\t'),
        _ => Err(winnow::error::ErrMode::Backtrack(ContextError::new())),
    }
}

// =============================================================================
// Numbers
// =============================================================================

/// Parse a numeric literal: optional sign, digits, optional decimal part.
fn parse_number(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    alt((parse_decimal, parse_integer)).parse_next(input)
}

fn parse_integer(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    let sign = opt(one_of(['+', '-'])).parse_next(input)?;
    let digits: &str = digit1.parse_next(input)?;

    // `1.5` must lex as a decimal; `1.` is Integer then Dot.
    if input.starts_with('.') {
        let rest = &input.as_ref()[1..];
        if rest.chars().next().map_or(false, |c| c.is_ascii_digit()) {
            return Err(winnow::error::ErrMode::Backtrack(ContextError::new()));
        }
    }

    let mut text = String::new();
    if let Some(s) = sign {
        text.push(s);
    }
    text.push_str(digits);

    text.parse::<i64>()
        .map(TokenKind::Integer)
        .map_err(|_| winnow::error::ErrMode::Backtrack(ContextError::new()))
}

fn parse_decimal(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    let sign = opt(one_of(['+', '-'])).parse_next(input)?;
    let (whole, frac): (&str, &str) = (digit1, preceded('.', digit1)).parse_next(input)?;

    let mut text = String::new();
    if let Some(s) = sign {
        text.push(s);
    }
    text.push_str(whole);
    text.push('.');
    text.push_str(frac);

    Ok(TokenKind::Decimal(Arc::from(text)))
}

// =============================================================================
// Language tags
// =============================================================================

/// Parse a language tag: `@en`, `@en-US`, ...
fn parse_lang_tag(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    '@'.parse_next(input)?;
    let first: &str = take_while(1.., |c: char| c.is_ascii_alphabetic()).parse_next(input)?;

    let mut tag = first.to_string();
    while input.starts_with('-') {
        let rest = &input.as_ref()[1..];
        if rest.chars().next().map_or(false, |c| c.is_ascii_alphanumeric()) {
            '-'.parse_next(input)?;
            let part: &str =
                take_while(1.., |c: char| c.is_ascii_alphanumeric()).parse_next(input)?;
            tag.push('-');
            tag.push_str(part);
        } else {
            break;
        }
    }

    Ok(TokenKind::LangTag(Arc::from(tag)))
}

// =============================================================================
// Operators and punctuation
// =============================================================================

fn parse_double_caret(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    "^^".map(|_| TokenKind::DoubleCaret).parse_next(input)
}

fn parse_double_pipe(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    "||".map(|_| TokenKind::Or).parse_next(input)
}

fn parse_double_amp(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    "&&".map(|_| TokenKind::And).parse_next(input)
}

fn parse_ne(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    "!=".map(|_| TokenKind::Ne).parse_next(input)
}

fn parse_le(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    "<=".map(|_| TokenKind::Le).parse_next(input)
}

fn parse_ge(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    ">=".map(|_| TokenKind::Ge).parse_next(input)
}

fn parse_punctuation(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    any.verify_map(|c| match c {
        '{' => Some(TokenKind::LBrace),
        '}' => Some(TokenKind::RBrace),
        '(' => Some(TokenKind::LParen),
        ')' => Some(TokenKind::RParen),
        '.' => Some(TokenKind::Dot),
        ',' => Some(TokenKind::Comma),
        ';' => Some(TokenKind::Semicolon),
        '=' => Some(TokenKind::Eq),
        '<' => Some(TokenKind::Lt),
        '>' => Some(TokenKind::Gt),
        '+' => Some(TokenKind::Plus),
        '-' => Some(TokenKind::Minus),
        '*' => Some(TokenKind::Star),
        '/' => Some(TokenKind::Slash),
        '!' => Some(TokenKind::Bang),
        _ => None,
    })
    .parse_next(input)
}
