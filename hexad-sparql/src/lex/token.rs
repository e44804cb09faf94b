//! SPARQL token types.
//!
//! Tokens are the output of lexical analysis; each carries its source span
//! for diagnostics.

use crate::span::SourceSpan;
use std::sync::Arc;

/// A token with its source span.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// The token kind
    pub kind: TokenKind,
    /// Source location
    pub span: SourceSpan,
}

impl Token {
    /// Create a new token.
    pub fn new(kind: TokenKind, span: SourceSpan) -> Self {
        Self { kind, span }
    }

    /// Check if this is an EOF token.
    pub fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }
}

/// Token kinds for the supported SPARQL subset.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    /// Full IRI: `<http://example.org/>`
    Iri(Arc<str>),

    /// Prefixed name namespace: `prefix:` (colon included in the source)
    PrefixedNameNs(Arc<str>),

    /// Prefixed name with local part: `prefix:local`
    PrefixedName {
        /// Namespace prefix (without colon)
        prefix: Arc<str>,
        /// Local name
        local: Arc<str>,
    },

    /// Variable: `?name` or `$name` (stored without the sigil)
    Var(Arc<str>),

    /// String literal (unescaped content)
    String(Arc<str>),

    /// Integer literal
    Integer(i64),

    /// Decimal literal (kept as written to preserve the lexical form)
    Decimal(Arc<str>),

    /// Language tag (stored without the `@`)
    LangTag(Arc<str>),

    // Query forms
    KwSelect,
    KwConstruct,
    KwAsk,
    KwDescribe,

    // Clauses and patterns
    KwWhere,
    KwFilter,
    KwOptional,
    KwUnion,

    // Solution modifiers
    KwDistinct,
    KwLimit,
    KwOffset,
    KwOrder,
    KwBy,
    KwAsc,
    KwDesc,

    // Prologue
    KwPrefix,

    /// `a` keyword (shorthand for rdf:type; only lowercase)
    KwA,

    // Boolean literals
    KwTrue,
    KwFalse,

    // Built-in filter functions
    KwBound,
    KwIsIri,
    KwIsUri,
    KwIsBlank,
    KwIsLiteral,

    // Punctuation
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `.`
    Dot,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `^^` (datatype marker)
    DoubleCaret,

    // Operators
    /// `||`
    Or,
    /// `&&`
    And,
    /// `=`
    Eq,
    /// `!=`
    Ne,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `<=`
    Le,
    /// `>=`
    Ge,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `!`
    Bang,

    /// End of input
    Eof,

    /// Lexer error (carries a message)
    Error(Arc<str>),
}

impl TokenKind {
    /// Whether this token is a keyword.
    pub fn is_keyword(&self) -> bool {
        self.keyword_str().is_some()
    }

    /// The canonical keyword text, if this is a keyword.
    pub fn keyword_str(&self) -> Option<&'static str> {
        match self {
            TokenKind::KwSelect => Some("SELECT"),
            TokenKind::KwConstruct => Some("CONSTRUCT"),
            TokenKind::KwAsk => Some("ASK"),
            TokenKind::KwDescribe => Some("DESCRIBE"),
            TokenKind::KwWhere => Some("WHERE"),
            TokenKind::KwFilter => Some("FILTER"),
            TokenKind::KwOptional => Some("OPTIONAL"),
            TokenKind::KwUnion => Some("UNION"),
            TokenKind::KwDistinct => Some("DISTINCT"),
            TokenKind::KwLimit => Some("LIMIT"),
            TokenKind::KwOffset => Some("OFFSET"),
            TokenKind::KwOrder => Some("ORDER"),
            TokenKind::KwBy => Some("BY"),
            TokenKind::KwAsc => Some("ASC"),
            TokenKind::KwDesc => Some("DESC"),
            TokenKind::KwPrefix => Some("PREFIX"),
            TokenKind::KwA => Some("a"),
            TokenKind::KwTrue => Some("true"),
            TokenKind::KwFalse => Some("false"),
            TokenKind::KwBound => Some("BOUND"),
            TokenKind::KwIsIri => Some("ISIRI"),
            TokenKind::KwIsUri => Some("ISURI"),
            TokenKind::KwIsBlank => Some("ISBLANK"),
            TokenKind::KwIsLiteral => Some("ISLITERAL"),
            _ => None,
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Iri(s) => write!(f, "<{s}>"),
            TokenKind::PrefixedNameNs(s) => write!(f, "{s}:"),
            TokenKind::PrefixedName { prefix, local } => write!(f, "{prefix}:{local}"),
            TokenKind::Var(s) => write!(f, "?{s}"),
            TokenKind::String(s) => write!(f, "{s:?}"),
            TokenKind::Integer(n) => write!(f, "{n}"),
            TokenKind::Decimal(s) => write!(f, "{s}"),
            TokenKind::LangTag(s) => write!(f, "@{s}"),
            TokenKind::LBrace => write!(f, "{{"),
            TokenKind::RBrace => write!(f, "}}"),
            TokenKind::LParen => write!(f, "("),
            TokenKind::RParen => write!(f, ")"),
            TokenKind::Dot => write!(f, "."),
            TokenKind::Comma => write!(f, ","),
            TokenKind::Semicolon => write!(f, ";"),
            TokenKind::DoubleCaret => write!(f, "^^"),
            TokenKind::Or => write!(f, "||"),
            TokenKind::And => write!(f, "&&"),
            TokenKind::Eq => write!(f, "="),
            TokenKind::Ne => write!(f, "!="),
            TokenKind::Lt => write!(f, "<"),
            TokenKind::Gt => write!(f, ">"),
            TokenKind::Le => write!(f, "<="),
            TokenKind::Ge => write!(f, ">="),
            TokenKind::Plus => write!(f, "+"),
            TokenKind::Minus => write!(f, "-"),
            TokenKind::Star => write!(f, "*"),
            TokenKind::Slash => write!(f, "/"),
            TokenKind::Bang => write!(f, "!"),
            TokenKind::Eof => write!(f, "EOF"),
            TokenKind::Error(s) => write!(f, "error: {s}"),
            kw => write!(f, "{}", kw.keyword_str().unwrap_or("KEYWORD")),
        }
    }
}

/// Map a word to its keyword token kind (case-insensitive, except `a`).
pub fn keyword_from_str(s: &str) -> Option<TokenKind> {
    match s.to_ascii_uppercase().as_str() {
        "SELECT" => Some(TokenKind::KwSelect),
        "CONSTRUCT" => Some(TokenKind::KwConstruct),
        "ASK" => Some(TokenKind::KwAsk),
        "DESCRIBE" => Some(TokenKind::KwDescribe),
        "WHERE" => Some(TokenKind::KwWhere),
        "FILTER" => Some(TokenKind::KwFilter),
        "OPTIONAL" => Some(TokenKind::KwOptional),
        "UNION" => Some(TokenKind::KwUnion),
        "DISTINCT" => Some(TokenKind::KwDistinct),
        "LIMIT" => Some(TokenKind::KwLimit),
        "OFFSET" => Some(TokenKind::KwOffset),
        "ORDER" => Some(TokenKind::KwOrder),
        "BY" => Some(TokenKind::KwBy),
        "ASC" => Some(TokenKind::KwAsc),
        "DESC" => Some(TokenKind::KwDesc),
        "PREFIX" => Some(TokenKind::KwPrefix),
        "TRUE" => Some(TokenKind::KwTrue),
        "FALSE" => Some(TokenKind::KwFalse),
        "BOUND" => Some(TokenKind::KwBound),
        "ISIRI" => Some(TokenKind::KwIsIri),
        "ISURI" => Some(TokenKind::KwIsUri),
        "ISBLANK" => Some(TokenKind::KwIsBlank),
        "ISLITERAL" => Some(TokenKind::KwIsLiteral),
        // `a` is the rdf:type shorthand and is case-insensitive on input
        "A" => Some(TokenKind::KwA),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_lookup_case_insensitive() {
        assert_eq!(keyword_from_str("SELECT"), Some(TokenKind::KwSelect));
        assert_eq!(keyword_from_str("select"), Some(TokenKind::KwSelect));
        assert_eq!(keyword_from_str("SeLeCt"), Some(TokenKind::KwSelect));
        assert_eq!(keyword_from_str("a"), Some(TokenKind::KwA));
        assert_eq!(keyword_from_str("A"), Some(TokenKind::KwA));
        assert_eq!(keyword_from_str("notakeyword"), None);
    }

    #[test]
    fn test_token_display() {
        assert_eq!(
            TokenKind::Iri(Arc::from("http://example.org/")).to_string(),
            "<http://example.org/>"
        );
        assert_eq!(TokenKind::Var(Arc::from("name")).to_string(), "?name");
        assert_eq!(TokenKind::KwSelect.to_string(), "SELECT");
        assert_eq!(TokenKind::Le.to_string(), "<=");
    }

    #[test]
    fn test_is_keyword() {
        assert!(TokenKind::KwWhere.is_keyword());
        assert!(TokenKind::KwA.is_keyword());
        assert!(!TokenKind::Var(Arc::from("x")).is_keyword());
        assert!(!TokenKind::LBrace.is_keyword());
    }
}
