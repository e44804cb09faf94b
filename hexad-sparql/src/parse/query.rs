//! Query-form parsing: prologue, dispatch, SELECT, CONSTRUCT, ASK,
//! DESCRIBE.

use crate::ast::{
    pattern_variables, AskQuery, ConstructQuery, DescribeQuery, Query, SelectQuery, TriplePattern,
    VarOrIri,
};
use crate::diag::{DiagCode, Diagnostic};
use crate::lex::TokenKind;

impl<'a> super::Parser<'a> {
    /// Parse a complete query: prologue, then one of the four forms.
    pub(super) fn parse_query(&mut self) -> Option<Query> {
        self.parse_prologue();

        let query = match self.stream.peek().kind {
            TokenKind::KwSelect => self.parse_select().map(Query::Select),
            TokenKind::KwConstruct => self.parse_construct().map(Query::Construct),
            TokenKind::KwAsk => self.parse_ask().map(Query::Ask),
            TokenKind::KwDescribe => self.parse_describe().map(Query::Describe),
            _ => {
                let span = self.stream.current_span();
                let found = self.stream.peek().kind.clone();
                self.stream.add_diagnostic(Diagnostic::new(
                    DiagCode::UnknownQueryForm,
                    format!(
                        "expected SELECT, CONSTRUCT, ASK, or DESCRIBE, found '{found}'"
                    ),
                    span,
                ));
                None
            }
        }?;

        if !self.stream.is_eof() {
            self.stream.error_at_current("expected end of query");
        }
        Some(query)
    }

    /// Parse leading PREFIX declarations into the parser's registry.
    fn parse_prologue(&mut self) {
        while self.stream.match_keyword(TokenKind::KwPrefix) {
            let prefix = match self.stream.consume_prefixed_name_ns() {
                Some((prefix, _)) => prefix,
                None => {
                    self.stream
                        .error_at_current("expected prefix declaration (e.g. 'foaf:')");
                    return;
                }
            };
            match self.stream.consume_iri() {
                Some((namespace, _)) => {
                    self.prefixes.register(prefix.as_ref(), namespace.as_ref());
                }
                None => {
                    self.stream
                        .error_at_current("expected namespace IRI after prefix");
                    return;
                }
            }
        }
    }

    /// `SELECT [DISTINCT] (varlist | '*') WHERE { patterns } modifiers`
    fn parse_select(&mut self) -> Option<SelectQuery> {
        self.stream.advance(); // SELECT

        let distinct = self.stream.match_keyword(TokenKind::KwDistinct);

        let explicit_vars = if self.stream.match_token(&TokenKind::Star) {
            None
        } else {
            let mut vars = Vec::new();
            while let Some((name, _)) = self.stream.consume_var() {
                if !vars.contains(&name) {
                    vars.push(name);
                }
            }
            if vars.is_empty() {
                self.stream
                    .error_at_current("expected '*' or variables after SELECT");
                return None;
            }
            Some(vars)
        };

        self.stream.match_keyword(TokenKind::KwWhere);
        let patterns = self.parse_braced_group()?;
        let modifiers = self.parse_modifiers();

        // `*` projects every variable appearing anywhere in the WHERE clause.
        let variables = explicit_vars.unwrap_or_else(|| pattern_variables(&patterns));

        Some(SelectQuery {
            variables,
            patterns,
            modifiers,
            distinct,
        })
    }

    /// `CONSTRUCT { template } WHERE { patterns } modifiers`
    fn parse_construct(&mut self) -> Option<ConstructQuery> {
        self.stream.advance(); // CONSTRUCT

        let template = self.parse_template()?;

        if !self.stream.match_keyword(TokenKind::KwWhere) {
            self.stream.error_at_current("expected WHERE after CONSTRUCT template");
            return None;
        }
        let patterns = self.parse_braced_group()?;
        let modifiers = self.parse_modifiers();

        Some(ConstructQuery {
            template,
            patterns,
            modifiers,
        })
    }

    /// Parse the CONSTRUCT template: a braced block of triple patterns.
    ///
    /// The template reuses the triple parser, so `a`, `;`/`,` lists, and
    /// typed literals all work; FILTER and friends are rejected.
    fn parse_template(&mut self) -> Option<Vec<TriplePattern>> {
        if !self.stream.match_token(&TokenKind::LBrace) {
            self.stream.error_at_current("expected '{' to open CONSTRUCT template");
            return None;
        }

        let mut patterns = Vec::new();
        while !self.stream.check(&TokenKind::RBrace) && !self.stream.is_eof() {
            if self.stream.check(&TokenKind::Dot) {
                self.stream.advance();
                continue;
            }
            if !self.stream.is_term_start() {
                self.stream.error_at_current("expected triple pattern in template");
                return None;
            }
            self.parse_triples_block(&mut patterns)?;
        }

        if !self.stream.match_token(&TokenKind::RBrace) {
            self.stream.error_at_current("expected '}' to close template");
            return None;
        }

        Some(
            patterns
                .into_iter()
                .filter_map(|p| match p {
                    crate::ast::Pattern::Triple(tp) => Some(tp),
                    _ => None,
                })
                .collect(),
        )
    }

    /// `ASK ['WHERE'] { patterns }`
    fn parse_ask(&mut self) -> Option<AskQuery> {
        self.stream.advance(); // ASK
        self.stream.match_keyword(TokenKind::KwWhere);
        let patterns = self.parse_braced_group()?;
        Some(AskQuery { patterns })
    }

    /// `DESCRIBE (var | iri)+ ['WHERE' { patterns }]`
    fn parse_describe(&mut self) -> Option<DescribeQuery> {
        self.stream.advance(); // DESCRIBE

        let mut resources = Vec::new();
        loop {
            if let Some((name, _)) = self.stream.consume_var() {
                resources.push(VarOrIri::Var(name));
            } else if matches!(
                self.stream.peek().kind,
                TokenKind::Iri(_) | TokenKind::PrefixedName { .. }
            ) {
                let iri = self.parse_iri()?;
                resources.push(VarOrIri::Iri(iri));
            } else {
                break;
            }
        }
        if resources.is_empty() {
            self.stream
                .error_at_current("expected variable or IRI after DESCRIBE");
            return None;
        }

        let patterns = if self.stream.match_keyword(TokenKind::KwWhere) {
            Some(self.parse_braced_group()?)
        } else if self.stream.check(&TokenKind::LBrace) {
            Some(self.parse_braced_group()?)
        } else {
            None
        };

        Some(DescribeQuery {
            resources,
            patterns,
        })
    }
}
