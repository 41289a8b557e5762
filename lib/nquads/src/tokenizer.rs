//! Splits a quad document into a flat sequence of RDF terms.
//!
//! The tokenizer only knows about terms: IRIs (`<...>`), blank nodes (`_:id`) and literals
//! (`"..."` with an optional `@lang` or `^^<datatype>` suffix). Statement terminators (`.`),
//! whitespace and `#` comments are skipped. Grouping the terms into quads is left to the
//! [`QuadSetBuilder`](crate::QuadSetBuilder).

use crate::{Location, SyntaxError, SyntaxErrorKind};
use quadlens_model::{LiteralToken, Token};
use winnow::combinator::{alt, delimited, preceded, repeat};
use winnow::stream::Location as _;
use winnow::token::{any, none_of, take_till, take_while};
use winnow::{LocatingSlice, ModalResult, Parser};

/// Input type of the term scanners. Tracks the byte offset of every term.
type Input<'a> = LocatingSlice<&'a str>;

/// A value together with the location it was read from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Spanned<T> {
    pub value: T,
    pub location: Location,
}

/// Tokenizes `input` into the sequence of terms it contains.
///
/// Fails on the first malformed term; no partial result is returned. A `#` outside a term
/// starts a comment that runs to the end of the line, so terms after it on the same line
/// are not returned.
pub fn tokenize(input: &str) -> Result<Vec<Token>, SyntaxError> {
    Ok(Tokenizer::new(input)
        .spanned()?
        .into_iter()
        .map(|token| token.value)
        .collect())
}

/// Tokenizer over a single quad document.
pub struct Tokenizer<'a> {
    source: &'a str,
    lines: LineIndex,
}

impl<'a> Tokenizer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            lines: LineIndex::new(source),
        }
    }

    /// Tokenizes the entire input, keeping the location of every term.
    ///
    /// Errors point at the first character of the term that could not be read.
    pub fn spanned(self) -> Result<Vec<Spanned<Token>>, SyntaxError> {
        let mut tokens = Vec::new();
        let mut input = LocatingSlice::new(self.source);

        loop {
            skip_separators(&mut input);
            if input.is_empty() {
                break;
            }

            let location = self.lines.locate(self.source, input.current_token_start());
            let value =
                next_token(&mut input).map_err(|kind| SyntaxError::new(kind, location))?;
            tokens.push(Spanned { value, location });
        }

        tracing::debug!(tokens = tokens.len(), "Tokenized quad document");
        Ok(tokens)
    }
}

/// Skips everything that cannot start a term: whitespace, `.`, comments and stray characters.
fn skip_separators(input: &mut Input<'_>) {
    loop {
        let _: ModalResult<&str> =
            take_while(0.., |c: char| !matches!(c, '<' | '"' | '_' | '#')).parse_next(input);

        if input.starts_with('#') {
            let _: ModalResult<&str> = take_till(0.., '\n').parse_next(input);
        } else if input.starts_with('_') && !input.starts_with("_:") {
            let _: ModalResult<char> = any.parse_next(input);
        } else {
            break;
        }
    }
}

fn next_token(input: &mut Input<'_>) -> Result<Token, SyntaxErrorKind> {
    if input.starts_with('<') {
        iri(input).map(Token::Iri)
    } else if input.starts_with('"') {
        literal(input).map(Token::Literal)
    } else {
        blank_node(input).map(Token::Blank)
    }
}

/// Reads `<...>`. The content is kept verbatim; a `\` keeps the next character from closing
/// the IRI, but neither may be a line break.
fn iri(input: &mut Input<'_>) -> Result<String, SyntaxErrorKind> {
    let content: ModalResult<&str> = delimited('<', iri_content, '>').parse_next(input);
    content
        .map(str::to_owned)
        .map_err(|_| SyntaxErrorKind::UnterminatedIri)
}

fn iri_content<'a>(input: &mut Input<'a>) -> ModalResult<&'a str> {
    repeat::<_, _, (), _, _>(
        0..,
        alt((
            take_while(1.., |c: char| !matches!(c, '>' | '\\' | '\n')).void(),
            ('\\', none_of('\n')).void(),
        )),
    )
    .take()
    .parse_next(input)
}

fn blank_node(input: &mut Input<'_>) -> Result<String, SyntaxErrorKind> {
    let id: ModalResult<&str> =
        preceded("_:", take_while(1.., |c: char| !c.is_whitespace())).parse_next(input);
    id.map(str::to_owned)
        .map_err(|_| SyntaxErrorKind::EmptyBlankNode)
}

/// Reads a literal including its language tag or datatype.
fn literal(input: &mut Input<'_>) -> Result<LiteralToken, SyntaxErrorKind> {
    let _: ModalResult<char> = '"'.parse_next(input);
    let mut lexical = String::new();
    loop {
        let chunk: ModalResult<&str> =
            take_while(0.., |c: char| c != '"' && c != '\\').parse_next(input);
        lexical.push_str(chunk.unwrap_or_default());

        let next: ModalResult<char> = any.parse_next(input);
        match next {
            Ok('"') => break,
            Ok(_) => lexical.push(escape(input)?),
            Err(_) => return Err(SyntaxErrorKind::UnterminatedLiteral),
        }
    }

    let mut literal = LiteralToken::simple(lexical);
    if input.starts_with('@') {
        let language: ModalResult<&str> = preceded(
            '@',
            take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == '-'),
        )
        .parse_next(input);
        let language = language.map_err(|_| SyntaxErrorKind::UnterminatedLanguageTag)?;
        if input.starts_with("^^") {
            return Err(SyntaxErrorKind::LanguageAndDatatype);
        }
        literal.language = Some(language.to_owned());
    } else if input.starts_with("^^") {
        let _: ModalResult<&str> = "^^".parse_next(input);
        if !input.starts_with('<') {
            return Err(SyntaxErrorKind::DatatypeWithoutIri);
        }
        literal.datatype = Some(iri(input)?);
    }
    Ok(literal)
}

/// Decodes the escape sequence following a `\` inside a literal.
fn escape(input: &mut Input<'_>) -> Result<char, SyntaxErrorKind> {
    let next: ModalResult<char> = any.parse_next(input);
    let Ok(c) = next else {
        return Err(SyntaxErrorKind::UnterminatedLiteral);
    };
    match c {
        '"' => Ok('"'),
        '\'' => Ok('\''),
        '\\' => Ok('\\'),
        't' => Ok('\t'),
        'b' => Ok('\u{8}'),
        'n' => Ok('\n'),
        'r' => Ok('\r'),
        'f' => Ok('\u{c}'),
        'u' | 'U' => {
            let len = if c == 'u' { 4 } else { 8 };
            let digits: ModalResult<&str> =
                take_while(0..=len, |digit: char| digit.is_ascii_hexdigit()).parse_next(input);
            let digits = digits.unwrap_or_default();
            Some(digits)
                .filter(|digits| digits.len() == len)
                .and_then(|digits| u32::from_str_radix(digits, 16).ok())
                .and_then(char::from_u32)
                .ok_or_else(|| SyntaxErrorKind::InvalidEscape(format!("\\{c}{digits}")))
        }
        other => Err(SyntaxErrorKind::InvalidEscape(format!("\\{other}"))),
    }
}

/// Maps byte offsets to lines and columns.
struct LineIndex {
    /// Byte offset of the first character of every line.
    starts: Vec<usize>,
}

impl LineIndex {
    fn new(source: &str) -> Self {
        let starts = std::iter::once(Location::START.offset)
            .chain(source.match_indices('\n').map(|(offset, _)| offset + 1))
            .collect();
        Self { starts }
    }

    fn locate(&self, source: &str, offset: usize) -> Location {
        let line = self.starts.partition_point(|start| *start <= offset);
        let line_start = self
            .starts
            .get(line.saturating_sub(1))
            .copied()
            .unwrap_or(Location::START.offset);
        let column = source
            .get(line_start..offset)
            .map_or(0, |prefix| prefix.chars().count());
        Location {
            offset,
            line: line.max(Location::START.line),
            column: column + Location::START.column,
        }
    }
}
