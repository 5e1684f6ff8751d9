/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// Tokenization of CSS3 source text, recognizing the LESS and SCSS syntax
// extensions in the same character stream.
// http://dev.w3.org/csswg/css3-syntax/#tokenization

use std::borrow::Cow;
use std::cell::Cell;

use crate::keywords::{at_keyword_kind, is_unit_prefix, UNIT_CANDIDATES};
use crate::tokens::{Dialect, Span, Token, TokenKind};

const NEWLINES: &[char] = &['\n', '\r', '\x0C'];

/// The scanner. Bound to one source buffer and one dialect for its whole
/// lifetime; holds only a byte cursor into the borrowed input.
#[derive(Clone)]
pub struct Tokenizer<'a> {
    input: &'a str,

    /// Counted in bytes, not code points. From 0.
    position: usize,

    dialect: Dialect,

    /// Cache for `source_location()`
    last_known_line_break: Cell<(usize, usize)>,
}

impl<'a> Tokenizer<'a> {
    /// Create a scanner over `input` in the given dialect.
    #[inline]
    pub fn new(input: &'a str, dialect: Dialect) -> Tokenizer<'a> {
        Tokenizer {
            input,
            position: 0,
            dialect,
            last_known_line_break: Cell::new((1, 0)),
        }
    }

    /// The dialect this scanner was created with.
    #[inline]
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Produce the next token, or `None` at end of input.
    ///
    /// Each call consumes at least one character; the returned token's span
    /// covers exactly the consumed characters, so concatenating the spans of
    /// the whole stream reconstructs the input.
    pub fn next_token(&mut self) -> Option<Token> {
        let first = self.next_byte()?;
        let start = self.position;
        let kind = consume_token(self, first);
        debug_assert!(self.position > start);
        Some(Token {
            kind,
            span: Span {
                start,
                end: self.position,
            },
            channel: kind.channel(),
        })
    }

    /// The current cursor position, usable with [`reset`](Self::reset) to
    /// rewind (including back to the beginning of the input).
    #[inline]
    pub fn position(&self) -> SourcePosition {
        SourcePosition(self.position)
    }

    /// Rewind (or fast-forward) the cursor to a previously obtained
    /// position.
    #[inline]
    pub fn reset(&mut self, new_position: SourcePosition) {
        self.position = new_position.0;
    }

    /// The input slice between `start_pos` and the current cursor.
    #[inline]
    pub fn slice_from(&self, start_pos: SourcePosition) -> &'a str {
        &self.input[start_pos.0..self.position]
    }

    /// Line and column of the current cursor position.
    #[inline]
    pub fn current_source_location(&self) -> SourceLocation {
        let position = self.position();
        self.source_location(position)
    }

    /// Line and column of the given position, computed lazily from the last
    /// known line break.
    pub fn source_location(&self, position: SourcePosition) -> SourceLocation {
        let target = position.0;
        let mut line_number;
        let mut position;
        let (last_known_line_number, position_after_last_known_newline) =
            self.last_known_line_break.get();
        if target >= position_after_last_known_newline {
            position = position_after_last_known_newline;
            line_number = last_known_line_number;
        } else {
            position = 0;
            line_number = 1;
        }
        let mut source = &self.input[position..target];
        while let Some(newline_position) = source.find(NEWLINES) {
            let offset = newline_position
                + if source[newline_position..].starts_with("\r\n") {
                    2
                } else {
                    1
                };
            source = &source[offset..];
            position += offset;
            line_number += 1;
        }
        debug_assert!(position <= target);
        self.last_known_line_break.set((line_number, position));
        SourceLocation {
            line: line_number,
            // `target == position` at the beginning of a line, so add 1 so
            // that column numbers start at 1.
            column: target - position + 1,
        }
    }

    #[inline]
    fn next_byte(&self) -> Option<u8> {
        self.input.as_bytes().get(self.position).copied()
    }

    // If false, `tokenizer.consume_char()` will not advance.
    #[inline]
    fn is_eof(&self) -> bool {
        !self.has_at_least(0)
    }

    // If true, the input has at least `n` bytes left *after* the current
    // one. That is, `tokenizer.byte_at(n)` will not panic.
    #[inline]
    fn has_at_least(&self, n: usize) -> bool {
        self.position + n < self.input.len()
    }

    #[inline]
    fn byte_at(&self, offset: usize) -> u8 {
        self.input.as_bytes()[self.position + offset]
    }

    #[inline]
    fn advance(&mut self, n: usize) {
        self.position += n;
    }

    #[inline]
    fn has_newline_at(&self, offset: usize) -> bool {
        self.position + offset < self.input.len()
            && matches!(self.byte_at(offset), b'\n' | b'\r' | b'\x0C')
    }

    #[inline]
    fn consume_char(&mut self) -> char {
        match self.input[self.position..].chars().next() {
            Some(c) => {
                self.position += c.len_utf8();
                c
            }
            None => '\u{FFFD}',
        }
    }

    #[inline]
    fn starts_with(&self, needle: &str) -> bool {
        self.input[self.position..].starts_with(needle)
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

/// A position in the input, usable with [`Tokenizer::reset`].
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy)]
pub struct SourcePosition(usize);

/// The line and column number for a given position within the input.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct SourceLocation {
    /// The line number, starting at 1 for the first line.
    pub line: usize,

    /// The column number within a line, starting at 1 for the first
    /// character of the line.
    pub column: usize,
}

/// Top-level dispatch: `first` is the byte at the cursor, which is known to
/// be inside the input. Every arm consumes at least one character.
fn consume_token(tokenizer: &mut Tokenizer<'_>, first: u8) -> TokenKind {
    match first {
        b' ' | b'\t' => {
            tokenizer.advance(1);
            while let Some(b' ' | b'\t') = tokenizer.next_byte() {
                tokenizer.advance(1);
            }
            TokenKind::WhiteSpace
        }
        b'\n' | b'\r' | b'\x0C' => {
            tokenizer.advance(1);
            while let Some(b'\n' | b'\r' | b'\x0C') = tokenizer.next_byte() {
                tokenizer.advance(1);
            }
            TokenKind::NewLine
        }
        b'"' => consume_string(tokenizer, false),
        b'\'' => consume_string(tokenizer, true),
        b'`' => {
            if tokenizer.dialect() == Dialect::Less {
                consume_js_string(tokenizer)
            } else {
                tokenizer.advance(1);
                TokenKind::Error
            }
        }
        b'#' => {
            tokenizer.advance(1);
            if continues_name(tokenizer) {
                consume_name(tokenizer);
                TokenKind::Hash
            } else {
                TokenKind::HashSymbol
            }
        }
        b'$' => {
            if tokenizer.starts_with("$=") {
                tokenizer.advance(2);
                TokenKind::EndsWith
            } else {
                tokenizer.advance(1);
                if tokenizer.dialect() == Dialect::Scss && is_ident_start(tokenizer) {
                    consume_name(tokenizer);
                    TokenKind::SassVar
                } else {
                    TokenKind::Error
                }
            }
        }
        b'%' => {
            tokenizer.advance(1);
            if tokenizer.dialect() == Dialect::Scss && is_ident_start(tokenizer) {
                consume_name(tokenizer);
                TokenKind::SassExtendOnlySelector
            } else {
                TokenKind::Percent
            }
        }
        b'(' => {
            tokenizer.advance(1);
            TokenKind::LParen
        }
        b')' => {
            tokenizer.advance(1);
            TokenKind::RParen
        }
        b'*' => {
            if tokenizer.starts_with("*=") {
                tokenizer.advance(2);
                TokenKind::Contains
            } else {
                tokenizer.advance(1);
                TokenKind::Star
            }
        }
        b'+' => {
            tokenizer.advance(1);
            TokenKind::Plus
        }
        b',' => {
            tokenizer.advance(1);
            TokenKind::Comma
        }
        b'-' => consume_minus(tokenizer),
        b'.' => {
            if tokenizer.has_at_least(1) && tokenizer.byte_at(1).is_ascii_digit() {
                consume_numeric(tokenizer)
            } else if tokenizer.starts_with("...") {
                tokenizer.advance(3);
                TokenKind::Dots
            } else {
                tokenizer.advance(1);
                TokenKind::Dot
            }
        }
        b'/' => {
            if tokenizer.starts_with("/*") {
                consume_comment(tokenizer)
            } else if tokenizer.starts_with("//") && tokenizer.dialect().is_preprocessor() {
                consume_line_comment(tokenizer)
            } else {
                tokenizer.advance(1);
                TokenKind::Solidus
            }
        }
        b'0'..=b'9' => consume_numeric(tokenizer),
        b':' => {
            if tokenizer.starts_with("::") {
                tokenizer.advance(2);
                TokenKind::DoubleColon
            } else {
                tokenizer.advance(1);
                TokenKind::Colon
            }
        }
        b';' => {
            tokenizer.advance(1);
            TokenKind::Semicolon
        }
        b'<' => {
            if tokenizer.starts_with("<!--") {
                tokenizer.advance(4);
                TokenKind::Cdo
            } else if tokenizer.starts_with("<=") {
                tokenizer.advance(2);
                TokenKind::LessOrEq
            } else {
                tokenizer.advance(1);
                TokenKind::LessThan
            }
        }
        b'=' => {
            if tokenizer.starts_with("==") {
                tokenizer.advance(2);
                TokenKind::CpEq
            } else if tokenizer.starts_with("=>") {
                tokenizer.advance(2);
                TokenKind::GreaterOrEq
            } else if tokenizer.starts_with("=<") {
                tokenizer.advance(2);
                TokenKind::LessOrEq
            } else {
                tokenizer.advance(1);
                TokenKind::Equals
            }
        }
        b'>' => {
            if tokenizer.starts_with(">=") {
                tokenizer.advance(2);
                TokenKind::GreaterOrEq
            } else {
                tokenizer.advance(1);
                TokenKind::Greater
            }
        }
        b'!' => {
            if tokenizer.starts_with("!=") {
                tokenizer.advance(2);
                TokenKind::CpNotEq
            } else {
                consume_bang(tokenizer)
            }
        }
        b'@' => consume_at_keyword(tokenizer),
        b'&' => {
            tokenizer.advance(1);
            while tokenizer.next_byte() == Some(b'-') {
                tokenizer.advance(1);
            }
            TokenKind::LessAnd
        }
        b'a'..=b'z' | b'A'..=b'Z' | b'_' => consume_ident_like(tokenizer),
        b'[' => {
            tokenizer.advance(1);
            TokenKind::LBracket
        }
        b']' => {
            tokenizer.advance(1);
            TokenKind::RBracket
        }
        b'\\' => {
            if !tokenizer.has_newline_at(1) {
                consume_ident_like(tokenizer)
            } else {
                tokenizer.advance(1);
                TokenKind::Error
            }
        }
        b'^' => {
            if tokenizer.starts_with("^=") {
                tokenizer.advance(2);
                TokenKind::BeginsWith
            } else {
                tokenizer.advance(1);
                TokenKind::Error
            }
        }
        b'{' => {
            tokenizer.advance(1);
            TokenKind::LBrace
        }
        b'|' => {
            if tokenizer.starts_with("|=") {
                tokenizer.advance(2);
                TokenKind::DashMatch
            } else {
                tokenizer.advance(1);
                TokenKind::Pipe
            }
        }
        b'}' => {
            tokenizer.advance(1);
            TokenKind::RBrace
        }
        b'~' => {
            if tokenizer.starts_with("~=") {
                tokenizer.advance(2);
                TokenKind::Includes
            } else {
                tokenizer.advance(1);
                TokenKind::Tilde
            }
        }
        _ => {
            if first >= 0x80 {
                // Non-ASCII starts an identifier.
                consume_ident_like(tokenizer)
            } else {
                tokenizer.consume_char();
                TokenKind::Error
            }
        }
    }
}

/// `-` opens four different tokens: `-->`, `--ident`, `-ident`, and the
/// bare minus. Resolved by greedy lookahead, longest first.
fn consume_minus(tokenizer: &mut Tokenizer<'_>) -> TokenKind {
    if tokenizer.starts_with("-->") {
        tokenizer.advance(3);
        return TokenKind::Cdc;
    }
    if tokenizer.has_at_least(1) && tokenizer.byte_at(1) == b'-' {
        let start = Tokenizer::position(tokenizer);
        tokenizer.advance(2);
        if is_ident_start(tokenizer) {
            consume_name(tokenizer);
            return TokenKind::Variable;
        }
        // Two minuses after all.
        tokenizer.reset(start);
    }
    if is_ident_start(tokenizer) {
        return consume_ident_like(tokenizer);
    }
    tokenizer.advance(1);
    TokenKind::Minus
}

#[inline]
fn is_ident_start(tokenizer: &Tokenizer<'_>) -> bool {
    match tokenizer.next_byte() {
        None => false,
        Some(b) => match b {
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => true,
            // `--` is claimed by the variable rule before this is asked, so
            // a second `-` does not open an identifier here.
            b'-' => {
                tokenizer.has_at_least(1)
                    && match tokenizer.byte_at(1) {
                        b'a'..=b'z' | b'A'..=b'Z' | b'_' => true,
                        b'\\' => !tokenizer.has_newline_at(2),
                        b => b >= 0x80,
                    }
            }
            b'\\' => !tokenizer.has_newline_at(1),
            b => b >= 0x80,
        },
    }
}

/// Whether the character at the cursor can continue an identifier (or start
/// a hash name).
#[inline]
fn continues_name(tokenizer: &Tokenizer<'_>) -> bool {
    match tokenizer.next_byte() {
        None => false,
        Some(b) => match b {
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_' | b'-' => true,
            b'\\' => !tokenizer.has_newline_at(1),
            b => b >= 0x80,
        },
    }
}

/// Consume an identifier and classify it. The one special case is a name
/// spelling `url` (possibly with escapes) directly followed by `(`, which
/// opens the whole-`url(...)` token.
fn consume_ident_like(tokenizer: &mut Tokenizer<'_>) -> TokenKind {
    let name = consume_name(tokenizer);
    if tokenizer.next_byte() == Some(b'(') && name.eq_ignore_ascii_case("url") {
        consume_uri(tokenizer)
    } else {
        TokenKind::Ident
    }
}

/// Consume `nmchar*` from the cursor and return the escape-decoded name.
/// Borrows from the input when no escape decoding was needed.
fn consume_name<'a>(tokenizer: &mut Tokenizer<'a>) -> Cow<'a, str> {
    let start_pos = Tokenizer::position(tokenizer);
    let mut value: String;
    loop {
        if tokenizer.is_eof() {
            return Cow::Borrowed(tokenizer.slice_from(start_pos));
        }
        match tokenizer.byte_at(0) {
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_' | b'-' => tokenizer.advance(1),
            b'\\' => {
                if tokenizer.has_newline_at(1) {
                    return Cow::Borrowed(tokenizer.slice_from(start_pos));
                }
                value = tokenizer.slice_from(start_pos).to_owned();
                break;
            }
            b if b >= 0x80 => {
                tokenizer.consume_char();
            }
            _ => return Cow::Borrowed(tokenizer.slice_from(start_pos)),
        }
    }

    while !tokenizer.is_eof() {
        let b = tokenizer.byte_at(0);
        match b {
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_' | b'-' => {
                tokenizer.advance(1);
                value.push(b as char);
            }
            b'\\' => {
                if tokenizer.has_newline_at(1) {
                    break;
                }
                tokenizer.advance(1);
                value.push(consume_escape(tokenizer));
            }
            b if b >= 0x80 => value.push(tokenizer.consume_char()),
            _ => break,
        }
    }
    Cow::Owned(value)
}

// Assumes that the U+005C REVERSE SOLIDUS (\) has already been consumed and
// that the next character has already been verified to not be a newline.
fn consume_escape(tokenizer: &mut Tokenizer<'_>) -> char {
    if tokenizer.is_eof() {
        return '\u{FFFD}'; // Escaped EOF
    }
    let c = tokenizer.consume_char();
    match c.to_digit(16) {
        Some(first_digit) => {
            let mut value = first_digit;
            let mut digits = 1;
            while digits < 6 {
                match tokenizer.next_byte().and_then(hex_digit) {
                    Some(digit) => {
                        value = value * 16 + digit;
                        tokenizer.advance(1);
                        digits += 1;
                    }
                    None => break,
                }
            }
            // One whitespace character after the digits is part of the
            // escape, with \r\n counting as one.
            match tokenizer.next_byte() {
                Some(b' ' | b'\t' | b'\n' | b'\x0C') => tokenizer.advance(1),
                Some(b'\r') => {
                    tokenizer.advance(1);
                    if tokenizer.next_byte() == Some(b'\n') {
                        tokenizer.advance(1);
                    }
                }
                _ => {}
            }
            if value == 0 {
                '\u{FFFD}'
            } else {
                char::from_u32(value).unwrap_or('\u{FFFD}')
            }
        }
        None => c,
    }
}

#[inline]
fn hex_digit(b: u8) -> Option<u32> {
    (b as char).to_digit(16)
}

/// Match one logical keyword letter: the literal ASCII letter in either
/// case, or its CSS numeric escape (`\` + up to four leading zeros + the
/// two-hex-digit code of either case, optionally followed by one whitespace
/// character). On failure the cursor is left where it was.
fn eat_keyword_letter(tokenizer: &mut Tokenizer<'_>, lower: u8) -> bool {
    debug_assert!(lower.is_ascii_lowercase());
    match tokenizer.next_byte() {
        Some(b) if (b | 0x20) == lower => {
            tokenizer.advance(1);
            true
        }
        Some(b'\\') => eat_escaped_letter(tokenizer, lower),
        _ => false,
    }
}

fn eat_escaped_letter(tokenizer: &mut Tokenizer<'_>, lower: u8) -> bool {
    let start = Tokenizer::position(tokenizer);
    tokenizer.advance(1); // the backslash
    let mut zeros = 0;
    while zeros < 4 && tokenizer.next_byte() == Some(b'0') {
        tokenizer.advance(1);
        zeros += 1;
    }
    let mut value = 0u32;
    for _ in 0..2 {
        match tokenizer.next_byte().and_then(hex_digit) {
            Some(digit) => {
                value = value * 16 + digit;
                tokenizer.advance(1);
            }
            None => {
                tokenizer.reset(start);
                return false;
            }
        }
    }
    // A further hex digit would denote a different code point.
    if tokenizer.next_byte().and_then(hex_digit).is_some() {
        tokenizer.reset(start);
        return false;
    }
    if (value | 0x20) != u32::from(lower) {
        tokenizer.reset(start);
        return false;
    }
    match tokenizer.next_byte() {
        Some(b' ' | b'\t' | b'\n' | b'\x0C') => tokenizer.advance(1),
        Some(b'\r') => {
            tokenizer.advance(1);
            if tokenizer.next_byte() == Some(b'\n') {
                tokenizer.advance(1);
            }
        }
        _ => {}
    }
    true
}

/// Consume the numeric literal at the cursor, then disambiguate the suffix:
/// `%`, a known unit (each candidate tried speculatively in declared order,
/// rolling back to the end of the digits between attempts), a generic
/// identifier suffix (`Dimension`), or nothing (`Number`).
fn consume_numeric(tokenizer: &mut Tokenizer<'_>) -> TokenKind {
    // digit+ ('.' digit+)? | '.' digit+ — signs and exponents are separate
    // tokens in this grammar.
    if tokenizer.next_byte() == Some(b'.') {
        tokenizer.advance(1);
        consume_digits(tokenizer);
    } else {
        consume_digits(tokenizer);
        if tokenizer.next_byte() == Some(b'.')
            && tokenizer.has_at_least(1)
            && tokenizer.byte_at(1).is_ascii_digit()
        {
            tokenizer.advance(1);
            consume_digits(tokenizer);
        }
    }

    if tokenizer.next_byte() == Some(b'%') {
        tokenizer.advance(1);
        return TokenKind::Percentage;
    }

    let after_digits = Tokenizer::position(tokenizer);
    for &(spelling, kind) in UNIT_CANDIDATES {
        if eat_unit(tokenizer, spelling) {
            return kind;
        }
        tokenizer.reset(after_digits);
    }

    if is_ident_start(tokenizer) {
        let name = consume_name(tokenizer);
        if is_unit_prefix(&name) {
            // A unit candidate consumed exactly these letters and failed
            // partway; the number stands alone and the letters are re-lexed
            // from right after the digits.
            tokenizer.reset(after_digits);
            return TokenKind::Number;
        }
        return TokenKind::Dimension;
    }
    TokenKind::Number
}

fn consume_digits(tokenizer: &mut Tokenizer<'_>) {
    while let Some(b'0'..=b'9') = tokenizer.next_byte() {
        tokenizer.advance(1);
    }
}

/// Attempt one unit spelling, letter by letter with escapes allowed, and
/// require the unit not to be the prefix of a longer identifier.
fn eat_unit(tokenizer: &mut Tokenizer<'_>, spelling: &[u8]) -> bool {
    for &letter in spelling {
        if !eat_keyword_letter(tokenizer, letter) {
            return false;
        }
    }
    !continues_name(tokenizer)
}

/// `!important` and the SCSS `!default` / `!optional` / `!global` flags.
/// Whitespace and complete block comments may sit between the `!` and the
/// word. Anything else rewinds to a bare `Exclamation`.
fn consume_bang(tokenizer: &mut Tokenizer<'_>) -> TokenKind {
    let start = Tokenizer::position(tokenizer);
    tokenizer.advance(1);
    loop {
        match tokenizer.next_byte() {
            Some(b' ' | b'\t' | b'\n' | b'\r' | b'\x0C') => tokenizer.advance(1),
            Some(b'/') if tokenizer.starts_with("/*") => {
                match tokenizer.input[tokenizer.position + 2..].find("*/") {
                    Some(offset) => tokenizer.advance(2 + offset + 2),
                    None => break,
                }
            }
            _ => break,
        }
    }
    if is_ident_start(tokenizer) {
        let word = consume_name(tokenizer);
        let flag = match_ignore_ascii_case! { &word,
            "important" => Some(TokenKind::ImportantSym),
            "default" => Some(TokenKind::SassDefault),
            "optional" => Some(TokenKind::SassOptional),
            "global" => Some(TokenKind::SassGlobal),
            _ => None,
        };
        match flag {
            Some(TokenKind::ImportantSym) => return TokenKind::ImportantSym,
            Some(kind) if tokenizer.dialect() == Dialect::Scss => return kind,
            _ => {}
        }
    }
    tokenizer.reset(start);
    tokenizer.advance(1);
    TokenKind::Exclamation
}

/// `@` followed by a name. The decoded name is looked up in the fixed
/// vocabulary (dialect-gated for the SCSS directives); unknown names fall
/// back to the open-ended `AtIdent`.
fn consume_at_keyword(tokenizer: &mut Tokenizer<'_>) -> TokenKind {
    tokenizer.advance(1);
    if !is_ident_start(tokenizer) {
        return TokenKind::Error;
    }
    let name = consume_name(tokenizer);
    if tokenizer.dialect() == Dialect::Less
        && name.eq_ignore_ascii_case("rest")
        && tokenizer.starts_with("...")
    {
        tokenizer.advance(3);
        return TokenKind::LessRest;
    }
    at_keyword_kind(&name, tokenizer.dialect())
}

/// Consume a quoted string. The token ends at the matching quote; a raw
/// newline or end of input makes it a `BadString` (the newline itself stays
/// outside the token).
fn consume_string(tokenizer: &mut Tokenizer<'_>, single_quote: bool) -> TokenKind {
    tokenizer.advance(1); // the opening quote
    while let Some(b) = tokenizer.next_byte() {
        match b {
            b'"' if !single_quote => {
                tokenizer.advance(1);
                return TokenKind::String;
            }
            b'\'' if single_quote => {
                tokenizer.advance(1);
                return TokenKind::String;
            }
            b'\n' | b'\r' | b'\x0C' => return TokenKind::BadString,
            b'\\' => {
                tokenizer.advance(1);
                match tokenizer.next_byte() {
                    // Escaped newline
                    Some(b'\n' | b'\x0C') => tokenizer.advance(1),
                    Some(b'\r') => {
                        tokenizer.advance(1);
                        if tokenizer.next_byte() == Some(b'\n') {
                            tokenizer.advance(1);
                        }
                    }
                    Some(_) => {
                        tokenizer.consume_char();
                    }
                    // Escaped EOF
                    None => {}
                }
            }
            _ => {
                tokenizer.consume_char();
            }
        }
    }
    TokenKind::BadString
}

/// A LESS back-quoted JavaScript string: raw up to the closing back-quote.
fn consume_js_string(tokenizer: &mut Tokenizer<'_>) -> TokenKind {
    tokenizer.advance(1);
    match tokenizer.input[tokenizer.position..].find('`') {
        Some(offset) => {
            tokenizer.advance(offset + 1);
            TokenKind::JsString
        }
        None => {
            tokenizer.position = tokenizer.input.len();
            TokenKind::BadJsString
        }
    }
}

fn consume_comment(tokenizer: &mut Tokenizer<'_>) -> TokenKind {
    tokenizer.advance(2); // consume "/*"
    match tokenizer.input[tokenizer.position..].find("*/") {
        Some(offset) => tokenizer.advance(offset + 2),
        None => tokenizer.position = tokenizer.input.len(),
    }
    TokenKind::Comment
}

fn consume_line_comment(tokenizer: &mut Tokenizer<'_>) -> TokenKind {
    tokenizer.advance(2); // consume "//"
    match tokenizer.input[tokenizer.position..].find(NEWLINES) {
        Some(offset) => tokenizer.advance(offset),
        None => tokenizer.position = tokenizer.input.len(),
    }
    TokenKind::LineComment
}

/// Consume the rest of a `url(...)` construct; the cursor is on the `(`.
fn consume_uri(tokenizer: &mut Tokenizer<'_>) -> TokenKind {
    tokenizer.advance(1); // consume "("
    consume_uri_whitespace(tokenizer);
    match tokenizer.next_byte() {
        None => TokenKind::BadUri,
        Some(b')') => {
            tokenizer.advance(1);
            TokenKind::Uri
        }
        Some(quote @ (b'"' | b'\'')) => {
            if consume_string(tokenizer, quote == b'\'') == TokenKind::BadString {
                return consume_bad_uri(tokenizer);
            }
            consume_uri_whitespace(tokenizer);
            match tokenizer.next_byte() {
                Some(b')') => {
                    tokenizer.advance(1);
                    TokenKind::Uri
                }
                None => TokenKind::BadUri,
                Some(_) => consume_bad_uri(tokenizer),
            }
        }
        Some(_) => consume_unquoted_uri(tokenizer),
    }
}

fn consume_uri_whitespace(tokenizer: &mut Tokenizer<'_>) {
    while let Some(b' ' | b'\t' | b'\n' | b'\r' | b'\x0C') = tokenizer.next_byte() {
        tokenizer.advance(1);
    }
}

fn consume_unquoted_uri(tokenizer: &mut Tokenizer<'_>) -> TokenKind {
    while let Some(b) = tokenizer.next_byte() {
        match b {
            b')' => {
                tokenizer.advance(1);
                return TokenKind::Uri;
            }
            // Whitespace may appear inside an unquoted URL.
            b' ' | b'\t' | b'\n' | b'\r' | b'\x0C' => tokenizer.advance(1),
            b'"' | b'\'' | b'(' => return consume_bad_uri(tokenizer),
            0x00..=0x08 | 0x0B | 0x0E..=0x1F | 0x7F => return consume_bad_uri(tokenizer),
            b'\\' => {
                if tokenizer.has_newline_at(1) {
                    return consume_bad_uri(tokenizer);
                }
                tokenizer.advance(1);
                if !tokenizer.is_eof() {
                    tokenizer.consume_char();
                }
            }
            _ => {
                tokenizer.consume_char();
            }
        }
    }
    TokenKind::BadUri
}

// Consume up to and including the closing `)`.
fn consume_bad_uri(tokenizer: &mut Tokenizer<'_>) -> TokenKind {
    while !tokenizer.is_eof() {
        match tokenizer.consume_char() {
            ')' => break,
            '\\' => {
                if !tokenizer.is_eof() {
                    tokenizer.consume_char(); // an escaped ')' does not close
                }
            }
            _ => {}
        }
    }
    TokenKind::BadUri
}
