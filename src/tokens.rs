/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! The token data model: kinds, channels, spans.

/// Defines [`TokenKind`] together with its stable `description()` label.
///
/// The label is what diagnostics and the JSON test dumps print; for tokens
/// with a fixed spelling it is that spelling, otherwise a lowercase name.
macro_rules! token_kinds {
    ( $( $(#[$meta:meta])* $variant:ident => $label:expr, )+ ) => {
        /// The lexical class of one token.
        ///
        /// This is a closed vocabulary: the scanner classifies every input
        /// character into exactly one of these kinds. Kinds carry no values;
        /// the lexeme itself is recovered through [`Token::span`].
        #[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum TokenKind {
            $( $(#[$meta])* $variant, )+
        }

        impl TokenKind {
            /// A stable human-readable label for this kind.
            pub fn description(self) -> &'static str {
                match self {
                    $( TokenKind::$variant => $label, )+
                }
            }
        }
    };
}

token_kinds! {
    // Whitespace and comments
    /// A run of spaces and tabs.
    WhiteSpace => "whitespace",
    /// A run of newline characters (LF, CR, FF).
    NewLine => "newline",
    /// A `/* ... */` block comment, unterminated bodies run to end of input.
    Comment => "comment",
    /// A `// ...` line comment; only produced in LESS and SCSS dialects,
    /// always on [`Channel::Hidden`].
    LineComment => "line-comment",

    // Legacy HTML comment delimiters, delivered on their own channels.
    /// `<!--`
    Cdo => "<!--",
    /// `-->`
    Cdc => "-->",

    // Identifier family
    /// A CSS identifier.
    Ident => "ident",
    /// An `@ident` that is not part of the fixed at-rule vocabulary.
    /// This is also how LESS variables surface at the lexical level.
    AtIdent => "at-ident",
    /// A `--ident` custom property / variable name.
    Variable => "variable",
    /// A `$ident` SCSS variable.
    SassVar => "sass-var",
    /// A `%ident` SCSS extend-only selector placeholder.
    SassExtendOnlySelector => "sass-extend-only-selector",
    /// A `#name` hash (id selector or hex color).
    Hash => "hash",

    // Strings and URLs
    /// A single- or double-quoted string.
    String => "string",
    /// A string terminated by a raw newline or end of input.
    BadString => "bad-string",
    /// A LESS back-quoted JavaScript string.
    JsString => "js-string",
    /// An unterminated back-quoted string.
    BadJsString => "bad-js-string",
    /// A whole `url(...)` construct, quoted or unquoted.
    Uri => "uri",
    /// A `url(...)` with an illegal body or missing `)`.
    BadUri => "bad-uri",

    // Numbers and dimensions
    /// A numeric literal with no unit suffix.
    Number => "number",
    /// `<number>%`
    Percentage => "percentage",
    /// `px`, `pt`, `pc`, `cm`, `mm`, `in`
    Length => "length",
    /// `em`
    Ems => "ems",
    /// `ex`
    Exs => "exs",
    /// `rem`
    Rem => "rem",
    /// `deg`, `rad`, `grad`
    Angle => "angle",
    /// `s`, `ms`
    Time => "time",
    /// `hz`, `khz`
    Freq => "freq",
    /// `dpi`, `dpcm`
    Resolution => "resolution",
    /// A number with any other identifier suffix.
    Dimension => "dimension",

    /// `!important`, whitespace and comments allowed after the `!`.
    ImportantSym => "!important",

    // Fixed at-rule vocabulary
    /// `@charset`
    CharsetSym => "@charset",
    /// `@import`
    ImportSym => "@import",
    /// `@namespace`
    NamespaceSym => "@namespace",
    /// `@media`
    MediaSym => "@media",
    /// `@page`
    PageSym => "@page",
    /// `@font-face`
    FontFaceSym => "@font-face",
    /// `@counter-style`
    CounterStyleSym => "@counter-style",
    /// `@supports`
    SupportsSym => "@supports",
    /// `@layer`
    LayerSym => "@layer",
    /// `@container`
    ContainerSym => "@container",
    /// `@keyframes`, including vendor-prefixed spellings.
    KeyframesSym => "@keyframes",
    /// `@-moz-document`
    MozDocumentSym => "@-moz-document",

    // Page margin boxes
    /// `@top-left-corner`
    TopLeftCornerSym => "@top-left-corner",
    /// `@top-left`
    TopLeftSym => "@top-left",
    /// `@top-center`
    TopCenterSym => "@top-center",
    /// `@top-right`
    TopRightSym => "@top-right",
    /// `@top-right-corner`
    TopRightCornerSym => "@top-right-corner",
    /// `@bottom-left-corner`
    BottomLeftCornerSym => "@bottom-left-corner",
    /// `@bottom-left`
    BottomLeftSym => "@bottom-left",
    /// `@bottom-center`
    BottomCenterSym => "@bottom-center",
    /// `@bottom-right`
    BottomRightSym => "@bottom-right",
    /// `@bottom-right-corner`
    BottomRightCornerSym => "@bottom-right-corner",
    /// `@left-top`
    LeftTopSym => "@left-top",
    /// `@left-middle`
    LeftMiddleSym => "@left-middle",
    /// `@left-bottom`
    LeftBottomSym => "@left-bottom",
    /// `@right-top`
    RightTopSym => "@right-top",
    /// `@right-middle`
    RightMiddleSym => "@right-middle",
    /// `@right-bottom`
    RightBottomSym => "@right-bottom",

    // SCSS directives, recognized only in the SCSS dialect.
    /// `@mixin`
    SassMixin => "@mixin",
    /// `@include`
    SassInclude => "@include",
    /// `@extend`
    SassExtend => "@extend",
    /// `@if`
    SassIf => "@if",
    /// `@else`
    SassElse => "@else",
    /// `@elseif`
    SassElseIf => "@elseif",
    /// `@for`
    SassFor => "@for",
    /// `@each`
    SassEach => "@each",
    /// `@while`
    SassWhile => "@while",
    /// `@function`
    SassFunction => "@function",
    /// `@return`
    SassReturn => "@return",
    /// `@use`
    SassUse => "@use",
    /// `@forward`
    SassForward => "@forward",
    /// `@debug`
    SassDebug => "@debug",
    /// `@warn`
    SassWarn => "@warn",
    /// `@error`
    SassError => "@error",
    /// `@at-root`
    SassAtRoot => "@at-root",
    /// `@content`
    SassContent => "@content",
    /// `!default`
    SassDefault => "!default",
    /// `!optional`
    SassOptional => "!optional",
    /// `!global`
    SassGlobal => "!global",

    // LESS extensions
    /// `&`, with any number of trailing `-`.
    LessAnd => "less-and",
    /// `@rest...`, recognized only in the LESS dialect.
    LessRest => "@rest...",

    // Multi-character operators
    /// `~=`
    Includes => "~=",
    /// `|=`
    DashMatch => "|=",
    /// `^=`
    BeginsWith => "^=",
    /// `$=`
    EndsWith => "$=",
    /// `*=`
    Contains => "*=",
    /// `::`
    DoubleColon => "::",
    /// `>=` or `=>`
    GreaterOrEq => ">=",
    /// `<=` or `=<`
    LessOrEq => "<=",
    /// `==`
    CpEq => "==",
    /// `!=`
    CpNotEq => "!=",
    /// `...`
    Dots => "...",

    // Single-character punctuation
    /// `{`
    LBrace => "{",
    /// `}`
    RBrace => "}",
    /// `[`
    LBracket => "[",
    /// `]`
    RBracket => "]",
    /// `(`
    LParen => "(",
    /// `)`
    RParen => ")",
    /// `,`
    Comma => ",",
    /// `:`
    Colon => ":",
    /// `;`
    Semicolon => ";",
    /// `+`
    Plus => "+",
    /// `-`
    Minus => "-",
    /// `*`
    Star => "*",
    /// `/`
    Solidus => "/",
    /// `~`
    Tilde => "~",
    /// `|`
    Pipe => "|",
    /// `%`
    Percent => "%",
    /// `!`
    Exclamation => "!",
    /// `=`
    Equals => "=",
    /// `>`
    Greater => ">",
    /// `<`
    LessThan => "<",
    /// `.`
    Dot => ".",
    /// A `#` not followed by a name.
    HashSymbol => "#",

    /// A character no other rule claims. The scanner always consumes it,
    /// so tokenization is total over arbitrary input.
    Error => "error",
}

impl TokenKind {
    /// The channel tokens of this kind are delivered on.
    pub fn channel(self) -> Channel {
        match self {
            TokenKind::Cdo => Channel::Cdo,
            TokenKind::Cdc => Channel::Cdc,
            TokenKind::LineComment => Channel::Hidden,
            _ => Channel::Default,
        }
    }

    /// True for the kinds that represent malformed input: unterminated
    /// strings and URLs, and the unknown-character fallback.
    pub fn is_invalid(self) -> bool {
        matches!(
            self,
            TokenKind::BadString
                | TokenKind::BadJsString
                | TokenKind::BadUri
                | TokenKind::Error
        )
    }
}

/// The channel a token is delivered on.
///
/// The parser consumes `Default` tokens; `Hidden` tokens are retained for
/// tooling but skipped by parsing; `Cdo` and `Cdc` are the dedicated side
/// channels for the legacy HTML comment delimiters.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Channel {
    /// Delivered to the parser.
    Default,
    /// Suppressed from parsing, retained for tooling.
    Hidden,
    /// Side channel for `<!--`.
    Cdo,
    /// Side channel for `-->`.
    Cdc,
}

/// The stylesheet syntax variant being tokenized.
///
/// The dialect gates a small number of lexical rules: line-comment
/// recognition and the preprocessor-only vocabulary. Everything else is
/// shared.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dialect {
    /// Plain CSS3.
    Css,
    /// LESS.
    Less,
    /// SCSS / Sass.
    Scss,
}

impl Dialect {
    /// Whether this dialect is a CSS preprocessor (LESS or SCSS).
    pub fn is_preprocessor(self) -> bool {
        matches!(self, Dialect::Less | Dialect::Scss)
    }
}

/// A half-open byte range into the source buffer.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    /// Byte offset of the first character of the lexeme.
    pub start: usize,
    /// Byte offset one past the last character of the lexeme.
    pub end: usize,
}

impl Span {
    /// The lexeme this span covers within `source`.
    ///
    /// `source` must be the same string the token was produced from.
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }

    /// Length of the lexeme in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// True when the span covers no input. Never the case for tokens
    /// produced by the scanner.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// One of the pieces the stylesheet input is broken into.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    /// The lexical class of the lexeme.
    pub kind: TokenKind,
    /// Where the lexeme sits in the source buffer.
    pub span: Span,
    /// The channel the token is delivered on.
    pub channel: Channel,
}
