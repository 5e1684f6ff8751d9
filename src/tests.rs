/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use difference::Changeset;
use serde_json::{json, Value};

use super::TokenKind::*;
use super::{Channel, Dialect, SourceLocation, Token, TokenKind, Tokenizer};

fn tokenize(input: &str, dialect: Dialect) -> Vec<Token> {
    Tokenizer::new(input, dialect).collect()
}

fn kinds(input: &str, dialect: Dialect) -> Vec<TokenKind> {
    tokenize(input, dialect).iter().map(|t| t.kind).collect()
}

#[track_caller]
fn assert_tokens(input: &str, dialect: Dialect, expected: &[(TokenKind, &str)]) {
    let actual: Vec<(TokenKind, &str)> = tokenize(input, dialect)
        .iter()
        .map(|t| (t.kind, t.span.slice(input)))
        .collect();
    assert_eq!(actual, expected, "tokenizing {:?}", input);
}

/// Spans must be contiguous, non-empty, and reconstruct the input exactly.
#[track_caller]
fn assert_round_trip(input: &str, dialect: Dialect) {
    let mut reconstructed = std::string::String::new();
    let mut last_end = 0;
    for token in tokenize(input, dialect) {
        assert_eq!(
            token.span.start, last_end,
            "gap or overlap in {:?} at byte {}",
            input, last_end
        );
        assert!(!token.span.is_empty(), "empty token in {:?}", input);
        last_end = token.span.end;
        reconstructed.push_str(token.span.slice(input));
    }
    assert_eq!(last_end, input.len(), "dropped tail of {:?}", input);
    assert_eq!(reconstructed, input);
}

/// Dump a token stream as `[[description, lexeme, channel?], ...]` for
/// whole-stylesheet comparisons.
fn token_dump(input: &str, dialect: Dialect) -> Value {
    Value::Array(
        tokenize(input, dialect)
            .iter()
            .map(|t| {
                let mut entry = vec![json!(t.kind.description()), json!(t.span.slice(input))];
                if t.channel != Channel::Default {
                    entry.push(json!(format!("{:?}", t.channel).to_ascii_lowercase()));
                }
                Value::Array(entry)
            })
            .collect(),
    )
}

#[track_caller]
fn assert_json_eq(results: Value, expected: Value) {
    if results != expected {
        let results = serde_json::to_string_pretty(&results).unwrap();
        let expected = serde_json::to_string_pretty(&expected).unwrap();
        panic!(
            "token dump mismatch:\n{}",
            Changeset::new(&results, &expected, "\n")
        );
    }
}

#[test]
fn unit_priority() {
    assert_eq!(kinds("3s", Dialect::Css), vec![Time]);
    assert_eq!(kinds("3px", Dialect::Css), vec![Length]);
    assert_eq!(kinds("3somethingelse", Dialect::Css), vec![Dimension]);
    assert_eq!(kinds("3", Dialect::Css), vec![Number]);
}

#[test]
fn all_units() {
    for (input, kind) in [
        ("3em", Ems),
        ("3ex", Exs),
        ("3px", Length),
        ("3pt", Length),
        ("3pc", Length),
        ("3cm", Length),
        ("3mm", Length),
        ("3in", Length),
        ("3ms", Time),
        ("3s", Time),
        ("3deg", Angle),
        ("3rad", Angle),
        ("3grad", Angle),
        ("3rem", Rem),
        ("3hz", Freq),
        ("3kHz", Freq),
        ("3KHZ", Freq),
        ("3dpi", Resolution),
        ("3dpcm", Resolution),
        ("50%", Percentage),
    ] {
        assert_eq!(kinds(input, Dialect::Css), vec![kind], "{}", input);
    }
}

#[test]
fn rollback_after_failed_unit() {
    // The failed `p` candidate may not consume or skip anything: the
    // remaining tokens start right after the digits.
    assert_tokens(
        "10p@",
        Dialect::Css,
        &[(Number, "10"), (Ident, "p"), (Error, "@")],
    );
    // A suffix that is a strict prefix of a unit rolls back to a number...
    assert_tokens("3m", Dialect::Css, &[(Number, "3"), (Ident, "m")]);
    // ...while anything longer is a plain dimension.
    assert_tokens("10pt5", Dialect::Css, &[(Dimension, "10pt5")]);
    assert_tokens("4q", Dialect::Css, &[(Dimension, "4q")]);
    assert_tokens("3e2", Dialect::Css, &[(Dimension, "3e2")]);
}

#[test]
fn escaped_unit_letters() {
    // \73 = s, \70 = p, \78 = x; a trailing space is part of the escape.
    assert_eq!(kinds("3\\73", Dialect::Css), vec![Time]);
    assert_eq!(kinds("1\\70 t", Dialect::Css), vec![Length]);
    assert_eq!(kinds("3p\\78", Dialect::Css), vec![Length]);
}

#[test]
fn numbers() {
    assert_tokens("1.5", Dialect::Css, &[(Number, "1.5")]);
    assert_tokens(".5em", Dialect::Css, &[(Ems, ".5em")]);
    assert_tokens("12.", Dialect::Css, &[(Number, "12"), (Dot, ".")]);
    assert_tokens("1.5.2", Dialect::Css, &[(Number, "1.5"), (Number, ".2")]);
    assert_tokens(
        "-5px",
        Dialect::Css,
        &[(Minus, "-"), (Length, "5px")],
    );
}

#[test]
fn escape_equivalence_in_keywords() {
    // @\6d edia spells @media; either case of the code point is accepted.
    assert_eq!(kinds("@\\6d edia", Dialect::Css), vec![MediaSym]);
    assert_eq!(kinds("@\\4D edia", Dialect::Css), vec![MediaSym]);
    assert_eq!(kinds("@MEDIA", Dialect::Css), vec![MediaSym]);
    assert_eq!(kinds("@me\\64 ia", Dialect::Scss), vec![MediaSym]);
}

#[test]
fn at_keywords() {
    for (input, kind) in [
        ("@charset", CharsetSym),
        ("@import", ImportSym),
        ("@namespace", NamespaceSym),
        ("@media", MediaSym),
        ("@page", PageSym),
        ("@font-face", FontFaceSym),
        ("@counter-style", CounterStyleSym),
        ("@supports", SupportsSym),
        ("@layer", LayerSym),
        ("@container", ContainerSym),
        ("@keyframes", KeyframesSym),
        ("@-webkit-keyframes", KeyframesSym),
        ("@-moz-keyframes", KeyframesSym),
        ("@-o-keyframes", KeyframesSym),
        ("@-moz-document", MozDocumentSym),
        ("@top-left-corner", TopLeftCornerSym),
        ("@top-left", TopLeftSym),
        ("@top-center", TopCenterSym),
        ("@top-right", TopRightSym),
        ("@top-right-corner", TopRightCornerSym),
        ("@bottom-left-corner", BottomLeftCornerSym),
        ("@bottom-left", BottomLeftSym),
        ("@bottom-center", BottomCenterSym),
        ("@bottom-right", BottomRightSym),
        ("@bottom-right-corner", BottomRightCornerSym),
        ("@left-top", LeftTopSym),
        ("@left-middle", LeftMiddleSym),
        ("@left-bottom", LeftBottomSym),
        ("@right-top", RightTopSym),
        ("@right-middle", RightMiddleSym),
        ("@right-bottom", RightBottomSym),
        ("@custom-thing", AtIdent),
    ] {
        assert_eq!(kinds(input, Dialect::Css), vec![kind], "{}", input);
    }
    assert_tokens(
        "@ x",
        Dialect::Css,
        &[(Error, "@"), (WhiteSpace, " "), (Ident, "x")],
    );
}

#[test]
fn scss_directives_are_dialect_gated() {
    for (input, kind) in [
        ("@mixin", SassMixin),
        ("@include", SassInclude),
        ("@extend", SassExtend),
        ("@if", SassIf),
        ("@else", SassElse),
        ("@elseif", SassElseIf),
        ("@for", SassFor),
        ("@each", SassEach),
        ("@while", SassWhile),
        ("@function", SassFunction),
        ("@return", SassReturn),
        ("@use", SassUse),
        ("@forward", SassForward),
        ("@debug", SassDebug),
        ("@warn", SassWarn),
        ("@error", SassError),
        ("@at-root", SassAtRoot),
        ("@content", SassContent),
    ] {
        assert_eq!(kinds(input, Dialect::Scss), vec![kind], "{}", input);
        assert_eq!(kinds(input, Dialect::Css), vec![AtIdent], "{}", input);
        assert_eq!(kinds(input, Dialect::Less), vec![AtIdent], "{}", input);
    }
}

#[test]
fn sass_variables_and_flags() {
    assert_tokens("$width", Dialect::Scss, &[(SassVar, "$width")]);
    assert_tokens(
        "$width",
        Dialect::Css,
        &[(Error, "$"), (Ident, "width")],
    );
    assert_tokens(
        "%placeholder",
        Dialect::Scss,
        &[(SassExtendOnlySelector, "%placeholder")],
    );
    assert_tokens(
        "%placeholder",
        Dialect::Css,
        &[(Percent, "%"), (Ident, "placeholder")],
    );
    assert_eq!(kinds("!default", Dialect::Scss), vec![SassDefault]);
    assert_eq!(kinds("!optional", Dialect::Scss), vec![SassOptional]);
    assert_eq!(kinds("!global", Dialect::Scss), vec![SassGlobal]);
    assert_tokens(
        "!default",
        Dialect::Css,
        &[(Exclamation, "!"), (Ident, "default")],
    );
}

#[test]
fn less_tokens() {
    assert_eq!(kinds("@rest...", Dialect::Less), vec![LessRest]);
    assert_tokens(
        "@rest...",
        Dialect::Css,
        &[(AtIdent, "@rest"), (Dots, "...")],
    );
    // LESS variables are plain at-idents at the lexical level.
    assert_eq!(kinds("@width", Dialect::Less), vec![AtIdent]);
    assert_tokens(
        "`window.width`",
        Dialect::Less,
        &[(JsString, "`window.width`")],
    );
    assert_tokens("`abc", Dialect::Less, &[(BadJsString, "`abc")]);
    assert_tokens(
        "`x`",
        Dialect::Css,
        &[(Error, "`"), (Ident, "x"), (Error, "`")],
    );
    assert_tokens(
        "&:hover",
        Dialect::Less,
        &[(LessAnd, "&"), (Colon, ":"), (Ident, "hover")],
    );
    assert_tokens(
        "&-foo",
        Dialect::Less,
        &[(LessAnd, "&-"), (Ident, "foo")],
    );
}

#[test]
fn line_comment_dialect_gating() {
    let input = "// comment\ncolor";
    for dialect in [Dialect::Scss, Dialect::Less] {
        let tokens = tokenize(input, dialect);
        assert_eq!(tokens[0].kind, LineComment);
        assert_eq!(tokens[0].channel, Channel::Hidden);
        assert_eq!(tokens[0].span.slice(input), "// comment");
        assert_eq!(tokens[1].kind, NewLine);
        assert_eq!(tokens[2].kind, Ident);
    }
    // In plain CSS `//` has no comment meaning.
    assert_tokens(
        input,
        Dialect::Css,
        &[
            (Solidus, "/"),
            (Solidus, "/"),
            (WhiteSpace, " "),
            (Ident, "comment"),
            (NewLine, "\n"),
            (Ident, "color"),
        ],
    );
}

#[test]
fn strings() {
    assert_tokens("'abc'", Dialect::Css, &[(String, "'abc'")]);
    assert_tokens(r#""a'b""#, Dialect::Css, &[(String, r#""a'b""#)]);
    assert_tokens(r"'a\'b'", Dialect::Css, &[(String, r"'a\'b'")]);
    // An escaped newline continues the string.
    assert_tokens("'a\\\nb'", Dialect::Css, &[(String, "'a\\\nb'")]);
}

#[test]
fn unterminated_string() {
    let tokens = tokenize("'abc", Dialect::Css);
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, BadString);
    assert!(tokens[0].kind.is_invalid());
    assert_eq!(tokens[0].span.slice("'abc"), "'abc");
}

#[test]
fn string_broken_by_newline() {
    assert_tokens(
        "'ab\ncd'",
        Dialect::Css,
        &[
            (BadString, "'ab"),
            (NewLine, "\n"),
            (Ident, "cd"),
            (BadString, "'"),
        ],
    );
}

#[test]
fn uri() {
    assert_tokens("url(image.png)", Dialect::Css, &[(Uri, "url(image.png)")]);
    assert_tokens("URL(x)", Dialect::Css, &[(Uri, "URL(x)")]);
    assert_tokens("url()", Dialect::Css, &[(Uri, "url()")]);
    assert_tokens(
        r#"url( "a.png" )"#,
        Dialect::Css,
        &[(Uri, r#"url( "a.png" )"#)],
    );
    // The u-r-l letters accept escapes like any keyword letters.
    assert_tokens("u\\72 l(x)", Dialect::Css, &[(Uri, "u\\72 l(x)")]);
    // Embedded whitespace is tolerated in unquoted bodies.
    assert_tokens("url(a b.png)", Dialect::Css, &[(Uri, "url(a b.png)")]);
    assert_tokens("url(", Dialect::Css, &[(BadUri, "url(")]);
    assert_tokens(r#"url("abc"#, Dialect::Css, &[(BadUri, r#"url("abc"#)]);
    assert_tokens("url(a(b)", Dialect::Css, &[(BadUri, "url(a(b)")]);
    // Only a name spelling exactly `url` opens the construct.
    assert_tokens(
        "calc(1)",
        Dialect::Css,
        &[(Ident, "calc"), (LParen, "("), (Number, "1"), (RParen, ")")],
    );
}

#[test]
fn comments() {
    assert_tokens("/* a */", Dialect::Css, &[(Comment, "/* a */")]);
    assert_tokens(
        "/*a*/b",
        Dialect::Css,
        &[(Comment, "/*a*/"), (Ident, "b")],
    );
    assert_tokens("/* x", Dialect::Css, &[(Comment, "/* x")]);
    assert_tokens(
        "/**/!",
        Dialect::Css,
        &[(Comment, "/**/"), (Exclamation, "!")],
    );
}

#[test]
fn important() {
    assert_eq!(kinds("!important", Dialect::Css), vec![ImportantSym]);
    assert_eq!(kinds("! important", Dialect::Css), vec![ImportantSym]);
    assert_eq!(kinds("!/* ok */important", Dialect::Css), vec![ImportantSym]);
    assert_eq!(kinds("!IMPORTANT", Dialect::Less), vec![ImportantSym]);
    assert_eq!(kinds("!\\69 mportant", Dialect::Css), vec![ImportantSym]);
    assert_tokens("!foo", Dialect::Css, &[(Exclamation, "!"), (Ident, "foo")]);
    assert_tokens(
        "! ",
        Dialect::Css,
        &[(Exclamation, "!"), (WhiteSpace, " ")],
    );
}

#[test]
fn operators() {
    assert_eq!(
        kinds("~= |= ^= $= *= :: ... >= => <= =< == !=", Dialect::Scss),
        vec![
            Includes, WhiteSpace, DashMatch, WhiteSpace, BeginsWith, WhiteSpace, EndsWith,
            WhiteSpace, Contains, WhiteSpace, DoubleColon, WhiteSpace, Dots, WhiteSpace,
            GreaterOrEq, WhiteSpace, GreaterOrEq, WhiteSpace, LessOrEq, WhiteSpace, LessOrEq,
            WhiteSpace, CpEq, WhiteSpace, CpNotEq,
        ]
    );
    assert_tokens(
        "a[href$='.png']",
        Dialect::Css,
        &[
            (Ident, "a"),
            (LBracket, "["),
            (Ident, "href"),
            (EndsWith, "$="),
            (String, "'.png'"),
            (RBracket, "]"),
        ],
    );
}

#[test]
fn punctuation() {
    assert_eq!(
        kinds("{}[]()", Dialect::Css),
        vec![LBrace, RBrace, LBracket, RBracket, LParen, RParen]
    );
    assert_eq!(
        kinds("+,;:*/~|>.<", Dialect::Css),
        vec![Plus, Comma, Semicolon, Colon, Star, Solidus, Tilde, Pipe, Greater, Dot, LessThan]
    );
    assert_eq!(
        kinds("a = b", Dialect::Css),
        vec![Ident, WhiteSpace, Equals, WhiteSpace, Ident]
    );
    assert_tokens("^", Dialect::Css, &[(Error, "^")]);
    assert_tokens("$", Dialect::Css, &[(Error, "$")]);
}

#[test]
fn cdo_cdc_channels() {
    let input = "<!-- -->";
    let tokens = tokenize(input, Dialect::Css);
    assert_eq!(
        tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
        vec![Cdo, WhiteSpace, Cdc]
    );
    assert_eq!(tokens[0].channel, Channel::Cdo);
    assert_eq!(tokens[1].channel, Channel::Default);
    assert_eq!(tokens[2].channel, Channel::Cdc);
}

#[test]
fn variables_and_dashed_idents() {
    assert_tokens("--main-color", Dialect::Css, &[(Variable, "--main-color")]);
    assert_tokens(
        "var(--x)",
        Dialect::Css,
        &[(Ident, "var"), (LParen, "("), (Variable, "--x"), (RParen, ")")],
    );
    assert_tokens("-webkit-box", Dialect::Css, &[(Ident, "-webkit-box")]);
    assert_tokens("--", Dialect::Css, &[(Minus, "-"), (Minus, "-")]);
    assert_tokens(
        "--3",
        Dialect::Css,
        &[(Minus, "-"), (Minus, "-"), (Number, "3")],
    );
    // --> takes priority over two minuses.
    assert_tokens("-->", Dialect::Css, &[(Cdc, "-->")]);
}

#[test]
fn hashes() {
    assert_tokens("#fff", Dialect::Css, &[(Hash, "#fff")]);
    assert_tokens("#-id", Dialect::Css, &[(Hash, "#-id")]);
    assert_tokens(
        "# {",
        Dialect::Css,
        &[(HashSymbol, "#"), (WhiteSpace, " "), (LBrace, "{")],
    );
    // SCSS interpolation opens with a bare hash symbol.
    assert_tokens("#{", Dialect::Scss, &[(HashSymbol, "#"), (LBrace, "{")]);
}

#[test]
fn total_coverage_round_trip() {
    let samples = [
        "a{b:c}",
        "@media (min-width: 50px) {}",
        "url(a b)",
        "'unterminated",
        "/* unterminated",
        "3p@ 4q 5s",
        "\\",
        "@",
        "$ % ^ &",
        "a\u{00e9}b",
        "x:hover::before",
        "<!--x-->",
        "--var: 1; color: var(--var)",
        "#{$x}-suffix",
        "margin:-3px !important/*c*/;",
        "a[href$='.png'] ~ b > c",
        "100%;.5rem",
        "`js`",
        "// eol",
        "url('q' )",
        "@\\6d edia screen",
        "'bad\nrecovers'",
    ];
    for dialect in [Dialect::Css, Dialect::Less, Dialect::Scss] {
        for sample in samples {
            assert_round_trip(sample, dialect);
        }
    }
}

#[test]
fn restartable_from_the_beginning() {
    let mut tokenizer = Tokenizer::new("a 3px", Dialect::Css);
    let start = tokenizer.position();
    let first = tokenizer.next_token().unwrap();
    while tokenizer.next_token().is_some() {}
    assert!(tokenizer.next_token().is_none());
    tokenizer.reset(start);
    assert_eq!(tokenizer.next_token().unwrap(), first);
}

#[test]
fn source_locations() {
    let mut tokenizer = Tokenizer::new("ab\ncd", Dialect::Css);
    tokenizer.next_token(); // "ab"
    assert_eq!(
        tokenizer.current_source_location(),
        SourceLocation { line: 1, column: 3 }
    );
    tokenizer.next_token(); // "\n"
    assert_eq!(
        tokenizer.current_source_location(),
        SourceLocation { line: 2, column: 1 }
    );
}

#[test]
fn kind_metadata() {
    assert_eq!(MediaSym.description(), "@media");
    assert_eq!(Includes.description(), "~=");
    assert!(BadString.is_invalid());
    assert!(BadUri.is_invalid());
    assert!(!String.is_invalid());
    assert!(Dialect::Scss.is_preprocessor());
    assert!(!Dialect::Css.is_preprocessor());
}

#[test]
fn stylesheet_dump_css() {
    let css = "@media screen {\n  a.link { color: #fff; margin: 0 auto !important }\n}\n";
    assert_json_eq(
        token_dump(css, Dialect::Css),
        json!([
            ["@media", "@media"],
            ["whitespace", " "],
            ["ident", "screen"],
            ["whitespace", " "],
            ["{", "{"],
            ["newline", "\n"],
            ["whitespace", "  "],
            ["ident", "a"],
            [".", "."],
            ["ident", "link"],
            ["whitespace", " "],
            ["{", "{"],
            ["whitespace", " "],
            ["ident", "color"],
            [":", ":"],
            ["whitespace", " "],
            ["hash", "#fff"],
            [";", ";"],
            ["whitespace", " "],
            ["ident", "margin"],
            [":", ":"],
            ["whitespace", " "],
            ["number", "0"],
            ["whitespace", " "],
            ["ident", "auto"],
            ["whitespace", " "],
            ["!important", "!important"],
            ["whitespace", " "],
            ["}", "}"],
            ["newline", "\n"],
            ["}", "}"],
            ["newline", "\n"],
        ]),
    );
}

#[test]
fn stylesheet_dump_scss() {
    let scss = "// note\n@mixin box($w) { width: $w; }\n";
    assert_json_eq(
        token_dump(scss, Dialect::Scss),
        json!([
            ["line-comment", "// note", "hidden"],
            ["newline", "\n"],
            ["@mixin", "@mixin"],
            ["whitespace", " "],
            ["ident", "box"],
            ["(", "("],
            ["sass-var", "$w"],
            [")", ")"],
            ["whitespace", " "],
            ["{", "{"],
            ["whitespace", " "],
            ["ident", "width"],
            [":", ":"],
            ["whitespace", " "],
            ["sass-var", "$w"],
            [";", ";"],
            ["whitespace", " "],
            ["}", "}"],
            ["newline", "\n"],
        ]),
    );
}
