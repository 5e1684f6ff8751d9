/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Fixed vocabulary tables: at-rule keywords, SCSS directives, and the
//! ordered unit-suffix candidate list.
//!
//! Lookups happen on escape-decoded, lowercased names, so `@\6d edia`
//! classifies exactly like `@media`.

use std::borrow::Cow;

use phf::phf_map;

use crate::tokens::{Dialect, TokenKind};

/// At-rule keywords shared by every dialect.
static AT_KEYWORDS: phf::Map<&'static str, TokenKind> = phf_map! {
    "charset" => TokenKind::CharsetSym,
    "import" => TokenKind::ImportSym,
    "namespace" => TokenKind::NamespaceSym,
    "media" => TokenKind::MediaSym,
    "page" => TokenKind::PageSym,
    "font-face" => TokenKind::FontFaceSym,
    "counter-style" => TokenKind::CounterStyleSym,
    "supports" => TokenKind::SupportsSym,
    "layer" => TokenKind::LayerSym,
    "container" => TokenKind::ContainerSym,
    "keyframes" => TokenKind::KeyframesSym,
    "-moz-document" => TokenKind::MozDocumentSym,
    "top-left-corner" => TokenKind::TopLeftCornerSym,
    "top-left" => TokenKind::TopLeftSym,
    "top-center" => TokenKind::TopCenterSym,
    "top-right" => TokenKind::TopRightSym,
    "top-right-corner" => TokenKind::TopRightCornerSym,
    "bottom-left-corner" => TokenKind::BottomLeftCornerSym,
    "bottom-left" => TokenKind::BottomLeftSym,
    "bottom-center" => TokenKind::BottomCenterSym,
    "bottom-right" => TokenKind::BottomRightSym,
    "bottom-right-corner" => TokenKind::BottomRightCornerSym,
    "left-top" => TokenKind::LeftTopSym,
    "left-middle" => TokenKind::LeftMiddleSym,
    "left-bottom" => TokenKind::LeftBottomSym,
    "right-top" => TokenKind::RightTopSym,
    "right-middle" => TokenKind::RightMiddleSym,
    "right-bottom" => TokenKind::RightBottomSym,
};

/// Directives recognized only when tokenizing SCSS.
static SCSS_DIRECTIVES: phf::Map<&'static str, TokenKind> = phf_map! {
    "mixin" => TokenKind::SassMixin,
    "include" => TokenKind::SassInclude,
    "extend" => TokenKind::SassExtend,
    "if" => TokenKind::SassIf,
    "else" => TokenKind::SassElse,
    "elseif" => TokenKind::SassElseIf,
    "for" => TokenKind::SassFor,
    "each" => TokenKind::SassEach,
    "while" => TokenKind::SassWhile,
    "function" => TokenKind::SassFunction,
    "return" => TokenKind::SassReturn,
    "use" => TokenKind::SassUse,
    "forward" => TokenKind::SassForward,
    "debug" => TokenKind::SassDebug,
    "warn" => TokenKind::SassWarn,
    "error" => TokenKind::SassError,
    "at-root" => TokenKind::SassAtRoot,
    "content" => TokenKind::SassContent,
};

/// Unit suffix candidates in the grammar's declared order.
///
/// The scanner tries each spelling in turn with rollback in between; the
/// order resolves shared prefixes (`p` opens `px`/`pt`/`pc`, `m` opens
/// `mm`/`ms`, `ra` must lose to `rem` only after failing on its own).
pub static UNIT_CANDIDATES: &[(&[u8], TokenKind)] = &[
    (b"em", TokenKind::Ems),
    (b"ex", TokenKind::Exs),
    (b"px", TokenKind::Length),
    (b"pt", TokenKind::Length),
    (b"pc", TokenKind::Length),
    (b"cm", TokenKind::Length),
    (b"mm", TokenKind::Length),
    (b"ms", TokenKind::Time),
    (b"in", TokenKind::Length),
    (b"deg", TokenKind::Angle),
    (b"rad", TokenKind::Angle),
    (b"grad", TokenKind::Angle),
    (b"rem", TokenKind::Rem),
    (b"s", TokenKind::Time),
    (b"hz", TokenKind::Freq),
    (b"khz", TokenKind::Freq),
    (b"dpi", TokenKind::Resolution),
    (b"dpcm", TokenKind::Resolution),
];

/// True when `name` (decoded, any case) is a strict prefix of some unit
/// spelling — i.e. a unit candidate consumed exactly these letters and then
/// failed. Such a suffix rolls back to a plain `Number` instead of becoming
/// a `Dimension`.
pub fn is_unit_prefix(name: &str) -> bool {
    UNIT_CANDIDATES.iter().any(|&(spelling, _)| {
        name.len() < spelling.len()
            && name
                .bytes()
                .zip(spelling)
                .all(|(a, &b)| a.eq_ignore_ascii_case(&b))
    })
}

/// Classify a decoded at-keyword name.
///
/// SCSS directives are consulted first and only in the SCSS dialect, then
/// the shared at-rule vocabulary, then vendor-prefixed keyframes. Anything
/// else is an open-ended `AtIdent`.
pub fn at_keyword_kind(name: &str, dialect: Dialect) -> TokenKind {
    let lower = lowercase(name);
    let lower = lower.as_ref();
    if dialect == Dialect::Scss {
        if let Some(&kind) = SCSS_DIRECTIVES.get(lower) {
            return kind;
        }
    }
    if let Some(&kind) = AT_KEYWORDS.get(lower) {
        return kind;
    }
    // @-webkit-keyframes, @-moz-keyframes, @-o-keyframes, ...
    if let Some(rest) = lower.strip_prefix('-') {
        if let Some((vendor, tail)) = rest.split_once('-') {
            if !vendor.is_empty() && tail == "keyframes" {
                return TokenKind::KeyframesSym;
            }
        }
    }
    TokenKind::AtIdent
}

fn lowercase(name: &str) -> Cow<'_, str> {
    if name.bytes().any(|b| b.is_ascii_uppercase()) {
        Cow::Owned(name.to_ascii_lowercase())
    } else {
        Cow::Borrowed(name)
    }
}
