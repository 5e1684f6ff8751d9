/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

/// Expands to an expression equivalent to a `match` on an `&str` value,
/// but matching case-insensitively in the ASCII range.
///
/// ```ignore
/// match_ignore_ascii_case! { &word,
///     "important" => Some(TokenKind::ImportantSym),
///     "default" => Some(TokenKind::SassDefault),
///     _ => None,
/// }
/// ```
macro_rules! match_ignore_ascii_case {
    ( $value:expr, $( $string:literal => $result:expr, )+ _ => $fallback:expr $(,)? ) => {
        {
            let value: &str = $value;
            $(
                if value.eq_ignore_ascii_case($string) {
                    $result
                } else
            )+
            {
                $fallback
            }
        }
    };
}
