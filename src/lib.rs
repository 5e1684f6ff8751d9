/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

/*!

A tokenizer for CSS3 source text that also recognizes the LESS and SCSS
syntax extensions embedded in the same character stream.

# Input

A [`Tokenizer`] borrows a `&str` and a [`Dialect`] selector. The dialect
gates a small number of lexical rules: `//` line comments (hidden channel,
preprocessor dialects only) and the preprocessor-only vocabulary (`$ident`,
`%ident`, `@mixin` and friends, back-quoted strings, `@rest...`).

# Output

A forward-only, finite sequence of [`Token`]s, each carrying a [`TokenKind`]
from a closed vocabulary, a byte-offset [`Span`] into the input, and a
[`Channel`] tag. Whitespace and comments are tokens too, so concatenating
the spans of the whole stream reconstructs the input exactly. Malformed
input never fails the scanner: unterminated strings and URLs come back as
`Bad*` kinds and unclaimed characters as `Error` tokens.

```
use csslexer::{Dialect, TokenKind, Tokenizer};

let kinds: Vec<TokenKind> = Tokenizer::new("margin: 3px;", Dialect::Css)
    .map(|token| token.kind)
    .collect();
assert_eq!(
    kinds,
    vec![
        TokenKind::Ident,
        TokenKind::Colon,
        TokenKind::WhiteSpace,
        TokenKind::Length,
        TokenKind::Semicolon,
    ]
);
```

The scanner can be rewound to any previously obtained [`SourcePosition`]
(including the beginning), and reports line/column information through
[`Tokenizer::source_location`].

*/

pub use crate::tokenizer::{SourceLocation, SourcePosition, Tokenizer};
pub use crate::tokens::{Channel, Dialect, Span, Token, TokenKind};

#[macro_use]
mod macros;

mod keywords;
mod tokenizer;
mod tokens;

#[cfg(test)]
mod tests;
