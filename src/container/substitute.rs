//! Placeholder substitution
//!
//! Rewrites the two recognized tokens in raw file bytes before parsing:
//! `{{current}}` becomes the canonical request IRI and `{{base}}` the site
//! base IRI. Substitution is plain text replacement with no escape
//! mechanism; a file that happens to contain a token gets rewritten.
//!
//! The rewriter is push-based and chunk-boundary safe: it holds back at most
//! one incomplete token candidate between `push` calls, so a token split
//! across reads is still rewritten and memory stays bounded by the chunk
//! size.

use bytes::{Bytes, BytesMut};

const TOKEN_CURRENT: &[u8] = b"{{current}}";
const TOKEN_BASE: &[u8] = b"{{base}}";

enum TokenMatch {
    Current,
    Base,
    /// The buffer ends inside a possible token; wait for more input.
    Partial,
    None,
}

fn match_token(buf: &[u8]) -> TokenMatch {
    if buf.starts_with(TOKEN_CURRENT) {
        TokenMatch::Current
    } else if buf.starts_with(TOKEN_BASE) {
        TokenMatch::Base
    } else if TOKEN_CURRENT.starts_with(buf) || TOKEN_BASE.starts_with(buf) {
        TokenMatch::Partial
    } else {
        TokenMatch::None
    }
}

/// Streaming `{{current}}` / `{{base}}` rewriter scoped to one request
pub struct PlaceholderRewriter {
    current: Vec<u8>,
    base: Vec<u8>,
    carry: BytesMut,
}

impl PlaceholderRewriter {
    /// Create a rewriter for the given request identifiers
    pub fn new(current: &str, base: &str) -> Self {
        Self {
            current: current.as_bytes().to_vec(),
            base: base.as_bytes().to_vec(),
            carry: BytesMut::new(),
        }
    }

    /// Feed a chunk of input, returning the rewritten bytes ready so far
    pub fn push(&mut self, chunk: &[u8]) -> Bytes {
        self.carry.extend_from_slice(chunk);
        let buf = &self.carry[..];
        let mut out = BytesMut::with_capacity(buf.len());
        let mut i = 0;
        let mut held_back = buf.len();

        while i < buf.len() {
            match buf[i..].iter().position(|&b| b == b'{') {
                None => {
                    out.extend_from_slice(&buf[i..]);
                    i = buf.len();
                }
                Some(offset) => {
                    out.extend_from_slice(&buf[i..i + offset]);
                    i += offset;
                    match match_token(&buf[i..]) {
                        TokenMatch::Current => {
                            out.extend_from_slice(&self.current);
                            i += TOKEN_CURRENT.len();
                        }
                        TokenMatch::Base => {
                            out.extend_from_slice(&self.base);
                            i += TOKEN_BASE.len();
                        }
                        TokenMatch::Partial => {
                            held_back = i;
                            i = buf.len();
                        }
                        TokenMatch::None => {
                            out.extend_from_slice(&buf[i..i + 1]);
                            i += 1;
                        }
                    }
                }
            }
        }

        let tail = self.carry.split_off(held_back);
        self.carry = tail;
        out.freeze()
    }

    /// Flush any held-back bytes; an incomplete token at end of input stays
    /// literal.
    pub fn finish(&mut self) -> Bytes {
        self.carry.split().freeze()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURRENT: &str = "http://localhost:3000/data";
    const BASE: &str = "http://localhost:3000";

    fn rewrite_whole(input: &str) -> String {
        let mut rewriter = PlaceholderRewriter::new(CURRENT, BASE);
        let mut out = Vec::new();
        out.extend_from_slice(&rewriter.push(input.as_bytes()));
        out.extend_from_slice(&rewriter.finish());
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_replaces_both_tokens() {
        let out = rewrite_whole("<{{current}}/alice> <{{base}}/vocab#p> \"x\" .");
        assert_eq!(
            out,
            "<http://localhost:3000/data/alice> <http://localhost:3000/vocab#p> \"x\" ."
        );
    }

    #[test]
    fn test_passthrough_without_tokens() {
        let input = "no tokens here, just { braces } and {{almost}}";
        assert_eq!(rewrite_whole(input), input);
    }

    #[test]
    fn test_token_split_across_chunks() {
        let mut rewriter = PlaceholderRewriter::new(CURRENT, BASE);
        let mut out = Vec::new();
        out.extend_from_slice(&rewriter.push(b"see {{cur"));
        out.extend_from_slice(&rewriter.push(b"rent}} here"));
        out.extend_from_slice(&rewriter.finish());
        assert_eq!(out, format!("see {} here", CURRENT).as_bytes());
    }

    #[test]
    fn test_every_split_point() {
        let input = b"a {{base}} b {{current}} c";
        let expected = format!("a {} b {} c", BASE, CURRENT);
        for split in 0..=input.len() {
            let mut rewriter = PlaceholderRewriter::new(CURRENT, BASE);
            let mut out = Vec::new();
            out.extend_from_slice(&rewriter.push(&input[..split]));
            out.extend_from_slice(&rewriter.push(&input[split..]));
            out.extend_from_slice(&rewriter.finish());
            assert_eq!(out, expected.as_bytes(), "split at {}", split);
        }
    }

    #[test]
    fn test_incomplete_token_at_eof_stays_literal() {
        assert_eq!(rewrite_whole("dangling {{curr"), "dangling {{curr");
        assert_eq!(rewrite_whole("open {{"), "open {{");
    }

    #[test]
    fn test_idempotent_for_same_input() {
        let input = "x {{current}} y";
        assert_eq!(rewrite_whole(input), rewrite_whole(input));
    }

    #[test]
    fn test_adjacent_tokens() {
        let out = rewrite_whole("{{current}}{{base}}");
        assert_eq!(out, format!("{}{}", CURRENT, BASE));
    }
}
