//! Preorder serialization for quadtrees
//!
//! A tree flattens to one token per node, joined with commas, root
//! first:
//!
//! ```text
//! ""   internal node (a single empty entry, ahead of its children)
//! "E"  empty node
//! "17" leaf node with value 17
//! ```
//!
//! The token sequence together with the tree's width and height is the
//! canonical compressed representation; any container format must
//! round-trip that triple exactly. Decoding walks the tokens with an
//! advancing cursor and rebuilds the tree recursively. Malformed or
//! leftover tokens are decode errors, never silently skipped.

use std::fmt::Write;

use crate::error::{Error, Result};
use crate::tree::node::{Node, QuadrantsBuilder};

/// Token representing an internal node.
pub const INTERNAL_TOKEN: &str = "";

/// Token representing an empty node.
pub const EMPTY_TOKEN: &str = "E";

/// Separator between tokens in the flattened form.
pub const DELIMITER: char = ',';

impl Node {
    /// Serialize the subtree rooted here as a preorder token string.
    ///
    /// An internal node contributes one empty entry followed by its four
    /// children, so a root with children `E`, `5`, `8`, `E` serializes to
    /// exactly `",E,5,8,E"`.
    pub fn preorder(&self) -> String {
        let mut out = String::new();
        self.write_preorder(&mut out);
        out
    }

    fn write_preorder(&self, out: &mut String) {
        match self {
            Node::Empty => out.push_str(EMPTY_TOKEN),
            Node::Leaf(value) => {
                // writing to a String cannot fail
                let _ = write!(out, "{value}");
            }
            Node::Internal(q) => {
                out.push_str(INTERNAL_TOKEN);
                for child in q.iter() {
                    out.push(DELIMITER);
                    child.write_preorder(out);
                }
            }
        }
    }

    /// Restore a subtree from preorder tokens.
    ///
    /// The whole token slice must encode exactly one subtree.
    ///
    /// # Errors
    ///
    /// Fails on an empty token list, unparseable tokens, a stream that
    /// ends before an internal node has four children, or tokens left
    /// over after the subtree is complete.
    pub fn from_preorder(tokens: &[&str]) -> Result<Node> {
        if tokens.is_empty() {
            return Err(Error::EmptyPreorder);
        }
        let (node, consumed) = restore_node(tokens, 0)?;
        if consumed < tokens.len() {
            return Err(Error::TrailingTokens {
                got: tokens.len() - consumed,
            });
        }
        Ok(node)
    }
}

/// Restore the subtree starting at `pos`.
///
/// Returns the node and the number of tokens consumed, so callers can
/// advance the cursor past an entire subtree.
pub(crate) fn restore_node(tokens: &[&str], pos: usize) -> Result<(Node, usize)> {
    let token = *tokens.get(pos).ok_or(Error::ShapeViolation { got: 0 })?;
    if token == INTERNAL_TOKEN {
        let mut consumed = 1;
        let mut builder = QuadrantsBuilder::new();
        for _ in 0..4 {
            if pos + consumed >= tokens.len() {
                return Err(Error::ShapeViolation {
                    got: builder.len(),
                });
            }
            let (child, used) = restore_node(tokens, pos + consumed)?;
            builder.push(child)?;
            consumed += used;
        }
        Ok((Node::Internal(Box::new(builder.finish()?)), consumed))
    } else if token == EMPTY_TOKEN {
        Ok((Node::Empty, 1))
    } else {
        let value = token.parse::<u8>().map_err(|_| Error::MalformedToken {
            index: pos,
            token: token.to_string(),
        })?;
        Ok((Node::Leaf(value), 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::node::Quadrants;

    fn internal(children: [Node; 4]) -> Node {
        Node::Internal(Box::new(Quadrants::new(children)))
    }

    fn tokens(preorder: &str) -> Vec<&str> {
        preorder.split(DELIMITER).collect()
    }

    #[test]
    fn test_preorder_flat_tree() {
        let root = internal([Node::Empty, Node::Leaf(5), Node::Leaf(8), Node::Empty]);
        assert_eq!(root.preorder(), ",E,5,8,E");
    }

    #[test]
    fn test_preorder_nested_tree() {
        let inner = internal([Node::Leaf(1), Node::Leaf(2), Node::Leaf(3), Node::Leaf(4)]);
        let root = internal([inner, Node::Empty, Node::Leaf(9), Node::Leaf(0)]);
        assert_eq!(root.preorder(), ",,1,2,3,4,E,9,0");
    }

    #[test]
    fn test_preorder_single_nodes() {
        assert_eq!(Node::Leaf(42).preorder(), "42");
        assert_eq!(Node::Empty.preorder(), "E");
    }

    #[test]
    fn test_restore_encode_identity() {
        for preorder in [",E,5,8,E", ",,1,2,3,4,E,9,0", ",0,255,E,,E,E,1,2"] {
            let node = Node::from_preorder(&tokens(preorder)).unwrap();
            assert_eq!(node.preorder(), preorder);
        }
    }

    #[test]
    fn test_restore_consumed_counts() {
        let toks = tokens(",,1,2,3,4,E,9,0");
        let (node, consumed) = restore_node(&toks, 0).unwrap();
        assert_eq!(consumed, toks.len());
        assert_eq!(node.size(), 9);
    }

    #[test]
    fn test_restore_malformed_token() {
        let err = Node::from_preorder(&tokens(",E,abc,8,E")).unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedToken { index: 2, ref token } if token == "abc"
        ));
    }

    #[test]
    fn test_restore_value_out_of_range() {
        // leaf values are pixel intensities; 256 does not fit
        let err = Node::from_preorder(&tokens(",E,256,8,E")).unwrap_err();
        assert!(matches!(err, Error::MalformedToken { index: 2, .. }));
    }

    #[test]
    fn test_restore_truncated() {
        let err = Node::from_preorder(&tokens(",E,5")).unwrap_err();
        assert!(matches!(err, Error::ShapeViolation { got: 2 }));
    }

    #[test]
    fn test_restore_trailing_tokens() {
        let err = Node::from_preorder(&tokens(",E,5,8,E,7")).unwrap_err();
        assert!(matches!(err, Error::TrailingTokens { got: 1 }));
    }
}
