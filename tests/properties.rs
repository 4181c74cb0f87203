use proptest::prelude::*;
use randex::{Cause, Error, Node, Parser, parse};

fn pattern() -> impl Strategy<Value = String> {
    let alphabet = vec![
        'a', 'b', 'x', '(', ')', '|', '*', '+', '?', '[', ']', '-', '\\', 'd', 'w', '{', '2',
        ',', '}', ':',
    ];
    prop::collection::vec(prop::sample::select(alphabet), 0..14)
        .prop_map(|chars| chars.into_iter().collect::<String>())
}

/// No sequence directly inside a sequence, no alternation directly inside an
/// alternation, and no childless composite nodes.
fn is_flat(node: &Node) -> bool {
    match node {
        Node::Sequence(children) => {
            !children.is_empty()
                && children
                    .iter()
                    .all(|child| !matches!(child, Node::Sequence(_)) && is_flat(child))
        }
        Node::Alternation(branches) => {
            !branches.is_empty()
                && branches
                    .iter()
                    .all(|branch| !matches!(branch, Node::Alternation(_)) && is_flat(branch))
        }
        Node::Quantify { item, .. } => is_flat(item),
        Node::CharClass(items) => !items.is_empty(),
        Node::Literal(_) | Node::Random(_) => true,
    }
}

proptest! {
    #[test]
    fn parse_is_deterministic(pattern in pattern()) {
        prop_assert_eq!(parse(&pattern), parse(&pattern));
    }

    #[test]
    fn trees_are_flat(pattern in pattern()) {
        if let Ok(Some(node)) = parse(&pattern) {
            prop_assert!(is_flat(&node), "{} parsed to {}", pattern, node);
        }
    }

    #[test]
    fn every_pattern_decomposes(pattern in pattern()) {
        match Parser::new().with_validation(false).parse(&pattern) {
            Ok(Some(node)) => prop_assert!(is_flat(&node)),
            Ok(None) => {}
            Err(Error::InvalidPatternSyntax { cause, .. }) => prop_assert!(
                matches!(cause, Cause::Count(_) | Cause::Range { .. }),
                "{} failed with {}", pattern, cause
            ),
        }
    }
}
