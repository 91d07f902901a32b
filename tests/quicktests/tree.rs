use balanced_bst::Tree;

use std::collections::BTreeSet;

/// Builds a tree by inserting every key, in order, into an empty tree.
fn inserted(xs: &[i16]) -> Tree<i16> {
    let mut tree = Tree::new();
    for x in xs {
        tree.insert(*x).unwrap();
    }

    tree
}

quickcheck::quickcheck! {
    fn build_in_order_is_sorted(xs: Vec<i16>) -> bool {
        let tree = Tree::build(xs.iter().copied()).unwrap();
        let sorted: Vec<_> = xs.into_iter().collect::<BTreeSet<_>>().into_iter().collect();

        tree.in_order() == sorted && tree.len() == sorted.len()
    }
}

quickcheck::quickcheck! {
    fn build_is_balanced(xs: Vec<i16>) -> bool {
        Tree::build(xs).unwrap().is_balanced()
    }
}

quickcheck::quickcheck! {
    fn build_ignores_input_order(xs: Vec<i16>) -> bool {
        let mut reversed = xs.clone();
        reversed.reverse();

        Tree::build(xs).unwrap() == Tree::build(reversed).unwrap()
    }
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<i16>) -> bool {
        let tree = inserted(&xs);

        xs.iter().all(|x| tree.find(x).map(|node| node.key()) == Some(x))
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i16>, nots: Vec<i16>) -> bool {
        let tree = inserted(&xs);
        let added: BTreeSet<_> = xs.into_iter().collect();
        let nots: BTreeSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| tree.find(x).is_none())
    }
}

quickcheck::quickcheck! {
    fn insert_twice_is_noop(xs: Vec<i16>, key: i16) -> bool {
        let mut tree = inserted(&xs);
        tree.insert(key).unwrap();
        let before = tree.in_order();

        tree.insert(key) == Ok(false) && tree.in_order() == before && tree.contains(&key)
    }
}

quickcheck::quickcheck! {
    fn with_deletions(xs: Vec<i16>, deletes: Vec<i16>) -> bool {
        let mut tree = inserted(&xs);
        let mut still_present: BTreeSet<_> = xs.into_iter().collect();

        for delete in &deletes {
            let expected: Vec<_> = still_present.iter().copied().filter(|x| x != delete).collect();
            tree.delete(delete);
            still_present.remove(delete);

            if tree.in_order() != expected {
                return false;
            }
        }

        deletes.iter().all(|x| tree.find(x).is_none())
            && still_present.iter().all(|x| tree.find(x).is_some())
    }
}

quickcheck::quickcheck! {
    fn rebalance_keeps_keys_and_balances(xs: Vec<i16>) -> bool {
        let mut tree = inserted(&xs);
        let before = tree.in_order();
        tree.rebalance();

        tree.is_balanced() && tree.in_order() == before
    }
}

quickcheck::quickcheck! {
    fn rebalance_is_idempotent(xs: Vec<i16>) -> bool {
        let mut tree = inserted(&xs);
        tree.rebalance();
        let once = tree.clone();
        tree.rebalance();

        tree == once
    }
}

quickcheck::quickcheck! {
    fn in_order_round_trips_through_build(xs: Vec<i16>) -> bool {
        let tree = inserted(&xs);
        let rebuilt = Tree::build(tree.in_order()).unwrap();

        rebuilt.is_balanced() && rebuilt.in_order() == tree.in_order()
    }
}

quickcheck::quickcheck! {
    fn traversals_visit_every_key_once(xs: Vec<i16>) -> bool {
        let tree = inserted(&xs);
        let keys: BTreeSet<_> = tree.in_order().into_iter().collect();
        let same_keys = |order: Vec<i16>| {
            order.len() == keys.len() && order.into_iter().collect::<BTreeSet<_>>() == keys
        };

        same_keys(tree.level_order()) && same_keys(tree.pre_order()) && same_keys(tree.post_order())
    }
}
