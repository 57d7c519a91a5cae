use crate::*;

use treeviz::{Traversal, Tree, TreeKind};

#[test]
fn player_plays_an_insert_to_completion() {
    let mut p = Player::new(Tree::new(TreeKind::Avl)).with_delay_ms(10);
    assert!(p.insert(42, 0));
    assert!(p.is_animating());

    // Empty tree: no path to sweep, just the pending mutation.
    assert_eq!(p.tick(0), 1);
    assert!(!p.is_animating());
    assert_eq!(p.tree().len(), 1);
    assert_eq!(p.transcript(), vec!["Inserted 42"]);
    assert_eq!(p.active(), None);
}

#[test]
fn player_paces_path_visits_at_half_delay() {
    let mut tree = Tree::new(TreeKind::Bst);
    tree.insert_now(20);
    tree.insert_now(10);
    let mut p = Player::new(tree).with_delay_ms(10);

    // Path [20, 10], then the mutation.
    assert!(p.insert(5, 0));

    assert_eq!(p.tick(0), 1); // visit 20
    assert_eq!(p.active(), p.tree().root());
    assert_eq!(p.tick(4), 0); // half delay (5ms) not elapsed yet
    assert_eq!(p.tick(5), 1); // visit 10
    assert_eq!(p.tick(9), 0);
    assert_eq!(p.tick(10), 1); // apply the insert
    assert!(!p.is_animating());
    assert_eq!(p.tree().values_in_order(), [5, 10, 20]);
    assert_eq!(p.transcript(), vec!["Inserted 5"]);
}

#[test]
fn player_refuses_a_second_operation_mid_flight() {
    let mut tree = Tree::new(TreeKind::Bst);
    tree.insert_now(1);
    let mut p = Player::new(tree).with_delay_ms(10);

    assert!(p.insert(2, 0));
    assert!(!p.insert(3, 0));
    assert!(!p.delete(1, 0));
    assert!(!p.traverse(Traversal::InOrder, 0));
    assert!(!p.clear());

    // Drain, then a new operation is accepted again.
    let mut now = 0;
    while p.is_animating() {
        p.tick(now);
        now += 1;
    }
    assert!(p.insert(3, now));
}

#[test]
fn cancel_keeps_the_applied_prefix() {
    let mut tree = Tree::new(TreeKind::Bst);
    tree.insert_now(10);
    let mut p = Player::new(tree).with_delay_ms(10);

    assert!(p.delete(10, 0));
    assert_eq!(p.tick(0), 1); // visit only; the deletion is still pending
    p.cancel();
    assert!(!p.is_animating());
    assert_eq!(p.active(), None);
    // The mutation step was never reached, so the value survives.
    assert!(p.tree().contains(10));
}

#[test]
fn traversal_shows_log_line_and_visit_on_the_same_tick() {
    let mut tree = Tree::new(TreeKind::Bst);
    for v in [2, 1, 3] {
        tree.insert_now(v);
    }
    let mut p = Player::new(tree).with_delay_ms(10);

    assert!(p.traverse(Traversal::InOrder, 0));
    // Header (zero dwell) + first value line (zero dwell) + first visit.
    assert_eq!(p.tick(0), 3);
    assert_eq!(p.transcript(), vec!["In-order traversal:", "1"]);
    assert!(p.active().is_some());

    assert_eq!(p.tick(10), 2);
    assert_eq!(p.transcript().last().unwrap(), "2");
    assert_eq!(p.tick(20), 2);
    assert!(!p.is_animating());
    assert_eq!(p.active(), None, "highlight clears once the walk finishes");
}

#[test]
fn late_ticks_apply_one_due_step_at_a_time() {
    let mut tree = Tree::new(TreeKind::Bst);
    tree.insert_now(20);
    tree.insert_now(10);
    let mut p = Player::new(tree).with_delay_ms(10);
    assert!(p.insert(5, 0));

    // However late the tick, visits still land one per tick so every
    // highlight gets a frame.
    assert_eq!(p.tick(1_000), 1);
    assert_eq!(p.tick(2_000), 1);
    assert_eq!(p.tick(3_000), 1);
    assert!(!p.is_animating());
}

#[test]
fn set_delay_takes_effect_for_subsequent_steps() {
    let mut tree = Tree::new(TreeKind::Bst);
    tree.insert_now(20);
    tree.insert_now(10);
    let mut p = Player::new(tree).with_delay_ms(100);
    assert!(p.insert(5, 0));

    assert_eq!(p.tick(0), 1); // visit 20, next due at 50
    p.set_delay_ms(2);
    assert_eq!(p.tick(49), 0, "the in-flight dwell is unchanged");
    assert_eq!(p.tick(50), 1); // visit 10, next due at 51
    assert_eq!(p.tick(51), 1);
    assert!(!p.is_animating());
}

#[test]
fn clear_resets_tree_transcript_and_highlight() {
    let mut tree = Tree::new(TreeKind::Avl);
    tree.insert_now(1);
    let mut p = Player::new(tree).with_delay_ms(10);
    assert!(p.insert(2, 0));
    let mut now = 0;
    while p.is_animating() {
        p.tick(now);
        now += 1;
    }
    assert!(!p.transcript().is_empty());

    assert!(p.clear());
    assert!(p.tree().is_empty());
    assert!(p.transcript().is_empty());
    assert_eq!(p.active(), None);
}

#[test]
fn replay_applies_a_whole_sequence_immediately() {
    let mut tree = Tree::new(TreeKind::Avl);
    let steps = tree.insert_steps(7);
    let transcript = replay(&mut tree, steps);
    assert_eq!(transcript, ["Inserted 7"]);
    assert_eq!(tree.len(), 1);

    let steps = tree.delete_steps(99);
    let transcript = replay(&mut tree, steps);
    assert_eq!(transcript, ["Value 99 not found"]);
    assert_eq!(tree.len(), 1);
}
