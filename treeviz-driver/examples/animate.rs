use treeviz::{Traversal, Tree, TreeKind};
use treeviz_driver::Player;

fn main() {
    // Example: a frame loop driving step playback without holding any UI
    // objects.
    //
    // An adapter would:
    // - start an operation (insert/delete/traverse) on user input
    // - call tick(now_ms) in a frame loop / timer
    // - re-render whenever tick reports applied steps, highlighting active()
    let mut tree = Tree::new(TreeKind::Avl);
    for v in [30, 20, 10, 40, 50] {
        tree.insert_now(v);
    }

    let mut p = Player::new(tree).with_delay_ms(120);
    assert!(p.traverse(Traversal::InOrder, 0));

    let mut now_ms = 0u64;
    while p.is_animating() {
        now_ms += 16;
        if p.tick(now_ms) > 0 {
            let active = p
                .active()
                .and_then(|id| p.tree().value(id))
                .map_or("-".to_owned(), |v| v.to_string());
            println!(
                "t={now_ms:>5} active={active:>3} log={:?}",
                p.transcript().last()
            );
        }
    }

    assert!(p.insert(25, now_ms));
    while p.is_animating() {
        now_ms += 16;
        p.tick(now_ms);
    }
    println!("after insert: {:?}", p.tree().values_in_order());
    println!("transcript: {:#?}", p.transcript());
}
