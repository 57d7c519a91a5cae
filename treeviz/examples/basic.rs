// Example: minimal headless usage. Build an AVL tree and lay it out.
use treeviz::{layout, LayoutOptions, Traversal, Tree, TreeKind};

fn main() {
    let mut tree = Tree::new(TreeKind::Avl);
    for v in [50, 30, 70, 20, 40, 60, 80, 10] {
        tree.insert_now(v);
    }

    println!("in-order: {:?}", tree.values_in_order());
    println!(
        "level-order: {:?}",
        tree.traversal(Traversal::LevelOrder)
            .into_iter()
            .map(|id| tree.value(id).unwrap())
            .collect::<Vec<_>>()
    );

    let layout = layout::compute(tree.arena(), &LayoutOptions::default());
    let canvas = layout.canvas();
    println!(
        "canvas: {:.0}x{:.0} (midpoint {:.2})",
        canvas.width(),
        canvas.height(),
        layout.bounds().center_x()
    );
    for id in tree.traversal(Traversal::LevelOrder) {
        let p = layout.position(id).unwrap();
        println!(
            "  node {} at ({:>7.1}, {:>5.1}) h={} bf={}",
            tree.value(id).unwrap(),
            p.x,
            p.y,
            tree.height(id),
            tree.balance_factor(id)
        );
    }
}
