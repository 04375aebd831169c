use avl::interface::*;
use avl::shared_string_writer::SharedStringWriter;
use avl::tree::*;
use avl::verify::*;

#[cfg(test)]
mod tests {
    use super::*;

    use expect_test::expect;

    fn build(keys: &[i32]) -> AvlTree {
        let mut tree = AvlTree::new();
        for &k in keys {
            tree.add(k);
        }
        tree
    }

    fn root_data<T: AvlInterface>(tree: &T) -> Option<i32> {
        tree.root_node().map(|n| n.data())
    }

    #[test]
    fn insert_ascending_three_rotates_left() {
        let tree = build(&[10, 20, 30]);
        assert_eq!(in_order(tree.root_node()), vec![10, 20, 30]);
        assert_eq!(root_data(&tree), Some(20));
    }

    #[test]
    fn insert_zig_zag_rotates_twice() {
        let tree = build(&[30, 10, 20]);
        assert_eq!(root_data(&tree), Some(20));
        assert_eq!(check(tree.root_node()), Ok(3));
    }

    #[test]
    fn insert_one_to_seven() {
        let tree = build(&[1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(root_data(&tree), Some(4));
        assert_eq!(true_height(tree.root_node()), 3);
        assert_eq!(check(tree.root_node()), Ok(7));
    }

    #[test]
    fn remove_root_with_two_children_uses_predecessor() {
        let mut tree = build(&[5, 3, 8, 1, 4, 7, 9]);
        assert!(tree.remove(5));
        assert_eq!(root_data(&tree), Some(4));
        assert_eq!(in_order(tree.root_node()), vec![1, 3, 4, 7, 8, 9]);
        assert_eq!(check(tree.root_node()), Ok(6));
    }

    #[test]
    fn add_twice() {
        let mut tree = AvlTree::new();
        assert!(tree.add(5));
        assert_eq!(tree.len(), 1);
        assert!(!tree.add(5));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn remove_missing_leaves_tree_unchanged() {
        let mut tree = build(&[1, 2, 3]);
        let before = in_order(tree.root_node());
        assert!(!tree.remove(99));
        assert_eq!(in_order(tree.root_node()), before);
        assert_eq!(check(tree.root_node()), Ok(3));
    }

    #[test]
    fn clear_then_root_is_empty() {
        let mut tree = AvlTree::new();
        tree.clear();
        assert!(tree.root_node().is_none());
        let mut tree = build(&[3, 1, 2]);
        tree.clear();
        assert!(tree.root_node().is_none());
        assert!(tree.is_empty());
        assert!(!tree.contains(2));
    }

    #[test]
    fn node_heights_match_traversal() {
        let tree = build(&[50, 20, 80, 10, 30, 70, 90, 5, 25, 35, 60, 75]);
        fn walk(node: Option<avl::node::NodeRef<'_>>) {
            if let Some(node) = node {
                assert_eq!(node.height(), true_height(Some(node)));
                assert_eq!(node.left_height(), true_height(node.left_child()));
                assert_eq!(node.right_height(), true_height(node.right_child()));
                walk(node.left_child());
                walk(node.right_child());
            }
        }
        walk(tree.root_node());
    }

    #[test]
    fn drive_through_interface() {
        fn exercise<T: AvlInterface>(tree: &mut T) -> Vec<i32> {
            for k in [8, 4, 12, 2, 6, 10, 14, 1] {
                assert!(tree.add(k));
            }
            assert!(tree.remove(12));
            assert!(!tree.remove(12));
            in_order(tree.root_node())
        }
        let mut tree = AvlTreeDebug::new_with_debug_writer(Some(String::new()));
        assert_eq!(exercise(&mut tree), vec![1, 2, 4, 6, 8, 10, 14]);
        AvlInterface::clear(&mut tree);
        assert!(AvlInterface::root_node(&tree).is_none());
    }

    #[test]
    fn debug_trace() {
        let writer = SharedStringWriter::new();
        let mut tree = AvlTreeDebug::new_with_debug_writer(Some(writer.clone()));
        tree.add(10);
        tree.add(20);
        tree.add(30);
        tree.add(20);
        tree.remove(20);
        tree.remove(99);
        tree.clear();
        let expect = expect![[r#"
            add 10
            add 20
            add 30
            10 is unbalanced (0/2), rotating RightRight
            add 20
            20 already present
            remove 20
            replacing 20 with predecessor 10
            remove 99
            99 not present
            clear
        "#]];
        expect.assert_eq(&writer.take());
        assert!(writer.borrow().is_empty());
    }

    #[test]
    fn debug_trace_double_rotations() {
        let writer = SharedStringWriter::new();
        let mut tree = AvlTreeDebug::new_with_debug_writer(Some(writer.clone()));
        for k in [30, 10, 20] {
            tree.add(k);
        }
        writer.take();
        tree.clear();
        for k in [10, 30, 20] {
            tree.add(k);
        }
        let expect = expect![[r#"
            clear
            add 10
            add 30
            add 20
            10 is unbalanced (0/2), rotating RightLeft
        "#]];
        expect.assert_eq(&writer.borrow());
    }

    #[test]
    fn quiet_tree_writes_nothing() {
        let writer = SharedStringWriter::new();
        let mut tree = AvlTree::new_with_debug_writer(Some(writer.clone()));
        for k in 1..=10 {
            tree.add(k);
        }
        tree.remove(4);
        assert_eq!(writer.borrow().as_str(), "");
    }
}
