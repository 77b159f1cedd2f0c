use ordtree::TreeNode;
use tracing_subscriber::EnvFilter;

/// Routes the library's `tracing` output through the test harness. Set `RUST_LOG=ordtree=trace`
/// to see every rotation.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Measures the subtree under `node`, returning `None` if any node in it has subtrees whose
/// heights differ by more than one.
#[allow(dead_code)]
pub fn balanced_height<K, N: TreeNode<K>>(node: Option<&N>) -> Option<usize> {
    let Some(n) = node else {
        return Some(0);
    };
    let left = balanced_height(n.left())?;
    let right = balanced_height(n.right())?;
    (left.abs_diff(right) <= 1).then_some(left.max(right) + 1)
}

/// The balance factor of `node`: left height minus right height.
#[allow(dead_code)]
pub fn balance<K, N: TreeNode<K>>(node: &N) -> isize {
    let height = |child: Option<&N>| child.map_or(0, |n| n.height()) as isize;
    height(node.left()) - height(node.right())
}
