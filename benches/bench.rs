use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use ordtree::{avl, bst, OrderedTree};

#[derive(Clone)]
enum TreeEnum<K> {
    Unbalanced(bst::Tree<K>),
    Balanced(avl::Tree<K>),
}

impl<K: Ord> TreeEnum<K> {
    fn contains(&self, k: &K) -> bool {
        match self {
            Self::Unbalanced(t) => t.contains(k),
            Self::Balanced(t) => t.contains(k),
        }
    }

    fn insert(&mut self, k: K) {
        match self {
            Self::Unbalanced(t) => t.insert(k),
            Self::Balanced(t) => t.insert(k),
        }
    }

    fn delete(&mut self, k: &K) {
        match self {
            Self::Unbalanced(t) => {
                t.delete(k);
            }
            Self::Balanced(t) => {
                t.delete(k);
            }
        }
    }
}

/// Helper to bench a function on both trees.
/// It creates a group for the given name and closure and runs tests for various sizes of trees
/// built from sorted keys, which is the worst case for the unbalanced tree.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&mut TreeEnum<i32>, i32)) {
    let mut group = c.benchmark_group(name);

    for num_levels in [3, 7, 11] {
        let num_nodes = 2usize.pow(num_levels as u32) - 1;
        let largest_element_in_tree = num_nodes as i32 - 1;

        let tree_tests = [
            ("bst", TreeEnum::Unbalanced((0..num_nodes as i32).collect())),
            ("avl", TreeEnum::Balanced((0..num_nodes as i32).collect())),
        ];
        for (name, tree) in tree_tests {
            let id = BenchmarkId::new(name, largest_element_in_tree);

            group.bench_function(id, |b| {
                b.iter_custom(|iters| {
                    let mut time = std::time::Duration::ZERO;
                    for _ in 0..iters {
                        let mut tree = black_box(tree.clone());
                        let instant = std::time::Instant::now();
                        f(&mut tree, black_box(largest_element_in_tree));
                        let elapsed = instant.elapsed();
                        time += elapsed;
                    }
                    time
                })
            });
        }
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "search", |tree, i| {
        let _found = black_box(tree.contains(&i));
    });
    bench_helper(c, "delete", |tree, i| {
        tree.delete(&i);
    });

    bench_helper(c, "insert", |tree, i| {
        tree.insert(i + 1);
    });

    bench_helper(c, "search-miss", |tree, i| {
        let _found = black_box(tree.contains(&(i + 1)));
    });
    bench_helper(c, "delete-miss", |tree, i| {
        tree.delete(&(i + 1));
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
