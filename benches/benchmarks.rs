//! Performance benchmarks for pkgtree

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use pkgtree::output::{ConnectorFormatter, ExportWriter, IndentedFormatter};
use pkgtree::test_utils::TestTree;
use pkgtree::tree::{SortOrder, TreeWalker, WalkerConfig};
use termcolor::{Ansi, NoColor};

/// Build a package-like tree: `packages` folders with `files` sources each,
/// half of them matching `*.java`.
fn create_test_tree(packages: usize, files: usize) -> TestTree {
    let tree = TestTree::new();
    for p in 0..packages {
        for f in 0..files {
            let ext = if f % 2 == 0 { "java" } else { "kt" };
            tree.add_file(
                &format!("src/main/java/pkg{}/sub{}/File{}.{}", p, p % 4, f, ext),
                "",
            );
        }
        tree.add_file(&format!("target/classes/pkg{}/File.class", p), "");
    }
    tree
}

fn bench_indented(c: &mut Criterion) {
    let tree = create_test_tree(50, 20);
    let config = WalkerConfig::default();

    c.bench_function("indented_listing", |b| {
        b.iter(|| {
            let mut out = Ansi::new(Vec::new());
            TreeWalker::new(&config, SortOrder::DirectoriesFirst)
                .walk(black_box(tree.path()), 1, &mut IndentedFormatter::new(&mut out))
                .unwrap();
            out.into_inner()
        })
    });
}

fn bench_connector(c: &mut Criterion) {
    let tree = create_test_tree(50, 20);
    let config = WalkerConfig::default();

    c.bench_function("connector_tree", |b| {
        b.iter(|| {
            let mut out = NoColor::new(Vec::new());
            TreeWalker::new(&config, SortOrder::Lexicographic)
                .walk(black_box(tree.path()), 1, &mut ConnectorFormatter::new(&mut out))
                .unwrap();
            out.into_inner()
        })
    });
}

fn bench_export(c: &mut Criterion) {
    let tree = create_test_tree(50, 20);
    let config = WalkerConfig::default();

    c.bench_function("file_export", |b| {
        b.iter(|| {
            let mut writer = ExportWriter::new(Vec::new());
            writer.write_structure(black_box(tree.path()), &config).unwrap();
            writer.into_inner()
        })
    });
}

criterion_group!(benches, bench_indented, bench_connector, bench_export);
criterion_main!(benches);
