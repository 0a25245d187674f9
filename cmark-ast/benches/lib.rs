use criterion::{criterion_group, criterion_main};

mod text {
    use cmark_ast::text::{normalize_code, unescape, unescape_html};
    use criterion::{BenchmarkId, Criterion, Throughput};

    pub fn pathological_ampersands(c: &mut Criterion) {
        let mut group = c.benchmark_group("pathological_ampersands");
        let mut buf = String::new();
        for i in 1..20 {
            buf.clear();
            // every `&` scans the full entity window before giving up
            buf.push_str(&"&aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa;".repeat(i * 100));
            group.throughput(Throughput::Bytes(buf.len() as u64));
            group.bench_with_input(BenchmarkId::from_parameter(i), &buf, |b, buf| {
                b.iter(|| unescape_html(buf.as_bytes()));
            });
        }
        group.finish();
    }

    pub fn numeric_references(c: &mut Criterion) {
        let mut group = c.benchmark_group("numeric_references");
        let mut buf = String::new();
        for i in 1..10 {
            buf.push_str(&"&#x1F600;&#233;".repeat(i * 100));
            group.throughput(Throughput::Bytes(buf.len() as u64));
            group.bench_with_input(BenchmarkId::from_parameter(i), &buf, |b, buf| {
                b.iter(|| unescape_html(buf.as_bytes()));
            });
        }
        group.finish();
    }

    pub fn backslashes_and_code(c: &mut Criterion) {
        let mut group = c.benchmark_group("backslashes_and_code");
        let mut buf = String::new();
        for i in 1..10 {
            buf.push_str(&"\\*a\\\\ b\r\n".repeat(i * 100));
            group.throughput(Throughput::Bytes(buf.len() as u64));
            group.bench_with_input(BenchmarkId::from_parameter(i), &buf, |b, buf| {
                b.iter(|| {
                    let code = normalize_code(buf.as_bytes()).unwrap();
                    unescape(&code)
                });
            });
        }
        group.finish();
    }
}

mod tree {
    use cmark_ast::{NodeValue, Tree};
    use criterion::{BenchmarkId, Criterion};

    pub fn wide_detach(c: &mut Criterion) {
        let mut group = c.benchmark_group("wide_detach");
        for i in [10usize, 100, 1000] {
            group.bench_with_input(BenchmarkId::from_parameter(i), &i, |b, &n| {
                b.iter(|| {
                    let mut tree = Tree::with_capacity(n + 1);
                    let para = tree.create_node(NodeValue::Paragraph);
                    let texts: Vec<_> = (0..n)
                        .map(|_| {
                            let ix = tree.create_node(NodeValue::SoftBreak);
                            tree.append(para, ix);
                            ix
                        })
                        .collect();
                    for ix in texts.into_iter().step_by(2) {
                        tree.detach(ix);
                    }
                    tree
                });
            });
        }
        group.finish();
    }
}

criterion_group!(
    benches,
    text::pathological_ampersands,
    text::numeric_references,
    text::backslashes_and_code,
    tree::wide_detach
);
criterion_main!(benches);
