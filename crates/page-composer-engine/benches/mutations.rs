use criterion::{Criterion, criterion_group, criterion_main};
use page_composer_engine::editing::{Cmd, ColumnPath, Editor, InsertPosition, mutator};
use page_composer_engine::io;
use page_composer_engine::models::{ElementType, LayoutType, Page};

/// A page with `sections` four-column sections, each column holding a
/// nested column and a handful of elements on both sides of it
fn generate_page(sections: usize) -> Page {
    let mut editor = Editor::new(Page::new());
    for section in 0..sections {
        editor.apply(Cmd::AddSection {
            layout: LayoutType::FourEqual,
        });
        for column in 0..4 {
            let path = ColumnPath::top(section, column);
            editor.apply(Cmd::AddNestedColumn { parent: path });
            for (i, kind) in ElementType::ALL.iter().enumerate() {
                let position = if i % 2 == 0 {
                    InsertPosition::Before
                } else {
                    InsertPosition::After
                };
                editor.apply(Cmd::AddElement {
                    column: path,
                    kind: *kind,
                    position,
                });
            }
        }
    }
    editor.into_page()
}

fn bench_mutations(c: &mut Criterion) {
    let mut group = c.benchmark_group("mutations");
    group.sample_size(10);

    let page = generate_page(20);

    group.bench_function("add_element_before_split", |b| {
        let cmd = Cmd::AddElement {
            column: ColumnPath::top(10, 2),
            kind: ElementType::Gallery,
            position: InsertPosition::Before,
        };
        b.iter(|| std::hint::black_box(mutator::apply(&page, std::hint::black_box(&cmd))));
    });

    group.bench_function("stale_remove", |b| {
        let cmd = Cmd::RemoveElement {
            element: ColumnPath::nested(10, 2, 5).element(0),
        };
        b.iter(|| std::hint::black_box(mutator::apply(&page, std::hint::black_box(&cmd))));
    });

    group.bench_function("json_round_trip", |b| {
        b.iter(|| {
            let json = io::to_json(std::hint::black_box(&page)).unwrap();
            std::hint::black_box(io::from_json(&json).unwrap())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_mutations);
criterion_main!(benches);
