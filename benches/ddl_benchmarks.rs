use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rustyddl::{Column, ColumnType, Dialect, EnumItem, Enums, Index, Table, Tag, MYSQL_TIERS};

fn wide_table(width: usize) -> Table {
    let mut table = Table::new("bench").with_comment("benchmark table");
    table
        .add_column(
            Column::builder()
                .name("id")
                .column_type(ColumnType::Int)
                .unsigned(true)
                .auto_increment(true)
                .primary(true)
                .build(),
        )
        .unwrap();
    for i in 0..width {
        let column = match i % 4 {
            0 => Column::builder().name(format!("s{}", i)).max_length((i as u64 + 1) * 40).build(),
            1 => Column::builder()
                .name(format!("n{}", i))
                .column_type(ColumnType::Int)
                .maximum(1 << (i % 60))
                .build(),
            2 => Column::builder()
                .name(format!("e{}", i))
                .enums(Enums::new(vec![
                    EnumItem::new(1i64, "on").as_default(),
                    EnumItem::new(2i64, "off"),
                ]))
                .build(),
            _ => Column::builder()
                .name(format!("t{}", i))
                .tags(vec![Tag::UpdatedAt])
                .build(),
        };
        table.add_column(column).unwrap();
    }
    let first = table.columns[1].clone();
    table.add_index(Index::unique(vec![first])).unwrap();
    table
}

fn bench_tier_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("tiers");

    group.bench_function("string", |b| {
        b.iter(|| black_box(MYSQL_TIERS.string.get_by_upper_limit_with_default(black_box(1_000))));
    });
    group.bench_function("unsigned_int", |b| {
        b.iter(|| {
            black_box(
                MYSQL_TIERS
                    .unsigned_int
                    .get_by_upper_limit_with_default(black_box(70_000)),
            )
        });
    });

    group.finish();
}

fn bench_create_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("create_table");

    for width in [8usize, 64, 256] {
        let table = wide_table(width);
        group.bench_with_input(BenchmarkId::from_parameter(width), &table, |b, table| {
            b.iter(|| black_box(table.create_ddl().unwrap()));
        });
    }

    group.finish();
}

fn bench_column(c: &mut Criterion) {
    let column = Column::builder()
        .name("status")
        .comment("state")
        .enums(Enums::new(vec![EnumItem::new(1i64, "draft"), EnumItem::new(2i64, "published")]))
        .build();

    c.bench_function("column/enum", |b| {
        b.iter(|| black_box(column.ddl(Dialect::Mysql).unwrap()));
    });
}

criterion_group!(benches, bench_tier_lookup, bench_create_table, bench_column);
criterion_main!(benches);
