// benches/extract.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use boxscan::extract;

/// Synthetic two-block sheet with per-column noise, roughly what one
/// recognition pass over a phone photo produces.
fn sample_sheet() -> String {
    let mut s = String::new();
    for block in 0..2 {
        s.push_str("PLAYER ");
        for i in 0..5 {
            s.push_str(&format!("•Player{}_{} ", block, i));
        }
        s.push_str("TOTAL\n");
        for marker in ["PTS", "REB", "AST", "STL", "BLK", "PF", "TO"] {
            s.push_str(marker);
            s.push_str(" 12 ## 7 3 9 4 35 %\n");
        }
        for marker in ["FG", "3PT", "FT"] {
            s.push_str(marker);
            s.push_str(" 5/9 2/4 == 1/3 4/7 0/2 12/25\n");
        }
    }
    s
}

fn bench_extract(c: &mut Criterion) {
    let doc = sample_sheet();

    c.bench_function("box_score_full_frame", |b| {
        b.iter(|| {
            let records = extract::box_score(black_box(&doc));
            black_box(records.len())
        })
    });

    c.bench_function("box_score_rejected_frame", |b| {
        // Strip one marker so the frame gate fires; the cost of the
        // failure path matters because the GUI calls it on every click.
        let broken = doc.replace("STL", "SXL");
        b.iter(|| {
            let records = extract::box_score(black_box(&broken));
            black_box(records.len())
        })
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
