use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use srb_core::{to_ascii_latin, to_cyrillic, to_latin};

const LATIN: &str = "Odjednom Tanjug reče da će nadživeti injekciju. \
    Dodjavola, džangrizava njuška je bila u pravu. \
    Biografiju pošaljite kao Word dokument u docx formatu.";

const CYRILLIC: &str = "Фијуче ветар у шибљу, леди пасаже и куће иза њих и гунђа у оџацима. \
    ЉУДИ, ЈАЗАВАЦ ЏЕФ ТРЧИ ПО ШУМИ ГЛОЂУЋИ НЕКО СУХО ЖБУЊЕ.";

fn paragraph(sentence: &str, repeat: usize) -> String {
    vec![sentence; repeat].join(" ")
}

fn bench_conversions(c: &mut Criterion) {
    // Build the global tables outside the measured loop.
    let _ = to_latin("");

    let mut group = c.benchmark_group("convert");
    for repeat in [1usize, 16, 128] {
        let latin = paragraph(LATIN, repeat);
        let cyrillic = paragraph(CYRILLIC, repeat);

        group.bench_with_input(BenchmarkId::new("to_cyrillic", repeat), &latin, |b, text| {
            b.iter(|| to_cyrillic(text))
        });
        group.bench_with_input(BenchmarkId::new("to_latin", repeat), &cyrillic, |b, text| {
            b.iter(|| to_latin(text))
        });
        group.bench_with_input(
            BenchmarkId::new("to_ascii_latin", repeat),
            &cyrillic,
            |b, text| b.iter(|| to_ascii_latin(text)),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_conversions);
criterion_main!(benches);
