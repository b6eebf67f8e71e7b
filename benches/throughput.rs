use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use pathtrie::{Method, Router};

fn example_router() -> Router<&'static str> {
    let mut router = Router::new();
    let routes: &[(&str, Method, &'static str)] = &[
        ("/zoo/animals", Method::Get, "get_animals"),
        ("/zoo/animals", Method::Post, "create_animal"),
        ("/zoo/animals/{int}", Method::Get, "get_animal"),
        ("/zoo/animals/{int}", Method::Put, "update_animal"),
        ("/zoo/animals/{int}", Method::Patch, "patch_animal"),
        ("/zoo/animals/{int}", Method::Delete, "delete_animal"),
        ("/zoo/animals/{int}/toys/{int}", Method::Get, "animal_toy"),
        ("/zoo/animals/{str}", Method::Get, "get_animal_by_name"),
        ("/zoo/{str}/animals/{int}/habitats/{int}/sections/{int}", Method::Get, "habitat_section"),
        ("/inventory/{int}/feeds/{int}/items/{int}/batches/{int}", Method::Post, "post_item_batch"),
        ("/zoo/health", Method::Head, "health_check"),
    ];
    for (path, method, handler) in routes.iter().copied() {
        router.bind(path, method, handler).expect("bind failed");
    }
    router
}

fn bench_match(c: &mut Criterion) {
    let router = example_router();

    c.bench_function("match_literal", |b| {
        b.iter(|| router.match_route(black_box("/zoo/animals"), Method::Get))
    });
    c.bench_function("match_int_wildcard", |b| {
        b.iter(|| router.match_route(black_box("/zoo/animals/123"), Method::Get))
    });
    c.bench_function("match_deep_wildcards", |b| {
        b.iter(|| {
            router.match_route(
                black_box("/zoo/aquatic/animals/7/habitats/3/sections/9"),
                Method::Get,
            )
        })
    });
    c.bench_function("match_miss", |b| {
        b.iter(|| router.match_route(black_box("/nowhere/at/all"), Method::Get))
    });
    c.bench_function("match_wrong_method", |b| {
        b.iter(|| router.match_route(black_box("/zoo/health"), Method::Get))
    });
}

criterion_group!(benches, bench_match);
criterion_main!(benches);
