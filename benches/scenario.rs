// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use proteus::model::{StrategyId, Workspace};
use proteus::query::fuzzy_rank;

mod fixtures;
mod profiler;

// Benchmark identity (keep stable):
// - Group name in this file: `workspace.scenario`
// - Case IDs: `branch_medium`, `branch_large`, `fuzzy_rank_large`.
fn benches_scenario(c: &mut Criterion) {
    let mut group = c.benchmark_group("workspace.scenario");

    for (case_id, case) in [
        ("branch_medium", fixtures::Case::Medium),
        ("branch_large", fixtures::Case::LargeDense),
    ] {
        let baseline = fixtures::structure(case);
        group.bench_function(case_id, {
            let baseline = baseline.clone();
            move |b| {
                b.iter_batched(
                    || Workspace::new(baseline.clone()),
                    |mut workspace| {
                        let strategy_id =
                            StrategyId::new("bench_strategy").expect("strategy id");
                        workspace.create_strategy(strategy_id, "Bench Strategy");
                        workspace
                            .active_graph_mut()
                            .remove_entity(&fixtures::entity_id(0));
                        workspace.set_comparing(true);
                        let baseline_entities = workspace.active_graph().entities().len();
                        workspace.set_comparing(false);
                        let strategy_entities = workspace.active_graph().entities().len();
                        black_box(baseline_entities + strategy_entities)
                    },
                    BatchSize::SmallInput,
                )
            }
        });
    }

    let graph = fixtures::structure(fixtures::Case::LargeDense);
    group.bench_function("fuzzy_rank_large", |b| {
        b.iter(|| {
            let ranked = fuzzy_rank(black_box(&graph), black_box("bench entity 000400"));
            black_box(ranked.len())
        })
    });

    group.finish();
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_scenario
}
criterion_main!(benches);
