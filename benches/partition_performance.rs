//! Performance benchmarks for team drawing and rating updates

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use team_randomizer::rating::{rank_tier, RatingUpdater};
use team_randomizer::roster::RosterStore;
use team_randomizer::team::TeamPartitioner;
use team_randomizer::types::RosterEntry;

fn create_bench_roster(players: i64) -> RosterStore {
    let entries: Vec<RosterEntry> = (1..=players)
        .map(|id| RosterEntry::new(id, format!("player{}", id), 600 + id * 7))
        .collect();
    let mut roster = RosterStore::from_entries(&entries);
    for id in 1..=players {
        roster.toggle_selected(id);
    }
    roster
}

fn bench_partition(c: &mut Criterion) {
    let mut group = c.benchmark_group("partition");
    for players in [10, 22, 100] {
        let roster = create_bench_roster(players);
        let mut partitioner = TeamPartitioner::seeded(42);
        group.bench_with_input(BenchmarkId::from_parameter(players), &roster, |b, roster| {
            b.iter(|| black_box(partitioner.partition(black_box(roster))))
        });
    }
    group.finish();
}

fn bench_submit_scores(c: &mut Criterion) {
    let roster = create_bench_roster(22);
    let assignment = TeamPartitioner::seeded(7).partition(&roster);
    let updater = RatingUpdater::default();

    c.bench_function("submit_scores_22_players", |b| {
        b.iter_batched(
            || roster.clone(),
            |mut roster| {
                black_box(updater.submit_scores(&mut roster, &assignment, 5.0, 3.0));
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_rank_tier(c: &mut Criterion) {
    c.bench_function("rank_tier_sweep", |b| {
        b.iter(|| {
            (-100..1600)
                .step_by(10)
                .map(|rating| rank_tier(black_box(rating)) as u32)
                .sum::<u32>()
        })
    });
}

criterion_group!(benches, bench_partition, bench_submit_scores, bench_rank_tier);
criterion_main!(benches);
