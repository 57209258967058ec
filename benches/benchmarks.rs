criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        rolling_ten_dice,
        taking_free_bacon,
        validating_composite_strategy,
        playing_baseline_game,
        estimating_win_rate,
}

use hog::*;

fn rolling_ten_dice(c: &mut criterion::Criterion) {
    let ref mut dice = Fair::from(Sides::Six);
    c.bench_function("roll 10 six-sided dice", |b| {
        b.iter(|| roll_outcome(10, dice))
    });
}

fn taking_free_bacon(c: &mut criterion::Criterion) {
    c.bench_function("score every Free Bacon turn", |b| {
        b.iter(|| (0..SCORE_CEILING).map(bacon_turn).sum::<Score>())
    });
}

fn validating_composite_strategy(c: &mut criterion::Criterion) {
    let ref strategy = Composite::new().expect("composite is valid");
    c.bench_function("validate the composite strategy", |b| {
        b.iter(|| check_strategy(strategy, GOAL))
    });
}

fn playing_baseline_game(c: &mut criterion::Criterion) {
    let ref four = AlwaysRoll::new(BASELINE_ROLLS).expect("baseline is valid");
    let ref mut cup = Cup::fair();
    c.bench_function("play a baseline game", |b| {
        b.iter(|| play(four, four, cup))
    });
}

fn estimating_win_rate(c: &mut criterion::Criterion) {
    let ref composite = Composite::new().expect("composite is valid");
    let ref four = AlwaysRoll::new(BASELINE_ROLLS).expect("baseline is valid");
    c.bench_function("estimate composite win rate over 1K games", |b| {
        b.iter(|| win_rate(composite, four, SAMPLES, SEED))
    });
}
