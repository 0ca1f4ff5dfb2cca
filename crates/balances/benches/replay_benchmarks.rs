//! Replay throughput: how fast a group's full history folds into a snapshot.

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use fairshare_balances::compute_balances;
use fairshare_core::{GroupId, MemberId};
use fairshare_expenses::{ExpenseRecord, NewExpense, SplitInput};
use fairshare_groups::{GroupRoster, Member};

fn build_history(members: usize, records: usize) -> (GroupRoster, Vec<ExpenseRecord>) {
    let roster = GroupRoster::new(
        GroupId::new(),
        (0..members)
            .map(|i| Member::new(MemberId::new(), format!("m{i}")))
            .collect(),
    );
    let ids: Vec<_> = roster.member_ids().collect();
    let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();

    let history = (0..records)
        .map(|i| {
            let payer = ids[i % ids.len()];
            ExpenseRecord::create(
                NewExpense {
                    amount: 100 + (i as i64 % 9000),
                    payer,
                    split: SplitInput::Equal,
                    category: "Food".to_string(),
                    description: "bench".to_string(),
                    date,
                    created_by: payer,
                },
                &roster,
            )
            .unwrap()
        })
        .collect();

    (roster, history)
}

fn bench_replay(c: &mut Criterion) {
    let (roster, history) = build_history(6, 5_000);

    c.bench_function("replay_5k_records_6_members", |b| {
        b.iter(|| compute_balances(black_box(&roster), black_box(&history)).unwrap())
    });
}

criterion_group!(benches, bench_replay);
criterion_main!(benches);
