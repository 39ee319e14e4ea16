use std::fs;

use blackjack_engine::logger::RoundRecord;

#[test]
fn sim_appends_one_record_per_round() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("rounds.jsonl");
    let path_str = path.to_string_lossy().to_string();

    for _ in 0..2 {
        let code = blackjack_cli::run(
            ["blackjack", "sim", "--rounds", "3", "--seed", "10", "--history", path_str.as_str()],
            &mut Vec::new(),
            &mut Vec::new(),
        );
        assert_eq!(code, 0);
    }

    let content = fs::read_to_string(&path).unwrap();
    let records: Vec<RoundRecord> = content
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(records.len(), 6);
    assert!(records.iter().all(|r| r.ts.is_some()));
    assert!(records[0].round_id.ends_with("-000001"));
    assert!(records[2].round_id.ends_with("-000003"));
    // same seed, same rounds
    assert_eq!(records[0].seed, records[3].seed);
    assert_eq!(records[0].plays, records[3].plays);
    for r in &records {
        assert_eq!(r.human.name, "Player");
        assert_eq!(r.dealer.name, "Dealer");
        assert!(r.plays.len() >= 4);
    }
}

#[test]
fn unwritable_history_path_fails() {
    let dir = tempfile::tempdir().unwrap();
    // a directory cannot be opened as the history file
    let path_str = dir.path().to_string_lossy().to_string();
    let mut err = Vec::new();
    let code = blackjack_cli::run(
        ["blackjack", "sim", "--rounds", "1", "--history", path_str.as_str()],
        &mut Vec::new(),
        &mut err,
    );
    assert_eq!(code, 2);
    assert!(String::from_utf8(err).unwrap().contains("cannot open history file"));
}
