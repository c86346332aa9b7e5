use serde_json::{Value, json};

use stats_harvest_lambda_rust::extract::player_statistics_from_page;
use stats_harvest_lambda_rust::model::PlayerStatistic;

const SWORDS_URL: &str = "https://www.espn.com/womens-college-basketball/player/_/id/5240185/syla-swords";

fn load_boxscore() -> Value {
    serde_json::from_str(include_str!("boxscore.json")).expect("failed to parse boxscore.json")
}

fn swords<'a>(stats: &'a [PlayerStatistic], name: &str) -> &'a PlayerStatistic {
    stats
        .iter()
        .find(|s| s.player_url.as_deref() == Some(SWORDS_URL) && s.base.statistic_name == name)
        .unwrap_or_else(|| panic!("missing {} for Syla Swords", name))
}

#[test]
fn extracts_player_statistics() {
    let payload = load_boxscore();
    let result = player_statistics_from_page(Some(&payload), "401713576").unwrap();
    assert_eq!(result.len(), 16, "result was: {:?}", result);

    for (name, value) in [("minutes", 36.0), ("fieldGoalsMade", 9.0), ("fieldGoalsAttempted", 19.0), ("points", 22.0)] {
        let stat = swords(&result, name);
        assert_eq!(stat.base.statistic_value, value, "stat was: {}", name);
        assert_eq!(stat.player_name.as_deref(), Some("Syla Swords"));
        assert_eq!(stat.base.team.as_deref(), Some("Michigan Wolverines"));
        assert_eq!(stat.base.opponent.as_deref(), Some("South Carolina Gamecocks"));
    }
}

#[test]
fn every_record_carries_the_game_id() {
    let payload = load_boxscore();
    let result = player_statistics_from_page(Some(&payload), "401713576").unwrap();
    assert!(result.iter().all(|s| s.base.game_id.as_deref() == Some("401713576")));
}

#[test]
fn away_block_comes_first() {
    let payload = load_boxscore();
    let result = player_statistics_from_page(Some(&payload), "401713576").unwrap();
    assert_eq!(result[0].base.team.as_deref(), Some("Michigan Wolverines"));

    let home = result.last().unwrap();
    assert_eq!(home.base.team.as_deref(), Some("South Carolina Gamecocks"));
    assert_eq!(home.base.opponent.as_deref(), Some("Michigan Wolverines"));
    assert_eq!(home.player_name.as_deref(), Some("MiLaysia Fulwiley"));
}

#[test]
fn short_stat_lines_truncate_to_keys() {
    let payload = json!({ "page": { "content": { "gamepackage": { "bxscr": [
        { "tm": { "dspNm": "Away" }, "stats": [{
            "keys": ["minutes", "points", "rebounds"],
            "athlts": [{ "athlt": { "dspNm": "Short Line" }, "stats": ["20", "8"] }]
        }] },
        { "tm": { "dspNm": "Home" }, "stats": [{
            "keys": ["minutes"],
            "athlts": [{ "athlt": { "dspNm": "Long Line" }, "stats": ["30", "12", "5"] }]
        }] }
    ] } } } });

    let result = player_statistics_from_page(Some(&payload), "7").unwrap();
    let names: Vec<(&str, &str)> = result
        .iter()
        .map(|s| (s.player_name.as_deref().unwrap_or_default(), s.base.statistic_name.as_str()))
        .collect();
    assert_eq!(names, vec![("Short Line", "minutes"), ("Short Line", "points"), ("Long Line", "minutes")]);
}

#[test]
fn fewer_than_two_blocks_yields_nothing() {
    let payload = json!({ "page": { "content": { "gamepackage": { "bxscr": [
        { "tm": { "dspNm": "Away" }, "stats": [{ "keys": ["points"], "athlts": [{ "stats": ["4"] }] }] }
    ] } } } });
    assert!(player_statistics_from_page(Some(&payload), "7").unwrap().is_empty());
}

#[test]
fn absent_box_score_yields_nothing() {
    assert!(player_statistics_from_page(None, "7").unwrap().is_empty());
    assert!(player_statistics_from_page(Some(&json!({})), "7").unwrap().is_empty());
    let payload = json!({ "page": { "content": { "gamepackage": { "gmStrp": { "gid": "7" } } } } });
    assert!(player_statistics_from_page(Some(&payload), "7").unwrap().is_empty());
}

#[test]
fn unread_sections_do_not_affect_player_extraction() {
    let payload = json!({ "page": { "content": { "gamepackage": {
        "gmStrp": { "isConferenceGame": "false" },
        "prsdTms": { "home": { "score": "postponed" } },
        "bxscr": [
            { "tm": { "dspNm": "Away" }, "stats": [{ "keys": ["points"], "athlts": [{ "athlt": { "dspNm": "A1" }, "stats": ["4"] }] }] },
            { "tm": { "dspNm": "Home" }, "stats": [{ "keys": ["points"], "athlts": [{ "athlt": { "dspNm": "H1" }, "stats": ["9"] }] }] }
        ]
    } } } });

    let result = player_statistics_from_page(Some(&payload), "7").unwrap();
    assert_eq!(result.len(), 2, "result was: {:?}", result);
    assert_eq!(result[1].player_name.as_deref(), Some("H1"));
    assert_eq!(result[1].base.statistic_value, 9.0);
}

#[test]
fn extraction_does_not_touch_the_payload() {
    let payload = load_boxscore();
    let before = payload.clone();
    let _ = player_statistics_from_page(Some(&payload), "401713576").unwrap();
    assert_eq!(payload, before);
}
