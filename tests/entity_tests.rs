use serde_json::json;

use stats_harvest_lambda_rust::model::{
    BaseStatistic, Entity, Game, Partition, PlayerStatistic, Schedule, TeamStatistic, Update,
};

fn sample_game() -> Game {
    Game {
        game_id: Some("12345".into()),
        home_team: Some("Baltimore".into()),
        away_team: Some("Kansas City".into()),
        home_score: 17,
        ..Game::default()
    }
}

#[test]
fn copy_without_update_is_equal_duplicate() {
    let game = sample_game();
    let copied = game.copy(None);
    assert_eq!(copied, game);

    let copied = game.copy(Some(&Update::new()));
    assert_eq!(copied, game);
}

#[test]
fn copy_is_independent_of_source() {
    let game = sample_game();
    let mut copied = game.copy(None);
    copied.home_team.as_mut().unwrap().push_str(" Ravens");
    assert_eq!(game.home_team.as_deref(), Some("Baltimore"));
    assert_eq!(copied.home_team.as_deref(), Some("Baltimore Ravens"));
}

#[test]
fn copy_applies_truthy_update() {
    let update = Update::new().set("home_team", "Pittsburgh");
    let result = sample_game().copy(Some(&update));
    assert_eq!(result.game_id.as_deref(), Some("12345"));
    assert_eq!(result.home_team.as_deref(), Some("Pittsburgh"));
    assert_eq!(result.away_team.as_deref(), Some("Kansas City"));
}

#[test]
fn copy_ignores_unknown_fields() {
    let update = Update::new().set("home_team", "Pittsburgh").set("chicken", "wing");
    let result = sample_game().copy(Some(&update));
    assert_eq!(result.home_team.as_deref(), Some("Pittsburgh"));

    let row = serde_json::to_value(&result).unwrap();
    assert!(row.get("chicken").is_none(), "row was: {}", row);
}

#[test]
fn copy_skips_falsy_values() {
    let update = Update::new()
        .set("home_team", "Pittsburgh")
        .set("away_team", json!(null))
        .set("home_score", 0)
        .set("game_id", "")
        .set("over_under", 0.0)
        .set("is_conference", false);
    let result = sample_game().copy(Some(&update));
    assert_eq!(result.home_team.as_deref(), Some("Pittsburgh"));
    assert_eq!(result.away_team.as_deref(), Some("Kansas City"));
    assert_eq!(result.home_score, 17);
    assert_eq!(result.game_id.as_deref(), Some("12345"));
    assert!(!result.is_conference);
}

#[test]
fn copy_skips_values_of_the_wrong_type() {
    let update = Update::new().set("home_score", "many").set("away_score", 21);
    let result = sample_game().copy(Some(&update));
    assert_eq!(result.home_score, 17);
    assert_eq!(result.away_score, 21);
}

#[test]
fn partition_update_only_stamps_set_keys() {
    let schedule = Schedule {
        partition: Partition { week: 3, year: 2024, game_type: 2 },
        game_id: "401724075".into(),
        ..Schedule::default()
    };

    let stamped = schedule.copy(Some(&Partition { week: 0, year: 2025, game_type: 0 }.update()));
    assert_eq!(stamped.partition, Partition { week: 3, year: 2025, game_type: 2 });
}

#[test]
fn schedule_stamp_carries_game_id_into_statistics() {
    let schedule = Schedule {
        partition: Partition { week: 5, year: 2024, game_type: 3 },
        game_id: "401713576".into(),
        ..Schedule::default()
    };
    let stat = PlayerStatistic {
        base: BaseStatistic { statistic_name: "points".into(), statistic_value: 22.0, ..BaseStatistic::default() },
        player_name: Some("Syla Swords".into()),
        ..PlayerStatistic::default()
    };

    let stamped = stat.copy(Some(&schedule.stamp()));
    assert_eq!(stamped.base.partition, schedule.partition);
    assert_eq!(stamped.base.game_id.as_deref(), Some("401713576"));
    assert_eq!(stamped.base.statistic_value, 22.0);
    assert_eq!(stamped.player_name.as_deref(), Some("Syla Swords"));
}

#[test]
fn records_flatten_to_scalar_rows() {
    let stat = PlayerStatistic {
        base: BaseStatistic {
            partition: Partition { week: 1, year: 2024, game_type: 2 },
            statistic_name: "minutes".into(),
            statistic_value: 36.0,
            ..BaseStatistic::default()
        },
        player_url: Some("/player/1".into()),
        ..PlayerStatistic::default()
    };

    let row = serde_json::to_value(&stat).unwrap();
    let fields = row.as_object().unwrap();
    assert!(fields.values().all(|v| !v.is_object() && !v.is_array()), "row was: {}", row);
    assert_eq!(row["week"], json!(1));
    assert_eq!(row["statistic_name"], json!("minutes"));
    assert_eq!(row["player_url"], json!("/player/1"));
}

fn sample_team_statistic() -> TeamStatistic {
    TeamStatistic {
        base: BaseStatistic {
            team: Some("South Carolina Gamecocks".into()),
            statistic_name: "assists".into(),
            statistic_value: 12.0,
            ..BaseStatistic::default()
        },
        team_url: Some("/team/2579".into()),
    }
}

#[test]
fn team_statistic_copy_without_update_is_equal_duplicate() {
    let stat = sample_team_statistic();
    assert_eq!(stat.copy(None), stat);
    assert_eq!(stat.copy(Some(&Update::new())), stat);

    let mut copied = stat.copy(None);
    copied.team_url.as_mut().unwrap().push_str("/roster");
    assert_eq!(stat.team_url.as_deref(), Some("/team/2579"));
}

#[test]
fn team_statistic_copy_applies_only_truthy_known_fields() {
    let update = Update::new()
        .set("team_url", "/team/130")
        .set("opponent", "Michigan Wolverines")
        .set("statistic_value", 0)
        .set("team", "")
        .set("chicken", "wing");
    let result = sample_team_statistic().copy(Some(&update));
    assert_eq!(result.team_url.as_deref(), Some("/team/130"));
    assert_eq!(result.base.opponent.as_deref(), Some("Michigan Wolverines"));
    assert_eq!(result.base.statistic_value, 12.0);
    assert_eq!(result.base.team.as_deref(), Some("South Carolina Gamecocks"));
    assert_eq!(result.base.statistic_name, "assists");
}
