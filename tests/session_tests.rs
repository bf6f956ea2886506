//! Session layer tests: bounded game store and session score.

use dominoes_engine::{
    DominoesGame, EngineConfig, GameId, GameRegistry, ScoreBoard, SessionConfig, Side,
};

fn finish(game: &mut DominoesGame) {
    while !game.is_over() {
        match game.current_player() {
            Side::Ai => {
                game.ai_play().unwrap();
            }
            Side::Player => {
                let moves = game.legal_moves(Side::Player);
                if let Some(mv) = moves.first() {
                    game.play_player_move(mv.tile, mv.end).unwrap();
                } else if game.boneyard_count() > 0 {
                    game.player_draw_until_playable().unwrap();
                } else {
                    game.player_pass().unwrap();
                }
            }
        }
    }
}

#[test]
fn test_registry_never_exceeds_capacity() {
    let mut registry = GameRegistry::with_id_seed(SessionConfig::default().with_max_games(5), 99);
    let mut ids = Vec::new();
    for seed in 0..12 {
        ids.push(registry.create(EngineConfig::default().with_seed(seed)));
        assert!(registry.len() <= registry.capacity());
    }
    assert_eq!(registry.len(), 5);

    // The five newest survive, in creation order.
    assert_eq!(registry.ids().collect::<Vec<_>>(), ids[7..].to_vec());
    for old in &ids[..7] {
        assert!(!registry.contains(*old));
    }
}

#[test]
fn test_active_game_survives_eviction() {
    let mut registry = GameRegistry::with_id_seed(SessionConfig::default().with_max_games(3), 5);
    let active = registry.create(EngineConfig::default().with_seed(1));

    for seed in 2..10 {
        assert!(registry.get_mut(active).is_some());
        registry.create(EngineConfig::default().with_seed(seed));
    }
    assert!(registry.contains(active));
    assert_eq!(registry.len(), 3);
}

#[test]
fn test_capacity_floor() {
    let registry = GameRegistry::new(SessionConfig::default().with_max_games(0));
    assert_eq!(registry.capacity(), 1);
}

#[test]
fn test_score_across_games() {
    let mut registry = GameRegistry::with_id_seed(SessionConfig::default(), 7);
    let mut score = ScoreBoard::new();

    let ids: Vec<GameId> = (0..10)
        .map(|seed| registry.create(EngineConfig::default().with_seed(seed)))
        .collect();

    for &id in &ids {
        let game = registry.get_mut(id).unwrap();
        finish(game);
        let outcome = game.outcome().unwrap();
        assert!(score.record(id, outcome));
        // Reporting the same finished game again is a no-op.
        assert!(!score.record(id, outcome));
    }

    assert_eq!(score.player_wins + score.ai_wins + score.draws, 10);
    assert_eq!(score.draws, 0);
    assert_eq!(score.games_counted(), 10);

    score.reset();
    assert_eq!(score.player_wins, 0);
    assert_eq!(score.ai_wins, 0);
}

#[test]
fn test_game_ids_round_trip_as_text() {
    let mut registry = GameRegistry::with_id_seed(SessionConfig::default(), 3);
    let id = registry.create(EngineConfig::default());
    let text = id.to_string();
    assert_eq!(text.len(), 16);
    let parsed: GameId = text.parse().unwrap();
    assert!(registry.get(parsed).is_some());
}
