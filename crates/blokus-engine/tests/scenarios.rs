use blokus_engine::{
    BlockKind, GameConfig, GameField, Placement, Player, Position, Rotation, calculate_scores,
};

fn single(player: Player, row: i16, col: i16) -> Placement {
    Placement::new(player, BlockKind::Single, Position::new(row, col))
}

/// Blue's straight pentomino covers the whole top row of a 5×5 board,
/// including Yellow's start corner.
fn field_with_yellow_shut_out() -> GameField {
    let mut field = GameField::with_config(&GameConfig::with_board_size(5)).unwrap();
    let wall = Placement::new(Player::Blue, BlockKind::PentoI, Position::new(0, 0));
    assert!(field.place_block(&wall));
    assert_eq!(field.cell_owner(Position::new(0, 4)), Some(Player::Blue));
    field
}

#[test]
fn test_first_single_on_start_corner() {
    let mut field = GameField::new();
    let placement = single(Player::Blue, 0, 0);

    assert!(field.can_place_block(&placement));
    assert!(field.place_block(&placement));
    assert_eq!(field.cell_owner(Position::new(0, 0)), Some(Player::Blue));
}

#[test]
fn test_edge_contact_rejected() {
    let mut field = GameField::new();
    assert!(field.place_block(&single(Player::Blue, 0, 0)));

    let edge = Placement::new(Player::Blue, BlockKind::Domino, Position::new(0, 1));
    assert!(!field.can_place_block(&edge));
    assert!(!field.place_block(&edge));
    assert_eq!(field.cell_owner(Position::new(0, 1)), None);
}

#[test]
fn test_diagonal_contact_accepted() {
    let mut field = GameField::new();
    assert!(field.place_block(&single(Player::Blue, 0, 0)));

    let diagonal = Placement::new(Player::Blue, BlockKind::Domino, Position::new(1, 1));
    assert!(field.can_place_block(&diagonal));
    assert!(field.place_block(&diagonal));
    assert_eq!(field.cell_owner(Position::new(1, 1)), Some(Player::Blue));
    assert_eq!(field.cell_owner(Position::new(1, 2)), Some(Player::Blue));
}

#[test]
fn test_blocked_player_notified_once() {
    let mut field = field_with_yellow_shut_out();

    assert!(!field.needs_blocked_notification(Player::Yellow));
    assert!(!field.can_player_place_any_block(Player::Yellow));
    assert!(field.board().record(Player::Yellow).is_permanently_blocked());

    assert!(field.needs_blocked_notification(Player::Yellow));
    for _ in 0..3 {
        assert!(!field.needs_blocked_notification(Player::Yellow));
    }
    assert!(!field.needs_blocked_notification(Player::Blue));
}

#[test]
fn test_full_set_scores_both_bonuses() {
    let mut field = GameField::new();
    for kind in BlockKind::ALL {
        assert!(field.mark_block_used(Player::Red, kind));
    }
    assert!(field.available_blocks(Player::Red).is_empty());

    let scores = field.calculate_scores();
    assert_eq!(scores[&Player::Red], 89 + 20);
    assert_eq!(scores[&Player::Blue], 0);
    assert_eq!(scores, calculate_scores(field.board()));
}

#[test]
fn test_cached_false_recomputed_after_other_mutation() {
    let mut field = field_with_yellow_shut_out();
    assert!(!field.can_player_place_any_block(Player::Yellow));

    // Red's placement touches nothing of Yellow's, but the whole cache is dropped.
    assert!(field.place_block(&single(Player::Red, 4, 4)));
    assert!(!field.can_player_place_any_block(Player::Yellow));

    // Clearing Yellow's corner reopens the board even though Yellow was
    // already marked permanently blocked.
    assert!(field.remove_block(Position::new(0, 4)));
    assert!(field.can_player_place_any_block(Player::Yellow));
    assert!(field.board().record(Player::Yellow).is_permanently_blocked());
    assert!(field.place_block(&single(Player::Yellow, 0, 4)));
}

#[test]
fn test_game_finishes_when_everyone_is_out_of_blocks() {
    let mut field = GameField::new();
    assert!(!field.is_game_finished());

    for player in Player::ALL {
        for kind in BlockKind::ALL {
            field.mark_block_used(player, kind);
        }
    }
    assert!(field.is_game_finished());
    for player in Player::ALL {
        assert!(field.needs_blocked_notification(player));
    }
}

#[test]
fn test_transform_fixtures() {
    let cells = |placement: Placement| placement.cells().into_iter().collect::<Vec<_>>();
    let at = Position::new(5, 5);

    assert_eq!(
        cells(Placement::new(Player::Blue, BlockKind::Domino, at).with_rotation(Rotation::DEG_90)),
        [Position::new(5, 5), Position::new(6, 5)]
    );
    assert_eq!(
        cells(Placement::new(Player::Blue, BlockKind::Domino, at).with_rotation(Rotation::DEG_180)),
        [Position::new(5, 5), Position::new(5, 4)]
    );
    assert_eq!(
        cells(Placement::new(Player::Blue, BlockKind::TrioAngle, at).with_reflection(true)),
        [Position::new(5, 5), Position::new(5, 6), Position::new(4, 6)]
    );
    assert_eq!(
        cells(
            Placement::new(Player::Blue, BlockKind::TrioAngle, at)
                .with_reflection(true)
                .with_rotation(Rotation::DEG_90)
        ),
        [Position::new(5, 5), Position::new(6, 5), Position::new(6, 6)]
    );
}

#[test]
fn test_placement_string_survives_json() {
    let placement: Placement = "G:PentoW#3m@16,2".parse().unwrap();
    assert_eq!(placement.player(), Player::Green);
    assert_eq!(placement.kind(), BlockKind::PentoW);
    assert_eq!(placement.rotation(), Rotation::DEG_270);
    assert!(placement.is_reflected());

    let json = serde_json::to_string(&placement).unwrap();
    assert_eq!(json, r#""G:PentoW#3m@16,2""#);
    assert_eq!(serde_json::from_str::<Placement>(&json).unwrap(), placement);
}
