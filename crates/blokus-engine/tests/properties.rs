use blokus_engine::{
    BlockKind, BlockSet, Board, GameConfig, Orientation, Placement, Player, Position, can_place,
};
use proptest::prelude::*;

fn player() -> impl Strategy<Value = Player> {
    prop::sample::select(Player::ALL.to_vec())
}

fn block_kind() -> impl Strategy<Value = BlockKind> {
    prop::sample::select(BlockKind::ALL.to_vec())
}

fn orientation() -> impl Strategy<Value = Orientation> {
    prop::sample::select(Orientation::ALL.to_vec())
}

fn board_size() -> impl Strategy<Value = u8> {
    GameConfig::MIN_BOARD_SIZE..=GameConfig::MAX_BOARD_SIZE
}

/// A board where each player has made their opening move with the single.
fn opened_board(size: u8) -> Board {
    let mut board = Board::new(&GameConfig::with_board_size(size)).unwrap();
    for player in Player::ALL {
        let opening = Placement::new(player, BlockKind::Single, player.start_corner(size));
        assert!(board.apply_placement(&opening));
    }
    board
}

proptest! {
    #[test]
    fn off_board_anchor_is_never_legal(
        size in board_size(),
        player in player(),
        kind in block_kind(),
        orientation in orientation(),
        row in -40_i16..40,
        col in -40_i16..40,
    ) {
        let n = i16::from(size);
        prop_assume!(!(0..n).contains(&row) || !(0..n).contains(&col));

        let placement = Placement::new(player, kind, Position::new(row, col))
            .with_orientation(orientation);
        prop_assert!(!can_place(&Board::new(&GameConfig::with_board_size(size)).unwrap(), &placement));
        prop_assert!(!can_place(&opened_board(size), &placement));
    }

    #[test]
    fn legal_placements_stay_on_board(
        player in player(),
        kind in block_kind(),
        orientation in orientation(),
        row in 0_i16..20,
        col in 0_i16..20,
    ) {
        let board = opened_board(20);
        let placement = Placement::new(player, kind, Position::new(row, col))
            .with_orientation(orientation);
        if can_place(&board, &placement) {
            for pos in placement.cells() {
                prop_assert!(pos.is_within(20));
                prop_assert_eq!(board.cell_owner(pos), None);
            }
        }
    }

    #[test]
    fn used_kind_is_never_legal(
        player in player(),
        kind in block_kind(),
        orientation in orientation(),
        row in 0_i16..20,
        col in 0_i16..20,
    ) {
        let mut board = opened_board(20);
        board.mark_block_used(player, kind);

        let placement = Placement::new(player, kind, Position::new(row, col))
            .with_orientation(orientation);
        prop_assert!(!can_place(&board, &placement));
    }

    #[test]
    fn available_and_used_partition_catalog(
        player in player(),
        used in prop::collection::vec(block_kind(), 0..30),
    ) {
        let mut board = Board::standard();
        for &kind in &used {
            board.mark_block_used(player, kind);
        }

        let available = board.available_blocks(player);
        let used_set = board.used_blocks(player);
        prop_assert_eq!(available.len() + used_set.len(), BlockKind::LEN);
        for kind in BlockKind::ALL {
            prop_assert_ne!(available.contains(&kind), used_set.contains(kind));
        }
        prop_assert_eq!(used_set, used.into_iter().collect::<BlockSet>());
    }

    #[test]
    fn can_place_is_pure(
        player in player(),
        kind in block_kind(),
        orientation in orientation(),
        row in -2_i16..22,
        col in -2_i16..22,
    ) {
        let board = opened_board(20);
        let snapshot = board.clone();
        let placement = Placement::new(player, kind, Position::new(row, col))
            .with_orientation(orientation);

        let first = can_place(&board, &placement);
        for _ in 0..3 {
            prop_assert_eq!(can_place(&board, &placement), first);
        }
        prop_assert_eq!(board, snapshot);
    }

    #[test]
    fn placement_string_round_trips(
        player in player(),
        kind in block_kind(),
        orientation in orientation(),
        row in i16::MIN..=i16::MAX,
        col in i16::MIN..=i16::MAX,
    ) {
        let placement = Placement::new(player, kind, Position::new(row, col))
            .with_orientation(orientation);
        let parsed: Placement = placement.to_string().parse().unwrap();
        prop_assert_eq!(parsed, placement);
    }
}
