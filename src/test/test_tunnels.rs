
mod test {
    use glam::IVec2;
    use Direction::*;
    use crate::core::*;
    use crate::test::test_util::GameTestState;

    const IN_VERTICAL_TUNNEL: &str = r#"
. . .

. ! .

. . .
"#;

    const IN_HORIZONTAL_TUNNEL: &str = r#"
. . .

. = .

. . .
"#;

    #[test]
    fn when_walking_into_aligned_tunnel_player_enters(){
        let level = r#"
@ - .
"#;
        let mut game = GameTestState::new(level);
        let update = game.act(East);

        assert_eq!(update, GameUpdate::Moved(GameChangeType::PlayerMove));
        game.assert_matches(r#"
. = .
"#);

        game.assert_move(East);
        game.assert_matches(r#"
. - @
"#);
    }

    #[test]
    fn when_moving_across_tunnel_axis_move_is_refused(){
        let cases = [
            (IN_VERTICAL_TUNNEL, [East, West]),
            (IN_HORIZONTAL_TUNNEL, [North, South]),
        ];
        for (level, directions) in cases {
            for direction in directions {
                let mut game = GameTestState::new(level).facing(direction);
                assert_eq!(game.assert_stuck(direction), GameUpdate::Refused, "{:?} in {}", direction, level);

                let mut holding = GameTestState::new(level).facing(direction);
                holding.grab();
                assert_eq!(holding.assert_stuck(direction), GameUpdate::Refused, "{:?} in {}", direction, level);
            }
        }
    }

    #[test]
    fn when_moving_along_tunnel_axis_player_leaves(){
        let mut game = GameTestState::new(IN_VERTICAL_TUNNEL).facing(North);
        game.assert_move(North);

        game.assert_matches(r#"
. @ .

. | .

. . .
"#);
    }

    #[test]
    fn when_tunnel_lies_across_the_move_it_is_pushed_like_a_box(){
        let level = r#"
@ | . .
"#;
        let mut game = GameTestState::new(level);
        let update = game.act(East);

        assert_eq!(update, GameUpdate::Moved(GameChangeType::PlayerAndCellsMove));
        game.assert_matches(r#"
. @ | .
"#);
    }

    #[test]
    fn when_holding_in_tunnel_sideways_move_is_refused(){
        let level = r#"
. . .

o ! .

. . .
"#;
        let mut game = GameTestState::new(level).facing(West);
        assert!(!game.grab());

        assert_eq!(game.assert_stuck(North), GameUpdate::Refused);
        assert_eq!(game.player().position, IVec2::new(1, 1));
        game.assert_matches(level);
    }

    #[test]
    fn when_holding_in_tunnel_forward_push_moves_box(){
        let level = r#"
. = o .
"#;
        let mut game = GameTestState::new(level);
        game.grab();
        game.assert_move(East);

        game.assert_matches(r#"
. - @ o
"#);
    }

    #[test]
    fn when_holding_in_tunnel_pulling_is_refused(){
        let level = r#"
. = o .
"#;
        let mut game = GameTestState::new(level);
        game.grab();

        assert_eq!(game.assert_stuck(West), GameUpdate::Refused);
    }

    #[test]
    fn when_facing_aligned_tunnel_grab_holds_nothing(){
        let level = r#"
@ - o .
"#;
        let mut game = GameTestState::new(level);
        game.grab();
        let update = game.act(East);

        assert_eq!(update, GameUpdate::Moved(GameChangeType::PlayerMove));
        game.assert_matches(r#"
. = o .
"#);
    }

    #[test]
    fn when_backing_into_tunnel_grabbed_box_follows(){
        let level = r#"
- @ o .
"#;
        let mut game = GameTestState::new(level);
        game.grab();
        let update = game.act(West);

        assert_eq!(update, GameUpdate::Moved(GameChangeType::PlayerAndCellsMove));
        game.assert_matches(r#"
= o . .
"#);
    }

    #[test]
    fn when_entering_tunnel_sideways_while_holding_tunnel_is_pushed_too(){
        let level = r#"
@ o

| .

. .
"#;
        let mut game = GameTestState::new(level);
        game.grab();
        game.assert_move(South);

        game.assert_matches(r#"
. .

@ o

| .
"#);
    }

    #[test]
    fn when_entering_tunnel_sideways_blocked_nothing_moves(){
        let level = r#"
@ o

| .
"#;
        let mut game = GameTestState::new(level);
        game.grab();

        assert_eq!(game.assert_stuck(South), GameUpdate::Blocked);
    }

    #[test]
    fn when_holding_empty_floor_across_tunnel_moving_along_it_is_refused(){
        let mut game = GameTestState::new(IN_HORIZONTAL_TUNNEL).facing(North);
        assert!(!game.grab());

        assert_eq!(game.assert_stuck(East), GameUpdate::Refused);
        game.release();
        assert_eq!(game.act(East), GameUpdate::Turned(East));
    }
}
