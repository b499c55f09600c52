
mod test {
    use Direction::*;
    use crate::core::*;
    use crate::test::test_util::GameTestState;

    fn fire(game: &mut GameTestState) -> bool {
        fire_lasers(&game.game.board, &mut game.game.player)
    }

    #[test]
    fn when_player_in_open_beam_player_dies(){
        let mut game = GameTestState::new(r#"
> . . @ .
"#);
        assert!(fire(&mut game));
        assert!(game.player().dead);
    }

    #[test]
    fn when_wall_blocks_beam_player_survives(){
        let mut game = GameTestState::new(r#"
> . # @ .
"#);
        assert!(!fire(&mut game));
        assert!(!game.player().dead);
    }

    #[test]
    fn when_beam_meets_tunnel_only_aligned_tunnel_passes(){
        let cases = [
            ("> - @", true),
            ("> | @", false),
            ("> . !", false),
            ("> . =", true),
            ("v\n\n!", true),
            ("v\n\n=", false),
        ];
        for (level, dies) in cases {
            let mut game = GameTestState::new(level);
            assert_eq!(fire(&mut game), dies, "in level\n{}", level);
            assert_eq!(game.player().dead, dies, "in level\n{}", level);
        }
    }

    #[test]
    fn when_walking_into_beam_player_dies_and_stays_dead(){
        let level = r#"
> . .

. @ .
"#;
        let mut game = GameTestState::new(level).facing(North);
        assert!(!game.player().dead);

        game.assert_move(North);
        assert!(game.player().dead);

        assert_eq!(game.act(South), GameUpdate::Ignored);
        game.assert_matches(r#"
> @ .

. . .
"#);
    }

    #[test]
    fn when_only_turning_in_beam_lasers_still_fire(){
        let mut game = GameTestState::new(r#"
> . @
"#);
        assert_eq!(game.act(West), GameUpdate::Turned(West));
        assert!(game.player().dead);
    }

    #[test]
    fn when_any_laser_reaches_player_player_dies(){
        for level in ["> # @ . <", "> . @ # <", "> . @ . <"] {
            let mut game = GameTestState::new(level);
            assert!(fire(&mut game), "in level {}", level);
        }
        let mut game = GameTestState::new("> # @ # <");
        assert!(!fire(&mut game));
    }

    #[test]
    fn when_grabbed_box_follows_it_keeps_shielding(){
        let level = r#"
> o @ .
"#;
        let mut game = GameTestState::new(level);
        assert_eq!(game.act(West), GameUpdate::Turned(West));
        assert!(!game.player().dead);

        game.grab();
        game.assert_move(East);
        assert!(!game.player().dead);
        game.assert_matches(r#"
> . o @
"#);
    }

    #[test]
    fn when_shield_pushed_away_player_dies(){
        let level = r#"
. . . .

> . o .

. . @ .
"#;
        let mut game = GameTestState::new(level).facing(North);
        assert!(!fire(&mut game));

        game.assert_move(North);
        game.assert_matches(r#"
. . o .

> . @ .

. . . .
"#);
        assert!(game.player().dead);
        assert_eq!(laser_length(game.game.board(), glam::IVec2::new(0, 1)), 3);
    }
}
