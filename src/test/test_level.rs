#[cfg(test)]
mod test {
    use crate::core::*;
    use crate::test::test_util::assert_text_matches;

    #[test]
    fn load_finds_mover_and_dimensions() {
        let (grid, mover) = load("#####\n#@ .#\n#####").unwrap();

        assert_eq!(mover, Position::new(1, 1));
        assert_eq!(grid.size(), Bounds::new(5, 3));
        assert_eq!(grid[&Position::new(1, 3)], Cell::Target);
        assert_eq!(grid[&Position::new(1, 2)], Cell::Floor);
    }

    #[test]
    fn load_pads_ragged_rows_with_floor() {
        let (grid, _) = load("####\n#@\n##").unwrap();

        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.get(&Position::new(1, 3)), Some(Cell::Floor));
        assert_eq!(grid.get(&Position::new(2, 2)), Some(Cell::Floor));
        assert_text_matches("####\n#@  \n##  ", &grid.to_level_string());
    }

    #[test]
    fn load_accepts_mover_on_target() {
        let (grid, mover) = load("#+*o#").unwrap();

        assert_eq!(mover, Position::new(0, 1));
        assert_eq!(grid[&mover], Cell::MoverOnTarget);
        assert_eq!(grid[&Position::new(0, 2)], Cell::CrateOnTarget);
        assert_eq!(grid[&Position::new(0, 3)], Cell::Crate);
        assert_eq!(grid.to_level_string(), "#+*o#");
    }

    #[test]
    fn load_keeps_blank_lines_as_rows() {
        let (grid, mover) = load("\n @\n").unwrap();

        assert_eq!(grid.height(), 2);
        assert_eq!(mover, Position::new(1, 1));
        assert_eq!(grid.get(&Position::new(0, 0)), Some(Cell::Floor));
    }

    #[test]
    fn load_strips_carriage_returns() {
        let (grid, _) = load("###\r\n#@#\r\n###\r\n").unwrap();
        assert_eq!(grid.size(), Bounds::new(3, 3));
        assert_eq!(grid[&Position::new(1, 2)], Cell::Wall);
    }

    #[test]
    fn unknown_symbols_become_floor() {
        let (grid, _) = load("#@x?#").unwrap();
        assert_eq!(grid.to_level_string(), "#@  #");
    }

    #[test]
    fn dollar_sign_is_not_a_crate() {
        let (grid, _) = load("#@$.#").unwrap();

        assert_eq!(grid[&Position::new(0, 2)], Cell::Floor);
        assert_eq!(grid.to_level_string(), "#@ .#");
    }

    #[test]
    fn empty_level_is_invalid() {
        assert_eq!(load(""), Err(InvalidLevel::Empty));
        assert_eq!(load("\n\n"), Err(InvalidLevel::Empty));
    }

    #[test]
    fn level_without_mover_is_invalid() {
        assert_eq!(load("#####\n# o.#\n#####"), Err(InvalidLevel::NoMover));
    }

    #[test]
    fn level_with_two_movers_is_invalid() {
        let result = load("#@ #\n# +#");
        assert_eq!(
            result,
            Err(InvalidLevel::MultipleMovers { first: Position::new(0, 1), second: Position::new(1, 2) })
        );
        let message = result.unwrap_err().to_string();
        assert_eq!(message, "level has more than one mover, at (0, 1) and (1, 2)");
    }
}
