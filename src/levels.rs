use std::path::Path;

pub struct BuiltinLevel {
    pub name: &'static str,
    pub text: &'static str,
}

pub const BUILTIN_LEVEL_COUNT: usize = 5;

pub static BUILTIN_LEVELS: [BuiltinLevel; BUILTIN_LEVEL_COUNT] = [
    BuiltinLevel {
        name: "Peasant's floor",
        text: "  #######
  #  .  #
  #  o  #
### o# ###
#   @   #
###   ###
  #  .  #
  #######",
    },
    BuiltinLevel {
        name: "Peasant Master's floor",
        text: "########
# @o  .#
# o  o #
# .# o #
#..#   #
########",
    },
    BuiltinLevel {
        name: "Middle Manager's Lair",
        text: "       ####
########  ##
#          ###
# @oo ##   ..#
# oo   ##  ..#
#         ####
###########",
    },
    BuiltinLevel {
        name: "VP's Hollow",
        text: "    #####
#####@. #
#   #.**#
#  o #..#
#  #   .#
# oooo *#
#    #  #
#########",
    },
    BuiltinLevel {
        name: "The Grandmaster's Office",
        text: " ########
 #  ##  ####
 # @o   #  ####
 # ##o o   #  #
 # ##  #o o   ###
 # #####  #o o  #
 # #   ####  #o #
 # ##     ####  #
## .##       # ##
#.  .##      # #
#..  .##     # ##
###   .#######  #
  #  # .        #
  ###############",
    },
];

/// Looks up a bundled level by its 1-based number.
pub fn builtin(number: usize) -> Option<&'static BuiltinLevel> {
    number.checked_sub(1).and_then(|index| BUILTIN_LEVELS.get(index))
}

pub fn read_level_file(path: &Path) -> std::io::Result<String> {
    std::fs::read_to_string(path)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::{load, Cell};

    #[test]
    fn builtin_is_one_based() {
        assert!(builtin(0).is_none());
        assert_eq!(builtin(1).map(|l| l.name), Some("Peasant's floor"));
        assert_eq!(builtin(5).map(|l| l.name), Some("The Grandmaster's Office"));
        assert!(builtin(6).is_none());
    }

    #[test]
    fn every_builtin_loads_with_as_many_crates_as_targets() {
        for level in BUILTIN_LEVELS.iter() {
            let (grid, mover) = load(level.text)
                .unwrap_or_else(|err| panic!("{} failed to load: {}", level.name, err));
            assert!(grid[&mover].has_mover(), "{}", level.name);

            let crates = grid.iter().filter(|(_, c)| c.has_crate()).count();
            let targets = grid.iter().filter(|(_, c)| c.is_target()).count();
            assert_eq!(crates, targets, "{}", level.name);
            assert!(grid.iter().any(|(_, c)| c == Cell::Crate), "{} starts solved", level.name);
        }
    }
}
