//! The readiness check: can this lobby start a match?

use skirmish_game::GameState;
use skirmish_protocol::Team;

use crate::lobby::TeamAllocation;

/// Returns `true` if at least two allocated teams with a seat on the map
/// belong to different alliances.
///
/// Teams are walked in index order. A team counts only if the map grants
/// it access *and* its slot is allocated; allocating a team the map does
/// not seat never helps. A counted team with no player record still counts
/// but cannot be the reference alliance; the next counted team takes that
/// role instead.
pub(crate) fn is_ready(allocation: &TeamAllocation, game: &GameState) -> bool {
    let mut counted = 0;
    let mut first_alliance = None;
    let mut alliance_ready = false;

    for team in Team::ALL {
        if !game.map().has_team_access(team) || allocation[team.index()].is_none() {
            continue;
        }
        counted += 1;
        let alliance = game.player(team).map(|p| p.alliance());
        match first_alliance {
            None => first_alliance = alliance,
            Some(first) if alliance != Some(first) => alliance_ready = true,
            Some(_) => {}
        }
    }

    counted >= 2 && alliance_ready
}

#[cfg(test)]
mod tests {
    use skirmish_game::{MapDescriptor, Player, Rule};
    use skirmish_protocol::{Alliance, ParticipantId};

    use super::*;

    fn game_on(map: MapDescriptor, alliances: [u32; 4]) -> GameState {
        let mut game = GameState::new(map, Rule::default());
        for (team, alliance) in Team::ALL.into_iter().zip(alliances) {
            game.player_mut(team).unwrap().set_alliance(Alliance(alliance));
        }
        game
    }

    fn slots(ids: [Option<u64>; 4]) -> TeamAllocation {
        ids.map(|id| id.map(ParticipantId))
    }

    #[test]
    fn test_single_team_is_not_ready() {
        let game = game_on(MapDescriptor::open("m", 8, 8), [1, 2, 3, 4]);
        assert!(!is_ready(&slots([Some(1), None, None, None]), &game));
    }

    #[test]
    fn test_two_alliances_are_ready() {
        let game = game_on(MapDescriptor::open("m", 8, 8), [1, 2, 3, 4]);
        assert!(is_ready(&slots([Some(1), None, None, Some(2)]), &game));
    }

    #[test]
    fn test_one_alliance_is_not_ready() {
        let game = game_on(MapDescriptor::open("m", 8, 8), [1, 1, 1, 1]);
        assert!(!is_ready(&slots([Some(1), Some(2), Some(3), Some(4)]), &game));
    }

    #[test]
    fn test_later_team_breaks_alliance_tie() {
        let game = game_on(MapDescriptor::open("m", 8, 8), [1, 1, 1, 2]);
        assert!(is_ready(&slots([Some(1), Some(2), Some(3), Some(4)]), &game));
    }

    #[test]
    fn test_teams_without_map_access_never_count() {
        let map = MapDescriptor::with_access("m", 8, 8, &[Team::ALL[0], Team::ALL[1]]);
        let game = game_on(map, [1, 2, 3, 4]);
        // Teams 2 and 3 are allocated but unseated; only team 0 counts.
        assert!(!is_ready(&slots([Some(1), None, Some(3), Some(4)]), &game));
    }

    #[test]
    fn test_missing_player_defers_reference_alliance() {
        let map = MapDescriptor::open("m", 8, 8);
        let game = GameState::from_roster(
            map,
            Rule::default(),
            [None, Some(Player::new(Alliance(2))), None, None],
        );
        // Team 1 becomes the reference; nobody after it differs.
        assert!(!is_ready(&slots([Some(1), Some(2), None, None]), &game));
    }

    #[test]
    fn test_missing_player_then_two_alliances_is_ready() {
        let map = MapDescriptor::open("m", 8, 8);
        let game = GameState::from_roster(
            map,
            Rule::default(),
            [
                None,
                Some(Player::new(Alliance(1))),
                Some(Player::new(Alliance(2))),
                None,
            ],
        );
        assert!(is_ready(&slots([Some(1), Some(2), Some(3), None]), &game));
    }
}
