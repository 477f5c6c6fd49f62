use potsettle::betting::BettingService;
use potsettle::config::{ConfigError, TableConfig};
use potsettle::player::Player;
use potsettle::round::BettingRound;
use potsettle::validator::{Action, ActionError, ActionKind, ActionValidator, RaiseRange};

fn table(stacks: &[i64]) -> (BettingService, Vec<Player>, BettingRound) {
    let service = BettingService::new(TableConfig::new(10, 20).expect("valid blinds"));
    let players = stacks.iter().map(|&c| Player::new(c)).collect();
    (service, players, BettingRound::new())
}

fn post_blinds(service: &BettingService, players: &mut [Player], round: &mut BettingRound) {
    let (sb, rest) = players.split_at_mut(1);
    service.post_small_blind(&mut sb[0], round);
    service.post_big_blind(&mut rest[0], round);
}

#[test]
fn blinds_must_be_positive_and_ordered() {
    assert_eq!(TableConfig::new(0, 20), Err(ConfigError::NonPositiveBlind { small: 0, big: 20 }));
    assert_eq!(TableConfig::new(30, 20), Err(ConfigError::InvertedBlinds { small: 30, big: 20 }));
    let cfg = TableConfig::default();
    assert_eq!((cfg.small_blind(), cfg.big_blind()), (10, 20));
}

#[test]
fn preflop_raise_sizes_follow_the_last_increment() {
    let (s, mut players, mut round) = table(&[1000, 1000, 1000]);
    post_blinds(&s, &mut players, &mut round);
    assert_eq!(round.current_bet, 20);

    let range = ActionValidator::raise_range(&players[2], &round, &s).unwrap();
    assert_eq!(range, RaiseRange { min: 40, max: 1000 });

    s.apply_action(&mut players, 2, Action::RaiseTo(40), &mut round).unwrap();
    assert_eq!(s.minimum_raise(round.current_bet, round.last_raise), 60);

    let err = s.apply_action(&mut players, 0, Action::RaiseTo(50), &mut round).unwrap_err();
    assert_eq!(err, ActionError::RaiseTooSmall { min: 60, got: 50 });

    s.apply_action(&mut players, 0, Action::RaiseTo(60), &mut round).unwrap();
    assert_eq!(round.current_bet, 60);
    assert_eq!(players[0].current_bet, 60);
    assert_eq!(players[0].chips, 940);
    assert_eq!(round.pot, 20 + 40 + 60);
}

#[test]
fn big_blind_keeps_the_option_after_limps() {
    let (s, mut players, mut round) = table(&[1000, 1000, 1000]);
    post_blinds(&s, &mut players, &mut round);

    let out = s.apply_action(&mut players, 2, Action::Call, &mut round).unwrap();
    assert!(!out.round_complete);
    let out = s.apply_action(&mut players, 0, Action::Call, &mut round).unwrap();
    assert_eq!(out.committed, 10);
    assert!(!out.round_complete, "big blind has not acted yet");

    let kinds = ActionValidator::available_actions(&players[1], &round, &s);
    assert!(kinds.contains(&ActionKind::Check));
    assert!(!kinds.contains(&ActionKind::Call));
    let out = s.apply_action(&mut players, 1, Action::Check, &mut round).unwrap();
    assert!(out.round_complete);
    assert_eq!(round.pot, 60);
}

#[test]
fn everyone_folding_to_one_player_ends_the_round() {
    let (s, mut players, mut round) = table(&[1000, 1000, 1000]);
    post_blinds(&s, &mut players, &mut round);
    s.apply_action(&mut players, 2, Action::Fold, &mut round).unwrap();
    let out = s.apply_action(&mut players, 0, Action::Fold, &mut round).unwrap();
    assert!(out.round_complete);
    assert_eq!(players.iter().filter(|p| p.is_active()).count(), 1);
}

#[test]
fn all_in_players_do_not_hold_the_round_open() {
    let (s, mut players, mut round) = table(&[1000, 30, 1000]);
    post_blinds(&s, &mut players, &mut round);
    s.apply_action(&mut players, 2, Action::RaiseTo(100), &mut round).unwrap();
    s.apply_action(&mut players, 0, Action::Call, &mut round).unwrap();
    let out = s.apply_action(&mut players, 1, Action::AllIn, &mut round).unwrap();
    assert_eq!(out.committed, 10);
    assert!(!out.raised);
    assert!(players[1].all_in);
    assert!(out.round_complete);
    assert!(ActionValidator::available_actions(&players[1], &round, &s).is_empty());
}

#[test]
fn rejected_actions_change_nothing() {
    let (s, mut players, mut round) = table(&[1000, 1000, 15]);
    post_blinds(&s, &mut players, &mut round);
    let before = (players.clone(), round.clone());

    let attempts = [
        (2, Action::Call, ActionError::InsufficientChips { needed: 20, available: 15 }),
        (2, Action::Check, ActionError::CannotCheck { to_call: 20 }),
        (0, Action::RaiseTo(2000), ActionError::InsufficientChips { needed: 1990, available: 990 }),
        (5, Action::Fold, ActionError::NoSuchSeat(5)),
        (0, Action::RaiseTo(i64::MIN), ActionError::RaiseTooSmall { min: 40, got: i64::MIN }),
        (
            1,
            Action::RaiseTo(i64::MAX),
            ActionError::InsufficientChips { needed: i64::MAX - 20, available: 980 },
        ),
    ];
    for (seat, action, expected) in attempts {
        let err = s.apply_action(&mut players, seat, action, &mut round).unwrap_err();
        assert_eq!(err, expected, "{action}");
        assert_eq!((&players, &round), (&before.0, &before.1));
    }
}

#[test]
fn postflop_round_starts_clean() {
    let (s, mut players, mut round) = table(&[500, 500]);
    post_blinds(&s, &mut players, &mut round);
    s.apply_action(&mut players, 0, Action::Call, &mut round).unwrap();
    s.apply_action(&mut players, 1, Action::Check, &mut round).unwrap();
    s.start_next_round(&mut players, &mut round);

    assert_eq!(round.current_bet, 0);
    assert_eq!(round.last_raise, 0);
    assert_eq!(round.pot, 40);
    assert!(!s.is_betting_round_complete(&players, &round));

    assert_eq!(s.minimum_raise(0, 0), 20);
    s.apply_action(&mut players, 1, Action::RaiseTo(20), &mut round).unwrap();
    let err = s.apply_action(&mut players, 0, Action::RaiseTo(30), &mut round).unwrap_err();
    assert_eq!(err, ActionError::RaiseTooSmall { min: 40, got: 30 });
}
