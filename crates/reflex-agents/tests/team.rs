use reflex_agents::{create_team, AgentConfig, Role, TeamConfig};
use reflex_arena::ArenaState;
use reflex_core::{AgentIndex, CaptureAgent, ReflexError};
use reflex_features::{Feature, Weights, FORAGER_WEIGHTS, SENTINEL_WEIGHTS};

#[test]
fn default_team_is_forager_and_sentinel() {
    let team =
        create_team::<ArenaState>(AgentIndex(0), AgentIndex(2), true, &TeamConfig::default())
            .expect("team");

    assert!(team.is_red());
    let [first, second] = team.agents();
    assert_eq!((first.index(), first.role()), (AgentIndex(0), Role::Forager));
    assert_eq!((second.index(), second.role()), (AgentIndex(2), Role::Sentinel));
    assert_eq!(*first.weights(), FORAGER_WEIGHTS);
    assert_eq!(*second.weights(), SENTINEL_WEIGHTS);
}

#[test]
fn role_names_are_case_insensitive() {
    assert_eq!("SENTINEL".parse::<Role>(), Ok(Role::Sentinel));
    assert_eq!(" Baseline ".parse::<Role>(), Ok(Role::Baseline));
    for role in [Role::Forager, Role::Sentinel, Role::Baseline] {
        assert_eq!(role.name().parse::<Role>(), Ok(role));
    }
}

#[test]
fn unknown_role_is_rejected() {
    let config = TeamConfig {
        second: "goalie".to_string(),
        ..TeamConfig::default()
    };
    let err = create_team::<ArenaState>(AgentIndex(1), AgentIndex(3), false, &config).err();
    assert_eq!(
        err,
        Some(ReflexError::UnknownRole {
            name: "goalie".to_string()
        })
    );
}

#[test]
fn configured_weights_replace_role_defaults() {
    let custom = Weights::ZERO.with(Feature::SuccessorScore, 2.0);
    let config = TeamConfig {
        first: "baseline".to_string(),
        second: "baseline".to_string(),
        agent: AgentConfig {
            weights: Some(custom),
            ..AgentConfig::default()
        },
    };
    let team =
        create_team::<ArenaState>(AgentIndex(0), AgentIndex(2), true, &config).expect("team");
    for agent in team.agents() {
        assert_eq!(*agent.weights(), custom);
    }
}

#[test]
fn only_foragers_head_home_by_default() {
    assert!(Role::Forager.returns_home());
    assert!(!Role::Sentinel.returns_home());
    assert!(!Role::Baseline.returns_home());
}
