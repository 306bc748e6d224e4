use std::collections::BTreeSet;

use reflex_agents::{AgentConfig, Mode, ReflexAgent, Role};
use reflex_arena::{ArenaConfig, ArenaState, Layout};
use reflex_core::{
    Action, AgentIndex, AgentObservation, CaptureAgent, Cell, GameState, MazeDistance, ReflexError,
};

const RED: AgentIndex = AgentIndex(0);
const BLUE: AgentIndex = AgentIndex(1);

// One red agent in a corridor; food at x = 12, 16, 18 on the blue half.
const SOLO: &str = "\
%%%%%%%%%%%%%%%%%%%%
%1          .   . .%
%%%%%%%%%%%%%%%%%%%%
";

// Red home is x < 6.
const HALL: &str = "\
%%%%%%%%%%%%
%1   .  .  %
%         2%
%%%%%%%%%%%%
";

fn solo() -> ArenaState {
    ArenaState::new(Layout::parse(SOLO).expect("valid layout"), ArenaConfig::default())
}

fn hall() -> ArenaState {
    ArenaState::new(Layout::parse(HALL).expect("valid layout"), ArenaConfig::default())
}

fn registered(
    index: AgentIndex,
    role: Role,
    seed: u64,
    state: &ArenaState,
) -> ReflexAgent<ArenaState> {
    let config = AgentConfig {
        seed,
        ..AgentConfig::default()
    };
    let mut agent = ReflexAgent::new(index, role, &config);
    agent.register_initial_state(state).expect("register");
    agent
}

#[test]
fn registration_captures_start_and_resources() {
    let agent = registered(RED, Role::Forager, 0, &solo());
    let identity = agent.identity().expect("registered");
    assert_eq!(identity.start, Cell::new(1, 1));
    assert_eq!(identity.initial_resources, 3);
}

#[test]
fn ties_are_broken_at_random() {
    let mut agent = registered(RED, Role::Forager, 7, &solo());
    // East and West both end one step from food.
    let state = solo().with_agent_at(RED, Cell::new(14, 1));

    let mut seen = BTreeSet::new();
    for _ in 0..200 {
        seen.insert(agent.choose_action(&state).expect("action"));
    }
    assert_eq!(agent.mode(), Mode::Foraging);
    assert_eq!(seen, BTreeSet::from([Action::East, Action::West]));
}

#[test]
fn same_seed_same_choices() {
    let state = solo().with_agent_at(RED, Cell::new(14, 1));
    let mut a = registered(RED, Role::Forager, 42, &solo());
    let mut b = registered(RED, Role::Forager, 42, &solo());

    for _ in 0..32 {
        assert_eq!(a.choose_action(&state), b.choose_action(&state));
    }
}

#[test]
fn forager_steps_onto_the_last_food() {
    let mut agent = registered(RED, Role::Forager, 0, &solo());
    let state = solo()
        .with_agent_at(RED, Cell::new(15, 1))
        .with_food([Cell::new(16, 1)]);

    assert_eq!(agent.choose_action(&state), Ok(Action::East));
    assert_eq!(agent.mode(), Mode::Foraging);
}

#[test]
fn forager_heads_home_when_loaded() {
    let state = solo()
        .with_agent_at(RED, Cell::new(14, 1))
        .with_carrying(RED, 4);

    // The greedy pass ties East and West; the Returning override never does.
    for seed in 0..16 {
        let mut agent = registered(RED, Role::Forager, seed, &solo());
        assert_eq!(agent.choose_action(&state), Ok(Action::West));
        assert_eq!(agent.mode(), Mode::Returning);
    }
}

#[test]
fn returning_ignores_the_reverse_penalty() {
    // Heading East, so West is a reverse move.
    let state = solo()
        .with_agent_at(RED, Cell::new(14, 1))
        .with_facing(RED, Action::East)
        .with_carrying(RED, 4);

    let mut homebound = registered(RED, Role::Forager, 0, &solo());
    assert_eq!(homebound.choose_action(&state), Ok(Action::West));
    assert_eq!(homebound.mode(), Mode::Returning);

    // The greedy pass alone does pay for turning back.
    let config = AgentConfig {
        return_home: Some(false),
        ..AgentConfig::default()
    };
    let mut greedy = ReflexAgent::new(RED, Role::Forager, &config);
    greedy.register_initial_state(&solo()).expect("register");
    assert_eq!(greedy.choose_action(&state), Ok(Action::East));
}

#[test]
fn returning_trades_distance_home_for_ghost_clearance() {
    // Red carries food deep in blue territory with a defender right below the way home.
    let mut agent = registered(RED, Role::Forager, 0, &hall());
    let state = hall()
        .with_agent_at(RED, Cell::new(7, 2))
        .with_agent_at(BLUE, Cell::new(6, 1))
        .with_carrying(RED, 4);

    // West: 13 * 4 + 5 home, Stop: 13 * 3 + 6, East: 13 * 2 + 7.
    assert_eq!(agent.choose_action(&state), Ok(Action::East));
    assert_eq!(agent.mode(), Mode::Returning);
}

#[test]
fn returning_can_be_switched_off() {
    let config = AgentConfig {
        return_home: Some(false),
        ..AgentConfig::default()
    };
    let mut agent = ReflexAgent::new(RED, Role::Forager, &config);
    agent.register_initial_state(&solo()).expect("register");
    let state = solo()
        .with_agent_at(RED, Cell::new(15, 1))
        .with_carrying(RED, 4);

    assert_eq!(agent.choose_action(&state), Ok(Action::East));
    assert_eq!(agent.mode(), Mode::Foraging);
}

#[test]
fn sentinel_closes_on_a_visible_intruder() {
    let mut agent = registered(BLUE, Role::Sentinel, 0, &hall());
    let state = hall()
        .with_agent_at(BLUE, Cell::new(8, 1))
        .with_agent_at(RED, Cell::new(6, 1))
        .observed_by(BLUE);

    assert_eq!(agent.choose_action(&state), Ok(Action::West));
    assert_eq!(agent.mode(), Mode::Foraging);
}

#[test]
fn choosing_before_registration_fails() {
    let mut agent: ReflexAgent<ArenaState> =
        ReflexAgent::new(RED, Role::Forager, &AgentConfig::default());
    assert_eq!(
        agent.choose_action(&solo()),
        Err(ReflexError::NotRegistered { agent: RED })
    );
}

#[test]
fn registration_needs_a_position() {
    let mut agent: ReflexAgent<ArenaState> =
        ReflexAgent::new(AgentIndex(5), Role::Sentinel, &AgentConfig::default());
    assert_eq!(
        agent.register_initial_state(&hall()),
        Err(ReflexError::MissingPosition {
            agent: AgentIndex(5)
        })
    );
}

/// Arena state whose engine offers no moves at all.
#[derive(Clone)]
struct Frozen(ArenaState);

impl GameState for Frozen {
    fn legal_actions(&self, _agent: AgentIndex) -> Vec<Action> {
        Vec::new()
    }

    fn generate_successor(&self, agent: AgentIndex, action: Action) -> Self {
        Frozen(self.0.generate_successor(agent, action))
    }

    fn agent_state(&self, agent: AgentIndex) -> AgentObservation {
        self.0.agent_state(agent)
    }

    fn score(&self, agent: AgentIndex) -> f64 {
        self.0.score(agent)
    }

    fn opponents(&self, agent: AgentIndex) -> Vec<AgentIndex> {
        self.0.opponents(agent)
    }

    fn collectible_resources(&self, agent: AgentIndex) -> Vec<Cell> {
        self.0.collectible_resources(agent)
    }

    fn defended_resources(&self, agent: AgentIndex) -> Vec<Cell> {
        self.0.defended_resources(agent)
    }

    fn noisy_opponent_distances(&self, agent: AgentIndex) -> Vec<f64> {
        self.0.noisy_opponent_distances(agent)
    }

    fn distancer(&self) -> &dyn MazeDistance {
        self.0.distancer()
    }
}

#[test]
fn no_legal_actions_is_an_error() {
    let state = Frozen(solo());
    let mut agent: ReflexAgent<Frozen> =
        ReflexAgent::new(RED, Role::Forager, &AgentConfig::default());
    agent.register_initial_state(&state).expect("register");
    assert_eq!(
        agent.choose_action(&state),
        Err(ReflexError::NoLegalActions { agent: RED })
    );
}
