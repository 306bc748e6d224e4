//! Headless matches between two reflex teams on the reference arena.

use reflex_agents::{create_team, ReflexAgent, TeamConfig};
use reflex_arena::{ArenaConfig, ArenaState, Layout};
use reflex_core::rng::derive_seed;
use reflex_core::{AgentIndex, CaptureAgent, GameState, ReflexError};
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MatchConfig {
    /// Drives arena noise and both teams' tie-breaks.
    pub seed: u64,
    /// Arena rules; its `seed` is replaced by the match seed.
    pub arena: ArenaConfig,
    pub red: TeamConfig,
    pub blue: TeamConfig,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            arena: ArenaConfig::default(),
            red: TeamConfig::default(),
            blue: TeamConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Outcome {
    Red,
    Blue,
    Tie,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MatchResult {
    pub seed: u64,
    pub outcome: Outcome,
    /// Delivered-food difference, red minus blue.
    pub red_score: i64,
    pub red_returned: u32,
    pub blue_returned: u32,
    /// Agent moves played, counting every agent separately.
    pub moves: u32,
    /// Choices the engine refused; each was replaced by a legal move.
    pub illegal_actions: u32,
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SeriesSummary {
    pub games_played: u32,
    pub red_wins: u32,
    pub blue_wins: u32,
    pub ties: u32,
    pub avg_red_score: f64,
    pub avg_moves: f64,
    pub results: Vec<MatchResult>,
}

#[derive(Debug, Error)]
pub enum MatchError {
    #[error("layout has {found} agent starts, a match needs exactly 4")]
    WrongAgentCount { found: usize },
    #[error(transparent)]
    Agent(#[from] ReflexError),
}

fn seeded(team: &TeamConfig, match_seed: u64, side: u64) -> TeamConfig {
    let mut team = team.clone();
    team.agent.seed = derive_seed(match_seed, side, team.agent.seed);
    team
}

/// Play one game to completion. Agents move in slot order and each sees only what its team can
/// observe.
pub fn run_match(layout: Layout, config: &MatchConfig) -> Result<MatchResult, MatchError> {
    let found = layout.num_agents();
    if found != 4 {
        return Err(MatchError::WrongAgentCount { found });
    }

    let arena = ArenaConfig {
        seed: config.seed,
        ..config.arena
    };
    let mut state = ArenaState::new(layout, arena);

    let red = create_team::<ArenaState>(
        AgentIndex(0),
        AgentIndex(2),
        true,
        &seeded(&config.red, config.seed, 0),
    )?;
    let blue = create_team::<ArenaState>(
        AgentIndex(1),
        AgentIndex(3),
        false,
        &seeded(&config.blue, config.seed, 1),
    )?;
    let mut agents: Vec<ReflexAgent<ArenaState>> = red
        .into_agents()
        .into_iter()
        .chain(blue.into_agents())
        .collect();
    agents.sort_by_key(|a| a.index());

    for agent in agents.iter_mut() {
        agent.register_initial_state(&state.observed_by(agent.index()))?;
    }

    let mut illegal_actions = 0;
    'game: loop {
        for agent in agents.iter_mut() {
            if state.is_over() {
                break 'game;
            }
            let index = agent.index();
            let chosen = agent.choose_action(&state.observed_by(index))?;
            let legal = state.legal_actions(index);
            let action = if legal.contains(&chosen) {
                chosen
            } else {
                let Some(&fallback) = legal.first() else {
                    return Err(ReflexError::NoLegalActions { agent: index }.into());
                };
                tracing::warn!(agent = %index, %chosen, %fallback, "illegal action replaced");
                illegal_actions += 1;
                fallback
            };
            state = state.generate_successor(index, action);
        }
    }

    let red_score = state.red_score();
    let outcome = match red_score {
        s if s > 0 => Outcome::Red,
        s if s < 0 => Outcome::Blue,
        _ => Outcome::Tie,
    };
    let result = MatchResult {
        seed: config.seed,
        outcome,
        red_score,
        red_returned: state.returned_by_team(true),
        blue_returned: state.returned_by_team(false),
        moves: state.moves(),
        illegal_actions,
    };
    tracing::info!(
        seed = result.seed,
        outcome = ?result.outcome,
        red_score,
        moves = result.moves,
        "match finished"
    );
    Ok(result)
}

/// Play one game per seed on copies of `layout`.
pub fn run_series(
    layout: &Layout,
    config: &MatchConfig,
    seeds: impl IntoIterator<Item = u64>,
) -> Result<SeriesSummary, MatchError> {
    let mut summary = SeriesSummary::default();
    for seed in seeds {
        let game = MatchConfig {
            seed,
            ..config.clone()
        };
        let result = run_match(layout.clone(), &game)?;
        match result.outcome {
            Outcome::Red => summary.red_wins += 1,
            Outcome::Blue => summary.blue_wins += 1,
            Outcome::Tie => summary.ties += 1,
        }
        summary.results.push(result);
    }

    summary.games_played = summary.results.len() as u32;
    if !summary.results.is_empty() {
        let n = summary.results.len() as f64;
        summary.avg_red_score =
            summary.results.iter().map(|r| r.red_score as f64).sum::<f64>() / n;
        summary.avg_moves = summary.results.iter().map(|r| r.moves as f64).sum::<f64>() / n;
    }
    Ok(summary)
}
