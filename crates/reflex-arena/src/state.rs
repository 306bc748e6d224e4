use std::collections::BTreeSet;
use std::sync::Arc;

use reflex_core::rng::derive_seed;
use reflex_core::{
    Action, AgentId, AgentIndex, AgentObservation, Cell, DeterministicRng, GameState,
    MazeDistance, Position, SplitMix64,
};
use reflex_nav::MazeDistancer;

use crate::{ArenaConfig, Layout};

/// Agents closer than this (Manhattan, in cells) collide.
const COLLISION_TOLERANCE: f64 = 0.7;

#[derive(Debug, Clone)]
struct Body {
    position: Position,
    facing: Action,
    scared_timer: u32,
    carrying: u32,
    /// Cells eaten since the last delivery; put back on the board if the carrier is captured.
    eaten: Vec<Cell>,
    returned: u32,
}

impl Body {
    fn at(cell: Cell) -> Self {
        Self {
            position: cell.into(),
            facing: Action::Stop,
            scared_timer: 0,
            carrying: 0,
            eaten: Vec::new(),
            returned: 0,
        }
    }
}

/// Full capture game state. Cheap to clone: the static map is shared.
///
/// States produced by [`ArenaState::observed_by`] hide opponents outside the observing team's
/// sight range; every other query answers truthfully.
#[derive(Debug, Clone)]
pub struct ArenaState {
    layout: Arc<Layout>,
    distancer: Arc<MazeDistancer>,
    config: ArenaConfig,
    food: BTreeSet<Cell>,
    capsules: BTreeSet<Cell>,
    bodies: Vec<Body>,
    hidden: BTreeSet<AgentIndex>,
    /// Red-positive.
    score: i64,
    moves: u32,
    food_per_side: (usize, usize),
}

impl ArenaState {
    pub fn new(layout: Layout, config: ArenaConfig) -> Self {
        let distancer = MazeDistancer::new(layout.maze().clone());
        let bodies = layout.starts().iter().copied().map(Body::at).collect();
        let red_food = layout
            .food()
            .iter()
            .filter(|c| layout.is_red_side(**c))
            .count();
        let blue_food = layout.food().len() - red_food;

        Self {
            food: layout.food().clone(),
            capsules: layout.capsules().clone(),
            layout: Arc::new(layout),
            distancer: Arc::new(distancer),
            config,
            bodies,
            hidden: BTreeSet::new(),
            score: 0,
            moves: 0,
            food_per_side: (red_food, blue_food),
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    pub fn num_agents(&self) -> usize {
        self.bodies.len()
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Delivered-food difference, red minus blue.
    pub fn red_score(&self) -> i64 {
        self.score
    }

    pub fn food(&self) -> &BTreeSet<Cell> {
        &self.food
    }

    pub fn capsules(&self) -> &BTreeSet<Cell> {
        &self.capsules
    }

    pub fn returned_by_team(&self, red: bool) -> u32 {
        self.bodies
            .iter()
            .enumerate()
            .filter(|(i, _)| AgentIndex(*i).is_red() == red)
            .map(|(_, b)| b.returned)
            .sum()
    }

    pub fn is_over(&self) -> bool {
        let (red_food, blue_food) = self.food_per_side;
        let delivered_all = |returned: u32, available: usize| {
            let target = available.saturating_sub(self.config.min_food);
            target > 0 && returned as usize >= target
        };
        self.moves >= self.config.max_moves
            || delivered_all(self.returned_by_team(true), blue_food)
            || delivered_all(self.returned_by_team(false), red_food)
    }

    /// The state as `observer`'s team perceives it: opponents farther than the sight range from
    /// every teammate lose their position.
    pub fn observed_by(&self, observer: AgentIndex) -> ArenaState {
        let mut seen = self.clone();
        let team: Vec<Position> = self
            .indices()
            .filter(|a| a.is_teammate(observer))
            .filter_map(|a| self.bodies.get(a.0).map(|b| b.position))
            .collect();

        seen.hidden = self
            .indices()
            .filter(|a| !a.is_teammate(observer))
            .filter(|a| {
                let Some(body) = self.bodies.get(a.0) else {
                    return true;
                };
                team.iter()
                    .all(|p| p.manhattan(body.position) > self.config.sight_range as f64)
            })
            .collect();
        seen
    }

    pub fn with_agent_at(mut self, agent: AgentIndex, cell: Cell) -> Self {
        if let Some(body) = self.bodies.get_mut(agent.0) {
            body.position = cell.into();
        }
        self
    }

    pub fn with_facing(mut self, agent: AgentIndex, facing: Action) -> Self {
        if let Some(body) = self.bodies.get_mut(agent.0) {
            body.facing = facing;
        }
        self
    }

    pub fn with_scared_timer(mut self, agent: AgentIndex, ticks: u32) -> Self {
        if let Some(body) = self.bodies.get_mut(agent.0) {
            body.scared_timer = ticks;
        }
        self
    }

    pub fn with_carrying(mut self, agent: AgentIndex, carrying: u32) -> Self {
        if let Some(body) = self.bodies.get_mut(agent.0) {
            body.carrying = carrying;
        }
        self
    }

    pub fn with_returned(mut self, agent: AgentIndex, returned: u32) -> Self {
        if let Some(body) = self.bodies.get_mut(agent.0) {
            body.returned = returned;
        }
        self
    }

    pub fn with_food(mut self, food: impl IntoIterator<Item = Cell>) -> Self {
        self.food = food.into_iter().collect();
        self
    }

    fn indices(&self) -> impl Iterator<Item = AgentIndex> {
        (0..self.bodies.len()).map(AgentIndex)
    }

    fn is_intruding(&self, agent: AgentIndex, cell: Cell) -> bool {
        self.layout.is_red_side(cell) != agent.is_red()
    }

    fn body_cell(&self, agent: AgentIndex) -> Option<Cell> {
        self.bodies.get(agent.0).map(|b| b.position.nearest_cell())
    }

    fn apply(&mut self, agent: AgentIndex, action: Action) {
        let speed = if self.config.half_steps { 0.5 } else { 1.0 };
        let maze = self.layout.maze();
        let Some(body) = self.bodies.get_mut(agent.0) else {
            return;
        };

        let blocked =
            body.position.is_aligned() && maze.is_wall(body.position.nearest_cell().step(action));
        if !blocked {
            body.position = body.position.advance(action, speed);
        }
        if action != Action::Stop {
            body.facing = action;
        }
        body.scared_timer = body.scared_timer.saturating_sub(1);
        let aligned = body.position.is_aligned();
        self.moves += 1;

        if aligned {
            self.consume(agent);
        }
        self.resolve_collisions(agent);
    }

    fn consume(&mut self, agent: AgentIndex) {
        let Some(cell) = self.body_cell(agent) else {
            return;
        };
        let intruding = self.is_intruding(agent, cell);

        if intruding {
            if self.food.remove(&cell) {
                let body = &mut self.bodies[agent.0];
                body.carrying += 1;
                body.eaten.push(cell);
            }
            if self.capsules.remove(&cell) {
                let scared_time = self.config.scared_time;
                for opp in self.opponents(agent) {
                    if let Some(body) = self.bodies.get_mut(opp.0) {
                        body.scared_timer = scared_time;
                    }
                }
                tracing::debug!(%agent, ?cell, "capsule eaten");
            }
            return;
        }

        let body = &mut self.bodies[agent.0];
        if body.carrying > 0 {
            let delivered = body.carrying;
            body.returned += delivered;
            body.carrying = 0;
            body.eaten.clear();
            let sign = if agent.is_red() { 1 } else { -1 };
            self.score += sign * delivered as i64;
            tracing::debug!(%agent, delivered, red_score = self.score, "food delivered");
        }
    }

    fn resolve_collisions(&mut self, agent: AgentIndex) {
        let Some(me) = self.bodies.get(agent.0).map(|b| b.position) else {
            return;
        };
        let my_cell = me.nearest_cell();

        for opp in self.opponents(agent) {
            if self.hidden.contains(&opp) {
                continue;
            }
            let Some(them) = self.bodies.get(opp.0).map(|b| b.position) else {
                continue;
            };
            if me.manhattan(them) > COLLISION_TOLERANCE {
                continue;
            }

            let i_intrude = self.is_intruding(agent, my_cell);
            let they_intrude = self.is_intruding(opp, them.nearest_cell());
            let (hunter, prey) = match (i_intrude, they_intrude) {
                (true, false) => (opp, agent),
                (false, true) => (agent, opp),
                _ => continue,
            };

            let hunter_scared = self.bodies[hunter.0].scared_timer > 0;
            let captured = if hunter_scared { hunter } else { prey };
            self.respawn(captured);
            if captured == agent {
                break;
            }
        }
    }

    fn respawn(&mut self, agent: AgentIndex) {
        let Some(start) = self.layout.starts().get(agent.0).copied() else {
            return;
        };
        let body = &mut self.bodies[agent.0];
        let dropped = body.eaten.len();
        self.food.extend(body.eaten.drain(..));
        *body = Body {
            returned: body.returned,
            ..Body::at(start)
        };
        tracing::debug!(%agent, dropped, "agent captured");
    }
}

impl GameState for ArenaState {
    fn legal_actions(&self, agent: AgentIndex) -> Vec<Action> {
        let Some(body) = self.bodies.get(agent.0) else {
            return Vec::new();
        };
        // Mid-move agents can only finish the move they started.
        if !body.position.is_aligned() {
            return vec![body.facing];
        }
        self.layout.maze().open_moves(body.position.nearest_cell())
    }

    fn generate_successor(&self, agent: AgentIndex, action: Action) -> Self {
        let mut next = self.clone();
        next.apply(agent, action);
        next
    }

    fn agent_state(&self, agent: AgentIndex) -> AgentObservation {
        let Some(body) = self.bodies.get(agent.0) else {
            return AgentObservation::default();
        };
        AgentObservation {
            position: (!self.hidden.contains(&agent)).then_some(body.position),
            facing: body.facing,
            intruding: self.is_intruding(agent, body.position.nearest_cell()),
            scared_timer: body.scared_timer,
            num_carrying: body.carrying,
            num_returned: body.returned,
        }
    }

    fn score(&self, agent: AgentIndex) -> f64 {
        if agent.is_red() {
            self.score as f64
        } else {
            -(self.score as f64)
        }
    }

    fn opponents(&self, agent: AgentIndex) -> Vec<AgentIndex> {
        self.indices().filter(|a| !a.is_teammate(agent)).collect()
    }

    fn collectible_resources(&self, agent: AgentIndex) -> Vec<Cell> {
        self.food
            .iter()
            .copied()
            .filter(|&c| self.layout.is_red_side(c) != agent.is_red())
            .collect()
    }

    fn defended_resources(&self, agent: AgentIndex) -> Vec<Cell> {
        self.food
            .iter()
            .copied()
            .filter(|&c| self.layout.is_red_side(c) == agent.is_red())
            .collect()
    }

    fn noisy_opponent_distances(&self, agent: AgentIndex) -> Vec<f64> {
        let Some(me) = self.body_cell(agent) else {
            return Vec::new();
        };
        self.opponents(agent)
            .into_iter()
            .filter_map(|opp| {
                let them = self.body_cell(opp)?;
                let stream = ((self.moves as u64) << 8) | opp.stable_id();
                let mut rng =
                    SplitMix64::new(derive_seed(self.config.seed, agent.stable_id(), stream));
                let noise = rng.next_offset(self.config.noise_radius);
                Some((me.manhattan(them) as i64 + noise) as f64)
            })
            .collect()
    }

    fn distancer(&self) -> &dyn MazeDistance {
        &*self.distancer
    }
}
