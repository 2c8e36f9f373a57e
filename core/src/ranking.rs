//! Reducing final states to scouting recommendations.
//!
//! Every category is a plain arg-max over the final state. On ties the
//! first player in roster order wins; with random draws in play that is
//! a deterministic rule, not a meaningful preference.

use crate::{
    player::PlayerStats,
    projection::PlayerProjection,
    rng::RandomSource,
    types::{Month, RunId},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Goals,
    Assists,
    Passing,
    Physical,
    Overall,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Goals,
        Category::Assists,
        Category::Passing,
        Category::Physical,
        Category::Overall,
    ];
}

/// A player's state at the end of a run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectedPlayer {
    pub name:            String,
    pub initial_age:     f64,
    pub final_age:       f64,
    pub stats:           PlayerStats,
    pub composite_score: f64,
}

impl ProjectedPlayer {
    pub fn from_projection<R: RandomSource>(p: &PlayerProjection<R>) -> Self {
        Self {
            name:            p.name.clone(),
            initial_age:     p.initial_age,
            final_age:       p.age,
            stats:           p.stats,
            composite_score: p.composite_score(),
        }
    }

    pub fn value(&self, category: Category) -> f64 {
        match category {
            Category::Goals    => self.stats.goals,
            Category::Assists  => self.stats.assists,
            Category::Passing  => self.stats.pass_accuracy,
            Category::Physical => self.stats.distance,
            Category::Overall  => self.composite_score,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryWinner {
    pub category:  Category,
    /// Roster position of the winner.
    pub index:     usize,
    pub name:      String,
    pub value:     f64,
    pub final_age: f64,
}

/// The outcome of a completed run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimulationResult {
    pub run_id:         RunId,
    pub months:         Month,
    pub seed:           Option<u64>,
    pub players:        Vec<ProjectedPlayer>,
    pub best_scorer:    CategoryWinner,
    pub best_assister:  CategoryWinner,
    pub best_passer:    CategoryWinner,
    pub best_physical:  CategoryWinner,
    pub best_prospect:  CategoryWinner,
}

impl SimulationResult {
    /// Rank `players`. Returns None for an empty slice.
    pub fn rank(
        run_id: RunId,
        months: Month,
        seed: Option<u64>,
        players: Vec<ProjectedPlayer>,
    ) -> Option<Self> {
        let best_scorer   = best_by(&players, Category::Goals)?;
        let best_assister = best_by(&players, Category::Assists)?;
        let best_passer   = best_by(&players, Category::Passing)?;
        let best_physical = best_by(&players, Category::Physical)?;
        let best_prospect = best_by(&players, Category::Overall)?;
        Some(Self {
            run_id,
            months,
            seed,
            players,
            best_scorer,
            best_assister,
            best_passer,
            best_physical,
            best_prospect,
        })
    }

    pub fn winner(&self, category: Category) -> &CategoryWinner {
        match category {
            Category::Goals    => &self.best_scorer,
            Category::Assists  => &self.best_assister,
            Category::Passing  => &self.best_passer,
            Category::Physical => &self.best_physical,
            Category::Overall  => &self.best_prospect,
        }
    }
}

/// First maximum in slice order.
pub fn best_by(players: &[ProjectedPlayer], category: Category) -> Option<CategoryWinner> {
    let mut best: Option<(usize, &ProjectedPlayer)> = None;
    for (index, player) in players.iter().enumerate() {
        let better = match best {
            None => true,
            Some((_, current)) => player.value(category) > current.value(category),
        };
        if better {
            best = Some((index, player));
        }
    }
    best.map(|(index, p)| CategoryWinner {
        category,
        index,
        name: p.name.clone(),
        value: p.value(category),
        final_age: p.final_age,
    })
}
