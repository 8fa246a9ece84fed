mod astar;
mod bfs;
mod dfs;
mod dls;
mod random_walk;
mod search_engine;
mod search_statistics;
mod ucs;

pub use astar::AStar;
pub use bfs::BFS;
pub use dfs::DFS;
pub use dls::DLS;
pub use random_walk::RandomWalk;
pub use search_engine::{SearchEngine, SearchEngineName, SearchOptions, SearchResult};
pub use search_statistics::SearchStatistics;
pub use ucs::UCS;

use search_engine::plan_to_goal;
