pub mod entity;
pub mod game;
pub mod page;
pub mod partition;
pub mod schedule;
pub mod statistic;

pub use entity::{Entity, Update};
pub use game::Game;
pub use partition::{GameType, Partition};
pub use schedule::Schedule;
pub use statistic::{BaseStatistic, PlayerStatistic, Statistic, TeamStatistic};
