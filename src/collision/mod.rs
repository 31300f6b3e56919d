mod collision_pair;
mod collision_detector;
mod quadtree;
pub mod narrow_phase;
mod position_resolver;
mod momentum_resolver;

pub use self::collision_pair::CollisionPair;
pub use self::collision_detector::CollisionDetector;
pub use self::quadtree::QuadTree;
pub use self::position_resolver::PositionResolver;
pub use self::momentum_resolver::{MomentumResolver, elastic_exchange};
