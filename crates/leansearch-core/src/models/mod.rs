pub mod declaration_kind;
pub mod distance_metric;
pub mod name;
pub mod query_result;
pub mod record;

pub use declaration_kind::DeclarationKind;
pub use distance_metric::DistanceMetric;
pub use name::{Name, NameComponent};
pub use query_result::{Neighbor, QueryResult};
pub use record::Record;
