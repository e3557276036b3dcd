mod clock;
mod place_source;
mod store;

pub use clock::{IClock, SystemClock};
pub use place_source::{DetailOptions, IPlaceSource, PredictionOptions};
pub use store::IKeyValueStore;
