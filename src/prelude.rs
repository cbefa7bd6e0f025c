pub use crate::error::TemplateError;
pub use crate::fixtures::{sample_data, SampleData};
pub use crate::tasks::answer;
pub use crate::utils::{add, greet, parse_count};

#[cfg(feature = "serde")]
pub use serde::{Deserialize, Serialize};
