pub mod ability;
pub mod catalog;
pub mod error;
pub mod points;
pub mod selection;
pub mod sheet;
pub mod skill;

pub use ability::{Ability, AbilityScores, modifier};
pub use catalog::{
    Background, Catalog, Class, FeatureText, NamedText, ProgressionCell, ProgressionRow,
    SizeCategory, SkillChoice, Species,
};
pub use error::{CoreError, CoreErrorCode};
pub use points::{POINT_BUDGET, PointBuyReport, price_allocation, score_cost};
pub use selection::{Biography, CharacterSelection};
pub use sheet::{AbilityLine, DerivedSheet, SkillLine, SpellResource, compute_sheet};
pub use skill::Skill;
